use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub login_identifier: LoginIdentifier,
    pub display_name: String,
    pub username: Option<String>,
    pub email: Option<String>,
}

pub fn create_new_user<R: UserRepo>(repo: &R, u: NewUser) -> Result<User> {
    let NewUser {
        login_identifier,
        display_name,
        username,
        email,
    } = u;
    if repo
        .try_get_user_by_login_identifier(login_identifier.as_str())?
        .is_some()
    {
        return Err(Error::UserExists);
    }
    let new_user = User {
        id: Id::new(),
        login_identifier,
        display_name,
        username,
        email,
        created_at: Timestamp::now(),
        last_login_at: None,
    };
    log::debug!(
        "Creating new user: login identifier = {}",
        new_user.login_identifier
    );
    repo.create_user(&new_user).map_err(|err| match err {
        // Lost a race against a concurrent insert
        RepoError::AlreadyExists => Error::UserExists,
        err => err.into(),
    })?;
    Ok(new_user)
}

#[cfg(test)]
mod tests {

    use super::{super::tests::MockDb, *};

    fn new_user(login_identifier: &str, display_name: &str) -> NewUser {
        NewUser {
            login_identifier: login_identifier.parse().unwrap(),
            display_name: display_name.into(),
            username: None,
            email: None,
        }
    }

    #[test]
    fn create_two_users() {
        let db = MockDb::default();
        let alice = create_new_user(&db, new_user("local:alice", "Alice")).unwrap();
        let bob = create_new_user(&db, new_user("local:bob", "Bob")).unwrap();
        assert_ne!(alice.id, bob.id);
        assert_eq!("local:alice", alice.login_identifier.as_str());
        assert_eq!("Alice", alice.display_name);
        assert!(alice.last_login_at.is_none());
        assert_eq!(2, db.users.borrow().len());
    }

    #[test]
    fn create_user_with_existing_login_identifier() {
        let db = MockDb::default();
        assert!(create_new_user(&db, new_user("local:alice", "Alice")).is_ok());
        match create_new_user(&db, new_user("local:alice", "Alice2")).err().unwrap() {
            Error::UserExists => {
                // ok
            }
            _ => panic!("invalid error"),
        }
        assert_eq!(1, db.users.borrow().len());
        assert_eq!("Alice", db.users.borrow()[0].display_name);
    }

    // Loses the race against a concurrent insert: the lookup misses
    // the existing user, but the unique constraint rejects the insert.
    struct ConcurrentInsert(MockDb);

    impl UserRepo for ConcurrentInsert {
        fn create_user(&self, _user: &User) -> std::result::Result<(), RepoError> {
            Err(RepoError::AlreadyExists)
        }
        fn record_login(&self, user_id: &str, at: Timestamp) -> std::result::Result<(), RepoError> {
            self.0.record_login(user_id, at)
        }
        fn try_get_user(&self, id: &str) -> std::result::Result<Option<User>, RepoError> {
            self.0.try_get_user(id)
        }
        fn try_get_user_by_login_identifier(
            &self,
            _login_identifier: &str,
        ) -> std::result::Result<Option<User>, RepoError> {
            Ok(None)
        }
        fn try_get_user_by_name_or_email(
            &self,
            query: &str,
        ) -> std::result::Result<Option<User>, RepoError> {
            self.0.try_get_user_by_name_or_email(query)
        }
    }

    #[test]
    fn create_user_rejected_by_unique_constraint() {
        let db = ConcurrentInsert(MockDb::default());
        assert!(matches!(
            create_new_user(&db, new_user("local:alice", "Alice")),
            Err(Error::UserExists)
        ));
        assert!(db.0.users.borrow().is_empty());
    }
}
