use super::prelude::*;

pub fn get_user_by_login_identifier<R: UserRepo>(
    repo: &R,
    login_identifier: &str,
) -> Result<Option<User>> {
    Ok(repo.try_get_user_by_login_identifier(login_identifier)?)
}

pub fn get_user<R: UserRepo>(repo: &R, id: &str) -> Result<Option<User>> {
    Ok(repo.try_get_user(id)?)
}

/// Looks up a user by username, email or display name.
pub fn find_user<R: UserRepo>(repo: &R, query: &str) -> Result<Option<User>> {
    let query = query.trim();
    if query.is_empty() {
        return Ok(None);
    }
    Ok(repo.try_get_user_by_name_or_email(query)?)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use giphywall_entities::builders::Builder;

    #[test]
    fn unknown_login_identifier() {
        let db = MockDb::default();
        assert!(get_user_by_login_identifier(&db, "local:nobody")
            .unwrap()
            .is_none());
    }

    #[test]
    fn get_user_by_id_and_login_identifier() {
        let db = MockDb::default();
        let user = User::build()
            .login_identifier("local:alice")
            .display_name("Alice")
            .finish();
        db.users.borrow_mut().push(user.clone());
        assert_eq!(
            Some(&user),
            get_user_by_login_identifier(&db, "local:alice")
                .unwrap()
                .as_ref()
        );
        assert_eq!(Some(user), get_user(&db, db.users.borrow()[0].id.as_str()).unwrap());
        assert!(get_user(&db, "unknown").unwrap().is_none());
    }

    #[test]
    fn find_user_by_name_or_email() {
        let db = MockDb::default();
        db.users.borrow_mut().push(
            User::build()
                .login_identifier("local:alice")
                .display_name("Alice Liddell")
                .username("alice")
                .email("alice@example.com")
                .finish(),
        );
        for query in ["alice", " ALICE@example.com ", "alice liddell"] {
            let user = find_user(&db, query).unwrap().unwrap();
            assert_eq!("local:alice", user.login_identifier.as_str());
        }
        assert!(find_user(&db, "bob").unwrap().is_none());
        assert!(find_user(&db, "   ").unwrap().is_none());
    }

    #[test]
    fn find_user_folds_only_ascii_case() {
        let db = MockDb::default();
        db.users.borrow_mut().push(
            User::build()
                .login_identifier("local:aelice")
                .display_name("älice")
                .finish(),
        );
        assert!(find_user(&db, "äLICE").unwrap().is_some());
        assert!(find_user(&db, "ÄLICE").unwrap().is_none());
    }
}
