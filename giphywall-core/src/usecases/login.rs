use super::{create_new_user::*, prelude::*};

/// Signs in with a local account that is created on first use.
pub fn login_local_user<R: UserRepo>(
    repo: &R,
    name: &str,
    display_name: Option<&str>,
) -> Result<User> {
    let login_identifier = LoginIdentifier::local(name)?;
    let mut user = match repo.try_get_user_by_login_identifier(login_identifier.as_str())? {
        Some(user) => user,
        None => {
            let name = name.trim();
            let new_user = NewUser {
                login_identifier,
                display_name: display_name
                    .map(str::trim)
                    .filter(|n| !n.is_empty())
                    .unwrap_or(name)
                    .to_owned(),
                username: Some(name.to_owned()),
                email: None,
            };
            log::info!("Creating local account on first login");
            create_new_user(repo, new_user)?
        }
    };
    let now = Timestamp::now();
    repo.record_login(user.id.as_str(), now)?;
    user.last_login_at = Some(now);
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    #[test]
    fn first_login_creates_user() {
        let db = MockDb::default();
        let user = login_local_user(&db, "alice", None).unwrap();
        assert_eq!("local:alice", user.login_identifier.as_str());
        assert_eq!("alice", user.display_name);
        assert_eq!(Some("alice"), user.username.as_deref());
        assert!(user.last_login_at.is_some());
        assert_eq!(db.users.borrow()[0].last_login_at, user.last_login_at);
    }

    #[test]
    fn repeated_login_returns_same_user() {
        let db = MockDb::default();
        let first = login_local_user(&db, "alice", Some("Alice")).unwrap();
        let second = login_local_user(&db, " alice ", Some("Someone else")).unwrap();
        assert_eq!(first.id, second.id);
        assert_eq!("Alice", second.display_name);
        assert_eq!(1, db.users.borrow().len());
    }

    #[test]
    fn login_without_name() {
        let db = MockDb::default();
        assert!(matches!(
            login_local_user(&db, "  ", None),
            Err(Error::LoginIdentifier)
        ));
    }
}
