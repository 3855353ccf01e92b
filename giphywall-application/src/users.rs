use super::*;

pub fn create_user(connections: &sqlite::Connections, new_user: usecases::NewUser) -> Result<User> {
    let user = connections.exclusive()?.transaction(|conn| {
        usecases::create_new_user(conn, new_user).map_err(|err| {
            log::warn!("Failed to create new user: {err}");
            err
        })
    })?;
    log::info!("Created user {} ({})", user.id, user.login_identifier);
    Ok(user)
}

pub fn get_user_by_login_identifier(
    connections: &sqlite::Connections,
    login_identifier: &str,
) -> Result<Option<User>> {
    Ok(usecases::get_user_by_login_identifier(
        &connections.shared()?,
        login_identifier,
    )?)
}

pub fn get_user(connections: &sqlite::Connections, id: &str) -> Result<Option<User>> {
    Ok(usecases::get_user(&connections.shared()?, id)?)
}

pub fn find_user(connections: &sqlite::Connections, query: &str) -> Result<Option<User>> {
    Ok(usecases::find_user(&connections.shared()?, query)?)
}

pub fn login_local_user(
    connections: &sqlite::Connections,
    name: &str,
    display_name: Option<&str>,
) -> Result<User> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::login_local_user(conn, name, display_name).map_err(|err| {
            log::warn!("Failed to sign in local user '{name}': {err}");
            err
        })
    })?)
}
