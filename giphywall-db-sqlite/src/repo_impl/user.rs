use super::*;
use diesel::sql_types::{Nullable, Text};

diesel::define_sql_function!(fn lower(x: Nullable<Text>) -> Nullable<Text>);

impl<'a> UserRepo for DbReadOnly<'a> {
    fn create_user(&self, _user: &User) -> Result<()> {
        unreachable!();
    }
    fn record_login(&self, _user_id: &str, _at: Timestamp) -> Result<()> {
        unreachable!();
    }

    fn try_get_user(&self, id: &str) -> Result<Option<User>> {
        try_get_user(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_user_by_login_identifier(&self, login_identifier: &str) -> Result<Option<User>> {
        try_get_user_by_login_identifier(&mut self.conn.borrow_mut(), login_identifier)
    }
    fn try_get_user_by_name_or_email(&self, query: &str) -> Result<Option<User>> {
        try_get_user_by_name_or_email(&mut self.conn.borrow_mut(), query)
    }
}

impl<'a> UserRepo for DbReadWrite<'a> {
    fn create_user(&self, user: &User) -> Result<()> {
        create_user(&mut self.conn.borrow_mut(), user)
    }
    fn record_login(&self, user_id: &str, at: Timestamp) -> Result<()> {
        record_login(&mut self.conn.borrow_mut(), user_id, at)
    }

    fn try_get_user(&self, id: &str) -> Result<Option<User>> {
        try_get_user(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_user_by_login_identifier(&self, login_identifier: &str) -> Result<Option<User>> {
        try_get_user_by_login_identifier(&mut self.conn.borrow_mut(), login_identifier)
    }
    fn try_get_user_by_name_or_email(&self, query: &str) -> Result<Option<User>> {
        try_get_user_by_name_or_email(&mut self.conn.borrow_mut(), query)
    }
}

impl<'a> UserRepo for DbConnection<'a> {
    fn create_user(&self, user: &User) -> Result<()> {
        create_user(&mut self.conn.borrow_mut(), user)
    }
    fn record_login(&self, user_id: &str, at: Timestamp) -> Result<()> {
        record_login(&mut self.conn.borrow_mut(), user_id, at)
    }

    fn try_get_user(&self, id: &str) -> Result<Option<User>> {
        try_get_user(&mut self.conn.borrow_mut(), id)
    }
    fn try_get_user_by_login_identifier(&self, login_identifier: &str) -> Result<Option<User>> {
        try_get_user_by_login_identifier(&mut self.conn.borrow_mut(), login_identifier)
    }
    fn try_get_user_by_name_or_email(&self, query: &str) -> Result<Option<User>> {
        try_get_user_by_name_or_email(&mut self.conn.borrow_mut(), query)
    }
}

fn create_user(conn: &mut SqliteConnection, u: &User) -> Result<()> {
    let new_user = models::NewUser::from(u);
    diesel::insert_into(schema::users::table)
        .values(&new_user)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn record_login(conn: &mut SqliteConnection, user_id: &str, at: Timestamp) -> Result<()> {
    use schema::users::dsl;
    let count = diesel::update(dsl::users.filter(dsl::id.eq(user_id)))
        .set(dsl::last_login_at.eq(Some(at.as_millis())))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    debug_assert_eq!(1, count);
    Ok(())
}

fn try_get_user(conn: &mut SqliteConnection, id: &str) -> Result<Option<User>> {
    use schema::users::dsl;
    Ok(dsl::users
        .filter(dsl::id.eq(id))
        .first::<models::UserEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}

fn try_get_user_by_login_identifier(
    conn: &mut SqliteConnection,
    login_identifier: &str,
) -> Result<Option<User>> {
    use schema::users::dsl;
    Ok(dsl::users
        .filter(dsl::login_identifier.eq(login_identifier))
        .first::<models::UserEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}

fn try_get_user_by_name_or_email(
    conn: &mut SqliteConnection,
    query: &str,
) -> Result<Option<User>> {
    use schema::users::dsl;
    Ok(dsl::users
        .filter(
            lower(dsl::username)
                .eq(lower(query))
                .or(lower(dsl::email).eq(lower(query)))
                .or(lower(dsl::display_name.nullable()).eq(lower(query))),
        )
        .order_by(dsl::rowid.asc())
        .first::<models::UserEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}
