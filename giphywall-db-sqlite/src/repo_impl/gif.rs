use super::*;

impl<'a> GifRepo for DbReadOnly<'a> {
    fn create_gif(&self, _gif: &Gif) -> Result<()> {
        unreachable!();
    }
    fn delete_gif(&self, _id: &str) -> Result<usize> {
        unreachable!();
    }

    fn all_gifs(&self) -> Result<Vec<Gif>> {
        all_gifs(&mut self.conn.borrow_mut())
    }
    fn gifs_uploaded_by(&self, user_id: &str) -> Result<Vec<Gif>> {
        gifs_uploaded_by(&mut self.conn.borrow_mut(), user_id)
    }
}

impl<'a> GifRepo for DbReadWrite<'a> {
    fn create_gif(&self, gif: &Gif) -> Result<()> {
        create_gif(&mut self.conn.borrow_mut(), gif)
    }
    fn delete_gif(&self, id: &str) -> Result<usize> {
        delete_gif(&mut self.conn.borrow_mut(), id)
    }

    fn all_gifs(&self) -> Result<Vec<Gif>> {
        all_gifs(&mut self.conn.borrow_mut())
    }
    fn gifs_uploaded_by(&self, user_id: &str) -> Result<Vec<Gif>> {
        gifs_uploaded_by(&mut self.conn.borrow_mut(), user_id)
    }
}

impl<'a> GifRepo for DbConnection<'a> {
    fn create_gif(&self, gif: &Gif) -> Result<()> {
        create_gif(&mut self.conn.borrow_mut(), gif)
    }
    fn delete_gif(&self, id: &str) -> Result<usize> {
        delete_gif(&mut self.conn.borrow_mut(), id)
    }

    fn all_gifs(&self) -> Result<Vec<Gif>> {
        all_gifs(&mut self.conn.borrow_mut())
    }
    fn gifs_uploaded_by(&self, user_id: &str) -> Result<Vec<Gif>> {
        gifs_uploaded_by(&mut self.conn.borrow_mut(), user_id)
    }
}

fn create_gif(conn: &mut SqliteConnection, gif: &Gif) -> Result<()> {
    let new_gif = models::NewGif::from(gif);
    let _count = diesel::insert_into(schema::gifs::table)
        .values(&new_gif)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn delete_gif(conn: &mut SqliteConnection, id: &str) -> Result<usize> {
    use schema::gifs::dsl;
    let count = diesel::delete(dsl::gifs.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert!(count <= 1);
    Ok(count)
}

fn all_gifs(conn: &mut SqliteConnection) -> Result<Vec<Gif>> {
    use schema::gifs::dsl;
    Ok(dsl::gifs
        .order_by(dsl::rowid.desc())
        .load::<models::GifEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn gifs_uploaded_by(conn: &mut SqliteConnection, user_id: &str) -> Result<Vec<Gif>> {
    use schema::gifs::dsl;
    Ok(dsl::gifs
        .filter(dsl::uploaded_by.eq(user_id))
        .order_by(dsl::rowid.desc())
        .load::<models::GifEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}
