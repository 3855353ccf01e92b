use super::*;

impl<'a> CommentRepository for DbReadWrite<'a> {
    fn create_comment(&self, comment: &Comment) -> Result<()> {
        create_comment(&mut self.conn.borrow_mut(), comment)
    }
    fn load_comments_of_gif(&self, gif_id: &str) -> Result<Vec<Comment>> {
        load_comments_of_gif(&mut self.conn.borrow_mut(), gif_id)
    }
}

impl<'a> CommentRepository for DbConnection<'a> {
    fn create_comment(&self, comment: &Comment) -> Result<()> {
        create_comment(&mut self.conn.borrow_mut(), comment)
    }
    fn load_comments_of_gif(&self, gif_id: &str) -> Result<Vec<Comment>> {
        load_comments_of_gif(&mut self.conn.borrow_mut(), gif_id)
    }
}

impl<'a> CommentRepository for DbReadOnly<'a> {
    fn create_comment(&self, _comment: &Comment) -> Result<()> {
        unreachable!();
    }
    fn load_comments_of_gif(&self, gif_id: &str) -> Result<Vec<Comment>> {
        load_comments_of_gif(&mut self.conn.borrow_mut(), gif_id)
    }
}

fn create_comment(conn: &mut SqliteConnection, comment: &Comment) -> Result<()> {
    let new_comment = models::NewComment::from(comment);
    let _count = diesel::insert_into(schema::comments::table)
        .values(&new_comment)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn load_comments_of_gif(conn: &mut SqliteConnection, gif_id: &str) -> Result<Vec<Comment>> {
    use schema::comments::dsl;
    Ok(dsl::comments
        .filter(dsl::gif_id.eq(gif_id))
        // The rowid preserves the insertion order of comments
        // that have been created within the same millisecond
        .order_by((dsl::created_at.asc(), dsl::rowid.asc()))
        .load::<models::CommentEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}
