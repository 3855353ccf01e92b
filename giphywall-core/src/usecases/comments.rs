use super::prelude::*;
use crate::gateways::comment::CommentGenerator;

// The gif is not required to exist. Orphaned comments
// are tolerated and simply never displayed.
pub fn add_comment<R: CommentRepository>(
    repo: &R,
    gif_id: Id,
    text: String,
    ai_generated: bool,
) -> Result<Comment> {
    let comment = Comment {
        id: Id::new(),
        gif_id,
        text,
        ai_generated,
        created_at: Timestamp::now(),
    };
    log::debug!(
        "Adding comment {} to gif {} (ai_generated = {})",
        comment.id,
        comment.gif_id,
        comment.ai_generated
    );
    repo.create_comment(&comment)?;
    Ok(comment)
}

pub fn comment_on_gif<R, G>(repo: &R, generator: &G, gif_id: Id, content: &str) -> Result<Comment>
where
    R: CommentRepository,
    G: CommentGenerator + ?Sized,
{
    let text = generator.generate_comment(content);
    add_comment(repo, gif_id, text, true)
}

pub fn comments_of_gif<R: CommentRepository>(repo: &R, gif_id: &str) -> Result<Vec<Comment>> {
    Ok(repo.load_comments_of_gif(gif_id)?)
}
