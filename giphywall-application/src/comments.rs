use super::*;

pub fn add_comment(
    connections: &sqlite::Connections,
    gif_id: Id,
    text: String,
    ai_generated: bool,
) -> Result<Id> {
    let comment = connections.exclusive()?.transaction(|conn| {
        usecases::add_comment(conn, gif_id, text, ai_generated).map_err(|err| {
            log::warn!("Failed to add comment: {err}");
            err
        })
    })?;
    Ok(comment.id)
}

pub fn comment_on_gif<G>(
    connections: &sqlite::Connections,
    generator: &G,
    gif_id: Id,
    content: &str,
) -> Result<Comment>
where
    G: CommentGenerator + ?Sized,
{
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::comment_on_gif(conn, generator, gif_id, content).map_err(|err| {
            log::warn!("Failed to add generated comment: {err}");
            err
        })
    })?)
}

pub fn comments_of_gif(connections: &sqlite::Connections, gif_id: &str) -> Result<Vec<Comment>> {
    Ok(usecases::comments_of_gif(&connections.shared()?, gif_id)?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;
    use giphywall_core::gateways::comment::DogeCommentGenerator;

    #[test]
    fn add_comment_and_load_it() {
        let fixture = BackendFixture::new();
        let gif_id = fixture.add_gif("cat.gif", Some("cat"));
        let id = flows::add_comment(&fixture.db_connections, gif_id.clone(), "nice".into(), true)
            .unwrap();
        let comments = flows::comments_of_gif(&fixture.db_connections, gif_id.as_str()).unwrap();
        assert_eq!(1, comments.len());
        let comment = &comments[0];
        assert_eq!(id, comment.id);
        assert_eq!(gif_id, comment.gif_id);
        assert_eq!("nice", comment.text);
        assert!(comment.ai_generated);
    }

    #[test]
    fn comments_are_ordered_by_creation_time() {
        let fixture = BackendFixture::new();
        let gif_id = fixture.add_gif("cat.gif", None);
        let other_gif_id = fixture.add_gif("dog.gif", None);
        let texts = ["first", "second", "third", "fourth"];
        for text in texts {
            flows::add_comment(&fixture.db_connections, gif_id.clone(), text.into(), false)
                .unwrap();
            flows::add_comment(&fixture.db_connections, other_gif_id.clone(), "x".into(), false)
                .unwrap();
        }
        let comments = flows::comments_of_gif(&fixture.db_connections, gif_id.as_str()).unwrap();
        assert_eq!(
            texts.to_vec(),
            comments.iter().map(|c| c.text.as_str()).collect::<Vec<_>>()
        );
        assert!(comments
            .windows(2)
            .all(|pair| pair[0].created_at <= pair[1].created_at));
    }

    #[test]
    fn comments_of_unknown_gif() {
        let fixture = BackendFixture::new();
        assert!(flows::comments_of_gif(&fixture.db_connections, "unknown")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn comment_on_gif_with_doge_generator() {
        let fixture = BackendFixture::new();
        let gif_id = fixture.add_gif("cat.gif", Some("wow"));
        let comment = flows::comment_on_gif(
            &fixture.db_connections,
            &DogeCommentGenerator,
            gif_id.clone(),
            "wow",
        )
        .unwrap();
        assert!(comment.ai_generated);
        assert_eq!("wow wow such wow much wow very wow", comment.text);
        let comments = flows::comments_of_gif(&fixture.db_connections, gif_id.as_str()).unwrap();
        assert_eq!(vec![comment], comments);
    }
}
