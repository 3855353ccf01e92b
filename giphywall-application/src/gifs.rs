use super::*;

pub fn add_gif(connections: &sqlite::Connections, new_gif: usecases::NewGif) -> Result<Id> {
    let gif = connections.exclusive()?.transaction(|conn| {
        usecases::add_gif(conn, new_gif).map_err(|err| {
            log::warn!("Failed to add gif: {err}");
            err
        })
    })?;
    log::info!("Added gif {}", gif.id);
    Ok(gif.id)
}

/// Adds a gif and comments on its caption if it has one.
pub fn add_gif_with_comment<G>(
    connections: &sqlite::Connections,
    generator: &G,
    new_gif: usecases::NewGif,
) -> Result<(Id, Option<Comment>)>
where
    G: CommentGenerator + ?Sized,
{
    let (gif, comment) = connections
        .exclusive()?
        .transaction(|conn| {
            let gif = usecases::add_gif(conn, new_gif)?;
            // Blank captions have already been dropped by `add_gif`
            let comment = gif
                .caption
                .as_deref()
                .map(|caption| usecases::comment_on_gif(conn, generator, gif.id.clone(), caption))
                .transpose()?;
            Ok::<_, usecases::Error>((gif, comment))
        })
        .map_err(|err| {
            log::warn!("Failed to add gif with comment: {err}");
            err
        })?;
    log::info!("Added gif {}", gif.id);
    Ok((gif.id, comment))
}

pub fn list_gifs(connections: &sqlite::Connections) -> Result<Vec<Gif>> {
    Ok(usecases::list_gifs(&connections.shared()?)?)
}

pub fn list_gifs_of_user(connections: &sqlite::Connections, user_id: &str) -> Result<Vec<Gif>> {
    Ok(usecases::list_gifs_of_user(&connections.shared()?, user_id)?)
}

pub fn delete_gif(connections: &sqlite::Connections, id: &str) -> Result<()> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::delete_gif(conn, id).map_err(|err| {
            log::warn!("Failed to delete gif {id}: {err}");
            err
        })
    })?)
}
