use super::prelude::*;
use crate::util::giphy;

#[derive(Debug, Clone, Default)]
pub struct NewGif {
    pub source: String,
    pub caption: Option<String>,
    pub tags: Vec<String>,
    pub uploaded_by: Option<Id>,
}

pub fn add_gif<R: GifRepo>(repo: &R, new_gif: NewGif) -> Result<Gif> {
    let NewGif {
        source,
        caption,
        tags,
        uploaded_by,
    } = new_gif;
    let giphy_id = giphy::extract_gif_id(&source);
    // Only Giphy URLs are normalized, everything else might be a path
    let source = if giphy_id.is_some() {
        giphy::ensure_protocol(&source)
    } else {
        source.trim().to_owned()
    };
    let caption = caption
        .map(|c| c.trim().to_owned())
        .filter(|c| !c.is_empty());
    let gif = Gif {
        id: Id::new(),
        source,
        caption,
        giphy_id,
        tags: normalize_tags(tags),
        uploaded_by,
        created_at: Timestamp::now(),
    };
    log::debug!("Adding new gif: id = {}, source = {}", gif.id, gif.source);
    repo.create_gif(&gif)?;
    Ok(gif)
}

fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim();
        if tag.is_empty() || normalized.iter().any(|t| t == tag) {
            continue;
        }
        normalized.push(tag.to_owned());
    }
    normalized
}

pub fn list_gifs<R: GifRepo>(repo: &R) -> Result<Vec<Gif>> {
    Ok(repo.all_gifs()?)
}

pub fn list_gifs_of_user<R: GifRepo>(repo: &R, user_id: &str) -> Result<Vec<Gif>> {
    Ok(repo.gifs_uploaded_by(user_id)?)
}

pub fn delete_gif<R: GifRepo>(repo: &R, id: &str) -> Result<()> {
    let count = repo.delete_gif(id)?;
    if count == 0 {
        log::debug!("No gif with id = {id} to delete");
    } else {
        log::info!("Deleted gif {id}");
    }
    Ok(())
}
