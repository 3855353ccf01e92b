use crate::text::split_text_into_lowercase_words;

/// Turns some content, e.g. the caption of a gif, into a comment.
///
/// Implementations may call out to an external text generation
/// service. Callers only rely on this signature.
pub trait CommentGenerator {
    fn generate_comment(&self, content: &str) -> String;
}

impl<F> CommentGenerator for F
where
    F: Fn(&str) -> String,
{
    fn generate_comment(&self, content: &str) -> String {
        self(content)
    }
}

const FILLER_WORDS: [&str; 4] = ["wow", "such", "much", "very"];
const INTENSIFIERS: [&str; 3] = ["such", "much", "very"];
const FALLBACK_WORD: &str = "wow";
const MAX_PICKS: usize = 6;
const MIN_WORD_LEN: usize = 3;

/// Offline generator that writes doge-style comments.
#[derive(Debug, Clone, Copy, Default)]
pub struct DogeCommentGenerator;

impl CommentGenerator for DogeCommentGenerator {
    fn generate_comment(&self, content: &str) -> String {
        let words: Vec<_> = split_text_into_lowercase_words(content)
            .into_iter()
            .filter(|w| w.chars().count() >= MIN_WORD_LEN)
            .collect();
        let topic = words.first().map(String::as_str).unwrap_or(FALLBACK_WORD);
        words
            .iter()
            .map(String::as_str)
            .chain(FILLER_WORDS)
            .take(MAX_PICKS)
            .map(|pick| {
                if INTENSIFIERS.contains(&pick) {
                    format!("{pick} {topic}")
                } else {
                    pick.to_owned()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_doge_comment_from_single_word() {
        assert_eq!(
            "wow wow such wow much wow very wow",
            DogeCommentGenerator.generate_comment("wow")
        );
    }

    #[test]
    fn generate_doge_comment_is_deterministic() {
        let first = DogeCommentGenerator.generate_comment("A cat on a skateboard");
        let second = DogeCommentGenerator.generate_comment("A cat on a skateboard");
        assert_eq!(first, second);
        assert_eq!("cat skateboard wow such cat much cat very cat", first);
    }

    #[test]
    fn generate_doge_comment_without_words() {
        assert_eq!(
            "wow such wow much wow very wow",
            DogeCommentGenerator.generate_comment("a b ?!")
        );
    }

    #[test]
    fn generate_doge_comment_limits_picks() {
        assert_eq!(
            "dogs running through fields chasing balls",
            DogeCommentGenerator.generate_comment("Dogs running through fields, chasing balls and sticks")
        );
    }

    #[test]
    fn intensifiers_in_content_are_expanded() {
        assert_eq!(
            "such such wow such such much such very such",
            DogeCommentGenerator.generate_comment("such")
        );
    }

    #[test]
    fn closures_are_comment_generators() {
        let shout = |content: &str| content.to_uppercase();
        assert_eq!("WOW", shout.generate_comment("wow"));
    }
}
