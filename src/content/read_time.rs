//! Reading time and excerpt estimation

use crate::helpers::{count_words, prune, strip_html};

/// Characters kept in a listing excerpt
pub const EXCERPT_LENGTH: usize = 400;

/// Estimate minutes needed to read rendered HTML, rounding to the nearest
/// minute with a floor of one. Empty bodies have no estimate.
pub fn estimate_read_time(html: &str, words_per_minute: u32) -> Option<u32> {
    if words_per_minute == 0 {
        return None;
    }

    let words = count_words(&strip_html(html));
    if words == 0 {
        return None;
    }

    let minutes = (words as f64 / words_per_minute as f64).round() as u32;
    Some(minutes.max(1))
}

/// Plain-text excerpt of rendered HTML
pub fn excerpt(html: &str) -> Option<String> {
    let text = strip_html(html);
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if text.is_empty() {
        None
    } else {
        Some(prune(&text, EXCERPT_LENGTH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        format!("<p>{}</p>", vec!["word"; n].join(" "))
    }

    #[test]
    fn test_short_post_reads_in_one_minute() {
        assert_eq!(estimate_read_time(&words(10), 265), Some(1));
    }

    #[test]
    fn test_rounds_to_nearest_minute() {
        assert_eq!(estimate_read_time(&words(265 * 3), 265), Some(3));
        assert_eq!(estimate_read_time(&words(265 * 3 + 140), 265), Some(4));
        assert_eq!(estimate_read_time(&words(265 * 3 + 120), 265), Some(3));
    }

    #[test]
    fn test_empty_body_has_no_estimate() {
        assert_eq!(estimate_read_time("", 265), None);
        assert_eq!(estimate_read_time("<p></p>", 265), None);
        assert_eq!(estimate_read_time(&words(100), 0), None);
    }

    #[test]
    fn test_excerpt_collapses_whitespace() {
        let html = "<h1>Title</h1>\n<p>First   line\nsecond</p>";
        assert_eq!(excerpt(html).as_deref(), Some("Title First line second"));
        assert_eq!(excerpt("<p> </p>"), None);
    }

    #[test]
    fn test_excerpt_is_pruned() {
        let excerpt = excerpt(&words(500)).unwrap();
        assert!(excerpt.chars().count() <= EXCERPT_LENGTH + 1);
        assert!(excerpt.ends_with('…'));
    }
}
