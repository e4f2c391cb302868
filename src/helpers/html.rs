//! HTML and text helpers

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Strip HTML tags from a string
pub fn strip_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_tag = false;

    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' => {
                in_tag = false;
                // Keep block boundaries from gluing words together
                result.push(' ');
            }
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
}

/// Count words in plain text; each CJK ideograph counts as a word
pub fn count_words(text: &str) -> usize {
    let mut count = 0;
    let mut in_word = false;

    for c in text.chars() {
        if is_cjk(c) {
            count += 1;
            in_word = false;
        } else if c.is_alphanumeric() {
            if !in_word {
                in_word = true;
                count += 1;
            }
        } else if c.is_whitespace() {
            in_word = false;
        }
    }

    count
}

fn is_cjk(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
}

/// Cut text to at most `length` characters on a word boundary, marking the cut
/// with an ellipsis
pub fn prune(s: &str, length: usize) -> String {
    if s.chars().count() <= length {
        return s.to_string();
    }

    let head: String = s.chars().take(length).collect();
    let cut = match head.rfind(char::is_whitespace) {
        Some(pos) if pos > 0 => &head[..pos],
        _ => head.as_str(),
    };

    format!("{}…", cut.trim_end_matches(|c: char| c.is_whitespace() || c.is_ascii_punctuation()))
}
