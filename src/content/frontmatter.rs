//! Front-matter parsing

use anyhow::{anyhow, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Front-matter data from a content file
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Site-relative URL of the rendered record
    pub path: Option<String>,
    pub date: Option<String>,
    /// CSS gradient or color token for list cards
    pub background: Option<String>,
    pub draft: bool,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    pub fn parse(content: &str) -> Result<(Self, &str)> {
        let content = content.trim_start();

        if content.starts_with("---") {
            return Self::parse_yaml(content);
        }

        if content.starts_with(";;;") || content.starts_with('{') {
            return Self::parse_json(content);
        }

        Ok((FrontMatter::default(), content))
    }

    fn parse_yaml(content: &str) -> Result<(Self, &str)> {
        let rest = content[3..].trim_start_matches(['\n', '\r']);

        let Some(end_pos) = rest.find("\n---") else {
            // Unterminated fence, the whole file is body
            return Ok((FrontMatter::default(), content));
        };

        let yaml_content = &rest[..end_pos];
        let remaining = rest[end_pos + 4..].trim_start_matches(['\n', '\r']);

        if yaml_content.trim().is_empty() {
            return Ok((FrontMatter::default(), remaining));
        }

        // A leading thematic break followed by prose is not front-matter
        if !yaml_content.lines().any(looks_like_yaml_key) {
            return Ok((FrontMatter::default(), content));
        }

        match serde_yaml::from_str::<FrontMatter>(yaml_content) {
            Ok(fm) => Ok((fm, remaining)),
            Err(e) => Err(anyhow!("Failed to parse YAML front-matter: {}", e)),
        }
    }

    fn parse_json(content: &str) -> Result<(Self, &str)> {
        // ;;; fenced JSON
        if let Some(rest) = content.strip_prefix(";;;") {
            if let Some(end_pos) = rest.find(";;;") {
                let json_content = &rest[..end_pos];
                let remaining = rest[end_pos + 3..].trim_start_matches(['\n', '\r']);

                let fm: FrontMatter = serde_json::from_str(json_content)
                    .map_err(|e| anyhow!("Failed to parse JSON front-matter: {}", e))?;

                return Ok((fm, remaining));
            }
        }

        // Leading JSON object
        if content.starts_with('{') {
            let mut depth = 0;
            let mut end_pos = 0;
            for (i, c) in content.char_indices() {
                match c {
                    '{' => depth += 1,
                    '}' => {
                        depth -= 1;
                        if depth == 0 {
                            end_pos = i + 1;
                            break;
                        }
                    }
                    _ => {}
                }
            }

            if end_pos > 0 {
                let json_content = &content[..end_pos];
                let remaining = content[end_pos..].trim_start_matches(['\n', '\r']);

                let fm: FrontMatter = serde_json::from_str(json_content)
                    .map_err(|e| anyhow!("Failed to parse JSON front-matter: {}", e))?;

                return Ok((fm, remaining));
            }
        }

        Err(anyhow!("Invalid JSON front-matter"))
    }

    /// Parse the date string into a calendar date
    pub fn parse_date(&self) -> Option<NaiveDate> {
        self.date.as_deref().and_then(parse_date_string)
    }
}

/// A `key: value` line, where the key is a plain identifier and not a URL scheme
fn looks_like_yaml_key(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return false;
    }

    let Some(colon_pos) = trimmed.find(':') else {
        return false;
    };
    let key = &trimmed[..colon_pos];
    let is_valid_key = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        && !matches!(key, "http" | "https" | "ftp");

    let after_colon = &trimmed[colon_pos + 1..];
    is_valid_key && (after_colon.is_empty() || after_colon.starts_with(' '))
}

/// Parse a date string in various formats, dropping any time of day
pub(crate) fn parse_date_string(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    // RFC 3339 keeps the calendar date as written
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    None
}
