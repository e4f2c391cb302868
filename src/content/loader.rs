//! Content loader - turns markdown files into content records

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::read_time::{estimate_read_time, excerpt};
use super::{ContentError, ContentRecord, FrontMatter, MarkdownRenderer};
use crate::helpers::output_dir_for;
use crate::Folio;

/// Loads content records from the content directory
pub struct ContentLoader<'a> {
    folio: &'a Folio,
    renderer: MarkdownRenderer,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(folio: &'a Folio) -> Self {
        Self {
            folio,
            renderer: MarkdownRenderer::new(),
        }
    }

    /// Load every record under the content directory, in discovery order.
    ///
    /// Files are discovered in file-name order so repeated builds see the same
    /// sequence. Unreadable files are skipped with a warning; two records
    /// claiming the same path are an error.
    pub fn load_records(&self) -> Result<Vec<ContentRecord>> {
        let content_dir = &self.folio.content_dir;
        if !content_dir.exists() {
            tracing::warn!("Content directory {:?} does not exist", content_dir);
            return Ok(Vec::new());
        }

        let mut records = Vec::new();
        let mut seen: HashMap<String, String> = HashMap::new();

        for entry in WalkDir::new(content_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || !is_markdown_file(path) {
                continue;
            }

            let record = match self.load_record(path) {
                Ok(Some(record)) => record,
                Ok(None) => {
                    tracing::debug!("Skipping draft {:?}", path);
                    continue;
                }
                Err(e) => {
                    tracing::warn!("Failed to load {:?}: {:#}", path, e);
                    continue;
                }
            };

            // "/blog/a" and "/blog/a/" are written to the same file
            let output_dir = output_dir_for(&record.path).to_string();
            if let Some(first) = seen.get(&output_dir) {
                return Err(ContentError::DuplicatePath {
                    path: record.path.clone(),
                    first: first.clone(),
                    second: record.source.clone(),
                }
                .into());
            }
            seen.insert(output_dir, record.source.clone());
            records.push(record);
        }

        Ok(records)
    }

    /// Load a single record, `None` for a draft that should not be rendered
    fn load_record(&self, path: &Path) -> Result<Option<ContentRecord>> {
        let raw = fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
        let (fm, body) = FrontMatter::parse(&raw)?;

        if fm.draft && !self.folio.config.render_drafts {
            return Ok(None);
        }

        let source = path
            .strip_prefix(&self.folio.content_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/");

        let date = match fm.parse_date() {
            Some(date) => date,
            None => {
                if let Some(raw_date) = &fm.date {
                    tracing::warn!("Unrecognized date {:?} in {}", raw_date, source);
                }
                file_modified_date(path)?
            }
        };

        let title = fm.title.unwrap_or_else(|| {
            path.file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("Untitled")
                .to_string()
        });

        let url_path = match fm.path {
            Some(p) => normalize_path(&p),
            None => default_path(&source),
        };

        let content = self.renderer.render(body)?;

        let mut record = ContentRecord::new(
            &source,
            url_path,
            title,
            fm.description.unwrap_or_default(),
            date,
        );
        record.background_style = fm.background;
        record.read_time_minutes =
            estimate_read_time(&content, self.folio.config.words_per_minute);
        record.excerpt = excerpt(&content);
        record.content = content;

        Ok(Some(record))
    }
}

fn file_modified_date(path: &Path) -> Result<NaiveDate> {
    let modified = fs::metadata(path)?
        .modified()
        .map(chrono::DateTime::<Local>::from)
        .unwrap_or_else(|_| Local::now());
    Ok(modified.date_naive())
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

/// Ensure a front-matter path is site-relative with a leading slash
fn normalize_path(path: &str) -> String {
    format!("/{}", path.trim().trim_start_matches('/'))
}

/// Path derived from the source file, e.g. "blog/Hello World.md" -> "/blog/hello-world/"
fn default_path(source: &str) -> String {
    let without_ext = source
        .trim_end_matches(".md")
        .trim_end_matches(".markdown");

    let mut segments: Vec<String> = without_ext
        .split('/')
        .filter(|s| !s.is_empty())
        .map(slug::slugify)
        .collect();

    if segments.last().map(|s| s == "index").unwrap_or(false) {
        segments.pop();
    }

    if segments.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", segments.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use tempfile::TempDir;

    fn site(files: &[(&str, &str)]) -> (TempDir, Folio) {
        let dir = TempDir::new().unwrap();
        for (name, body) in files {
            let path = dir.path().join("content").join(name);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, body).unwrap();
        }
        let folio = Folio::with_config(dir.path(), SiteConfig::default());
        (dir, folio)
    }

    #[test]
    fn test_load_records() {
        let (_dir, folio) = site(&[
            (
                "stripe.md",
                "---\npath: /blog/stripe\ntitle: Stripe\ndescription: Payments\ndate: 2019-03-20\nbackground: \"#fff\"\n---\n\nSome words here.\n",
            ),
            ("notes.txt", "not markdown"),
        ]);

        let records = ContentLoader::new(&folio).load_records().unwrap();
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.id.as_str(), "stripe.md");
        assert_eq!(record.path, "/blog/stripe");
        assert_eq!(record.title, "Stripe");
        assert_eq!(record.description, "Payments");
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2019, 3, 20).unwrap());
        assert_eq!(record.background_style.as_deref(), Some("#fff"));
        assert_eq!(record.read_time_minutes, Some(1));
        assert_eq!(record.excerpt.as_deref(), Some("Some words here."));
        assert!(record.content.contains("<p>Some words here.</p>"));
    }

    #[test]
    fn test_discovery_order_is_file_name_order() {
        let (_dir, folio) = site(&[
            ("b.md", "---\ntitle: B\ndate: 2020-01-01\n---\n"),
            ("a.md", "---\ntitle: A\ndate: 2020-01-01\n---\n"),
            ("c/index.md", "---\ntitle: C\ndate: 2020-01-01\n---\n"),
        ]);

        let records = ContentLoader::new(&folio).load_records().unwrap();
        let titles: Vec<_> = records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
        assert_eq!(records[2].path, "/c/");
        assert_eq!(records[2].read_time_minutes, None);
    }

    #[test]
    fn test_duplicate_paths_are_rejected() {
        let (_dir, folio) = site(&[
            ("one.md", "---\npath: /blog/same\ndate: 2020-01-01\n---\n"),
            ("two.md", "---\npath: blog/same\ndate: 2020-01-02\n---\n"),
        ]);

        let err = ContentLoader::new(&folio).load_records().unwrap_err();
        let err = err.downcast::<ContentError>().unwrap();
        assert_eq!(
            err,
            ContentError::DuplicatePath {
                path: "/blog/same".to_string(),
                first: "one.md".to_string(),
                second: "two.md".to_string(),
            }
        );
    }

    #[test]
    fn test_trailing_slash_does_not_hide_a_duplicate() {
        let (_dir, folio) = site(&[
            ("blog/a.md", "---\ntitle: Derived\ndate: 2020-01-01\n---\n"),
            ("explicit.md", "---\npath: /blog/a\ndate: 2020-01-02\n---\n"),
        ]);

        let err = ContentLoader::new(&folio).load_records().unwrap_err();
        let err = err.downcast::<ContentError>().unwrap();
        assert_eq!(
            err,
            ContentError::DuplicatePath {
                path: "/blog/a".to_string(),
                first: "blog/a.md".to_string(),
                second: "explicit.md".to_string(),
            }
        );
    }

    #[test]
    fn test_drafts_are_skipped() {
        let files = [
            ("draft.md", "---\ntitle: Draft\ndraft: true\ndate: 2020-01-01\n---\n"),
            ("live.md", "---\ntitle: Live\ndate: 2020-01-01\n---\n"),
        ];
        let (_dir, folio) = site(&files);
        let records = ContentLoader::new(&folio).load_records().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Live");

        let (_dir, mut folio) = site(&files);
        folio.config.render_drafts = true;
        assert_eq!(ContentLoader::new(&folio).load_records().unwrap().len(), 2);
    }

    #[test]
    fn test_broken_file_is_skipped() {
        let (_dir, folio) = site(&[
            ("bad.md", "---\ntitle: [unclosed\n---\n"),
            ("good.md", "---\ntitle: Good\ndate: 2020-01-01\n---\n"),
        ]);
        let records = ContentLoader::new(&folio).load_records().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Good");
    }

    #[test]
    fn test_missing_content_dir() {
        let dir = TempDir::new().unwrap();
        let folio = Folio::with_config(dir.path(), SiteConfig::default());
        assert!(ContentLoader::new(&folio).load_records().unwrap().is_empty());
    }

    #[test]
    fn test_default_path() {
        assert_eq!(default_path("blog/Hello World.md"), "/blog/hello-world/");
        assert_eq!(default_path("index.md"), "/");
        assert_eq!(normalize_path(" blog/x "), "/blog/x");
    }
}
