//! Create a new post

use anyhow::Result;
use serde::Serialize;
use std::fs;

use crate::Folio;

/// Front-matter written for a freshly created post
#[derive(Serialize)]
struct NewPostFrontMatter {
    path: String,
    date: String,
    title: String,
    description: String,
}

/// Create a new post under the content directory, returning its path
pub fn create_post(folio: &Folio, title: &str, path: Option<&str>) -> Result<std::path::PathBuf> {
    let today = chrono::Local::now().date_naive();
    let slug = slug::slugify(title);
    if slug.is_empty() {
        anyhow::bail!("Title {:?} produces an empty file name", title);
    }

    let target_dir = folio.content_dir.join("blog");
    fs::create_dir_all(&target_dir)?;

    let file_path = target_dir.join(format!("{}.md", slug));
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let url_path = path
        .map(|p| format!("/{}", p.trim_start_matches('/')))
        .unwrap_or_else(|| format!("/blog/{}", slug));

    let front_matter = NewPostFrontMatter {
        path: url_path,
        date: today.format("%Y-%m-%d").to_string(),
        title: title.to_string(),
        description: String::new(),
    };
    let content = format!("---\n{}---\n", serde_yaml::to_string(&front_matter)?);

    fs::write(&file_path, content)?;
    tracing::info!("Created: {:?}", file_path);

    Ok(file_path)
}

/// Run the new command
pub fn run(folio: &Folio, title: &str, path: Option<&str>) -> Result<()> {
    let file_path = create_post(folio, title, path)?;
    println!("Created: {:?}", file_path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::loader::ContentLoader;
    use tempfile::TempDir;

    #[test]
    fn test_new_post_round_trips_through_loader() {
        let dir = TempDir::new().unwrap();
        let folio = Folio::with_config(dir.path(), SiteConfig::default());

        let file = create_post(&folio, "Say \"Hello\" World", None).unwrap();
        assert!(file.ends_with("blog/say-hello-world.md"));

        let records = ContentLoader::new(&folio).load_records().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Say \"Hello\" World");
        assert_eq!(records[0].path, "/blog/say-hello-world");

        create_post(&folio, r"Regex \d+ tricks", None).unwrap();
        create_post(&folio, "Colons: a #1 guide", None).unwrap();
        let records = ContentLoader::new(&folio).load_records().unwrap();
        let titles: Vec<_> = records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(records.len(), 3);
        assert!(titles.contains(&r"Regex \d+ tricks"));
        assert!(titles.contains(&"Colons: a #1 guide"));
    }

    #[test]
    fn test_existing_post_is_not_overwritten() {
        let dir = TempDir::new().unwrap();
        let folio = Folio::with_config(dir.path(), SiteConfig::default());
        create_post(&folio, "Twice", Some("writing/twice")).unwrap();
        assert!(create_post(&folio, "Twice", None).is_err());
    }
}
