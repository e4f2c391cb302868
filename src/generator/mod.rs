//! Generator module - writes the composed pages as static HTML files

use anyhow::{Context as _, Result};
use std::fs;
use std::path::{Path, PathBuf};

use tera::Context;
use walkdir::WalkDir;

use crate::config::BlogIndexVariant;
use crate::content::ContentRecord;
use crate::helpers::output_dir_for;
use crate::pages::{self, BLOG_INDEX_PATH};
use crate::redirect::{self, RedirectInstruction};
use crate::templates::{base_context, SiteData, TemplateRenderer};
use crate::Folio;

/// Static site generator using Tera templates
pub struct Generator {
    folio: Folio,
    renderer: TemplateRenderer,
    site: SiteData,
}

impl Generator {
    /// Create a new generator
    pub fn new(folio: &Folio) -> Result<Self> {
        let renderer = TemplateRenderer::new(&folio.config)?;
        let site = SiteData::from_config(&folio.config);

        Ok(Self {
            folio: folio.clone(),
            renderer,
            site,
        })
    }

    /// Generate the entire site from the loaded records
    pub fn generate(&self, records: &[ContentRecord]) -> Result<()> {
        fs::create_dir_all(&self.folio.public_dir)?;

        self.copy_static_assets()?;

        self.generate_home(records)?;
        self.generate_blog_index(records)?;
        self.generate_posts(records)?;
        self.generate_redirects()?;

        Ok(())
    }

    fn context(&self, current_path: &str) -> Context {
        base_context(&self.site, &self.folio.config.theme, current_path)
    }

    fn generate_home(&self, records: &[ContentRecord]) -> Result<()> {
        let home = pages::compose_home(&self.folio.config, records)
            .context("Failed to compose the home page")?;

        let mut context = self.context("/");
        context.insert("page", &home);

        let html = self.renderer.render("home.html", &context)?;
        self.write_page("/", &html)
    }

    fn generate_blog_index(&self, records: &[ContentRecord]) -> Result<()> {
        let index = pages::compose_blog_index(&self.folio.config, records)
            .context("Failed to compose the blog index")?;

        let template = match index.variant {
            BlogIndexVariant::Cards => "blog_cards.html",
            BlogIndexVariant::Stories => "blog_stories.html",
            BlogIndexVariant::ComingSoon => "blog_coming_soon.html",
        };

        let mut context = self.context(BLOG_INDEX_PATH);
        context.insert("page", &index);

        let html = self.renderer.render(template, &context)?;
        self.write_page(BLOG_INDEX_PATH, &html)
    }

    fn generate_posts(&self, records: &[ContentRecord]) -> Result<()> {
        for record in records {
            let post = pages::compose_post(&self.folio.config, record);

            let mut context = self.context(&record.path);
            context.insert("page", &post);

            let html = self
                .renderer
                .render("post.html", &context)
                .with_context(|| format!("Failed to render {}", record.source))?;
            self.write_page(&record.path, &html)?;
        }

        Ok(())
    }

    fn generate_redirects(&self) -> Result<()> {
        for instruction in redirect::resolve_all(&self.folio.config) {
            self.write_redirect(&instruction)?;
        }
        Ok(())
    }

    fn write_redirect(&self, instruction: &RedirectInstruction) -> Result<()> {
        let mut context = self.context(&instruction.route);
        context.insert("redirect", instruction);

        let html = self.renderer.render("redirect.html", &context)?;
        self.write_page(&instruction.route, &html)?;
        tracing::debug!("Redirect {} -> {}", instruction.route, instruction.location);
        Ok(())
    }

    /// Write `html` as the index document of a site-relative route
    fn write_page(&self, route: &str, html: &str) -> Result<()> {
        let output_path = self.output_path(route);
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&output_path, html)
            .with_context(|| format!("Failed to write {:?}", output_path))?;
        tracing::debug!("Generated: {:?}", output_path);
        Ok(())
    }

    fn output_path(&self, route: &str) -> PathBuf {
        let dir = output_dir_for(route);
        if dir.is_empty() {
            self.folio.public_dir.join("index.html")
        } else {
            self.folio.public_dir.join(dir).join("index.html")
        }
    }

    /// Copy the static directory into the output as-is
    fn copy_static_assets(&self) -> Result<()> {
        let static_dir = &self.folio.static_dir;
        if !static_dir.exists() {
            return Ok(());
        }

        for entry in WalkDir::new(static_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let relative = path.strip_prefix(static_dir)?;
            copy_file(path, &self.folio.public_dir.join(relative))?;
        }

        Ok(())
    }
}

fn copy_file(from: &Path, to: &Path) -> Result<()> {
    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(from, to).with_context(|| format!("Failed to copy {:?}", from))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RedirectRoute, SiteConfig};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn records() -> Vec<ContentRecord> {
        (1..=5)
            .map(|day| {
                let mut record = ContentRecord::new(
                    &format!("post-{}.md", day),
                    format!("/blog/post-{}", day),
                    format!("Post {}", day),
                    "",
                    NaiveDate::from_ymd_opt(2020, 1, day).unwrap(),
                );
                record.content = format!("<p>Body {}</p>", day);
                record
            })
            .collect()
    }

    fn read(dir: &TempDir, path: &str) -> String {
        fs::read_to_string(dir.path().join("public").join(path)).unwrap()
    }

    #[test]
    fn test_generate_site() {
        let dir = TempDir::new().unwrap();
        let mut config = SiteConfig::default();
        config.redirects = vec![RedirectRoute {
            from: "/slides".to_string(),
            to: "https://docs.example.com/deck".to_string(),
        }];
        fs::create_dir_all(dir.path().join("static/img")).unwrap();
        fs::write(dir.path().join("static/img/avatar.jpg"), b"jpg").unwrap();

        let folio = Folio::with_config(dir.path(), config);
        Generator::new(&folio).unwrap().generate(&records()).unwrap();

        let home = read(&dir, "index.html");
        assert!(home.contains("Post 5"));
        assert!(home.contains("Post 2"));
        assert!(!home.contains("Post 1"));

        let blog = read(&dir, "blog/index.html");
        assert!(blog.contains("Post 1"));
        assert!(blog.find("Post 5").unwrap() < blog.find("Post 1").unwrap());

        let post = read(&dir, "blog/post-3/index.html");
        assert!(post.contains("<p>Body 3</p>"));
        assert!(post.contains("January 03, 2020"));

        let slides = read(&dir, "slides/index.html");
        assert!(slides.contains("url=https:&#x2F;&#x2F;docs.example.com&#x2F;deck"));
        assert!(slides.contains(r#"replace("https://docs.example.com/deck")"#));
        assert!(slides.contains("Redirecting..."));

        assert_eq!(read(&dir, "img/avatar.jpg"), "jpg");
    }

    #[test]
    fn test_negative_limit_fails_the_build() {
        let dir = TempDir::new().unwrap();
        let mut config = SiteConfig::default();
        config.index_limit = Some(-2);

        let folio = Folio::with_config(dir.path(), config);
        let err = Generator::new(&folio)
            .unwrap()
            .generate(&records())
            .unwrap_err();
        assert!(format!("{:#}", err).contains("invalid argument"));
    }
}
