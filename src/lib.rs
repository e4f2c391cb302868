//! folio: a static site generator for a personal portfolio and blog
//!
//! Markdown files with front-matter become content records. Records are
//! ordered and limited by the content query, projected into list view models,
//! and composed into the home page and the blog index.

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;
pub mod pages;
pub mod query;
pub mod redirect;
pub mod server;
pub mod templates;
pub mod view;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// The main Folio application
#[derive(Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Markdown content directory
    pub content_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
    /// Static assets copied verbatim into the output
    pub static_dir: PathBuf,
}

impl Folio {
    /// Create a new Folio instance from a directory, reading `_config.yml`
    /// when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            tracing::debug!("No _config.yml in {:?}, using defaults", base_dir);
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a Folio instance from an already loaded configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let content_dir = base_dir.join(&config.content_dir);
        let public_dir = base_dir.join(&config.public_dir);
        let static_dir = base_dir.join(&config.static_dir);

        Self {
            config,
            base_dir,
            content_dir,
            public_dir,
            static_dir,
        }
    }

    /// Generate the static site
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }

    /// Create a new post
    pub fn new_post(&self, title: &str, path: Option<&str>) -> Result<()> {
        commands::new::run(self, title, path)
    }
}
