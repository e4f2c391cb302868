//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub title_alt: String,
    pub description: String,
    pub author: String,
    pub language: String,

    // URL
    pub url: String,
    /// Prefix for all links, "/" when deployed at the domain root
    pub path_prefix: String,
    pub logo: String,

    // Directory
    pub content_dir: String,
    pub public_dir: String,
    pub static_dir: String,

    // Listing
    /// Number of records shown on the home page
    pub preview_limit: i64,
    /// Number of records shown on the blog index, `None` for all of them
    pub index_limit: Option<i64>,
    /// Moment.js-style date pattern used in listings
    pub date_format: String,
    pub render_drafts: bool,
    pub words_per_minute: u32,

    // Presentation
    #[serde(default)]
    pub theme: ThemeTokens,
    #[serde(default)]
    pub home: HomeConfig,
    #[serde(default)]
    pub blog: BlogConfig,

    #[serde(default)]
    pub redirects: Vec<RedirectRoute>,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Folio".to_string(),
            title_alt: String::new(),
            description: String::new(),
            author: "John Doe".to_string(),
            language: "en".to_string(),

            url: "http://example.com".to_string(),
            path_prefix: "/".to_string(),
            logo: "/logo.png".to_string(),

            content_dir: "content".to_string(),
            public_dir: "public".to_string(),
            static_dir: "static".to_string(),

            preview_limit: 4,
            index_limit: Some(100),
            date_format: "MMMM DD, YYYY".to_string(),
            render_drafts: false,
            words_per_minute: 265,

            theme: ThemeTokens::default(),
            home: HomeConfig::default(),
            blog: BlogConfig::default(),

            redirects: Vec::new(),
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {:?}", path))?;
        Ok(config)
    }

    /// Path prefix without a trailing slash ("" at the domain root)
    pub fn real_prefix(&self) -> &str {
        self.path_prefix.trim_end_matches('/')
    }
}

/// Design tokens shared by every rendered page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeTokens {
    pub primary: String,
    pub background: String,
    pub text: String,
    pub accent: String,
    pub font_family: String,
}

impl Default for ThemeTokens {
    fn default() -> Self {
        Self {
            primary: "#f6993f".to_string(),
            background: "#161719".to_string(),
            text: "#dae1e7".to_string(),
            accent: "#3490dc".to_string(),
            font_family: "system-ui, sans-serif".to_string(),
        }
    }
}

/// Named variants of the home page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HomeVariant {
    /// Hero, linked blog preview, about, contact
    #[default]
    Portfolio,
    /// Hero, unlinked blog preview, contact; no bio
    Compact,
}

/// Named variants of the blog index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BlogIndexVariant {
    /// Grid of cards with background styles
    #[default]
    Cards,
    /// Stacked stories with date and excerpt
    Stories,
    /// A single placeholder card, no records listed
    ComingSoon,
}

/// Home page configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeConfig {
    pub variant: HomeVariant,
    pub hero: HeroConfig,
    pub about: AboutConfig,
    pub contact: ContactConfig,
    pub footer: String,
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            variant: HomeVariant::default(),
            hero: HeroConfig::default(),
            about: AboutConfig::default(),
            contact: ContactConfig::default(),
            footer: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub title: String,
    pub subtitle: String,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            title: "Hello, I'm John.".to_string(),
            subtitle: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AboutConfig {
    pub avatar: Option<String>,
    pub headline: String,
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub title: String,
    pub links: Vec<LinkConfig>,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            title: "Get in touch!".to_string(),
            links: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinkConfig {
    pub label: String,
    pub url: String,
}

/// Blog index configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    pub variant: BlogIndexVariant,
    /// Heading override; each variant has its own default
    pub title: Option<String>,
    /// Card shown by the coming-soon variant
    pub placeholder: PlaceholderConfig,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            variant: BlogIndexVariant::default(),
            title: None,
            placeholder: PlaceholderConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaceholderConfig {
    pub title: String,
    pub link: String,
    pub background: Option<String>,
    pub body: String,
}

impl Default for PlaceholderConfig {
    fn default() -> Self {
        Self {
            title: "Coming Soon".to_string(),
            link: "/".to_string(),
            background: Some("linear-gradient(to right, #D4145A 0%, #FBB03B 100%)".to_string()),
            body: "I'll be posting soon.".to_string(),
        }
    }
}

/// A route that immediately sends the visitor elsewhere
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RedirectRoute {
    /// Site-relative route, e.g. "/slides"
    pub from: String,
    /// Absolute URL, or a site-relative path that receives the path prefix
    pub to: String,
}
