//! Page composition - combines listings with the configured page sections
//!
//! The home page and the blog index both read through the same content query
//! and projector; they differ only in limit and presentation variant.

use serde::Serialize;

use crate::config::{
    AboutConfig, BlogIndexVariant, ContactConfig, HeroConfig, HomeVariant, PlaceholderConfig,
    SiteConfig,
};
use crate::content::ContentRecord;
use crate::helpers::format_date;
use crate::query::{get_records, QueryError};
use crate::view::{project_all, DateFormat};

pub use crate::view::ListViewModel;

/// Site-relative route of the blog index
pub const BLOG_INDEX_PATH: &str = "/blog/";

/// The landing page
#[derive(Debug, Clone, Serialize)]
pub struct HomePage {
    pub variant: HomeVariant,
    pub hero: HeroConfig,
    /// Link target of the listing heading, when the heading is a link
    pub blog_link: Option<String>,
    pub projects: Vec<ListViewModel>,
    /// Bio section, absent in variants without one
    pub about: Option<AboutConfig>,
    pub contact: ContactConfig,
    pub footer: String,
}

/// The blog index
#[derive(Debug, Clone, Serialize)]
pub struct BlogIndexPage {
    pub variant: BlogIndexVariant,
    pub title: String,
    pub posts: Vec<ListViewModel>,
    /// Card shown instead of posts by the coming-soon variant
    pub placeholder: Option<PlaceholderConfig>,
    pub contact: Option<ContactConfig>,
}

/// A single rendered record
#[derive(Debug, Clone, Serialize)]
pub struct PostPage {
    pub title: String,
    pub description: String,
    pub path: String,
    pub date: String,
    pub read_time_minutes: Option<u32>,
    pub background_style: Option<String>,
    pub content: String,
}

/// Compose the home page with a preview of the most recent records
pub fn compose_home(
    config: &SiteConfig,
    records: &[ContentRecord],
) -> Result<HomePage, QueryError> {
    let format = DateFormat::new(&config.date_format);
    let preview = get_records(records, Some(config.preview_limit))?;
    let home = &config.home;

    let (blog_link, about) = match home.variant {
        HomeVariant::Portfolio => (
            Some(BLOG_INDEX_PATH.to_string()),
            Some(home.about.clone()),
        ),
        HomeVariant::Compact => (None, None),
    };

    Ok(HomePage {
        variant: home.variant,
        hero: home.hero.clone(),
        blog_link,
        projects: project_all(preview, &format),
        about,
        contact: home.contact.clone(),
        footer: home.footer.clone(),
    })
}

/// Compose the blog index listing every record up to the index limit
pub fn compose_blog_index(
    config: &SiteConfig,
    records: &[ContentRecord],
) -> Result<BlogIndexPage, QueryError> {
    let blog = &config.blog;
    let title = blog
        .title
        .clone()
        .unwrap_or_else(|| default_blog_title(blog.variant).to_string());

    if blog.variant == BlogIndexVariant::ComingSoon {
        return Ok(BlogIndexPage {
            variant: blog.variant,
            title,
            posts: Vec::new(),
            placeholder: Some(blog.placeholder.clone()),
            contact: Some(config.home.contact.clone()),
        });
    }

    let format = DateFormat::new(&config.date_format);
    let ordered = get_records(records, config.index_limit)?;

    Ok(BlogIndexPage {
        variant: blog.variant,
        title,
        posts: project_all(ordered, &format),
        placeholder: None,
        contact: None,
    })
}

/// Compose the page for one record
pub fn compose_post(config: &SiteConfig, record: &ContentRecord) -> PostPage {
    PostPage {
        title: record.title.clone(),
        description: record.description.clone(),
        path: record.path.clone(),
        date: format_date(&record.date, &config.date_format),
        read_time_minutes: record.read_time_minutes,
        background_style: record.background_style.clone(),
        content: record.content.clone(),
    }
}

fn default_blog_title(variant: BlogIndexVariant) -> &'static str {
    match variant {
        BlogIndexVariant::Cards | BlogIndexVariant::ComingSoon => "Blog",
        BlogIndexVariant::Stories => "Latest Stories",
    }
}
