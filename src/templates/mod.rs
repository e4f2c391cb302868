//! Built-in site templates using the Tera template engine
//!
//! Templates are embedded in the binary. Design tokens arrive through the
//! render context, never through global state.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::config::{SiteConfig, ThemeTokens};
use crate::helpers::{date_iso, parse_formatted_date, url_for};

/// Template renderer with the embedded site templates
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new(config: &SiteConfig) -> Result<Self> {
        let mut tera = Tera::default();

        // Values are escaped explicitly with `| escape`; URLs must stay intact
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("site/layout.html")),
            ("home.html", include_str!("site/home.html")),
            ("blog_cards.html", include_str!("site/blog_cards.html")),
            ("blog_stories.html", include_str!("site/blog_stories.html")),
            (
                "blog_coming_soon.html",
                include_str!("site/blog_coming_soon.html"),
            ),
            ("post.html", include_str!("site/post.html")),
            ("redirect.html", include_str!("site/redirect.html")),
            ("partials/card.html", include_str!("site/partials/card.html")),
            (
                "partials/contact.html",
                include_str!("site/partials/contact.html"),
            ),
        ])?;

        let prefix_config = config.clone();
        tera.register_filter(
            "url_for",
            move |value: &tera::Value, _: &HashMap<String, tera::Value>| {
                let path = tera::try_get_value!("url_for", "value", String, value);
                Ok(tera::Value::String(url_for(&prefix_config, &path)))
            },
        );
        let date_format = config.date_format.clone();
        tera.register_filter(
            "iso_date",
            move |value: &tera::Value, _: &HashMap<String, tera::Value>| {
                iso_date(value, &date_format)
            },
        );

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Tera filter: turn a listing date back into YYYY-MM-DD for `<time datetime>`
fn iso_date(value: &tera::Value, date_format: &str) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("iso_date", "value", String, value);
    match parse_formatted_date(&s, date_format) {
        Some(date) => Ok(tera::Value::String(date_iso(&date))),
        None => Ok(tera::Value::String(s)),
    }
}

/// Site-wide values available to every template
#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub title: String,
    pub title_alt: String,
    pub description: String,
    pub author: String,
    pub language: String,
    pub url: String,
    /// Site icon, site-relative or absolute
    pub logo: String,
}

impl SiteData {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            title: config.title.clone(),
            title_alt: config.title_alt.clone(),
            description: config.description.clone(),
            author: config.author.clone(),
            language: config.language.clone(),
            url: config.url.clone(),
            logo: config.logo.clone(),
        }
    }
}

/// Build the context shared by every page: site data and design tokens
pub fn base_context(site: &SiteData, theme: &ThemeTokens, current_path: &str) -> Context {
    let mut context = Context::new();
    context.insert("site", site);
    context.insert("theme", theme);
    context.insert("current_path", current_path);
    context
}
