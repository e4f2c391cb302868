//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# Site
title: My Portfolio
title_alt: ''
description: Portfolio and blog
author: John Doe
language: en

# URL
url: http://example.com
path_prefix: /
logo: /logo.png

# Directory
content_dir: content
public_dir: public
static_dir: static

# Listing
preview_limit: 4
index_limit: 100
date_format: MMMM DD, YYYY
render_drafts: false

# Design tokens
theme:
  primary: '#f6993f'
  background: '#161719'
  text: '#dae1e7'
  accent: '#3490dc'

home:
  variant: portfolio
  hero:
    title: Hello, I'm John.
    subtitle: I build things for the web.
  about:
    headline: A short introduction.
    body: A longer bio.
  contact:
    title: Get in touch!
    links:
      - label: GitHub
        url: https://github.com/

blog:
  variant: cards

redirects: []
"#;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir.join("content/blog"))?;
    fs::create_dir_all(target_dir.join("static"))?;

    let config_path = target_dir.join("_config.yml");
    if config_path.exists() {
        anyhow::bail!("{:?} already exists", config_path);
    }
    fs::write(&config_path, DEFAULT_CONFIG)?;

    let today = chrono::Local::now().date_naive();
    let sample_post = format!(
        r#"---
path: "/blog/hello-world"
date: "{}"
title: "Hello World"
description: "The first post on this site"
background: "linear-gradient(to right, SlateBlue 0%, DeepSkyBlue 100%)"
---

Welcome! Edit `content/blog/hello-world.md` and run `folio generate`.
"#,
        today.format("%Y-%m-%d")
    );

    fs::write(target_dir.join("content/blog/hello-world.md"), sample_post)?;

    Ok(())
}
