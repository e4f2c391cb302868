//! URL helper functions

use crate::config::SiteConfig;

/// Whether a link points off-site
pub fn is_external(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//")
}

/// Prepend the configured path prefix to a site-relative path. External URLs
/// are returned unchanged.
///
/// # Examples
/// ```ignore
/// url_for(&config, "/blog/") // -> "/portfolio/blog/"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    if is_external(path) {
        return path.to_string();
    }

    let prefix = config.real_prefix();
    let path = path.trim_start_matches('/');

    format!("{}/{}", prefix, path)
}

/// Directory under the output root that serves a site-relative path
pub fn output_dir_for(path: &str) -> &str {
    path.trim_matches('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.url = "https://example.com/".to_string();
        config.path_prefix = "/portfolio/".to_string();
        config
    }

    #[test]
    fn test_url_for() {
        let config = test_config();
        assert_eq!(url_for(&config, "/blog/"), "/portfolio/blog/");
        assert_eq!(url_for(&config, "deck.pdf"), "/portfolio/deck.pdf");
        assert_eq!(url_for(&config, "/"), "/portfolio/");
        assert_eq!(
            url_for(&config, "https://twitter.com/x"),
            "https://twitter.com/x"
        );
    }

    #[test]
    fn test_url_for_at_root() {
        let config = SiteConfig::default();
        assert_eq!(url_for(&config, "/blog/"), "/blog/");
        assert_eq!(url_for(&config, ""), "/");
    }

    #[test]
    fn test_output_dir_for() {
        assert_eq!(output_dir_for("/blog/first-post/"), "blog/first-post");
        assert_eq!(output_dir_for("/"), "");
    }
}
