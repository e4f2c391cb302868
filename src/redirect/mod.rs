//! Redirect routes
//!
//! A redirect is resolved into an instruction; writing it out is left to the
//! generator.

use serde::Serialize;

use crate::config::{RedirectRoute, SiteConfig};
use crate::helpers::{is_external, url_for};

/// Send a visitor arriving at `route` to `location`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedirectInstruction {
    /// Site-relative route that triggers the redirect
    pub route: String,
    /// Final location, prefixed when site-relative
    pub location: String,
}

impl RedirectInstruction {
    pub fn resolve(config: &SiteConfig, route: &RedirectRoute) -> Self {
        let location = if is_external(&route.to) {
            route.to.clone()
        } else {
            url_for(config, &route.to)
        };

        Self {
            route: format!("/{}", route.from.trim_matches('/')),
            location,
        }
    }
}

/// Resolve every configured redirect
pub fn resolve_all(config: &SiteConfig) -> Vec<RedirectInstruction> {
    config
        .redirects
        .iter()
        .map(|route| RedirectInstruction::resolve(config, route))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(from: &str, to: &str) -> RedirectRoute {
        RedirectRoute {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    #[test]
    fn test_external_target_passes_through() {
        let mut config = SiteConfig::default();
        config.path_prefix = "/portfolio".to_string();
        let instruction = RedirectInstruction::resolve(
            &config,
            &route("/slides/", "https://docs.example.com/deck?start=false"),
        );
        assert_eq!(instruction.route, "/slides");
        assert_eq!(instruction.location, "https://docs.example.com/deck?start=false");
    }

    #[test]
    fn test_relative_target_gets_prefix() {
        let mut config = SiteConfig::default();
        config.path_prefix = "/portfolio/".to_string();
        let instruction =
            RedirectInstruction::resolve(&config, &route("ecstatic", "/ecstatic-commerce.pdf"));
        assert_eq!(instruction.route, "/ecstatic");
        assert_eq!(instruction.location, "/portfolio/ecstatic-commerce.pdf");
    }

    #[test]
    fn test_resolve_all() {
        let mut config = SiteConfig::default();
        config.redirects = vec![route("/a", "/b"), route("/c", "https://d.example")];
        let all = resolve_all(&config);
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].location, "/b");
    }
}
