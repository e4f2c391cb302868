//! Configuration module

mod site;

pub use site::AboutConfig;
pub use site::BlogConfig;
pub use site::BlogIndexVariant;
pub use site::ContactConfig;
pub use site::HeroConfig;
pub use site::HomeConfig;
pub use site::HomeVariant;
pub use site::LinkConfig;
pub use site::PlaceholderConfig;
pub use site::RedirectRoute;
pub use site::SiteConfig;
pub use site::ThemeTokens;
