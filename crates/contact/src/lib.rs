//! Contact links and site configuration.
//!
//! Builds the pre-filled messaging deep-links shared from the storefront and
//! carries the deployment settings (public origin, base path, contact number)
//! they depend on. Pure string construction: nothing here touches the network.

pub mod config;
pub mod link;
pub mod paths;

pub use config::{SiteConfig, SocialLinks, WhatsAppConfig};
pub use link::{ContactLinks, URI_COMPONENT, WHATSAPP_HOST};
pub use paths::BasePath;
