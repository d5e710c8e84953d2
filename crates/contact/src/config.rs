//! Site configuration.
//!
//! Defaults carry the Grupo HCN deployment. A handful of deployment-specific
//! values can be overridden from the environment:
//!
//! | variable | field |
//! |---|---|
//! | `HCN_SITE_ORIGIN` | `origin` |
//! | `HCN_BASE_PATH` | `base_path` |
//! | `HCN_WHATSAPP_NUMBER` | `whatsapp.number` |
//! | `HCN_WHATSAPP_MESSAGE` | `whatsapp.default_message` |

use serde::{Deserialize, Serialize};
use tracing::debug;

use hcn_core::{DomainError, DomainResult};

use crate::link::ContactLinks;
use crate::paths::BasePath;

pub const ENV_SITE_ORIGIN: &str = "HCN_SITE_ORIGIN";
pub const ENV_BASE_PATH: &str = "HCN_BASE_PATH";
pub const ENV_WHATSAPP_NUMBER: &str = "HCN_WHATSAPP_NUMBER";
pub const ENV_WHATSAPP_MESSAGE: &str = "HCN_WHATSAPP_MESSAGE";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhatsAppConfig {
    /// International number, digits only.
    pub number: String,
    pub default_message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub facebook: String,
    pub instagram: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub name: String,
    pub tagline: String,
    pub description: String,
    /// Scheme + host the site is published on, without path.
    pub origin: String,
    pub base_path: BasePath,
    pub phone: String,
    pub phone_display: String,
    pub phone2: String,
    pub phone2_display: String,
    pub email: String,
    pub address: String,
    pub schedule: String,
    pub whatsapp: WhatsAppConfig,
    pub social: SocialLinks,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Grupo HCN".to_string(),
            tagline: "Especialistas en solución y control de agua".to_string(),
            description: "Catálogo de productos de ferretería especializada en válvulas, conexiones, tuberías y accesorios para instalaciones hidráulicas y sanitarias."
                .to_string(),
            origin: "https://GRUPO-HCN.github.io".to_string(),
            base_path: BasePath::new("/Sitio-web/").unwrap_or_default(),
            phone: "+51900452663".to_string(),
            phone_display: "900 452 663".to_string(),
            phone2: "+51906002585".to_string(),
            phone2_display: "906 002 585".to_string(),
            email: "inoxhcnresistenciaenecero20@gmail.com".to_string(),
            address: "Av. Argentina 778 \"Centro comercial el Reloj\" Int. 1048 Lima - Lima"
                .to_string(),
            schedule: "Lunes a Viernes: 8:00 - 18:00 | Sábados: 9:00 - 14:00".to_string(),
            whatsapp: WhatsAppConfig {
                number: "51900452663".to_string(),
                default_message: "Hola, quisiera cotizar productos de su catálogo.".to_string(),
            },
            social: SocialLinks {
                facebook: "#".to_string(),
                instagram: "#".to_string(),
            },
        }
    }
}

impl SiteConfig {
    /// Defaults overlaid with the process environment, validated.
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with whatever `lookup` returns, validated.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DomainResult<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(origin) = get(ENV_SITE_ORIGIN) {
            debug!(%origin, "site origin overridden");
            config.origin = origin;
        }
        if let Some(base) = get(ENV_BASE_PATH) {
            debug!(%base, "base path overridden");
            config.base_path = BasePath::new(base)?;
        }
        if let Some(number) = get(ENV_WHATSAPP_NUMBER) {
            debug!(%number, "whatsapp number overridden");
            config.whatsapp.number = number;
        }
        if let Some(message) = get(ENV_WHATSAPP_MESSAGE) {
            config.whatsapp.default_message = message;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DomainResult<()> {
        let number = &self.whatsapp.number;
        if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
            return Err(DomainError::validation(format!(
                "whatsapp number `{number}` must be digits only"
            )));
        }
        if self.whatsapp.default_message.trim().is_empty() {
            return Err(DomainError::validation("whatsapp default message cannot be empty"));
        }
        let origin = &self.origin;
        let host = origin
            .strip_prefix("https://")
            .or_else(|| origin.strip_prefix("http://"));
        match host {
            Some(host) if !host.is_empty() && !host.contains('/') => Ok(()),
            _ => Err(DomainError::validation(format!(
                "site origin `{origin}` must be scheme + host without a path"
            ))),
        }
    }

    pub fn contact_links(&self) -> ContactLinks {
        ContactLinks::new(&self.whatsapp.number, &self.whatsapp.default_message)
    }

    /// Absolute URL of an internal path, base path included.
    pub fn absolute_url(&self, path: &str) -> String {
        format!("{}{}", self.origin, self.base_path.url(path))
    }

    /// Public home page URL.
    pub fn site_url(&self) -> String {
        self.absolute_url("/")
    }

    pub fn product_page_url(&self, slug: &str) -> String {
        format!("{}{}", self.origin, self.base_path.product(slug))
    }

    pub fn category_page_url(&self, slug: &str) -> String {
        format!("{}{}", self.origin, self.base_path.category(slug))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_are_valid() {
        let config = SiteConfig::default();
        config.validate().unwrap();
        assert_eq!(config.site_url(), "https://GRUPO-HCN.github.io/Sitio-web/");
        assert_eq!(config.contact_links().number(), "51900452663");
    }

    #[test]
    fn empty_environment_keeps_defaults() {
        let config = SiteConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn environment_overrides_deployment_values() {
        let config = SiteConfig::from_lookup(lookup_from(&[
            (ENV_SITE_ORIGIN, "https://hcn.pe"),
            (ENV_BASE_PATH, "/"),
            (ENV_WHATSAPP_NUMBER, "51906002585"),
            (ENV_WHATSAPP_MESSAGE, "Hola"),
        ]))
        .unwrap();

        assert_eq!(config.site_url(), "https://hcn.pe/");
        assert_eq!(
            config.product_page_url("tee-pvc-pvc-1-039"),
            "https://hcn.pe/productos/tee-pvc-pvc-1-039"
        );
        assert_eq!(
            config.contact_links().contact_link(None),
            "https://wa.me/51906002585?text=Hola"
        );
    }

    #[test]
    fn blank_overrides_are_ignored() {
        let config =
            SiteConfig::from_lookup(lookup_from(&[(ENV_WHATSAPP_NUMBER, "  ")])).unwrap();
        assert_eq!(config.whatsapp.number, "51900452663");
    }

    #[test]
    fn invalid_overrides_are_rejected() {
        let bad_number =
            SiteConfig::from_lookup(lookup_from(&[(ENV_WHATSAPP_NUMBER, "+51 900")]));
        assert!(matches!(bad_number, Err(DomainError::Validation(_))));

        let bad_base = SiteConfig::from_lookup(lookup_from(&[(ENV_BASE_PATH, "Sitio-web")]));
        assert!(matches!(bad_base, Err(DomainError::Validation(_))));

        let bad_origin =
            SiteConfig::from_lookup(lookup_from(&[(ENV_SITE_ORIGIN, "hcn.pe/x")]));
        assert!(matches!(bad_origin, Err(DomainError::Validation(_))));
    }

    #[test]
    fn page_urls_include_base_path() {
        let config = SiteConfig::default();
        assert_eq!(
            config.category_page_url("valvulas"),
            "https://GRUPO-HCN.github.io/Sitio-web/categorias/valvulas"
        );
        assert_eq!(
            config.absolute_url("/contacto"),
            "https://GRUPO-HCN.github.io/Sitio-web/contacto"
        );
    }

    #[test]
    fn round_trips_through_json() {
        let json = serde_json::to_value(SiteConfig::default()).unwrap();
        assert_eq!(json["basePath"], "/Sitio-web/");
        assert_eq!(
            json["whatsapp"]["defaultMessage"],
            "Hola, quisiera cotizar productos de su catálogo."
        );

        let back: SiteConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back, SiteConfig::default());
    }
}
