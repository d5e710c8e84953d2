use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

/// Characters escaped in a URI component: everything but
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
pub const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Messaging deep-link endpoint; the contact number is appended as a path segment.
pub const WHATSAPP_HOST: &str = "https://wa.me";

/// Builder for pre-filled contact links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactLinks {
    number: String,
    default_message: String,
}

impl ContactLinks {
    /// `number` is the international number without `+` or separators.
    pub fn new(number: impl Into<String>, default_message: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            default_message: default_message.into(),
        }
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn default_message(&self) -> &str {
        &self.default_message
    }

    /// Link opening a chat pre-filled with `message` (or the default greeting).
    ///
    /// The message is percent-encoded as a URI component.
    pub fn contact_link(&self, message: Option<&str>) -> String {
        let message = message.unwrap_or(&self.default_message);
        format!(
            "{WHATSAPP_HOST}/{}?text={}",
            self.number,
            utf8_percent_encode(message, URI_COMPONENT)
        )
    }

    /// Quote request for one product: its name, then its page URL on the next line.
    pub fn product_contact_link(&self, product_name: &str, product_url: &str) -> String {
        let message = format!("Hola, quisiera cotizar: {product_name}\n{product_url}");
        self.contact_link(Some(&message))
    }
}
