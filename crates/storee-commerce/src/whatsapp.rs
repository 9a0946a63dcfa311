//! WhatsApp deep links for orders and enquiries.
//!
//! Nothing is sent from the server. The shopper follows a `wa.me` link
//! with the message pre-filled and sends it from their own phone.

use serde::{Deserialize, Serialize};
use storee_core::SiteConfig;

use crate::error::CommerceError;
use crate::pricing::Selection;

/// Delivery area used when the shopper did not pick one.
pub const AREA_NOT_SPECIFIED: &str = "Not specified";

const WA_ME: &str = "https://wa.me";

/// Destination of every link: the store's number and the name it greets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhatsAppLink {
    number: String,
    brand: String,
}

impl WhatsAppLink {
    /// `number` in international form, digits only.
    pub fn new(number: impl Into<String>, brand: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            brand: brand.into(),
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.whatsapp.number.as_str(), config.brand.as_str())
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    /// A chat link with `message` pre-filled.
    pub fn url(&self, message: &str) -> String {
        format!(
            "{}/{}?text={}",
            WA_ME,
            self.number,
            urlencoding::encode(message)
        )
    }

    /// A chat link with no text, for the floating button.
    pub fn chat_url(&self) -> String {
        format!("{}/{}", WA_ME, self.number)
    }

    pub fn order_url(&self, order: &OrderRequest) -> String {
        self.url(&order.message(&self.brand))
    }

    pub fn contact_url(&self, contact: &ContactRequest) -> String {
        self.url(&contact.message(&self.brand))
    }
}

/// Ordering one product from its detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub product_name: String,
    pub material: String,
    /// Selection summary, `Default` when nothing was chosen.
    pub variants: String,
    /// Delivery area; empty means not specified.
    #[serde(default)]
    pub area: String,
}

impl OrderRequest {
    pub fn new(
        product_name: impl Into<String>,
        material: impl Into<String>,
        selection: &Selection,
        area: Option<&str>,
    ) -> Self {
        Self {
            product_name: product_name.into(),
            material: material.into(),
            variants: selection.summary(),
            area: area.unwrap_or_default().to_string(),
        }
    }

    /// The area as it appears in the message.
    pub fn area_or_default(&self) -> &str {
        if self.area.trim().is_empty() {
            AREA_NOT_SPECIFIED
        } else {
            &self.area
        }
    }

    pub fn message(&self, brand: &str) -> String {
        format!(
            "Hello {}, I want to order: {}. Material: {}. Variants: {}. Please confirm delivery to: {}.",
            brand,
            self.product_name,
            self.material,
            self.variants,
            self.area_or_default()
        )
    }
}

/// The contact page form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: String,
}

impl ContactRequest {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            message: message.into(),
        }
    }

    /// Read the form from an `application/x-www-form-urlencoded` body.
    pub fn from_form(body: &str) -> Self {
        let params = storee_core::QueryParams::parse(body);
        Self {
            name: params.get("name").unwrap_or_default().to_string(),
            phone: params.get("phone").unwrap_or_default().to_string(),
            message: params.get("message").unwrap_or_default().to_string(),
        }
    }

    /// Every field is required.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let missing: Vec<&str> = [
            ("name", &self.name),
            ("phone", &self.phone),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(CommerceError::ValidationError(format!(
                "missing {}",
                missing.join(", ")
            )))
        }
    }

    pub fn message(&self, brand: &str) -> String {
        format!(
            "Hello {}!\n\nName: {}\nPhone: {}\nMessage: {}",
            brand, self.name, self.phone, self.message
        )
    }
}
