//! Receipt data as returned by the LLM parsing step. It is only trusted
//! once it has been deserialized into these types and validated.

use std::fmt::Formatter;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::address::{AddressComponents, AddressInput};

const DEFAULT_CURRENCY: &str = "CAD";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptItem {
    pub name: String,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub price: Option<f64>,
}

/// Tax, tip and other lines that are not items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptCharge {
    pub label: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedReceipt {
    pub vendor: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub address_components: Option<AddressComponents>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub purchased_at: Option<String>,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub subtotal: Option<f64>,
    pub total: f64,
    #[serde(default)]
    pub raw_text: Option<String>,
    #[serde(default)]
    pub items: Vec<ReceiptItem>,
    #[serde(default)]
    pub charges: Vec<ReceiptCharge>,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_owned()
}

#[derive(Debug)]
pub enum ReceiptError {
    Json(serde_json::Error),
    MissingVendor,
    InvalidTotal(f64),
    InvalidPurchaseDate(String),
}

impl std::fmt::Display for ReceiptError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            ReceiptError::Json(inner) => write!(f, "Malformed receipt: {}", inner),
            ReceiptError::MissingVendor => write!(f, "Receipt has no vendor"),
            ReceiptError::InvalidTotal(total) => write!(f, "Receipt total is not a number: {}", total),
            ReceiptError::InvalidPurchaseDate(date) => {
                write!(f, "Receipt purchase date is not an ISO date: {:?}", date)
            },
        }
    }
}

impl std::error::Error for ReceiptError {}

impl From<serde_json::Error> for ReceiptError {
    fn from(error: serde_json::Error) -> Self {
        ReceiptError::Json(error)
    }
}

impl ParsedReceipt {
    pub fn from_json(json: &str) -> Result<ParsedReceipt, ReceiptError> {
        let receipt: ParsedReceipt = serde_json::from_str(json)?;
        receipt.validate()?;
        Ok(receipt)
    }

    pub fn validate(&self) -> Result<(), ReceiptError> {
        if self.vendor.trim().is_empty() {
            return Err(ReceiptError::MissingVendor);
        }
        if !self.total.is_finite() {
            return Err(ReceiptError::InvalidTotal(self.total));
        }
        if let Some(date) = &self.purchased_at {
            let valid = DateTime::parse_from_rfc3339(date).is_ok()
                || NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok();
            if !valid {
                return Err(ReceiptError::InvalidPurchaseDate(date.clone()));
            }
        }
        Ok(())
    }

    /// The receipt's address, ready for the normalizer. A receipt without
    /// a decomposition yields an all-absent component set.
    pub fn address_input(&self) -> AddressInput {
        AddressInput {
            raw_address_text: self.address.clone(),
            components: self.address_components.clone().unwrap_or_default(),
        }
    }
}
