use std::fmt::Formatter;

use serde::{Deserialize, Serialize};

use crate::utils::ExistsExtension;

/// Confidence tier of a normalized address, based on which structural
/// parts (street, city, region) were available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressQuality {
    High,
    Medium,
    Low,
}

impl AddressQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressQuality::High => "high",
            AddressQuality::Medium => "medium",
            AddressQuality::Low => "low",
        }
    }

    pub(crate) fn score(street: Option<&str>, city: Option<&str>, region: Option<&str>) -> Self {
        let has_street_number = street.exists(|s| s.chars().any(|c| c.is_ascii_digit()));

        if has_street_number && city.is_some() && region.is_some() {
            return AddressQuality::High;
        }

        let present = [street, city, region].iter().filter(|p| p.is_some()).count();
        if present >= 2 {
            AddressQuality::Medium
        } else {
            AddressQuality::Low
        }
    }
}

impl std::fmt::Display for AddressQuality {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
