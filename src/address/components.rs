use serde::{Deserialize, Serialize};

/// Best-effort breakdown of a postal address, as extracted upstream.
/// Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressComponents {
    pub unit: Option<String>,
    pub house_number: Option<String>,
    pub road: Option<String>,
    pub neighborhood: Option<String>,
    pub city: Option<String>,
    pub district_or_county: Option<String>,
    pub region: Option<String>,
    pub region_code: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub country_code: Option<String>,
}

impl AddressComponents {
    /// Applies `f` to every field, in declaration order.
    pub(crate) fn map_fields<F>(&self, mut f: F) -> AddressComponents
    where
        F: FnMut(&Option<String>) -> Option<String>,
    {
        AddressComponents {
            unit: f(&self.unit),
            house_number: f(&self.house_number),
            road: f(&self.road),
            neighborhood: f(&self.neighborhood),
            city: f(&self.city),
            district_or_county: f(&self.district_or_county),
            region: f(&self.region),
            region_code: f(&self.region_code),
            postal_code: f(&self.postal_code),
            country: f(&self.country),
            country_code: f(&self.country_code),
        }
    }
}

/// What a caller hands to the normalizer: the raw text of the address
/// plus whatever decomposition is available.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressInput {
    #[serde(default)]
    pub raw_address_text: Option<String>,
    #[serde(default)]
    pub components: AddressComponents,
}
