use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::geocode::error::GeocodeError;

lazy_static! {
    static ref ZERO_WIDTH: Regex = Regex::new(r"[\x{200B}-\x{200D}\x{FEFF}]")
        .expect("Could not create regex");
    static ref NOT_WORD_OR_SPACE: Regex = Regex::new(r"[^\p{L}\p{N}\s]")
        .expect("Could not create regex");
    static ref WHITESPACE: Regex = Regex::new(r"\s+")
        .expect("Could not create regex");
}

/// One entry of a Nominatim `format=jsonv2` search response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NominatimResponse {
    pub place_id: i64,
    #[serde(default)]
    pub licence: String,
    pub osm_type: String,
    pub osm_id: i64,
    pub boundingbox: [String; 4],
    pub lat: String,
    pub lon: String,
    pub display_name: String,
    #[serde(default)]
    pub class: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub addresstype: String,
    #[serde(default)]
    pub importance: f64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub place_rank: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
    pub display_name: String,
    pub address: String,
    pub place_id: i64,
    pub bounding_box: [f64; 4],
}

/// A geocoded place, as stored alongside receipts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub osm_ref: String,
    pub name: String,
    pub address: String,
    pub normalized_address: Option<String>,
    pub lat: f64,
    pub lon: f64,
}

/// Folds an address into a comparable form: NFKC, lowercase, letters,
/// digits and single spaces only. Works for any script.
pub fn normalize_display_address(address: Option<&str>) -> Option<String> {
    let address = address.filter(|a| !a.is_empty())?;

    let folded: String = address.nfkc().collect::<String>().to_lowercase();
    let folded = ZERO_WIDTH.replace_all(&folded, "");
    let folded = NOT_WORD_OR_SPACE.replace_all(&folded, " ");
    let folded = WHITESPACE.replace_all(&folded, " ");

    Some(folded.trim().to_owned())
}

pub fn to_geo_location(response: &NominatimResponse) -> Result<GeoLocation, GeocodeError> {
    let mut bounding_box = [0.0; 4];
    for (slot, value) in bounding_box.iter_mut().zip(response.boundingbox.iter()) {
        *slot = parse_coordinate("boundingbox", value)?;
    }

    Ok(GeoLocation {
        lat: parse_coordinate("lat", &response.lat)?,
        lon: parse_coordinate("lon", &response.lon)?,
        display_name: response.name.clone().unwrap_or_default(),
        address: response.display_name.clone(),
        place_id: response.place_id,
        bounding_box,
    })
}

pub fn to_place(response: &NominatimResponse) -> Result<Place, GeocodeError> {
    Ok(Place {
        osm_ref: format!("{}:{}", response.osm_type, response.osm_id),
        name: response.name.clone().unwrap_or_default(),
        address: response.display_name.clone(),
        normalized_address: normalize_display_address(Some(&response.display_name)),
        lat: parse_coordinate("lat", &response.lat)?,
        lon: parse_coordinate("lon", &response.lon)?,
    })
}

fn parse_coordinate(field: &'static str, value: &str) -> Result<f64, GeocodeError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| GeocodeError::InvalidCoordinate { field, value: value.to_owned() })
}
