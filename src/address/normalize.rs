//! Deterministic address normalization for geocoding.
//!
//! The query and its alternates never carry the postal code or the
//! country. Alternates are ordered, unique and never repeat the query.

use serde::{Deserialize, Serialize};

use crate::address::components::{AddressComponents, AddressInput};
use crate::address::quality::AddressQuality;
use crate::utils::{collapse_whitespace, non_blank, ExistsExtension};

const MIN_QUERY_PARTS: usize = 2;
const REGION_CODE_MIN_LETTERS: usize = 2;
const REGION_CODE_MAX_LETTERS: usize = 3;
const REGION_CODE_MAX_CHARS: usize = 6;

const PART_SEPARATOR: &str = ", ";
const NOTE_SEPARATOR: &str = "; ";

/// Normalized address, ready to be handed to a geocoder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressNormalized {
    raw_address_text: String,
    components: AddressComponents,
    query: Option<String>,
    alternates: Vec<String>,
    quality: AddressQuality,
    notes: Option<String>,
}

impl AddressNormalized {
    pub fn raw_address_text(&self) -> &str {
        &self.raw_address_text
    }

    pub fn components(&self) -> &AddressComponents {
        &self.components
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn alternates(&self) -> &[String] {
        &self.alternates
    }

    pub fn quality(&self) -> AddressQuality {
        self.quality
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// The query followed by its alternates, in the order they should be tried.
    pub fn candidates(&self) -> impl Iterator<Item = &str> {
        self.query
            .iter()
            .chain(self.alternates.iter())
            .map(String::as_str)
    }
}

impl AddressInput {
    pub fn normalize(&self) -> AddressNormalized {
        normalize(self.raw_address_text.as_deref(), &self.components)
    }
}

/// Builds the canonical geocoding query, its fallbacks, a quality tier and
/// diagnostic notes out of a loosely structured address.
///
/// Never fails: missing data only lowers the quality and drops the query.
pub fn normalize(raw_address_text: Option<&str>, components: &AddressComponents) -> AddressNormalized {
    let raw_address_text = raw_address_text.map(str::trim).unwrap_or("").to_owned();
    let components = normalize_components(components);

    let street = build_street(components.house_number.as_deref(), components.road.as_deref());
    let street = street.as_deref();
    let city = components.city.as_deref();
    let region = components
        .region_code
        .as_deref()
        .or_else(|| components.region.as_deref());

    let query = build_query(&[street, city, region]);
    let alternates = match query.as_deref() {
        Some(query) => unique_alternates(
            query,
            vec![
                build_query(&[street, city]),
                build_query(&[components.road.as_deref(), city, region]),
            ],
        ),
        None => Vec::new(),
    };
    let quality = AddressQuality::score(street, city, region);
    let notes = build_notes(&components, street, city, region);

    AddressNormalized {
        raw_address_text,
        components,
        query,
        alternates,
        quality,
        notes,
    }
}

fn normalize_components(components: &AddressComponents) -> AddressComponents {
    let mut cleaned =
        components.map_fields(|value| non_blank(value.as_deref().map(collapse_whitespace)));

    let from_region_code = region_code_of(cleaned.region_code.as_deref());
    let from_region = region_code_of(cleaned.region.as_deref());

    if let Some(code) = from_region_code.or_else(|| from_region.clone()) {
        cleaned.region_code = Some(code);
    }
    // "B.C." in region and "BC" in region_code would be the same thing twice.
    if from_region.is_some() {
        cleaned.region = None;
    }

    cleaned
}

/// Reads a region abbreviation such as "B.C.", "n.y" or "ON" as an
/// uppercase code. Longer names ("Ontario") are left alone.
fn region_code_of(value: Option<&str>) -> Option<String> {
    let value = value?.trim();
    let letters: String = value.chars().filter(char::is_ascii_alphabetic).collect();

    let letter_count_ok =
        letters.len() >= REGION_CODE_MIN_LETTERS && letters.len() <= REGION_CODE_MAX_LETTERS;
    let looks_abbreviated =
        value.contains('.') || value.chars().count() <= REGION_CODE_MAX_CHARS;

    if letter_count_ok && looks_abbreviated {
        Some(letters.to_ascii_uppercase())
    } else {
        None
    }
}

fn build_street(house_number: Option<&str>, road: Option<&str>) -> Option<String> {
    match (house_number, road) {
        (Some(number), Some(road)) => Some(format!("{} {}", number, road)),
        (None, Some(road)) => Some(road.to_owned()),
        _ => None,
    }
}

/// Joins the present parts, or gives up when a single fragment is all
/// that is left.
fn build_query(parts: &[Option<&str>]) -> Option<String> {
    let kept: Vec<&str> = parts.iter().filter_map(|part| *part).collect();
    if kept.len() < MIN_QUERY_PARTS {
        return None;
    }
    Some(kept.join(PART_SEPARATOR))
}

fn unique_alternates(query: &str, candidates: Vec<Option<String>>) -> Vec<String> {
    let mut alternates: Vec<String> = Vec::with_capacity(candidates.len());
    for candidate in candidates.into_iter().flatten() {
        if candidate != query && !alternates.contains(&candidate) {
            alternates.push(candidate);
        }
    }
    alternates
}

fn build_notes(
    components: &AddressComponents,
    street: Option<&str>,
    city: Option<&str>,
    region: Option<&str>,
) -> Option<String> {
    let mut notes = Vec::new();
    if street.is_none() {
        notes.push("missing street");
    }
    if city.is_none() {
        notes.push("missing city");
    }
    if region.is_none() {
        notes.push("missing region");
    }
    if components
        .postal_code
        .exists(|code| code.chars().any(|c| c.is_ascii_lowercase()))
    {
        notes.push("postal code has lowercase");
    }

    if notes.is_empty() {
        None
    } else {
        Some(notes.join(NOTE_SEPARATOR))
    }
}
