use std::future::Future;

use log::{debug, info};

use crate::address::AddressNormalized;
use crate::geocode::error::GeocodeError;
use crate::location::NominatimResponse;

pub mod error;
pub mod nominatim;

pub use nominatim::NominatimClient;

#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeHit {
    /// The candidate that matched.
    pub query: String,
    /// 1-based position of `query` among the candidates.
    pub attempt: usize,
    pub response: NominatimResponse
}

/// Strings to try against the geocoder, in order: the query, its
/// alternates, and the raw text when nothing else matches it.
pub fn lookup_candidates(normalized: &AddressNormalized) -> Vec<String> {
    let mut candidates: Vec<String> = normalized
        .candidates()
        .map(str::to_owned)
        .collect();

    let raw = normalized.raw_address_text();
    if !raw.is_empty() && !candidates.iter().any(|c| c == raw) {
        candidates.push(raw.to_owned());
    }
    candidates
}

/// Walks the candidates one at a time and stops at the first match.
/// A failing request ends the walk; running out of candidates is `Ok(None)`.
pub async fn geocode_normalized<F, Fut>(
    normalized: &AddressNormalized,
    mut search: F
) -> Result<Option<GeocodeHit>, GeocodeError>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<Option<NominatimResponse>, GeocodeError>>,
{
    let candidates = lookup_candidates(normalized);
    let total = candidates.len();

    for (index, query) in candidates.into_iter().enumerate() {
        let attempt = index + 1;
        debug!("Geocoding attempt {}/{}: {:?}", attempt, total, query);

        if let Some(response) = search(query.clone()).await? {
            info!("Geocoded {:?} on attempt {}/{}", query, attempt, total);
            return Ok(Some(GeocodeHit { query, attempt, response }));
        }
    }

    info!("No geocoding match after {} attempt(s)", total);
    Ok(None)
}
