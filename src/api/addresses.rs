use actix_web::http::StatusCode;
use actix_web::{web, Error, HttpResponse};
use chrono::Utc;
use log::{debug, error, info};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::address::{AddressInput, AddressNormalized};
use crate::api::response::{failure, failure_with_details, success};
use crate::data::error::StoreError;
use crate::data::models::{NewPlace, PlaceRecord};
use crate::data::repo::places::upsert_place;
use crate::db::Pool;
use crate::geocode::{geocode_normalized, NominatimClient};
use crate::location::{to_geo_location, to_place, GeoLocation, Place};

#[derive(Debug, Serialize, Deserialize)]
pub struct GeocodeResponse {
    pub address: AddressNormalized,
    pub location: GeoLocation,
    pub place: Place,
    pub matched_query: String,
    pub attempt: usize
}

pub async fn normalize_address(
    input: web::Json<AddressInput>
) -> Result<HttpResponse, Error> {
    let normalized = input.normalize();
    debug!(
        "Normalized address (quality: {}, query: {:?})",
        normalized.quality(),
        normalized.query()
    );

    Ok(success(normalized))
}

pub async fn geocode_address(
    input: web::Json<AddressInput>,
    geocoder: web::Data<NominatimClient>,
    pool: web::Data<Pool>
) -> Result<HttpResponse, Error> {
    let normalized = input.normalize();

    let hit = match geocode_normalized(&normalized, |query| geocoder.search(query)).await {
        Ok(Some(hit)) => hit,
        Ok(None) => {
            info!("Address not found (quality: {})", normalized.quality());
            return Ok(failure_with_details(
                StatusCode::NOT_FOUND,
                "Address not found",
                "not_found",
                json!({ "address": normalized })
            ));
        },
        Err(err) => {
            error!("Error while geocoding address: {}", err);
            return Ok(failure(StatusCode::BAD_GATEWAY, "Geocoding failed"));
        },
    };

    let mapped = to_geo_location(&hit.response)
        .and_then(|location| to_place(&hit.response).map(|place| (location, place)));
    let (location, place) = match mapped {
        Ok(mapped) => mapped,
        Err(err) => {
            error!("Unusable geocoder result for {:?}: {}", hit.query, err);
            return Ok(failure(StatusCode::BAD_GATEWAY, "Geocoding failed"));
        },
    };

    let stored = match save_place(pool, place).await {
        Ok(record) => record,
        Err(err) => {
            error!("Error while saving place: {}", err);
            return Ok(failure(StatusCode::INTERNAL_SERVER_ERROR, "Failed to save place"));
        },
    };

    Ok(success(GeocodeResponse {
        address: normalized,
        location,
        place: stored.into(),
        matched_query: hit.query,
        attempt: hit.attempt
    }))
}

async fn save_place(pool: web::Data<Pool>, place: Place) -> Result<PlaceRecord, StoreError> {
    let record = web::block(move || -> Result<PlaceRecord, StoreError> {
        let conn = pool.get()?;
        let new_place = NewPlace::from_place(&place, Utc::now().naive_utc());
        Ok(upsert_place(&conn, &new_place)?)
    })
    .await?;

    Ok(record)
}
