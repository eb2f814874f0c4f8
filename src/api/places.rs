use actix_web::http::StatusCode;
use actix_web::{web, Error, HttpResponse};
use log::error;

use crate::api::response::{failure, success};
use crate::data::error::StoreError;
use crate::data::repo::places::find_place_by_osm_ref;
use crate::db::Pool;
use crate::location::Place;

/// `osm_ref` is `{osm_type}:{osm_id}`, e.g. `node:4205112233`.
pub async fn get_place(
    osm_ref: web::Path<String>,
    pool: web::Data<Pool>
) -> Result<HttpResponse, Error> {
    let reference = osm_ref.into_inner();
    let result = web::block(move || -> Result<Option<Place>, StoreError> {
        let conn = pool.get()?;
        Ok(find_place_by_osm_ref(&conn, &reference)?.map(Place::from))
    })
    .await
    .map_err(StoreError::from);

    match result {
        Ok(Some(place)) => Ok(success(place)),
        Ok(None) => Ok(failure(StatusCode::NOT_FOUND, "Place not found")),
        Err(err) => {
            error!("Error while retrieving place: {}", err);
            Ok(failure(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch place"))
        },
    }
}
