use diesel::pg::upsert::excluded;
use diesel::prelude::*;

use crate::data::models::{NewPlace, PlaceRecord};

/// Inserts the place, or refreshes the stored copy when a place with the
/// same OSM reference already exists.
pub fn upsert_place(
    conn: &PgConnection,
    new_place: &NewPlace
) -> Result<PlaceRecord, diesel::result::Error> {
    use crate::data::schema::places::dsl::*;

    diesel::insert_into(places)
        .values(new_place)
        .on_conflict(osm_ref)
        .do_update()
        .set((
            name.eq(excluded(name)),
            address.eq(excluded(address)),
            normalized_address.eq(excluded(normalized_address)),
            lat.eq(excluded(lat)),
            lon.eq(excluded(lon)),
            updated_at.eq(excluded(updated_at))
        ))
        .get_result(conn)
}

pub fn find_place_by_osm_ref(
    conn: &PgConnection,
    reference: &str
) -> Result<Option<PlaceRecord>, diesel::result::Error> {
    use crate::data::schema::places::dsl::*;

    places
        .filter(osm_ref.eq(reference))
        .first(conn)
        .optional()
}
