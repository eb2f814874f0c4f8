use chrono::NaiveDateTime;
use serde::Serialize;
use uuid::Uuid;

use crate::data::schema::places;
use crate::location::Place;

#[derive(Queryable, Serialize, Debug, Clone, PartialEq)]
pub struct PlaceRecord {
    pub id: Uuid,
    pub osm_ref: String,
    pub name: String,
    pub address: String,
    pub normalized_address: Option<String>,
    pub lat: f64,
    pub lon: f64,
    pub updated_at: NaiveDateTime
}

#[derive(Insertable, Debug)]
#[table_name = "places"]
pub struct NewPlace<'a> {
    pub id: Uuid,
    pub osm_ref: &'a str,
    pub name: &'a str,
    pub address: &'a str,
    pub normalized_address: Option<&'a str>,
    pub lat: f64,
    pub lon: f64,
    pub updated_at: NaiveDateTime
}

impl <'a> NewPlace<'a> {
    pub fn from_place(place: &'a Place, updated_at: NaiveDateTime) -> Self {
        NewPlace {
            id: Uuid::new_v4(),
            osm_ref: &place.osm_ref,
            name: &place.name,
            address: &place.address,
            normalized_address: place.normalized_address.as_deref(),
            lat: place.lat,
            lon: place.lon,
            updated_at
        }
    }
}

impl From<PlaceRecord> for Place {
    fn from(record: PlaceRecord) -> Self {
        Place {
            osm_ref: record.osm_ref,
            name: record.name,
            address: record.address,
            normalized_address: record.normalized_address,
            lat: record.lat,
            lon: record.lon
        }
    }
}
