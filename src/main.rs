#[macro_use]
extern crate diesel;
#[macro_use]
extern crate diesel_migrations;

use std::io;

use actix_web::{App, HttpServer, web};
use actix_web::middleware::Logger;
use log::info;

use crate::api::addresses::{geocode_address, normalize_address};
use crate::api::places::get_place;
use crate::api::receipts::receipt_address;
use crate::api::response::json_config;
use crate::config::Settings;
use crate::db::init_connection_pool;
use crate::geocode::NominatimClient;

mod address;
mod api;
mod config;
mod data;
mod db;
mod geocode;
mod location;
mod receipt;
mod utils;
mod api_tests;

embed_migrations!("./migrations");

#[actix_rt::main]
async fn main() -> io::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let settings = Settings::from_env();
    let pool = init_connection_pool(&settings);
    let conn = pool.get().expect("Could not get a database connection");

    web::block(move || { embedded_migrations::run(&conn) })
        .await
        .expect("Error while running migrations");

    let geocoder = NominatimClient::new(&settings.geocoder)
        .expect("Could not create geocoder client");
    info!("Geocoding with {}", settings.geocoder.url);

    info!("Listening on {}", settings.bind_address);
    HttpServer::new(move || {
        App::new()
            .data(pool.clone())
            .data(geocoder.clone())
            .app_data(json_config())
            .wrap(Logger::default())
            .route("/addresses/normalize", web::post().to(normalize_address))
            .route("/addresses/geocode", web::post().to(geocode_address))
            .route("/places/{osm_ref}", web::get().to(get_place))
            .route("/receipts/address", web::post().to(receipt_address))
    })
    .bind(&settings.bind_address)?
    .run()
    .await
}
