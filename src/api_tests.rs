#[cfg(test)]
mod tests {
    use actix_web::{
        App,
        dev::Service,
        http::{header, StatusCode}, test, web,
    };
    use diesel::pg::PgConnection;
    use diesel::r2d2::ConnectionManager;
    use serde_json::{json, Value};

    use crate::address::{AddressNormalized, AddressQuality};
    use crate::api::addresses::{geocode_address, normalize_address};
    use crate::api::places::get_place;
    use crate::api::receipts::receipt_address;
    use crate::api::response::{json_config, ApiFailure, ApiSuccess};
    use crate::config::GeocoderSettings;
    use crate::db::Pool;
    use crate::geocode::NominatimClient;

    /// A pool that never connects; only usable by handlers that end
    /// before touching the database.
    fn idle_pool() -> Pool {
        let manager = ConnectionManager::<PgConnection>::new("postgres://nobody@127.0.0.1:9/none");
        r2d2::Pool::builder()
            .max_size(1)
            .min_idle(Some(0))
            .build_unchecked(manager)
    }

    /// Nothing listens on the discard port, so every search fails fast.
    fn unreachable_geocoder() -> NominatimClient {
        let settings = GeocoderSettings {
            url: "http://127.0.0.1:9/search".into(),
            ..Default::default()
        };
        NominatimClient::new(&settings).unwrap()
    }

    #[actix_rt::test]
    async fn test_normalize_address() {
        let mut app = test::init_service(
            App::new()
                .app_data(json_config())
                .route("/addresses/normalize", web::post().to(normalize_address))
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/addresses/normalize")
            .set_json(&json!({
                "raw_address_text": " 1425 Store St, Vancouver, B.C. v6b 2k9 ",
                "components": {
                    "house_number": "1425",
                    "road": "Store St",
                    "city": "Vancouver",
                    "region": "B.C.",
                    "postal_code": "v6b 2k9"
                }
            }))
            .to_request();

        let resp: ApiSuccess<AddressNormalized> = test::read_response_json(&mut app, req).await;
        assert!(resp.success);

        let address = resp.data;
        assert_eq!(address.raw_address_text(), "1425 Store St, Vancouver, B.C. v6b 2k9");
        assert_eq!(address.query(), Some("1425 Store St, Vancouver, BC"));
        assert_eq!(
            address.alternates(),
            &["1425 Store St, Vancouver".to_owned(), "Store St, Vancouver, BC".to_owned()]
        );
        assert_eq!(address.quality(), AddressQuality::High);
        assert_eq!(address.notes(), Some("postal code has lowercase"));
        assert_eq!(address.components().region, None);
    }

    #[actix_rt::test]
    async fn test_normalize_empty_input() {
        let mut app = test::init_service(
            App::new()
                .app_data(json_config())
                .route("/addresses/normalize", web::post().to(normalize_address))
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/addresses/normalize")
            .set_json(&json!({}))
            .to_request();

        let resp: Value = test::read_response_json(&mut app, req).await;
        assert_eq!(resp["success"], true);
        assert_eq!(resp["data"]["raw_address_text"], "");
        assert_eq!(resp["data"]["query"], Value::Null);
        assert_eq!(resp["data"]["alternates"], json!([]));
        assert_eq!(resp["data"]["quality"], "low");
        assert_eq!(resp["data"]["notes"], "missing street; missing city; missing region");
    }

    #[actix_rt::test]
    async fn test_normalize_malformed_body() {
        let mut app = test::init_service(
            App::new()
                .app_data(json_config())
                .route("/addresses/normalize", web::post().to(normalize_address))
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/addresses/normalize")
            .header(header::CONTENT_TYPE, "application/json")
            .set_payload("{\"components\": ")
            .to_request();

        let resp = app.call(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = test::read_body(resp).await;
        let failure: ApiFailure = serde_json::from_slice(&body).unwrap();
        assert!(!failure.success);
        assert_eq!(failure.code.as_deref(), Some("invalid_body"));
    }

    #[actix_rt::test]
    async fn test_normalize_wrongly_typed_component() {
        let mut app = test::init_service(
            App::new()
                .app_data(json_config())
                .route("/addresses/normalize", web::post().to(normalize_address))
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/addresses/normalize")
            .set_json(&json!({ "components": { "house_number": 1425 } }))
            .to_request();

        let resp = app.call(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_rt::test]
    async fn test_receipt_address() {
        let mut app = test::init_service(
            App::new()
                .app_data(json_config())
                .route("/receipts/address", web::post().to(receipt_address))
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/receipts/address")
            .set_json(&json!({
                "vendor": "Union Market",
                "address": "100 King St, Toronto",
                "address_components": {
                    "house_number": "100",
                    "road": "King St",
                    "city": "Toronto",
                    "region_code": "ON"
                },
                "total": 12.4
            }))
            .to_request();

        let resp: ApiSuccess<AddressNormalized> = test::read_response_json(&mut app, req).await;
        assert_eq!(resp.data.query(), Some("100 King St, Toronto, ON"));
        assert_eq!(
            resp.data.alternates(),
            &["100 King St, Toronto".to_owned(), "King St, Toronto, ON".to_owned()]
        );
    }

    #[actix_rt::test]
    async fn test_receipt_without_vendor() {
        let mut app = test::init_service(
            App::new()
                .app_data(json_config())
                .route("/receipts/address", web::post().to(receipt_address))
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/receipts/address")
            .set_json(&json!({ "vendor": "", "total": 1.0 }))
            .to_request();

        let resp = app.call(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = test::read_body(resp).await;
        let failure: ApiFailure = serde_json::from_slice(&body).unwrap();
        assert_eq!(failure.error, "Receipt has no vendor");
    }

    #[actix_rt::test]
    async fn test_geocode_without_candidates() {
        let mut app = test::init_service(
            App::new()
                .data(idle_pool())
                .data(unreachable_geocoder())
                .app_data(json_config())
                .route("/addresses/geocode", web::post().to(geocode_address))
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/addresses/geocode")
            .set_json(&json!({ "components": { "city": "Vancouver" } }))
            .to_request();

        let resp = app.call(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body = test::read_body(resp).await;
        let failure: ApiFailure = serde_json::from_slice(&body).unwrap();
        assert_eq!(failure.error, "Address not found");
        assert_eq!(failure.code.as_deref(), Some("not_found"));

        let details = failure.details.unwrap();
        assert_eq!(details["address"]["quality"], "low");
        assert_eq!(details["address"]["query"], Value::Null);
    }

    #[actix_rt::test]
    async fn test_geocode_with_unreachable_geocoder() {
        let mut app = test::init_service(
            App::new()
                .data(idle_pool())
                .data(unreachable_geocoder())
                .app_data(json_config())
                .route("/addresses/geocode", web::post().to(geocode_address))
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/addresses/geocode")
            .set_json(&json!({
                "components": { "road": "Main Street", "region_code": "NY" }
            }))
            .to_request();

        let resp = app.call(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }

    #[actix_rt::test]
    #[ignore] // needs TEST_DATABASE_URL
    async fn test_get_unknown_place() {
        use crate::db::init_test_connection_pool;

        let pool = init_test_connection_pool();
        crate::embedded_migrations::run(&pool.get().unwrap())
            .expect("Error while running migrations");

        let mut app = test::init_service(
            App::new()
                .data(pool)
                .route("/places/{osm_ref}", web::get().to(get_place))
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/places/node:1")
            .to_request();

        let resp = app.call(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
