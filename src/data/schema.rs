table! {
    places (id) {
        id -> Uuid,
        osm_ref -> Text,
        name -> Text,
        address -> Text,
        normalized_address -> Nullable<Text>,
        lat -> Float8,
        lon -> Float8,
        updated_at -> Timestamp,
    }
}
