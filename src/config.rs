use std::env;

use dotenv::dotenv;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
const DEFAULT_DB_POOL_SIZE: u32 = 15;
const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org/search";
const DEFAULT_GEOCODER_USER_AGENT: &str = concat!("address-service/", env!("CARGO_PKG_VERSION"));
const DEFAULT_GEOCODER_RESULT_LIMIT: u8 = 5;

#[derive(Debug, Clone)]
pub struct Settings {
    pub bind_address: String,
    pub database_url: String,
    pub database_pool_size: u32,
    pub geocoder: GeocoderSettings
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeocoderSettings {
    pub url: String,
    pub user_agent: String,
    pub referer: Option<String>,
    pub result_limit: u8
}

impl Default for GeocoderSettings {
    fn default() -> Self {
        GeocoderSettings {
            url: DEFAULT_GEOCODER_URL.to_owned(),
            user_agent: DEFAULT_GEOCODER_USER_AGENT.to_owned(),
            referer: None,
            result_limit: DEFAULT_GEOCODER_RESULT_LIMIT
        }
    }
}

impl Settings {
    /// Reads the settings from the environment, after loading `.env` if present.
    pub fn from_env() -> Settings {
        dotenv().ok();
        Settings::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Settings
        where F: Fn(&str) -> Option<String>
    {
        let database_url = lookup("DATABASE_URL")
            .expect("DATABASE_URL must be set");

        let database_pool_size = lookup("DATABASE_POOL_SIZE")
            .map(|size| size
                .parse::<u32>()
                .expect("DATABASE_POOL_SIZE must be an integer")
            )
            .unwrap_or(DEFAULT_DB_POOL_SIZE);

        let result_limit = lookup("GEOCODER_RESULT_LIMIT")
            .map(|limit| limit
                .parse::<u8>()
                .expect("GEOCODER_RESULT_LIMIT must be an integer between 1 and 255")
            )
            .unwrap_or(DEFAULT_GEOCODER_RESULT_LIMIT);

        let defaults = GeocoderSettings::default();
        Settings {
            bind_address: lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_owned()),
            database_url,
            database_pool_size,
            geocoder: GeocoderSettings {
                url: lookup("GEOCODER_URL").unwrap_or(defaults.url),
                user_agent: lookup("GEOCODER_USER_AGENT").unwrap_or(defaults.user_agent),
                referer: lookup("GEOCODER_REFERER").filter(|r| !r.is_empty()),
                result_limit: result_limit.max(1)
            }
        }
    }
}
