use diesel::pg::PgConnection;
use diesel::r2d2::ConnectionManager;

use crate::config::Settings;

pub type Pool = r2d2::Pool<ConnectionManager<PgConnection>>;

pub fn init_connection_pool(settings: &Settings) -> Pool {
    build_pool(&settings.database_url, settings.database_pool_size)
}

#[cfg(test)]
pub fn init_test_connection_pool() -> Pool {
    dotenv::dotenv().ok();

    let database_url = std::env::var("TEST_DATABASE_URL")
        .expect("TEST_DATABASE_URL must be set");

    build_pool(&database_url, 2)
}

fn build_pool(database_url: &str, pool_size: u32) -> Pool {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    r2d2::Pool::builder()
        .max_size(pool_size)
        .build(manager)
        .expect("Failed to create db pool")
}
