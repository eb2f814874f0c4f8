use std::fmt::Formatter;

#[derive(Debug)]
pub enum StoreError {
    Pool(Box<r2d2::Error>),
    Query(Box<diesel::result::Error>),
    Canceled
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let msg = match self {
            StoreError::Pool(inner) => {
                format!("No database connection available: {}", inner)
            },
            StoreError::Query(inner) => {
                format!("Query failed: {}", inner)
            },
            StoreError::Canceled => {
                "Blocking task was canceled".into()
            }
        };
        write!(f, "Store error: {}", msg)
    }
}

impl std::error::Error for StoreError {}

impl From<r2d2::Error> for StoreError {
    fn from(error: r2d2::Error) -> Self {
        StoreError::Pool(Box::new(error))
    }
}

impl From<diesel::result::Error> for StoreError {
    fn from(error: diesel::result::Error) -> Self {
        StoreError::Query(Box::new(error))
    }
}

impl From<actix_web::error::BlockingError<StoreError>> for StoreError {
    fn from(error: actix_web::error::BlockingError<StoreError>) -> Self {
        match error {
            actix_web::error::BlockingError::Error(inner) => inner,
            actix_web::error::BlockingError::Canceled => StoreError::Canceled,
        }
    }
}
