use std::fmt::Formatter;

#[derive(Debug)]
pub enum GeocodeError {
    Request(Box<reqwest::Error>),
    InvalidCoordinate {
        field: &'static str,
        value: String
    },
}

impl std::fmt::Display for GeocodeError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let msg = match self {
            GeocodeError::Request(inner) => {
                format!("Request failed: {}", inner)
            },
            GeocodeError::InvalidCoordinate { field, value } => {
                format!("Invalid {} in geocoder response: {:?}", field, value)
            },
        };
        write!(f, "Geocode error: {}", msg)
    }
}

impl std::error::Error for GeocodeError {}

impl From<reqwest::Error> for GeocodeError {
    fn from(error: reqwest::Error) -> Self {
        GeocodeError::Request(Box::new(error))
    }
}
