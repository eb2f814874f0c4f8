pub mod addresses;
pub mod places;
pub mod receipts;
pub mod response;
