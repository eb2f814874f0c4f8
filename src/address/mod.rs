pub mod components;
pub mod normalize;
pub mod quality;

pub use components::{AddressComponents, AddressInput};
pub use normalize::{normalize, AddressNormalized};
pub use quality::AddressQuality;
