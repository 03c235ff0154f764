pub mod health;
pub mod plants;
pub mod zones;

pub use plants::{get_plant, list_plants};
pub use zones::{get_models, post_zones};
