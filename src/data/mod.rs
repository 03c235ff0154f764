pub mod models;
pub mod plants;
