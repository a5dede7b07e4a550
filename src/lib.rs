pub mod backend;
pub mod lifecycle;
pub mod models;
pub mod sample;
pub mod store;
