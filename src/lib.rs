pub mod controller;
pub mod models;
pub mod server;
pub mod store;
pub mod utils;
