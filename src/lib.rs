pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod storage;
pub mod store;
pub mod utils;
