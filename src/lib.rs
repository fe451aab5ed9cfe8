pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod models;
pub mod pages;
pub mod routes;
pub mod storage;

pub use app::App;
