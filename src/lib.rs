pub mod app;
pub mod chart;
pub mod client;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod sort;
pub mod state;
pub mod tracker;
pub mod ui;
pub mod view;

pub use app::router;
pub use client::{Backend, ClientError, HttpBackend};
pub use config::Config;
pub use state::AppState;
pub use tracker::Tracker;
