pub mod app;
pub mod client;
pub mod config;
pub mod errors;
pub mod guide;
pub mod handlers;
pub mod models;
pub mod nav;
pub mod page;
pub mod panels;
pub mod state;
pub mod ui;

pub use app::router;
pub use client::BackendClient;
pub use config::Config;
pub use page::Page;
pub use state::AppState;
