//! Query gateway: configuration-driven, read-only SQL-to-JSON endpoints with
//! zero-downtime route table reload.

pub mod config;
pub mod error;
pub mod handlers;
pub mod registry;
pub mod reload;
pub mod routes;
pub mod service;
pub mod settings;
pub mod state;
pub mod table;

pub use config::{load_document, normalize, ConfigDocument, EndpointSpec};
pub use error::{AppError, ConfigError};
pub use registry::RouteRegistry;
pub use reload::{build_table, spawn_reload_worker};
pub use routes::gateway_routes;
pub use settings::Settings;
pub use state::AppState;
pub use table::{compile, RouteEntry, RouteTable};
