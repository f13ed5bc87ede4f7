//! # HTTP Server Module
//!
//! Axum server in front of the ad search engine.
//!
//! # Endpoints
//!
//! - `/api/get_ad` - Active ads
//! - `/internal/status` - Liveness (privileged)
//! - `/internal/states` - Catalog dump (privileged)

pub mod routes;
pub mod server;

pub use routes::{ad_routes, AdState, AdView, StatusResponse};
pub use server::HttpServer;
