//! Fitness dashboard data pipeline.
//!
//! Raw payloads (mock fixtures or a live REST backend) flow through
//! [`gateway`] → [`normalize`] → [`charts`], and [`routes`] serves the
//! chart-ready records over HTTP.

pub mod charts;
pub mod config;
pub mod error;
pub mod gateway;
pub mod mock;
pub mod models;
pub mod normalize;
pub mod pipeline;
pub mod routes;
pub mod session;

pub use config::{Config, DataMode};
pub use error::{GatewayError, GatewayResult};
pub use gateway::Gateway;
pub use models::{Dashboard, ResourceKind, UserProfile};
pub use normalize::Normalized;
pub use session::{DashboardView, RequestState};
