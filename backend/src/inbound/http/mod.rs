//! HTTP inbound adapter exposing the administrator REST endpoints.

pub mod administrators;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;

pub use error::ApiResult;
