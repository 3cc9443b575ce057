//! Blocking client for the Graph beta endpoint, decoding responses with the
//! [`models`](crate::models).

mod config;
mod error;
mod service;

pub use config::GraphConfig;
pub use error::GraphError;
pub use service::BetaService;
