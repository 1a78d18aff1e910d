//! simplebank - banking API with pluggable token authentication
//!
//! The library exposes the token makers (JWT and PASETO), the bearer
//! authentication middleware and the HTTP router built on top of them.

pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod error;

pub use auth::{Maker, Payload, TokenError, TokenKind};
pub use config::Config;
pub use error::Error;
