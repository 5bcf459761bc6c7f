//! Cloud Vision HTTP client module.
//!
//! This module provides the configuration and client types used to issue
//! text detection calls against the Vision REST surface.

mod gv_client;
mod gv_config;

pub use gv_client::GvClient;
pub use gv_config::{GvConfig, GvCredentials};
