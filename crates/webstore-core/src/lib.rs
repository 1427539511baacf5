//! Core types for the Chrome Web Store deployment tool.
//!
//! This crate defines the constants, the deployment configuration resolved
//! from the environment, and the error taxonomy shared by the API client
//! and the command-line front end.

pub mod config;
pub mod constants;
pub mod error;

pub use config::{AccessToken, Credentials, DeployConfig, DeploymentTarget, Endpoints};
pub use error::{DeployError, Result, Step};
