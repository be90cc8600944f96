//! Resource Hub - Backend Library
//!
//! Catalog of study materials with filtering, ranking and download counting.

#[macro_use]
mod macros;

pub mod api;
pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod telemetry;

pub use config::Config;
pub use error::{AppError, Result};
