//! Business logic services.

pub mod query_engine;
pub mod resource_service;
