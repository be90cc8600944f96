//! API module - HTTP handlers and routing.

pub mod dto;
pub mod handlers;
pub mod openapi;
pub mod routes;

use std::sync::Arc;

use crate::config::Config;
use crate::services::resource_service::ResourceService;
use crate::storage::ResourceStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub resources: ResourceService,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn ResourceStore>) -> Self {
        Self {
            config,
            resources: ResourceService::new(store),
        }
    }
}

pub type SharedState = Arc<AppState>;
