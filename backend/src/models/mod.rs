//! Domain models (SQLx rows and API payloads).

pub mod catalog;
pub mod resource;

pub use catalog::Catalog;
pub use resource::{
    CreateResourceRequest, NewResource, Resource, ResourceCategory, ResourceStats,
};
