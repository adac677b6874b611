//! Persisted entities, wire shapes, and the mapping between them.

pub mod domain;
pub mod transform;
pub mod web;

pub use domain::*;
pub use transform::to_responses;
pub use web::*;
