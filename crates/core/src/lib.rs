//! `bibliotheca-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the application error taxonomy, identifiers, and the entity / value object
//! traits the catalog is modelled with.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{AppError, AppResult, InfrastructureError, LogicError, ValidationError};
pub use id::Oid;
pub use value_object::ValueObject;
