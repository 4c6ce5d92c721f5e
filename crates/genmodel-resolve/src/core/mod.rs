//! Core data model and pure helpers.
//!
//! - [`neutral`]: the neutral-type catalog and small shared value types
//! - [`model`]: entity/attribute metadata as supplied by the model loader
//! - [`format`]: deterministic string transforms for renderers

pub mod format;
pub mod model;
pub mod neutral;

pub use model::{
    Attribute, Entity, ForeignKeyPart, Model, SequenceGenerator, TableGenerator,
};
pub use neutral::{DateKind, GenerationStrategy, NeutralType, TriState};
