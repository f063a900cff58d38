//! File-level storage primitives.
//!
//! Provides atomic, lock-guarded access to the JSON array files that back
//! every collection.

pub mod json_collection;

pub use json_collection::{JsonCollection, Mutation};
