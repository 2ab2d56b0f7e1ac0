//! Shared note collections keyed by access code.
//!
//! Anyone who knows a code can list, add, or delete the notes stored under it.
//! The code is the only access control. Collections live in process memory
//! and are lost on restart.

pub mod service;
pub mod store;

use serde::{Deserialize, Serialize};

/// A single note entry in a code's collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Opaque unique id, assigned at creation and immutable afterward.
    pub id: String,
    /// Optional short title; empty string when not provided.
    pub title: String,
    /// Note body. Always non-empty.
    pub content: String,
    /// Creation time in milliseconds since the Unix epoch.
    pub timestamp: i64,
}
