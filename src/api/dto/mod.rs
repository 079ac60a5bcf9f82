//! Data Transfer Objects for API requests and responses.
//!
//! Request bodies are plain Serde structs; every rule about their values is
//! enforced by the registry.

pub mod course;
pub mod health;
