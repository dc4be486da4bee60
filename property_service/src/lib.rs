//! Generic property service following hexagonal architecture pattern
//!
//! Composes the group registry, field store and value store behind a single
//! service port, keeping the field and value stores mutually consistent
//! (deleting a field cascades to every value referencing it). Features
//! consume this library through the `PropertyService` port; no code below
//! the feature layer is aware of feature identity.

pub mod domain;
pub mod outbound;
