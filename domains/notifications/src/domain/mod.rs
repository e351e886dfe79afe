//! Notifications domain layer: entities, pagination

pub mod entities;
pub mod pagination;
