//! Profiles domain layer: entities

pub mod entities;
