//! Use-Cases der Application-Layer-Orchestrierung.

pub mod handles;
pub mod selection;
pub mod tangents;
pub mod transform;
