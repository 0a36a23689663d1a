//! Use-Cases der Application-Layer-Orchestrierung.

pub mod editing;
pub mod export;
pub mod projects;
pub mod transform;
