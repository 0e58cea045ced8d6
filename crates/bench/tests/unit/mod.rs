//! # Orchestration Unit Tests
//!
//! Fine-grained behavioral tests for the orchestration components, one
//! module per core concern.


/// Library registry: registration order and duplicate rejection.
pub mod library;



/// End-to-end orchestration against the recording simulator.
pub mod orchestrator;
