//! HDL test-bench orchestration library.
//!
//! This crate turns a declarative project description into dispatched
//! simulation runs. It provides:
//! 1. **Libraries:** named source manifests with dependency-ordered files.
//! 2. **Configs:** named generic/parameter sets per testbench, with explicit
//!    or positional naming and per-testbench uniqueness enforcement.
//! 3. **Matrix:** deterministic expansion into runnable test instances.
//! 4. **Run modes:** a default/GUI switch that injects waveform scripts and
//!    simulator flags only when the GUI sentinel is given.
//! 5. **Orchestration:** eager validation, backend dispatch, and aggregate
//!    pass/fail reporting. The simulator itself is a black box behind the
//!    [`Simulator`] trait.

/// Consumed simulator interface and run-result aggregation.
pub mod backend;
/// Named test configurations per testbench.
pub mod config;
/// Configuration-time error taxonomy.
pub mod error;
/// Simulation libraries and the library registry.
pub mod library;
/// Test matrix expansion.
pub mod matrix;
/// Run-mode resolution and backend option injection.
pub mod options;
/// Generic/parameter bindings.
pub mod params;
/// Declarative JSON project manifest.
pub mod project;
/// Orchestration entry point.
pub mod runner;
/// Source references and project-root anchoring.
pub mod source;

/// Backend seam; implement this to plug in a simulator.
pub use crate::backend::{SimJob, SimReport, Simulator};
/// Fatal configuration error; everything here aborts before dispatch.
pub use crate::error::BenchError;
/// Parsed manifest; entry point for CLI-driven runs.
pub use crate::project::Project;
/// Validated, dispatchable orchestration state.
pub use crate::runner::BenchRunner;
