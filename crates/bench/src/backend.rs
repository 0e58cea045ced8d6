//! The consumed simulator interface and run-result aggregation.
//!
//! The HDL simulator is a black box behind the [`Simulator`] trait: it takes
//! one fully described job and reports pass/fail plus its own log. This
//! crate never interprets backend output — compile errors and assertion
//! failures travel through [`SimReport`] verbatim and only the aggregate
//! pass/fail is derived.

use std::path::PathBuf;

use crate::matrix::TestInstance;
use crate::options::SimOptions;
use crate::params::ParameterBinding;

/// Everything the backend needs to run one test instance.
#[derive(Debug, Clone, PartialEq)]
pub struct SimJob<'a> {
    /// Library name in the backend namespace.
    pub library: &'a str,
    /// Ordered, resolved on-disk source paths (dependencies first).
    pub sources: &'a [PathBuf],
    /// Testbench entry point.
    pub testbench: &'a str,
    /// Config name for log/report naming.
    pub config: &'a str,
    /// Generic bindings for this run.
    pub generics: &'a ParameterBinding,
    /// Global run-mode options.
    pub options: &'a SimOptions,
}

/// Backend verdict for one job, reported verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimReport {
    /// Whether the backend reported the run as passing.
    pub passed: bool,
    /// The backend's own log output, unwrapped and unreinterpreted.
    pub log: String,
}

impl SimReport {
    /// A passing report with the given log.
    pub fn pass(log: impl Into<String>) -> Self {
        Self {
            passed: true,
            log: log.into(),
        }
    }

    /// A failing report with the given log.
    pub fn fail(log: impl Into<String>) -> Self {
        Self {
            passed: false,
            log: log.into(),
        }
    }
}

/// External simulation backend.
///
/// Invoked once per test instance in matrix order. Implementations may
/// compile, elaborate, and schedule however they like internally; dispatch
/// order from this crate is fixed regardless.
pub trait Simulator {
    /// Runs one job to completion and reports the verdict.
    fn run(&mut self, job: &SimJob<'_>) -> SimReport;
}

/// Outcome of one dispatched instance.
#[derive(Debug, Clone, PartialEq)]
pub struct TestOutcome {
    /// The instance that was dispatched.
    pub instance: TestInstance,
    /// The backend's report for it.
    pub report: SimReport,
}

/// Aggregate result of a whole orchestration run, in dispatch order.
#[derive(Debug, Default)]
pub struct RunSummary {
    outcomes: Vec<TestOutcome>,
}

impl RunSummary {
    pub(crate) fn record(&mut self, instance: TestInstance, report: SimReport) {
        self.outcomes.push(TestOutcome { instance, report });
    }

    /// Per-instance outcomes in dispatch order.
    pub fn outcomes(&self) -> &[TestOutcome] {
        &self.outcomes
    }

    /// Number of passing instances.
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.report.passed).count()
    }

    /// Number of failing instances.
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    /// True when every dispatched instance passed.
    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }

    /// The backend's aggregate verdict as a process exit code.
    ///
    /// Zero iff all instances passed; this crate adds no exit-code
    /// semantics of its own.
    pub fn exit_code(&self) -> i32 {
        i32::from(!self.all_passed())
    }
}
