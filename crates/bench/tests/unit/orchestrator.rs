//! # Orchestration Tests
//!
//! End-to-end runs against the recording simulator: dispatch order, option
//! propagation, continue-on-failure, and eager validation before any
//! backend invocation.

use pretty_assertions::assert_eq;

use hdlbench_core::backend::Simulator;
use hdlbench_core::config::ConfigSet;
use hdlbench_core::error::BenchError;
use hdlbench_core::library::LibraryRegistry;
use hdlbench_core::options::{resolve, GuiOptions, RunMode, SimOptions};
use hdlbench_core::params::ParameterBinding;
use hdlbench_core::runner::BenchRunner;
use hdlbench_core::source::{ProjectRoot, SourceRef};

use crate::common::fixture::ProjectFixture;
use crate::common::mocks::simulator::RecordingSimulator;

/// Library `L` with `[dep.vhd, tb.vhd]` and one config → exactly one
/// dispatched instance carrying that binding.
fn single_config_fixture() -> (ProjectFixture, BenchRunner) {
    let fixture = ProjectFixture::new();
    let _ = fixture.source("dep.vhd");
    let _ = fixture.source("tb.vhd");

    let mut registry = LibraryRegistry::new();
    registry.register("L").unwrap().add_sources([
        SourceRef::dependency("dep.vhd"),
        SourceRef::testbench("tb.vhd"),
    ]);

    let generics = ParameterBinding::new().with("width", 8);
    let sets = vec![ConfigSet::with_named("L", "tb", [("config0", generics)]).unwrap()];

    let runner = BenchRunner::new(
        &ProjectRoot::new(fixture.root()),
        registry,
        sets,
        SimOptions::default(),
    )
    .unwrap();
    (fixture, runner)
}

#[test]
fn test_single_config_yields_one_instance() {
    let (fixture, runner) = single_config_fixture();
    let mut sim = RecordingSimulator::new();
    let summary = runner.run(&mut sim);

    assert_eq!(sim.jobs.len(), 1);
    let job = &sim.jobs[0];
    assert_eq!(job.name(), "L.tb.config0");
    assert_eq!(job.generics, ["width=8"]);
    assert_eq!(
        job.sources,
        [fixture.root().join("dep.vhd"), fixture.root().join("tb.vhd")]
    );
    assert!(summary.all_passed());
    assert_eq!(summary.exit_code(), 0);
}

#[test]
fn test_backend_failure_does_not_abort_the_matrix() {
    let fixture = ProjectFixture::new();
    let _ = fixture.source("tb.vhd");

    let mut registry = LibraryRegistry::new();
    registry
        .register("L")
        .unwrap()
        .add_sources([SourceRef::testbench("tb.vhd")]);

    let bindings = (0_i64..3).map(|i| ParameterBinding::new().with("n", i));
    let sets = vec![ConfigSet::with_auto_named("L", "tb", bindings).unwrap()];

    let runner = BenchRunner::new(
        &ProjectRoot::new(fixture.root()),
        registry,
        sets,
        SimOptions::default(),
    )
    .unwrap();

    let mut sim = RecordingSimulator::new().fail_test("L.tb.config1");
    let summary = runner.run(&mut sim);

    // All three ran, in declaration order, despite the middle failure.
    assert_eq!(
        sim.seen(),
        ["L.tb.config0", "L.tb.config1", "L.tb.config2"]
    );
    assert_eq!(summary.passed(), 2);
    assert_eq!(summary.failed(), 1);
    assert_eq!(summary.exit_code(), 1);
    assert!(summary.outcomes()[1]
        .report
        .log
        .contains("assertion failed"));
}

#[test]
fn test_gui_options_reach_every_job() {
    let fixture = ProjectFixture::new();
    let _ = fixture.source("tb.vhd");

    let mut registry = LibraryRegistry::new();
    registry
        .register("L")
        .unwrap()
        .add_sources([SourceRef::testbench("tb.vhd")]);
    let sets =
        vec![ConfigSet::with_named("L", "tb", [("config0", ParameterBinding::new())]).unwrap()];

    let runner = BenchRunner::new(
        &ProjectRoot::new(fixture.root()),
        registry,
        sets,
        resolve(RunMode::Gui, &GuiOptions::default()),
    )
    .unwrap();

    let mut sim = RecordingSimulator::new();
    let _ = runner.run(&mut sim);
    assert!(!sim.jobs[0].init_scripts.is_empty());
    assert!(!sim.jobs[0].flags.is_empty());
}

#[test]
fn test_unresolved_source_fails_before_any_dispatch() {
    let fixture = ProjectFixture::new();
    // tb.vhd deliberately not created.
    let mut registry = LibraryRegistry::new();
    registry
        .register("L")
        .unwrap()
        .add_sources([SourceRef::testbench("tb.vhd")]);
    let sets =
        vec![ConfigSet::with_named("L", "tb", [("config0", ParameterBinding::new())]).unwrap()];

    let err = BenchRunner::new(
        &ProjectRoot::new(fixture.root()),
        registry,
        sets,
        SimOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, BenchError::UnresolvedSource { .. }));
}

#[test]
fn test_unknown_library_fails_at_construction() {
    let fixture = ProjectFixture::new();
    let sets = vec![ConfigSet::new("ghost_lib", "tb")];

    let err = BenchRunner::new(
        &ProjectRoot::new(fixture.root()),
        LibraryRegistry::new(),
        sets,
        SimOptions::default(),
    )
    .unwrap_err();
    match err {
        BenchError::UnknownLibrary { testbench, library } => {
            assert_eq!(testbench, "tb");
            assert_eq!(library, "ghost_lib");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_dispatch_is_repeatable_across_runs() {
    let (_fixture, runner) = single_config_fixture();
    let mut first = RecordingSimulator::new();
    let mut second = RecordingSimulator::new();
    let _ = runner.run(&mut first);
    let _ = runner.run(&mut second);
    assert_eq!(first.jobs, second.jobs);
}

/// The backend seam is object-safe; the runner takes `&mut dyn Simulator`.
#[test]
fn test_simulator_is_object_safe() {
    let (_fixture, runner) = single_config_fixture();
    let mut sim = RecordingSimulator::new();
    let dyn_sim: &mut dyn Simulator = &mut sim;
    let summary = runner.run(dyn_sim);
    assert!(summary.all_passed());
}
