//! HDL test-bench orchestration CLI.
//!
//! This binary is the orchestration entry point. It performs:
//! 1. **Manifest loading:** parses the JSON project manifest and anchors all
//!    source paths at the manifest's directory.
//! 2. **Mode resolution:** the single optional positional argument selects
//!    GUI mode when it equals the literal `--gui` sentinel; anything else
//!    runs in default mode.
//! 3. **Dispatch:** expands the test matrix and invokes the external
//!    simulator command once per instance, then exits with the backend's
//!    aggregate pass/fail code.

use std::path::PathBuf;
use std::process::{self, Command};

use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use hdlbench_core::options::RunMode;
use hdlbench_core::{Project, SimJob, SimReport, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "hdlbench",
    author,
    version,
    about = "Configuration-driven test-bench orchestration for HDL simulation",
    long_about = "Expands the project manifest's test matrix and dispatches each \
testbench configuration to the external simulator.\n\nExamples:\n  \
hdlbench -p sim/vunit/bench.json\n  hdlbench -p sim/vunit/bench.json -- --gui"
)]
struct Cli {
    /// Project manifest path.
    #[arg(short, long, default_value = "bench.json")]
    project: PathBuf,

    /// Override the simulator command declared in the manifest.
    #[arg(short, long)]
    simulator: Option<String>,

    /// Invocation mode; the literal "--gui" enables waveform GUI options.
    #[arg(allow_hyphen_values = true)]
    mode: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mode = RunMode::from_arg(cli.mode.as_deref());
    if let Some(arg) = cli.mode.as_deref() {
        // Unrecognized values keep the forward-compatible silent default;
        // the warning makes that visible without rejecting the run.
        if !mode.is_gui() {
            warn!(argument = arg, "unrecognized mode argument, running in default mode");
        }
    }

    let project = Project::load(&cli.project).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: {e}");
        process::exit(1);
    });

    let command = cli
        .simulator
        .unwrap_or_else(|| project.simulator_command().to_owned());

    let runner = project.into_runner(mode).unwrap_or_else(|e| {
        eprintln!("[!] FATAL: {e}");
        process::exit(1);
    });

    let total = runner.instances().len();
    println!("[*] Dispatching {total} test instance(s) via '{command}'");

    let mut simulator = CommandSimulator { command };
    let summary = runner.run(&mut simulator);

    println!();
    for outcome in summary.outcomes() {
        let verdict = if outcome.report.passed { "pass" } else { "FAIL" };
        println!("  {verdict}  {}", outcome.instance);
    }
    println!(
        "[*] {} passed, {} failed",
        summary.passed(),
        summary.failed()
    );

    process::exit(summary.exit_code());
}

/// Backend adapter that shells out to an external simulator command.
///
/// Per instance the command receives the library, the ordered source files,
/// the testbench entry point and config name, one `-g name=value` per
/// generic, one `--load <script>` per waveform init script, and the raw
/// backend flags. A zero exit status is a pass; stdout and stderr together
/// form the log.
struct CommandSimulator {
    command: String,
}

impl Simulator for CommandSimulator {
    fn run(&mut self, job: &SimJob<'_>) -> SimReport {
        let mut cmd = Command::new(&self.command);
        let _ = cmd
            .arg("--library")
            .arg(job.library)
            .arg("--testbench")
            .arg(job.testbench)
            .arg("--config")
            .arg(job.config);
        for (name, value) in job.generics.iter() {
            let _ = cmd.arg("-g").arg(format!("{name}={value}"));
        }
        for script in &job.options.waveform_init_scripts {
            let _ = cmd.arg("--load").arg(script);
        }
        for flag in &job.options.backend_cli_flags {
            let _ = cmd.arg(flag);
        }
        for source in job.sources {
            let _ = cmd.arg(source);
        }

        match cmd.output() {
            Ok(output) => {
                let mut log = String::from_utf8_lossy(&output.stdout).into_owned();
                log.push_str(&String::from_utf8_lossy(&output.stderr));
                if output.status.success() {
                    SimReport::pass(log)
                } else {
                    SimReport::fail(log)
                }
            }
            Err(e) => SimReport::fail(format!("failed to launch '{}': {e}", self.command)),
        }
    }
}
