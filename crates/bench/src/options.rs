//! Run-mode resolution and backend option injection.
//!
//! The invocation mode is a two-state machine fixed at startup: `Default`
//! unless the mode argument is exactly the GUI sentinel. [`resolve`] maps
//! the mode to the backend option set: GUI mode attaches waveform init
//! scripts and extra simulator flags, default mode attaches nothing and the
//! backend runs on its own defaults. Resolution has no failure modes —
//! unrecognized arguments degrade silently to `Default` (forward-compatible
//! flag ignoring; the orchestrator logs a warning for observability).

use std::path::PathBuf;

use serde::Deserialize;

/// Sentinel mode argument that selects [`RunMode::Gui`].
pub const GUI_SENTINEL: &str = "--gui";

/// Invocation mode, derived once from the optional mode argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Batch run on backend defaults.
    #[default]
    Default,
    /// Interactive run with the waveform GUI.
    Gui,
}

impl RunMode {
    /// Derives the mode from the first CLI argument, if present.
    ///
    /// Exactly [`GUI_SENTINEL`] selects GUI mode; anything else, including
    /// absence, stays `Default`. Total — never fails.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            Some(GUI_SENTINEL) => Self::Gui,
            _ => Self::Default,
        }
    }

    /// True for [`RunMode::Gui`].
    pub fn is_gui(self) -> bool {
        self == Self::Gui
    }
}

/// Options attached to a run only in GUI mode.
///
/// Defaults mirror a ModelSim setup: a wave-window init script plus
/// optimizer-access and library-search flags.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GuiOptions {
    /// Scripts the simulator sources after loading the design.
    pub waveform_init_scripts: Vec<PathBuf>,
    /// Extra simulator command-line flags.
    pub backend_cli_flags: Vec<String>,
}

impl Default for GuiOptions {
    fn default() -> Self {
        Self {
            waveform_init_scripts: vec![PathBuf::from("runall_addwave.do")],
            backend_cli_flags: vec![
                "-voptargs=\"+acc".to_owned(),
                "-L work -L pmi_work -L ovi_lifcl".to_owned(),
            ],
        }
    }
}

/// Backend option set handed to every dispatched instance.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SimOptions {
    /// Ordered waveform init scripts; empty outside GUI mode.
    pub waveform_init_scripts: Vec<PathBuf>,
    /// Ordered extra simulator flags; empty outside GUI mode.
    pub backend_cli_flags: Vec<String>,
}

impl SimOptions {
    /// True when no option is set (backend uses its own defaults).
    pub fn is_empty(&self) -> bool {
        self.waveform_init_scripts.is_empty() && self.backend_cli_flags.is_empty()
    }
}

/// Resolves the run mode into the backend option set.
///
/// GUI mode populates both lists from `gui`; default mode yields an empty
/// set.
pub fn resolve(mode: RunMode, gui: &GuiOptions) -> SimOptions {
    match mode {
        RunMode::Default => SimOptions::default(),
        RunMode::Gui => SimOptions {
            waveform_init_scripts: gui.waveform_init_scripts.clone(),
            backend_cli_flags: gui.backend_cli_flags.clone(),
        },
    }
}
