//! Decide between styled and plain human output.
//!
//! Machine-readable formats and non-terminal outputs always stay plain.

use std::io::IsTerminal;

use crate::cli::output::OutputFormat;

/// Why the output mode was selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputDecisionReason {
    /// JSON output is never styled.
    MachineReadableFormat,
    /// Explicit plain text output format.
    PlainFormat,
    /// NO_COLOR disables all styling.
    EnvNoColor,
    /// TENK_PLAIN_OUTPUT forces plain output.
    EnvPlainOutput,
    /// Output is piped or redirected.
    NotTerminal,
    /// Human output on a terminal.
    HumanDefault,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputDecision {
    pub use_styling: bool,
    pub reason: OutputDecisionReason,
}

impl OutputDecision {
    const fn styled(reason: OutputDecisionReason) -> Self {
        Self {
            use_styling: true,
            reason,
        }
    }

    const fn plain(reason: OutputDecisionReason) -> Self {
        Self {
            use_styling: false,
            reason,
        }
    }
}

/// Environment snapshot used for output detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputEnvironment {
    pub no_color: bool,
    pub plain_output: bool,
    pub stdout_is_terminal: bool,
}

impl OutputEnvironment {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            no_color: env_flag("NO_COLOR"),
            plain_output: env_flag("TENK_PLAIN_OUTPUT"),
            stdout_is_terminal: std::io::stdout().is_terminal(),
        }
    }

    #[must_use]
    pub const fn new(no_color: bool, plain_output: bool, stdout_is_terminal: bool) -> Self {
        Self {
            no_color,
            plain_output,
            stdout_is_terminal,
        }
    }
}

/// Decide whether human output should carry terminal styling.
#[must_use]
pub const fn decide(format: OutputFormat, env: OutputEnvironment) -> OutputDecision {
    match format {
        OutputFormat::Json => OutputDecision::plain(OutputDecisionReason::MachineReadableFormat),
        OutputFormat::Plain => OutputDecision::plain(OutputDecisionReason::PlainFormat),
        OutputFormat::Human => {
            if env.no_color {
                OutputDecision::plain(OutputDecisionReason::EnvNoColor)
            } else if env.plain_output {
                OutputDecision::plain(OutputDecisionReason::EnvPlainOutput)
            } else if !env.stdout_is_terminal {
                OutputDecision::plain(OutputDecisionReason::NotTerminal)
            } else {
                OutputDecision::styled(OutputDecisionReason::HumanDefault)
            }
        }
    }
}

fn env_flag(key: &str) -> bool {
    std::env::var_os(key).is_some()
}
