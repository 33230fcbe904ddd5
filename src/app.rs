use tracing::debug;

use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::error::Result;
use crate::output::{OutputEnvironment, decide};

/// Process-wide settings resolved once at startup.
pub struct AppContext {
    pub config: Config,
    pub output_format: OutputFormat,
    pub environment: OutputEnvironment,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = Config::load(cli.config.as_deref())?;
        let output_format = cli.output_format();
        let environment = OutputEnvironment::from_env();
        let output = decide(output_format, environment);
        console::set_colors_enabled(output.use_styling);
        debug!(format = ?output_format, reason = ?output.reason, "output mode selected");

        Ok(Self {
            config,
            output_format,
            environment,
        })
    }
}
