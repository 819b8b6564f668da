// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! Diagnostics to stderr: tracing setup and user-facing error reports.

use colored::Colorize;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter, e.g. `optemplate=trace`
pub const LOG_ENV: &str = "OPTEMPLATE_LOG";

/// Install the stderr subscriber. Safe to call more than once.
pub fn init(verbose: bool) {
    let default = if verbose { "optemplate=debug" } else { "optemplate=warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// `ERROR: <msg>`, followed by the usage text when given
pub fn format_error(msg: &str, usage: Option<&str>) -> String {
    let mut out = format!("{} {msg}", "ERROR:".red().bold());
    if let Some(usage) = usage {
        out.push('\n');
        out.push('\n');
        out.push_str(usage);
    }
    out
}
