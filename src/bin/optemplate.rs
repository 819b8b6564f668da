// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! Generate C++ operator overload signatures for a class
//!
//! Usage:
//!   optemplate -c Foo                          # default operators to stdout
//!   optemplate -c Foo -n geo --comparators --arithmatic
//!   optemplate -c Foo --all -o include/foo_ops.hpp
//!   optemplate -c Foo --arg_map 'arithmetic:double;access:int'
//!
//! Binary: optemplate

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use optemplate::generator::render_all;
use optemplate::logging;
use optemplate::output::{emit, Emission};
use optemplate::{Args, OptemplateError};
use std::process::ExitCode;
use tracing::{debug, info};

fn run(args: &Args) -> Result<()> {
    // Validate everything before the destination is touched
    let request = args.to_request()?;
    let target = args.output_target()?;

    info!(
        class = %request.qualified_class(),
        operators = request.operators().len(),
        "generating signatures"
    );
    debug!(?request, "resolved request");

    let signatures = render_all(&request);
    let emission = Emission {
        target: &target,
        format: args.format,
        header: args.header,
    };
    emit(&emission, &request, &signatures)
        .with_context(|| format!("Failed to write signatures for {}", request.class_name()))?;

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let usage = match err.downcast_ref::<OptemplateError>() {
                Some(e) if e.is_usage() => Some(Args::command().render_usage().to_string()),
                _ => None,
            };
            eprintln!("{}", logging::format_error(&format!("{err:#}"), usage.as_deref()));
            ExitCode::FAILURE
        }
    }
}
