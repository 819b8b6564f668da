// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! Output destination and formatting
//!
//! Output goes to stdout or to a file that already exists. Files are never
//! created: a path that is not an existing regular file is a usage error,
//! reported before anything is written.

use crate::error::{OptemplateError, Result};
use crate::generator::Signature;
use crate::request::GenerationRequest;
use chrono::{DateTime, Local};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One declaration per line
    #[default]
    Text,
    /// Pretty-printed JSON report
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// Interpret an `--output_file` value: absent or `-` means stdout
    pub fn from_arg(arg: Option<&str>) -> Result<Self> {
        match arg {
            None | Some("-") => Ok(OutputTarget::Stdout),
            Some(path) => {
                let path = PathBuf::from(path);
                if !path.is_file() {
                    return Err(OptemplateError::usage(format!(
                        "{} is not a file",
                        path.display()
                    )));
                }
                Ok(OutputTarget::File(path))
            }
        }
    }

    fn display_path(&self) -> &Path {
        match self {
            OutputTarget::Stdout => Path::new("-"),
            OutputTarget::File(path) => path,
        }
    }

    /// Open for writing, truncating an existing file
    fn open(&self) -> Result<Box<dyn Write>> {
        match self {
            OutputTarget::Stdout => Ok(Box::new(io::stdout().lock())),
            OutputTarget::File(path) => {
                let file = OpenOptions::new()
                    .write(true)
                    .truncate(true)
                    .open(path)
                    .map_err(|_| {
                        OptemplateError::usage(format!("Unable to open {}", path.display()))
                    })?;
                Ok(Box::new(file))
            }
        }
    }
}

/// JSON form of a run's output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignatureReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated: Option<String>,
    pub class: String,
    pub namespace: Option<String>,
    pub arg_name: String,
    pub arg_types: Vec<String>,
    pub signatures: Vec<SignatureEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignatureEntry {
    pub operator: String,
    pub category: String,
    pub declarations: Vec<String>,
}

impl SignatureReport {
    pub fn new(request: &GenerationRequest, signatures: &[Signature]) -> Self {
        SignatureReport {
            generated: None,
            class: request.class_name().to_string(),
            namespace: request.namespace().map(str::to_string),
            arg_name: request.arg_name().to_string(),
            arg_types: request.arg_types().to_vec(),
            signatures: signatures
                .iter()
                .map(|s| SignatureEntry {
                    operator: s.operator.to_string(),
                    category: s.category().to_string(),
                    declarations: s.declarations.clone(),
                })
                .collect(),
        }
    }
}

/// Comment banner placed above text output with `--header`
pub fn header_banner(request: &GenerationRequest, generated: &DateTime<Local>) -> Vec<String> {
    vec![
        format!("// Operator declarations for {}", request.qualified_class()),
        format!("// Generated by optemplate on {}", generated.format("%Y-%m-%d %H:%M:%S")),
    ]
}

/// Write declarations one per line
pub fn write_text<W: Write>(out: &mut W, header: &[String], signatures: &[Signature]) -> io::Result<()> {
    for line in header {
        writeln!(out, "{line}")?;
    }
    for signature in signatures {
        for declaration in &signature.declarations {
            writeln!(out, "{declaration}")?;
        }
    }
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, report: &SignatureReport) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)
}

/// What to write and where
#[derive(Debug, Clone)]
pub struct Emission<'a> {
    pub target: &'a OutputTarget,
    pub format: OutputFormat,
    pub header: bool,
}

/// Open the target, write every signature, flush. The destination is closed
/// when this returns, whether or not writing succeeded.
pub fn emit(emission: &Emission<'_>, request: &GenerationRequest, signatures: &[Signature]) -> Result<()> {
    let now = Local::now();
    let path = emission.target.display_path().to_path_buf();
    let io_err = |source: io::Error| OptemplateError::Io {
        path: path.clone(),
        source,
    };

    let mut out = BufWriter::new(emission.target.open()?);
    debug!(destination = %path.display(), format = ?emission.format, "writing signatures");

    match emission.format {
        OutputFormat::Text => {
            let header = if emission.header {
                header_banner(request, &now)
            } else {
                Vec::new()
            };
            write_text(&mut out, &header, signatures).map_err(io_err)?;
        }
        OutputFormat::Json => {
            let mut report = SignatureReport::new(request, signatures);
            if emission.header {
                report.generated = Some(now.to_rfc3339());
            }
            write_json(&mut out, &report).map_err(io_err)?;
        }
    }

    out.flush().map_err(io_err)?;
    info!(
        operators = signatures.len(),
        declarations = signatures.iter().map(|s| s.declarations.len()).sum::<usize>(),
        "wrote {}",
        path.display()
    );
    Ok(())
}
