// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! Command-line arguments
//!
//! Operator selection switches combine: each adds its category to the
//! selection. `--all` selects every operator regardless of the others, and
//! no switch at all selects the default set (==, !=, <=, >=, <, >, (), []).

use crate::arg_map::ArgMap;
use crate::catalog::{resolve, CategorySet, OperatorSet};
use crate::error::Result;
use crate::output::{OutputFormat, OutputTarget};
use crate::request::{GenerationRequest, DEFAULT_ARG_NAME};
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "optemplate")]
#[command(about = "Generate C++ operator overload signatures for a class")]
#[command(after_help = "Without operator selection switches the generated operators are ==, !=, <=, >=, <, >, (), []")]
pub struct Args {
    /// Name of class to which the operators belong
    #[arg(short = 'c', long = "class", value_name = "NAME", help_heading = "Primary arguments")]
    pub class_name: String,

    /// Type of argument, default is class name (with namespace if provided). Comma-separated for several overloads; types containing ',' (e.g. std::map<int,int>) cannot be given
    #[arg(short = 't', long = "type", value_name = "TYPE", value_delimiter = ',', help_heading = "Primary arguments")]
    pub arg_types: Vec<String>,

    /// Name of argument in signature
    #[arg(short = 'a', long = "arg", value_name = "NAME", default_value = DEFAULT_ARG_NAME, help_heading = "Primary arguments")]
    pub arg_name: String,

    /// Namespace to add to signatures
    #[arg(short = 'n', long, value_name = "NS", help_heading = "Primary arguments")]
    pub namespace: Option<String>,

    /// Existing file to overwrite, or - for stdout (the default)
    #[arg(short = 'o', long = "output_file", value_name = "PATH", help_heading = "Primary arguments")]
    pub output_file: Option<String>,

    /// Generate comparison operators
    #[arg(long, help_heading = "Operator selection")]
    pub comparators: bool,

    /// Generate arithmetic operators
    #[arg(long = "arithmatic", visible_alias = "arithmetic", help_heading = "Operator selection")]
    pub arithmetic: bool,

    /// Generate increment/decrement operators
    #[arg(long, help_heading = "Operator selection")]
    pub increment: bool,

    /// Generate assignment operators
    #[arg(long, help_heading = "Operator selection")]
    pub assignment: bool,

    /// Generate access operators
    #[arg(long, help_heading = "Operator selection")]
    pub access: bool,

    /// Generate the call operator
    #[arg(long, help_heading = "Operator selection")]
    pub call: bool,

    /// Generate new/delete operators
    #[arg(long, help_heading = "Operator selection")]
    pub initialize: bool,

    /// Generate all operators (other selection switches are ignored)
    #[arg(long, help_heading = "Operator selection")]
    pub all: bool,

    /// Argument types per operator category: <category>:type1,type2;... (types containing ',' cannot be given)
    #[arg(long = "arg_map", value_name = "SPEC", help_heading = "Experimental")]
    pub arg_map: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Prefix output with a comment banner naming the class and generation time
    #[arg(long)]
    pub header: bool,

    /// Log debug detail to stderr (OPTEMPLATE_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Categories selected by the individual switches
    pub fn categories(&self) -> CategorySet {
        [
            (self.comparators, CategorySet::COMPARISON),
            (self.arithmetic, CategorySet::ARITHMETIC),
            (self.increment, CategorySet::INCREMENT_DECREMENT),
            (self.assignment, CategorySet::ASSIGNMENT),
            (self.access, CategorySet::ACCESS),
            (self.call, CategorySet::CALL),
            (self.initialize, CategorySet::INIT_DELETE),
        ]
        .into_iter()
        .filter(|(selected, _)| *selected)
        .fold(CategorySet::empty(), |acc, (_, flag)| acc | flag)
    }

    /// The operators to generate
    pub fn operators(&self) -> OperatorSet {
        resolve(self.categories(), self.all)
    }

    pub fn to_request(&self) -> Result<GenerationRequest> {
        let arg_map = match &self.arg_map {
            Some(spec) => spec.parse::<ArgMap>()?,
            None => ArgMap::default(),
        };

        GenerationRequest::builder(self.class_name.as_str())
            .namespace(self.namespace.clone())
            .arg_types(self.arg_types.iter().map(String::as_str))
            .arg_name(self.arg_name.as_str())
            .operators(self.operators())
            .arg_map(arg_map)
            .build()
    }

    pub fn output_target(&self) -> Result<OutputTarget> {
        OutputTarget::from_arg(self.output_file.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{all_tokens, default_tokens, tokens_for, OperatorCategory};

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("optemplate").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_class_is_required() {
        let err = Args::try_parse_from(["optemplate", "--comparators"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["-c", "Foo"]);
        assert_eq!(args.arg_name, "cmp");
        assert!(args.arg_types.is_empty());
        assert_eq!(args.format, OutputFormat::Text);
        assert_eq!(args.operators(), default_tokens());
        assert_eq!(args.output_target().unwrap(), OutputTarget::Stdout);
    }

    #[test]
    fn test_switches_union() {
        let args = parse(&["-c", "Foo", "--comparators", "--arithmatic"]);
        assert_eq!(args.categories(), CategorySet::COMPARISON | CategorySet::ARITHMETIC);

        let expected: OperatorSet = tokens_for(OperatorCategory::Comparison)
            .iter()
            .chain(tokens_for(OperatorCategory::Arithmetic))
            .copied()
            .collect();
        assert_eq!(args.operators(), expected);
        assert_eq!(args.operators().len(), 10);
    }

    #[test]
    fn test_arithmetic_alias() {
        let args = parse(&["-c", "Foo", "--arithmetic"]);
        assert!(args.arithmetic);
    }

    #[test]
    fn test_all_overrides_switches() {
        let args = parse(&["-c", "Foo", "--call", "--all"]);
        assert_eq!(args.operators(), all_tokens());
    }

    #[test]
    fn test_type_list() {
        let args = parse(&["-c", "Foo", "-t", "int,double", "-a", "rhs", "-n", "geo"]);
        let request = args.to_request().unwrap();
        assert_eq!(request.arg_types(), &["int".to_string(), "double".to_string()]);
        assert_eq!(request.arg_name(), "rhs");
        assert_eq!(request.qualified_class(), "geo::Foo");
    }

    #[test]
    fn test_template_class_and_any_arg_name() {
        let args = parse(&["-c", "Matrix<T>", "-a", "other_"]);
        let request = args.to_request().unwrap();
        assert_eq!(request.qualified_class(), "Matrix<T>");
        assert_eq!(request.arg_name(), "other_");
    }

    #[test]
    fn test_type_list_splits_on_every_comma() {
        let args = parse(&["-c", "Foo", "-t", "std::map<int,int>"]);
        assert_eq!(args.arg_types, vec!["std::map<int", "int>"]);
    }

    #[test]
    fn test_bad_arg_map_is_usage_error() {
        let args = parse(&["-c", "Foo", "--arg_map", "comparators"]);
        assert!(args.to_request().unwrap_err().is_usage());
    }

    #[test]
    fn test_format_json() {
        let args = parse(&["-c", "Foo", "--format", "json", "--header"]);
        assert_eq!(args.format, OutputFormat::Json);
        assert!(args.header);
    }
}
