// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! Validated generation configuration for one invocation.

use crate::arg_map::ArgMap;
use crate::catalog::{default_tokens, OperatorCategory, OperatorSet};
use crate::error::{OptemplateError, Result};
use regex::Regex;
use std::sync::OnceLock;

pub const DEFAULT_ARG_NAME: &str = "cmp";

fn namespace_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(::)?[A-Za-z_][A-Za-z0-9_]*(::[A-Za-z_][A-Za-z0-9_]*)*$")
            .expect("valid namespace regex")
    })
}

/// Everything the generator needs to render declarations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    class_name: String,
    namespace: Option<String>,
    arg_types: Vec<String>,
    arg_name: String,
    operators: OperatorSet,
    arg_map: ArgMap,
}

impl GenerationRequest {
    pub fn builder(class_name: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(class_name)
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Class name with the namespace prefix, if any
    pub fn qualified_class(&self) -> String {
        match &self.namespace {
            Some(ns) => format!("{ns}::{}", self.class_name),
            None => self.class_name.clone(),
        }
    }

    /// Argument types used when no arg map entry applies
    pub fn arg_types(&self) -> &[String] {
        &self.arg_types
    }

    pub fn arg_name(&self) -> &str {
        &self.arg_name
    }

    pub fn operators(&self) -> &OperatorSet {
        &self.operators
    }

    pub fn arg_map(&self) -> &ArgMap {
        &self.arg_map
    }

    /// Argument types for operators of `category`: the arg map entry if one
    /// exists, otherwise the request-wide types
    pub fn arg_types_for(&self, category: OperatorCategory) -> &[String] {
        self.arg_map.get(category).unwrap_or(&self.arg_types)
    }
}

/// Builds a `GenerationRequest`, applying defaults and validation in `build`
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    class_name: String,
    namespace: Option<String>,
    arg_types: Vec<String>,
    arg_name: Option<String>,
    operators: Option<OperatorSet>,
    arg_map: ArgMap,
}

impl RequestBuilder {
    pub fn new(class_name: impl Into<String>) -> Self {
        RequestBuilder {
            class_name: class_name.into(),
            namespace: None,
            arg_types: Vec::new(),
            arg_name: None,
            operators: None,
            arg_map: ArgMap::default(),
        }
    }

    pub fn namespace(mut self, namespace: Option<impl Into<String>>) -> Self {
        self.namespace = namespace.map(Into::into);
        self
    }

    pub fn arg_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.arg_types = types.into_iter().map(Into::into).collect();
        self
    }

    pub fn arg_name(mut self, name: impl Into<String>) -> Self {
        self.arg_name = Some(name.into());
        self
    }

    pub fn operators(mut self, operators: OperatorSet) -> Self {
        self.operators = Some(operators);
        self
    }

    pub fn arg_map(mut self, arg_map: ArgMap) -> Self {
        self.arg_map = arg_map;
        self
    }

    pub fn build(self) -> Result<GenerationRequest> {
        let class_name = self.class_name.trim().to_string();
        if class_name.is_empty() {
            return Err(OptemplateError::usage("a class name must be provided"));
        }

        let namespace = match self.namespace.map(|ns| ns.trim().to_string()) {
            Some(ns) if ns.is_empty() => None,
            Some(ns) if !namespace_re().is_match(&ns) => {
                return Err(OptemplateError::usage(format!("'{ns}' is not a valid namespace")));
            }
            other => other,
        };

        let arg_name = self
            .arg_name
            .map(|a| a.trim().to_string())
            .unwrap_or_else(|| DEFAULT_ARG_NAME.to_string());
        if arg_name.is_empty() {
            return Err(OptemplateError::usage("argument name must not be empty"));
        }

        let mut arg_types: Vec<String> = self.arg_types.iter().map(|t| t.trim().to_string()).collect();
        if arg_types.iter().any(|t| t.is_empty()) {
            return Err(OptemplateError::usage("argument types must not be empty"));
        }

        let mut request = GenerationRequest {
            class_name,
            namespace,
            arg_types: Vec::new(),
            arg_name,
            operators: match self.operators {
                Some(set) if !set.is_empty() => set,
                _ => default_tokens(),
            },
            arg_map: self.arg_map,
        };

        if arg_types.is_empty() {
            arg_types.push(request.qualified_class());
        }
        request.arg_types = arg_types;

        Ok(request)
    }
}
