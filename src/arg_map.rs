// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! Per-category argument types (`--arg_map`)
//!
//! Grammar: `category:type1,type2;category:type3;`
//!
//! Each entry names an operator category and the argument types its
//! operators should be generated for, one overload per type. A trailing
//! `;` is allowed. Types containing `,` (template argument lists) cannot
//! be expressed.

use crate::catalog::OperatorCategory;
use crate::error::{OptemplateError, Result};
use std::collections::BTreeMap;
use std::str::FromStr;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgMap {
    entries: BTreeMap<OperatorCategory, Vec<String>>,
}

impl ArgMap {
    /// Parse an `--arg_map` value
    pub fn parse(spec: &str) -> Result<Self> {
        let mut entries = BTreeMap::new();

        for entry in spec.split(';').map(str::trim).filter(|e| !e.is_empty()) {
            let (category_name, types) = entry.split_once(':').ok_or_else(|| {
                OptemplateError::usage(format!(
                    "arg map entry '{entry}' is missing ':' (expected <category>:<type>[,<type>...])"
                ))
            })?;

            let category: OperatorCategory = category_name.parse()?;
            if !category.takes_typed_arg() {
                return Err(OptemplateError::usage(format!(
                    "{category} operators take no typed argument, remove '{entry}' from the arg map"
                )));
            }

            let types: Vec<String> = types.split(',').map(|t| t.trim().to_string()).collect();
            if types.iter().any(|t| t.is_empty()) {
                return Err(OptemplateError::usage(format!(
                    "arg map entry '{entry}' has an empty type"
                )));
            }

            if entries.insert(category, types).is_some() {
                return Err(OptemplateError::usage(format!(
                    "category {category} appears more than once in the arg map"
                )));
            }
        }

        if entries.is_empty() {
            return Err(OptemplateError::usage("arg map is empty"));
        }

        Ok(ArgMap { entries })
    }

    /// Argument types given for `category`, if any
    pub fn get(&self, category: OperatorCategory) -> Option<&[String]> {
        self.entries.get(&category).map(|v| v.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (OperatorCategory, &[String])> {
        self.entries.iter().map(|(c, t)| (*c, t.as_slice()))
    }
}

impl FromStr for ArgMap {
    type Err = OptemplateError;

    fn from_str(s: &str) -> Result<Self> {
        ArgMap::parse(s)
    }
}
