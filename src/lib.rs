// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! Optemplate - C++ operator overload signature generation
//!
//! Pick operator categories, get one declaration per operator for your
//! class. The catalog resolves a category selection into a set of
//! operators; the generator renders each one.

pub mod arg_map;
pub mod args;
pub mod catalog;
pub mod error;
pub mod generator;
pub mod logging;
pub mod output;
pub mod request;

// Re-export commonly used items
pub use arg_map::ArgMap;
pub use args::Args;
pub use catalog::{
    all_tokens, default_tokens, resolve, tokens_for, CategorySet, OperatorCategory, OperatorSet,
    OperatorToken,
};
pub use error::OptemplateError;
pub use generator::{render, render_all, render_str, Signature};
pub use request::GenerationRequest;
