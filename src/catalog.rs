// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! Operator catalog
//!
//! Fixed tables of C++ overloadable operators grouped by category, the
//! documented default selection, and resolution of a category selection
//! into the final set of operators to generate.

use crate::error::{OptemplateError, Result};
use bitflags::bitflags;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// A logical group of related operator overloads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OperatorCategory {
    Comparison,
    Arithmetic,
    IncrementDecrement,
    Assignment,
    Access,
    Call,
    InitDelete,
}

impl OperatorCategory {
    pub const ALL: [OperatorCategory; 7] = [
        OperatorCategory::Comparison,
        OperatorCategory::Arithmetic,
        OperatorCategory::IncrementDecrement,
        OperatorCategory::Assignment,
        OperatorCategory::Access,
        OperatorCategory::Call,
        OperatorCategory::InitDelete,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            OperatorCategory::Comparison => "comparison",
            OperatorCategory::Arithmetic => "arithmetic",
            OperatorCategory::IncrementDecrement => "incdec",
            OperatorCategory::Assignment => "assignment",
            OperatorCategory::Access => "access",
            OperatorCategory::Call => "call",
            OperatorCategory::InitDelete => "initdelete",
        }
    }

    /// The bit this category occupies in a `CategorySet`
    pub fn flag(&self) -> CategorySet {
        match self {
            OperatorCategory::Comparison => CategorySet::COMPARISON,
            OperatorCategory::Arithmetic => CategorySet::ARITHMETIC,
            OperatorCategory::IncrementDecrement => CategorySet::INCREMENT_DECREMENT,
            OperatorCategory::Assignment => CategorySet::ASSIGNMENT,
            OperatorCategory::Access => CategorySet::ACCESS,
            OperatorCategory::Call => CategorySet::CALL,
            OperatorCategory::InitDelete => CategorySet::INIT_DELETE,
        }
    }

    /// Whether operators of this category take a caller-typed parameter
    pub fn takes_typed_arg(&self) -> bool {
        matches!(
            self,
            OperatorCategory::Comparison
                | OperatorCategory::Arithmetic
                | OperatorCategory::Assignment
                | OperatorCategory::Access
                | OperatorCategory::Call
        )
    }
}

impl fmt::Display for OperatorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OperatorCategory {
    type Err = OptemplateError;

    /// Accepts both the category names and the command-line switch names
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "comparison" | "comparators" | "comp" => Ok(OperatorCategory::Comparison),
            "arithmetic" | "arithmatic" | "arith" => Ok(OperatorCategory::Arithmetic),
            "incdec" | "increment" | "incr" => Ok(OperatorCategory::IncrementDecrement),
            "assignment" | "assign" => Ok(OperatorCategory::Assignment),
            "access" => Ok(OperatorCategory::Access),
            "call" => Ok(OperatorCategory::Call),
            "initdelete" | "initialize" | "init" => Ok(OperatorCategory::InitDelete),
            _ => Err(OptemplateError::InvalidCategory(s.to_string())),
        }
    }
}

/// One overloadable operator. Variant order is output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OperatorToken {
    Equal,
    NotEqual,
    Less,
    Greater,
    LessEq,
    GreaterEq,
    Add,
    Sub,
    Mul,
    Div,
    Incr,
    Decr,
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    ModAssign,
    Subscript,
    Arrow,
    ArrowStar,
    Call,
    New,
    Delete,
    NewArray,
    DeleteArray,
}

use OperatorToken::*;

const COMPARISON_TOKENS: &[OperatorToken] = &[Equal, NotEqual, Less, Greater, LessEq, GreaterEq];
const ARITHMETIC_TOKENS: &[OperatorToken] = &[Add, Sub, Mul, Div];
const INCREMENT_TOKENS: &[OperatorToken] = &[Incr, Decr];
const ASSIGNMENT_TOKENS: &[OperatorToken] =
    &[Assign, AddAssign, SubAssign, MulAssign, DivAssign, ModAssign];
const ACCESS_TOKENS: &[OperatorToken] = &[Subscript, Arrow, ArrowStar];
const CALL_TOKENS: &[OperatorToken] = &[Call];
const INIT_DELETE_TOKENS: &[OperatorToken] = &[New, Delete, NewArray, DeleteArray];

/// Generated when no category switch is given. Kept separate from the
/// category tables: it mixes comparison, call and access operators.
/// Listed in documented order; output follows `OperatorToken` order.
const DEFAULT_TOKENS: &[OperatorToken] =
    &[Equal, NotEqual, LessEq, GreaterEq, Less, Greater, Call, Subscript];

impl OperatorToken {
    pub fn as_str(&self) -> &'static str {
        match self {
            Equal => "==",
            NotEqual => "!=",
            Less => "<",
            Greater => ">",
            LessEq => "<=",
            GreaterEq => ">=",
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Incr => "++",
            Decr => "--",
            Assign => "=",
            AddAssign => "+=",
            SubAssign => "-=",
            MulAssign => "*=",
            DivAssign => "/=",
            ModAssign => "%=",
            Subscript => "[]",
            Arrow => "->",
            ArrowStar => "->*",
            Call => "()",
            New => "new",
            Delete => "delete",
            NewArray => "new []",
            DeleteArray => "delete []",
        }
    }

    /// Text following `operator` in a declaration (`new []` becomes ` new[]`)
    pub fn declarator(&self) -> &'static str {
        match self {
            NewArray => " new[]",
            DeleteArray => " delete[]",
            New => " new",
            Delete => " delete",
            other => other.as_str(),
        }
    }

    pub fn category(&self) -> OperatorCategory {
        match self {
            Equal | NotEqual | Less | Greater | LessEq | GreaterEq => OperatorCategory::Comparison,
            Add | Sub | Mul | Div => OperatorCategory::Arithmetic,
            Incr | Decr => OperatorCategory::IncrementDecrement,
            Assign | AddAssign | SubAssign | MulAssign | DivAssign | ModAssign => {
                OperatorCategory::Assignment
            }
            Subscript | Arrow | ArrowStar => OperatorCategory::Access,
            Call => OperatorCategory::Call,
            New | Delete | NewArray | DeleteArray => OperatorCategory::InitDelete,
        }
    }
}

impl fmt::Display for OperatorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperatorToken {
    type Err = OptemplateError;

    fn from_str(s: &str) -> Result<Self> {
        // "new[]" and "new  []" both mean "new []"
        let normalized: String = s.split_whitespace().collect::<Vec<_>>().join("");
        let found = OperatorCategory::ALL
            .iter()
            .flat_map(|c| tokens_for(*c).iter())
            .find(|t| t.as_str().replace(' ', "") == normalized);
        match found {
            Some(token) => Ok(*token),
            None => Err(OptemplateError::UnknownToken(s.to_string())),
        }
    }
}

bitflags! {
    /// Categories chosen on the command line
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CategorySet: u8 {
        const COMPARISON = 1 << 0;
        const ARITHMETIC = 1 << 1;
        const INCREMENT_DECREMENT = 1 << 2;
        const ASSIGNMENT = 1 << 3;
        const ACCESS = 1 << 4;
        const CALL = 1 << 5;
        const INIT_DELETE = 1 << 6;
    }
}

impl CategorySet {
    /// Selected categories in catalog order
    pub fn categories(&self) -> impl Iterator<Item = OperatorCategory> + '_ {
        OperatorCategory::ALL
            .into_iter()
            .filter(move |c| self.contains(c.flag()))
    }
}

impl From<OperatorCategory> for CategorySet {
    fn from(category: OperatorCategory) -> Self {
        category.flag()
    }
}

/// Ordered, duplicate-free operator selection
pub type OperatorSet = BTreeSet<OperatorToken>;

/// The operators of one category, in output order
pub fn tokens_for(category: OperatorCategory) -> &'static [OperatorToken] {
    match category {
        OperatorCategory::Comparison => COMPARISON_TOKENS,
        OperatorCategory::Arithmetic => ARITHMETIC_TOKENS,
        OperatorCategory::IncrementDecrement => INCREMENT_TOKENS,
        OperatorCategory::Assignment => ASSIGNMENT_TOKENS,
        OperatorCategory::Access => ACCESS_TOKENS,
        OperatorCategory::Call => CALL_TOKENS,
        OperatorCategory::InitDelete => INIT_DELETE_TOKENS,
    }
}

/// The fallback selection {==, !=, <=, >=, <, >, (), []}, iterated in
/// `OperatorToken` order like any `OperatorSet`
pub fn default_tokens() -> OperatorSet {
    DEFAULT_TOKENS.iter().copied().collect()
}

/// Every operator in the catalog, each exactly once
pub fn all_tokens() -> OperatorSet {
    tokens_in(CategorySet::all())
}

/// Union of the operators of every category in `categories`
pub fn tokens_in(categories: CategorySet) -> OperatorSet {
    categories
        .categories()
        .flat_map(|c| tokens_for(c).iter().copied())
        .collect()
}

/// Resolve command-line selection into the operators to generate.
///
/// `all` wins over any category selection; an empty selection falls back
/// to `default_tokens()`. The result is never empty.
pub fn resolve(categories: CategorySet, all: bool) -> OperatorSet {
    if all {
        all_tokens()
    } else if categories.is_empty() {
        default_tokens()
    } else {
        tokens_in(categories)
    }
}
