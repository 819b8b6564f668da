// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! Signature generator
//!
//! Renders C++ operator declarations for the operators of a
//! `GenerationRequest`. Member operators are rendered as in-class
//! declarations; `new`/`delete` use the free allocation-function shape.
//!
//! Return and element types the tool cannot know (`operator[]`,
//! `operator()`) are rendered as `auto`.

use crate::catalog::{OperatorCategory, OperatorToken};
use crate::error::Result;
use crate::request::GenerationRequest;
use tracing::debug;

/// Index type for `operator[]` when the arg map does not name one
pub const DEFAULT_INDEX_TYPE: &str = "std::size_t";

/// The declarations rendered for one operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub operator: OperatorToken,
    pub declarations: Vec<String>,
}

impl Signature {
    pub fn category(&self) -> OperatorCategory {
        self.operator.category()
    }
}

/// Render every operator of the request, in catalog order
pub fn render_all(request: &GenerationRequest) -> Vec<Signature> {
    request
        .operators()
        .iter()
        .map(|token| render(*token, request))
        .collect()
}

/// Render an operator given by its text, e.g. `"->*"` or `"new []"`
pub fn render_str(operator: &str, request: &GenerationRequest) -> Result<Signature> {
    let token: OperatorToken = operator.parse()?;
    Ok(render(token, request))
}

pub fn render(token: OperatorToken, request: &GenerationRequest) -> Signature {
    use OperatorToken::*;

    let class = request.qualified_class();
    let arg = request.arg_name();
    let op = token.declarator();
    let typed = |f: &dyn Fn(&str) -> String| -> Vec<String> {
        request
            .arg_types_for(token.category())
            .iter()
            .map(|t| f(t.as_str()))
            .collect()
    };

    let declarations = match token {
        Equal | NotEqual | Less | Greater | LessEq | GreaterEq => {
            typed(&|t: &str| format!("bool operator{op}(const {t}& {arg}) const;"))
        }
        Add | Sub | Mul | Div => typed(&|t: &str| format!("{class} operator{op}(const {t}& {arg}) const;")),
        Incr | Decr => vec![
            format!("{class}& operator{op}();"),
            format!("{class} operator{op}(int);"),
        ],
        Assign | AddAssign | SubAssign | MulAssign | DivAssign | ModAssign => {
            typed(&|t: &str| format!("{class}& operator{op}(const {t}& {arg});"))
        }
        Subscript => {
            let index_types = request
                .arg_map()
                .get(OperatorCategory::Access)
                .map(|types| types.to_vec())
                .unwrap_or_else(|| vec![DEFAULT_INDEX_TYPE.to_string()]);
            index_types
                .iter()
                .flat_map(|t| {
                    [
                        format!("auto& operator[]({t} index);"),
                        format!("const auto& operator[]({t} index) const;"),
                    ]
                })
                .collect()
        }
        Arrow | ArrowStar => vec![
            format!("{class}* operator{op}();"),
            format!("const {class}* operator{op}() const;"),
        ],
        Call => typed(&|t: &str| format!("auto operator()(const {t}& {arg});")),
        New | NewArray => vec![format!("void* operator{op}(std::size_t size);")],
        Delete | DeleteArray => vec![format!("void operator{op}(void* ptr) noexcept;")],
    };

    debug!(operator = %token, count = declarations.len(), "rendered");

    Signature {
        operator: token,
        declarations,
    }
}
