//! Static type checking of simple Java expressions: variable reads, literals, assignment, method
//! calls and object construction.
//!
//! Expression trees are built by an external front end with every variable's declared type
//! already resolved. Nothing here evaluates code; [`Expr::static_type`] answers "what type does
//! this expression have" and [`Expr::check_types`] answers "is it well-typed".

mod check;
mod diagnostics;
mod expr;

pub use crate::diagnostics::{check_all, diagnostic};
pub use crate::expr::{Assign, ConstructorCall, Expr, Literal, MethodCall, Variable};

/// Tracing target used for checker events.
pub const TYPECK_TARGET: &str = "nova.typeck";
