use std::fmt;

use thiserror::Error;

use crate::{ClassId, Type};

/// The member a call resolves against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Callee {
    Method { receiver: Type, name: String },
    Constructor { class: Type },
}

impl fmt::Display for Callee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Callee::Method { name, .. } => write!(f, "method `{name}`"),
            Callee::Constructor { .. } => f.write_str("constructor"),
        }
    }
}

/// Where a value of the wrong type was supplied.
///
/// Argument mismatches are reported for the whole argument list at once, not per position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mismatch {
    Assignment {
        variable: String,
        expected: Type,
        found: Type,
    },
    Arguments {
        callee: Callee,
        expected: Vec<Type>,
        found: Vec<Type>,
    },
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mismatch::Assignment { variable, .. } => {
                write!(f, "assignment to variable `{variable}`")
            }
            Mismatch::Arguments { callee, .. } => write!(f, "arguments of {callee}"),
        }
    }
}

/// A static type error found while checking an expression.
///
/// Payloads are structured so callers can branch on them; user-facing text that names the
/// involved types is produced by [`crate::format::render_type_error`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TypeError {
    #[error("incompatible types in {0}")]
    TypeMismatch(Mismatch),
    #[error("wrong number of arguments for {callee}: expected {expected}, got {found}")]
    ArgumentCountMismatch {
        callee: Callee,
        expected: usize,
        found: usize,
    },
    #[error("type is not instantiable")]
    IllegalInstantiation { ty: Type },
    #[error("no method named `{name}` on receiver type")]
    NoSuchMethod { receiver: Type, name: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeErrorKind {
    TypeMismatch,
    ArgumentCountMismatch,
    IllegalInstantiation,
    NoSuchMethod,
}

impl TypeErrorKind {
    pub fn code(self) -> &'static str {
        match self {
            TypeErrorKind::TypeMismatch => "TYPE_MISMATCH",
            TypeErrorKind::ArgumentCountMismatch => "ARGUMENT_COUNT",
            TypeErrorKind::IllegalInstantiation => "ILLEGAL_INSTANTIATION",
            TypeErrorKind::NoSuchMethod => "NO_SUCH_METHOD",
        }
    }
}

impl TypeError {
    pub fn kind(&self) -> TypeErrorKind {
        match self {
            TypeError::TypeMismatch(_) => TypeErrorKind::TypeMismatch,
            TypeError::ArgumentCountMismatch { .. } => TypeErrorKind::ArgumentCountMismatch,
            TypeError::IllegalInstantiation { .. } => TypeErrorKind::IllegalInstantiation,
            TypeError::NoSuchMethod { .. } => TypeErrorKind::NoSuchMethod,
        }
    }
}

/// Errors raised while registering classes in a [`crate::TypeStore`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TypeStoreError {
    #[error("class `{name}` is already defined")]
    DuplicateClass { name: String },
    #[error("`{name}` is a reserved type name")]
    ReservedName { name: String },
    #[error("unknown class id {}", .id.to_raw())]
    UnknownClass { id: ClassId },
    #[error("method `{method}` is already declared on class `{class}`")]
    DuplicateMethod { class: String, method: String },
}
