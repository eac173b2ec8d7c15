//! Java-like rendering of types and type errors for diagnostics.

use crate::{Callee, Mismatch, Type, TypeEnv, TypeError};

pub fn format_type(env: &dyn TypeEnv, ty: &Type) -> String {
    match ty {
        Type::Primitive(prim) => prim.keyword().to_string(),
        Type::Null => "null".to_string(),
        Type::Class(id) => match env.class(*id) {
            Some(def) => def.name.clone(),
            None => format!("<unknown#{}>", id.to_raw()),
        },
    }
}

/// `(int, String)`
pub fn format_type_list(env: &dyn TypeEnv, types: &[Type]) -> String {
    let names: Vec<String> = types.iter().map(|ty| format_type(env, ty)).collect();
    format!("({})", names.join(", "))
}

fn callee_prefix(env: &dyn TypeEnv, callee: &Callee) -> String {
    match callee {
        Callee::Method { receiver, name } => format!("{}.{}()", format_type(env, receiver), name),
        Callee::Constructor { class } => format!("{} constructor", format_type(env, class)),
    }
}

/// Full user-facing message for `err`, naming every type involved.
pub fn render_type_error(env: &dyn TypeEnv, err: &TypeError) -> String {
    match err {
        TypeError::TypeMismatch(Mismatch::Assignment {
            variable,
            expected,
            found,
        }) => format!(
            "Cannot assign {} to variable {} of type {}",
            format_type(env, found),
            variable,
            format_type(env, expected)
        ),
        TypeError::TypeMismatch(Mismatch::Arguments {
            callee,
            expected,
            found,
        }) => format!(
            "{} expects arguments of type {}, but got {}",
            callee_prefix(env, callee),
            format_type_list(env, expected),
            format_type_list(env, found)
        ),
        TypeError::ArgumentCountMismatch {
            callee,
            expected,
            found,
        } => format!(
            "Wrong number of arguments for {}: expected {expected}, got {found}",
            callee_prefix(env, callee)
        ),
        TypeError::IllegalInstantiation { ty } => {
            format!("Type {} is not instantiable", format_type(env, ty))
        }
        TypeError::NoSuchMethod { receiver, name } => {
            format!("{} has no method named {}", format_type(env, receiver), name)
        }
    }
}
