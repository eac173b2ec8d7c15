use nova_types::format::render_type_error;
use nova_types::{Diagnostic, TypeEnv, TypeError};

use crate::Expr;

pub fn diagnostic(env: &dyn TypeEnv, err: &TypeError) -> Diagnostic {
    Diagnostic::error(err.kind().code(), render_type_error(env, err))
}

/// Check independent expression trees, reporting at most one diagnostic per tree.
///
/// A failing tree does not stop the trees after it from being checked.
pub fn check_all<'a>(
    env: &dyn TypeEnv,
    exprs: impl IntoIterator<Item = &'a Expr>,
) -> Vec<Diagnostic> {
    exprs
        .into_iter()
        .filter_map(|expr| expr.check_types(env).err())
        .map(|err| diagnostic(env, &err))
        .collect()
}
