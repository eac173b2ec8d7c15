use nova_types::{
    constructor, is_subtype, method_named, Callee, Mismatch, Type, TypeEnv, TypeError,
};

use crate::expr::{Assign, ConstructorCall, Expr, MethodCall};
use crate::TYPECK_TARGET;

impl Expr {
    /// Check this expression for static type errors.
    ///
    /// Sub-expressions are checked first, so the error returned is always the innermost one.
    /// At most one error is reported per call.
    pub fn check_types(&self, env: &dyn TypeEnv) -> Result<(), TypeError> {
        self.check(env).map(|_| ())
    }

    /// Check this expression and return its static type, visiting each node once.
    fn check(&self, env: &dyn TypeEnv) -> Result<Type, TypeError> {
        let result = match self {
            Expr::Variable(var) => Ok(var.declared_type),
            Expr::Literal(lit) => Ok(lit.ty),
            Expr::Null => Ok(Type::Null),
            Expr::Assign(assign) => check_assign(env, assign),
            Expr::MethodCall(call) => check_method_call(env, call),
            Expr::New(new) => check_constructor_call(env, new),
        };

        match &result {
            Ok(_) => tracing::trace!(target: TYPECK_TARGET, expr = self.kind_name(), "well-typed"),
            Err(err) => tracing::trace!(
                target: TYPECK_TARGET,
                expr = self.kind_name(),
                kind = ?err.kind(),
                "check failed"
            ),
        }
        result
    }
}

/// Report an error detected at the node itself (not propagated from a child).
fn reject<T>(node: &'static str, err: TypeError) -> Result<T, TypeError> {
    tracing::debug!(
        target: TYPECK_TARGET,
        expr = node,
        kind = ?err.kind(),
        error = %err,
        "type error"
    );
    Err(err)
}

fn check_assign(env: &dyn TypeEnv, assign: &Assign) -> Result<Type, TypeError> {
    let found = assign.rhs.check(env)?;

    let expected = assign.lhs.declared_type;
    if !is_subtype(env, &found, &expected) {
        let variable = assign.lhs.name.clone();
        return reject(
            "assignment",
            TypeError::TypeMismatch(Mismatch::Assignment {
                variable,
                expected,
                found,
            }),
        );
    }
    Ok(expected)
}

fn check_method_call(env: &dyn TypeEnv, call: &MethodCall) -> Result<Type, TypeError> {
    let receiver = call.receiver.check(env)?;
    let found = check_args(env, &call.args)?;

    let method = match method_named(env, &receiver, &call.name) {
        Ok(method) => method,
        Err(err) => return reject("method call", err),
    };
    let callee = Callee::Method {
        receiver,
        name: call.name.clone(),
    };
    check_signature("method call", env, callee, &method.params, found)?;
    Ok(method.return_type)
}

fn check_constructor_call(env: &dyn TypeEnv, new: &ConstructorCall) -> Result<Type, TypeError> {
    let found = check_args(env, &new.args)?;

    let illegal = || TypeError::IllegalInstantiation { ty: new.class };
    if !is_subtype(env, &new.class, &env.object_type()) {
        return reject("constructor call", illegal());
    }
    // `null` passes the subtype test above but has nothing to construct.
    let Some(ctor) = constructor(env, &new.class) else {
        return reject("constructor call", illegal());
    };

    let callee = Callee::Constructor { class: new.class };
    check_signature("constructor call", env, callee, &ctor.params, found)?;
    Ok(new.class)
}

/// Check every argument in order and collect their static types.
fn check_args(env: &dyn TypeEnv, args: &[Expr]) -> Result<Vec<Type>, TypeError> {
    args.iter().map(|arg| arg.check(env)).collect()
}

/// Count first, then types; a type mismatch covers the whole argument list.
fn check_signature(
    node: &'static str,
    env: &dyn TypeEnv,
    callee: Callee,
    params: &[Type],
    found: Vec<Type>,
) -> Result<(), TypeError> {
    if params.len() != found.len() {
        return reject(
            node,
            TypeError::ArgumentCountMismatch {
                callee,
                expected: params.len(),
                found: found.len(),
            },
        );
    }

    let all_match = found
        .iter()
        .zip(params)
        .all(|(arg, param)| is_subtype(env, arg, param));
    if !all_match {
        return reject(
            node,
            TypeError::TypeMismatch(Mismatch::Arguments {
                callee,
                expected: params.to_vec(),
                found,
            }),
        );
    }
    Ok(())
}
