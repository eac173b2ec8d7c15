use crate::{ancestors, ConstructorDef, MethodDef, Type, TypeEnv, TypeError};

/// Resolve `name` on `receiver`, searching the class itself and then its ancestors.
///
/// Receivers that are not class types (primitives, `null`) have no methods.
pub fn method_named<'env>(
    env: &'env dyn TypeEnv,
    receiver: &Type,
    name: &str,
) -> Result<&'env MethodDef, TypeError> {
    let no_such_method = || TypeError::NoSuchMethod {
        receiver: *receiver,
        name: name.to_string(),
    };

    let Type::Class(class) = receiver else {
        return Err(no_such_method());
    };

    ancestors(env, *class)
        .filter_map(|id| env.class(id))
        .find_map(|def| def.declared_method(name))
        .ok_or_else(no_such_method)
}

/// The constructor of `ty`, if `ty` is a class known to `env`.
///
/// Callers must check instantiability first; primitives and `null` have no constructor.
pub fn constructor<'env>(env: &'env dyn TypeEnv, ty: &Type) -> Option<&'env ConstructorDef> {
    match ty {
        Type::Class(id) => env.class(*id).map(|def| &def.constructor),
        Type::Primitive(_) | Type::Null => None,
    }
}
