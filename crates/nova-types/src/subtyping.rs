use std::collections::HashSet;

use crate::{ClassId, Type, TypeEnv};

/// Iterator over a class followed by its superclass chain, nearest first.
///
/// Stops when the chain ends, when a class is missing from the environment, or when a class is
/// revisited (only possible with a hand-rolled [`TypeEnv`]; [`crate::TypeStore`] cannot express
/// a cycle).
pub struct Ancestors<'env> {
    env: &'env dyn TypeEnv,
    next: Option<ClassId>,
    seen: HashSet<ClassId>,
}

impl Iterator for Ancestors<'_> {
    type Item = ClassId;

    fn next(&mut self) -> Option<ClassId> {
        let current = self.next.take()?;
        if !self.seen.insert(current) {
            return None;
        }
        self.next = self.env.class(current).and_then(|def| def.super_class);
        Some(current)
    }
}

pub fn ancestors(env: &dyn TypeEnv, class: ClassId) -> Ancestors<'_> {
    Ancestors {
        env,
        next: Some(class),
        seen: HashSet::new(),
    }
}

/// `sub <: sup`.
///
/// Reflexive; `null` is below every class type but unrelated to primitives; class types are
/// ordered by their superclass chains, rooted at `Object`.
pub fn is_subtype(env: &dyn TypeEnv, sub: &Type, sup: &Type) -> bool {
    if sub == sup {
        return true;
    }

    match (sub, sup) {
        (Type::Null, Type::Class(_)) => true,
        (Type::Class(sub), Type::Class(sup)) => ancestors(env, *sub).any(|id| id == *sup),
        _ => false,
    }
}
