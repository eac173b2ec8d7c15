use nova_test_utils::zoo;
use nova_types::{is_subtype, PrimitiveType, Type, TypeEnv, TypeStore};
use proptest::prelude::*;

const PROPTEST_CASES: u32 = 256;

fn all_types(env: &TypeStore) -> Vec<Type> {
    let mut types: Vec<Type> = PrimitiveType::ALL.into_iter().map(Type::Primitive).collect();
    types.push(Type::Null);
    types.extend(env.iter().map(|(id, _)| Type::Class(id)));
    types
}

fn arb_type() -> impl Strategy<Value = Type> {
    prop::sample::select(all_types(&zoo()))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(PROPTEST_CASES))]

    #[test]
    fn subtyping_is_reflexive(t in arb_type()) {
        let env = zoo();
        prop_assert!(is_subtype(&env, &t, &t));
    }

    #[test]
    fn subtyping_is_transitive(a in arb_type(), b in arb_type(), c in arb_type()) {
        let env = zoo();
        if is_subtype(&env, &a, &b) && is_subtype(&env, &b, &c) {
            prop_assert!(is_subtype(&env, &a, &c));
        }
    }

    #[test]
    fn subtyping_is_antisymmetric(a in arb_type(), b in arb_type()) {
        let env = zoo();
        if is_subtype(&env, &a, &b) && is_subtype(&env, &b, &a) {
            prop_assert_eq!(a, b);
        }
    }

    #[test]
    fn every_reference_type_is_below_object(t in arb_type()) {
        let env = zoo();
        prop_assert_eq!(is_subtype(&env, &t, &env.object_type()), t.is_reference());
    }
}
