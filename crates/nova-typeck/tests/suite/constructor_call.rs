use nova_test_utils::{boolean, int, ty, zoo};
use nova_typeck::Expr;
use nova_types::{Callee, Mismatch, PrimitiveType, Type, TypeEnv, TypeError};
use pretty_assertions::assert_eq;

#[test]
fn static_type_is_the_instantiated_class() {
    let env = zoo();
    let new_point = Expr::new_object(
        ty(&env, "Point"),
        vec![Expr::literal("1", int()), Expr::literal("2", int())],
    );
    assert_eq!(new_point.check_types(&env), Ok(()));
    assert_eq!(new_point.static_type(&env), Ok(ty(&env, "Point")));

    let new_object = Expr::new_object(env.object_type(), vec![]);
    assert_eq!(new_object.check_types(&env), Ok(()));
}

#[test]
fn primitives_are_never_instantiable() {
    let env = zoo();
    for prim in PrimitiveType::ALL {
        let new_prim = Expr::new_object(Type::Primitive(prim), vec![]);
        assert_eq!(
            new_prim.check_types(&env),
            Err(TypeError::IllegalInstantiation {
                ty: Type::Primitive(prim)
            })
        );
    }
}

#[test]
fn instantiability_is_checked_before_argument_count() {
    let env = zoo();
    // `new int(1)`
    let new_int = Expr::new_object(int(), vec![Expr::literal("1", int())]);
    assert_eq!(
        new_int.check_types(&env),
        Err(TypeError::IllegalInstantiation { ty: int() })
    );
}

#[test]
fn null_is_not_instantiable() {
    let env = zoo();
    assert_eq!(
        Expr::new_object(Type::Null, vec![]).check_types(&env),
        Err(TypeError::IllegalInstantiation { ty: Type::Null })
    );
}

#[test]
fn constructor_argument_count_is_checked_first() {
    let env = zoo();
    let new_point = Expr::new_object(ty(&env, "Point"), vec![Expr::literal("true", boolean())]);
    assert_eq!(
        new_point.check_types(&env),
        Err(TypeError::ArgumentCountMismatch {
            callee: Callee::Constructor {
                class: ty(&env, "Point")
            },
            expected: 2,
            found: 1,
        })
    );
}

#[test]
fn constructor_argument_types_are_checked_positionally() {
    let env = zoo();
    let new_point = Expr::new_object(
        ty(&env, "Point"),
        vec![Expr::literal("1", int()), Expr::literal("true", boolean())],
    );
    assert_eq!(
        new_point.check_types(&env),
        Err(TypeError::TypeMismatch(Mismatch::Arguments {
            callee: Callee::Constructor {
                class: ty(&env, "Point")
            },
            expected: vec![int(), int()],
            found: vec![int(), boolean()],
        }))
    );

    let new_puppy = Expr::new_object(ty(&env, "Puppy"), vec![Expr::null()]);
    assert_eq!(new_puppy.check_types(&env), Ok(()));
}

#[test]
fn constructor_arguments_are_checked_before_instantiability() {
    let env = zoo();
    let bad_arg = Expr::method_call(Expr::variable("food", ty(&env, "Food")), "eat", vec![]);
    let new_int = Expr::new_object(int(), vec![bad_arg]);
    assert_eq!(
        new_int.check_types(&env),
        Err(TypeError::NoSuchMethod {
            receiver: ty(&env, "Food"),
            name: "eat".to_string(),
        })
    );
}
