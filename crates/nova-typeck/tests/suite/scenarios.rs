use nova_test_utils::{int, store_from_toml, ty};
use nova_typeck::{Expr, Variable};
use nova_types::{Mismatch, TypeError, TypeErrorKind};
use pretty_assertions::assert_eq;

const ANIMALS: &str = r#"
[[classes]]
name = "Animal"
constructor = []
methods = [{ name = "speak", returns = "String" }]

[[classes]]
name = "Dog"
superclass = "Animal"

[[classes]]
name = "Foo"
methods = [{ name = "bar", params = ["int", "int"], returns = "void" }]
"#;

#[test]
fn new_dog_assigned_to_animal_speaks_through_animal() {
    let env = store_from_toml(ANIMALS);
    let dog = ty(&env, "Dog");
    let animal = ty(&env, "Animal");

    let new_dog = Expr::new_object(dog, vec![]);
    assert_eq!(new_dog.static_type(&env), Ok(dog));
    assert_eq!(new_dog.check_types(&env), Ok(()));

    let assign = Expr::assign(Variable::new("pet", animal), new_dog);
    assert_eq!(assign.check_types(&env), Ok(()));

    let speak = Expr::method_call(Expr::variable("pet", animal), "speak", vec![]);
    assert_eq!(speak.check_types(&env), Ok(()));
    assert_eq!(speak.static_type(&env), Ok(ty(&env, "String")));
}

#[test]
fn null_assigns_to_objects_but_not_primitives() {
    let env = store_from_toml(ANIMALS);

    let to_dog = Expr::assign(Variable::new("d", ty(&env, "Dog")), Expr::null());
    assert_eq!(to_dog.check_types(&env), Ok(()));

    let to_int = Expr::assign(Variable::new("i", int()), Expr::null());
    assert_eq!(
        to_int.check_types(&env),
        Err(TypeError::TypeMismatch(Mismatch::Assignment {
            variable: "i".to_string(),
            expected: int(),
            found: ty(&env, "null"),
        }))
    );
}

#[test]
fn too_few_arguments_is_a_count_error_not_a_type_error() {
    let env = store_from_toml(ANIMALS);
    let call = Expr::method_call(
        Expr::variable("foo", ty(&env, "Foo")),
        "bar",
        vec![Expr::literal("1", int())],
    );
    assert_eq!(
        call.check_types(&env).map_err(|err| err.kind()),
        Err(TypeErrorKind::ArgumentCountMismatch)
    );
}
