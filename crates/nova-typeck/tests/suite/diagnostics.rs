use insta::assert_snapshot;
use nova_test_utils::{boolean, int, ty, zoo};
use nova_typeck::{check_all, diagnostic, Expr, Variable};
use nova_types::TypeEnv;
use pretty_assertions::assert_eq;

fn render(diagnostics: &[nova_types::Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn renders_one_diagnostic_per_failing_tree() {
    let env = zoo();
    let foo = || Expr::variable("foo", ty(&env, "Foo"));
    let one = || Expr::literal("1", int());
    let yes = || Expr::literal("true", boolean());

    let exprs = vec![
        Expr::assign(Variable::new("d", ty(&env, "Dog")), Expr::variable("a", ty(&env, "Animal"))),
        Expr::method_call(foo(), "bar", vec![one()]),
        Expr::method_call(foo(), "bar", vec![one(), yes()]),
        Expr::method_call(foo(), "baz", vec![]),
        Expr::new_object(int(), vec![]),
        Expr::new_object(ty(&env, "Point"), vec![one(), one(), one()]),
        Expr::new_object(ty(&env, "Point"), vec![yes(), one()]),
        // Well-typed trees produce nothing.
        Expr::assign(Variable::new("o", env.object_type()), Expr::null()),
        Expr::method_call(foo(), "bar", vec![one(), one()]),
    ];

    let diagnostics = check_all(&env, &exprs);
    assert_eq!(diagnostics.len(), 7);
    assert_snapshot!(render(&diagnostics), @r###"
    error[TYPE_MISMATCH]: Cannot assign Animal to variable d of type Dog
    error[ARGUMENT_COUNT]: Wrong number of arguments for Foo.bar(): expected 2, got 1
    error[TYPE_MISMATCH]: Foo.bar() expects arguments of type (int, int), but got (int, boolean)
    error[NO_SUCH_METHOD]: Foo has no method named baz
    error[ILLEGAL_INSTANTIATION]: Type int is not instantiable
    error[ARGUMENT_COUNT]: Wrong number of arguments for Point constructor: expected 2, got 3
    error[TYPE_MISMATCH]: Point constructor expects arguments of type (int, int), but got (boolean, int)
    "###);
}

#[test]
fn diagnostic_code_matches_error_kind() {
    let env = zoo();
    let err = Expr::assign(Variable::new("i", int()), Expr::null())
        .check_types(&env)
        .unwrap_err();

    let diag = diagnostic(&env, &err);
    assert_eq!(diag.code, err.kind().code());
    assert_eq!(diag.message, "Cannot assign null to variable i of type int");
    assert_eq!(
        err.to_string(),
        "incompatible types in assignment to variable `i`"
    );
}
