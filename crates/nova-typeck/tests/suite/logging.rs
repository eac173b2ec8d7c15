use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use nova_test_utils::{int, ty, zoo};
use nova_typeck::{Expr, Variable, TYPECK_TARGET};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;

/// Counts `debug` events emitted on the checker's target.
struct DebugEvents(Arc<AtomicUsize>);

impl<S: Subscriber> Layer<S> for DebugEvents {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        if *meta.level() == Level::DEBUG && meta.target() == TYPECK_TARGET {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

#[test]
fn a_nested_error_is_logged_once() {
    let env = zoo();
    // `int i = dog.fetch(dog).fetch(dog).fetch(dog).missing()`
    let dog = || Expr::variable("dog", ty(&env, "Dog"));
    let mut receiver = dog();
    for _ in 0..3 {
        receiver = Expr::method_call(receiver, "fetch", vec![dog()]);
    }
    let expr = Expr::assign(
        Variable::new("i", int()),
        Expr::method_call(receiver, "missing", vec![]),
    );

    let count = Arc::new(AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry().with(DebugEvents(count.clone()));
    let result = tracing::subscriber::with_default(subscriber, || expr.check_types(&env));

    assert!(result.is_err());
    assert_eq!(count.load(Ordering::SeqCst), 1);
}
