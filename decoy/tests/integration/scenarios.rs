use decoy::{args, call, path, Double, Value};

/// Code under test: `foo(26).attr.method(bar.method())`.
pub fn foobar(foo: &Double, bar: &Double) -> Value {
    let method = foo.invoke(args!(26)).attr("attr").attr("method");
    method.invoke(args!(bar.attr("method").invoke(args!())))
}

#[test]
fn declarative_setup_keeps_history_exact() {
    let foo = Double::named("foo");
    foo.configure_path(path!(return_value.attr.method.return_value), 42)
        .unwrap();
    let bar = Double::named("bar");

    let ret = foobar(&foo, &bar);

    assert_eq!(ret, Value::from(42));
    foo.assert_mock_calls(vec![
        call!(call(26)),
        call!(call(26).attr.method(bar.attr("method").return_value())),
    ]);
}

#[test]
fn declarative_setup_from_str() {
    let foo = Double::named("foo");
    foo.configure([("invocation.attr.method.invocation", 42)])
        .unwrap();
    let bar = Double::named("bar");

    assert_eq!(foobar(&foo, &bar), Value::from(42));
    assert_eq!(foo.mock_calls().len(), 2);
}

#[test]
fn imperative_setup_pollutes_history() {
    let foo = Double::named("foo");
    let bar = Double::named("bar");
    // calling the double only to reach `.attr.method`
    foo.invoke(args!(26))
        .attr("attr")
        .attr("method")
        .set_return_value(42);

    let ret = foobar(&foo, &bar);

    assert_eq!(ret, Value::from(42));
    let expected_by_foobar = vec![
        call!(call(26)),
        call!(call(26).attr.method(bar.attr("method").return_value())),
    ];
    assert_eq!(
        foo.mock_calls(),
        vec![
            call!(call(26)),
            call!(call(26)),
            call!(call(26).attr.method(bar.attr("method").return_value())),
        ]
    );
    assert!(foo.check_mock_calls(expected_by_foobar.clone()).is_err());
    foo.assert_has_calls(expected_by_foobar);
}

#[test]
#[should_panic(expected = "calls of foo do not match")]
fn imperative_setup_fails_exact_assertion() {
    let foo = Double::named("foo");
    let bar = Double::named("bar");
    foo.invoke(args!()).attr("attr").attr("method").set_return_value(42);

    foobar(&foo, &bar);

    foo.assert_mock_calls(vec![
        call!(call(26)),
        call!(call(26).attr.method(bar.attr("method").return_value())),
    ]);
}

#[test]
fn any_call_returns_the_same_object() {
    let bar = Double::new();
    assert_eq!(bar.invoke(args!("foo")), bar.invoke(args!("bar")));
}

#[test]
fn bar_is_called_once() {
    let foo = Double::new();
    let bar = Double::named("bar");

    foobar(&foo, &bar);

    bar.attr("method").assert_called_once_with(args!());
    bar.assert_mock_calls(vec![call!(call.method())]);
}
