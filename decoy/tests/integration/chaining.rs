use decoy::{args, call, Double, Value};

#[test]
fn value_chaining() {
    let foo = Double::named("foo");
    let ret = foo.invoke(args!(1)).attr("a").invoke(args!()).invoke(args!(2));

    assert_eq!(ret.double().unwrap().name(), "foo().a()()");
    assert_eq!(
        foo.mock_calls(),
        vec![call!(call(1)), call!(call().a()), call!(call().a()(2))]
    );
}

#[test]
fn named_arguments() {
    let foo = Double::new();
    foo.attr("open").invoke(args!("path", mode = "r"));

    foo.attr("open").assert_called_with(args!("path", mode = "r"));
    assert_eq!(
        foo.mock_calls()[0].to_string(),
        "call.open(\"path\", mode=\"r\")"
    );
}

#[test]
fn double_as_argument() {
    let foo = Double::new();
    let bar = Double::named("bar");
    foo.invoke(args!(&bar));

    foo.assert_called_with(args!(Value::from(&bar)));
    assert_eq!(foo.mock_calls()[0].to_string(), "call(<Double bar>)");
}
