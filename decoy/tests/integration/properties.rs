use decoy::{args, call, Double, Path, PathStep, Value, ANY};

#[test]
fn attribute_access_is_stable() {
    let double = Double::new();
    for name in ["a", "attr", "method", "type"] {
        assert_eq!(double.attr(name), double.attr(name));
    }
}

#[test]
fn invocations_share_the_return_value() {
    let double = Double::new();
    let inputs = [args!(1), args!("a", 2), args!(key = ANY), args!()];
    let outputs: Vec<_> = inputs.iter().cloned().map(|args| double.invoke(args)).collect();

    assert!(outputs.iter().all(|output| *output == double.return_value()));
    assert_eq!(double.call_log(), inputs.to_vec());
    assert_eq!(double.call_count(), 4);
}

#[test]
fn configuration_never_records() {
    let double = Double::new();
    let paths = [
        vec![PathStep::attribute("a"), PathStep::Invocation],
        vec![
            PathStep::Invocation,
            PathStep::Invocation,
            PathStep::attribute("b"),
            PathStep::Invocation,
        ],
        vec![PathStep::Invocation, PathStep::attribute("c")],
    ];
    for (index, steps) in paths.into_iter().enumerate() {
        double
            .configure_path(Path::from(steps), index as i64)
            .unwrap();
    }

    assert!(double.mock_calls().is_empty());
    assert!(!double.called());
    assert!(!double.attr("a").called());
}

#[test]
fn mock_calls_is_idempotent() {
    let double = Double::new();
    double.invoke(args!(1)).attr("x").invoke(args!(2));

    let first = double.mock_calls();
    let second = double.mock_calls();
    assert_eq!(first, second);
    assert_eq!(first, vec![call!(call(1)), call!(call().x(2))]);
}

#[test]
fn mock_calls_are_chronological_across_descendants() {
    let double = Double::new();
    double.attr("b").invoke(args!(1));
    double.invoke(args!(2));
    double.attr("a").invoke(args!(3));
    double.attr("b").invoke(args!(4));

    assert_eq!(
        double.mock_calls(),
        vec![
            call!(call.b(1)),
            call!(call(2)),
            call!(call.a(3)),
            call!(call.b(4)),
        ]
    );
}

#[test]
fn return_value_can_be_plain() {
    let double = Double::new();
    double.set_return_value(vec![1, 2]);
    assert_eq!(double.invoke(args!()), Value::from(vec![1, 2]));
}
