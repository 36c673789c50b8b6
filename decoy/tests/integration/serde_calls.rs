use decoy::{args, Double};

#[test]
fn serialize_mock_calls() {
    let foo = Double::named("foo");
    let bar = Double::named("bar");
    foo.invoke(args!(26)).attr("attr").invoke(args!(&bar, key = true));

    let json = serde_json::to_value(foo.mock_calls()).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "path": [], "args": { "positional": [{ "Int": 26 }], "named": {} } },
            {
                "path": ["Invocation", { "Attribute": "attr" }],
                "args": {
                    "positional": [{ "Double": "bar" }],
                    "named": { "key": { "Bool": true } }
                }
            }
        ])
    );
}
