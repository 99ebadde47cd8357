use protoclass::{Members, Object, Value};

#[test]
fn statics_live_on_the_class_not_on_instances() {
    let class = protoclass::extend(None, Some(Members::new().with("extra", 1.0)));
    let instance = class.construct(Vec::new()).expect("construct");

    assert_eq!(class.get_static("extra"), Some(Value::Number(1.0)));
    assert_eq!(Value::Class(class.clone()).get("extra"), Value::Number(1.0));
    assert_eq!(instance.get("extra"), Value::Undefined);
}

#[test]
fn statics_are_not_inherited() {
    let parent = protoclass::extend(None, Some(Members::new().with("extra", 1.0)));
    let child = parent.extend(None, None);
    let respecified = parent.extend(None, Some(Members::new().with("extra", 2.0)));

    assert_eq!(child.get_static("extra"), None);
    assert_eq!(respecified.get_static("extra"), Some(Value::Number(2.0)));
    assert_eq!(parent.get_static("extra"), Some(Value::Number(1.0)));
}

#[test]
fn statics_are_copied_shallowly() {
    let shared = Object::new().wrapped();
    let class = protoclass::extend(
        None,
        Some(Members::new().with("registry", Value::Object(shared.clone()))),
    );

    shared.borrow_mut().set("entry", Value::Boolean(true));

    let registry = class.get_static("registry").expect("registry");
    assert_eq!(registry, Value::Object(shared));
    assert_eq!(registry.get("entry"), Value::Boolean(true));
}

#[test]
fn static_methods_receive_the_class() {
    let class = protoclass::extend(
        None,
        Some(
            Members::new()
                .with("prefix", "item-")
                .method("label", |args| {
                    let prefix = args.this().get("prefix");
                    Ok(Value::String(format!("{prefix}{}", args.arg(0))))
                }),
        ),
    );

    let label = class
        .call_static("label", vec![Value::Number(7.0)])
        .expect("static call");

    assert_eq!(label, Value::from("item-7"));
}

#[test]
fn static_names_keep_insertion_order() {
    let class = protoclass::extend(
        None,
        Some(Members::new().with("b", 1.0).with("a", 2.0).with("c", 3.0)),
    );
    class.set_static("d", Value::Null);

    assert_eq!(class.static_names(), vec!["b", "a", "c", "d"]);
}
