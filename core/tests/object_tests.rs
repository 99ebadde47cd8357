use std::cell::Cell;
use std::rc::Rc;

use protoclass::runtime::class::linker::link;
use protoclass::runtime::value::object::prototype::get_property;
use protoclass::{Members, Object, Value};

fn counting_parent(calls: Rc<Cell<usize>>) -> protoclass::Class {
    protoclass::extend(
        Some(
            Members::new()
                .method("constructor", move |args| {
                    calls.set(calls.get() + 1);
                    args.this().set("name", args.arg(0))?;
                    Ok(Value::Undefined)
                })
                .method("getName", |args| Ok(args.this().get("name"))),
        ),
        None,
    )
}

#[test]
fn linked_object_starts_empty_and_falls_back() {
    let mut parent = Object::new();
    parent.set("greet", Value::from("hello"));
    let parent = parent.wrapped();

    let child = link(&parent);

    assert!(child.borrow().own_keys().is_empty());
    assert_eq!(get_property(&child, "greet"), Some(Value::from("hello")));
    assert_eq!(get_property(&child, "missing"), None);
}

#[test]
fn linked_object_sees_later_parent_changes_but_not_vice_versa() {
    let parent = Object::new().wrapped();
    let child = link(&parent);

    parent.borrow_mut().set("late", Value::Number(1.0));
    child.borrow_mut().set("own", Value::Number(2.0));

    assert_eq!(get_property(&child, "late"), Some(Value::Number(1.0)));
    assert_eq!(get_property(&parent, "own"), None);
}

#[test]
fn each_link_is_a_fresh_object() {
    let parent = Object::new().wrapped();
    let first = link(&parent);
    let second = link(&parent);

    first.borrow_mut().set("only_first", Value::Boolean(true));

    assert!(!Rc::ptr_eq(&first, &second));
    assert_eq!(get_property(&second, "only_first"), None);
}

#[test]
fn extending_does_not_run_the_parent_constructor() {
    let calls = Rc::new(Cell::new(0));
    let parent = counting_parent(calls.clone());

    let child = parent.extend(
        Some(Members::new().method("extra", |_| Ok(Value::Null))),
        None,
    );
    let _grandchild = child.extend(None, None);

    assert_eq!(calls.get(), 0);
}

#[test]
fn constructing_a_subclass_runs_the_resolved_constructor_once() {
    let calls = Rc::new(Cell::new(0));
    let parent = counting_parent(calls.clone());
    let child = parent.extend(None, None);

    let instance = child.construct(vec![Value::from("Rex")]).expect("construct");

    assert_eq!(calls.get(), 1);
    assert_eq!(instance.invoke("getName", Vec::new()).expect("getName"), Value::from("Rex"));
}

#[test]
fn own_constructor_replaces_inherited_one() {
    let calls = Rc::new(Cell::new(0));
    let parent = counting_parent(calls.clone());
    let child = parent.extend(
        Some(Members::new().method("constructor", |args| {
            args.this().set("name", Value::from("child-made"))?;
            Ok(Value::Undefined)
        })),
        None,
    );

    let instance = child.construct(vec![Value::from("Rex")]).expect("construct");

    assert_eq!(calls.get(), 0);
    assert_eq!(instance.get("name"), Value::from("child-made"));
}

#[test]
fn class_without_constructor_only_allocates() {
    let class = protoclass::extend(None, None);

    let instance = class.construct(vec![Value::Number(1.0)]).expect("construct");
    let object = instance.as_object().expect("object");

    assert!(object.borrow().own_keys().is_empty());
    assert!(Rc::ptr_eq(
        object.borrow().prototype.as_ref().expect("prototype"),
        &class.prototype()
    ));
}

#[test]
fn non_function_constructor_entry_is_ignored() {
    let class = protoclass::extend(Some(Members::new().with("constructor", 42.0)), None);

    let instance = class.construct(Vec::new()).expect("construct");

    assert_eq!(instance.get("constructor"), Value::Number(42.0));
}

#[test]
fn instance_state_is_per_instance() {
    let class = counting_parent(Rc::new(Cell::new(0)));

    let a = class.construct(vec![Value::from("a")]).expect("construct");
    let b = class.construct(vec![Value::from("b")]).expect("construct");

    assert_eq!(a.get("name"), Value::from("a"));
    assert_eq!(b.get("name"), Value::from("b"));
    assert_ne!(a, b);
}
