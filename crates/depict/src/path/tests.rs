use pretty_assertions::assert_eq;

use super::*;

#[test]
fn root_counts_toward_depth() {
    let root = Value::list([]);
    let path = GraphPath::new(&root);
    assert_eq!(path.depth(), 1);
    assert!(path.contains(&root));
    assert_eq!(path.to_string(), "root");
}

#[test]
fn revisiting_an_ancestor_is_flagged() {
    let root = Value::list([]);
    let child = Value::map([]);
    let mut path = GraphPath::new(&root);

    assert_eq!(path.push("0", &child), Visit::First);
    assert_eq!(path.push("1", &root), Visit::Revisit);
    assert_eq!(path.depth(), 3);
    assert_eq!(path.to_string(), "root.0.1");
}

#[test]
fn popping_a_revisit_keeps_the_ancestor_active() {
    let root = Value::list([]);
    let mut path = GraphPath::new(&root);
    path.push("self", &root);
    path.pop();
    assert!(path.contains(&root));
    assert_eq!(path.push("again", &root), Visit::Revisit);
}

#[test]
fn siblings_are_not_cycles() {
    let shared = Value::object("Shared", []);
    let root = Value::list([shared.clone(), shared.clone()]);
    let mut path = GraphPath::new(&root);

    assert_eq!(path.push("0", &shared), Visit::First);
    path.pop();
    assert!(!path.contains(&shared));
    assert_eq!(path.push("1", &shared), Visit::First);
}

#[test]
fn scalars_never_revisit() {
    let root = Value::from(1);
    let mut path = GraphPath::new(&root);
    assert_eq!(path.push("again", &root), Visit::First);
    assert!(!path.contains(&root));
}

#[test]
fn equal_but_distinct_values_are_not_cycles() {
    let root = Value::list([]);
    let twin = Value::list([]);
    let mut path = GraphPath::new(&root);
    assert_eq!(path.push("0", &twin), Visit::First);
}

#[test]
fn pop_on_empty_path_is_harmless() {
    let root = Value::Null;
    let mut path = GraphPath::new(&root);
    path.pop();
    path.pop();
    assert_eq!(path.depth(), 0);
    assert!(path.current().is_none());
}
