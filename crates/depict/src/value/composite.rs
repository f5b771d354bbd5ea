//! Contents of reference values.

use std::fmt;
use std::rc::Rc;

use super::{Node, Value};

/// Produces a fresh iterator over a generated sequence's elements.
pub type Generator = Rc<dyn Fn() -> Box<dyn Iterator<Item = Value>>>;

/// Elements of a [`Value::Seq`].
#[derive(Clone)]
pub enum Sequence {
    /// Materialized elements; the length is known.
    Items(Vec<Value>),
    /// Elements produced on demand, possibly without end.
    Generated(Generator),
}

impl Sequence {
    /// Number of elements, if known without iterating.
    pub fn len(&self) -> Option<usize> {
        match self {
            Sequence::Items(items) => Some(items.len()),
            Sequence::Generated(_) => None,
        }
    }

    /// `Some(true)` when known to be empty, `None` when the length is unknown.
    pub fn is_empty(&self) -> Option<bool> {
        self.len().map(|len| len == 0)
    }
}

impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sequence::Items(items) => f.debug_tuple("Items").field(&items.len()).finish(),
            Sequence::Generated(_) => f.write_str("Generated"),
        }
    }
}

impl Node<Sequence> {
    /// Iterate over the elements without keeping the node borrowed, so
    /// children may be rendered (or the node inspected) between steps.
    pub fn values(&self) -> Box<dyn Iterator<Item = Value>> {
        let generator = match &*self.borrow() {
            Sequence::Items(_) => None,
            Sequence::Generated(generator) => Some(Rc::clone(generator)),
        };
        match generator {
            Some(generator) => generator(),
            None => {
                let node = self.clone();
                Box::new((0..).map_while(move |index| match &*node.borrow() {
                    Sequence::Items(items) => items.get(index).cloned(),
                    Sequence::Generated(_) => None,
                }))
            }
        }
    }

    /// Append an element. Generated sequences have no storage and are left
    /// unchanged.
    pub fn push(&self, value: Value) {
        if let Sequence::Items(items) = &mut *self.borrow_mut() {
            items.push(value);
        }
    }
}

/// Entries of a [`Value::Map`] in insertion order.
#[derive(Clone, Debug, Default)]
pub struct MapValue {
    entries: Vec<(Value, Value)>,
}

impl MapValue {
    pub fn new(entries: Vec<(Value, Value)>) -> Self {
        MapValue { entries }
    }

    pub fn entries(&self) -> &[(Value, Value)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Node<MapValue> {
    /// Iterate over the entries without keeping the node borrowed.
    pub fn iter_entries(&self) -> impl Iterator<Item = (Value, Value)> {
        let node = self.clone();
        (0..).map_while(move |index| node.borrow().entries.get(index).cloned())
    }

    /// Append an entry. Keys are not deduplicated: the value graph is
    /// rendered as given.
    pub fn insert(&self, key: Value, value: Value) {
        self.borrow_mut().entries.push((key, value));
    }
}

/// A named type with named members.
#[derive(Clone, Debug)]
pub struct ObjectValue {
    type_name: Box<str>,
    members: Vec<(String, Value)>,
}

impl ObjectValue {
    pub fn new(type_name: &str, members: Vec<(String, Value)>) -> Self {
        ObjectValue {
            type_name: type_name.into(),
            members,
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Members in declaration order.
    pub fn members(&self) -> &[(String, Value)] {
        &self.members
    }

    pub fn member(&self, name: &str) -> Option<&Value> {
        self.members
            .iter()
            .find_map(|(member, value)| (member == name).then_some(value))
    }
}

impl Node<ObjectValue> {
    /// Replace the member called `name`, or append it if there is none.
    pub fn set_member(&self, name: &str, value: Value) {
        let mut object = self.borrow_mut();
        match object.members.iter_mut().find(|(member, _)| member == name) {
            Some((_, slot)) => *slot = value,
            None => object.members.push((name.to_owned(), value)),
        }
    }

    /// Snapshot of the members, so rendering them holds no borrow.
    pub fn member_list(&self) -> Vec<(String, Value)> {
        self.borrow().members.clone()
    }
}
