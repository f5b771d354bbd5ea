//! The value graph handed to the formatter.
//!
//! # Identity
//!
//! Scalars are plain data and have no identity. Sequences, maps and objects
//! live behind a shared [`Node`], so the same node can be reachable along
//! several paths, including from itself. A node's identity is its address;
//! two structurally equal nodes are still distinct values.
//!
//! # Construction
//!
//! Use the factory methods on [`Value`]:
//!
//! ```
//! use depict::Value;
//!
//! let customer = Value::object("Customer", [("Name", Value::string("Ann")), ("Age", 36.into())]);
//! let list = Value::list([customer.clone(), customer]);
//! let numbers = Value::generated(|| (0..).map(Value::from));
//! # let _ = (list, numbers);
//! ```
//!
//! Cycles are closed by mutating a node after the fact:
//!
//! ```
//! use depict::Value;
//!
//! let list = Value::list([Value::from(1)]);
//! if let Value::Seq(node) = &list {
//!     node.push(list.clone());
//! }
//! ```

mod composite;

use std::borrow::Cow;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

pub use composite::{Generator, MapValue, ObjectValue, Sequence};

/// Address of a reference value, used for cycle detection.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Identity(usize);

/// Shared, interior-mutable storage of a reference value.
pub struct Node<T>(Rc<RefCell<T>>);

impl<T> Node<T> {
    pub fn new(value: T) -> Self {
        Node(Rc::new(RefCell::new(value)))
    }

    pub fn borrow(&self) -> Ref<'_, T> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.0.borrow_mut()
    }

    pub fn identity(&self) -> Identity {
        Identity(Rc::as_ptr(&self.0).cast::<()>() as usize)
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for Node<T> {
    fn clone(&self) -> Self {
        Node(Rc::clone(&self.0))
    }
}

// Only the address: contents may be cyclic.
impl<T> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({:#x})", self.identity().0)
    }
}

/// A value to render.
#[derive(Clone, Debug)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Char(char),
    Str(Rc<str>),
    /// Ordered elements, materialized or generated on demand.
    Seq(Node<Sequence>),
    /// Key-value entries in insertion order.
    Map(Node<MapValue>),
    /// A named type with named members in declaration order.
    Object(Node<ObjectValue>),
}

impl Value {
    pub fn string(text: impl AsRef<str>) -> Self {
        Value::Str(Rc::from(text.as_ref()))
    }

    pub fn list(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Seq(Node::new(Sequence::Items(items.into_iter().collect())))
    }

    /// A sequence whose elements are produced on every render by calling
    /// `generate`. The iterator may be infinite; its length is never asked
    /// for.
    pub fn generated<I>(generate: impl Fn() -> I + 'static) -> Self
    where
        I: Iterator<Item = Value> + 'static,
    {
        let generator: Generator =
            Rc::new(move || -> Box<dyn Iterator<Item = Value>> { Box::new(generate()) });
        Value::Seq(Node::new(Sequence::Generated(generator)))
    }

    pub fn map(entries: impl IntoIterator<Item = (Value, Value)>) -> Self {
        Value::Map(Node::new(MapValue::new(entries.into_iter().collect())))
    }

    pub fn object<'a>(
        type_name: &str,
        members: impl IntoIterator<Item = (&'a str, Value)>,
    ) -> Self {
        let members = members
            .into_iter()
            .map(|(name, value)| (name.to_owned(), value))
            .collect();
        Value::Object(Node::new(ObjectValue::new(type_name, members)))
    }

    /// Identity of reference values; `None` for scalars.
    pub fn identity(&self) -> Option<Identity> {
        match self {
            Value::Seq(node) => Some(node.identity()),
            Value::Map(node) => Some(node.identity()),
            Value::Object(node) => Some(node.identity()),
            Value::Null
            | Value::Bool(_)
            | Value::Int(_)
            | Value::UInt(_)
            | Value::Float(_)
            | Value::Char(_)
            | Value::Str(_) => None,
        }
    }

    /// Name of the value's type as it appears in placeholders.
    pub fn type_name(&self) -> Cow<'static, str> {
        let name = match self {
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::Int(_) => "Int",
            Value::UInt(_) => "UInt",
            Value::Float(_) => "Float",
            Value::Char(_) => "Char",
            Value::Str(_) => "String",
            Value::Seq(_) => "Sequence",
            Value::Map(_) => "Map",
            Value::Object(node) => return Cow::Owned(node.borrow().type_name().to_owned()),
        };
        Cow::Borrowed(name)
    }

    pub fn as_seq(&self) -> Option<&Node<Sequence>> {
        match self {
            Value::Seq(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Node<MapValue>> {
        match self {
            Value::Map(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Node<ObjectValue>> {
        match self {
            Value::Object(node) => Some(node),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::UInt(u64::from(value))
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::UInt(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Char(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::string(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(Rc::from(value))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
