use std::{
    cell::RefCell,
    cmp::Ordering,
    collections::{BTreeMap, BTreeSet},
    rc::Rc,
};

use crate::{
    ast::FunctionDef,
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, function::core::Builtin},
        value::key::Key,
    },
    util::num::{compare_int_float, int_to_float},
};

/// Represents a runtime value in the interpreter.
///
/// Lists, sets and mappings are shared by reference: assigning one to a new
/// name aliases it, and in-place updates are visible through every binding.
/// Tuples and strings are immutable.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit integer.
    Integer(i64),
    /// A double precision float.
    Float(f64),
    /// An immutable string.
    String(Rc<str>),
    /// `true` or `false`.
    Bool(bool),
    /// The absence of a value, produced by functions without `return`.
    None,
    /// A mutable, ordered list.
    List(Rc<RefCell<Vec<Self>>>),
    /// An immutable, fixed-arity tuple.
    Tuple(Rc<[Self]>),
    /// A mutable set of unique hashable values.
    Set(Rc<RefCell<BTreeSet<Key>>>),
    /// A mutable mapping from hashable keys to values.
    Map(Rc<RefCell<BTreeMap<Key, Self>>>),
    /// A user-defined function.
    Function(Rc<FunctionDef>),
    /// A host-provided function.
    Builtin(Builtin),
    /// The exported bindings of an imported module.
    Module(Rc<Namespace>),
}

/// The immutable snapshot of a module's top-level bindings.
#[derive(Debug, Clone, PartialEq)]
pub struct Namespace {
    /// The module name used in `import`.
    pub name:     String,
    /// Exported names: top-level functions and global variables.
    pub bindings: BTreeMap<String, Value>,
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v.into())
    }
}

impl Value {
    /// Creates a list value.
    #[must_use]
    pub fn list(items: Vec<Self>) -> Self {
        Self::List(Rc::new(RefCell::new(items)))
    }

    /// Creates a tuple value.
    #[must_use]
    pub fn tuple(items: Vec<Self>) -> Self {
        Self::Tuple(items.into())
    }

    /// Creates a set value.
    #[must_use]
    pub fn set(items: BTreeSet<Key>) -> Self {
        Self::Set(Rc::new(RefCell::new(items)))
    }

    /// Creates a mapping value.
    #[must_use]
    pub fn map(entries: BTreeMap<Key, Self>) -> Self {
        Self::Map(Rc::new(RefCell::new(entries)))
    }

    /// The language-level name of the value's type, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "str",
            Self::Bool(_) => "bool",
            Self::None => "none",
            Self::List(_) => "list",
            Self::Tuple(_) => "tuple",
            Self::Set(_) => "set",
            Self::Map(_) => "map",
            Self::Function(_) => "function",
            Self::Builtin(_) => "builtin",
            Self::Module(_) => "module",
        }
    }

    /// Truthiness: zero, empty strings and collections, `false` and `none` are
    /// falsy; everything else is truthy.
    ///
    /// # Example
    /// ```
    /// use quirk::interpreter::value::core::Value;
    ///
    /// assert!(!Value::Integer(0).is_truthy());
    /// assert!(!Value::from("").is_truthy());
    /// assert!(!Value::list(vec![]).is_truthy());
    /// assert!(Value::tuple(vec![Value::None]).is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Integer(i) => *i != 0,
            Self::Float(f) => *f != 0.0,
            Self::String(s) => !s.is_empty(),
            Self::Bool(b) => *b,
            Self::None => false,
            Self::List(items) => !items.borrow().is_empty(),
            Self::Tuple(items) => !items.is_empty(),
            Self::Set(items) => !items.borrow().is_empty(),
            Self::Map(entries) => !entries.borrow().is_empty(),
            Self::Function(_) | Self::Builtin(_) | Self::Module(_) => true,
        }
    }

    /// Returns the value as an `f64` if it is an integer or a float.
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Integer(i) => Some(int_to_float(*i)),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Produces the elements visited by a `for` loop.
    ///
    /// Lists are snapshotted, so mutating the list inside the loop does not
    /// change the iteration. Sets yield their elements and mappings their keys,
    /// both in sorted order; strings yield one-character strings.
    ///
    /// # Errors
    /// [`RuntimeError::TypeError`] if the value is not iterable.
    pub fn elements(&self, line: usize) -> EvalResult<Vec<Self>> {
        match self {
            Self::List(items) => Ok(items.borrow().clone()),
            Self::Tuple(items) => Ok(items.to_vec()),
            Self::Set(items) => Ok(items.borrow().iter().map(Self::from).collect()),
            Self::Map(entries) => Ok(entries.borrow().keys().map(Self::from).collect()),
            Self::String(s) => Ok(s.chars().map(|c| Self::from(c.to_string())).collect()),
            other => Err(RuntimeError::TypeError { details: format!("'{}' object is not iterable",
                                                                    other.type_name()),
                                                   line }),
        }
    }
}

impl PartialEq for Value {
    /// Language equality: integers and floats compare numerically, collections
    /// compare by contents, functions and modules by identity.
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Integer(a), Self::Float(b)) | (Self::Float(b), Self::Integer(a)) => {
                compare_int_float(*a, *b) == Some(Ordering::Equal)
            },
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::None, Self::None) => true,
            (Self::List(a), Self::List(b)) => Rc::ptr_eq(a, b) || *a.borrow() == *b.borrow(),
            (Self::Tuple(a), Self::Tuple(b)) => a == b,
            (Self::Set(a), Self::Set(b)) => Rc::ptr_eq(a, b) || *a.borrow() == *b.borrow(),
            (Self::Map(a), Self::Map(b)) => Rc::ptr_eq(a, b) || *a.borrow() == *b.borrow(),
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Builtin(a), Self::Builtin(b)) => a.name == b.name,
            (Self::Module(a), Self::Module(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}
