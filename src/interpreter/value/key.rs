use std::{cmp::Ordering, rc::Rc};

use ordered_float::OrderedFloat;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    util::num::compare_int_float,
};

/// Enum representing values allowed as set elements and mapping keys.
///
/// Keys are immutable snapshots of hashable values. Integers and floats of
/// equal magnitude are the same key, so `{1, 1.0}` holds a single element.
#[derive(Clone, Debug)]
pub enum Key {
    /// `none`
    None,
    /// A boolean such as `true`.
    Bool(bool),
    /// An integer such as `-4` or `42`.
    Integer(i64),
    /// A float such as `2.5`.
    Float(OrderedFloat<f64>),
    /// A string such as `"name"`.
    String(Rc<str>),
    /// A tuple of hashable values.
    Tuple(Vec<Key>),
}

impl Key {
    /// Converts a runtime value into a key.
    ///
    /// # Errors
    /// [`RuntimeError::Unhashable`] for lists, sets, mappings, functions and
    /// modules, including tuples containing them.
    ///
    /// # Example
    /// ```
    /// use quirk::interpreter::value::{core::Value, key::Key};
    ///
    /// assert!(Key::try_from_value(&Value::Integer(3), 1).is_ok());
    /// assert!(Key::try_from_value(&Value::list(vec![]), 1).is_err());
    /// ```
    pub fn try_from_value(value: &Value, line: usize) -> EvalResult<Self> {
        match value {
            Value::None => Ok(Self::None),
            Value::Bool(b) => Ok(Self::Bool(*b)),
            Value::Integer(i) => Ok(Self::Integer(*i)),
            Value::Float(f) => Ok(Self::Float(OrderedFloat(*f))),
            Value::String(s) => Ok(Self::String(Rc::clone(s))),
            Value::Tuple(items) => {
                items.iter()
                     .map(|item| Self::try_from_value(item, line))
                     .collect::<EvalResult<Vec<_>>>()
                     .map(Self::Tuple)
            },
            other => Err(RuntimeError::Unhashable { type_name: other.type_name(),
                                                    line }),
        }
    }

    /// Ordering rank of the key's type; integers and floats share a rank.
    const fn rank(&self) -> u8 {
        match self {
            Self::None => 0,
            Self::Bool(_) => 1,
            Self::Integer(_) | Self::Float(_) => 2,
            Self::String(_) => 3,
            Self::Tuple(_) => 4,
        }
    }
}

impl From<&Key> for Value {
    fn from(key: &Key) -> Self {
        match key {
            Key::None => Self::None,
            Key::Bool(b) => Self::Bool(*b),
            Key::Integer(i) => Self::Integer(*i),
            Key::Float(f) => Self::Float(f.into_inner()),
            Key::String(s) => Self::String(Rc::clone(s)),
            Key::Tuple(items) => Self::tuple(items.iter().map(Self::from).collect()),
        }
    }
}

impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Integer(a), Self::Integer(b)) => a.cmp(b),
            (Self::Float(a), Self::Float(b)) => a.cmp(b),
            (Self::Integer(a), Self::Float(b)) => {
                compare_int_float(*a, b.into_inner()).unwrap_or(Ordering::Less)
            },
            (Self::Float(a), Self::Integer(b)) => {
                compare_int_float(*b, a.into_inner()).map_or(Ordering::Greater, Ordering::reverse)
            },
            (Self::String(a), Self::String(b)) => a.cmp(b),
            (Self::Tuple(a), Self::Tuple(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Key {}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn integer_and_float_keys_coincide() {
        let set: BTreeSet<Key> = [Key::Integer(1), Key::Float(OrderedFloat(1.0))].into();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn large_integers_keep_their_identity_next_to_floats() {
        let big = 9_007_199_254_740_993;
        let rounded = Key::Float(OrderedFloat(9_007_199_254_740_992.0));

        assert!(Key::Integer(big) > rounded);
        assert!(Key::Integer(big - 1) == rounded);
        let set: BTreeSet<Key> = [Key::Integer(big), rounded, Key::Integer(big - 1)].into();
        assert_eq!(set.len(), 2);
        assert!(Key::Integer(i64::MAX) < Key::Float(OrderedFloat(f64::NAN)));
    }

    #[test]
    fn keys_order_by_type_then_value() {
        let mut keys = vec![Key::String("b".into()),
                            Key::Integer(3),
                            Key::None,
                            Key::Float(OrderedFloat(2.5)),
                            Key::Bool(true)];
        keys.sort();
        assert_eq!(keys,
                   [Key::None,
                    Key::Bool(true),
                    Key::Float(OrderedFloat(2.5)),
                    Key::Integer(3),
                    Key::String("b".into())]);
    }
}
