use std::fmt::{self, Display, Formatter, Write};

use crate::{
    interpreter::value::{core::Value, key::Key},
    util::num::format_float,
};

/// Renders a value the way it appears inside a container: strings are
/// quoted, everything else matches [`Value`]'s `Display`.
pub struct Repr<'a>(pub &'a Value);

/// Writes `items` separated by `", "` using `write_item`.
fn write_joined<T>(f: &mut Formatter<'_>,
                   items: impl IntoIterator<Item = T>,
                   mut write_item: impl FnMut(&mut Formatter<'_>, T) -> fmt::Result)
                   -> fmt::Result {
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write_item(f, item)?;
    }
    Ok(())
}

fn write_value(f: &mut Formatter<'_>, value: &Value, quote_strings: bool) -> fmt::Result {
    match value {
        Value::Integer(i) => write!(f, "{i}"),
        Value::Float(x) => f.write_str(&format_float(*x)),
        Value::String(s) if quote_strings => write!(f, "\"{s}\""),
        Value::String(s) => f.write_str(s),
        Value::Bool(b) => write!(f, "{b}"),
        Value::None => f.write_str("none"),
        Value::List(items) => {
            f.write_char('[')?;
            write_joined(f, items.borrow().iter(), |f, item| write!(f, "{}", Repr(item)))?;
            f.write_char(']')
        },
        Value::Tuple(items) => {
            f.write_char('(')?;
            write_joined(f, items.iter(), |f, item| write!(f, "{}", Repr(item)))?;
            if items.len() == 1 {
                f.write_char(',')?;
            }
            f.write_char(')')
        },
        Value::Set(items) => {
            f.write_char('{')?;
            write_joined(f, items.borrow().iter(), |f, key| write!(f, "{key}"))?;
            f.write_char('}')
        },
        Value::Map(entries) => {
            f.write_char('{')?;
            write_joined(f, entries.borrow().iter(), |f, (key, value)| {
                write!(f, "{key}: {}", Repr(value))
            })?;
            f.write_char('}')
        },
        Value::Function(def) => write!(f, "<function {}>", def.name),
        Value::Builtin(builtin) => write!(f, "<builtin {}>", builtin.name),
        Value::Module(namespace) => write!(f, "<module {}>", namespace.name),
    }
}

impl Display for Value {
    /// Formats the value for `print`.
    ///
    /// # Example
    /// ```
    /// use quirk::interpreter::value::core::Value;
    ///
    /// let value = Value::list(vec![Value::from("a"), Value::Float(2.0), Value::None]);
    ///
    /// assert_eq!(value.to_string(), "[\"a\", 2.0, none]");
    /// assert_eq!(Value::from("a").to_string(), "a");
    /// ```
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_value(f, self, false)
    }
}

impl Display for Repr<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_value(f, self.0, true)
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_value(f, &Value::from(self), true)
    }
}
