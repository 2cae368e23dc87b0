use std::collections::{BTreeMap, BTreeSet};

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::{core::Value, display::Repr, key::Key},
    },
    util::num::resolve_index,
};

impl Interpreter {
    /// Evaluates a set literal. Duplicate elements collapse into one.
    pub(crate) fn eval_set_literal(&mut self, elements: &[Expr], line: usize) -> EvalResult<Value> {
        let mut set = BTreeSet::new();
        for element in elements {
            let value = self.evaluate(element)?;
            set.insert(Key::try_from_value(&value, line)?);
        }
        Ok(Value::set(set))
    }

    /// Evaluates a mapping literal, keys before values, entry by entry. A
    /// repeated key keeps the last value.
    pub(crate) fn eval_map_literal(&mut self,
                                   entries: &[(Expr, Expr)],
                                   line: usize)
                                   -> EvalResult<Value> {
        let mut map = BTreeMap::new();
        for (key, value) in entries {
            let key = Key::try_from_value(&self.evaluate(key)?, line)?;
            let value = self.evaluate(value)?;
            map.insert(key, value);
        }
        Ok(Value::map(map))
    }

    /// Evaluates `target[index]`.
    ///
    /// Lists, tuples and strings take an integer index, negative indices
    /// counting from the end. Mappings take any hashable key.
    pub(crate) fn eval_index(&mut self,
                             target: &Expr,
                             index: &Expr,
                             line: usize)
                             -> EvalResult<Value> {
        let target = self.evaluate(target)?;
        let index = self.evaluate(index)?;

        if let Value::Map(entries) = &target {
            let key = Key::try_from_value(&index, line)?;
            return entries.borrow()
                          .get(&key)
                          .cloned()
                          .ok_or_else(|| RuntimeError::KeyNotFound { key: Repr(&index).to_string(),
                                                                     line });
        }

        let &Value::Integer(position) = &index else {
            return Err(RuntimeError::TypeError { details: format!("'{}' indices must be integers, \
                                                                   not '{}'",
                                                                  target.type_name(),
                                                                  index.type_name()),
                                                 line });
        };
        let out_of_range = |len| RuntimeError::IndexOutOfRange { index: position,
                                                                 len,
                                                                 line };

        match &target {
            Value::List(items) => {
                let items = items.borrow();
                resolve_index(position, items.len()).map(|i| items[i].clone())
                                                    .ok_or_else(|| out_of_range(items.len()))
            },
            Value::Tuple(items) => {
                resolve_index(position, items.len()).map(|i| items[i].clone())
                                                    .ok_or_else(|| out_of_range(items.len()))
            },
            Value::String(s) => {
                let chars = s.chars().collect::<Vec<_>>();
                resolve_index(position, chars.len()).map(|i| Value::from(chars[i].to_string()))
                                                    .ok_or_else(|| out_of_range(chars.len()))
            },
            other => Err(RuntimeError::TypeError { details: format!("'{}' object is not \
                                                                     subscriptable",
                                                                    other.type_name()),
                                                   line }),
        }
    }

    /// Evaluates `target.name` on a module namespace or a mapping with string
    /// keys.
    pub(crate) fn eval_attribute(&mut self,
                                 target: &Expr,
                                 name: &str,
                                 line: usize)
                                 -> EvalResult<Value> {
        let target = self.evaluate(target)?;
        let missing = |type_name: String| RuntimeError::AttributeNotFound { name: name.to_string(),
                                                                            type_name,
                                                                            line };

        match &target {
            Value::Module(namespace) => {
                namespace.bindings
                         .get(name)
                         .cloned()
                         .ok_or_else(|| missing(format!("module {}", namespace.name)))
            },
            Value::Map(entries) => {
                entries.borrow()
                       .get(&Key::String(name.into()))
                       .cloned()
                       .ok_or_else(|| missing(target.type_name().to_string()))
            },
            other => Err(missing(other.type_name().to_string())),
        }
    }
}
