use std::{cell::RefCell, collections::BTreeSet};

use crate::interpreter::{
    evaluator::core::Interpreter,
    value::{core::Value, key::Key},
};

impl Interpreter {
    /// Evaluates `a - b` on two sets, producing a new set with the elements of
    /// `a` that are not in `b`.
    #[must_use]
    pub fn eval_set_difference(a: &RefCell<BTreeSet<Key>>, b: &RefCell<BTreeSet<Key>>) -> Value {
        let difference = {
            let b = b.borrow();
            a.borrow().iter().filter(|key| !b.contains(key)).cloned().collect()
        };
        Value::set(difference)
    }
}
