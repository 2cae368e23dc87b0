use std::collections::HashMap;

use crate::interpreter::value::core::Value;

/// An ordered stack of variable frames, innermost last.
///
/// Reads search from the innermost frame outward; [`ScopeStack::set`] writes
/// only the innermost frame, while [`ScopeStack::assign_existing`] rebinds the
/// name in the frame that already holds it. The global frame is never popped.
#[derive(Debug, Clone)]
pub struct ScopeStack {
    frames: Vec<HashMap<String, Value>>,
}

impl Default for ScopeStack {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeStack {
    /// Creates a stack holding only the global frame.
    #[must_use]
    pub fn new() -> Self {
        Self { frames: vec![HashMap::new()] }
    }

    /// Pushes an empty frame.
    pub fn push(&mut self) {
        self.frames.push(HashMap::new());
    }

    /// Pops the innermost frame. The global frame stays.
    pub fn pop(&mut self) {
        if self.frames.len() > 1 {
            self.frames.pop();
        }
    }

    /// Number of frames, including the global frame.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Looks `name` up from the innermost frame outward.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.frames.iter().rev().find_map(|frame| frame.get(name))
    }

    /// Binds `name` in the innermost frame, shadowing any outer binding.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        if let Some(frame) = self.frames.last_mut() {
            frame.insert(name.into(), value);
        }
    }

    /// Rebinds `name` in the innermost frame that already holds it.
    ///
    /// Returns `false`, leaving the stack untouched, if no frame holds the
    /// name.
    pub fn assign_existing(&mut self, name: &str, value: Value) -> bool {
        match self.frames.iter_mut().rev().find_map(|frame| frame.get_mut(name)) {
            Some(slot) => {
                *slot = value;
                true
            },
            None => false,
        }
    }

    /// The global frame.
    #[must_use]
    pub fn globals(&self) -> &HashMap<String, Value> {
        &self.frames[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_shadows_in_innermost_frame() {
        let mut scopes = ScopeStack::new();
        scopes.set("x", Value::Integer(1));
        scopes.push();
        scopes.set("x", Value::Integer(2));
        assert_eq!(scopes.get("x"), Some(&Value::Integer(2)));
        scopes.pop();
        assert_eq!(scopes.get("x"), Some(&Value::Integer(1)));
    }

    #[test]
    fn assign_existing_updates_the_owning_frame() {
        let mut scopes = ScopeStack::new();
        scopes.set("count", Value::Integer(1));
        scopes.push();
        assert!(scopes.assign_existing("count", Value::Integer(2)));
        scopes.pop();
        assert_eq!(scopes.get("count"), Some(&Value::Integer(2)));
        assert!(!scopes.assign_existing("missing", Value::None));
    }

    #[test]
    fn global_frame_is_never_popped() {
        let mut scopes = ScopeStack::new();
        scopes.pop();
        scopes.set("x", Value::Integer(1));
        assert_eq!(scopes.depth(), 1);
        assert_eq!(scopes.globals().get("x"), Some(&Value::Integer(1)));
    }
}
