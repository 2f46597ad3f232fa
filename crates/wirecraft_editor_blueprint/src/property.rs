// SPDX-License-Identifier: MIT OR Apache-2.0
//! Property handles binding parameters to the graph framework.
//!
//! `add_property` on the target node returns a [`PropertyHandle`]; the
//! control widget keeps a clone and pushes committed values through it. The
//! revision counter lets the owning framework (and tests) detect how many
//! commits a gesture produced.

use serde_json::Value;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug)]
struct PropertyState {
    value: Value,
    revision: u64,
}

/// Shared handle to a property registered on a node.
///
/// Cloning yields another handle to the same property. Construction and
/// interaction both happen on the UI thread, so interior mutability is
/// single-threaded.
#[derive(Debug, Clone)]
pub struct PropertyHandle {
    name: Rc<str>,
    display_type: Rc<str>,
    state: Rc<RefCell<PropertyState>>,
}

impl PropertyHandle {
    /// Create a property seeded with its default value (revision 0)
    pub fn new(name: &str, default_value: Value, display_type: &str) -> Self {
        Self {
            name: Rc::from(name),
            display_type: Rc::from(display_type),
            state: Rc::new(RefCell::new(PropertyState {
                value: default_value,
                revision: 0,
            })),
        }
    }

    /// Property name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable type the property was registered with
    pub fn display_type(&self) -> &str {
        &self.display_type
    }

    /// Current property value
    pub fn value(&self) -> Value {
        self.state.borrow().value.clone()
    }

    /// Number of committed changes since construction
    pub fn revision(&self) -> u64 {
        self.state.borrow().revision
    }

    /// Commit a new value, bumping the revision
    pub fn set(&self, value: Value) {
        let mut state = self.state.borrow_mut();
        tracing::trace!(property = %self.name, %value, "property committed");
        state.value = value;
        state.revision += 1;
    }
}
