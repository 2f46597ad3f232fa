// SPDX-License-Identifier: MIT OR Apache-2.0
//! Target node contract.
//!
//! The graph framework owns nodes; construction only populates them. The
//! pipeline never reads node state back, so the contract is write-only.

use crate::property::PropertyHandle;
use crate::widget::{ControlWidget, DisplayWidget};
use serde_json::Value;

/// A widget instance ready to be attached to a node
pub enum NodeWidgetInstance {
    /// Interactive widget bound to a property
    Control(Box<dyn ControlWidget>),
    /// Passive widget bound to read-only content
    Display(Box<dyn DisplayWidget>),
}

impl NodeWidgetInstance {
    /// Name of the wrapped widget
    pub fn name(&self) -> &str {
        match self {
            Self::Control(widget) => widget.name(),
            Self::Display(widget) => widget.name(),
        }
    }
}

impl std::fmt::Debug for NodeWidgetInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Control(widget) => f.debug_tuple("Control").field(&widget.name()).finish(),
            Self::Display(widget) => f.debug_tuple("Display").field(&widget.name()).finish(),
        }
    }
}

/// Mutable node being populated during one construction pass
pub trait BlueprintTarget {
    /// Add a typed input port
    fn add_input(&mut self, name: &str, display_type: &str);

    /// Add a typed output port
    fn add_output(&mut self, name: &str, display_type: &str);

    /// Register an editable property and return its handle
    fn add_property(&mut self, name: &str, default_value: Value, display_type: &str)
        -> PropertyHandle;

    /// Attach a custom widget to the node
    fn add_custom_widget(&mut self, widget: NodeWidgetInstance);
}
