// SPDX-License-Identifier: MIT OR Apache-2.0
//! Blueprint construction layer for Wirecraft Editor.
//!
//! The runtime authority describes each node type declaratively: its input
//! and output ports, its editable parameters, and its read-only contents.
//! This crate turns such a description into a live node by:
//! - adding typed ports to the target node,
//! - binding each parameter to a property handle,
//! - resolving and attaching an interactive control widget per parameter,
//! - resolving and attaching a passive display widget per content entry.
//!
//! ## Architecture
//!
//! Construction runs through an ordered handler chain
//! ([`ConstructionPipeline`]): each handler reads the blueprint sections it
//! cares about, mutates the target node, and passes control to the next
//! handler. Widgets are resolved through a [`WidgetCatalog`] keyed by
//! datatype name plus optional identifier, most specific match first.

pub mod blueprint;
pub mod catalog;
pub mod handlers;
pub mod pipeline;
pub mod property;
pub mod target;
pub mod widget;

pub use blueprint::{ContentSpec, Datatype, MetadataEntry, NodeBlueprint, ParameterSpec, PortSpec};
pub use catalog::{ControlFactory, DisplayFactory, WidgetCatalog};
pub use handlers::{ContentHandler, InputPortHandler, OutputPortHandler, ParameterHandler};
pub use pipeline::{BlueprintHandler, ConstructError, ConstructionPipeline, Continuation};
pub use property::PropertyHandle;
pub use target::{BlueprintTarget, NodeWidgetInstance};
pub use widget::{
    ControlWidget, DisplayWidget, EntryError, NodeWidget, PointerEvent, PointerPhase, PointerReply,
};
