// SPDX-License-Identifier: MIT OR Apache-2.0
//! Widget capability traits and pointer interaction types.
//!
//! Concrete widgets live in the widgets crate; this module defines the
//! contracts the construction pipeline and the hosting node canvas program
//! against. Pointer events arrive one at a time on the UI thread, already
//! translated into widget-local coordinates.

use egui::{Modifiers, Painter, Rect, Vec2};
use serde_json::Value;

/// Phase of a discrete pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    /// Pointer button went down over the widget
    Pressed,
    /// Pointer moved while the button is held
    Moved,
    /// Pointer button was released
    Released,
}

/// A discrete pointer event in widget-local coordinates
#[derive(Debug, Clone, Copy)]
pub struct PointerEvent {
    /// Event phase
    pub phase: PointerPhase,
    /// Horizontal position, relative to the widget's left edge
    pub x: f32,
    /// Vertical position, relative to the widget's top edge
    pub y: f32,
    /// Modifier keys held during the event
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// Convenience constructor for an unmodified event
    pub fn new(phase: PointerPhase, x: f32, y: f32) -> Self {
        Self {
            phase,
            x,
            y,
            modifiers: Modifiers::NONE,
        }
    }
}

/// What the host must do after delivering a pointer event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerReply {
    /// Event consumed; nothing further required
    Consumed,
    /// Open a single-shot text-entry prompt seeded with the given string and
    /// deliver the confirmed input through [`ControlWidget::confirm_entry`]
    OpenPrompt {
        /// Current value, formatted for editing
        seed: String,
    },
}

/// Invalid direct text entry. Recovered locally: the widget stays usable and
/// its value model is left unchanged.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EntryError {
    /// Input did not parse as a number
    #[error("invalid input: \"{0}\" is not a number")]
    NotANumber(String),

    /// Input parsed but is not a finite number
    #[error("invalid input: \"{0}\" is not finite")]
    NotFinite(String),
}

/// Behavior shared by every widget attached to a node
pub trait NodeWidget {
    /// Widget name; matches the parameter or content it was bound to
    fn name(&self) -> &str;

    /// Preferred size in logical units
    fn preferred_size(&self) -> Vec2 {
        Vec2::new(60.0, 20.0)
    }

    /// Paint the widget into the given rectangle
    fn draw(&self, painter: &Painter, rect: Rect);

    /// Push an externally produced value into the widget (live values from
    /// the running graph arrive this way)
    fn value_changed(&mut self, value: &Value);
}

/// Interactive widget bound to a mutable property
pub trait ControlWidget: NodeWidget {
    /// Feed one pointer event through the widget's interaction state
    /// machine. `widget_width` is the current width of the hosting node,
    /// needed for edge hit-zones.
    fn on_pointer(&mut self, event: PointerEvent, widget_width: f32) -> PointerReply;

    /// Deliver the confirmed input of a prompt requested via
    /// [`PointerReply::OpenPrompt`]
    fn confirm_entry(&mut self, input: &str) -> Result<(), EntryError>;
}

/// Passive widget rendering a read-only value
pub trait DisplayWidget: NodeWidget {}
