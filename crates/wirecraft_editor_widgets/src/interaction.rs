// SPDX-License-Identifier: MIT OR Apache-2.0
//! Pointer interaction helpers for control widgets.
//!
//! A control widget is split into three horizontal hit-zones: a decrement
//! arrow on the left edge, an increment arrow on the right edge, and the
//! central zone that opens direct text entry on click. Drags anywhere on the
//! widget step the value once the dead-zone is crossed.

use egui::Modifiers;

/// Width of each edge arrow hit-zone, in logical units
pub const ARROW_ZONE_WIDTH: f32 = 40.0;

/// Horizontal displacement a press must exceed before it counts as a drag
pub const DRAG_DEAD_ZONE: f32 = 1.0;

/// Which hit-zone a widget-local x position falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitZone {
    /// Left arrow: step the value down
    Decrement,
    /// Central area: candidate click for text entry
    Center,
    /// Right arrow: step the value up
    Increment,
}

/// Classify a widget-local x position against the widget width
pub fn hit_zone(x: f32, widget_width: f32) -> HitZone {
    if x < ARROW_ZONE_WIDTH {
        HitZone::Decrement
    } else if x > widget_width - ARROW_ZONE_WIDTH {
        HitZone::Increment
    } else {
        HitZone::Center
    }
}

/// Pointer gesture state of a control widget.
///
/// `Idle → Pressed` on pointer-down, `Pressed → Dragging` once the
/// dead-zone is crossed, back to `Idle` on release. The anchor is the x
/// position the next displacement is measured from; it resets after every
/// applied step so drag steps are relative, not cumulative from the press
/// origin.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DragPhase {
    /// No button held
    #[default]
    Idle,
    /// Button down, no drag recognized yet
    Pressed {
        /// Displacement baseline
        anchor_x: f32,
    },
    /// Drag in progress
    Dragging {
        /// Displacement baseline
        anchor_x: f32,
    },
}

impl DragPhase {
    /// Whether a drag has been recognized since the last press
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}

/// Step multiplier derived from held modifier keys: 10 with shift, 100 with
/// shift and ctrl together
pub fn step_multiplier(modifiers: Modifiers) -> f64 {
    if modifiers.shift && modifiers.ctrl {
        100.0
    } else if modifiers.shift {
        10.0
    } else {
        1.0
    }
}
