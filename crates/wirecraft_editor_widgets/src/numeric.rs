// SPDX-License-Identifier: MIT OR Apache-2.0
//! Bounded numeric control and display widgets.
//!
//! The control owns a [`BoundedNumber`] resolved from the parameter's
//! constraint metadata and drives it from three inputs: edge-arrow presses,
//! horizontal drags, and direct text entry. The bound property is notified
//! exactly once per gesture, at release or at entry confirmation, and
//! never while a drag is still in progress.

use crate::bounds::BoundedNumber;
use crate::constraints::NumericConstraints;
use crate::drawer::NumericDrawer;
use crate::interaction::{hit_zone, step_multiplier, DragPhase, HitZone, DRAG_DEAD_ZONE};
use egui::{Painter, Rect};
use serde_json::Value;
use wirecraft_editor_blueprint::{
    ContentSpec, ControlWidget, DisplayWidget, EntryError, NodeWidget, ParameterSpec,
    PointerEvent, PointerPhase, PointerReply, PropertyHandle, WidgetCatalog,
};

fn format_number(value: f64, precision: u32) -> String {
    format!("{:.*}", precision as usize, value)
}

/// Interactive bounded numeric control.
///
/// When the parameter is aliased to a content entry, the pushed live value
/// is rendered as a readout beside the editable value instead of replacing
/// it.
pub struct NumericControl {
    name: String,
    property: PropertyHandle,
    model: BoundedNumber,
    step: f64,
    phase: DragPhase,
    live_value: Option<f64>,
    drawer: NumericDrawer,
}

impl NumericControl {
    /// Build the control for a parameter, with the signature the widget
    /// catalog expects
    pub fn new(
        name: &str,
        property: PropertyHandle,
        parameter: &ParameterSpec,
        paired_content: Option<&ContentSpec>,
    ) -> Self {
        let constraints = NumericConstraints::resolve(parameter);
        let initial = parameter.default_value.as_f64().unwrap_or(0.0);
        Self {
            name: name.to_owned(),
            property,
            model: constraints.bounded(initial),
            step: 1.0,
            phase: DragPhase::Idle,
            live_value: paired_content.map(|content| content.default_value.as_f64().unwrap_or(0.0)),
            drawer: NumericDrawer::new(name),
        }
    }

    /// Override the per-unit drag step (1 by default)
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Current model value
    pub fn value(&self) -> f64 {
        self.model.value()
    }

    /// Last live value pushed for the paired content, if this parameter is
    /// aliased to one
    pub fn live_value(&self) -> Option<f64> {
        self.live_value
    }

    fn format_value(&self) -> String {
        format_number(self.model.value(), self.model.precision())
    }

    // Settle the current value through the model once more and notify the
    // bound property. One call per gesture or confirmed edit.
    fn commit(&mut self) {
        let settled = self.model.value();
        self.model.set_value(settled);
        self.property.set(Value::from(self.model.value()));
    }
}

impl NodeWidget for NumericControl {
    fn name(&self) -> &str {
        &self.name
    }

    fn draw(&self, painter: &Painter, rect: Rect) {
        let readout = self
            .live_value
            .map(|live| format_number(live, self.model.precision()));
        self.drawer
            .draw_control(painter, rect, &self.format_value(), readout.as_deref());
    }

    fn value_changed(&mut self, value: &Value) {
        let Some(new_value) = value.as_f64() else {
            tracing::warn!(widget = %self.name, %value, "ignoring non-numeric value push");
            return;
        };
        if self.live_value.is_some() {
            self.live_value = Some(new_value);
        } else {
            self.model.set_value(new_value);
            self.commit();
        }
    }
}

impl ControlWidget for NumericControl {
    fn on_pointer(&mut self, event: PointerEvent, widget_width: f32) -> PointerReply {
        let multiplier = step_multiplier(event.modifiers);
        match event.phase {
            PointerPhase::Pressed => {
                self.phase = DragPhase::Pressed { anchor_x: event.x };
                match hit_zone(event.x, widget_width) {
                    HitZone::Decrement => self.model.decrement_by(self.step * multiplier),
                    HitZone::Increment => self.model.increment_by(self.step * multiplier),
                    HitZone::Center => {}
                }
                PointerReply::Consumed
            }
            PointerPhase::Moved => {
                let anchor_x = match self.phase {
                    DragPhase::Pressed { anchor_x } | DragPhase::Dragging { anchor_x } => anchor_x,
                    DragPhase::Idle => return PointerReply::Consumed,
                };
                let displacement = event.x - anchor_x;
                if displacement.abs() > DRAG_DEAD_ZONE {
                    let steps = f64::from(displacement.floor());
                    self.model.increment_by(steps * self.step * multiplier);
                    // Baseline resets so further steps are relative
                    self.phase = DragPhase::Dragging { anchor_x: event.x };
                }
                PointerReply::Consumed
            }
            PointerPhase::Released => {
                let clicked = matches!(self.phase, DragPhase::Pressed { .. });
                self.phase = DragPhase::Idle;
                let reply = if clicked && hit_zone(event.x, widget_width) == HitZone::Center {
                    PointerReply::OpenPrompt {
                        seed: self.format_value(),
                    }
                } else {
                    PointerReply::Consumed
                };
                self.commit();
                reply
            }
        }
    }

    fn confirm_entry(&mut self, input: &str) -> Result<(), EntryError> {
        let Ok(value) = input.trim().parse::<f64>() else {
            tracing::warn!(widget = %self.name, input, "text entry is not a number");
            return Err(EntryError::NotANumber(input.to_owned()));
        };
        if !value.is_finite() {
            tracing::warn!(widget = %self.name, input, "text entry is not finite");
            return Err(EntryError::NotFinite(input.to_owned()));
        }
        self.model.set_value(value);
        self.commit();
        Ok(())
    }
}

/// Passive numeric readout for a content entry
pub struct NumericDisplay {
    name: String,
    value: f64,
    precision: u32,
    drawer: NumericDrawer,
}

impl NumericDisplay {
    /// Build the display for a content entry, seeded with its default value
    pub fn new(name: &str, content: &ContentSpec) -> Self {
        Self {
            name: name.to_owned(),
            value: content.default_value.as_f64().unwrap_or(0.0),
            precision: if content.datatype.is_float { 2 } else { 0 },
            drawer: NumericDrawer::new(name),
        }
    }

    /// Last value pushed into the display
    pub fn value(&self) -> f64 {
        self.value
    }
}

impl NodeWidget for NumericDisplay {
    fn name(&self) -> &str {
        &self.name
    }

    fn draw(&self, painter: &Painter, rect: Rect) {
        self.drawer
            .draw_display(painter, rect, &format_number(self.value, self.precision));
    }

    fn value_changed(&mut self, value: &Value) {
        if let Some(new_value) = value.as_f64() {
            self.value = new_value;
        }
    }
}

impl DisplayWidget for NumericDisplay {}

/// Register the numeric control and display for a datatype
pub fn install_numeric(catalog: &mut WidgetCatalog, type_name: &str, identifier: Option<&str>) {
    catalog.register_control(type_name, identifier, |name, property, parameter, paired| {
        Box::new(NumericControl::new(name, property, parameter, paired))
    });
    catalog.register_display(type_name, identifier, |name, content| {
        Box::new(NumericDisplay::new(name, content))
    });
}
