// SPDX-License-Identifier: MIT OR Apache-2.0
//! Shared renderer for the numeric widgets.
//!
//! Controls get a pill-shaped frame with arrow affordances on both edges,
//! the label on the left and the value right-aligned; displays drop the
//! arrows. Geometry mirrors the hit-zones in [`crate::interaction`]. Exact
//! styling is cosmetic and intentionally plain.

use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Stroke, Vec2};

const MARGIN: f32 = 20.0;
const ARROW_WIDTH: f32 = 10.0;
const ARROW_INSET: f32 = 6.0;

/// Painter for a labeled numeric readout
pub struct NumericDrawer {
    label: String,
    outline: Color32,
    background: Color32,
    label_color: Color32,
    value_color: Color32,
    arrow_color: Color32,
}

impl NumericDrawer {
    /// Create a drawer for the given label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            outline: Color32::from_gray(0x66),
            background: Color32::from_gray(0x22),
            label_color: Color32::from_gray(0x99),
            value_color: Color32::from_gray(0xdd),
            arrow_color: Color32::from_gray(0xdd),
        }
    }

    /// Paint the interactive variant: frame, both arrows, label, value, and
    /// an optional live readout between label and value
    pub fn draw_control(&self, painter: &Painter, rect: Rect, value: &str, readout: Option<&str>) {
        let frame = self.frame(rect);
        self.draw_frame(painter, frame);
        self.draw_arrows(painter, frame);
        self.draw_label(painter, frame);
        self.draw_value(painter, frame, value);
        if let Some(readout) = readout {
            painter.text(
                frame.center(),
                Align2::CENTER_CENTER,
                readout,
                FontId::proportional(12.0),
                self.label_color,
            );
        }
    }

    /// Paint the passive variant: frame, label, and value only
    pub fn draw_display(&self, painter: &Painter, rect: Rect, value: &str) {
        let frame = self.frame(rect);
        self.draw_frame(painter, frame);
        self.draw_label(painter, frame);
        self.draw_value(painter, frame, value);
    }

    fn frame(&self, rect: Rect) -> Rect {
        Rect::from_min_max(
            rect.min + Vec2::new(MARGIN, 0.0),
            rect.max - Vec2::new(MARGIN, 0.0),
        )
    }

    fn draw_frame(&self, painter: &Painter, frame: Rect) {
        let rounding = frame.height() * 0.5;
        painter.rect_filled(frame, rounding, self.background);
        painter.rect_stroke(frame, rounding, Stroke::new(1.0, self.outline));
    }

    fn draw_arrows(&self, painter: &Painter, frame: Rect) {
        let top = frame.top() + 5.0;
        let bottom = frame.bottom() - 5.0;
        let middle = frame.center().y;

        let left_base = frame.left() + ARROW_INSET + ARROW_WIDTH;
        painter.add(Shape::convex_polygon(
            vec![
                Pos2::new(left_base, top),
                Pos2::new(frame.left() + ARROW_INSET, middle),
                Pos2::new(left_base, bottom),
            ],
            self.arrow_color,
            Stroke::NONE,
        ));

        let right_base = frame.right() - ARROW_INSET - ARROW_WIDTH;
        painter.add(Shape::convex_polygon(
            vec![
                Pos2::new(right_base, top),
                Pos2::new(frame.right() - ARROW_INSET, middle),
                Pos2::new(right_base, bottom),
            ],
            self.arrow_color,
            Stroke::NONE,
        ));
    }

    fn draw_label(&self, painter: &Painter, frame: Rect) {
        painter.text(
            Pos2::new(frame.left() + MARGIN + 5.0, frame.center().y),
            Align2::LEFT_CENTER,
            &self.label,
            FontId::proportional(12.0),
            self.label_color,
        );
    }

    fn draw_value(&self, painter: &Painter, frame: Rect, value: &str) {
        painter.text(
            Pos2::new(frame.right() - MARGIN, frame.center().y),
            Align2::RIGHT_CENTER,
            value,
            FontId::proportional(12.0),
            self.value_color,
        );
    }
}
