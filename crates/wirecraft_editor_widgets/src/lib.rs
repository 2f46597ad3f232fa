// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node widgets for Wirecraft Editor.
//!
//! Concrete widgets the blueprint construction layer attaches to nodes. The
//! numeric control is the representative interactive widget: a bounded,
//! step-quantized value driven by pointer drags, edge-arrow presses, and
//! direct text entry, sitting on top of [`BoundedNumber`]. The numeric
//! display is its passive counterpart for read-only content values.

pub mod bounds;
pub mod constraints;
pub mod drawer;
pub mod interaction;
pub mod numeric;

pub use bounds::{BoundedNumber, Parity};
pub use constraints::NumericConstraints;
pub use drawer::NumericDrawer;
pub use interaction::{hit_zone, step_multiplier, DragPhase, HitZone};
pub use numeric::{install_numeric, NumericControl, NumericDisplay};
