// SPDX-License-Identifier: MIT OR Apache-2.0
//! Widget catalog: resolves declared datatypes to widget factories.
//!
//! Entries are registered under a type name with an optional narrowing
//! identifier. Lookups return every matching factory, most specific first:
//! identifier-qualified entries (when the query carries that identifier)
//! ahead of bare type-name entries. An entry registered under a *different*
//! identifier never matches. Lookups never fail; an empty result is the
//! caller's problem.

use crate::blueprint::{ContentSpec, ParameterSpec};
use crate::property::PropertyHandle;
use crate::widget::{ControlWidget, DisplayWidget};
use indexmap::IndexMap;
use std::rc::Rc;

/// Factory producing a control widget from `(name, property, parameter,
/// paired content)`
pub type ControlFactory =
    Rc<dyn Fn(&str, PropertyHandle, &ParameterSpec, Option<&ContentSpec>) -> Box<dyn ControlWidget>>;

/// Factory producing a display widget from `(name, content)`
pub type DisplayFactory = Rc<dyn Fn(&str, &ContentSpec) -> Box<dyn DisplayWidget>>;

struct ControlSlot {
    identifier: Option<String>,
    factory: ControlFactory,
}

struct DisplaySlot {
    identifier: Option<String>,
    factory: DisplayFactory,
}

/// Registry of widget factories keyed by datatype
#[derive(Default)]
pub struct WidgetCatalog {
    controls: IndexMap<String, Vec<ControlSlot>>,
    displays: IndexMap<String, Vec<DisplaySlot>>,
}

impl WidgetCatalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a control widget factory for a datatype
    pub fn register_control<F>(&mut self, type_name: &str, identifier: Option<&str>, factory: F)
    where
        F: Fn(&str, PropertyHandle, &ParameterSpec, Option<&ContentSpec>) -> Box<dyn ControlWidget>
            + 'static,
    {
        self.controls
            .entry(type_name.to_owned())
            .or_default()
            .push(ControlSlot {
                identifier: identifier.map(str::to_owned),
                factory: Rc::new(factory),
            });
    }

    /// Register a display widget factory for a datatype
    pub fn register_display<F>(&mut self, type_name: &str, identifier: Option<&str>, factory: F)
    where
        F: Fn(&str, &ContentSpec) -> Box<dyn DisplayWidget> + 'static,
    {
        self.displays
            .entry(type_name.to_owned())
            .or_default()
            .push(DisplaySlot {
                identifier: identifier.map(str::to_owned),
                factory: Rc::new(factory),
            });
    }

    /// Control factories matching a datatype, most specific first
    pub fn lookup_controls(
        &self,
        type_name: &str,
        identifier: Option<&str>,
    ) -> Vec<ControlFactory> {
        let Some(slots) = self.controls.get(type_name) else {
            return Vec::new();
        };
        let mut matches = Vec::new();
        if let Some(identifier) = identifier {
            matches.extend(
                slots
                    .iter()
                    .filter(|slot| slot.identifier.as_deref() == Some(identifier))
                    .map(|slot| Rc::clone(&slot.factory)),
            );
        }
        matches.extend(
            slots
                .iter()
                .filter(|slot| slot.identifier.is_none())
                .map(|slot| Rc::clone(&slot.factory)),
        );
        matches
    }

    /// Display factories matching a datatype, most specific first
    pub fn lookup_displays(
        &self,
        type_name: &str,
        identifier: Option<&str>,
    ) -> Vec<DisplayFactory> {
        let Some(slots) = self.displays.get(type_name) else {
            return Vec::new();
        };
        let mut matches = Vec::new();
        if let Some(identifier) = identifier {
            matches.extend(
                slots
                    .iter()
                    .filter(|slot| slot.identifier.as_deref() == Some(identifier))
                    .map(|slot| Rc::clone(&slot.factory)),
            );
        }
        matches.extend(
            slots
                .iter()
                .filter(|slot| slot.identifier.is_none())
                .map(|slot| Rc::clone(&slot.factory)),
        );
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::{EntryError, NodeWidget, PointerEvent, PointerReply};
    use egui::{Painter, Rect};
    use serde_json::Value;

    // Stub whose reported name encodes which factory produced it
    struct StubControl {
        label: String,
    }

    impl NodeWidget for StubControl {
        fn name(&self) -> &str {
            &self.label
        }
        fn draw(&self, _painter: &Painter, _rect: Rect) {}
        fn value_changed(&mut self, _value: &Value) {}
    }

    impl ControlWidget for StubControl {
        fn on_pointer(&mut self, _event: PointerEvent, _width: f32) -> PointerReply {
            PointerReply::Consumed
        }
        fn confirm_entry(&mut self, _input: &str) -> Result<(), EntryError> {
            Ok(())
        }
    }

    fn register_tagged(catalog: &mut WidgetCatalog, identifier: Option<&str>, tag: &'static str) {
        catalog.register_control("Number", identifier, move |_, _, _, _| {
            Box::new(StubControl {
                label: tag.to_owned(),
            })
        });
    }

    fn first_tag(catalog: &WidgetCatalog, identifier: Option<&str>) -> Option<String> {
        let factories = catalog.lookup_controls("Number", identifier);
        let factory = factories.first()?;
        let parameter: ParameterSpec = serde_json::from_str(
            r#"{"name": "x", "datatype": {"typeName": "Number"}, "defaultValue": 0}"#,
        )
        .unwrap();
        let property = PropertyHandle::new("x", Value::from(0), "Number");
        Some(factory("x", property, &parameter, None).name().to_owned())
    }

    #[test]
    fn test_identifier_match_outranks_bare_match() {
        let mut catalog = WidgetCatalog::new();
        // Bare entry registered first must not shadow the identifier match
        register_tagged(&mut catalog, None, "bare");
        register_tagged(&mut catalog, Some("Angle"), "angle");

        assert_eq!(catalog.lookup_controls("Number", Some("Angle")).len(), 2);
        assert_eq!(first_tag(&catalog, Some("Angle")).as_deref(), Some("angle"));
        assert_eq!(first_tag(&catalog, None).as_deref(), Some("bare"));
    }

    #[test]
    fn test_bare_lookup_skips_identifier_entries() {
        let mut catalog = WidgetCatalog::new();
        register_tagged(&mut catalog, Some("Angle"), "angle");

        assert!(catalog.lookup_controls("Number", None).is_empty());
        assert_eq!(catalog.lookup_controls("Number", Some("Angle")).len(), 1);
    }

    #[test]
    fn test_foreign_identifier_never_matches() {
        let mut catalog = WidgetCatalog::new();
        register_tagged(&mut catalog, Some("Angle"), "angle");

        assert!(catalog.lookup_controls("Number", Some("Ratio")).is_empty());
    }

    #[test]
    fn test_unknown_type_returns_empty() {
        let catalog = WidgetCatalog::new();
        assert!(catalog.lookup_controls("Exotic", None).is_empty());
        assert!(catalog.lookup_displays("Exotic", None).is_empty());
    }
}
