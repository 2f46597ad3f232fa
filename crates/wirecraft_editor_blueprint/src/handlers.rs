// SPDX-License-Identifier: MIT OR Apache-2.0
//! Built-in construction handlers.
//!
//! Four handlers cover the four blueprint sections. Port handlers are pure
//! pass-through: no deduplication, blueprint order preserved, duplicate
//! names left for the graph framework to police. The parameter and content
//! handlers resolve widgets through the catalog and fail the pass when a
//! datatype has no registered widget.

use crate::blueprint::NodeBlueprint;
use crate::catalog::WidgetCatalog;
use crate::pipeline::{BlueprintHandler, ConstructError, Continuation};
use crate::target::{BlueprintTarget, NodeWidgetInstance};
use std::rc::Rc;

/// Adds one typed input port per declared input
pub struct InputPortHandler;

impl BlueprintHandler for InputPortHandler {
    fn process(
        &self,
        node: &mut dyn BlueprintTarget,
        blueprint: &NodeBlueprint,
        proceed: Continuation<'_>,
    ) -> Result<(), ConstructError> {
        for port in &blueprint.input_ports {
            node.add_input(&port.name, &port.datatype.display_type());
        }
        proceed.proceed(node, blueprint)
    }
}

/// Adds one typed output port per declared output
pub struct OutputPortHandler;

impl BlueprintHandler for OutputPortHandler {
    fn process(
        &self,
        node: &mut dyn BlueprintTarget,
        blueprint: &NodeBlueprint,
        proceed: Continuation<'_>,
    ) -> Result<(), ConstructError> {
        for port in &blueprint.output_ports {
            node.add_output(&port.name, &port.datatype.display_type());
        }
        proceed.proceed(node, blueprint)
    }
}

/// Binds each parameter to a property and an interactive control widget.
///
/// When a content entry aliases the parameter by name it is handed to the
/// widget as paired content, so the widget can render the live value next to
/// the editable one.
pub struct ParameterHandler {
    catalog: Rc<WidgetCatalog>,
}

impl ParameterHandler {
    /// Create the handler over a shared widget catalog
    pub fn new(catalog: Rc<WidgetCatalog>) -> Self {
        Self { catalog }
    }
}

impl BlueprintHandler for ParameterHandler {
    fn process(
        &self,
        node: &mut dyn BlueprintTarget,
        blueprint: &NodeBlueprint,
        proceed: Continuation<'_>,
    ) -> Result<(), ConstructError> {
        for parameter in &blueprint.parameters {
            let display_type = parameter.datatype.display_type();
            let property =
                node.add_property(&parameter.name, parameter.default_value.clone(), &display_type);
            let paired_content = blueprint.content(&parameter.name);

            let factories = self.catalog.lookup_controls(
                &parameter.datatype.type_name,
                parameter.datatype.identifier.as_deref(),
            );
            let factory = factories
                .first()
                .ok_or_else(|| ConstructError::UnresolvedWidgetType(display_type.clone()))?;

            let widget = factory(&parameter.name, property, parameter, paired_content);
            node.add_custom_widget(NodeWidgetInstance::Control(widget));
        }
        proceed.proceed(node, blueprint)
    }
}

/// Binds each non-aliased content entry to a passive display widget.
///
/// Contents that share a name with a parameter are skipped here; they were
/// already attached to that parameter's control as paired content.
pub struct ContentHandler {
    catalog: Rc<WidgetCatalog>,
}

impl ContentHandler {
    /// Create the handler over a shared widget catalog
    pub fn new(catalog: Rc<WidgetCatalog>) -> Self {
        Self { catalog }
    }
}

impl BlueprintHandler for ContentHandler {
    fn process(
        &self,
        node: &mut dyn BlueprintTarget,
        blueprint: &NodeBlueprint,
        proceed: Continuation<'_>,
    ) -> Result<(), ConstructError> {
        for content in &blueprint.contents {
            if blueprint.has_parameter(&content.name) {
                tracing::trace!(content = %content.name, "aliased to a parameter, skipping");
                continue;
            }
            tracing::debug!(content = %content.name, value = %content.default_value, "binding content");

            let display_type = content.datatype.display_type();
            let factories = self.catalog.lookup_displays(
                &content.datatype.type_name,
                content.datatype.identifier.as_deref(),
            );
            let factory = factories
                .first()
                .ok_or_else(|| ConstructError::UnresolvedWidgetType(display_type.clone()))?;

            let widget = factory(&content.name, content);
            node.add_custom_widget(NodeWidgetInstance::Display(widget));
        }
        proceed.proceed(node, blueprint)
    }
}
