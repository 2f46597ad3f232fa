// SPDX-License-Identifier: MIT OR Apache-2.0
//! Ordered construction pipeline over a target node.
//!
//! Handlers run in registration order via continuation passing: each handler
//! receives the node, the blueprint, and a [`Continuation`], and calls
//! [`Continuation::proceed`] to run the rest of the chain, or drops it to
//! halt the pass on purpose. An error aborts the remaining handlers; there is
//! no partial silent success.
//!
//! Running the same pipeline twice on one node accumulates ports and
//! widgets. Callers must supply a fresh node per run.

use crate::blueprint::NodeBlueprint;
use crate::catalog::WidgetCatalog;
use crate::handlers::{ContentHandler, InputPortHandler, OutputPortHandler, ParameterHandler};
use crate::target::BlueprintTarget;
use std::rc::Rc;

/// Error raised during a construction pass.
///
/// Construction errors are fatal to the pass: a node missing a widget would
/// misrepresent its blueprint, so the remaining handlers are not run.
#[derive(Debug, thiserror::Error)]
pub enum ConstructError {
    /// No catalog entry matched a parameter's or content's datatype
    #[error("unresolved widget type \"{0}\"")]
    UnresolvedWidgetType(String),

    /// Custom handler failure
    #[error("{0}")]
    Custom(String),
}

/// One stage of the construction pipeline
pub trait BlueprintHandler {
    /// Process the blueprint sections this handler cares about, then call
    /// `proceed` to continue the chain (or drop it to halt).
    fn process(
        &self,
        node: &mut dyn BlueprintTarget,
        blueprint: &NodeBlueprint,
        proceed: Continuation<'_>,
    ) -> Result<(), ConstructError>;
}

/// The not-yet-run tail of the handler chain
pub struct Continuation<'a> {
    remaining: &'a [Rc<dyn BlueprintHandler>],
}

impl Continuation<'_> {
    /// Run the rest of the chain. Consumes the continuation so a handler can
    /// invoke it at most once.
    pub fn proceed(
        self,
        node: &mut dyn BlueprintTarget,
        blueprint: &NodeBlueprint,
    ) -> Result<(), ConstructError> {
        match self.remaining.split_first() {
            Some((handler, rest)) => handler.process(node, blueprint, Continuation { remaining: rest }),
            None => Ok(()),
        }
    }
}

/// Ordered, mutable chain of construction handlers
#[derive(Default)]
pub struct ConstructionPipeline {
    handlers: Vec<Rc<dyn BlueprintHandler>>,
}

impl ConstructionPipeline {
    /// Create an empty pipeline
    pub fn new() -> Self {
        Self::default()
    }

    /// Pipeline with the built-in handlers in canonical order: input ports,
    /// output ports, parameters, contents.
    pub fn standard(catalog: Rc<WidgetCatalog>) -> Self {
        let mut pipeline = Self::new();
        pipeline.add_handler(Rc::new(InputPortHandler));
        pipeline.add_handler(Rc::new(OutputPortHandler));
        pipeline.add_handler(Rc::new(ParameterHandler::new(Rc::clone(&catalog))));
        pipeline.add_handler(Rc::new(ContentHandler::new(catalog)));
        pipeline
    }

    /// Append a handler to the chain
    pub fn add_handler(&mut self, handler: Rc<dyn BlueprintHandler>) {
        self.handlers.push(handler);
    }

    /// Remove a handler by identity. Silently does nothing when the handler
    /// was never registered.
    pub fn remove_handler(&mut self, handler: &Rc<dyn BlueprintHandler>) {
        self.handlers.retain(|registered| !Rc::ptr_eq(registered, handler));
    }

    /// Number of registered handlers
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether the chain is empty
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Run every handler in registration order against the node
    pub fn run(
        &self,
        node: &mut dyn BlueprintTarget,
        blueprint: &NodeBlueprint,
    ) -> Result<(), ConstructError> {
        tracing::debug!(handlers = self.handlers.len(), "running construction pass");
        Continuation {
            remaining: &self.handlers,
        }
        .proceed(node, blueprint)
    }
}
