//! Service actions.

use crate::argument::{Argument, ArgumentDirection};

/// A named operation exposed by a service.
///
/// Arguments keep insertion order, which is the order they appear in the
/// SOAP call signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    name: String,
    arguments: Vec<Argument>,
    /// Position in the owning service; the service owns the action, never
    /// the other way round
    service_index: Option<usize>,
}

impl Action {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
            service_index: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Index of this action in its owning [`crate::Service`], or `None`
    /// while it has not been added to one
    pub fn service_index(&self) -> Option<usize> {
        self.service_index
    }

    pub(crate) fn attach(&mut self, index: usize) {
        self.service_index = Some(index);
    }

    pub fn add_argument(&mut self, argument: Argument) {
        self.arguments.push(argument);
    }

    pub fn argument_count(&self) -> usize {
        self.arguments.len()
    }

    pub fn argument_at(&self, index: usize) -> Option<&Argument> {
        self.arguments.get(index)
    }

    /// Find an argument by name
    pub fn argument(&self, name: &str) -> Option<&Argument> {
        self.arguments.iter().find(|arg| arg.name() == name)
    }

    /// Name of the state variable bound to the named argument
    pub fn argument_related_state_variable(&self, name: &str) -> Option<&str> {
        self.argument(name).map(Argument::related_state_variable)
    }

    pub fn arguments(&self) -> impl Iterator<Item = &Argument> {
        self.arguments.iter()
    }

    /// Input arguments in call order
    pub fn in_arguments(&self) -> impl Iterator<Item = &Argument> {
        self.arguments
            .iter()
            .filter(|arg| arg.direction() == ArgumentDirection::In)
    }

    /// Output arguments in response order
    pub fn out_arguments(&self) -> impl Iterator<Item = &Argument> {
        self.arguments
            .iter()
            .filter(|arg| arg.direction() == ArgumentDirection::Out)
    }
}
