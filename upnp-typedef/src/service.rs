//! The service aggregate.
//!
//! A [`Service`] exclusively owns its actions and state variables once they
//! are added. Both collections keep insertion order and are searched
//! linearly by name; services describe tens of entries, not thousands.
//!
//! Mutation goes through `&mut Service`, so callers sharing a service across
//! threads must wrap it in their own lock.

use crate::action::Action;
use crate::error::{Result, TypedefError};
use crate::state_variable::StateVariable;

/// Actions and state variables of one UPnP service
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Service {
    actions: Vec<Action>,
    state_variables: Vec<StateVariable>,
}

impl Service {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of `action`.
    ///
    /// Fails with [`TypedefError::DuplicateAction`] when an action with the
    /// same name is already present; the service is left unchanged.
    pub fn add_action(&mut self, mut action: Action) -> Result<()> {
        if self.action(action.name()).is_some() {
            return Err(TypedefError::DuplicateAction(action.name().to_string()));
        }
        action.attach(self.actions.len());
        self.actions.push(action);
        Ok(())
    }

    pub fn add_state_variable(&mut self, state_variable: StateVariable) {
        self.state_variables.push(state_variable);
    }

    /// Reserve room for `additional` actions, reporting allocation failure
    /// instead of aborting
    pub fn try_reserve_actions(&mut self, additional: usize) -> Result<()> {
        self.actions
            .try_reserve(additional)
            .map_err(|e| TypedefError::OutOfMemory(format!("action list: {}", e)))
    }

    pub fn try_reserve_state_variables(&mut self, additional: usize) -> Result<()> {
        self.state_variables
            .try_reserve(additional)
            .map_err(|e| TypedefError::OutOfMemory(format!("state variable table: {}", e)))
    }

    pub fn action_count(&self) -> usize {
        self.actions.len()
    }

    pub fn action_at(&self, index: usize) -> Option<&Action> {
        self.actions.get(index)
    }

    pub fn action(&self, name: &str) -> Option<&Action> {
        self.actions.iter().find(|action| action.name() == name)
    }

    pub fn actions(&self) -> impl Iterator<Item = &Action> {
        self.actions.iter()
    }

    pub fn state_variable_count(&self) -> usize {
        self.state_variables.len()
    }

    pub fn state_variable_at(&self, index: usize) -> Option<&StateVariable> {
        self.state_variables.get(index)
    }

    pub fn state_variable(&self, name: &str) -> Option<&StateVariable> {
        self.state_variables.iter().find(|var| var.name() == name)
    }

    pub fn state_variables(&self) -> impl Iterator<Item = &StateVariable> {
        self.state_variables.iter()
    }

    /// Resolve the state variable bound to an action argument.
    ///
    /// Returns `None` when the action, the argument or the referenced
    /// state variable is missing, which happens with malformed documents.
    pub fn related_state_variable(&self, action: &str, argument: &str) -> Option<&StateVariable> {
        let name = self.action(action)?.argument_related_state_variable(argument)?;
        self.state_variable(name)
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty() && self.state_variables.is_empty()
    }

    /// Move every entry of `other` into this service, in order.
    ///
    /// State variables are always accepted. Actions that collide with an
    /// existing name are rejected individually; the rejections are returned
    /// and the remaining actions are still added.
    pub fn merge(&mut self, other: Service) -> Vec<TypedefError> {
        self.state_variables.extend(other.state_variables);

        let mut rejected = Vec::new();
        for action in other.actions {
            if let Err(e) = self.add_action(action) {
                rejected.push(e);
            }
        }
        rejected
    }
}
