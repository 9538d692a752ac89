//! Output formats for a loaded service

use std::fmt::Write as _;

use scpd::ParseReport;
use serde::Serialize;
use upnp_typedef::{Action, Service, StateVariable};

/// JSON view of a loaded service and its parse report
#[derive(Debug, Serialize)]
pub struct ServiceView {
    pub spec_version: String,
    pub actions: Vec<ActionView>,
    pub state_variables: Vec<StateVariableView>,
    pub skipped: Vec<String>,
    pub rejected: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ActionView {
    pub name: String,
    pub arguments: Vec<ArgumentView>,
}

#[derive(Debug, Serialize)]
pub struct ArgumentView {
    pub name: String,
    pub direction: String,
    pub related_state_variable: String,
}

#[derive(Debug, Serialize)]
pub struct StateVariableView {
    pub name: String,
    pub data_type: String,
    pub send_events: bool,
    /// Value variant that carries this type, absent for vendor types
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

impl ServiceView {
    pub fn new(service: &Service, report: &ParseReport) -> Self {
        Self {
            spec_version: report.spec_version.to_string(),
            actions: service.actions().map(ActionView::from).collect(),
            state_variables: service.state_variables().map(StateVariableView::from).collect(),
            skipped: report.skipped.iter().map(ToString::to_string).collect(),
            rejected: report.rejected.iter().map(ToString::to_string).collect(),
        }
    }
}

impl From<&Action> for ActionView {
    fn from(action: &Action) -> Self {
        Self {
            name: action.name().to_string(),
            arguments: action
                .arguments()
                .map(|arg| ArgumentView {
                    name: arg.name().to_string(),
                    direction: arg.direction().to_string(),
                    related_state_variable: arg.related_state_variable().to_string(),
                })
                .collect(),
        }
    }
}

impl From<&StateVariable> for StateVariableView {
    fn from(variable: &StateVariable) -> Self {
        Self {
            name: variable.name().to_string(),
            data_type: variable.data_type_name().to_string(),
            send_events: variable.is_evented(),
            value_kind: variable
                .data_type()
                .map(|data_type| format!("{:?}", data_type.value_kind())),
            default_value: variable.default_value().map(ToString::to_string),
        }
    }
}

/// Human readable listing of actions, state variables and parse diagnostics
pub fn summary(service: &Service, report: &ParseReport) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "SCPD version {}", report.spec_version);
    let _ = writeln!(out, "Actions ({}):", service.action_count());
    for action in service.actions() {
        let _ = writeln!(out, "  {}", action.name());
        for arg in action.arguments() {
            let _ = writeln!(
                out,
                "    {:<3} {} -> {}",
                arg.direction(),
                arg.name(),
                arg.related_state_variable()
            );
        }
    }

    let _ = writeln!(out, "State variables ({}):", service.state_variable_count());
    for variable in service.state_variables() {
        let evented = if variable.is_evented() { " [evented]" } else { "" };
        match variable.default_value() {
            Some(value) => {
                let _ = writeln!(
                    out,
                    "  {}: {} = {}{}",
                    variable.name(),
                    variable.data_type_name(),
                    value,
                    evented
                );
            }
            None => {
                let _ = writeln!(out, "  {}: {}{}", variable.name(), variable.data_type_name(), evented);
            }
        }
    }

    if !report.is_clean() {
        let _ = writeln!(out, "Diagnostics:");
        for skipped in &report.skipped {
            let _ = writeln!(out, "  skipped {}", skipped);
        }
        for rejected in &report.rejected {
            let _ = writeln!(out, "  rejected {}", rejected);
        }
    }

    out
}
