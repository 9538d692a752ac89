//! SCPD document → [`Service`].
//!
//! The top-level sections (`specVersion`, `serviceStateTable`, `actionList`)
//! are required; their absence fails the whole document. Individual entries
//! inside a present section are validated one by one and malformed ones are
//! skipped with a diagnostic, so a single bad entry never prevents loading
//! the rest of the service.
//!
//! The document is staged into a scratch [`Service`] and merged into the
//! caller's service only after every required section has been read. A
//! document-level failure therefore leaves the caller's service untouched,
//! while entry-level skips simply leave fewer entries behind.

use std::fmt;

use upnp_typedef::{Action, Argument, ArgumentDirection, Service, StateVariable, TypedefError};
use xmltree::Element;

use crate::common::ElementExt;
use crate::error::{Result, ScpdError};

const SCPD: &str = "scpd";

const SPEC_VERSION: &str = "specVersion";
const SPEC_VERSION_MAJOR: &str = "major";
const SPEC_VERSION_MINOR: &str = "minor";

const ACTION_LIST: &str = "actionList";
const ACTION: &str = "action";
const ACTION_NAME: &str = "name";
const ARGUMENT_LIST: &str = "argumentList";
const ARGUMENT: &str = "argument";
const ARGUMENT_NAME: &str = "name";
const ARGUMENT_DIRECTION: &str = "direction";
const ARGUMENT_RELATED_STATE: &str = "relatedStateVariable";

const STATE_TABLE: &str = "serviceStateTable";
const STATE_VARIABLE: &str = "stateVariable";
const STATE_SEND_EVENTS: &str = "sendEvents";
const STATE_NAME: &str = "name";
const STATE_DATA_TYPE: &str = "dataType";

/// Version declared in the document's `<specVersion>` element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpecVersion {
    pub major: i32,
    pub minor: i32,
}

impl SpecVersion {
    pub const fn upnp_v1() -> Self {
        Self { major: 1, minor: 0 }
    }
}

impl fmt::Display for SpecVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// List in which a skipped entry was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    ServiceStateTable,
    ActionList,
    ArgumentList { action: String },
}

/// Why an entry was skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The element is not the kind the list holds
    UnexpectedElement(String),
    MissingAttribute(&'static str),
    MissingElement(&'static str),
    /// The action has no `argumentList`, or it has no children
    EmptyArgumentList,
    UnknownDirection(String),
}

/// One entry that was dropped while reading a list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    pub section: Section,
    /// Position of the entry among the list's child elements
    pub index: usize,
    pub reason: SkipReason,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::ServiceStateTable => f.write_str(STATE_TABLE),
            Section::ActionList => f.write_str(ACTION_LIST),
            Section::ArgumentList { action } => write!(f, "{} of {}", ARGUMENT_LIST, action),
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::UnexpectedElement(name) => write!(f, "unexpected <{}>", name),
            SkipReason::MissingAttribute(name) => write!(f, "missing {} attribute", name),
            SkipReason::MissingElement(name) => write!(f, "missing <{}>", name),
            SkipReason::EmptyArgumentList => f.write_str("no arguments"),
            SkipReason::UnknownDirection(text) => write!(f, "unknown direction {:?}", text),
        }
    }
}

impl fmt::Display for Skipped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} entry {}: {}", self.section, self.index, self.reason)
    }
}

/// Outcome of a successful parse
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub spec_version: SpecVersion,
    /// Malformed entries that were skipped
    pub skipped: Vec<Skipped>,
    /// Valid entries the service refused to take
    pub rejected: Vec<TypedefError>,
}

impl ParseReport {
    /// True when every entry of the document made it into the service
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.rejected.is_empty()
    }

    fn skip(&mut self, section: Section, index: usize, reason: SkipReason) {
        let skipped = Skipped { section, index, reason };
        tracing::debug!("Skipping {}", skipped);
        self.skipped.push(skipped);
    }
}

/// Populate `service` from the root element of an SCPD document
pub fn parse(root: &Element, service: &mut Service) -> Result<ParseReport> {
    if !root.has_name(SCPD) {
        return Err(ScpdError::InvalidDocument(format!(
            "root element is <{}>, expected <{}>",
            root.name, SCPD
        )));
    }

    let mut report = ParseReport {
        spec_version: load_spec_version(root)?,
        ..Default::default()
    };

    let mut staged = Service::new();
    load_service_state_table(root, &mut staged, &mut report)?;
    load_action_list(root, &mut staged, &mut report)?;

    for error in service.merge(staged) {
        tracing::warn!("Failed to add action to service: {}", error);
        report.rejected.push(error);
    }

    tracing::debug!(
        "Parsed SCPD {}: {} actions, {} state variables, {} skipped",
        report.spec_version,
        service.action_count(),
        service.state_variable_count(),
        report.skipped.len()
    );

    Ok(report)
}

/// Parse SCPD text and populate `service`
pub fn parse_str(xml: &str, service: &mut Service) -> Result<ParseReport> {
    let root = Element::parse(xml.as_bytes()).map_err(|e| ScpdError::MalformedXml(e.to_string()))?;
    parse(&root, service)
}

fn load_spec_version(root: &Element) -> Result<SpecVersion> {
    let version = root
        .child_by_name(SPEC_VERSION)
        .ok_or_else(|| missing(SPEC_VERSION))?;

    let major = version.child_content(SPEC_VERSION_MAJOR);
    let minor = version.child_content(SPEC_VERSION_MINOR);
    let (Some(major), Some(minor)) = (major, minor) else {
        return Err(ScpdError::InvalidDocument(format!(
            "<{}> requires <{}> and <{}>",
            SPEC_VERSION, SPEC_VERSION_MAJOR, SPEC_VERSION_MINOR
        )));
    };

    let spec_version = SpecVersion {
        major: leading_int(&major),
        minor: leading_int(&minor),
    };
    if spec_version != SpecVersion::upnp_v1() {
        tracing::warn!("SpecVersion: {}", spec_version);
    }

    Ok(spec_version)
}

fn load_service_state_table(
    root: &Element,
    service: &mut Service,
    report: &mut ParseReport,
) -> Result<()> {
    let table = non_empty_section(root, STATE_TABLE)?;
    let section = || Section::ServiceStateTable;

    for (index, node) in table.child_elements().enumerate() {
        if !node.has_name(STATE_VARIABLE) {
            report.skip(section(), index, SkipReason::UnexpectedElement(node.name.clone()));
            continue;
        }

        let Some(send_events) = node.attribute(STATE_SEND_EVENTS) else {
            report.skip(section(), index, SkipReason::MissingAttribute(STATE_SEND_EVENTS));
            continue;
        };

        let Some(name) = node.child_content(STATE_NAME) else {
            report.skip(section(), index, SkipReason::MissingElement(STATE_NAME));
            continue;
        };

        let Some(data_type) = node.child_content(STATE_DATA_TYPE) else {
            report.skip(section(), index, SkipReason::MissingElement(STATE_DATA_TYPE));
            continue;
        };

        service
            .try_reserve_state_variables(1)
            .map_err(out_of_memory)?;
        service.add_state_variable(StateVariable::new(name, data_type, None, send_events));
    }

    Ok(())
}

fn load_action_list(root: &Element, service: &mut Service, report: &mut ParseReport) -> Result<()> {
    let list = non_empty_section(root, ACTION_LIST)?;

    for (index, node) in list.child_elements().enumerate() {
        if !node.has_name(ACTION) {
            report.skip(
                Section::ActionList,
                index,
                SkipReason::UnexpectedElement(node.name.clone()),
            );
            continue;
        }

        let Some(action_name) = node.child_content(ACTION_NAME) else {
            report.skip(Section::ActionList, index, SkipReason::MissingElement(ACTION_NAME));
            continue;
        };

        let argument_list = match node.child_by_name(ARGUMENT_LIST) {
            Some(list) if list.child_element_count() > 0 => list,
            _ => {
                report.skip(Section::ActionList, index, SkipReason::EmptyArgumentList);
                continue;
            }
        };

        service.try_reserve_actions(1).map_err(out_of_memory)?;
        let action = load_action(action_name, argument_list, report);

        if let Err(error) = service.add_action(action) {
            tracing::warn!("Failed to add action to service: {}", error);
            report.rejected.push(error);
        }
    }

    Ok(())
}

fn load_action(name: String, argument_list: &Element, report: &mut ParseReport) -> Action {
    let mut action = Action::new(name);
    let section = |action: &Action| Section::ArgumentList {
        action: action.name().to_string(),
    };

    for (index, node) in argument_list.child_elements().enumerate() {
        if !node.has_name(ARGUMENT) {
            report.skip(
                section(&action),
                index,
                SkipReason::UnexpectedElement(node.name.clone()),
            );
            continue;
        }

        let fields = (
            node.child_content(ARGUMENT_NAME),
            node.child_content(ARGUMENT_DIRECTION),
            node.child_content(ARGUMENT_RELATED_STATE),
        );
        let (name, direction, related) = match fields {
            (Some(name), Some(direction), Some(related)) => (name, direction, related),
            (None, _, _) => {
                report.skip(section(&action), index, SkipReason::MissingElement(ARGUMENT_NAME));
                continue;
            }
            (_, None, _) => {
                report.skip(section(&action), index, SkipReason::MissingElement(ARGUMENT_DIRECTION));
                continue;
            }
            (_, _, None) => {
                report.skip(
                    section(&action),
                    index,
                    SkipReason::MissingElement(ARGUMENT_RELATED_STATE),
                );
                continue;
            }
        };

        let parsed = ArgumentDirection::parse(&direction);
        if parsed == ArgumentDirection::Unknown {
            report.skip(section(&action), index, SkipReason::UnknownDirection(direction));
            continue;
        }

        action.add_argument(Argument::new(name, parsed, related));
    }

    action
}

/// Locate a required list section that must hold at least one element
fn non_empty_section<'a>(root: &'a Element, name: &str) -> Result<&'a Element> {
    let section = root.child_by_name(name).ok_or_else(|| missing(name))?;
    if section.child_element_count() == 0 {
        return Err(ScpdError::InvalidDocument(format!("<{}> is empty", name)));
    }
    Ok(section)
}

fn missing(name: &str) -> ScpdError {
    ScpdError::InvalidDocument(format!("missing <{}>", name))
}

fn out_of_memory(error: TypedefError) -> ScpdError {
    ScpdError::OutOfMemory(error.to_string())
}

/// Read the leading decimal integer of `text`, yielding 0 when there is none
fn leading_int(text: &str) -> i32 {
    let text = text.trim_start();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, text.strip_prefix('+').unwrap_or(text)),
    };

    digits
        .chars()
        .map_while(|c| c.to_digit(10))
        .fold(0i32, |acc, d| acc.saturating_mul(10).saturating_add(d as i32))
        * sign
}
