//! [`Service`] → SCPD document.
//!
//! The document is rendered into a growable buffer. Callers that hand in a
//! fixed-size destination use [`write_into`], which checks the rendered
//! length against the destination capacity before copying anything.
//!
//! Every name is checked before the first byte is written. Text that XML 1.0
//! cannot carry, such as most control characters, fails the whole document
//! with [`ScpdError::InvalidText`].

use std::fmt::{self, Write};

use quick_xml::escape::escape;
use upnp_typedef::{Action, ArgumentDirection, Service, StateVariable};

use crate::error::{Result, ScpdError};

const PROLOG: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;
const SCPD_OPEN: &str = r#"<scpd xmlns="urn:schemas-upnp-org:service-1-0">"#;
const SPEC_VERSION: &str = "<specVersion><major>1</major><minor>0</minor></specVersion>";

/// Render `service` as a complete SCPD document.
///
/// Names are written exactly as stored. The parser trims element text, so
/// leading and trailing whitespace in a name does not survive a parse of
/// the output.
pub fn to_xml(service: &Service) -> Result<String> {
    let mut xml = String::new();
    write(service, &mut xml)?;
    Ok(xml)
}

/// Render `service` into `buf`, returning the number of bytes written.
///
/// Nothing is written when the document does not fit; the error carries
/// the required length so the caller can retry with a larger buffer.
pub fn write_into(service: &Service, buf: &mut [u8]) -> Result<usize> {
    let xml = to_xml(service)?;
    let required = xml.len();
    if required > buf.len() {
        return Err(ScpdError::BufferTooSmall {
            required,
            capacity: buf.len(),
        });
    }

    buf[..required].copy_from_slice(xml.as_bytes());
    Ok(required)
}

/// Stream the SCPD document for `service` into any [`fmt::Write`] sink.
///
/// `out` is left untouched when a name cannot be represented in XML.
pub fn write<W: Write>(service: &Service, out: &mut W) -> Result<()> {
    check_service(service)?;
    render(service, out)?;
    Ok(())
}

fn render<W: Write>(service: &Service, out: &mut W) -> fmt::Result {
    out.write_str(PROLOG)?;
    out.write_str(SCPD_OPEN)?;
    out.write_str(SPEC_VERSION)?;

    out.write_str("<actionList>")?;
    for action in service.actions() {
        write_action(action, out)?;
    }
    out.write_str("</actionList>")?;

    out.write_str("<serviceStateTable>")?;
    for state in service.state_variables() {
        write_state_variable(state, out)?;
    }
    out.write_str("</serviceStateTable>")?;

    out.write_str("</scpd>")
}

fn check_service(service: &Service) -> Result<()> {
    for action in service.actions() {
        check_text("name", action.name())?;
        for argument in action.arguments() {
            if argument.direction() == ArgumentDirection::Unknown {
                continue;
            }
            check_text("name", argument.name())?;
            check_text("relatedStateVariable", argument.related_state_variable())?;
        }
    }

    for state in service.state_variables() {
        check_text("name", state.name())?;
        check_text("dataType", state.data_type_name())?;
    }

    Ok(())
}

fn check_text(element: &'static str, text: &str) -> Result<()> {
    if text.chars().all(is_xml_char) {
        Ok(())
    } else {
        Err(ScpdError::InvalidText {
            element,
            text: text.to_string(),
        })
    }
}

/// The `Char` production of XML 1.0
fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
    )
}

fn write_action<W: Write>(action: &Action, out: &mut W) -> fmt::Result {
    out.write_str("<action>")?;
    write_element(out, "name", action.name())?;

    out.write_str("<argumentList>")?;
    for argument in action.arguments() {
        // An argument without a concrete direction cannot be expressed in SCPD.
        if argument.direction() == ArgumentDirection::Unknown {
            tracing::debug!(
                "Not serializing argument {} of {}: unknown direction",
                argument.name(),
                action.name()
            );
            continue;
        }

        out.write_str("<argument>")?;
        write_element(out, "name", argument.name())?;
        write_element(out, "direction", argument.direction().as_str())?;
        write_element(out, "relatedStateVariable", argument.related_state_variable())?;
        out.write_str("</argument>")?;
    }
    out.write_str("</argumentList>")?;

    out.write_str("</action>")
}

fn write_state_variable<W: Write>(state: &StateVariable, out: &mut W) -> fmt::Result {
    let send_events = if state.is_evented() { "yes" } else { "no" };
    write!(out, r#"<stateVariable sendEvents="{}">"#, send_events)?;
    write_element(out, "name", state.name())?;
    write_element(out, "dataType", state.data_type_name())?;
    out.write_str("</stateVariable>")
}

fn write_element<W: Write>(out: &mut W, tag: &str, text: &str) -> fmt::Result {
    write!(out, "<{tag}>{}</{tag}>", escape(text), tag = tag)
}
