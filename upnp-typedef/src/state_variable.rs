//! Service state variables.

use crate::data_type::DataType;
use crate::error::{Result, TypedefError};
use crate::value::Value;

/// A named, typed piece of service state
#[derive(Debug, Clone, PartialEq)]
pub struct StateVariable {
    name: String,
    data_type: String,
    evented: bool,
    default_value: Option<Value>,
}

impl StateVariable {
    /// Build a state variable from its description fields.
    ///
    /// `send_events` is the text of the `sendEvents` attribute: `yes`
    /// (in any letter case) marks the variable as evented, anything else
    /// does not. The flag is fixed for the lifetime of the variable.
    pub fn new(
        name: impl Into<String>,
        data_type: impl Into<String>,
        default_value: Option<Value>,
        send_events: &str,
    ) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            evented: send_events.trim().eq_ignore_ascii_case("yes"),
            default_value,
        }
    }

    pub fn with_default(mut self, value: Value) -> Self {
        self.default_value = Some(value);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The data-type name exactly as declared
    pub fn data_type_name(&self) -> &str {
        &self.data_type
    }

    /// The declared data type, or `None` if the name is not a UPnP primitive type
    pub fn data_type(&self) -> Option<DataType> {
        self.data_type.parse().ok()
    }

    pub fn is_evented(&self) -> bool {
        self.evented
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    /// Convert text, such as a SOAP argument or an event property, into a
    /// value of this variable's data type
    pub fn parse_value(&self, text: &str) -> Result<Value> {
        let data_type = self
            .data_type()
            .ok_or_else(|| TypedefError::UnknownDataType(self.data_type.clone()))?;
        data_type.parse_value(text)
    }
}
