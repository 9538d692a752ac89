//! Action arguments.

use std::fmt;

/// Direction of an action argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgumentDirection {
    In,
    Out,
    Unknown,
}

impl ArgumentDirection {
    /// Parse the text of a `<direction>` element.
    ///
    /// Matches `in` and `out` case-insensitively; anything else, including
    /// empty text, yields [`ArgumentDirection::Unknown`].
    pub fn parse(text: &str) -> Self {
        if text.eq_ignore_ascii_case("in") {
            Self::In
        } else if text.eq_ignore_ascii_case("out") {
            Self::Out
        } else {
            Self::Unknown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
            Self::Unknown => "",
        }
    }
}

impl fmt::Display for ArgumentDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One formal parameter of an action.
///
/// The related state variable is held by name and resolved against the
/// owning service on demand (see [`crate::Service::related_state_variable`]).
/// Construction does not reject [`ArgumentDirection::Unknown`]; callers
/// that require a concrete direction check it themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    name: String,
    direction: ArgumentDirection,
    related_state_variable: String,
}

impl Argument {
    pub fn new(
        name: impl Into<String>,
        direction: ArgumentDirection,
        related_state_variable: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            direction,
            related_state_variable: related_state_variable.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn direction(&self) -> ArgumentDirection {
        self.direction
    }

    pub fn related_state_variable(&self) -> &str {
        &self.related_state_variable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("in", ArgumentDirection::In)]
    #[case("IN", ArgumentDirection::In)]
    #[case("Out", ArgumentDirection::Out)]
    #[case("INOUT", ArgumentDirection::Unknown)]
    #[case("", ArgumentDirection::Unknown)]
    #[case(" in", ArgumentDirection::Unknown)]
    fn test_direction_parse(#[case] text: &str, #[case] expected: ArgumentDirection) {
        assert_eq!(ArgumentDirection::parse(text), expected);
    }

    #[test]
    fn test_argument_accepts_unknown_direction() {
        let arg = Argument::new("Mode", ArgumentDirection::Unknown, "A_ARG_TYPE_Mode");
        assert_eq!(arg.direction(), ArgumentDirection::Unknown);
        assert_eq!(arg.related_state_variable(), "A_ARG_TYPE_Mode");
    }
}
