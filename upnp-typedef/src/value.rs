//! Typed scalar carried by state variables.
//!
//! A [`Value`] holds exactly one of the scalar kinds used by UPnP state
//! variables. Only the text variant owns an allocation, and every setter
//! releases it before storing the replacement, so a value never keeps a
//! stale payload around after its kind changes.

use std::fmt;

/// Discriminant of a [`Value`] without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Undefined,
    Byte,
    Word,
    Integer,
    Long,
    Float,
    Double,
    Boolean,
    Char,
    Text,
}

/// A tagged scalar value.
///
/// `Text(None)` is an explicit "no text" state and is distinct from
/// `Text(Some(String::new()))`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Undefined,
    Byte(i8),
    Word(i16),
    Integer(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Boolean(bool),
    Char(char),
    Text(Option<String>),
}

impl Value {
    /// Create an undefined value
    pub fn new() -> Self {
        Self::Undefined
    }

    pub fn set_byte(&mut self, value: i8) {
        self.dispose();
        *self = Self::Byte(value);
    }

    pub fn set_word(&mut self, value: i16) {
        self.dispose();
        *self = Self::Word(value);
    }

    pub fn set_integer(&mut self, value: i32) {
        self.dispose();
        *self = Self::Integer(value);
    }

    pub fn set_long(&mut self, value: i64) {
        self.dispose();
        *self = Self::Long(value);
    }

    pub fn set_float(&mut self, value: f32) {
        self.dispose();
        *self = Self::Float(value);
    }

    pub fn set_double(&mut self, value: f64) {
        self.dispose();
        *self = Self::Double(value);
    }

    pub fn set_bool(&mut self, value: bool) {
        self.dispose();
        *self = Self::Boolean(value);
    }

    pub fn set_char(&mut self, value: char) {
        self.dispose();
        *self = Self::Char(value);
    }

    /// Store text, or the explicit "no text" state when `value` is `None`.
    ///
    /// The text is always copied into storage owned by this value.
    pub fn set_text(&mut self, value: Option<&str>) {
        self.dispose();
        *self = Self::Text(value.map(str::to_owned));
    }

    /// Replace this value with a deep copy of `src`.
    ///
    /// Text is duplicated, so disposing either value afterwards never
    /// affects the other.
    pub fn copy_from(&mut self, src: &Value) {
        self.dispose();
        *self = src.clone();
    }

    /// Release any owned text and reset the kind to [`ValueKind::Undefined`]
    pub fn dispose(&mut self) {
        let previous = std::mem::take(self);
        drop(previous);
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Undefined => ValueKind::Undefined,
            Self::Byte(_) => ValueKind::Byte,
            Self::Word(_) => ValueKind::Word,
            Self::Integer(_) => ValueKind::Integer,
            Self::Long(_) => ValueKind::Long,
            Self::Float(_) => ValueKind::Float,
            Self::Double(_) => ValueKind::Double,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Char(_) => ValueKind::Char,
            Self::Text(_) => ValueKind::Text,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Widen any integer kind to `i64`
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::Byte(v) => Some(v.into()),
            Self::Word(v) => Some(v.into()),
            Self::Integer(v) => Some(v.into()),
            Self::Long(v) => Some(v),
            _ => None,
        }
    }

    /// Widen any floating point kind to `f64`
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::Float(v) => Some(v.into()),
            Self::Double(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Self::Boolean(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_char(&self) -> Option<char> {
        match *self {
            Self::Char(v) => Some(v),
            _ => None,
        }
    }

    /// Borrow the held text. Returns `None` for non-text kinds and for
    /// the explicit "no text" state.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => text.as_deref(),
            _ => None,
        }
    }
}

/// Renders the value the way it appears in a UPnP XML body.
///
/// Booleans are written as `1`/`0`; undefined values and the "no text"
/// state render as an empty string.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined | Self::Text(None) => Ok(()),
            Self::Byte(v) => write!(f, "{}", v),
            Self::Word(v) => write!(f, "{}", v),
            Self::Integer(v) => write!(f, "{}", v),
            Self::Long(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::Double(v) => write!(f, "{}", v),
            Self::Boolean(v) => f.write_str(if *v { "1" } else { "0" }),
            Self::Char(v) => write!(f, "{}", v),
            Self::Text(Some(text)) => f.write_str(text),
        }
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Self::Byte(value)
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Self::Word(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Long(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(Some(value.to_owned()))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(Some(value))
    }
}
