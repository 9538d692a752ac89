//! UPnP primitive data types.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TypedefError};
use crate::value::{Value, ValueKind};

/// Data types a state variable may declare in its `<dataType>` element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Ui1,
    Ui2,
    Ui4,
    Ui8,
    I1,
    I2,
    I4,
    I8,
    Int,
    R4,
    R8,
    Number,
    Float,
    Fixed14_4,
    Char,
    String,
    Date,
    DateTime,
    DateTimeTz,
    Time,
    TimeTz,
    Boolean,
    BinBase64,
    BinHex,
    Uri,
    Uuid,
}

impl DataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Ui1 => "ui1",
            DataType::Ui2 => "ui2",
            DataType::Ui4 => "ui4",
            DataType::Ui8 => "ui8",
            DataType::I1 => "i1",
            DataType::I2 => "i2",
            DataType::I4 => "i4",
            DataType::I8 => "i8",
            DataType::Int => "int",
            DataType::R4 => "r4",
            DataType::R8 => "r8",
            DataType::Number => "number",
            DataType::Float => "float",
            DataType::Fixed14_4 => "fixed.14.4",
            DataType::Char => "char",
            DataType::String => "string",
            DataType::Date => "date",
            DataType::DateTime => "dateTime",
            DataType::DateTimeTz => "dateTime.tz",
            DataType::Time => "time",
            DataType::TimeTz => "time.tz",
            DataType::Boolean => "boolean",
            DataType::BinBase64 => "bin.base64",
            DataType::BinHex => "bin.hex",
            DataType::Uri => "uri",
            DataType::Uuid => "uuid",
        }
    }

    /// The [`Value`] variant used to carry values of this type.
    ///
    /// Unsigned types are widened into the next signed kind so that every
    /// representable value fits; `ui8` shares `Long` and rejects values
    /// above `i64::MAX`.
    pub fn value_kind(&self) -> ValueKind {
        match self {
            DataType::I1 => ValueKind::Byte,
            DataType::Ui1 | DataType::I2 => ValueKind::Word,
            DataType::Ui2 | DataType::I4 | DataType::Int => ValueKind::Integer,
            DataType::Ui4 | DataType::Ui8 | DataType::I8 => ValueKind::Long,
            DataType::R4 => ValueKind::Float,
            DataType::R8 | DataType::Number | DataType::Float | DataType::Fixed14_4 => {
                ValueKind::Double
            }
            DataType::Boolean => ValueKind::Boolean,
            DataType::Char => ValueKind::Char,
            _ => ValueKind::Text,
        }
    }

    /// Convert the textual form of a value of this type into a [`Value`]
    pub fn parse_value(&self, text: &str) -> Result<Value> {
        let trimmed = text.trim();
        let invalid = || TypedefError::InvalidValue {
            data_type: self.to_string(),
            value: text.to_string(),
        };

        let value = match self {
            DataType::I1 => Value::Byte(trimmed.parse().map_err(|_| invalid())?),
            DataType::I2 => Value::Word(trimmed.parse().map_err(|_| invalid())?),
            DataType::I4 | DataType::Int => Value::Integer(trimmed.parse().map_err(|_| invalid())?),
            DataType::I8 => Value::Long(trimmed.parse().map_err(|_| invalid())?),
            DataType::Ui1 => Value::Word(trimmed.parse::<u8>().map_err(|_| invalid())?.into()),
            DataType::Ui2 => Value::Integer(trimmed.parse::<u16>().map_err(|_| invalid())?.into()),
            DataType::Ui4 => Value::Long(trimmed.parse::<u32>().map_err(|_| invalid())?.into()),
            DataType::Ui8 => {
                let wide = trimmed.parse::<u64>().map_err(|_| invalid())?;
                Value::Long(i64::try_from(wide).map_err(|_| invalid())?)
            }
            DataType::R4 => Value::Float(trimmed.parse().map_err(|_| invalid())?),
            DataType::R8 | DataType::Number | DataType::Float | DataType::Fixed14_4 => {
                Value::Double(trimmed.parse().map_err(|_| invalid())?)
            }
            DataType::Boolean => Value::Boolean(parse_bool(trimmed).ok_or_else(invalid)?),
            DataType::Char => {
                let mut chars = text.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Value::Char(c),
                    _ => return Err(invalid()),
                }
            }
            _ => Value::Text(Some(text.to_string())),
        };

        Ok(value)
    }
}

fn parse_bool(text: &str) -> Option<bool> {
    match text.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataType {
    type Err = TypedefError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let data_type = match s.trim() {
            "ui1" => DataType::Ui1,
            "ui2" => DataType::Ui2,
            "ui4" => DataType::Ui4,
            "ui8" => DataType::Ui8,
            "i1" => DataType::I1,
            "i2" => DataType::I2,
            "i4" => DataType::I4,
            "i8" => DataType::I8,
            "int" => DataType::Int,
            "r4" => DataType::R4,
            "r8" => DataType::R8,
            "number" => DataType::Number,
            "float" => DataType::Float,
            "fixed.14.4" => DataType::Fixed14_4,
            "char" => DataType::Char,
            "string" => DataType::String,
            "date" => DataType::Date,
            "dateTime" => DataType::DateTime,
            "dateTime.tz" => DataType::DateTimeTz,
            "time" => DataType::Time,
            "time.tz" => DataType::TimeTz,
            "boolean" => DataType::Boolean,
            "bin.base64" => DataType::BinBase64,
            "bin.hex" => DataType::BinHex,
            "uri" => DataType::Uri,
            "uuid" => DataType::Uuid,
            other => return Err(TypedefError::UnknownDataType(other.to_string())),
        };
        Ok(data_type)
    }
}
