//! Primitive value types for datatype properties.

use serde::Serialize;
use std::fmt;

/// XSD primitive a leaf value maps to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Primitive {
    Boolean,
    #[default]
    String,
    Integer,
    Double,
}

impl Primitive {
    /// Map an SDFormat type name, case-insensitively.
    ///
    /// Structured types (`vector3`, `pose`, `color`, `time`, ...) have no
    /// XSD counterpart and are kept as strings, as is anything unknown.
    #[must_use]
    pub fn from_sdf_type(sdf_type: &str) -> Self {
        match sdf_type.trim().to_ascii_lowercase().as_str() {
            "bool" | "boolean" => Self::Boolean,
            "int" | "integer" | "unsigned int" => Self::Integer,
            "double" | "float" => Self::Double,
            _ => Self::String,
        }
    }

    /// Prefixed XSD name, as written in Turtle.
    #[must_use]
    pub const fn xsd(self) -> &'static str {
        match self {
            Self::Boolean => "xsd:boolean",
            Self::String => "xsd:string",
            Self::Integer => "xsd:integer",
            Self::Double => "xsd:double",
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.xsd())
    }
}
