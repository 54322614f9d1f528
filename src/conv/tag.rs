//! Target type tags
//!
//! The vocabulary is closed. Adding a target type means adding a variant
//! here and an arm in the dispatcher; the compiler flags the missing arm.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A target type for coercion.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Url,
    Uuid,
    Color,
    Email,
    Phone,
    Array,
    Object,
    Domain,
    Base64,
    String,
    Number,
    Double,
    Boolean,
    Datetime,
    Latitude,
    Longitude,
    Record,
    /// Any other tag. Converts by identity.
    Unknown(String),
}

impl TypeTag {
    /// Every recognized tag, in declaration order
    pub const KNOWN: [TypeTag; 17] = [
        TypeTag::Url,
        TypeTag::Uuid,
        TypeTag::Color,
        TypeTag::Email,
        TypeTag::Phone,
        TypeTag::Array,
        TypeTag::Object,
        TypeTag::Domain,
        TypeTag::Base64,
        TypeTag::String,
        TypeTag::Number,
        TypeTag::Double,
        TypeTag::Boolean,
        TypeTag::Datetime,
        TypeTag::Latitude,
        TypeTag::Longitude,
        TypeTag::Record,
    ];

    /// Parses a tag. Matching is exact and case-sensitive.
    pub fn parse(s: &str) -> Self {
        match s {
            "url" => TypeTag::Url,
            "uuid" => TypeTag::Uuid,
            "color" => TypeTag::Color,
            "email" => TypeTag::Email,
            "phone" => TypeTag::Phone,
            "array" => TypeTag::Array,
            "object" => TypeTag::Object,
            "domain" => TypeTag::Domain,
            "base64" => TypeTag::Base64,
            "string" => TypeTag::String,
            "number" => TypeTag::Number,
            "double" => TypeTag::Double,
            "boolean" => TypeTag::Boolean,
            "datetime" => TypeTag::Datetime,
            "latitude" => TypeTag::Latitude,
            "longitude" => TypeTag::Longitude,
            "record" => TypeTag::Record,
            other => TypeTag::Unknown(other.to_string()),
        }
    }

    /// Returns the tag name
    pub fn as_str(&self) -> &str {
        match self {
            TypeTag::Url => "url",
            TypeTag::Uuid => "uuid",
            TypeTag::Color => "color",
            TypeTag::Email => "email",
            TypeTag::Phone => "phone",
            TypeTag::Array => "array",
            TypeTag::Object => "object",
            TypeTag::Domain => "domain",
            TypeTag::Base64 => "base64",
            TypeTag::String => "string",
            TypeTag::Number => "number",
            TypeTag::Double => "double",
            TypeTag::Boolean => "boolean",
            TypeTag::Datetime => "datetime",
            TypeTag::Latitude => "latitude",
            TypeTag::Longitude => "longitude",
            TypeTag::Record => "record",
            TypeTag::Unknown(name) => name,
        }
    }

    /// Returns false for the identity catch-all
    pub fn is_known(&self) -> bool {
        !matches!(self, TypeTag::Unknown(_))
    }
}

impl FromStr for TypeTag {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(TypeTag::parse(s))
    }
}

impl From<&str> for TypeTag {
    fn from(s: &str) -> Self {
        TypeTag::parse(s)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
