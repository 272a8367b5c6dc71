//! Attribute value object
//!
//! Capability attributes are typed. Requirements filter on them, and record
//! equality compares them, so every variant must be a proper equivalence
//! (including doubles, which are compared by bit pattern).

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::ser::{Serialize, Serializer};

use super::Version;
use crate::error::{CapReqError, CapReqResult};

/// A typed attribute value
#[derive(Debug, Clone)]
pub enum Attr {
    String(String),
    Long(i64),
    Double(f64),
    Version(Version),
    List(Vec<Attr>),
}

impl Attr {
    /// Build a value from a declared type name and its textual form
    ///
    /// Accepts `String`, `Long`, `Double`, `Version` and `List<T>` of those
    /// (a bare `List` means `List<String>`). List elements are
    /// comma-separated and trimmed.
    pub fn typed(type_name: &str, raw: &str) -> CapReqResult<Self> {
        let type_name = type_name.trim();
        if let Some(inner) = list_element_type(type_name) {
            if raw.trim().is_empty() {
                return Ok(Attr::List(Vec::new()));
            }
            let items = raw
                .split(',')
                .map(|item| Self::scalar(inner, item.trim()))
                .collect::<CapReqResult<Vec<_>>>()?;
            return Ok(Attr::List(items));
        }
        Self::scalar(type_name, raw)
    }

    fn scalar(type_name: &str, raw: &str) -> CapReqResult<Self> {
        if type_name.eq_ignore_ascii_case("string") {
            Ok(Attr::String(raw.to_string()))
        } else if type_name.eq_ignore_ascii_case("long") {
            raw.trim().parse().map(Attr::Long).map_err(|_| {
                CapReqError::invalid_argument(format!("'{}' is not a Long", raw))
            })
        } else if type_name.eq_ignore_ascii_case("double") {
            raw.trim().parse().map(Attr::Double).map_err(|_| {
                CapReqError::invalid_argument(format!("'{}' is not a Double", raw))
            })
        } else if type_name.eq_ignore_ascii_case("version") {
            Version::parse(raw).map(Attr::Version)
        } else {
            Err(CapReqError::invalid_argument(format!(
                "unknown attribute type '{}'",
                type_name
            )))
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Attr::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_version(&self) -> Option<&Version> {
        match self {
            Attr::Version(v) => Some(v),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Attr::String(_) => "String",
            Attr::Long(_) => "Long",
            Attr::Double(_) => "Double",
            Attr::Version(_) => "Version",
            Attr::List(_) => "List",
        }
    }
}

fn list_element_type(type_name: &str) -> Option<&str> {
    if type_name.eq_ignore_ascii_case("list") {
        return Some("String");
    }
    let rest = type_name
        .strip_prefix("List<")
        .or_else(|| type_name.strip_prefix("list<"))?;
    rest.strip_suffix('>').map(str::trim)
}

impl PartialEq for Attr {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Attr::String(a), Attr::String(b)) => a == b,
            (Attr::Long(a), Attr::Long(b)) => a == b,
            (Attr::Double(a), Attr::Double(b)) => a.to_bits() == b.to_bits(),
            (Attr::Version(a), Attr::Version(b)) => a == b,
            (Attr::List(a), Attr::List(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Attr {}

impl Hash for Attr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Attr::String(s) => s.hash(state),
            Attr::Long(n) => n.hash(state),
            Attr::Double(d) => d.to_bits().hash(state),
            Attr::Version(v) => v.hash(state),
            Attr::List(items) => items.hash(state),
        }
    }
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attr::String(s) => f.write_str(s),
            Attr::Long(n) => write!(f, "{}", n),
            // Keeps the decimal point on whole values (`1.0`, not `1`)
            Attr::Double(d) => write!(f, "{:?}", d),
            Attr::Version(v) => write!(f, "{}", v),
            Attr::List(items) => {
                f.write_str("[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
        }
    }
}

impl Serialize for Attr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Attr::String(s) => serializer.serialize_str(s),
            Attr::Long(n) => serializer.serialize_i64(*n),
            Attr::Double(d) => serializer.serialize_f64(*d),
            Attr::Version(v) => serializer.collect_str(v),
            Attr::List(items) => serializer.collect_seq(items),
        }
    }
}

impl From<&str> for Attr {
    fn from(s: &str) -> Self {
        Attr::String(s.to_string())
    }
}

impl From<String> for Attr {
    fn from(s: String) -> Self {
        Attr::String(s)
    }
}

impl From<&Attr> for Attr {
    fn from(attr: &Attr) -> Self {
        attr.clone()
    }
}

impl From<i64> for Attr {
    fn from(n: i64) -> Self {
        Attr::Long(n)
    }
}

impl From<f64> for Attr {
    fn from(d: f64) -> Self {
        Attr::Double(d)
    }
}

impl From<Version> for Attr {
    fn from(v: Version) -> Self {
        Attr::Version(v)
    }
}

impl From<Vec<Attr>> for Attr {
    fn from(items: Vec<Attr>) -> Self {
        Attr::List(items)
    }
}
