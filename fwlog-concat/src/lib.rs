//! # fwlog-concat
//! Joins two values with a space, logging every step through an fwlog handle.
//!
//! ```rust
//! use fwlog::logger_config;
//! use fwlog_concat::add_two_strings;
//!
//! let logger = logger_config().build().root();
//! assert_eq!(add_two_strings(&logger, "yo", "hi").as_deref(), Some("yo hi"));
//! assert_eq!(add_two_strings(&logger, 1, 2), None);
//! ```

use std::fmt;

use fwlog::{LoggerHandle, debug, error, info};

/// A value of any of the types `add_two_strings` accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    None,
}

impl Operand {
    pub fn is_str(&self) -> bool {
        matches!(self, Operand::Str(_))
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Str(s) => f.write_str(s),
            Operand::Int(i) => write!(f, "{i}"),
            // integral floats keep their fractional part, `2.0` not `2`
            Operand::Float(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{x:.1}"),
            Operand::Float(x) => write!(f, "{x}"),
            Operand::Bool(true) => f.write_str("True"),
            Operand::Bool(false) => f.write_str("False"),
            Operand::None => f.write_str("None"),
        }
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Operand::Str(value.into())
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Operand::Str(value)
    }
}

impl From<&String> for Operand {
    fn from(value: &String) -> Self {
        Operand::Str(value.clone())
    }
}

impl From<char> for Operand {
    fn from(value: char) -> Self {
        Operand::Str(value.into())
    }
}

impl From<bool> for Operand {
    fn from(value: bool) -> Self {
        Operand::Bool(value)
    }
}

impl From<f32> for Operand {
    fn from(value: f32) -> Self {
        Operand::Float(value.into())
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Float(value)
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Operand {
            fn from(value: $ty) -> Self {
                Operand::Int(value.into())
            }
        })*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl<T: Into<Operand>> From<Option<T>> for Operand {
    fn from(value: Option<T>) -> Self {
        value.map_or(Operand::None, Into::into)
    }
}

/// Joins `a` and `b` with a single space.
///
/// The join goes ahead as soon as *either* operand is a string; the other one
/// is joined through its text form. With no string operand an error record is
/// logged and `None` comes back.
pub fn add_two_strings(
    logger: &LoggerHandle,
    a: impl Into<Operand>,
    b: impl Into<Operand>,
) -> Option<String> {
    let (a, b) = (a.into(), b.into());
    debug!(logger, "first value: {a}");
    debug!(logger, "second value: {b}");

    debug!(logger, "checking that we have strings...");
    // TODO: confirm with the owners whether both operands should be required to be strings
    if !(a.is_str() || b.is_str()) {
        error!(logger, "cannot build a phrase from '{a}' and '{b}': no string among them");
        return None;
    }
    debug!(logger, "'{a}' and '{b}' accepted as strings");

    let joined = format!("{a} {b}");
    info!(logger, "add_two_strings returned '{joined}'");
    Some(joined)
}
