//! Loosely-typed values handed over by a response parser.
//!
//! Decoders rarely know the final type of a field when they read it, so the
//! validating mutators on the entities accept anything convertible into a
//! [`Value`] and perform the coercion (or the kind check) themselves.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::category::Category;
use crate::domain::episode::Episode;
use crate::domain::error::{ModelError, ModelResult};
use crate::domain::tag::Tag;
use crate::domain::title::Title;

/// A single decoded field value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
    Title(Box<Title>),
    Category(Box<Category>),
    Episode(Box<Episode>),
    Tag(Box<Tag>),
}

impl Value {
    /// Short name of the variant, used in error messages.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::Date(_) => "date",
            Self::Title(_) => "Title",
            Self::Category(_) => "Category",
            Self::Episode(_) => "Episode",
            Self::Tag(_) => "Tag",
        }
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Coerces the value to a float.
    ///
    /// Numbers and booleans convert directly, text must parse as a number
    /// after trimming. Anything else fails with [`ModelError::TypeConversion`].
    pub fn to_f64(&self) -> ModelResult<f64> {
        match self {
            Self::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
            Self::Int(i) => Ok(*i as f64),
            Self::Float(f) => Ok(*f),
            Self::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| self.conversion_error("float")),
            _ => Err(self.conversion_error("float")),
        }
    }

    /// Coerces the value to an integer.
    ///
    /// Floats are truncated toward zero and must be finite; text must hold an
    /// integral number.
    pub fn to_i64(&self) -> ModelResult<i64> {
        match self {
            Self::Bool(b) => Ok(i64::from(*b)),
            Self::Int(i) => Ok(*i),
            Self::Float(f) => {
                let truncated = f.trunc();
                if truncated.is_finite()
                    && truncated >= i64::MIN as f64
                    && truncated < i64::MAX as f64
                {
                    Ok(truncated as i64)
                } else {
                    Err(self.conversion_error("integer"))
                }
            }
            Self::Text(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| self.conversion_error("integer")),
            _ => Err(self.conversion_error("integer")),
        }
    }

    fn conversion_error(&self, target: &'static str) -> ModelError {
        let value = match self {
            Self::Null => "null".to_string(),
            Self::Bool(b) => b.to_string(),
            Self::Int(i) => i.to_string(),
            Self::Float(f) => f.to_string(),
            Self::Text(s) => format!("{s:?}"),
            Self::Date(d) => d.to_string(),
            other => other.kind().to_string(),
        };
        ModelError::TypeConversion { target, value }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<Title> for Value {
    fn from(value: Title) -> Self {
        Self::Title(Box::new(value))
    }
}

impl From<Category> for Value {
    fn from(value: Category) -> Self {
        Self::Category(Box::new(value))
    }
}

impl From<Episode> for Value {
    fn from(value: Episode) -> Self {
        Self::Episode(Box::new(value))
    }
}

impl From<Tag> for Value {
    fn from(value: Tag) -> Self {
        Self::Tag(Box::new(value))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
