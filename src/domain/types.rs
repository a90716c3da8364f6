//! Strongly-typed value objects used by domain entities.
//!
//! Identifiers assigned by the database, the enumerations the database uses
//! for series and title kinds, and the artwork host URL are wrapped here so
//! that their constraints are enforced at the boundary.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;
use validator::ValidateUrl;

use crate::domain::error::{ModelError, ModelResult};
use crate::domain::value::Value;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// An identifier was zero or negative.
    #[error("{0} must be greater than zero")]
    NonPositiveId(&'static str),
    /// An identifier did not fit the identifier range.
    #[error("{0} is out of range")]
    IdOutOfRange(&'static str),
    /// A string was empty or whitespace-only after trimming.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
    /// URL validation failed.
    #[error("{0} must be a valid URL")]
    InvalidUrl(&'static str),
    /// Catch-all for custom validation failures.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

fn trim_and_require_non_empty<S: Into<String>>(
    value: S,
    field: &'static str,
) -> Result<String, TypeConstraintError> {
    let trimmed = value.into().trim().to_string();
    if trimmed.is_empty() {
        Err(TypeConstraintError::EmptyString(field))
    } else {
        Ok(trimmed)
    }
}

/// Macro to generate lightweight newtypes for database identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId($field))
                }
            }

            /// Coerces a decoded value (number or numeric text) into an identifier.
            pub fn from_value<V: Into<Value>>(value: V) -> ModelResult<Self> {
                let raw = value.into().to_i64()?;
                let raw = i32::try_from(raw)
                    .map_err(|_| TypeConstraintError::IdOutOfRange($field))?;
                Ok(Self::new(raw)?)
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<i32> for $name {
            fn eq(&self, other: &i32) -> bool {
                self.0 == *other
            }
        }

        impl PartialEq<$name> for i32 {
            fn eq(&self, other: &$name) -> bool {
                *self == other.0
            }
        }
    };
}

id_newtype!(AnimeId, "Unique identifier for an anime (`aid`).", "anime_id");
id_newtype!(EpisodeId, "Unique identifier for an episode (`eid`).", "episode_id");
id_newtype!(
    CategoryId,
    "Unique identifier for a category.",
    "category_id"
);
id_newtype!(TagId, "Unique identifier for a tag.", "tag_id");

/// Base URL that artwork paths are resolved against.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct ArtworkHost(String);

impl ArtworkHost {
    /// Base path used by the database's public image mirror.
    pub const DEFAULT: &'static str = "http://img7.anidb.net/pics/anime/";

    /// Constructs a trimmed URL and validates its format.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = trim_and_require_non_empty(value, "artwork host")?;
        if !trimmed.as_str().validate_url() {
            return Err(TypeConstraintError::InvalidUrl("artwork host"));
        }
        Ok(Self(trimmed))
    }

    /// Formats `path` into a full artwork URL.
    ///
    /// A missing path still yields a URL, with an empty final segment.
    pub fn resolve(&self, path: Option<&str>) -> String {
        let base = self.0.trim_end_matches('/');
        let path = path.unwrap_or_default().trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// Borrow the URL as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ArtworkHost {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl Display for ArtworkHost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ArtworkHost {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ArtworkHost {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ArtworkHost> for String {
    fn from(value: ArtworkHost) -> Self {
        value.0
    }
}

/// Macro for string-backed enumerations as they appear in database records.
macro_rules! labelled_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:expr, {
            $($variant:ident => $label:expr $(, $alias:expr)*;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
        #[serde(try_from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            /// String representation used by the database.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                let value = value.trim();
                $(
                    if value.eq_ignore_ascii_case($label)
                        $(|| value.eq_ignore_ascii_case($alias))*
                    {
                        return Ok(Self::$variant);
                    }
                )+
                Err(TypeConstraintError::InvalidValue(format!(
                    "{}: {value}",
                    $field
                )))
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::try_from(value.as_str())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }
    };
}

labelled_enum!(
    /// Kind of series an anime belongs to.
    AnimeType, "anime type", {
        TvSeries => "TV Series";
        TvSpecial => "TV Special";
        Ova => "OVA";
        Movie => "Movie";
        MusicVideo => "Music Video";
        Web => "Web";
        Other => "Other";
        Unknown => "unknown";
    }
);

labelled_enum!(
    /// Kind of name a [`crate::domain::title::Title`] represents.
    TitleType, "title type", {
        Main => "main";
        Official => "official";
        Short => "short";
        Synonym => "synonym", "syn";
        Card => "card";
        Kana => "kana";
    }
);

/// One of the three fixed rating buckets kept per anime.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RatingKind {
    Permanent,
    Temporary,
    Review,
}

impl RatingKind {
    /// All kinds, in the order they are reported.
    pub const ALL: [RatingKind; 3] = [Self::Permanent, Self::Temporary, Self::Review];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Permanent => "permanent",
            Self::Temporary => "temporary",
            Self::Review => "review",
        }
    }
}

impl Display for RatingKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for RatingKind {
    type Error = ModelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "permanent" => Ok(Self::Permanent),
            "temporary" => Ok(Self::Temporary),
            "review" => Ok(Self::Review),
            _ => Err(ModelError::InvalidArgument(
                "Unknown kind of rating".to_string(),
            )),
        }
    }
}
