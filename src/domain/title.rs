use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::capabilities::Typed;
use crate::domain::error::{ModelError, ModelResult};
use crate::domain::types::{TitleType, TypeConstraintError};

/// A single localized name of an anime or episode.
///
/// Titles carry no identifier of their own; they are values attached to an
/// entity through [`crate::domain::capabilities::Titled::add_title`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Title {
    language: Option<String>,
    text: Option<String>,
    name_type: Option<TitleType>,
    exact: bool,
}

impl Title {
    /// Creates a title in `language` with no text yet.
    pub fn new<S: Into<String>>(language: S) -> Self {
        Self {
            language: Some(language.into()),
            text: None,
            name_type: None,
            exact: false,
        }
    }

    /// Creates a title with both language and text set.
    pub fn with_text<L: Into<String>, T: Into<String>>(language: L, text: T) -> Self {
        let mut title = Self::new(language);
        title.text = Some(text.into());
        title
    }

    /// Builder-style setter for the name type.
    pub fn of_type(mut self, name_type: TitleType) -> Self {
        self.name_type = Some(name_type);
        self
    }

    /// Builder-style setter marking the title as an exact search match.
    pub fn exact_match(mut self) -> Self {
        self.exact = true;
        self
    }

    /// Language code of the title (e.g. `en`, `ja`, `x-jat`).
    ///
    /// Returned as set; blank codes are reported as absent.
    pub fn language(&self) -> Option<&str> {
        self.language
            .as_deref()
            .filter(|lang| !lang.trim().is_empty())
    }

    pub fn set_language(&mut self, language: Option<String>) {
        self.language = language;
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn set_text(&mut self, text: Option<String>) {
        self.text = text;
    }

    /// Whether this title matched a search query exactly.
    pub fn is_exact(&self) -> bool {
        self.exact
    }

    pub fn set_exact(&mut self, exact: bool) {
        self.exact = exact;
    }
}

impl Typed for Title {
    type Kind = TitleType;

    fn kind(&self) -> Option<TitleType> {
        self.name_type
    }

    fn set_kind(&mut self, kind: Option<TitleType>) {
        self.name_type = kind;
    }
}

/// Titles of an entity grouped by language, in insertion order per language.
///
/// Deserialization applies the same rules as [`Titles::add`]: every title
/// must have text and sit under its own language, and no language may map
/// to an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, Vec<Title>>", into = "BTreeMap<String, Vec<Title>>")]
pub struct Titles(BTreeMap<String, Vec<Title>>);

impl Titles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `title` under its language.
    ///
    /// A title without a language is a caller bug and fails with
    /// [`ModelError::InvariantViolation`]. A title without text carries no
    /// information and is dropped without error.
    pub fn add(&mut self, title: Title) -> ModelResult<()> {
        let Some(language) = title.language().map(str::to_string) else {
            return Err(ModelError::InvariantViolation(
                "title language must be set".to_string(),
            ));
        };
        if title.text.is_none() {
            log::debug!("Discarding title without text for language {language}");
            return Ok(());
        }
        self.0.entry(language).or_default().push(title);
        Ok(())
    }

    /// Titles recorded for `language`, oldest first. The key is the
    /// language exactly as set on the title.
    pub fn get(&self, language: &str) -> Option<&[Title]> {
        self.0.get(language).map(Vec::as_slice)
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Title])> {
        self.0
            .iter()
            .map(|(lang, titles)| (lang.as_str(), titles.as_slice()))
    }

    /// First title marked as the main name, in any language.
    pub fn main(&self) -> Option<&Title> {
        self.0
            .values()
            .flatten()
            .find(|title| title.kind() == Some(TitleType::Main))
    }

    /// Total number of titles across all languages.
    pub fn len(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<BTreeMap<String, Vec<Title>>> for Titles {
    type Error = TypeConstraintError;

    fn try_from(map: BTreeMap<String, Vec<Title>>) -> Result<Self, Self::Error> {
        for (language, titles) in &map {
            if titles.is_empty() {
                return Err(TypeConstraintError::InvalidValue(format!(
                    "no titles under language {language:?}"
                )));
            }
            for title in titles {
                if title.language() != Some(language.as_str()) {
                    return Err(TypeConstraintError::InvalidValue(format!(
                        "title filed under {language:?} has language {:?}",
                        title.language
                    )));
                }
                if title.text.is_none() {
                    return Err(TypeConstraintError::EmptyString("title text"));
                }
            }
        }
        Ok(Self(map))
    }
}

impl From<Titles> for BTreeMap<String, Vec<Title>> {
    fn from(titles: Titles) -> Self {
        titles.0
    }
}
