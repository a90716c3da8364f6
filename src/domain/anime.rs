use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use crate::domain::capabilities::{Described, Entity, Titled, Typed};
use crate::domain::category::Category;
use crate::domain::episode::Episode;
use crate::domain::error::{ModelError, ModelResult};
use crate::domain::tag::Tag;
use crate::domain::title::Titles;
use crate::domain::types::{
    AnimeId, AnimeType, ArtworkHost, CategoryId, RatingKind, TypeConstraintError,
};
use crate::domain::value::Value;

/// Vote count and rating of one rating kind. Both start out absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub count: Option<f64>,
    /// Stored exactly as handed over, without coercion.
    pub rating: Option<Value>,
}

/// The three rating buckets of an anime.
///
/// Every kind is always present; kinds can only be populated, never added
/// or removed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Ratings {
    permanent: Rating,
    temporary: Rating,
    review: Rating,
}

impl Ratings {
    pub fn get(&self, kind: RatingKind) -> &Rating {
        match kind {
            RatingKind::Permanent => &self.permanent,
            RatingKind::Temporary => &self.temporary,
            RatingKind::Review => &self.review,
        }
    }

    fn get_mut(&mut self, kind: RatingKind) -> &mut Rating {
        match kind {
            RatingKind::Permanent => &mut self.permanent,
            RatingKind::Temporary => &mut self.temporary,
            RatingKind::Review => &mut self.review,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (RatingKind, &Rating)> {
        RatingKind::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }
}

/// Episodes of an anime indexed by episode number.
///
/// An episode without a number has a slot of its own, overwritten like any
/// numbered one. Serialized as a plain list; each episode carries its own
/// key, and a list with two episodes under the same key is rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Episode>", into = "Vec<Episode>")]
struct EpisodeIndex {
    numbered: BTreeMap<String, Episode>,
    unnumbered: Option<Episode>,
}

impl EpisodeIndex {
    /// Stores `episode` under its number, returning the episode it replaced.
    fn insert(&mut self, episode: Episode) -> Option<Episode> {
        match episode.number() {
            Some(number) => self.numbered.insert(number.to_string(), episode),
            None => self.unnumbered.replace(episode),
        }
    }

    fn len(&self) -> usize {
        self.numbered.len() + usize::from(self.unnumbered.is_some())
    }
}

impl TryFrom<Vec<Episode>> for EpisodeIndex {
    type Error = TypeConstraintError;

    fn try_from(episodes: Vec<Episode>) -> Result<Self, Self::Error> {
        let mut index = Self::default();
        for episode in episodes {
            let number = episode.number().unwrap_or("<none>").to_string();
            if index.insert(episode).is_some() {
                return Err(TypeConstraintError::InvalidValue(format!(
                    "duplicate episode number: {number}"
                )));
            }
        }
        Ok(index)
    }
}

impl From<EpisodeIndex> for Vec<Episode> {
    fn from(index: EpisodeIndex) -> Self {
        index.numbered.into_values().chain(index.unnumbered).collect()
    }
}

/// An anime, the aggregate root of the model.
///
/// Created from its id alone and populated by whoever decodes the source
/// records, one field or collection entry at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anime {
    id: AnimeId,
    titles: Titles,
    kind: Option<AnimeType>,
    description: Option<String>,
    episode_count: Option<i64>,
    episodes: EpisodeIndex,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    categories: Vec<Category>,
    tags: Vec<Tag>,
    picture: Option<String>,
    ratings: Ratings,
}

impl Anime {
    pub fn new(id: AnimeId) -> Self {
        Self {
            id,
            titles: Titles::new(),
            kind: None,
            description: None,
            episode_count: None,
            episodes: EpisodeIndex::default(),
            start_date: None,
            end_date: None,
            categories: Vec::new(),
            tags: Vec::new(),
            picture: None,
            ratings: Ratings::default(),
        }
    }

    /// Appends a category. Duplicates are kept.
    pub fn add_category<V: Into<Value>>(&mut self, category: V) -> ModelResult<()> {
        match category.into() {
            Value::Category(category) => {
                log::trace!("Anime {}: adding category {}", self.id, category.id());
                self.categories.push(*category);
                Ok(())
            }
            other => Err(ModelError::TypeMismatch {
                expected: "Category",
                found: other.kind(),
            }),
        }
    }

    /// Stores an episode under its number, replacing any episode already
    /// stored under the same number. Episodes without a number share a
    /// single slot with the same replacement rule.
    pub fn add_episode<V: Into<Value>>(&mut self, episode: V) -> ModelResult<()> {
        let episode = match episode.into() {
            Value::Episode(episode) => *episode,
            other => {
                return Err(ModelError::TypeMismatch {
                    expected: "Episode",
                    found: other.kind(),
                });
            }
        };
        let number = episode.number().unwrap_or("without number").to_string();
        if let Some(previous) = self.episodes.insert(episode) {
            log::debug!(
                "Anime {}: episode {number} (id {}) replaced",
                self.id,
                previous.id()
            );
        }
        Ok(())
    }

    /// Appends a tag. Duplicates are kept.
    pub fn add_tag(&mut self, tag: Tag) {
        log::trace!("Anime {}: adding tag {}", self.id, tag.id());
        self.tags.push(tag);
    }

    /// Sets one rating kind.
    ///
    /// `kind` must be `permanent`, `temporary` or `review`. `count` is
    /// coerced to a float; `rating` is stored as given. Nothing is written
    /// unless both checks pass.
    pub fn set_rating<C: Into<Value>, R: Into<Value>>(
        &mut self,
        kind: &str,
        count: C,
        rating: R,
    ) -> ModelResult<()> {
        let kind = RatingKind::try_from(kind)?;
        let count = count.into().to_f64()?;
        let rating = rating.into();
        let slot = self.ratings.get_mut(kind);
        slot.count = Some(count);
        slot.rating = (!rating.is_null()).then_some(rating);
        Ok(())
    }

    pub fn ratings(&self) -> &Ratings {
        &self.ratings
    }

    pub fn episode_count(&self) -> Option<i64> {
        self.episode_count
    }

    /// Sets the announced number of episodes, coercing to an integer.
    pub fn set_episode_count<V: Into<Value>>(&mut self, value: V) -> ModelResult<()> {
        self.episode_count = Some(value.into().to_i64()?);
        Ok(())
    }

    /// Full artwork URL under `host`.
    ///
    /// A URL is produced even when no artwork path was set; check
    /// [`Self::picture_path`] to tell the two apart.
    pub fn picture(&self, host: &ArtworkHost) -> String {
        host.resolve(self.picture.as_deref())
    }

    pub fn picture_path(&self) -> Option<&str> {
        self.picture.as_deref()
    }

    pub fn set_picture_path(&mut self, path: Option<String>) {
        self.picture = path;
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    pub fn set_start_date(&mut self, date: Option<NaiveDate>) {
        self.start_date = date;
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    pub fn set_end_date(&mut self, date: Option<NaiveDate>) {
        self.end_date = date;
    }

    /// Episode stored under `number`, or the unnumbered episode for `None`.
    pub fn episode(&self, number: Option<&str>) -> Option<&Episode> {
        match number {
            Some(number) => self.episodes.numbered.get(number),
            None => self.episodes.unnumbered.as_ref(),
        }
    }

    /// Episodes ordered by kind prefix, then numerically (`1`, `2`, `10`,
    /// then `C1`, `S1`, ...), with the unnumbered episode last.
    pub fn episodes(&self) -> Vec<&Episode> {
        let mut episodes: Vec<(&String, &Episode)> = self.episodes.numbered.iter().collect();
        episodes.sort_by_key(|(number, _)| episode_sort_key(number));
        episodes
            .into_iter()
            .map(|(_, episode)| episode)
            .chain(self.episodes.unnumbered.as_ref())
            .collect()
    }

    pub fn episodes_len(&self) -> usize {
        self.episodes.len()
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// First attached category with `id`.
    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|category| category.id() == id)
    }

    /// Attached categories whose parent is `parent`.
    pub fn subcategories(&self, parent: CategoryId) -> impl Iterator<Item = &Category> {
        self.categories
            .iter()
            .filter(move |category| category.parent_id() == Some(parent))
    }

    pub fn top_level_categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter().filter(|category| category.is_top_level())
    }

    /// The category with `id` followed by its ancestors, nearest first.
    ///
    /// Parents are looked up among this anime's categories only. The walk
    /// stops at a parent that is not attached or that was already visited.
    pub fn category_lineage(&self, id: CategoryId) -> Vec<&Category> {
        let mut lineage = Vec::new();
        let mut seen = HashSet::new();
        let mut next = Some(id);
        while let Some(current) = next {
            if !seen.insert(current) {
                log::debug!("Anime {}: category {current} repeats in lineage", self.id);
                break;
            }
            let Some(category) = self.category(current) else {
                if current != id {
                    log::debug!("Anime {}: parent category {current} not attached", self.id);
                }
                break;
            };
            lineage.push(category);
            next = category.parent_id();
        }
        lineage
    }
}

fn episode_sort_key(number: &str) -> (String, u64, String) {
    let digits_at = number
        .find(|c: char| c.is_ascii_digit())
        .unwrap_or(number.len());
    let (prefix, rest) = number.split_at(digits_at);
    let ordinal = rest.parse::<u64>().unwrap_or(u64::MAX);
    (prefix.to_ascii_uppercase(), ordinal, number.to_string())
}

impl Entity for Anime {
    type Id = AnimeId;

    fn id(&self) -> AnimeId {
        self.id
    }

    fn set_id(&mut self, id: AnimeId) {
        self.id = id;
    }
}

impl Titled for Anime {
    fn titles(&self) -> &Titles {
        &self.titles
    }

    fn titles_mut(&mut self) -> &mut Titles {
        &mut self.titles
    }
}

impl Typed for Anime {
    type Kind = AnimeType;

    fn kind(&self) -> Option<AnimeType> {
        self.kind
    }

    fn set_kind(&mut self, kind: Option<AnimeType>) {
        self.kind = kind;
    }
}

impl Described for Anime {
    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }
}
