//! In-memory data model for anime database records.
//!
//! The `domain` module holds the entities (anime, episodes, categories, tags
//! and titles) and the mutation API a response parser uses to populate them.
//! With the `settings` feature, `models::config` loads the presentation
//! settings used to resolve artwork URLs.

pub mod domain;
#[cfg(feature = "settings")]
pub mod models;

pub use domain::anime::{Anime, Rating, Ratings};
pub use domain::capabilities::{Described, Entity, Named, Titled, Typed};
pub use domain::category::Category;
pub use domain::episode::{Episode, EpisodeRating};
pub use domain::error::{ModelError, ModelResult};
pub use domain::tag::Tag;
pub use domain::title::{Title, Titles};
pub use domain::types::{
    AnimeId, AnimeType, ArtworkHost, CategoryId, EpisodeId, RatingKind, TagId, TitleType,
    TypeConstraintError,
};
pub use domain::value::Value;
