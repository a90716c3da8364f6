use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::capabilities::{Entity, Titled};
use crate::domain::error::ModelResult;
use crate::domain::title::Titles;
use crate::domain::types::EpisodeId;
use crate::domain::value::Value;

/// Vote count and average rating of an episode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpisodeRating {
    pub votes: i64,
    pub rating: f64,
}

/// A single installment of a series.
///
/// Owned by its anime once attached; no link back to the anime is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    id: EpisodeId,
    titles: Titles,
    number: Option<String>,
    air_date: Option<NaiveDate>,
    length: Option<u32>,
    rating: Option<EpisodeRating>,
}

impl Episode {
    pub fn new(id: EpisodeId) -> Self {
        Self {
            id,
            titles: Titles::new(),
            number: None,
            air_date: None,
            length: None,
            rating: None,
        }
    }

    /// Episode number as the database writes it (`1`, `S2`, `C1`, ...).
    pub fn number(&self) -> Option<&str> {
        self.number.as_deref()
    }

    pub fn set_number(&mut self, number: Option<String>) {
        self.number = number;
    }

    pub fn air_date(&self) -> Option<NaiveDate> {
        self.air_date
    }

    pub fn set_air_date(&mut self, air_date: Option<NaiveDate>) {
        self.air_date = air_date;
    }

    /// Runtime in minutes.
    pub fn length(&self) -> Option<u32> {
        self.length
    }

    pub fn set_length(&mut self, minutes: Option<u32>) {
        self.length = minutes;
    }

    pub fn rating(&self) -> Option<EpisodeRating> {
        self.rating
    }

    /// Stores the vote count and rating as one pair.
    ///
    /// Both values are coerced before anything is written, so a failure on
    /// either leaves the previous rating in place.
    pub fn set_rating<V: Into<Value>, R: Into<Value>>(
        &mut self,
        votes: V,
        rating: R,
    ) -> ModelResult<()> {
        let votes = votes.into().to_i64()?;
        let rating = rating.into().to_f64()?;
        self.rating = Some(EpisodeRating { votes, rating });
        Ok(())
    }
}

impl Entity for Episode {
    type Id = EpisodeId;

    fn id(&self) -> EpisodeId {
        self.id
    }

    fn set_id(&mut self, id: EpisodeId) {
        self.id = id;
    }
}

impl Titled for Episode {
    fn titles(&self) -> &Titles {
        &self.titles
    }

    fn titles_mut(&mut self) -> &mut Titles {
        &mut self.titles
    }
}
