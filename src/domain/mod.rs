//! Entity model for records retrieved from the anime database.

pub mod anime;
pub mod capabilities;
pub mod category;
pub mod episode;
pub mod error;
pub mod tag;
pub mod title;
pub mod types;
pub mod value;
