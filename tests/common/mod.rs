//! Helpers for integration tests.
#![allow(dead_code)]

use anidb_model::{Anime, AnimeId, Category, CategoryId, Episode, EpisodeId, Title};

/// Routes `log` output through the test harness.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn anime(id: i32) -> Anime {
    Anime::new(AnimeId::new(id).expect("valid anime id"))
}

pub fn category(id: i32) -> Category {
    Category::new(CategoryId::new(id).expect("valid category id"))
}

pub fn numbered_episode(id: i32, number: &str) -> Episode {
    let mut episode = Episode::new(EpisodeId::new(id).expect("valid episode id"));
    episode.set_number(Some(number.to_string()));
    episode
}

/// Every combination of text, name type and exact flag for `language`.
pub fn title_variants(language: Option<&str>) -> Vec<Title> {
    let mut variants = Vec::new();
    for text in [None, Some("Mononoke Hime")] {
        for name_type in [None, Some(anidb_model::TitleType::Official)] {
            for exact in [false, true] {
                let mut title = Title::new("placeholder");
                title.set_language(language.map(str::to_string));
                title.set_text(text.map(str::to_string));
                anidb_model::Typed::set_kind(&mut title, name_type);
                title.set_exact(exact);
                variants.push(title);
            }
        }
    }
    variants
}
