use anidb_model::{
    Category, Entity, ModelError, RatingKind, Tag, TagId, Title, TitleType, Titled, Value,
};

mod common;

#[test]
fn titles_with_text_land_last_under_their_language() {
    common::init_logging();
    let mut anime = common::anime(1);
    anime
        .add_title(Title::with_text("x-jat", "Mononoke Hime").of_type(TitleType::Main))
        .expect("title with language is accepted");

    for title in common::title_variants(Some("en")) {
        let expected = title.clone();
        let before = anime.titles().clone();
        anime.add_title(title).expect("title with language is accepted");

        if expected.text().is_some() {
            let en = anime.titles().get("en").expect("en titles exist");
            assert_eq!(en.last(), Some(&expected));
        } else {
            assert_eq!(anime.titles(), &before);
        }
    }
    assert_eq!(anime.titles().get("en").map(<[Title]>::len), Some(4));
    assert_eq!(anime.titles().get("x-jat").map(<[Title]>::len), Some(1));
}

#[test]
fn titles_without_language_always_violate_invariant() {
    let mut episode = common::numbered_episode(3, "1");
    for title in common::title_variants(None) {
        let err = episode.add_title(title).unwrap_err();
        assert!(matches!(err, ModelError::InvariantViolation(_)));
    }
    assert!(episode.titles().is_empty());
}

#[test]
fn setting_permanent_rating_leaves_other_kinds_untouched() {
    let mut anime = common::anime(42);
    anime
        .set_rating("permanent", "1000", 8.5)
        .expect("known rating kind");

    let permanent = anime.ratings().get(RatingKind::Permanent);
    assert_eq!(permanent.count, Some(1000.0));
    assert_eq!(permanent.rating, Some(Value::Float(8.5)));
    for kind in [RatingKind::Temporary, RatingKind::Review] {
        let rating = anime.ratings().get(kind);
        assert_eq!(rating.count, None);
        assert_eq!(rating.rating, None);
    }
}

#[test]
fn each_rating_kind_is_independent() {
    let mut anime = common::anime(42);
    for (i, kind) in RatingKind::ALL.into_iter().enumerate() {
        let before = anime.ratings().clone();
        anime
            .set_rating(kind.as_str(), i as i64 + 1, "7.0")
            .expect("known rating kind");
        for other in RatingKind::ALL.into_iter().filter(|k| *k != kind) {
            assert_eq!(anime.ratings().get(other), before.get(other));
        }
        assert_eq!(anime.ratings().get(kind).rating, Some(Value::from("7.0")));
    }
}

#[test]
fn unknown_rating_kind_is_rejected_without_changes() {
    let mut anime = common::anime(42);
    anime.set_rating("review", 12, 6.1).expect("known rating kind");
    let before = anime.ratings().clone();

    for kind in ["reviews", "Permanent", "", "average"] {
        let err = anime.set_rating(kind, 1, 1.0).unwrap_err();
        assert_eq!(
            err,
            ModelError::InvalidArgument("Unknown kind of rating".to_string())
        );
    }
    assert_eq!(anime.ratings(), &before);
}

#[test]
fn ratings_serialize_with_exactly_three_keys() {
    let anime = common::anime(42);
    let value = serde_json::to_value(anime.ratings()).expect("ratings serialize");
    assert_eq!(
        value,
        serde_json::json!({
            "permanent": { "count": null, "rating": null },
            "temporary": { "count": null, "rating": null },
            "review": { "count": null, "rating": null },
        })
    );

    let extra = serde_json::json!({
        "permanent": { "count": null, "rating": null },
        "temporary": { "count": null, "rating": null },
        "review": { "count": null, "rating": null },
        "weighted": { "count": null, "rating": null },
    });
    assert!(serde_json::from_value::<anidb_model::Ratings>(extra).is_err());
}

#[test]
fn second_episode_with_same_number_replaces_first() {
    common::init_logging();
    let mut anime = common::anime(42);
    let first = common::numbered_episode(100, "5");
    let mut second = common::numbered_episode(101, "5");
    second
        .add_title(Title::with_text("en", "Corrected"))
        .expect("title with language is accepted");

    anime.add_episode(first).expect("episode is accepted");
    anime.add_episode(second.clone()).expect("episode is accepted");

    assert_eq!(anime.episodes().len(), 1);
    assert_eq!(anime.episode(Some("5")), Some(&second));
}

#[test]
fn non_category_values_are_type_mismatches() {
    let mut anime = common::anime(42);
    anime.add_category(common::category(1)).expect("category is accepted");

    let err = anime.add_category("Action").unwrap_err();
    assert_eq!(
        err,
        ModelError::TypeMismatch {
            expected: "Category",
            found: "text",
        }
    );
    let err = anime
        .add_category(common::numbered_episode(1, "1"))
        .unwrap_err();
    assert!(matches!(err, ModelError::TypeMismatch { found: "Episode", .. }));
    assert_eq!(anime.categories().len(), 1);
}

#[test]
fn non_episode_values_are_type_mismatches() {
    let mut anime = common::anime(42);
    anime
        .add_episode(common::numbered_episode(9, "1"))
        .expect("episode is accepted");

    let err = anime.add_episode("Episode 2").unwrap_err();
    assert_eq!(
        err,
        ModelError::TypeMismatch {
            expected: "Episode",
            found: "text",
        }
    );
    assert!(anime.add_episode(common::category(4)).is_err());
    assert_eq!(anime.episodes().len(), 1);
}

#[test]
fn duplicate_categories_are_kept_in_order() {
    let mut anime = common::anime(42);
    for id in [3, 1, 3] {
        anime.add_category(common::category(id)).expect("category is accepted");
    }
    let ids: Vec<i32> = anime.categories().iter().map(|c| c.id().get()).collect();
    assert_eq!(ids, [3, 1, 3]);
}

#[test]
fn hentai_flag_rejects_integers() {
    let mut category: Category = common::category(1);
    let err = category.set_hentai(1).unwrap_err();
    assert!(matches!(err, ModelError::TypeMismatch { .. }));
    assert!(!category.is_hentai());
}

#[test]
fn tags_are_added_without_checks() {
    let mut anime = common::anime(42);
    let mut tag = Tag::new(TagId::new(2604).expect("valid tag id"));
    tag.set_spoiler(true);
    tag.set_count("18").expect("numeric count");
    anime.add_tag(tag.clone());
    assert_eq!(anime.tags(), &[tag]);
}

#[test]
fn episodes_without_number_share_one_slot() {
    let mut anime = common::anime(42);
    let first = anidb_model::Episode::new(anidb_model::EpisodeId::new(2).expect("valid episode id"));
    let second = anidb_model::Episode::new(anidb_model::EpisodeId::new(3).expect("valid episode id"));

    anime.add_episode(first).expect("unnumbered episode is accepted");
    anime.add_episode(second.clone()).expect("unnumbered episode is accepted");

    assert_eq!(anime.episodes_len(), 1);
    assert_eq!(anime.episode(None), Some(&second));
}

#[test]
fn padded_language_title_is_filed_under_its_own_language() {
    let mut episode = common::numbered_episode(7, "1");
    let title = Title::with_text(" en", "Pilot");
    episode.add_title(title.clone()).expect("title with language is accepted");
    assert_eq!(
        episode.titles().get(" en").and_then(<[Title]>::last),
        Some(&title)
    );
}
