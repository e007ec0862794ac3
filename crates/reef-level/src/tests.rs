//! Unit tests for reef-level.

use std::io::Cursor;

use reef_core::{Layer, SpeciesId, Vec2};

use crate::{LevelDocument, load_level_reader};

fn parse(json: &str) -> LevelDocument {
    load_level_reader(Cursor::new(json)).unwrap()
}

// ── Document / loader ─────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use super::*;
    use crate::{LevelError, load_level, load_level_or_default};

    #[test]
    fn full_document() {
        let level = parse(
            r#"{
                "numberOfPlants": 12,
                "worldWidth": 2000, "worldHeight": 900,
                "numberOfFish": 3, "numberOfBgFish": 4,
                "questions": [
                    {"question": "How many red fish?", "answer": "two", "fishToHighlight": "red"}
                ],
                "fish": [{"x": 10, "y": 20, "type": 76}],
                "cohesionFactor": 0.1, "alignmentFactor": 0.2,
                "separationFactor": 0.3, "escapeFromOtherFishFactor": 0.4
            }"#,
        );
        assert_eq!(level.number_of_plants, 12);
        assert_eq!(level.world_width, 2000.0);
        assert_eq!(level.number_of_bg_fish, 4);
        assert_eq!(level.questions[0].fish_to_highlight, "red");
        assert_eq!(level.fish[0].species, 76);
        assert_eq!(level.fish[0].velocity(), None);
        let t = level.tuning();
        assert_eq!((t.cohesion, t.alignment, t.separation, t.repulsion), (0.1, 0.2, 0.3, 0.4));
    }

    #[test]
    fn partial_document_takes_defaults() {
        let level = parse(r#"{"numberOfFish": 7}"#);
        let d = LevelDocument::default();
        assert_eq!(level.number_of_fish, 7);
        assert_eq!(level.world_width, d.world_width);
        assert_eq!(level.species, d.species);
        assert_eq!(level.tuning(), d.tuning());
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = load_level_reader(Cursor::new("{ not json")).unwrap_err();
        assert!(matches!(err, LevelError::Parse(_)));
    }

    #[test]
    fn invalid_world_rejected() {
        let err = load_level_reader(Cursor::new(r#"{"worldWidth": 0}"#)).unwrap_err();
        assert!(matches!(err, LevelError::Invalid(_)));
    }

    #[test]
    fn empty_palette_rejected_when_needed() {
        assert!(load_level_reader(Cursor::new(r#"{"species": [], "numberOfFish": 3}"#)).is_err());
        assert!(
            load_level_reader(Cursor::new(r#"{"species": [], "numberOfFish": 0}"#)).is_ok()
        );
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = std::env::temp_dir().join("reef-level-definitely-missing.json");
        assert!(matches!(load_level(&path).unwrap_err(), LevelError::Io(_)));
    }

    #[test]
    fn or_default_falls_back() {
        let missing = std::env::temp_dir().join("reef-level-also-missing.json");
        assert_eq!(load_level_or_default(Some(&missing)), LevelDocument::default());
        assert_eq!(load_level_or_default(None), LevelDocument::default());
    }

    #[test]
    fn or_default_reads_file() {
        let path = std::env::temp_dir().join(format!("reef-level-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"numberOfFish": 9, "numberOfBgFish": 1}"#).unwrap();
        let level = load_level_or_default(Some(&path));
        std::fs::remove_file(&path).ok();
        assert_eq!(level.number_of_fish, 9);
        assert_eq!(level.number_of_bg_fish, 1);
    }

    #[test]
    fn serialized_keys_are_camel_case() {
        let json = serde_json::to_value(LevelDocument::default()).unwrap();
        for key in [
            "worldWidth",
            "worldHeight",
            "numberOfFish",
            "numberOfBgFish",
            "numberOfPlants",
            "escapeFromOtherFishFactor",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        // Empty placement list is omitted.
        assert!(json.get("fish").is_none());
    }
}

// ── Bounds ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod bounds {
    use reef_core::Rect;

    use super::*;

    #[test]
    fn layer_bounds_follow_world_size() {
        let level = parse(r#"{"worldWidth": 1000, "worldHeight": 800}"#);
        assert_eq!(level.interactive_bounds(), Rect::new(-50.0, -50.0, 1000.0, 500.0));
        assert_eq!(level.background_bounds(), Rect::new(0.0, 0.0, 1000.0, 800.0));
        let d = level.agent_defaults();
        assert_eq!(d.bounds_for(Layer::Interactive), level.interactive_bounds());
        assert_eq!(d.bounds_for(Layer::Background), level.background_bounds());
    }
}

// ── Population ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod population {
    use super::*;
    use crate::{build_population, spawns};

    fn level() -> LevelDocument {
        parse(
            r#"{
                "worldWidth": 1000, "worldHeight": 500,
                "numberOfFish": 4, "numberOfBgFish": 3,
                "fish": [
                    {"x": 1, "y": 2, "type": 80},
                    {"x": 3, "y": 4, "type": 100, "vx": 0.25, "vy": -0.25}
                ],
                "species": [72, 74],
                "backgroundSpecies": 9
            }"#,
        )
    }

    #[test]
    fn placements_then_random_then_background() {
        let l = level();
        let s = spawns(&l, 1);
        assert_eq!(s.len(), 7);
        assert_eq!(l.population(), 7);

        assert_eq!(s[0].position, Vec2::new(1.0, 2.0));
        assert_eq!(s[0].species, SpeciesId(80));
        assert_eq!(s[0].velocity, None);
        assert_eq!(s[1].velocity, Some(Vec2::new(0.25, -0.25)));

        for r in &s[2..4] {
            assert_eq!(r.layer, Layer::Interactive);
            assert!(r.species == SpeciesId(72) || r.species == SpeciesId(74));
            assert!((0.0..1000.0).contains(&r.position.x));
            assert!((0.0..500.0).contains(&r.position.y));
        }
        for b in &s[4..] {
            assert_eq!(b.layer, Layer::Background);
            assert_eq!(b.species, SpeciesId(9));
        }
    }

    #[test]
    fn placements_beyond_count_are_kept() {
        let l = parse(r#"{"numberOfFish": 1, "numberOfBgFish": 0,
            "fish": [{"x": 0, "y": 0, "type": 72}, {"x": 5, "y": 5, "type": 72}]}"#);
        assert_eq!(spawns(&l, 0).len(), 2);
    }

    #[test]
    fn seeded_population_is_reproducible() {
        let l = level();
        let (a, _) = build_population(&l, 11);
        let (b, _) = build_population(&l, 11);
        let (c, _) = build_population(&l, 12);
        assert_eq!(a.position, b.position);
        assert_eq!(a.velocity, b.velocity);
        assert_ne!(a.position[2..], c.position[2..]);
    }

    #[test]
    fn store_gets_level_tuning_and_bounds() {
        let l = level();
        let (store, rngs) = build_population(&l, 0);
        assert_eq!(store.count, 7);
        assert_eq!(rngs.len(), 7);
        assert!(store.tuning.iter().all(|t| *t == l.tuning()));
        assert_eq!(store.bounds[0], l.interactive_bounds());
        assert_eq!(store.bounds[6], l.background_bounds());
        assert_eq!(store.velocity[1], Vec2::new(0.25, -0.25));
    }

    #[test]
    fn defaults_populate() {
        let (store, _) = build_population(&LevelDocument::default(), 0);
        assert_eq!(store.count, 180);
    }
}

// ── Quiz ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod quiz {
    use reef_agent::{AgentStoreBuilder, Spawn};
    use reef_core::AgentId;

    use super::*;
    use crate::{Question, highlight_for, pick_highlight, species_for_color};

    #[test]
    fn colour_names() {
        assert_eq!(species_for_color("red"), Some(SpeciesId(78)));
        assert_eq!(species_for_color(" Green "), Some(SpeciesId(72)));
        assert_eq!(species_for_color("100"), Some(SpeciesId(100)));
        assert_eq!(species_for_color(""), None);
        assert_eq!(species_for_color("purple"), None);
    }

    fn store() -> reef_agent::AgentStore {
        AgentStoreBuilder::new(0)
            .spawn(Spawn::interactive(Vec2::new(10.0, 10.0), SpeciesId(78)))   // off-screen left
            .spawn(Spawn::background(Vec2::new(500.0, 10.0), SpeciesId(78)))   // background
            .spawn(Spawn::interactive(Vec2::new(400.0, 10.0), SpeciesId(78)))  // visible
            .spawn(Spawn::interactive(Vec2::new(950.0, 10.0), SpeciesId(80)))  // off-screen right
            .build()
            .0
    }

    #[test]
    fn prefers_visible_interactive_fish() {
        assert_eq!(pick_highlight(&store(), SpeciesId(78), 1000.0), Some(AgentId(2)));
    }

    #[test]
    fn falls_back_to_any_interactive_fish() {
        assert_eq!(pick_highlight(&store(), SpeciesId(80), 1000.0), Some(AgentId(3)));
        assert_eq!(pick_highlight(&store(), SpeciesId(72), 1000.0), None);
    }

    #[test]
    fn highlight_sets_flag() {
        let mut s = store();
        let q = Question {
            question:          "Which one is red?".into(),
            answer:            "this one".into(),
            fish_to_highlight: "red".into(),
        };
        assert_eq!(highlight_for(&mut s, &q, 1000.0), Some(AgentId(2)));
        assert!(s.highlighted[2]);
        assert!(!s.highlighted[0]);

        let none = Question { fish_to_highlight: String::new(), ..q };
        assert_eq!(highlight_for(&mut s, &none, 1000.0), None);
    }
}
