//! Creature data structure and the raw-API-to-entity mapping.

use serde::{Deserialize, Serialize};

/// A normalized creature entity, built once from one raw API payload
/// and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Creature {
    /// External numeric identifier
    pub id: u32,

    /// Display name, first character uppercased
    pub name: String,

    /// Artwork URL (empty string if the source provided no image)
    pub image_url: String,

    /// Base attack stat
    pub attack: u32,

    /// Base defense stat
    pub defense: u32,

    /// Base hit points
    pub hp: u32,

    /// Primary type, capitalized (empty string if the source listed none)
    pub primary_type: String,
}

impl Creature {
    /// Build a creature from the raw API payload for `id`.
    ///
    /// Image selection is a three-way fallback: official artwork, then
    /// the default sprite, then empty. Only attack/defense/hp are kept
    /// from the stat list; missing ones default to 0 and unknown stat
    /// names are ignored. Secondary types are dropped.
    pub fn from_raw(id: u32, raw: RawCreature) -> Self {
        let image_url = raw
            .sprites
            .other
            .and_then(|o| o.official_artwork)
            .and_then(|a| a.front_default)
            .or(raw.sprites.front_default)
            .unwrap_or_default();

        let mut attack = 0;
        let mut defense = 0;
        let mut hp = 0;
        for entry in raw.stats {
            // The API reports base stats as signed; clamp at zero.
            let value = entry.base_stat.max(0) as u32;
            match entry.stat.name.as_str() {
                "attack" => attack = value,
                "defense" => defense = value,
                "hp" => hp = value,
                _ => {}
            }
        }

        let primary_type = raw
            .types
            .first()
            .map(|t| capitalize_first(&t.kind.name))
            .unwrap_or_default();

        Self {
            id,
            name: capitalize_first(&raw.name),
            image_url,
            attack,
            defense,
            hp,
            primary_type,
        }
    }
}

/// Raw creature payload as returned by the remote API.
///
/// Only the fields the mapper consumes are modeled; everything else in
/// the response is ignored by serde.
#[derive(Debug, Deserialize)]
pub struct RawCreature {
    pub name: String,

    #[serde(default)]
    pub sprites: RawSprites,

    #[serde(default)]
    pub stats: Vec<RawStat>,

    #[serde(default)]
    pub types: Vec<RawType>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawSprites {
    #[serde(default)]
    pub front_default: Option<String>,

    #[serde(default)]
    pub other: Option<RawOtherSprites>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawOtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<RawArtwork>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawArtwork {
    #[serde(default)]
    pub front_default: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawStat {
    pub base_stat: i64,
    pub stat: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct RawType {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// A `{name, ...}` reference as used throughout the API.
#[derive(Debug, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

/// Uppercase only the first character, leaving the rest unchanged.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_from_json(value: serde_json::Value) -> RawCreature {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn maps_full_payload() {
        let raw = raw_from_json(json!({
            "name": "bulbasaur",
            "stats": [
                {"stat": {"name": "hp"}, "base_stat": 45},
                {"stat": {"name": "attack"}, "base_stat": 49},
                {"stat": {"name": "defense"}, "base_stat": 49}
            ],
            "types": [{"type": {"name": "grass"}}],
            "sprites": {"front_default": "x.png"}
        }));

        let creature = Creature::from_raw(1, raw);
        assert_eq!(
            creature,
            Creature {
                id: 1,
                name: "Bulbasaur".to_string(),
                image_url: "x.png".to_string(),
                attack: 49,
                defense: 49,
                hp: 45,
                primary_type: "Grass".to_string(),
            }
        );
    }

    #[test]
    fn prefers_official_artwork_over_default_sprite() {
        let raw = raw_from_json(json!({
            "name": "pikachu",
            "sprites": {
                "front_default": "default.png",
                "other": {"official-artwork": {"front_default": "artwork.png"}}
            }
        }));
        assert_eq!(Creature::from_raw(25, raw).image_url, "artwork.png");
    }

    #[test]
    fn falls_back_to_default_sprite_when_artwork_null() {
        let raw = raw_from_json(json!({
            "name": "pikachu",
            "sprites": {
                "front_default": "default.png",
                "other": {"official-artwork": {"front_default": null}}
            }
        }));
        assert_eq!(Creature::from_raw(25, raw).image_url, "default.png");
    }

    #[test]
    fn empty_image_when_no_sprites() {
        let raw = raw_from_json(json!({"name": "missingno", "sprites": {}}));
        assert_eq!(Creature::from_raw(0, raw).image_url, "");
    }

    #[test]
    fn missing_stats_default_to_zero_and_unknown_names_are_ignored() {
        let raw = raw_from_json(json!({
            "name": "snorlax",
            "stats": [
                {"stat": {"name": "hp"}, "base_stat": 160},
                {"stat": {"name": "special-attack"}, "base_stat": 65},
                {"stat": {"name": "speed"}, "base_stat": 30}
            ]
        }));

        let creature = Creature::from_raw(143, raw);
        assert_eq!(creature.hp, 160);
        assert_eq!(creature.attack, 0);
        assert_eq!(creature.defense, 0);
    }

    #[test]
    fn negative_stats_clamp_to_zero() {
        let raw = raw_from_json(json!({
            "name": "glitch",
            "stats": [{"stat": {"name": "attack"}, "base_stat": -7}]
        }));
        assert_eq!(Creature::from_raw(0, raw).attack, 0);
    }

    #[test]
    fn only_first_type_is_kept() {
        let raw = raw_from_json(json!({
            "name": "charizard",
            "types": [
                {"type": {"name": "fire"}},
                {"type": {"name": "flying"}}
            ]
        }));
        assert_eq!(Creature::from_raw(6, raw).primary_type, "Fire");
    }

    #[test]
    fn empty_type_list_maps_to_empty_string() {
        let raw = raw_from_json(json!({"name": "eevee", "types": []}));
        assert_eq!(Creature::from_raw(133, raw).primary_type, "");
    }

    #[test]
    fn empty_name_stays_empty() {
        let raw = raw_from_json(json!({"name": ""}));
        assert_eq!(Creature::from_raw(0, raw).name, "");
    }

    #[test]
    fn capitalize_touches_only_first_character() {
        let raw = raw_from_json(json!({"name": "mr. mime"}));
        assert_eq!(Creature::from_raw(122, raw).name, "Mr. mime");
    }
}
