//! Static content: the weapon and shield tier catalogs and the map-symbol
//! archetype table. Entities hold tier indices into the catalogs, never the
//! records themselves, so tiers can be compared and advanced arithmetically.

use std::sync::OnceLock;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

pub const PLAYER_SYMBOL: char = '@';
pub const DRAGON_SYMBOL: char = 'D';

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    pub damage: i32,
    pub range: i32,
    #[serde(default)]
    pub is_blessed: bool,
    #[serde(default)]
    pub can_be_tempered: bool,
    #[serde(default)]
    pub is_tempered: bool,
    #[serde(default)]
    pub can_be_blessed: bool,
}

impl Weapon {
    fn new(name: &str, damage: i32, range: i32) -> Self {
        Self {
            name: name.to_string(),
            damage,
            range,
            is_blessed: false,
            can_be_tempered: false,
            is_tempered: false,
            can_be_blessed: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shield {
    pub name: String,
    pub defense: i32,
    /// Percent chance the shield degrades a tier each time it absorbs a hit.
    pub durability: i32,
}

impl Shield {
    fn new(name: &str, defense: i32, durability: i32) -> Self {
        Self {
            name: name.to_string(),
            defense,
            durability,
        }
    }
}

/// Weapon catalog, ordered by tier.
pub fn weapons() -> &'static [Weapon] {
    static WEAPONS: OnceLock<Vec<Weapon>> = OnceLock::new();
    WEAPONS.get_or_init(|| {
        vec![
            Weapon::new("your bare hands", 0, 1),
            Weapon::new("a melted sword", 1, 1),
            Weapon {
                can_be_tempered: true,
                ..Weapon::new("an untempered sword", 2, 1)
            },
            Weapon {
                is_tempered: true,
                can_be_blessed: true,
                ..Weapon::new("a tempered sword", 5, 1)
            },
            Weapon {
                is_blessed: true,
                is_tempered: true,
                ..Weapon::new("Excalibur", 100, 1)
            },
            Weapon {
                can_be_blessed: true,
                is_tempered: true,
                ..Weapon::new("dragon teeth", 2, 1)
            },
            Weapon {
                is_blessed: true,
                is_tempered: true,
                ..Weapon::new("adamantine teeth", 2, 1)
            },
        ]
    })
}

/// Shield catalog, ordered by tier. Tier 0 is "no shield".
pub fn shields() -> &'static [Shield] {
    static SHIELDS: OnceLock<Vec<Shield>> = OnceLock::new();
    SHIELDS.get_or_init(|| {
        vec![
            Shield::new("no shield", 0, 0),
            Shield::new("a piece of wooden wall", 2, 60),
            Shield::new("a wooden shield", 2, 50),
            Shield::new("a bolstered wooden shield", 3, 20),
            Shield::new("a wooden kite shield", 5, 10),
        ]
    })
}

/// Look up a weapon tier, failing with a configuration error on an index
/// the catalog does not cover.
pub fn weapon(tier: usize) -> Result<&'static Weapon> {
    weapons().get(tier).ok_or(EngineError::Configuration {
        kind: "weapon",
        tier,
        len: weapons().len(),
    })
}

/// Look up a shield tier, failing with a configuration error on an index
/// the catalog does not cover.
pub fn shield(tier: usize) -> Result<&'static Shield> {
    shields().get(tier).ok_or(EngineError::Configuration {
        kind: "shield",
        tier,
        len: shields().len(),
    })
}

/// Static description of everything a map symbol can spawn, from terrain to
/// the two mobile combatants.
#[derive(Debug, Clone, Default)]
pub struct Archetype {
    pub name: &'static str,
    pub symbol: char,
    pub blocks: bool,
    pub destructible: bool,
    pub mobile: bool,
    /// Cell is a wet source (water); non-blocking, co-occupies with mobiles.
    pub water: bool,
    pub openable: bool,
    pub ore: bool,
    pub wood: bool,
    pub altar: bool,
    pub move_timer: u32,
    pub shield: usize,
    pub weapon: usize,
    pub breath_timer: u32,
    pub breath_range: i32,
    pub max_health: i32,
}

/// Symbol table used by the map loader. Insertion order is stable but only
/// the symbol keys are semantically meaningful.
pub fn archetypes() -> &'static IndexMap<char, Archetype> {
    static TABLE: OnceLock<IndexMap<char, Archetype>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let defs = [
            Archetype {
                name: "stone wall",
                symbol: '#',
                blocks: true,
                ..Archetype::default()
            },
            Archetype {
                name: "wooden wall",
                symbol: '-',
                blocks: true,
                destructible: true,
                wood: true,
                ..Archetype::default()
            },
            Archetype {
                name: "door",
                symbol: '+',
                blocks: true,
                destructible: true,
                openable: true,
                ..Archetype::default()
            },
            Archetype {
                name: "player",
                symbol: PLAYER_SYMBOL,
                blocks: true,
                mobile: true,
                move_timer: 1,
                weapon: 2,
                max_health: 10,
                ..Archetype::default()
            },
            Archetype {
                name: "dragon",
                symbol: DRAGON_SYMBOL,
                blocks: true,
                mobile: true,
                move_timer: 2,
                breath_timer: 5,
                breath_range: 3,
                weapon: 5,
                max_health: 100,
                ..Archetype::default()
            },
            Archetype {
                name: "water",
                symbol: '~',
                water: true,
                ..Archetype::default()
            },
            Archetype {
                name: "holy ore",
                symbol: '%',
                blocks: true,
                destructible: true,
                ore: true,
                ..Archetype::default()
            },
            Archetype {
                name: "altar",
                symbol: '*',
                blocks: true,
                altar: true,
                ..Archetype::default()
            },
        ];
        defs.into_iter().map(|a| (a.symbol, a)).collect()
    })
}
