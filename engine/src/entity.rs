use crate::catalog::Archetype;

/// One object on the map: static flags come from the archetype it spawned
/// from, everything else is runtime state. Health and shield tier clamp at
/// zero through their setters.
#[derive(Debug, Clone)]
pub struct Entity {
    archetype: &'static Archetype,
    move_cooldown: u32,
    breath_cooldown: u32,
    wet: bool,
    burning: bool,
    blessed: bool,
    carrying_ore: bool,
    shield: usize,
    weapon: usize,
    health: i32,
}

impl Entity {
    pub fn spawn(archetype: &'static Archetype) -> Self {
        Self {
            archetype,
            move_cooldown: 0,
            breath_cooldown: 0,
            wet: false,
            burning: false,
            blessed: false,
            carrying_ore: false,
            shield: archetype.shield,
            weapon: archetype.weapon,
            health: archetype.max_health,
        }
    }

    // Archetype flags and tunables.

    pub fn name(&self) -> &'static str {
        self.archetype.name
    }

    pub fn symbol(&self) -> char {
        self.archetype.symbol
    }

    pub fn blocks(&self) -> bool {
        self.archetype.blocks
    }

    pub fn destructible(&self) -> bool {
        self.archetype.destructible
    }

    pub fn mobile(&self) -> bool {
        self.archetype.mobile
    }

    pub fn water(&self) -> bool {
        self.archetype.water
    }

    pub fn openable(&self) -> bool {
        self.archetype.openable
    }

    pub fn ore(&self) -> bool {
        self.archetype.ore
    }

    pub fn wood(&self) -> bool {
        self.archetype.wood
    }

    pub fn altar(&self) -> bool {
        self.archetype.altar
    }

    pub fn move_timer(&self) -> u32 {
        self.archetype.move_timer
    }

    pub fn breath_timer(&self) -> u32 {
        self.archetype.breath_timer
    }

    pub fn breath_range(&self) -> i32 {
        self.archetype.breath_range
    }

    pub fn max_health(&self) -> i32 {
        self.archetype.max_health
    }

    // Runtime state.

    pub fn move_cooldown(&self) -> u32 {
        self.move_cooldown
    }

    pub fn set_move_cooldown(&mut self, cooldown: u32) {
        self.move_cooldown = cooldown;
    }

    pub fn breath_cooldown(&self) -> u32 {
        self.breath_cooldown
    }

    pub fn set_breath_cooldown(&mut self, cooldown: u32) {
        self.breath_cooldown = cooldown;
    }

    pub fn wet(&self) -> bool {
        self.wet
    }

    pub fn set_wet(&mut self, wet: bool) {
        self.wet = wet;
    }

    pub fn burning(&self) -> bool {
        self.burning
    }

    pub fn set_burning(&mut self, burning: bool) {
        self.burning = burning;
    }

    pub fn blessed(&self) -> bool {
        self.blessed
    }

    pub fn set_blessed(&mut self, blessed: bool) {
        self.blessed = blessed;
    }

    pub fn carrying_ore(&self) -> bool {
        self.carrying_ore
    }

    pub fn set_carrying_ore(&mut self, carrying: bool) {
        self.carrying_ore = carrying;
    }

    pub fn shield(&self) -> usize {
        self.shield
    }

    pub fn has_shield(&self) -> bool {
        self.shield > 0
    }

    pub fn set_shield(&mut self, tier: usize) {
        self.shield = tier;
    }

    pub fn weapon(&self) -> usize {
        self.weapon
    }

    pub fn set_weapon(&mut self, tier: usize) {
        self.weapon = tier;
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    /// Health never goes below zero.
    pub fn set_health(&mut self, health: i32) {
        self.health = health.max(0);
    }
}
