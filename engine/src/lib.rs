use rand::{Rng, SeedableRng, seq::SliceRandom};
use rand_chacha::ChaCha8Rng;

pub mod actions;
pub mod api;
pub mod catalog;
pub mod content;
pub mod entity;
pub mod error;
pub mod log;
pub mod map;
pub mod path;
pub mod policy;
pub mod session;

pub use actions::{Action, ActionOutcome, Direction, registry};
pub use catalog::{DRAGON_SYMBOL, PLAYER_SYMBOL, Shield, Weapon};
pub use entity::Entity;
pub use error::{EngineError, Result};
pub use log::MessageLog;
pub use map::{MapStore, Position};
pub use session::{Outcome, Session};

/// Seeded RNG shared by every probabilistic rule in a session, so a whole
/// encounter replays identically from one seed.
pub struct Dice {
    rng: ChaCha8Rng,
}

impl Dice {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// True with probability `p` (clamped to `0.0..=1.0`).
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Roll in `0.0..100.0`, compared against percent-valued tunables
    /// such as shield durability.
    pub fn percent(&mut self) -> f64 {
        self.rng.gen_range(0.0..100.0)
    }

    /// Uniform pick from a slice; `None` when the slice is empty.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }
}
