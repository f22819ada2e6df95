//! Shared world state
//!
//! Everything tasks read or write besides their own fields and the obstacle
//! registry lives here.

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Run statistics (not gameplay-affecting)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub shots_fired: u32,
    pub garbage_spawned: u32,
    pub garbage_destroyed: u32,
}

/// Shared mutable state, touched only from inside a task resumption
#[derive(Debug, Clone)]
pub struct World {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG for every random choice in the run
    pub rng: Pcg32,
    /// Current in-game year (written only by the progression clock)
    pub year: i32,
    /// Set once the craft is destroyed
    pub game_over: bool,
    pub stats: Stats,
}

impl World {
    pub fn new(seed: u64, start_year: i32) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            year: start_year,
            game_over: false,
            stats: Stats::default(),
        }
    }
}
