//! Game entities, one task per live entity

pub mod clock;
pub mod craft;
pub mod explosion;
pub mod game_over;
pub mod garbage;
pub mod projectile;
pub mod spawner;
pub mod star;
pub mod year_display;

pub use clock::ProgressionClock;
pub use craft::Craft;
pub use explosion::Explosion;
pub use game_over::GameOver;
pub use garbage::Garbage;
pub use projectile::Projectile;
pub use spawner::GarbageSpawner;
pub use star::Star;
pub use year_display::YearDisplay;
