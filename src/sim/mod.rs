//! Deterministic simulation module
//!
//! All gameplay logic lives here:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable resumption order (by admission)
//! - Drawing and input only through the `Canvas` a tick is lent

pub mod collision;
pub mod obstacles;
pub mod physics;
pub mod progression;
pub mod scheduler;
pub mod state;
pub mod task;
pub mod tasks;

#[cfg(test)]
pub(crate) mod testing;

pub use collision::Rect;
pub use obstacles::{Obstacle, ObstacleId, ObstacleRegistry};
pub use physics::Physics;
pub use progression::{DelayTier, GarbageSchedule, milestone, year_caption};
pub use scheduler::{Scheduler, TaskId, TickReport};
pub use state::{Stats, World};
pub use task::{Env, Step, Task, TaskContext, Tick};
