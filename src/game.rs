//! Game session
//!
//! Builds the initial entity set and drives the fixed-rate loop:
//! tick, present, sleep out the rest of the interval.

use std::thread;
use std::time::Instant;

use rand::Rng;

use crate::assets::{FrameSource, GARBAGE, ROCKET};
use crate::error::Result;
use crate::platform::Canvas;
use crate::settings::Settings;
use crate::sim::obstacles::ObstacleRegistry;
use crate::sim::scheduler::{Scheduler, TickReport};
use crate::sim::state::World;
use crate::sim::task::Env;
use crate::sim::tasks::{Craft, GarbageSpawner, ProgressionClock, Star, YearDisplay};

pub struct Game<C: Canvas> {
    canvas: C,
    scheduler: Scheduler,
    obstacles: ObstacleRegistry,
    world: World,
    settings: Settings,
}

impl<C: Canvas> Game<C> {
    /// Validate settings, load frames and spawn the opening entities
    pub fn new(canvas: C, frames: &dyn FrameSource, settings: Settings) -> Result<Self> {
        settings.validate()?;
        let rocket = frames.load_category(ROCKET)?;
        let garbage = frames.load_category(GARBAGE)?;

        let seed = settings.seed.unwrap_or_else(|| rand::rng().random());
        let mut world = World::new(seed, settings.start_year);
        let bounds = canvas.bounds();
        log::info!(
            "New game: seed {}, surface {}x{}, {} rocket / {} garbage frames",
            seed,
            bounds.0,
            bounds.1,
            rocket.len(),
            garbage.len()
        );

        let mut scheduler = Scheduler::new();
        for _ in 0..settings.star_count {
            scheduler.add(Star::random(&mut world, bounds, settings.star_max_offset));
        }
        scheduler.add(GarbageSpawner::new(garbage));
        scheduler.add(ProgressionClock::new());
        scheduler.add(YearDisplay::new());

        let size = (
            rocket.iter().map(|f| f.rows()).max().unwrap_or(0),
            rocket.iter().map(|f| f.columns()).max().unwrap_or(0),
        );
        scheduler.add(Craft::new(rocket, Craft::start_position(bounds, size))?);

        Ok(Self {
            canvas,
            scheduler,
            obstacles: ObstacleRegistry::new(),
            world,
            settings,
        })
    }

    /// One tick of simulation followed by one presented frame
    pub fn step(&mut self) -> Result<TickReport> {
        let mut env = Env {
            canvas: &mut self.canvas,
            obstacles: &mut self.obstacles,
            world: &mut self.world,
            settings: &self.settings,
        };
        let report = self.scheduler.run_tick(&mut env);
        self.canvas.present()?;
        Ok(report)
    }

    /// Step at the configured rate until the player quits
    pub fn run(&mut self) -> Result<()> {
        let interval = self.settings.tick_interval();
        let mut deadline = Instant::now();

        while !self.canvas.should_quit() {
            self.step()?;

            deadline += interval;
            let now = Instant::now();
            if deadline > now {
                thread::sleep(deadline - now);
            } else {
                // Running behind; don't try to catch up
                deadline = now;
            }
        }

        log::info!(
            "Session over at tick {} (year {}): {:?}",
            self.scheduler.tick().0,
            self.world.year,
            self.world.stats
        );
        Ok(())
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn obstacles(&self) -> &ObstacleRegistry {
        &self.obstacles
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn is_over(&self) -> bool {
        self.world.game_over
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{BuiltinFrames, Frame};
    use crate::error::Error;
    use crate::platform::{Controls, MemoryCanvas};

    fn settings() -> Settings {
        Settings {
            tick_interval_ms: 1,
            star_count: 20,
            seed: Some(42),
            ..Default::default()
        }
    }

    fn game(settings: Settings) -> Game<MemoryCanvas> {
        Game::new(MemoryCanvas::new(24, 80), &BuiltinFrames, settings).unwrap()
    }

    /// Source that has rocket frames but no garbage
    struct RocketOnly;

    impl FrameSource for RocketOnly {
        fn list_available(&self, category: &str) -> Result<Vec<String>> {
            BuiltinFrames.list_available(category).map(|names| {
                if category == ROCKET { names } else { Vec::new() }
            })
        }

        fn load_frame(&self, category: &str, name: &str) -> Result<Frame> {
            BuiltinFrames.load_frame(category, name)
        }
    }

    #[test]
    fn test_opening_entities() {
        let game = game(settings());
        let scheduler = game.scheduler();
        assert_eq!(scheduler.count("star"), 20);
        assert_eq!(scheduler.count("garbage_spawner"), 1);
        assert_eq!(scheduler.count("clock"), 1);
        assert_eq!(scheduler.count("year_display"), 1);
        assert_eq!(scheduler.count("craft"), 1);
        assert_eq!(game.world().year, 1957);
    }

    #[test]
    fn test_missing_garbage_frames_is_fatal() {
        let result = Game::new(MemoryCanvas::new(24, 80), &RocketOnly, settings());
        assert!(matches!(result, Err(Error::MissingFrames { .. })));
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let bad = Settings {
            ticks_per_year: 0,
            ..settings()
        };
        let result = Game::new(MemoryCanvas::new(24, 80), &BuiltinFrames, bad);
        assert!(matches!(result, Err(Error::InvalidSettings(_))));
    }

    #[test]
    fn test_step_presents_every_tick() {
        let mut game = game(settings());
        for expected in 1..=5 {
            let report = game.step().unwrap();
            assert_eq!(report.tick.0, expected);
        }
        assert_eq!(game.canvas().presented(), 5);
    }

    #[test]
    fn test_run_stops_on_quit() {
        let mut game = game(settings());
        game.canvas_mut().quit_after(3);
        game.run().unwrap();
        assert_eq!(game.canvas().presented(), 3);
        assert_eq!(game.scheduler().tick().0, 3);
    }

    #[test]
    fn test_same_seed_same_run() {
        let script = [
            Controls {
                columns: 1,
                ..Default::default()
            },
            Controls {
                rows: -1,
                columns: 0,
                fire: true,
            },
        ];
        let play = || {
            let mut game = game(Settings {
                start_year: 2020,
                ..settings()
            });
            for controls in script.iter().cycle().take(60) {
                game.canvas_mut().push_input(*controls);
                game.step().unwrap();
            }
            (game.canvas().grid().clone(), game.world().stats)
        };
        assert_eq!(play(), play());
    }

    #[test]
    fn test_year_advances_during_play() {
        let mut game = game(settings());
        let ticks = game.settings().ticks_per_year as usize;
        for _ in 0..ticks * 3 + 1 {
            game.step().unwrap();
        }
        assert_eq!(game.world().year, 1960);
        assert!(!game.is_over());
    }
}
