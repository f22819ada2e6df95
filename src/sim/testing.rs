//! Headless harness for task tests

use crate::platform::MemoryCanvas;
use crate::settings::Settings;

use super::obstacles::ObstacleRegistry;
use super::scheduler::{Scheduler, TickReport};
use super::state::World;
use super::task::Env;

pub(crate) struct Harness {
    pub canvas: MemoryCanvas,
    pub obstacles: ObstacleRegistry,
    pub world: World,
    pub settings: Settings,
    pub scheduler: Scheduler,
}

impl Harness {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self::with_settings(rows, columns, Settings::default())
    }

    pub fn with_settings(rows: usize, columns: usize, settings: Settings) -> Self {
        Self {
            canvas: MemoryCanvas::new(rows, columns),
            obstacles: ObstacleRegistry::new(),
            world: World::new(7, settings.start_year),
            settings,
            scheduler: Scheduler::new(),
        }
    }

    pub fn tick(&mut self) -> TickReport {
        let mut env = Env {
            canvas: &mut self.canvas,
            obstacles: &mut self.obstacles,
            world: &mut self.world,
            settings: &self.settings,
        };
        self.scheduler.run_tick(&mut env)
    }

    pub fn run(&mut self, ticks: usize) -> Vec<TickReport> {
        (0..ticks).map(|_| self.tick()).collect()
    }
}

/// Total admissions of a task kind across reports
pub(crate) fn admitted(reports: &[TickReport], name: &str) -> usize {
    reports.iter().map(|r| r.admitted_named(name)).sum()
}
