//! Resumable tasks
//!
//! Every animated entity is a state machine the scheduler resumes once per
//! tick. A resumption either suspends for a number of ticks or finishes.

use crate::error::Result;
use crate::platform::Canvas;
use crate::settings::Settings;

use super::obstacles::ObstacleRegistry;
use super::state::World;

/// Logical time, one fixed interval per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Tick(pub u64);

/// Outcome of one resumption
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Resume again after this many ticks (0 behaves like 1)
    Sleep(u32),
    /// Finished; the task is retired at the end of the tick
    Done,
}

impl Step {
    /// Resume on the next tick
    pub const NEXT: Step = Step::Sleep(1);
}

/// A unit of per-entity behaviour
pub trait Task {
    /// Short kind name for logs and reports
    fn name(&self) -> &'static str;

    /// Advance to the next suspension point
    fn resume(&mut self, ctx: &mut TaskContext<'_>) -> Result<Step>;

    /// Release owned resources; runs on every exit path (done or failed)
    fn retire(&mut self, _ctx: &mut TaskContext<'_>) {}
}

/// Shared state lent to the scheduler for one tick
pub struct Env<'a> {
    pub canvas: &'a mut dyn Canvas,
    pub obstacles: &'a mut ObstacleRegistry,
    pub world: &'a mut World,
    pub settings: &'a Settings,
}

/// What a task may touch during one resumption
pub struct TaskContext<'a> {
    pub tick: Tick,
    pub canvas: &'a mut dyn Canvas,
    pub obstacles: &'a mut ObstacleRegistry,
    pub world: &'a mut World,
    pub settings: &'a Settings,
    pub(super) spawned: &'a mut Vec<Box<dyn Task>>,
}

impl TaskContext<'_> {
    /// Queue a task; it becomes live at the end of the current tick
    pub fn spawn(&mut self, task: impl Task + 'static) {
        self.spawned.push(Box::new(task));
    }

    /// Surface size as `(rows, columns)`
    pub fn bounds(&self) -> (usize, usize) {
        self.canvas.bounds()
    }
}
