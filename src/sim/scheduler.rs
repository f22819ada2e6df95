//! Cooperative scheduler
//!
//! Each tick every live task is resumed exactly once, in the order it became
//! live. The live list is never mutated while it is walked: spawns land in a
//! pending queue and finished tasks are only flagged. Both are applied after
//! the pass, so a task spawned during tick N first runs in tick N+1.

use super::task::{Env, Step, Task, TaskContext, Tick};

/// Handle to a live task, assigned when it is admitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

struct Slot {
    id: TaskId,
    task: Box<dyn Task>,
    /// Ticks left until the task body runs again
    sleep: u32,
    last_resumed: Option<Tick>,
    finished: bool,
}

/// What happened during one tick
#[derive(Debug, Clone, Default)]
pub struct TickReport {
    pub tick: Tick,
    /// Every task resumed this tick, in resumption order
    pub resumed: Vec<TaskId>,
    /// Tasks retired at the end of this tick
    pub retired: Vec<TaskId>,
    /// Tasks that failed (also listed in `retired`)
    pub failed: Vec<TaskId>,
    /// Tasks spawned this tick, live from the next one
    pub admitted: Vec<(TaskId, &'static str)>,
}

impl TickReport {
    /// Number of admitted tasks with the given kind name
    pub fn admitted_named(&self, name: &str) -> usize {
        self.admitted.iter().filter(|(_, n)| *n == name).count()
    }
}

#[derive(Default)]
pub struct Scheduler {
    slots: Vec<Slot>,
    pending: Vec<Box<dyn Task>>,
    tick: Tick,
    next_id: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a task to the live set immediately (setup, outside a tick)
    pub fn add(&mut self, task: impl Task + 'static) -> TaskId {
        self.admit(Box::new(task))
    }

    fn admit(&mut self, task: Box<dyn Task>) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.slots.push(Slot {
            id,
            task,
            sleep: 1,
            last_resumed: None,
            finished: false,
        });
        id
    }

    /// Last completed tick
    pub fn tick(&self) -> Tick {
        self.tick
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.slots.iter().any(|slot| slot.id == id)
    }

    /// Live task ids in resumption order
    pub fn ids(&self) -> impl Iterator<Item = TaskId> + '_ {
        self.slots.iter().map(|slot| slot.id)
    }

    /// Number of live tasks of a kind
    pub fn count(&self, name: &str) -> usize {
        self.slots
            .iter()
            .filter(|slot| slot.task.name() == name)
            .count()
    }

    /// Run one tick over the current live set
    pub fn run_tick(&mut self, env: &mut Env<'_>) -> TickReport {
        self.tick = Tick(self.tick.0 + 1);
        let tick = self.tick;
        let mut report = TickReport {
            tick,
            ..Default::default()
        };

        for slot in &mut self.slots {
            debug_assert_ne!(
                slot.last_resumed,
                Some(tick),
                "task {:?} resumed twice in {:?}",
                slot.id,
                tick
            );
            slot.last_resumed = Some(tick);
            report.resumed.push(slot.id);

            if slot.sleep > 1 {
                slot.sleep -= 1;
                continue;
            }

            let mut ctx = TaskContext {
                tick,
                canvas: &mut *env.canvas,
                obstacles: &mut *env.obstacles,
                world: &mut *env.world,
                settings: env.settings,
                spawned: &mut self.pending,
            };

            match slot.task.resume(&mut ctx) {
                Ok(Step::Sleep(ticks)) => slot.sleep = ticks.max(1),
                Ok(Step::Done) => {
                    slot.task.retire(&mut ctx);
                    slot.finished = true;
                }
                Err(e) => {
                    log::warn!(
                        "Task {} {:?} failed, retiring: {}",
                        slot.task.name(),
                        slot.id,
                        e
                    );
                    slot.task.retire(&mut ctx);
                    slot.finished = true;
                    report.failed.push(slot.id);
                }
            }
        }

        // Apply removals, then admissions
        self.slots.retain(|slot| {
            if slot.finished {
                report.retired.push(slot.id);
            }
            !slot.finished
        });

        for task in std::mem::take(&mut self.pending) {
            let name = task.name();
            let id = self.admit(task);
            log::debug!("Admitted {} {:?} at {:?}", name, id, tick);
            report.admitted.push((id, name));
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::error::{Error, Result};
    use crate::sim::collision::Rect;
    use crate::sim::obstacles::ObstacleId;
    use crate::sim::testing::Harness;

    type Log = Rc<RefCell<Vec<(u64, &'static str)>>>;

    /// Records each body run; spawns a child on its `spawn_at` run
    struct Recorder {
        label: &'static str,
        log: Log,
        runs: u32,
        sleep: u32,
        finish_after: Option<u32>,
        spawn_at: Option<u32>,
    }

    impl Recorder {
        fn new(label: &'static str, log: &Log) -> Self {
            Self {
                label,
                log: log.clone(),
                runs: 0,
                sleep: 1,
                finish_after: None,
                spawn_at: None,
            }
        }
    }

    impl Task for Recorder {
        fn name(&self) -> &'static str {
            self.label
        }

        fn resume(&mut self, ctx: &mut TaskContext<'_>) -> Result<Step> {
            self.runs += 1;
            self.log.borrow_mut().push((ctx.tick.0, self.label));

            if self.spawn_at == Some(self.runs) {
                ctx.spawn(Recorder::new("child", &self.log));
            }
            if self.finish_after == Some(self.runs) {
                return Ok(Step::Done);
            }
            Ok(Step::Sleep(self.sleep))
        }
    }

    /// Owns an obstacle, released on retire
    struct Holder {
        obstacle: Option<ObstacleId>,
        fail: bool,
    }

    impl Task for Holder {
        fn name(&self) -> &'static str {
            "holder"
        }

        fn resume(&mut self, ctx: &mut TaskContext<'_>) -> Result<Step> {
            if self.obstacle.is_none() {
                self.obstacle = Some(ctx.obstacles.register(Rect::cell(0.0, 0.0)));
                return Ok(Step::NEXT);
            }
            if self.fail {
                return Err(Error::Task {
                    task: "holder",
                    reason: "boom".into(),
                });
            }
            Ok(Step::Done)
        }

        fn retire(&mut self, ctx: &mut TaskContext<'_>) {
            if let Some(id) = self.obstacle.take() {
                ctx.obstacles.remove(id);
            }
        }
    }

    #[test]
    fn test_every_live_task_resumed_once_in_order() {
        let log = Log::default();
        let mut fx = Harness::new(10, 10);
        let a = fx.scheduler.add(Recorder::new("a", &log));
        let b = fx.scheduler.add(Recorder::new("b", &log));
        let c = fx.scheduler.add(Recorder::new("c", &log));

        for _ in 0..3 {
            let report = fx.tick();
            assert_eq!(report.resumed, vec![a, b, c]);
        }
        let labels: Vec<_> = log.borrow().iter().map(|(_, l)| *l).collect();
        assert_eq!(labels, ["a", "b", "c", "a", "b", "c", "a", "b", "c"]);
    }

    #[test]
    fn test_spawned_task_joins_next_tick() {
        let log = Log::default();
        let mut fx = Harness::new(10, 10);
        let mut parent = Recorder::new("parent", &log);
        parent.spawn_at = Some(2);
        fx.scheduler.add(parent);

        let first = fx.tick();
        assert!(first.admitted.is_empty());

        let second = fx.tick();
        assert_eq!(second.admitted.len(), 1);
        let (child, name) = second.admitted[0];
        assert_eq!(name, "child");
        assert!(!second.resumed.contains(&child));
        assert!(!log.borrow().contains(&(2, "child")));

        let third = fx.tick();
        assert!(third.resumed.contains(&child));
        assert!(log.borrow().contains(&(3, "child")));
        assert_eq!(*third.resumed.last().unwrap(), child);
    }

    #[test]
    fn test_sleep_counts_down_without_running_body() {
        let log = Log::default();
        let mut fx = Harness::new(10, 10);
        let mut sleeper = Recorder::new("sleeper", &log);
        sleeper.sleep = 3;
        let id = fx.scheduler.add(sleeper);

        for _ in 0..7 {
            let report = fx.tick();
            // Resumed every tick, even while asleep
            assert_eq!(report.resumed, vec![id]);
        }
        let ticks: Vec<_> = log.borrow().iter().map(|(t, _)| *t).collect();
        assert_eq!(ticks, [1, 4, 7]);
    }

    #[test]
    fn test_zero_sleep_behaves_like_one() {
        let log = Log::default();
        let mut fx = Harness::new(10, 10);
        let mut eager = Recorder::new("eager", &log);
        eager.sleep = 0;
        fx.scheduler.add(eager);

        for _ in 0..3 {
            fx.tick();
        }
        assert_eq!(log.borrow().len(), 3);
    }

    #[test]
    fn test_done_task_removed_after_pass() {
        let log = Log::default();
        let mut fx = Harness::new(10, 10);
        let mut short = Recorder::new("short", &log);
        short.finish_after = Some(2);
        let short = fx.scheduler.add(short);
        let long = fx.scheduler.add(Recorder::new("long", &log));

        fx.tick();
        let report = fx.tick();
        assert_eq!(report.resumed, vec![short, long]);
        assert_eq!(report.retired, vec![short]);
        assert!(!fx.scheduler.contains(short));

        let report = fx.tick();
        assert_eq!(report.resumed, vec![long]);
    }

    #[test]
    fn test_failed_task_is_retired_and_cleaned_up() {
        let mut fx = Harness::new(10, 10);
        let log = Log::default();
        let survivor = fx.scheduler.add(Recorder::new("survivor", &log));
        let holder = fx.scheduler.add(Holder {
            obstacle: None,
            fail: true,
        });

        fx.tick();
        assert_eq!(fx.obstacles.len(), 1);

        let report = fx.tick();
        assert_eq!(report.failed, vec![holder]);
        assert_eq!(report.retired, vec![holder]);
        assert!(fx.obstacles.is_empty());
        assert!(fx.scheduler.contains(survivor));

        let report = fx.tick();
        assert_eq!(report.resumed, vec![survivor]);
    }

    #[test]
    fn test_retire_runs_on_normal_completion() {
        let mut fx = Harness::new(10, 10);
        fx.scheduler.add(Holder {
            obstacle: None,
            fail: false,
        });

        fx.tick();
        assert_eq!(fx.obstacles.len(), 1);
        fx.tick();
        assert!(fx.obstacles.is_empty());
        assert!(fx.scheduler.is_empty());
    }

    #[test]
    fn test_no_task_resumed_twice_or_skipped() {
        let log = Log::default();
        let mut fx = Harness::new(10, 10);
        for (i, label) in ["p0", "p1", "p2", "p3"].into_iter().enumerate() {
            let mut task = Recorder::new(label, &log);
            task.spawn_at = Some(i as u32 + 1);
            task.finish_after = Some(6 - i as u32);
            fx.scheduler.add(task);
        }

        for _ in 0..12 {
            let live_before: Vec<_> = fx.scheduler.ids().collect();
            let report = fx.tick();
            assert_eq!(report.resumed, live_before);
            for (id, _) in &report.admitted {
                assert!(!report.resumed.contains(id));
            }
        }
    }
}
