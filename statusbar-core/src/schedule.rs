// statusbar-core/src/schedule.rs
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::{Duration, Instant};

/// Single-threaded deadline queue driven by the host tick.
///
/// Tasks run when `run_due` is called with a time at or past their deadline,
/// in deadline order (scheduling order on ties). Nothing runs synchronously
/// at schedule time, even with a zero delay - a zero-delay task fires on the
/// next tick.
#[derive(Clone)]
pub struct Scheduler {
    inner: Rc<RefCell<SchedulerInner>>,
}

#[derive(Default)]
struct SchedulerInner {
    tasks: Vec<Task>,
    next_id: u64,
}

struct Task {
    id: u64,
    deadline: Instant,
    run: Box<dyn FnOnce()>,
}

/// Cancellation handle for one scheduled task.
///
/// Dropping the handle leaves the task scheduled; `cancel` removes it from
/// the queue outright, so a cancelled callback never runs. Cancelling a task
/// that already fired, or cancelling twice, is a no-op.
pub struct TaskHandle {
    scheduler: Weak<RefCell<SchedulerInner>>,
    id: u64,
    cancelled: bool,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(SchedulerInner::default())),
        }
    }

    pub fn schedule(&self, delay: Duration, run: impl FnOnce() + 'static) -> TaskHandle {
        self.schedule_at(Instant::now() + delay, run)
    }

    pub fn schedule_at(&self, deadline: Instant, run: impl FnOnce() + 'static) -> TaskHandle {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.tasks.push(Task {
            id,
            deadline,
            run: Box::new(run),
        });

        TaskHandle {
            scheduler: Rc::downgrade(&self.inner),
            id,
            cancelled: false,
        }
    }

    /// Run every task whose deadline is at or before `now`, earliest deadline
    /// first. The queue borrow is released before each callback runs, so
    /// callbacks may schedule or cancel freely.
    pub fn run_due(&self, now: Instant) {
        loop {
            let task = {
                let mut inner = self.inner.borrow_mut();
                let due = inner
                    .tasks
                    .iter()
                    .enumerate()
                    .filter(|(_, task)| task.deadline <= now)
                    .min_by_key(|(_, task)| (task.deadline, task.id))
                    .map(|(index, _)| index);

                match due {
                    Some(index) => inner.tasks.remove(index),
                    None => break,
                }
            };

            (task.run)();
        }
    }

    pub fn pending(&self) -> usize {
        self.inner.borrow().tasks.len()
    }
}

impl TaskHandle {
    /// Remove the task from the queue so its callback never runs.
    pub fn cancel(&mut self) {
        if self.cancelled {
            return;
        }
        self.cancelled = true;

        if let Some(inner) = self.scheduler.upgrade() {
            inner.borrow_mut().tasks.retain(|task| task.id != self.id);
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder() -> (Rc<RefCell<Vec<&'static str>>>, impl Fn(&'static str) -> Box<dyn FnOnce()>) {
        let log: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));
        let source = log.clone();
        let record = move |label: &'static str| -> Box<dyn FnOnce()> {
            let log = source.clone();
            Box::new(move || log.borrow_mut().push(label))
        };
        (log, record)
    }

    #[test]
    fn test_runs_in_deadline_order() {
        let scheduler = Scheduler::new();
        let (log, record) = recorder();
        let base = Instant::now();

        scheduler.schedule_at(base + Duration::from_millis(20), record("late"));
        scheduler.schedule_at(base + Duration::from_millis(10), record("early"));

        scheduler.run_due(base + Duration::from_millis(50));
        assert_eq!(*log.borrow(), vec!["early", "late"]);
    }

    #[test]
    fn test_equal_deadlines_run_in_scheduling_order() {
        let scheduler = Scheduler::new();
        let (log, record) = recorder();
        let base = Instant::now();

        scheduler.schedule_at(base, record("a"));
        scheduler.schedule_at(base, record("b"));

        scheduler.run_due(base);
        assert_eq!(*log.borrow(), vec!["a", "b"]);
    }

    #[test]
    fn test_not_yet_due_tasks_wait() {
        let scheduler = Scheduler::new();
        let (log, record) = recorder();
        let base = Instant::now();

        scheduler.schedule_at(base + Duration::from_millis(100), record("later"));

        scheduler.run_due(base + Duration::from_millis(10));
        assert!(log.borrow().is_empty());
        assert_eq!(scheduler.pending(), 1);

        scheduler.run_due(base + Duration::from_millis(100));
        assert_eq!(*log.borrow(), vec!["later"]);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_zero_delay_is_not_synchronous() {
        let scheduler = Scheduler::new();
        let (log, record) = recorder();

        scheduler.schedule(Duration::ZERO, record("tick"));
        assert!(log.borrow().is_empty());

        scheduler.run_due(Instant::now());
        assert_eq!(*log.borrow(), vec!["tick"]);
    }

    #[test]
    fn test_cancel_prevents_callback() {
        let scheduler = Scheduler::new();
        let (log, record) = recorder();
        let base = Instant::now();

        let mut handle = scheduler.schedule_at(base, record("never"));
        handle.cancel();
        handle.cancel();

        scheduler.run_due(base + Duration::from_secs(1));
        assert!(log.borrow().is_empty());
        assert!(handle.is_cancelled());
    }

    #[test]
    fn test_callback_may_schedule_more_work() {
        let scheduler = Scheduler::new();
        let (log, record) = recorder();
        let base = Instant::now();

        let nested = scheduler.clone();
        let inner = record("inner");
        scheduler.schedule_at(base, move || {
            nested.schedule_at(base + Duration::from_secs(1), inner);
        });

        scheduler.run_due(base);
        assert!(log.borrow().is_empty());
        assert_eq!(scheduler.pending(), 1);

        scheduler.run_due(base + Duration::from_secs(1));
        assert_eq!(*log.borrow(), vec!["inner"]);
    }
}
