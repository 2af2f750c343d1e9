use crate::event_bus::EventBus;
use crate::frame::Frame;
use crate::task::{FrameTask, TaskControl};

/// Identifies a scheduled task for cancellation. Never reused.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

struct ScheduledTask<Ctx> {
    handle: TaskHandle,
    name: &'static str,
    /// Smaller values run earlier.
    priority: i32,
    insertion: u64,
    task: Box<dyn FrameTask<Ctx>>,
}

/// Runs repeating frame tasks in a deterministic order.
///
/// Total ordering is `(priority, name, insertion order)`, so a frame's work is
/// replayable even when callers register tasks under the same name.
pub struct TaskScheduler<Ctx> {
    next_handle: u64,
    next_insertion: u64,
    tasks: Vec<ScheduledTask<Ctx>>,
}

impl<Ctx> Default for TaskScheduler<Ctx> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Ctx> TaskScheduler<Ctx> {
    pub fn new() -> Self {
        Self {
            next_handle: 0,
            next_insertion: 0,
            tasks: Vec::new(),
        }
    }

    pub fn add_task(&mut self, name: &'static str, task: Box<dyn FrameTask<Ctx>>) -> TaskHandle {
        self.add_task_with_priority(name, 0, task)
    }

    pub fn add_task_with_priority(
        &mut self,
        name: &'static str,
        priority: i32,
        task: Box<dyn FrameTask<Ctx>>,
    ) -> TaskHandle {
        let handle = TaskHandle(self.next_handle);
        self.next_handle = self.next_handle.wrapping_add(1);
        let insertion = self.next_insertion;
        self.next_insertion = self.next_insertion.wrapping_add(1);
        self.tasks.push(ScheduledTask {
            handle,
            name,
            priority,
            insertion,
            task,
        });
        handle
    }

    /// Removes a task before its next tick.
    ///
    /// Returns `false` if the handle is unknown or the task already stopped
    /// itself; cancelling twice is a safe no-op.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.handle != handle);
        self.tasks.len() != before
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Ticks every task once for the given frame, then drops the ones that
    /// returned [`TaskControl::Stop`], emitting a `"task"` event for each.
    pub fn run_frame(&mut self, frame: Frame, ctx: &mut Ctx, bus: &mut EventBus) {
        self.tasks.sort_by(|a, b| {
            a.priority
                .cmp(&b.priority)
                .then_with(|| a.name.cmp(b.name))
                .then_with(|| a.insertion.cmp(&b.insertion))
        });

        let mut stopped: Vec<TaskHandle> = Vec::new();
        for entry in &mut self.tasks {
            match entry.task.tick(frame, ctx, bus) {
                TaskControl::Continue => {}
                TaskControl::Stop => {
                    bus.emit(frame, "task", format!("stopped: {}", entry.name));
                    stopped.push(entry.handle);
                }
            }
        }
        if !stopped.is_empty() {
            self.tasks.retain(|t| !stopped.contains(&t.handle));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TaskScheduler;
    use crate::event_bus::EventBus;
    use crate::frame::Frame;
    use crate::task::{FrameTask, TaskControl};

    struct Append {
        tag: &'static str,
        stop_after: Option<u32>,
        ticks: u32,
    }

    impl Append {
        fn forever(tag: &'static str) -> Self {
            Self {
                tag,
                stop_after: None,
                ticks: 0,
            }
        }

        fn stopping(tag: &'static str, after: u32) -> Self {
            Self {
                tag,
                stop_after: Some(after),
                ticks: 0,
            }
        }
    }

    impl FrameTask<Vec<&'static str>> for Append {
        fn tick(
            &mut self,
            _frame: Frame,
            log: &mut Vec<&'static str>,
            _bus: &mut EventBus,
        ) -> TaskControl {
            log.push(self.tag);
            self.ticks += 1;
            match self.stop_after {
                Some(after) if self.ticks >= after => TaskControl::Stop,
                _ => TaskControl::Continue,
            }
        }
    }

    fn run_one(sched: &mut TaskScheduler<Vec<&'static str>>, frame: Frame) -> Vec<&'static str> {
        let mut log = Vec::new();
        let mut bus = EventBus::new();
        sched.run_frame(frame, &mut log, &mut bus);
        log
    }

    #[test]
    fn runs_tasks_in_stable_name_order() {
        let mut sched = TaskScheduler::new();
        sched.add_task("b", Box::new(Append::forever("b")));
        sched.add_task("a", Box::new(Append::forever("a")));
        assert_eq!(run_one(&mut sched, Frame::first(1.0)), vec!["a", "b"]);
    }

    #[test]
    fn priority_beats_name() {
        let mut sched = TaskScheduler::new();
        sched.add_task_with_priority("a", 10, Box::new(Append::forever("a")));
        sched.add_task_with_priority("z", -1, Box::new(Append::forever("z")));
        assert_eq!(run_one(&mut sched, Frame::first(1.0)), vec!["z", "a"]);
    }

    #[test]
    fn duplicate_names_run_in_insertion_order() {
        let mut sched = TaskScheduler::new();
        sched.add_task("t", Box::new(Append::forever("first")));
        sched.add_task("t", Box::new(Append::forever("second")));
        assert_eq!(
            run_one(&mut sched, Frame::first(1.0)),
            vec!["first", "second"]
        );
    }

    #[test]
    fn cancel_removes_before_next_tick() {
        let mut sched = TaskScheduler::new();
        sched.add_task("keep", Box::new(Append::forever("keep")));
        let doomed = sched.add_task("drop", Box::new(Append::forever("drop")));
        assert!(sched.cancel(doomed));
        assert_eq!(run_one(&mut sched, Frame::first(1.0)), vec!["keep"]);
    }

    #[test]
    fn cancel_unknown_handle_is_a_no_op() {
        let mut sched: TaskScheduler<Vec<&'static str>> = TaskScheduler::new();
        let h = sched.add_task("t", Box::new(Append::stopping("t", 1)));
        let mut log = Vec::new();
        let mut bus = EventBus::new();
        sched.run_frame(Frame::first(1.0), &mut log, &mut bus);
        // The task stopped itself; its handle is now stale.
        assert!(!sched.cancel(h));
        assert!(!sched.cancel(h));
    }

    #[test]
    fn stopped_task_is_removed_and_reported() {
        let mut sched = TaskScheduler::new();
        sched.add_task("once", Box::new(Append::stopping("once", 1)));
        let mut log = Vec::new();
        let mut bus = EventBus::new();
        let frame = Frame::first(1.0);
        sched.run_frame(frame, &mut log, &mut bus);
        assert_eq!(sched.task_count(), 0);
        assert_eq!(log, vec!["once"]);
        assert!(
            bus.events()
                .iter()
                .any(|e| e.kind == "task" && e.message.contains("once"))
        );

        // Nothing left to tick.
        sched.run_frame(frame.next(), &mut log, &mut bus);
        assert_eq!(log, vec!["once"]);
    }
}
