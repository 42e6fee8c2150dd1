// =============================================================================
// OffGriid Web - Stage Scheduler
// =============================================================================
// Progressive activation of page features relative to paint and idle time.
//
// Table of Contents:
// 1. Stage
// 2. Stage Tracker
// 3. Scheduled Tasks
// 4. Scheduling Capabilities
// 5. Stage Plan
// 6. Delayed Activation
// =============================================================================

pub mod browser;
pub mod hooks;

pub use browser::{idle_source, BrowserFrames, BrowserTimers, NativeIdle};
pub use hooks::{use_stage, use_stage_delay};

use std::cell::{Cell, RefCell};
use std::rc::Rc;

// -----------------------------------------------------------------------------
// 1. Stage
// -----------------------------------------------------------------------------

/// Phase of progressive feature activation after the initial render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    /// Only above-the-fold content is active.
    #[default]
    Initial = 0,
    /// First paint completed; navigation may activate.
    Painted = 1,
    /// Main thread judged free; everything else may activate.
    Idle = 2,
}

impl Stage {
    /// The stage after this one, if any.
    pub fn next(self) -> Option<Stage> {
        match self {
            Stage::Initial => Some(Stage::Painted),
            Stage::Painted => Some(Stage::Idle),
            Stage::Idle => None,
        }
    }
}

// -----------------------------------------------------------------------------
// 2. Stage Tracker
// -----------------------------------------------------------------------------

type Subscriber = Rc<dyn Fn(Stage)>;

/// Monotonic stage cell with change subscribers.
///
/// Cloning yields another handle to the same cell.
#[derive(Clone, Default)]
pub struct StageTracker {
    inner: Rc<TrackerInner>,
}

#[derive(Default)]
struct TrackerInner {
    current: Cell<Stage>,
    subscribers: RefCell<Vec<Subscriber>>,
}

impl StageTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Stage {
        self.inner.current.get()
    }

    /// Register a callback run once for every stage entered from now on.
    pub fn subscribe(&self, subscriber: impl Fn(Stage) + 'static) {
        self.inner.subscribers.borrow_mut().push(Rc::new(subscriber));
    }

    /// Move forward to `target`, entering every intermediate stage in order.
    ///
    /// Returns the stages entered; empty when `target` is not ahead of the
    /// current stage.
    pub fn advance(&self, target: Stage) -> Vec<Stage> {
        let mut entered = Vec::new();
        while self.current() < target {
            let Some(next) = self.current().next() else {
                break;
            };
            self.inner.current.set(next);
            entered.push(next);
            log::info!("Stage -> {:?}", next);

            // Subscribers may subscribe further while being notified.
            let subscribers: Vec<Subscriber> = self.inner.subscribers.borrow().clone();
            for subscriber in subscribers {
                subscriber(next);
            }
        }
        entered
    }
}

// -----------------------------------------------------------------------------
// 3. Scheduled Tasks
// -----------------------------------------------------------------------------

/// Deferred unit of work handed to a scheduling capability.
pub type Task = Box<dyn FnOnce()>;

/// Handle to a scheduled callback. Dropping it cancels the callback.
#[must_use = "dropping a ScheduledTask cancels it"]
pub struct ScheduledTask {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl ScheduledTask {
    /// Wrap the platform-specific cancellation of a pending callback.
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Handle for work that already ran and needs no cancellation.
    pub fn finished() -> Self {
        Self { cancel: None }
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for ScheduledTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScheduledTask")
            .field("armed", &self.cancel.is_some())
            .finish()
    }
}

/// Liveness flag shared between an owner and the callbacks it scheduled.
///
/// Once the lifeline is dropped, guarded callbacks become no-ops even if the
/// platform failed to cancel them.
struct Lifeline(Rc<Cell<bool>>);

impl Lifeline {
    fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    fn guard(&self, work: impl FnOnce() + 'static) -> Task {
        let alive = Rc::clone(&self.0);
        Box::new(move || {
            if alive.get() {
                work();
            }
        })
    }
}

impl Drop for Lifeline {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

// -----------------------------------------------------------------------------
// 4. Scheduling Capabilities
// -----------------------------------------------------------------------------

/// Runs a task once the next rendering frame is reached.
pub trait FrameSource {
    fn next_frame(&self, task: Task) -> ScheduledTask;
}

/// Runs a task once the main thread has spare capacity.
pub trait IdleSource {
    fn when_idle(&self, task: Task) -> ScheduledTask;
}

/// Runs a task after a fixed delay.
pub trait TimerSource {
    fn after(&self, delay_ms: u32, task: Task) -> ScheduledTask;
}

/// Idle detection for platforms without one: a bounded timer.
#[derive(Clone, Debug)]
pub struct TimerIdle<T> {
    timer: T,
    delay_ms: u32,
}

impl<T: TimerSource> TimerIdle<T> {
    pub fn new(timer: T, delay_ms: u32) -> Self {
        Self { timer, delay_ms }
    }
}

impl<T: TimerSource> IdleSource for TimerIdle<T> {
    fn when_idle(&self, task: Task) -> ScheduledTask {
        self.timer.after(self.delay_ms, task)
    }
}

// -----------------------------------------------------------------------------
// 5. Stage Plan
// -----------------------------------------------------------------------------

/// Pending stage transitions of one page instance.
///
/// Dropping the plan cancels every transition that has not fired yet.
pub struct StagePlan {
    // Declared first so callbacks are disarmed before the handles cancel.
    _lifeline: Lifeline,
    _paint: ScheduledTask,
    _idle: ScheduledTask,
}

/// Schedule `Painted` on the next frame and `Idle` on the idle source.
pub fn schedule_stages(
    frames: &dyn FrameSource,
    idle: &dyn IdleSource,
    tracker: &StageTracker,
) -> StagePlan {
    let lifeline = Lifeline::new();

    let paint_tracker = tracker.clone();
    let paint = frames.next_frame(lifeline.guard(move || {
        paint_tracker.advance(Stage::Painted);
    }));

    let idle_tracker = tracker.clone();
    let idle = idle.when_idle(lifeline.guard(move || {
        idle_tracker.advance(Stage::Idle);
    }));

    StagePlan {
        _lifeline: lifeline,
        _paint: paint,
        _idle: idle,
    }
}

// -----------------------------------------------------------------------------
// 6. Delayed Activation
// -----------------------------------------------------------------------------

/// A one-shot activation scheduled after a fixed delay.
pub struct Activation {
    _lifeline: Lifeline,
    _timer: ScheduledTask,
}

/// Run `on_ready` after `delay_ms`, unless the returned handle is dropped first.
pub fn activate_after(
    timer: &dyn TimerSource,
    delay_ms: u32,
    on_ready: impl FnOnce() + 'static,
) -> Activation {
    let lifeline = Lifeline::new();
    let task = timer.after(delay_ms, lifeline.guard(on_ready));
    Activation {
        _lifeline: lifeline,
        _timer: task,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Virtual-time platform. Frames only run on `render_frame`; idle callbacks
    // run when time advances while the main thread is not busy, or once their
    // ceiling passes.
    #[derive(Clone, Default)]
    struct VirtualPlatform {
        state: Rc<RefCell<PlatformState>>,
    }

    #[derive(Default)]
    struct PlatformState {
        now_ms: u64,
        busy: bool,
        next_id: u64,
        pending: Vec<Pending>,
        idle_ceiling_ms: Option<u64>,
    }

    enum Kind {
        Frame,
        Idle { deadline_ms: Option<u64> },
        Timer { at_ms: u64 },
    }

    struct Pending {
        id: u64,
        kind: Kind,
        task: Task,
    }

    impl VirtualPlatform {
        fn with_idle_ceiling(ceiling_ms: u64) -> Self {
            let platform = Self::default();
            platform.state.borrow_mut().idle_ceiling_ms = Some(ceiling_ms);
            platform
        }

        fn set_busy(&self, busy: bool) {
            self.state.borrow_mut().busy = busy;
        }

        fn now(&self) -> u64 {
            self.state.borrow().now_ms
        }

        fn pending_count(&self) -> usize {
            self.state.borrow().pending.len()
        }

        fn push(&self, kind: Kind, task: Task) -> ScheduledTask {
            let id = {
                let mut state = self.state.borrow_mut();
                state.next_id += 1;
                let id = state.next_id;
                state.pending.push(Pending { id, kind, task });
                id
            };
            let state = Rc::clone(&self.state);
            ScheduledTask::new(move || {
                state.borrow_mut().pending.retain(|p| p.id != id);
            })
        }

        fn take_where(&self, ready: impl Fn(&Kind, &PlatformState) -> bool) -> Vec<Task> {
            let mut state = self.state.borrow_mut();
            let (due, rest): (Vec<Pending>, Vec<Pending>) = std::mem::take(&mut state.pending)
                .into_iter()
                .partition(|p| ready(&p.kind, &state));
            state.pending = rest;
            due.into_iter().map(|p| p.task).collect()
        }

        fn render_frame(&self) {
            for task in self.take_where(|kind, _| matches!(kind, Kind::Frame)) {
                task();
            }
        }

        /// Advance virtual time one millisecond at a time.
        fn advance(&self, ms: u64) {
            for _ in 0..ms {
                self.state.borrow_mut().now_ms += 1;
                let due = self.take_where(|kind, state| match kind {
                    Kind::Frame => false,
                    Kind::Timer { at_ms } => *at_ms <= state.now_ms,
                    Kind::Idle { deadline_ms } => {
                        !state.busy || deadline_ms.is_some_and(|d| d <= state.now_ms)
                    }
                });
                for task in due {
                    task();
                }
            }
        }
    }

    impl FrameSource for VirtualPlatform {
        fn next_frame(&self, task: Task) -> ScheduledTask {
            self.push(Kind::Frame, task)
        }
    }

    impl IdleSource for VirtualPlatform {
        fn when_idle(&self, task: Task) -> ScheduledTask {
            let deadline_ms = self.state.borrow().idle_ceiling_ms.map(|c| self.now() + c);
            self.push(Kind::Idle { deadline_ms }, task)
        }
    }

    impl TimerSource for VirtualPlatform {
        fn after(&self, delay_ms: u32, task: Task) -> ScheduledTask {
            let at_ms = self.now() + u64::from(delay_ms);
            self.push(Kind::Timer { at_ms }, task)
        }
    }

    fn recording_tracker() -> (StageTracker, Rc<RefCell<Vec<Stage>>>) {
        let tracker = StageTracker::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        tracker.subscribe(move |stage| sink.borrow_mut().push(stage));
        (tracker, seen)
    }

    #[test]
    fn test_stages_progress_in_order() {
        let platform = VirtualPlatform::with_idle_ceiling(2_000);
        let (tracker, seen) = recording_tracker();
        let _plan = schedule_stages(&platform, &platform, &tracker);

        assert_eq!(tracker.current(), Stage::Initial);

        platform.render_frame();
        assert_eq!(tracker.current(), Stage::Painted);

        platform.advance(1);
        assert_eq!(tracker.current(), Stage::Idle);
        assert_eq!(*seen.borrow(), vec![Stage::Painted, Stage::Idle]);
    }

    #[test]
    fn test_idle_before_frame_still_enters_painted_first() {
        // Hidden tabs never render a frame.
        let platform = VirtualPlatform::with_idle_ceiling(2_000);
        let (tracker, seen) = recording_tracker();
        let _plan = schedule_stages(&platform, &platform, &tracker);

        platform.advance(5);
        assert_eq!(tracker.current(), Stage::Idle);

        platform.render_frame();
        assert_eq!(tracker.current(), Stage::Idle);
        assert_eq!(*seen.borrow(), vec![Stage::Painted, Stage::Idle]);
    }

    #[test]
    fn test_teardown_before_any_transition() {
        let platform = VirtualPlatform::with_idle_ceiling(2_000);
        let (tracker, seen) = recording_tracker();
        let plan = schedule_stages(&platform, &platform, &tracker);
        assert_eq!(platform.pending_count(), 2);

        drop(plan);
        assert_eq!(platform.pending_count(), 0);

        platform.render_frame();
        platform.advance(5_000);
        assert_eq!(tracker.current(), Stage::Initial);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_teardown_after_paint_cancels_idle() {
        let platform = VirtualPlatform::with_idle_ceiling(2_000);
        platform.set_busy(true);
        let (tracker, seen) = recording_tracker();
        let plan = schedule_stages(&platform, &platform, &tracker);

        platform.render_frame();
        drop(plan);
        platform.set_busy(false);
        platform.advance(5_000);

        assert_eq!(*seen.borrow(), vec![Stage::Painted]);
    }

    #[test]
    fn test_guarded_callback_ignored_when_platform_cannot_cancel() {
        // A platform whose cancellation does nothing.
        struct LeakyFrames(RefCell<Vec<Task>>);
        impl FrameSource for LeakyFrames {
            fn next_frame(&self, task: Task) -> ScheduledTask {
                self.0.borrow_mut().push(task);
                ScheduledTask::finished()
            }
        }
        impl IdleSource for LeakyFrames {
            fn when_idle(&self, task: Task) -> ScheduledTask {
                self.0.borrow_mut().push(task);
                ScheduledTask::finished()
            }
        }

        let leaky = LeakyFrames(RefCell::new(Vec::new()));
        let (tracker, seen) = recording_tracker();
        drop(schedule_stages(&leaky, &leaky, &tracker));

        for task in leaky.0.take() {
            task();
        }
        assert_eq!(tracker.current(), Stage::Initial);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_timer_fallback_reaches_idle_under_busy_main_thread() {
        let platform = VirtualPlatform::default();
        platform.set_busy(true);
        let fallback = TimerIdle::new(platform.clone(), 100);
        let (tracker, _) = recording_tracker();
        let _plan = schedule_stages(&platform, &fallback, &tracker);

        platform.advance(99);
        assert!(tracker.current() < Stage::Idle);

        platform.advance(1);
        assert_eq!(tracker.current(), Stage::Idle);
    }

    #[test]
    fn test_native_idle_respects_ceiling_under_load() {
        let platform = VirtualPlatform::with_idle_ceiling(2_000);
        platform.set_busy(true);
        let (tracker, _) = recording_tracker();
        let _plan = schedule_stages(&platform, &platform, &tracker);

        platform.render_frame();
        platform.advance(1_999);
        assert_eq!(tracker.current(), Stage::Painted);

        platform.advance(1);
        assert_eq!(tracker.current(), Stage::Idle);
    }

    #[test]
    fn test_advance_never_regresses() {
        let tracker = StageTracker::new();
        assert_eq!(tracker.advance(Stage::Idle), vec![Stage::Painted, Stage::Idle]);
        assert!(tracker.advance(Stage::Painted).is_empty());
        assert!(tracker.advance(Stage::Initial).is_empty());
        assert_eq!(tracker.current(), Stage::Idle);
    }

    #[test]
    fn test_subscriber_can_subscribe_during_notification() {
        let tracker = StageTracker::new();
        let late = Rc::new(Cell::new(0));
        let (inner, late_hits) = (tracker.clone(), Rc::clone(&late));
        tracker.subscribe(move |stage| {
            if stage == Stage::Painted {
                let hits = Rc::clone(&late_hits);
                inner.subscribe(move |_| hits.set(hits.get() + 1));
            }
        });

        tracker.advance(Stage::Idle);
        assert_eq!(late.get(), 1);
    }

    #[test]
    fn test_delayed_activation() {
        let platform = VirtualPlatform::default();
        let fired = Rc::new(Cell::new(false));
        let flag = Rc::clone(&fired);
        let activation = activate_after(&platform, 300, move || flag.set(true));

        platform.advance(299);
        assert!(!fired.get());
        platform.advance(1);
        assert!(fired.get());
        drop(activation);
    }

    #[test]
    fn test_delayed_activation_cancelled_on_drop() {
        let platform = VirtualPlatform::default();
        let fired = Rc::new(Cell::new(false));
        let flag = Rc::clone(&fired);
        let activation = activate_after(&platform, 300, move || flag.set(true));

        platform.advance(150);
        drop(activation);
        platform.advance(1_000);
        assert!(!fired.get());
    }

    #[test]
    fn test_stage_ordering() {
        assert!(Stage::Initial < Stage::Painted);
        assert!(Stage::Painted < Stage::Idle);
        assert_eq!(Stage::Idle.next(), None);
        assert_eq!(Stage::Initial.next(), Some(Stage::Painted));
    }
}
