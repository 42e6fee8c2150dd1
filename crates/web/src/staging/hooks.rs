// =============================================================================
// OffGriid Web - Stage Hooks
// =============================================================================
// Leptos glue: expose the current stage as a signal and release every pending
// callback when the owning component is torn down.
// =============================================================================

use leptos::prelude::*;

use super::{activate_after, schedule_stages, Activation, BrowserFrames, BrowserTimers, Stage, StagePlan, StageTracker};
use crate::config::StagingConfig;

/// Start the stage scheduler for the calling component.
///
/// The returned signal starts at `Initial` and only moves forward. Pending
/// transitions are cancelled when the component's owner is cleaned up.
pub fn use_stage(config: StagingConfig) -> ReadSignal<Stage> {
    let stage = RwSignal::new(Stage::Initial);

    let tracker = StageTracker::new();
    tracker.subscribe(move |entered| stage.set(entered));

    let idle = super::idle_source(&config);
    let plan = schedule_stages(&BrowserFrames, idle.as_ref(), &tracker);

    let plan = StoredValue::new_local(Some::<StagePlan>(plan));
    on_cleanup(move || {
        plan.update_value(|plan| {
            plan.take();
        });
    });

    stage.read_only()
}

/// A flag that turns on `delay_ms` after `stage` reaches `at`.
///
/// Used to keep the most expensive effect out of the way of other work that
/// starts on the same stage.
pub fn use_stage_delay(stage: ReadSignal<Stage>, at: Stage, delay_ms: u32) -> ReadSignal<bool> {
    let ready = RwSignal::new(false);
    let pending = StoredValue::new_local(None::<Activation>);

    Effect::new(move |_| {
        if stage.get() < at || ready.get_untracked() {
            return;
        }
        if pending.with_value(|p| p.is_some()) {
            return;
        }
        let activation = activate_after(&BrowserTimers, delay_ms, move || ready.set(true));
        pending.set_value(Some(activation));
    });

    on_cleanup(move || {
        pending.update_value(|p| {
            p.take();
        });
    });

    ready.read_only()
}
