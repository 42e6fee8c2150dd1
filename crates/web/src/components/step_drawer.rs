// =============================================================================
// OffGriid Web - "How It Works" Step Drawers
// =============================================================================
// Table of Contents:
// 1. Sheet (bottom drawer)
// 2. Step Trigger
// 3. Download Step
// 4. Info Step
// =============================================================================

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::common::{Button, ButtonVariant};
use crate::utils::{copy_to_clipboard, step_label};

/// How long "Hash copied" stays visible.
const COPIED_RESET_MS: u32 = 2_000;

const DEFAULT_INSTRUCTIONS: [&str; 3] = [
    "Download the APK file",
    "Allow installation from unknown sources if prompted",
    "Complete the installation",
];

// -----------------------------------------------------------------------------
// 1. Sheet
// -----------------------------------------------------------------------------

/// Bottom sheet with a backdrop. Content stays mounted while closed.
#[component]
fn Sheet(open: RwSignal<bool>, #[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <div class=move || if open.get() { "sheet open" } else { "sheet" }>
            <div class="sheet-backdrop" on:click=move |_| open.set(false)></div>
            <div class="sheet-content" role="dialog" aria-label=title>
                <div class="sheet-handle"></div>
                {children()}
                <Button
                    variant=ButtonVariant::Outline
                    class="sheet-done"
                    on_click=Callback::new(move |_: ()| open.set(false))
                >
                    "Got it"
                </Button>
            </div>
        </div>
    }
}

// -----------------------------------------------------------------------------
// 2. Step Trigger
// -----------------------------------------------------------------------------

#[component]
fn StepTrigger(
    open: RwSignal<bool>,
    step: u32,
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    #[prop(into)] hint: String,
) -> impl IntoView {
    view! {
        <button class="step-trigger" on:click=move |_| open.set(true)>
            <div class="step-number">{step_label(step)}</div>
            <h4 class="step-title">{title}</h4>
            <p class="step-description">{description}</p>
            <div class="step-hint">{hint}</div>
        </button>
    }
}

// -----------------------------------------------------------------------------
// 3. Download Step
// -----------------------------------------------------------------------------

/// Step offering the APK download and its SHA-256 hash.
#[component]
pub fn StepDrawer(
    step: u32,
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    #[prop(into)] download_url: String,
    #[prop(into)] file_name: String,
    #[prop(into)] sha256: String,
    #[prop(optional)] instructions: Option<Vec<String>>,
) -> impl IntoView {
    let open = RwSignal::new(false);
    let copied = RwSignal::new(false);
    let instructions = instructions
        .unwrap_or_else(|| DEFAULT_INSTRUCTIONS.iter().map(|s| s.to_string()).collect());

    let hash = sha256.clone();
    let copy_hash = move |_| {
        let hash = hash.clone();
        spawn_local(async move {
            match copy_to_clipboard(&hash).await {
                Ok(()) => {
                    copied.set(true);
                    Timeout::new(COPIED_RESET_MS, move || {
                        let _ = copied.try_set(false);
                    })
                    .forget();
                }
                Err(e) => log::warn!("Copy hash failed: {}", e),
            }
        });
    };

    view! {
        <StepTrigger
            open=open
            step=step
            title=title.clone()
            description=description.clone()
            hint="View details"
        />

        <Sheet open=open title=title.clone()>
            <h3 class="sheet-title">{title}</h3>
            <p class="sheet-description">{description}</p>

            <div class="download-card">
                <div class="download-meta">
                    <h5>"Android APK"</h5>
                    <p class="muted">{file_name.clone()}</p>
                </div>
                <a href=download_url download=file_name class="btn btn-primary btn-block">
                    "Download APK"
                </a>
                <p class="muted small">"Android will request installation permission"</p>
            </div>

            <ol class="instruction-list">
                {instructions
                    .into_iter()
                    .map(|line| view! { <li>{line}</li> })
                    .collect_view()}
            </ol>

            <div class="integrity">
                <h5>"File integrity (optional)"</h5>
                <p class="muted small">
                    "Advanced users can verify this SHA-256 hash to ensure the file hasn't been modified."
                </p>
                <code class="hash">{sha256}</code>
                <button class="btn btn-ghost btn-sm" on:click=copy_hash>
                    {move || if copied.get() { "Hash copied" } else { "Copy hash" }}
                </button>
            </div>
        </Sheet>
    }
}

// -----------------------------------------------------------------------------
// 4. Info Step
// -----------------------------------------------------------------------------

/// Step with a numbered list of details.
#[component]
pub fn InfoStep(
    step: u32,
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    details: Vec<&'static str>,
) -> impl IntoView {
    let open = RwSignal::new(false);

    view! {
        <StepTrigger
            open=open
            step=step
            title=title.clone()
            description=description.clone()
            hint="Learn more"
        />

        <Sheet open=open title=title.clone()>
            <h3 class="sheet-title">{title}</h3>
            <p class="sheet-description">{description}</p>
            <div class="detail-list">
                {details
                    .into_iter()
                    .enumerate()
                    .map(|(i, detail)| {
                        view! {
                            <div class="detail-row">
                                <span class="detail-index">{i + 1}</span>
                                <p class="muted">{detail}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </Sheet>
    }
}
