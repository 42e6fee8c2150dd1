// =============================================================================
// OffGriid Web - Form Components
// =============================================================================
// Table of Contents:
// 1. TextInput
// 2. TextArea
// =============================================================================

use leptos::prelude::*;

// -----------------------------------------------------------------------------
// 1. TextInput
// -----------------------------------------------------------------------------

/// Text input field with label.
#[component]
pub fn TextInput(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] input_type: String,
    #[prop(optional)] max_length: Option<usize>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let input_type = if input_type.is_empty() { "text".to_string() } else { input_type };

    view! {
        <div class="form-field">
            <label for=id.clone() class="form-label">{label}</label>
            <input
                id=id
                type=input_type
                class="form-input"
                placeholder=placeholder
                maxlength=max_length.map(|n| n.to_string())
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:input=move |e| {
                    value.set(event_target_value(&e));
                }
            />
        </div>
    }
}

// -----------------------------------------------------------------------------
// 2. TextArea
// -----------------------------------------------------------------------------

/// Multi-line text area.
#[component]
pub fn TextArea(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional)] rows: u32,
    #[prop(optional)] max_length: Option<usize>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    let rows = if rows == 0 { 5 } else { rows };

    view! {
        <div class="form-field">
            <label for=id.clone() class="form-label">{label}</label>
            <textarea
                id=id
                class="form-textarea"
                placeholder=placeholder
                rows=rows
                maxlength=max_length.map(|n| n.to_string())
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:input=move |e| {
                    value.set(event_target_value(&e));
                }
            />
        </div>
    }
}
