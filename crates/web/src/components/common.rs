// =============================================================================
// OffGriid Web - Common UI Components
// =============================================================================
// Table of Contents:
// 1. Button
// 2. Close Icon
// 3. Section Tag
// =============================================================================

use leptos::prelude::*;

// -----------------------------------------------------------------------------
// 1. Button
// -----------------------------------------------------------------------------

/// Button variant styles.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Ghost,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Outline => "btn btn-outline",
            ButtonVariant::Ghost => "btn btn-ghost",
        }
    }
}

/// Pill-shaped button.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] class: String,
    #[prop(optional)] submit: bool,
    #[prop(optional, into)] disabled: Option<Signal<bool>>,
    #[prop(optional, into)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let handle_click = move |_| {
        if let Some(callback) = &on_click {
            callback.run(());
        }
    };

    view! {
        <button
            type=if submit { "submit" } else { "button" }
            class=format!("{} {}", variant.class(), class)
            disabled=move || disabled.map(|d| d.get()).unwrap_or(false)
            on:click=handle_click
        >
            {children()}
        </button>
    }
}

// -----------------------------------------------------------------------------
// 2. Close Icon
// -----------------------------------------------------------------------------

/// "X" glyph used by the drawer, modal and step sheets.
#[component]
pub fn CloseIcon() -> impl IntoView {
    view! {
        <svg class="icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M18 6L6 18"></path>
            <path d="M6 6l12 12"></path>
        </svg>
    }
}

// -----------------------------------------------------------------------------
// 3. Section Tag
// -----------------------------------------------------------------------------

/// Accent dot followed by an uppercase label.
#[component]
pub fn SectionTag(#[prop(into)] text: String) -> impl IntoView {
    view! {
        <div class="section-tag">
            <span class="accent-dot"></span>
            <span class="section-tag-text">{text}</span>
        </div>
    }
}
