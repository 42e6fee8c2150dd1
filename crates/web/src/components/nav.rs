// =============================================================================
// OffGriid Web - Navigation Component
// =============================================================================
// Fixed header with the contact trigger and a slide-out menu drawer.
// Mounted once the first paint has completed.
// =============================================================================

use leptos::prelude::*;

use crate::components::common::{Button, ButtonVariant, CloseIcon};
use crate::config;

/// Entry of the menu drawer.
struct MenuItem {
    label: &'static str,
    href: &'static str,
    external: bool,
}

static MENU_ITEMS: [MenuItem; 4] = [
    MenuItem { label: "Home", href: "#", external: false },
    MenuItem { label: "About Us", href: "#about", external: false },
    MenuItem { label: "Docs", href: config::DOCS_URL, external: true },
    MenuItem { label: "Contact", href: "#footer", external: false },
];

/// Header navigation bar.
///
/// # Arguments
/// * `on_contact` - Run when "Let's Talk" is pressed
#[component]
pub fn Navigation(#[prop(into)] on_contact: Callback<()>) -> impl IntoView {
    // Drawer state
    let menu_open = RwSignal::new(false);
    let close_menu = move || menu_open.set(false);

    view! {
        <header class="site-header">
            <nav class="site-nav">
                <a href="#" class="nav-logo">
                    "Off Gr"<span class="logo-accent">"ii"</span>"d."
                </a>

                <div class="nav-actions">
                    <Button
                        variant=ButtonVariant::Outline
                        on_click=Callback::new(move |_: ()| on_contact.run(()))
                    >
                        "Let's Talk"
                    </Button>
                    <Button
                        variant=ButtonVariant::Ghost
                        on_click=Callback::new(move |_: ()| menu_open.set(true))
                    >
                        "Menu"
                    </Button>
                </div>
            </nav>
        </header>

        // Menu overlay
        <div class=move || if menu_open.get() { "menu-overlay open" } else { "menu-overlay" }>
            <div class="menu-backdrop" on:click=move |_| close_menu()></div>

            <aside class="menu-panel" aria-hidden=move || (!menu_open.get()).to_string()>
                <button class="menu-close" aria-label="Close menu" on:click=move |_| close_menu()>
                    <CloseIcon />
                </button>

                <nav class="menu-items">
                    {MENU_ITEMS
                        .iter()
                        .enumerate()
                        .map(|(index, item)| {
                            view! {
                                <a
                                    href=item.href
                                    target=item.external.then_some("_blank")
                                    rel=item.external.then_some("noopener noreferrer")
                                    class="menu-item"
                                    style=format!("animation-delay: {}ms", index * 50)
                                    on:click=move |_| close_menu()
                                >
                                    {item.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>

                <div class="menu-visit">
                    <p class="menu-visit-label">"Visit us"</p>
                    <div class="menu-visit-row">
                        <div class="menu-visit-name">"ZERO BLINK"</div>
                        <a
                            href=config::VISIT_URL
                            target="_blank"
                            rel="noopener noreferrer"
                            class="btn btn-primary"
                        >
                            "Open"
                        </a>
                    </div>
                </div>
            </aside>
        </div>
    }
}
