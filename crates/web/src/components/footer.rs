// =============================================================================
// OffGriid Web - Footer Component
// =============================================================================
// Addresses, social links, newsletter field and "Back to top".
// =============================================================================

use leptos::prelude::*;

use crate::components::common::{Button, ButtonVariant};
use crate::utils::scroll_to_top;

const CONTACT_ADDRESSES: [&str; 2] = ["hello@offgriid.dev", "business@offgriid.dev"];

const SOCIAL_LINKS: [(&str, &str); 3] = [
    ("Twitter", "#"),
    ("Instagram", "#"),
    ("LinkedIn", "#"),
];

// -----------------------------------------------------------------------------
// Footer Component
// -----------------------------------------------------------------------------

/// Page footer. Anchored as `#footer` for the menu's Contact entry.
#[component]
pub fn Footer() -> impl IntoView {
    let email = RwSignal::new(String::new());

    view! {
        <footer id="footer" class="footer">
            <div class="container">
                <div class="footer-grid">
                    // Brand
                    <div class="footer-brand">
                        <h3 class="footer-logo">"OffGriid"</h3>
                        <address class="footer-address">
                            "Distributed by design"<br />
                            "No central servers"<br />
                            "Anywhere the mesh reaches"
                        </address>
                    </div>

                    // Contact
                    <div class="footer-col">
                        <h4 class="footer-col-title">"Contact"</h4>
                        {CONTACT_ADDRESSES
                            .iter()
                            .map(|address| {
                                view! {
                                    <a href=format!("mailto:{}", address) class="footer-link">
                                        {*address}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>

                    // Social
                    <div class="footer-col">
                        <h4 class="footer-col-title">"Social"</h4>
                        <div class="footer-social">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|(name, href)| {
                                    view! {
                                        <a href=*href class="footer-link" aria-label=*name>
                                            {*name}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    // Newsletter
                    <div class="footer-col">
                        <h4 class="footer-col-title">"Newsletter"</h4>
                        <div class="newsletter">
                            <input
                                type="email"
                                class="form-input newsletter-input"
                                placeholder="Your email"
                                prop:value=move || email.get()
                                on:input=move |e| email.set(event_target_value(&e))
                            />
                            <Button variant=ButtonVariant::Outline class="newsletter-submit">
                                "→"
                            </Button>
                        </div>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p class="footer-copyright">"© 2025 OffGriid. All rights reserved."</p>
                    <Button
                        variant=ButtonVariant::Ghost
                        class="back-to-top"
                        on_click=Callback::new(move |_: ()| scroll_to_top())
                    >
                        "Back to top ↑"
                    </Button>
                </div>
            </div>
        </footer>
    }
}
