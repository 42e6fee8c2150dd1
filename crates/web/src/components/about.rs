// =============================================================================
// OffGriid Web - About / How It Works Section
// =============================================================================

use leptos::html::Div;
use leptos::prelude::*;

use crate::components::common::SectionTag;
use crate::components::reveal::use_reveal;
use crate::components::step_drawer::{InfoStep, StepDrawer};
use crate::config;

/// CSS classes for a reveal target in its hidden or shown state.
fn reveal_class(base: &'static str, visible: bool) -> String {
    if visible {
        format!("{} reveal shown", base)
    } else {
        format!("{} reveal", base)
    }
}

/// Transition delay style, only applied once the element is shown.
fn stagger(visible: bool, delay_ms: u32) -> String {
    format!("transition-delay: {}ms", if visible { delay_ms } else { 0 })
}

/// Below-the-fold product description.
#[component]
pub fn About() -> impl IntoView {
    let text_ref = NodeRef::<Div>::new();
    let image_ref = NodeRef::<Div>::new();
    let stats_ref = NodeRef::<Div>::new();
    let steps_ref = NodeRef::<Div>::new();

    let text_visible = use_reveal(text_ref);
    let image_visible = use_reveal(image_ref);
    let stats_visible = use_reveal(stats_ref);
    let steps_visible = use_reveal(steps_ref);

    view! {
        <section id="about-section" class="about">
            <div class="about-scrim"></div>

            <div class="container">
                <div class="about-grid">
                    // Left
                    <div class="about-left">
                        <SectionTag text="About OffGriid" />
                        <div node_ref=image_ref class=move || reveal_class("about-image", image_visible.get())>
                            <img
                                src="/mesh.webp"
                                alt="OffGriid mesh network visualization"
                                loading="lazy"
                                decoding="async"
                            />
                        </div>
                    </div>

                    // Right
                    <div class="about-right">
                        <div node_ref=text_ref class=move || reveal_class("about-text", text_visible.get())>
                            <p>
                                "OffGriid is an offline-first, peer-to-peer messaging network built for moments when "
                                "traditional communication infrastructure fails. Using Bluetooth Low Energy mesh "
                                "networking and modern cryptography, devices communicate directly without servers, "
                                "phone numbers, or internet access."
                            </p>
                            <p>
                                "Designed for resilience, privacy, and autonomy, OffGriid operates during blackouts, "
                                "natural disasters, remote deployments, and network shutdowns, ensuring secure "
                                "communication when it matters most."
                            </p>
                        </div>

                        <div node_ref=stats_ref class="about-stats">
                            <div
                                class=move || reveal_class("stat", stats_visible.get())
                                style=move || stagger(stats_visible.get(), 0)
                            >
                                <span class="stat-value">"Offline"</span>
                                <p class="stat-label">"First Architecture"</p>
                            </div>
                            <div
                                class=move || reveal_class("stat", stats_visible.get())
                                style=move || stagger(stats_visible.get(), 200)
                            >
                                <span class="stat-value">"Zero"</span>
                                <p class="stat-label">"Central Servers"</p>
                            </div>
                        </div>
                    </div>
                </div>

                // How it works
                <div class="how-it-works">
                    <h3 class="how-title">"How It Works"</h3>

                    <div node_ref=steps_ref class="steps-grid">
                        <div
                            class=move || reveal_class("step", steps_visible.get())
                            style=move || stagger(steps_visible.get(), 0)
                        >
                            <StepDrawer
                                step=1
                                title="Install APK"
                                description="Download and install the OffGriid APK directly, no app stores, no accounts."
                                download_url=config::APK_URL
                                file_name=config::APK_FILE_NAME
                                sha256=config::APK_SHA256
                            />
                        </div>

                        <div
                            class=move || reveal_class("step", steps_visible.get())
                            style=move || stagger(steps_visible.get(), 150)
                        >
                            <InfoStep
                                step=2
                                title="Generate Identity"
                                description="On first launch, OffGriid automatically creates a secure cryptographic identity, no sign-up required."
                                details=vec![
                                    "Open OffGriid for the first time",
                                    "App generates an Ed25519 key pair locally",
                                    "No server communication occurs",
                                    "Keys are stored securely on-device",
                                ]
                            />
                        </div>

                        <div
                            class=move || reveal_class("step", steps_visible.get())
                            style=move || stagger(steps_visible.get(), 300)
                        >
                            <InfoStep
                                step=3
                                title="Auto-Mesh"
                                description="Nearby devices are discovered automatically using Bluetooth Low Energy and form a secure peer-to-peer mesh."
                                details=vec![
                                    "BLE discovers nearby OffGriid devices",
                                    "Encrypted handshake establishes trust",
                                    "Messages relay across the mesh",
                                    "Works fully offline",
                                ]
                            />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_class() {
        assert_eq!(reveal_class("stat", false), "stat reveal");
        assert_eq!(reveal_class("stat", true), "stat reveal shown");
    }

    #[test]
    fn test_stagger_only_when_visible() {
        assert_eq!(stagger(false, 300), "transition-delay: 0ms");
        assert_eq!(stagger(true, 300), "transition-delay: 300ms");
    }
}
