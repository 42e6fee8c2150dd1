// =============================================================================
// OffGriid Web - Hero Section
// =============================================================================
// Above-the-fold content. The only section rendered at the initial stage, so
// it stays free of scripted effects.
// =============================================================================

use leptos::prelude::*;

use crate::components::split_text::{SplitMode, SplitText};

/// Full-height hero with the animated headline.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-glow"></div>

            <CurveDecoration />

            <div class="hero-content">
                <SplitText
                    text="Beyond Visions Within Reach"
                    class="hero-headline"
                    mode=SplitMode::Chars
                    stagger_ms=30
                    duration_ms=1000
                />

                <p class="hero-tagline fade-in" style="animation-delay: 1.2s">
                    "Offline-first, peer-to-peer messaging for when the grid goes dark."
                </p>

                <div class="hero-cta fade-in" style="animation-delay: 1.5s">
                    <a href="#about" class="btn btn-outline btn-lg">
                        <span class="accent-dot"></span>
                        "About Us"
                    </a>
                </div>
            </div>

            // Scroll indicator
            <div class="scroll-indicator fade-in" style="animation-delay: 2s">
                <span>"Scroll"</span>
                <div class="scroll-line"></div>
            </div>
        </section>
    }
}

/// Curved divider along the bottom edge of the hero.
#[component]
fn CurveDecoration() -> impl IntoView {
    view! {
        <svg class="curve-decoration" viewBox="0 0 1440 120" preserveAspectRatio="none" aria-hidden="true">
            <path
                d="M0,64 C240,120 480,0 720,48 C960,96 1200,24 1440,64 L1440,120 L0,120 Z"
                class="curve-fill"
            ></path>
            <path
                d="M0,64 C240,120 480,0 720,48 C960,96 1200,24 1440,64"
                class="curve-stroke"
                fill="none"
            ></path>
        </svg>
    }
}
