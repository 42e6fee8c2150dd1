// =============================================================================
// OffGriid Web - Split Text Component
// =============================================================================
// Headline revealed one character (or word) at a time with staggered CSS
// animation delays.
// =============================================================================

use leptos::prelude::*;

/// How the text is split into animated pieces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SplitMode {
    #[default]
    Chars,
    Words,
}

/// One animated piece of the text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    /// Whitespace is kept in the flow but not animated.
    pub is_space: bool,
    pub delay_ms: u32,
}

/// Split `text` and assign each visible piece a delay of `index * stagger_ms`.
pub fn split_segments(text: &str, mode: SplitMode, stagger_ms: u32) -> Vec<Segment> {
    let pieces: Vec<(String, bool)> = match mode {
        SplitMode::Chars => text
            .chars()
            .map(|c| (c.to_string(), c.is_whitespace()))
            .collect(),
        SplitMode::Words => {
            let mut pieces = Vec::new();
            for (i, word) in text.split_whitespace().enumerate() {
                if i > 0 {
                    pieces.push((" ".to_string(), true));
                }
                pieces.push((word.to_string(), false));
            }
            pieces
        }
    };

    let mut visible = 0u32;
    pieces
        .into_iter()
        .map(|(text, is_space)| {
            let delay_ms = visible * stagger_ms;
            if !is_space {
                visible += 1;
            }
            Segment { text, is_space, delay_ms }
        })
        .collect()
}

/// Animated headline. Screen readers get the full text through `aria-label`.
#[component]
pub fn SplitText(
    #[prop(into)] text: String,
    #[prop(optional, into)] class: String,
    #[prop(optional)] mode: SplitMode,
    #[prop(default = 30)] stagger_ms: u32,
    #[prop(default = 1000)] duration_ms: u32,
) -> impl IntoView {
    let segments = split_segments(&text, mode, stagger_ms);

    view! {
        <h1 class=format!("split-text {}", class) aria-label=text.clone()>
            {segments
                .into_iter()
                .map(|segment| {
                    if segment.is_space {
                        view! { <span class="split-space" aria-hidden="true">" "</span> }.into_any()
                    } else {
                        let style = format!(
                            "animation-delay: {}ms; animation-duration: {}ms",
                            segment.delay_ms, duration_ms
                        );
                        view! {
                            <span class="split-piece" aria-hidden="true" style=style>
                                {segment.text}
                            </span>
                        }
                        .into_any()
                    }
                })
                .collect_view()}
        </h1>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chars_stagger_skips_spaces() {
        let segments = split_segments("ab c", SplitMode::Chars, 30);
        let delays: Vec<u32> = segments.iter().map(|s| s.delay_ms).collect();
        assert_eq!(delays, vec![0, 30, 60, 60]);
        assert!(segments[2].is_space);
    }

    #[test]
    fn test_words_mode() {
        let segments = split_segments("Beyond  Visions Within", SplitMode::Words, 100);
        let texts: Vec<&str> = segments.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["Beyond", " ", "Visions", " ", "Within"]);
        assert_eq!(segments[4].delay_ms, 200);
    }
}
