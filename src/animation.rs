//! Reveal transition descriptors.
//!
//! A `Transition` is plain data: where an element starts, where it ends and
//! how long it takes to get there. The `Reveal` component turns it into an
//! inline CSS transition; nothing here touches the DOM.

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub opacity: f32,
    pub x: f32,
    pub y: f32,
    pub scale: f32,
}

impl VisualState {
    pub const VISIBLE: VisualState = VisualState {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    pub const HIDDEN: VisualState = VisualState {
        opacity: 0.0,
        ..Self::VISIBLE
    };

    pub const fn offset_y(y: f32) -> Self {
        VisualState { y, ..Self::HIDDEN }
    }

    pub const fn offset_x(x: f32) -> Self {
        VisualState { x, ..Self::HIDDEN }
    }

    pub const fn scaled(scale: f32) -> Self {
        VisualState { scale, ..Self::HIDDEN }
    }

    fn css(&self) -> String {
        format!(
            "opacity: {}; transform: translate({}px, {}px) scale({});",
            self.opacity, self.x, self.y, self.scale
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    pub delay_ms: u32,
    pub duration_ms: u32,
}

/// What starts the reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealTrigger {
    Mount,
    InView,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub initial: VisualState,
    pub target: VisualState,
    pub timing: Timing,
}

impl Transition {
    pub const fn new(initial: VisualState, delay_ms: u32, duration_ms: u32) -> Self {
        Transition {
            initial,
            target: VisualState::VISIBLE,
            timing: Timing {
                delay_ms,
                duration_ms,
            },
        }
    }

    pub fn with_delay(mut self, delay_ms: u32) -> Self {
        self.timing.delay_ms = delay_ms;
        self
    }

    /// Inline style for the element, before or after it is revealed.
    pub fn style(&self, revealed: bool) -> String {
        let state = if revealed { &self.target } else { &self.initial };
        let Timing {
            delay_ms,
            duration_ms,
        } = self.timing;
        format!(
            "{} transition: opacity {d}ms ease-out {delay}ms, transform {d}ms ease-out {delay}ms;",
            state.css(),
            d = duration_ms,
            delay = delay_ms,
        )
    }
}

/// Cascade delay for the item at `index`.
pub fn stagger(index: usize, step_ms: u32) -> u32 {
    (index as u32).saturating_mul(step_ms)
}

pub fn hero_title() -> Transition {
    Transition::new(VisualState::offset_y(-20.0), 0, 800)
}

pub fn hero_subtitle() -> Transition {
    Transition::new(VisualState::HIDDEN, 400, 800)
}

pub fn hero_call_to_action() -> Transition {
    Transition::new(VisualState::offset_y(20.0), 800, 800)
}

/// Default entry for section headings.
pub fn fade_in() -> Transition {
    Transition::new(VisualState::offset_y(20.0), 0, 600)
}

pub fn feature_card(index: usize) -> Transition {
    fade_in().with_delay(stagger(index, config::FEATURE_STAGGER_MS))
}

// Testimonials slide in from alternating sides.
pub fn testimonial(index: usize) -> Transition {
    let x = if index % 2 == 0 { -20.0 } else { 20.0 };
    Transition::new(
        VisualState::offset_x(x),
        stagger(index, config::TESTIMONIAL_STAGGER_MS),
        600,
    )
}

pub fn pricing_card() -> Transition {
    Transition::new(VisualState::scaled(0.9), 0, 600)
}

pub fn faq_entry(index: usize) -> Transition {
    fade_in().with_delay(stagger(index, config::FAQ_STAGGER_MS))
}

pub fn closing_text() -> Transition {
    Transition::new(VisualState::HIDDEN, 200, 600)
}

pub fn closing_call_to_action() -> Transition {
    Transition::new(VisualState::offset_y(20.0), 400, 600)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_is_index_times_step() {
        assert_eq!(stagger(0, 100), 0);
        assert_eq!(stagger(3, 100), 300);
        assert_eq!(stagger(1, 200), 200);
    }

    #[test]
    fn feature_cards_cascade() {
        let delays: Vec<u32> = (0..6).map(|i| feature_card(i).timing.delay_ms).collect();
        assert_eq!(delays, [0, 100, 200, 300, 400, 500]);
        assert!((0..6).all(|i| feature_card(i).timing.duration_ms == 600));
    }

    #[test]
    fn testimonials_alternate_sides() {
        assert_eq!(testimonial(0).initial.x, -20.0);
        assert_eq!(testimonial(1).initial.x, 20.0);
        assert_eq!(testimonial(1).timing.delay_ms, 200);
    }

    #[test]
    fn every_preset_ends_fully_visible() {
        let presets = [
            hero_title(),
            hero_subtitle(),
            hero_call_to_action(),
            fade_in(),
            pricing_card(),
            faq_entry(2),
            closing_text(),
            closing_call_to_action(),
        ];
        for preset in presets {
            assert_eq!(preset.target, VisualState::VISIBLE);
            assert_eq!(preset.initial.opacity, 0.0);
        }
    }

    #[test]
    fn style_switches_between_states() {
        let t = pricing_card();
        let hidden = t.style(false);
        let shown = t.style(true);
        assert!(hidden.starts_with("opacity: 0;"));
        assert!(hidden.contains("scale(0.9)"));
        assert!(shown.starts_with("opacity: 1;"));
        assert!(shown.contains("scale(1)"));
        assert!(shown.contains("opacity 600ms ease-out 0ms"));
    }

    #[test]
    fn hero_timings() {
        assert_eq!(hero_title().initial.y, -20.0);
        assert_eq!(hero_subtitle().timing.delay_ms, 400);
        assert_eq!(hero_call_to_action().timing.delay_ms, 800);
        assert_eq!(hero_call_to_action().timing.duration_ms, 800);
    }
}
