//! Integration Tests für die Pattern-Engine

mod common;
use common::*;

use esp_core::{Pattern, PatternEngine, Timing};
use rgb::RGB8;

const FADE_MS: u64 = 30;
const CYCLE_MS: u64 = 10;

fn engine() -> PatternEngine {
    PatternEngine::new(&Timing::default())
}

// ============================================================================
// Tests: Off / Manual
// ============================================================================

#[test]
fn test_off_and_manual_leave_color_alone() {
    let mut engine = engine();
    let mut rng = SequenceRng::default();
    let mut color = RGB8 { r: 7, g: 8, b: 9 };

    for pattern in [Pattern::Off, Pattern::Manual] {
        assert!(!engine.step(pattern, ms(10_000), &mut color, &mut rng));
        assert_eq!(color, RGB8 { r: 7, g: 8, b: 9 });
    }
}

// ============================================================================
// Tests: Fade
// ============================================================================

#[test]
fn test_fade_is_time_gated() {
    let mut engine = engine();
    let mut rng = SequenceRng::default();
    let mut color = RGB8::default();

    assert!(!engine.step(Pattern::Fade, ms(FADE_MS - 1), &mut color, &mut rng));
    assert!(engine.step(Pattern::Fade, ms(FADE_MS), &mut color, &mut rng));
    assert_eq!(color, RGB8 { r: 15, g: 0, b: 0 });
    assert!(!engine.step(Pattern::Fade, ms(FADE_MS + 5), &mut color, &mut rng));
}

#[test]
fn test_fade_moves_to_next_channel_after_full_ramp() {
    let mut engine = engine();
    let mut rng = SequenceRng::default();
    let mut color = RGB8::default();

    for tick in 1..=34 {
        engine.step(Pattern::Fade, ms(tick * FADE_MS), &mut color, &mut rng);
        assert_eq!(color.g, 0);
        assert_eq!(color.b, 0);
    }
    assert_eq!(color.r, 0);
    assert_eq!(engine.fade().channel(), 1);

    engine.step(Pattern::Fade, ms(35 * FADE_MS), &mut color, &mut rng);
    assert_eq!(color, RGB8 { r: 0, g: 15, b: 0 });
}

#[test]
fn test_fade_overrides_manual_color() {
    let mut engine = engine();
    let mut rng = SequenceRng::default();
    let mut color = RGB8 { r: 255, g: 0, b: 0 };

    engine.step(Pattern::Fade, ms(FADE_MS), &mut color, &mut rng);
    // Fade startet bei seinem eigenen Cursor, nicht bei der manuellen Farbe
    assert_eq!(color, RGB8 { r: 15, g: 0, b: 0 });
}

// ============================================================================
// Tests: Breathing
// ============================================================================

#[test]
fn test_breathing_bounded_and_returns_to_zero() {
    let mut engine = engine();
    let mut rng = SequenceRng::default();
    let mut color = RGB8::default();
    let mut peak: u8 = 0;

    for tick in 1..=34 {
        engine.step(Pattern::Breathing, ms(tick * FADE_MS), &mut color, &mut rng);
        assert_eq!(color.r, color.g);
        assert_eq!(color.g, color.b);
        peak = peak.max(color.r);
    }
    assert_eq!(peak, 255);
    assert_eq!(color, RGB8::default());
    assert_eq!(engine.breathing().level(), 0);
}

// ============================================================================
// Tests: RainbowCycle
// ============================================================================

#[test]
fn test_rainbow_phase_wraps_and_stays_in_range() {
    let mut engine = engine();
    let mut rng = SequenceRng::default();
    let mut color = RGB8::default();
    let mut first = None;

    for tick in 1..=256 {
        engine.step(Pattern::RainbowCycle, ms(tick * FADE_MS), &mut color, &mut rng);
        for channel in [color.r, color.g, color.b] {
            assert!(channel >= 1);
        }
        first.get_or_insert(color);
    }
    assert_eq!(engine.rainbow().phase(), 0);

    engine.step(Pattern::RainbowCycle, ms(257 * FADE_MS), &mut color, &mut rng);
    assert_eq!(Some(color), first);
}

#[test]
fn test_rainbow_starts_at_mid_red() {
    let mut engine = engine();
    let mut rng = SequenceRng::default();
    let mut color = RGB8::default();

    engine.step(Pattern::RainbowCycle, ms(FADE_MS), &mut color, &mut rng);
    // sin(0) = 0 → 128
    assert_eq!(color.r, 128);
}

// ============================================================================
// Tests: Cycle
// ============================================================================

#[test]
fn test_cycle_ramps_and_pauses_at_boundary() {
    let mut engine = engine();
    let mut rng = SequenceRng::default();
    let mut color = RGB8::default();

    engine.step(Pattern::Cycle, ms(CYCLE_MS), &mut color, &mut rng);
    assert_eq!(color, RGB8 { r: 255, g: 0, b: 0 });

    let mut now = CYCLE_MS;
    for _ in 1..=255 {
        now += CYCLE_MS;
        engine.step(Pattern::Cycle, ms(now), &mut color, &mut rng);
        assert_eq!(u16::from(color.r) + u16::from(color.g), 255);
    }
    assert_eq!(color, RGB8 { r: 0, g: 255, b: 0 });
    assert_eq!(engine.cycle().segment(), 1);
    assert!(engine.cycle().is_paused(ms(now + 50)));

    // während der Pause passiert nichts
    assert!(!engine.step(Pattern::Cycle, ms(now + 50), &mut color, &mut rng));

    // nach der Pause (100 ms) beginnt die Rampe G → B
    assert!(engine.step(Pattern::Cycle, ms(now + 100), &mut color, &mut rng));
    assert_eq!(color, RGB8 { r: 0, g: 255, b: 0 });
    engine.step(Pattern::Cycle, ms(now + 110), &mut color, &mut rng);
    assert_eq!(color, RGB8 { r: 0, g: 254, b: 1 });
}

// ============================================================================
// Tests: RandomFlash
// ============================================================================

#[test]
fn test_random_flash_every_100ms() {
    let mut engine = engine();
    let mut rng = SequenceRng::new(&[1, 2, 3, 4, 5, 6]);
    let mut color = RGB8::default();

    assert!(!engine.step(Pattern::RandomFlash, ms(99), &mut color, &mut rng));
    assert!(engine.step(Pattern::RandomFlash, ms(100), &mut color, &mut rng));
    assert_eq!(color, RGB8 { r: 1, g: 2, b: 3 });
    assert!(!engine.step(Pattern::RandomFlash, ms(150), &mut color, &mut rng));
    assert!(engine.step(Pattern::RandomFlash, ms(200), &mut color, &mut rng));
    assert_eq!(color, RGB8 { r: 4, g: 5, b: 6 });
}

// ============================================================================
// Tests: Cursor bleiben beim Umschalten erhalten
// ============================================================================

#[test]
fn test_cursor_survives_pattern_switch() {
    let mut engine = engine();
    let mut rng = SequenceRng::default();
    let mut color = RGB8::default();

    for tick in 1..=3 {
        engine.step(Pattern::Fade, ms(tick * FADE_MS), &mut color, &mut rng);
    }
    assert_eq!(engine.fade().level(), 45);

    engine.step(Pattern::Breathing, ms(4 * FADE_MS), &mut color, &mut rng);
    engine.step(Pattern::Fade, ms(5 * FADE_MS), &mut color, &mut rng);
    assert_eq!(color, RGB8 { r: 60, g: 0, b: 0 });
}
