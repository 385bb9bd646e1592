//! Statischer Level-Katalog des geführten Modus.

use crate::core::EasingFunction;

/// Ein Level: Beschreibung, gesuchte Easing-Funktion, Animationsdauer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Level {
    /// Aufgabentext für den Spieler
    pub description: &'static str,
    /// Gesuchte Easing-Funktion
    pub easing: EasingFunction,
    /// Dauer einer Vorschau-Iteration in Sekunden
    pub duration: f32,
}

const fn level(description: &'static str, easing: EasingFunction, duration: f32) -> Level {
    Level {
        description,
        easing,
        duration,
    }
}

/// Alle Level in Katalogreihenfolge (wird pro Durchlauf gemischt).
pub const LEVELS: [Level; 16] = [
    level(
        "This animation moves at a constant speed from start to finish. Which easing function represents this?",
        EasingFunction::Linear,
        2.0,
    ),
    level(
        "This animation starts slowly and then accelerates towards the end. Can you identify it?",
        EasingFunction::EaseIn,
        2.0,
    ),
    level(
        "This animation starts quickly and decelerates to a gentle stop. Which one is it?",
        EasingFunction::EaseOut,
        2.0,
    ),
    level(
        "A fundamental of animation. It starts slow, speeds up in the middle, and ends slow. Find this smooth motion.",
        EasingFunction::EaseInOut,
        2.0,
    ),
    level(
        "Slightly faster at the beginning and end than in the middle, this is the default timing for many animations.",
        EasingFunction::Ease,
        2.2,
    ),
    level(
        "This animation feels like it's being launched, starting fast and then coasting to a stop over a long period.",
        EasingFunction::EaseOut,
        2.5,
    ),
    level(
        "Imagine a heavy object slowly starting to move. It takes a long time to get going but then quickly reaches its destination.",
        EasingFunction::EaseIn,
        2.5,
    ),
    level(
        "A very quick, almost snappy movement that eases gently at both the beginning and the end.",
        EasingFunction::EaseInOut,
        1.2,
    ),
    level(
        "This animation pulls back slightly before shooting forward, like a wind-up before a pitch.",
        EasingFunction::EaseInBack,
        1.5,
    ),
    level(
        "This animation overshoots its target and then settles back into place, like a cartoon character skidding to a halt.",
        EasingFunction::EaseOutBack,
        1.5,
    ),
    level(
        "A more pronounced acceleration than 'ease-in'. It starts very slowly and then picks up speed dramatically.",
        EasingFunction::EaseInCubic,
        2.0,
    ),
    level(
        "The opposite of 'ease-in-cubic'. This animation bursts out of the gate and then gracefully slows to a halt.",
        EasingFunction::EaseOutCubic,
        2.0,
    ),
    level(
        "A smooth but noticeable acceleration and deceleration at the beginning and end of the movement.",
        EasingFunction::EaseInOutCubic,
        2.0,
    ),
    level(
        "This is a very aggressive acceleration. The animation barely moves at first, then suddenly darts to the end.",
        EasingFunction::EaseInQuint,
        2.2,
    ),
    level(
        "An extremely fast start, followed by a long, slow coast to the finish line. It feels very abrupt.",
        EasingFunction::EaseOutQuint,
        2.2,
    ),
    level(
        "The most dramatic of the standard easings. It features a very slow start, rapid acceleration, and a very slow finish.",
        EasingFunction::EaseInOutQuint,
        2.2,
    ),
];
