/// Core-Logik ohne UI-Abhängigkeit
///
/// Alles in diesem Modul ist reine Rechenlogik auf `glam`-Vektoren:
/// - CurveSpec: die vier Parameter einer Timing-Kurve
/// - Viewport + CoordinateMapper: Curve-Space ↔ Surface-Space
/// - DragController: Pointer-Capture für genau einen Handle
/// - Scoring und Vorschau-Timing
pub mod curve;
pub mod drag;
pub mod easing;
pub mod mapper;
pub mod preview;
pub mod scoring;
pub mod timing;
pub mod viewport;

pub use curve::{ControlHandle, CurveParseError, CurvePoint, CurveSpec, CURVE_END, CURVE_START};
pub use drag::{DragController, DragState, PointerCapture};
pub use easing::EasingFunction;
pub use mapper::CoordinateMapper;
pub use preview::{LivePreview, PreviewMotion};
pub use scoring::{score_choice, score_curves, total_difference, GradingMode, Score, ScoreRating};
pub use timing::cubic_bezier;
pub use viewport::Viewport;
