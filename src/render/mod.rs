//! Kurven-Renderer: reine Szenen-Geometrie plus egui-Painter.

mod painter;
pub mod scene;

pub use painter::{color32, paint_scene};
pub use scene::{build as build_scene, CubicPath, CurveGeometry, CurveScene, GridLine, GridLineKind};
