//! Kurven-Szene als reine Geometrie in Surface-Koordinaten.
//!
//! Der Builder ist eine reine Funktion aus Nutzerkurve, optionaler Zielkurve und
//! Flächengröße. Beide Kurven laufen über denselben Mapper, damit sie direkt
//! vergleichbar sind.

use crate::core::{ControlHandle, CoordinateMapper, CurveSpec, Viewport};
use glam::Vec2;

/// Kubischer Pfad in Surface-Pixeln (Start, zwei Kontrollpunkte, Ende)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicPath {
    pub start: Vec2,
    pub c1: Vec2,
    pub c2: Vec2,
    pub end: Vec2,
}

impl CubicPath {
    /// Die vier Punkte in Zeichenreihenfolge.
    pub fn points(&self) -> [Vec2; 4] {
        [self.start, self.c1, self.c2, self.end]
    }
}

/// Gerade Hilfslinie von einem Anker zu seinem Handle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuideSegment {
    pub handle: ControlHandle,
    pub from: Vec2,
    pub to: Vec2,
}

/// Geometrie einer Kurve: Pfad, zwei Hilfslinien, zwei Handle-Positionen
#[derive(Debug, Clone, PartialEq)]
pub struct CurveGeometry {
    pub path: CubicPath,
    pub guides: [GuideSegment; 2],
    pub handles: [(ControlHandle, Vec2); 2],
}

impl CurveGeometry {
    fn build(curve: &CurveSpec, mapper: &CoordinateMapper) -> Self {
        let start = mapper.to_surface(ControlHandle::P1.anchor());
        let end = mapper.to_surface(ControlHandle::P2.anchor());
        let c1 = mapper.to_surface(curve.p1);
        let c2 = mapper.to_surface(curve.p2);

        Self {
            path: CubicPath { start, c1, c2, end },
            guides: [
                GuideSegment {
                    handle: ControlHandle::P1,
                    from: start,
                    to: c1,
                },
                GuideSegment {
                    handle: ControlHandle::P2,
                    from: end,
                    to: c2,
                },
            ],
            handles: [(ControlHandle::P1, c1), (ControlHandle::P2, c2)],
        }
    }

    /// Surface-Position eines Handles.
    pub fn handle_position(&self, handle: ControlHandle) -> Vec2 {
        match handle {
            ControlHandle::P1 => self.path.c1,
            ControlHandle::P2 => self.path.c2,
        }
    }
}

/// Art einer Rasterlinie
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridLineKind {
    /// Gleichmäßige Teilung der Fläche
    Minor,
    /// Hervorgehobene Linie bei Curve-Space y=0
    AxisZero,
    /// Hervorgehobene Linie bei Curve-Space y=1
    AxisOne,
}

/// Eine Rasterlinie in Surface-Pixeln
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub from: Vec2,
    pub to: Vec2,
    pub kind: GridLineKind,
}

/// Read-only Szene für einen Frame der Zeichenfläche.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveScene {
    pub surface_size: Vec2,
    pub viewport: Viewport,
    pub grid: Vec<GridLine>,
    pub user: CurveGeometry,
    pub target: Option<CurveGeometry>,
}

impl CurveScene {
    /// Anzahl der Achsen-Linien (0, 1 oder 2).
    pub fn axis_count(&self) -> usize {
        self.grid
            .iter()
            .filter(|l| l.kind != GridLineKind::Minor)
            .count()
    }
}

/// Baut die Szene für Nutzerkurve und optional sichtbare Zielkurve.
///
/// Der Viewport wird hier frisch aus beiden Kurven berechnet. Achsen bei y=0 und
/// y=1 werden nur erzeugt, wenn sie im Viewport liegen.
pub fn build(
    user: &CurveSpec,
    target: Option<&CurveSpec>,
    surface_size: Vec2,
    grid_divisions: u32,
) -> CurveScene {
    let mapper = CoordinateMapper::for_curves(surface_size, user, target);

    CurveScene {
        surface_size: mapper.surface_size(),
        viewport: mapper.viewport(),
        grid: build_grid(&mapper, grid_divisions),
        user: CurveGeometry::build(user, &mapper),
        target: target.map(|t| CurveGeometry::build(t, &mapper)),
    }
}

fn build_grid(mapper: &CoordinateMapper, divisions: u32) -> Vec<GridLine> {
    let size = mapper.surface_size();
    let divisions = divisions.max(1);
    let mut lines = Vec::with_capacity(2 * divisions as usize);

    // Innenlinien ohne die Ränder
    for i in 1..divisions {
        let f = i as f32 / divisions as f32;
        lines.push(GridLine {
            from: Vec2::new(f * size.x, 0.0),
            to: Vec2::new(f * size.x, size.y),
            kind: GridLineKind::Minor,
        });
    }
    for i in 1..divisions {
        let f = i as f32 / divisions as f32;
        lines.push(GridLine {
            from: Vec2::new(0.0, f * size.y),
            to: Vec2::new(size.x, f * size.y),
            kind: GridLineKind::Minor,
        });
    }

    for (y, kind) in [(0.0, GridLineKind::AxisZero), (1.0, GridLineKind::AxisOne)] {
        if !mapper.is_visible_y(y) {
            continue;
        }
        let sy = mapper.surface_y(y);
        lines.push(GridLine {
            from: Vec2::new(0.0, sy),
            to: Vec2::new(size.x, sy),
            kind,
        });
    }

    lines
}
