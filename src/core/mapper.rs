//! Abbildung Curve-Space ↔ Surface-Space der Zeichenfläche.

use super::curve::{CurvePoint, CurveSpec};
use super::viewport::Viewport;
use glam::{DVec2, Vec2};

/// Bildet Kontrollpunkte auf Pixel einer Zeichenfläche fester Größe ab und zurück.
///
/// Surface-Y wächst nach unten, Curve-Y nach oben; die Y-Achse wird daher invertiert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    surface_size: Vec2,
    viewport: Viewport,
}

impl CoordinateMapper {
    /// Erstellt einen Mapper. Flächenmaße unter 1 px werden auf 1 px angehoben.
    pub fn new(surface_size: Vec2, viewport: Viewport) -> Self {
        Self {
            surface_size: surface_size.max(Vec2::ONE),
            viewport,
        }
    }

    /// Mapper mit frisch berechnetem Viewport für die gegebenen Kurven.
    pub fn for_curves(surface_size: Vec2, user: &CurveSpec, target: Option<&CurveSpec>) -> Self {
        Self::new(surface_size, Viewport::fit(user, target))
    }

    /// Größe der Zeichenfläche in Pixeln.
    pub fn surface_size(&self) -> Vec2 {
        self.surface_size
    }

    /// Der zugrunde liegende Viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Curve-Space → Surface-Pixel.
    pub fn to_surface(&self, point: CurvePoint) -> Vec2 {
        let w = f64::from(self.surface_size.x);
        Vec2::new((point.x * w) as f32, self.surface_y(point.y))
    }

    /// Surface-Pixel → Curve-Space. X wird auf [0, 1] geklemmt, Y nie.
    pub fn from_surface(&self, surface_pos: Vec2) -> CurvePoint {
        let w = f64::from(self.surface_size.x);
        let h = f64::from(self.surface_size.y);
        let pos = surface_pos.as_dvec2();
        DVec2::new(
            (pos.x / w).clamp(0.0, 1.0),
            ((h - pos.y) / h) * self.viewport.y_range + self.viewport.y_min,
        )
    }

    /// Surface-Y einer Curve-Space-Höhe.
    pub fn surface_y(&self, y: f64) -> f32 {
        let h = f64::from(self.surface_size.y);
        (h - ((y - self.viewport.y_min) / self.viewport.y_range) * h) as f32
    }

    /// Liegt die Curve-Space-Höhe `y` innerhalb der Zeichenfläche?
    pub fn is_visible_y(&self, y: f64) -> bool {
        let sy = self.surface_y(y);
        (0.0..=self.surface_size.y).contains(&sy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn editor_mapper() -> CoordinateMapper {
        CoordinateMapper::new(
            Vec2::new(400.0, 300.0),
            Viewport {
                y_min: -0.5,
                y_range: 2.0,
            },
        )
    }

    #[test]
    fn test_anchors_map_to_expected_pixels() {
        let mapper = editor_mapper();
        let start = mapper.to_surface(DVec2::ZERO);
        let end = mapper.to_surface(DVec2::ONE);

        assert_relative_eq!(start.x, 0.0);
        assert_relative_eq!(start.y, 225.0);
        assert_relative_eq!(end.x, 400.0);
        assert_relative_eq!(end.y, 75.0);
    }

    #[test]
    fn test_roundtrip_within_tolerance() {
        let mapper = editor_mapper();
        for &x in &[0.0f64, 0.1, 0.42, 0.5, 0.99, 1.0] {
            for &y in &[-3.0f64, -0.56, 0.0, 0.5, 1.0, 1.56, 7.25] {
                let p = DVec2::new(x, y);
                let back = mapper.from_surface(mapper.to_surface(p));
                assert_relative_eq!(back.x, p.x, epsilon = 1e-5);
                assert_relative_eq!(back.y, p.y, epsilon = 1e-4);
            }
        }
    }

    #[test]
    fn test_from_surface_clamps_x_not_y() {
        let mapper = editor_mapper();

        let far_left_above = mapper.from_surface(Vec2::new(-250.0, -600.0));
        assert_relative_eq!(far_left_above.x, 0.0);
        // 600 px über der Oberkante = 4 Einheiten über y_max (1.5)
        assert_relative_eq!(far_left_above.y, 5.5, epsilon = 1e-5);

        let far_right_below = mapper.from_surface(Vec2::new(9000.0, 900.0));
        assert_relative_eq!(far_right_below.x, 1.0);
        assert_relative_eq!(far_right_below.y, -4.5, epsilon = 1e-5);
    }

    #[test]
    fn test_visibility_of_axes() {
        let mapper = editor_mapper();
        assert!(mapper.is_visible_y(0.0));
        assert!(mapper.is_visible_y(1.0));
        assert!(!mapper.is_visible_y(1.6));
        assert!(!mapper.is_visible_y(-0.6));
    }

    #[test]
    fn test_degenerate_surface_is_lifted() {
        let mapper = CoordinateMapper::new(Vec2::ZERO, Viewport::default());
        let p = mapper.from_surface(Vec2::new(0.5, 0.5));
        assert!(p.x.is_finite() && p.y.is_finite());
    }
}
