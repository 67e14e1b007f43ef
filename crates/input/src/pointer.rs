/// Pointer position in graphics convention: x grows to the right, y grows
/// upward, and both span `[-1, 1]` across the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedPointer {
    pub x: f32,
    pub y: f32,
}

impl NormalizedPointer {
    /// Pointer at the center of the surface; yields the neutral camera.
    pub const CENTER: Self = Self { x: 0.0, y: 0.0 };

    /// Construct from already-normalized coordinates, clamping to `[-1, 1]`.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: x.clamp(-1.0, 1.0),
            y: y.clamp(-1.0, 1.0),
        }
    }

    /// Map a physical-pixel position relative to the surface's top-left
    /// corner into normalized coordinates, flipping y.
    ///
    /// Positions outside the surface are clamped to its edge. A zero-sized
    /// surface maps every position to the center.
    pub fn from_physical(position: (f64, f64), size: (u32, u32)) -> Self {
        let (width, height) = size;
        if width == 0 || height == 0 {
            tracing::trace!("pointer over empty surface, using center");
            return Self::CENTER;
        }
        let x = 2.0 * position.0 / width as f64 - 1.0;
        let y = 1.0 - 2.0 * position.1 / height as f64;
        Self::new(x as f32, y as f32)
    }
}

impl Default for NormalizedPointer {
    fn default() -> Self {
        Self::CENTER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_center_maps_to_origin() {
        let p = NormalizedPointer::from_physical((640.0, 360.0), (1280, 720));
        assert_eq!(p, NormalizedPointer::CENTER);
    }

    #[test]
    fn corners_map_to_unit_square_with_flipped_y() {
        let top_left = NormalizedPointer::from_physical((0.0, 0.0), (800, 600));
        assert_eq!(top_left, NormalizedPointer { x: -1.0, y: 1.0 });

        let bottom_right = NormalizedPointer::from_physical((800.0, 600.0), (800, 600));
        assert_eq!(bottom_right, NormalizedPointer { x: 1.0, y: -1.0 });
    }

    #[test]
    fn right_edge_is_exactly_one() {
        let p = NormalizedPointer::from_physical((1920.0, 540.0), (1920, 1080));
        assert_eq!(p.x, 1.0);
        assert_eq!(p.y, 0.0);
    }

    #[test]
    fn outside_positions_are_clamped() {
        let p = NormalizedPointer::from_physical((-50.0, 5000.0), (100, 100));
        assert_eq!(p, NormalizedPointer { x: -1.0, y: -1.0 });

        let q = NormalizedPointer::new(3.0, -7.5);
        assert_eq!(q, NormalizedPointer { x: 1.0, y: -1.0 });
    }

    #[test]
    fn zero_sized_surface_yields_center() {
        let p = NormalizedPointer::from_physical((10.0, 10.0), (0, 720));
        assert_eq!(p, NormalizedPointer::CENTER);
    }
}
