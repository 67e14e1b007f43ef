use glam::{Mat4, Vec3};
use spectrograph_common::{LineVertex, Rgba};

pub const BACKGROUND: Rgba = Rgba::BLACK;

/// The segment is authored in world space, centered on the origin.
pub const MODEL_MATRIX: Mat4 = Mat4::IDENTITY;

pub const LINE_SEGMENT: [LineVertex; 2] = [
    LineVertex::new(Vec3::new(-1.0, 0.0, 0.0), Rgba::RED),
    LineVertex::new(Vec3::new(1.0, 0.0, 0.0), Rgba::BLUE),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_matrix_is_identity() {
        assert_eq!(MODEL_MATRIX, Mat4::IDENTITY);
    }

    #[test]
    fn segment_is_centered_on_origin() {
        let mid = (LINE_SEGMENT[0].position + LINE_SEGMENT[1].position) * 0.5;
        assert_eq!(mid, Vec3::ZERO);
    }

    #[test]
    fn endpoints_are_red_then_blue() {
        assert_eq!(LINE_SEGMENT[0].color, Rgba::RED);
        assert_eq!(LINE_SEGMENT[1].color, Rgba::BLUE);
    }
}
