use crate::projection::Perspective;
use crate::scene::{BACKGROUND, LINE_SEGMENT, MODEL_MATRIX};
use glam::Mat4;
use spectrograph_common::{LineVertex, Rgba};

/// Everything a backend needs to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct FramePlan {
    pub clear: Rgba,
    /// projection * view * model
    pub mvp: Mat4,
    pub vertices: &'static [LineVertex],
}

impl FramePlan {
    /// Plan a frame for `view` on a surface whose aspect ratio is `aspect`.
    ///
    /// `aspect` must come from the live surface; callers read it again for
    /// every frame since the surface may have been resized in between.
    pub fn new(view: Mat4, aspect: f32) -> Self {
        Self::with_projection(&Perspective::default(), view, aspect)
    }

    pub fn with_projection(projection: &Perspective, view: Mat4, aspect: f32) -> Self {
        Self {
            clear: BACKGROUND,
            mvp: projection.matrix(aspect) * view * MODEL_MATRIX,
            vertices: &LINE_SEGMENT,
        }
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CameraRig;
    use spectrograph_input::NormalizedPointer;

    #[test]
    fn combines_projection_and_view() {
        let view = CameraRig::default().view_for_pointer(NormalizedPointer::new(0.2, 0.1));
        let plan = FramePlan::new(view, 1.5);
        let expected = Perspective::default().matrix(1.5) * view;
        assert!(plan.mvp.abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn aspect_changes_the_transform() {
        let view = CameraRig::default().view_for_pointer(NormalizedPointer::CENTER);
        let wide = FramePlan::new(view, 2.0);
        let tall = FramePlan::new(view, 0.5);
        assert!(!wide.mvp.abs_diff_eq(tall.mvp, 1e-3));
    }

    #[test]
    fn neutral_frame_keeps_segment_in_view() {
        let view = CameraRig::default().view_for_pointer(NormalizedPointer::CENTER);
        let plan = FramePlan::new(view, 16.0 / 9.0);
        for v in plan.vertices {
            let ndc = plan.mvp.project_point3(v.position);
            assert!(ndc.x.abs() <= 1.0 && ndc.y.abs() <= 1.0);
            assert!((0.0..=1.0).contains(&ndc.z));
        }
        assert_eq!(plan.vertex_count(), 2);
    }
}
