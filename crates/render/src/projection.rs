use glam::Mat4;

pub const FIELD_OF_VIEW_DEGREES: f32 = 30.0;
pub const NEAR_PLANE_DISTANCE: f32 = 1.0;
pub const FAR_PLANE_DISTANCE: f32 = 100.0;

/// Width over height, with zero dimensions treated as one pixel.
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    width.max(1) as f32 / height.max(1) as f32
}

/// Right-handed perspective projection with a `[0, 1]` depth range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Perspective {
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Perspective {
    fn default() -> Self {
        Self {
            fov_degrees: FIELD_OF_VIEW_DEGREES,
            near: NEAR_PLANE_DISTANCE,
            far: FAR_PLANE_DISTANCE,
        }
    }
}

impl Perspective {
    pub fn matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_degrees.to_radians(), aspect, self.near, self.far)
    }
}
