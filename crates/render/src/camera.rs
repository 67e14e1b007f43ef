use glam::{Mat4, Vec3};
use spectrograph_input::NormalizedPointer;

pub const EYE_POSITION_INITIAL: Vec3 = Vec3::new(0.0, 0.0, 2.5);
pub const LOOK_AT_TARGET: Vec3 = Vec3::ZERO;
pub const UP_VECTOR: Vec3 = Vec3::Y;
/// Full sweep in degrees between the two surface edges.
pub const MAX_ROTATION_ANGLE: f32 = 170.0;

/// Map a normalized screen coordinate to a rotation angle in degrees.
pub fn rotation_angle(position: f32) -> f32 {
    0.5 * MAX_ROTATION_ANGLE * position
}

/// Yaw and pitch in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraAngles {
    pub yaw_degrees: f32,
    pub pitch_degrees: f32,
}

/// Orbit camera driven directly by pointer position.
///
/// The eye orbits the target; angles are recomputed from scratch on every
/// pointer event, never integrated.
#[derive(Debug, Clone, Copy)]
pub struct CameraRig {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            eye: EYE_POSITION_INITIAL,
            target: LOOK_AT_TARGET,
            up: UP_VECTOR,
        }
    }
}

impl CameraRig {
    pub fn angles(&self, pointer: NormalizedPointer) -> CameraAngles {
        CameraAngles {
            yaw_degrees: rotation_angle(pointer.x),
            pitch_degrees: rotation_angle(pointer.y),
        }
    }

    /// `Rx(pitch) * Ry(yaw)`, both about world axes.
    pub fn rotation(&self, angles: CameraAngles) -> Mat4 {
        Mat4::from_rotation_x(angles.pitch_degrees.to_radians())
            * Mat4::from_rotation_y(angles.yaw_degrees.to_radians())
    }

    pub fn eye_position(&self, angles: CameraAngles) -> Vec3 {
        self.rotation(angles).transform_point3(self.eye)
    }

    pub fn view_matrix(&self, angles: CameraAngles) -> Mat4 {
        Mat4::look_at_rh(self.eye_position(angles), self.target, self.up)
    }

    pub fn view_for_pointer(&self, pointer: NormalizedPointer) -> Mat4 {
        let angles = self.angles(pointer);
        tracing::trace!(
            yaw = angles.yaw_degrees,
            pitch = angles.pitch_degrees,
            "camera angles"
        );
        self.view_matrix(angles)
    }
}
