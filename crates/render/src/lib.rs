//! Rendering core: camera controller, projection and frame planning.
//!
//! Everything here is backend-agnostic. A backend receives a [`FramePlan`]
//! and turns it into exactly one clear and one draw.
//!
//! # Invariants
//! - The model matrix is the identity and is never mutated.
//! - Projection is computed from the aspect ratio supplied for each frame.
//! - The camera holds no state between pointer events.

mod camera;
mod frame;
mod projection;
mod renderer;
mod scene;

pub use camera::{
    CameraAngles, CameraRig, EYE_POSITION_INITIAL, LOOK_AT_TARGET, MAX_ROTATION_ANGLE,
    UP_VECTOR, rotation_angle,
};
pub use frame::FramePlan;
pub use projection::{
    FAR_PLANE_DISTANCE, FIELD_OF_VIEW_DEGREES, NEAR_PLANE_DISTANCE, Perspective, aspect_ratio,
};
pub use renderer::{DrawCall, Primitive, RecordedFrame, RecordingRenderer, Renderer};
pub use scene::{BACKGROUND, LINE_SEGMENT, MODEL_MATRIX};
