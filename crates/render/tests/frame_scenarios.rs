use glam::{Mat4, Vec3};
use spectrograph_common::Rgba;
use spectrograph_input::{Action, NormalizedPointer};
use spectrograph_render::{
    CameraRig, FramePlan, MAX_ROTATION_ANGLE, MODEL_MATRIX, Primitive, RecordingRenderer,
    Renderer, aspect_ratio,
};

fn pointer_of(action: Action) -> NormalizedPointer {
    match action {
        Action::Look(p) => p,
        other => panic!("expected a look action, got {other:?}"),
    }
}

#[test]
fn pointer_at_center_draws_one_red_blue_line_on_black() {
    let surface = (1280, 720);
    let pointer = pointer_of(Action::look_at_cursor((640.0, 360.0), surface));
    let view = CameraRig::default().view_for_pointer(pointer);

    let mut renderer = RecordingRenderer::new();
    renderer.draw(&FramePlan::new(view, aspect_ratio(surface.0, surface.1)));

    let frame = renderer.last_frame().expect("a frame was recorded");
    assert_eq!(frame.clear, Rgba::new(0.0, 0.0, 0.0, 1.0));
    assert_eq!(frame.draws.len(), 1);

    let draw = &frame.draws[0];
    assert_eq!(draw.primitive, Primitive::Lines);
    assert_eq!(draw.vertices.len(), 2);
    assert_eq!(draw.vertices[0].position, Vec3::new(-1.0, 0.0, 0.0));
    assert_eq!(draw.vertices[1].position, Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(draw.vertices[0].color, Rgba::new(1.0, 0.0, 0.0, 1.0));
    assert_eq!(draw.vertices[1].color, Rgba::new(0.0, 0.0, 1.0, 1.0));
}

#[test]
fn pointer_at_right_edge_yaws_by_half_the_sweep() {
    let pointer = pointer_of(Action::look_at_cursor((1280.0, 360.0), (1280, 720)));
    let angles = CameraRig::default().angles(pointer);
    assert_eq!(angles.yaw_degrees, 0.5 * MAX_ROTATION_ANGLE);
    assert_eq!(angles.pitch_degrees, 0.0);
}

#[test]
fn model_matrix_survives_many_frames() {
    let rig = CameraRig::default();
    let mut renderer = RecordingRenderer::new();
    for i in 0..16 {
        let t = i as f32 / 15.0 * 2.0 - 1.0;
        let view = rig.view_for_pointer(NormalizedPointer::new(t, -t));
        renderer.draw(&FramePlan::new(view, 1.0));
    }
    assert_eq!(renderer.frames().len(), 16);
    assert_eq!(MODEL_MATRIX, Mat4::IDENTITY);
}

#[test]
fn resized_surface_changes_only_the_projection() {
    let view = CameraRig::default().view_for_pointer(NormalizedPointer::new(0.5, 0.5));
    let mut renderer = RecordingRenderer::new();
    renderer.draw(&FramePlan::new(view, aspect_ratio(1920, 1080)));
    renderer.draw(&FramePlan::new(view, aspect_ratio(1080, 1920)));

    let [before, after] = renderer.frames() else {
        panic!("expected two frames");
    };
    assert_eq!(before.draws[0].vertices, after.draws[0].vertices);
    assert_ne!(before.draws[0].mvp, after.draws[0].mvp);
}
