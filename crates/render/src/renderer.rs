use crate::frame::FramePlan;
use glam::Mat4;
use spectrograph_common::{LineVertex, Rgba};
use std::fmt;

/// Renderer-agnostic interface. All backends implement this trait.
///
/// A backend clears to the plan's background and then issues a single draw
/// of the plan's vertices with the plan's transform.
pub trait Renderer {
    /// What the backend hands back for one frame.
    type Output;

    fn draw(&mut self, plan: &FramePlan) -> Self::Output;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Lines,
}

/// One draw call as a backend would issue it.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub primitive: Primitive,
    pub vertices: Vec<LineVertex>,
    pub mvp: Mat4,
}

/// A frame captured by [`RecordingRenderer`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedFrame {
    pub clear: Rgba,
    pub draws: Vec<DrawCall>,
}

/// Headless backend that records frames instead of touching a GPU.
///
/// Useful for tests and for inspecting the camera math from the command
/// line.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    frames: Vec<RecordedFrame>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[RecordedFrame] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&RecordedFrame> {
        self.frames.last()
    }
}

impl Renderer for RecordingRenderer {
    type Output = ();

    fn draw(&mut self, plan: &FramePlan) {
        tracing::debug!(vertices = plan.vertices.len(), "recording frame");
        self.frames.push(RecordedFrame {
            clear: plan.clear,
            draws: vec![DrawCall {
                primitive: Primitive::Lines,
                vertices: plan.vertices.to_vec(),
                mvp: plan.mvp,
            }],
        });
    }
}

impl fmt::Display for RecordedFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.clear;
        writeln!(
            f,
            "clear: ({:.2}, {:.2}, {:.2}, {:.2})",
            c.r, c.g, c.b, c.a
        )?;
        writeln!(f, "draw calls: {}", self.draws.len())?;
        for (i, draw) in self.draws.iter().enumerate() {
            writeln!(
                f,
                "  [{i}] {:?} x{} vertices",
                draw.primitive,
                draw.vertices.len()
            )?;
            for v in &draw.vertices {
                let clip = draw.mvp * v.position.extend(1.0);
                let ndc = clip.truncate() / clip.w;
                writeln!(
                    f,
                    "      local=({:.2}, {:.2}, {:.2}) ndc=({:.3}, {:.3}, {:.3}) color=({:.2}, {:.2}, {:.2}, {:.2})",
                    v.position.x,
                    v.position.y,
                    v.position.z,
                    ndc.x,
                    ndc.y,
                    ndc.z,
                    v.color.r,
                    v.color.g,
                    v.color.b,
                    v.color.a
                )?;
            }
            for row in 0..4 {
                let r = draw.mvp.row(row);
                writeln!(
                    f,
                    "      mvp[{row}] = [{:>8.4} {:>8.4} {:>8.4} {:>8.4}]",
                    r.x, r.y, r.z, r.w
                )?;
            }
        }
        Ok(())
    }
}
