use crate::pointer::NormalizedPointer;

/// A high-level action produced from window events.
///
/// The viewer reacts to actions, never to raw input events, so the camera
/// and renderer stay independent of the windowing library.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Point the camera according to a normalized pointer position.
    Look(NormalizedPointer),
    /// The drawing surface changed size, in physical pixels.
    Resize { width: u32, height: u32 },
    /// Draw a frame with the current view.
    Redraw,
    /// Close the viewer.
    Quit,
}

impl Action {
    /// Build a look action from a physical cursor position over a surface.
    pub fn look_at_cursor(position: (f64, f64), surface: (u32, u32)) -> Self {
        Action::Look(NormalizedPointer::from_physical(position, surface))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn look_at_cursor_normalizes() {
        let a = Action::look_at_cursor((100.0, 50.0), (100, 100));
        assert_eq!(a, Action::Look(NormalizedPointer { x: 1.0, y: 0.0 }));
    }

    #[test]
    fn resize_carries_dimensions() {
        let a = Action::Resize {
            width: 640,
            height: 480,
        };
        assert!(matches!(a, Action::Resize { width: 640, .. }));
    }

    #[test]
    fn redraw_and_quit() {
        assert!(matches!(Action::Redraw, Action::Redraw));
        assert!(matches!(Action::Quit, Action::Quit));
    }
}
