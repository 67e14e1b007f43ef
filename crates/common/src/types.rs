use glam::Vec3;

/// Linear RGBA color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const RED: Self = Self::new(1.0, 0.0, 0.0, 1.0);
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// A vertex in object-local space with a per-vertex color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineVertex {
    pub position: Vec3,
    pub color: Rgba,
}

impl LineVertex {
    pub const fn new(position: Vec3, color: Rgba) -> Self {
        Self { position, color }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_colors_are_opaque() {
        for c in [Rgba::BLACK, Rgba::RED, Rgba::BLUE] {
            assert_eq!(c.a, 1.0);
        }
    }

    #[test]
    fn color_to_array_keeps_channel_order() {
        assert_eq!(Rgba::RED.to_array(), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(Rgba::BLUE.to_array(), [0.0, 0.0, 1.0, 1.0]);
    }
}
