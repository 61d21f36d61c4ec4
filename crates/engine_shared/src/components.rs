// crates/engine_shared/src/components.rs
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Position and extent in world space. `scale` doubles as the extent of the
/// sprite quad and of the click box centred on `pos`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CTransform {
    pub pos: Vec2,
    pub scale: Vec2,
    /// Degrees, counter-clockwise. Visual only; hit boxes ignore it.
    pub rotation: f32,
}

impl Default for CTransform {
    fn default() -> Self {
        Self { pos: Vec2::ZERO, scale: Vec2::ONE, rotation: 0.0 }
    }
}

impl CTransform {
    pub fn at(pos: Vec2, scale: Vec2) -> Self {
        Self { pos, scale, rotation: 0.0 }
    }

    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }

    /// Inclusive axis-aligned containment test against the box
    /// `pos ± scale / 2`.
    pub fn contains(&self, point: Vec2) -> bool {
        let half = self.scale / 2.0;
        let min = self.pos - half;
        let max = self.pos + half;
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CSprite {
    /// Asset reference, resolved by the renderer.
    pub image: String,
    pub hidden: bool,
    /// Larger depth is drawn first (further back).
    pub depth: i32,
}

impl CSprite {
    pub fn new(image: impl Into<String>) -> Self {
        Self { image: image.into(), hidden: false, depth: 0 }
    }

    pub fn with_depth(mut self, depth: i32) -> Self {
        self.depth = depth;
        self
    }
}

/// Orthographic camera. `viewport` is the world-space size of the visible
/// area at zoom 1.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CCamera {
    pub viewport: Vec2,
    pub zoom: f32,
}

impl Default for CCamera {
    fn default() -> Self {
        Self { viewport: Vec2::new(32.0, 18.0), zoom: 1.0 }
    }
}

impl CCamera {
    /// Maps clip space ([-1, 1] on both axes, y up) to world space for a
    /// camera sitting at `eye`.
    pub fn clip_to_world(&self, eye: Vec2, clip: Vec2) -> Vec2 {
        eye + clip * (self.viewport / 2.0) / self.zoom
    }
}

/// Debug name, used in logs and by the draw list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CLabel(pub &'static str);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_inclusive_on_every_edge() {
        let t = CTransform::at(Vec2::new(0.0, -0.5), Vec2::new(6.0, 8.0));
        assert!(t.contains(Vec2::new(-3.0, -4.5)));
        assert!(t.contains(Vec2::new(3.0, 3.5)));
        assert!(!t.contains(Vec2::new(3.01, 0.0)));
        assert!(!t.contains(Vec2::new(0.0, -4.8)));
    }

    #[test]
    fn clip_corners_map_to_viewport_edges() {
        let cam = CCamera::default();
        assert_eq!(cam.clip_to_world(Vec2::ZERO, Vec2::new(1.0, 1.0)), Vec2::new(16.0, 9.0));
        let zoomed = CCamera { zoom: 2.0, ..cam };
        assert_eq!(zoomed.clip_to_world(Vec2::new(1.0, 0.0), Vec2::new(-1.0, 0.0)), Vec2::new(-7.0, 0.0));
    }
}
