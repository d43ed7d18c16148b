//! Sight tuning.

use sn_core::{Layer, LayerMask};

/// Ray overshoot past each sample point, in world units.
pub const RAY_OVERSHOOT: f32 = 1.0;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SightConfig {
    /// Extra ray length past the sample point so a ray aimed at a surface
    /// point still reaches into the collider.
    pub ray_overshoot: f32,

    /// Layers rays pass through.  Default: only `IGNORE_RAYCAST`.
    pub ignore_layers: LayerMask,

    /// Never count the owner itself as detected.
    pub exclude_self: bool,

    /// Treat a ray toward a contained object that hits nothing as a
    /// protocol violation instead of an ordinary miss.
    pub strict_ray_hits: bool,
}

impl Default for SightConfig {
    fn default() -> Self {
        Self {
            ray_overshoot:   RAY_OVERSHOOT,
            ignore_layers:   LayerMask::of(Layer::IGNORE_RAYCAST),
            exclude_self:    true,
            strict_ray_hits: false,
        }
    }
}

impl SightConfig {
    /// Also let rays pass through editor/debug geometry.
    pub fn with_editor_layer(mut self) -> Self {
        self.ignore_layers = self.ignore_layers.with(Layer::EDITOR_DEBUG);
        self
    }

    pub fn with_overshoot(mut self, overshoot: f32) -> Self {
        self.ray_overshoot = overshoot;
        self
    }

    pub fn with_strict_ray_hits(mut self, on: bool) -> Self {
        self.strict_ray_hits = on;
        self
    }

    pub fn with_exclude_self(mut self, on: bool) -> Self {
        self.exclude_self = on;
        self
    }
}
