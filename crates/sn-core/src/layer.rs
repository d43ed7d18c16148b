//! Object categories ("layers") and category masks.
//!
//! There are 32 categories.  The raycast primitive takes a mask of
//! categories to skip; Sight's default mask skips exactly
//! [`Layer::IGNORE_RAYCAST`].

use std::fmt;

/// A category tag attached to every world object.  Valid range `0..=31`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layer(pub u8);

impl Layer {
    pub const DEFAULT: Layer = Layer(0);
    pub const TRANSPARENT_FX: Layer = Layer(1);
    /// Objects on this layer never block or receive raycasts.
    pub const IGNORE_RAYCAST: Layer = Layer(2);
    /// Editor gizmos and debug meshes.
    pub const EDITOR_DEBUG: Layer = Layer(31);

    /// Highest valid layer index.
    pub const MAX: u8 = 31;

    /// `None` if `n` is out of range.
    pub fn new(n: u8) -> Option<Layer> {
        (n <= Self::MAX).then_some(Layer(n))
    }

    /// Single-bit mask for this layer.
    #[inline]
    pub fn as_mask(self) -> LayerMask {
        LayerMask(1u32 << (self.0 & Self::MAX))
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Layer::DEFAULT        => f.write_str("default"),
            Layer::TRANSPARENT_FX => f.write_str("transparent-fx"),
            Layer::IGNORE_RAYCAST => f.write_str("ignore-raycast"),
            Layer::EDITOR_DEBUG   => f.write_str("editor-debug"),
            Layer(n)              => write!(f, "layer-{n}"),
        }
    }
}

/// A set of layers packed into a `u32`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayerMask(pub u32);

impl LayerMask {
    pub const NONE: LayerMask = LayerMask(0);
    pub const ALL: LayerMask = LayerMask(u32::MAX);

    #[inline]
    pub fn of(layer: Layer) -> LayerMask {
        layer.as_mask()
    }

    #[inline]
    pub fn with(self, layer: Layer) -> LayerMask {
        LayerMask(self.0 | layer.as_mask().0)
    }

    #[inline]
    pub fn without(self, layer: Layer) -> LayerMask {
        LayerMask(self.0 & !layer.as_mask().0)
    }

    #[inline]
    pub fn contains(self, layer: Layer) -> bool {
        self.0 & layer.as_mask().0 != 0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl From<Layer> for LayerMask {
    fn from(layer: Layer) -> LayerMask {
        layer.as_mask()
    }
}

impl fmt::Display for LayerMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}
