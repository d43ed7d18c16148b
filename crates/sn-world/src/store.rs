//! `WorldObjects`: SoA storage for every object the guards can reason about.
//!
//! Every `Vec` field has exactly `count` elements and `ObjectId` is the
//! index into all of them:
//!
//! ```ignore
//! let pos = world.position[id.index()];
//! ```
//!
//! Objects are never removed; a destroyed object is modelled by clearing
//! its capabilities and shape.

use sn_core::{Capabilities, Layer, ObjectId, Quat, SnError, SnResult, Vec3};

use crate::{ObjectSpec, Shape, Silhouette};

/// Structure-of-Arrays storage for world object state.
#[derive(Clone, Debug, Default)]
pub struct WorldObjects {
    /// Number of objects.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Human-readable name, used in logs and diagnostics.
    pub name: Vec<String>,

    // ── Pose ──────────────────────────────────────────────────────────────
    pub position: Vec<Vec3>,
    pub rotation: Vec<Quat>,

    // ── Classification ────────────────────────────────────────────────────
    pub layer: Vec<Layer>,
    pub caps:  Vec<Capabilities>,

    // ── Geometry ──────────────────────────────────────────────────────────
    /// World-space sample points; `None` means "sample the position".
    pub silhouette: Vec<Option<Silhouette>>,
    /// Collider; objects without one are invisible to rays and volumes.
    pub shape: Vec<Option<Shape>>,
}

/// Borrowed read view of a single object.
#[derive(Copy, Clone, Debug)]
pub struct ObjectRef<'a> {
    pub id:         ObjectId,
    pub name:       &'a str,
    pub position:   Vec3,
    pub rotation:   Quat,
    pub layer:      Layer,
    pub caps:       Capabilities,
    pub silhouette: Option<&'a Silhouette>,
    pub shape:      Option<Shape>,
}

impl WorldObjects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            count:      0,
            name:       Vec::with_capacity(n),
            position:   Vec::with_capacity(n),
            rotation:   Vec::with_capacity(n),
            layer:      Vec::with_capacity(n),
            caps:       Vec::with_capacity(n),
            silhouette: Vec::with_capacity(n),
            shape:      Vec::with_capacity(n),
        }
    }

    /// Append an object and return its id.
    ///
    /// Silhouette offsets in the spec are resolved against its position.
    pub fn spawn(&mut self, spec: ObjectSpec) -> ObjectId {
        let id = ObjectId(self.count as u32);
        let silhouette = spec
            .silhouette_offsets
            .map(|offsets| Silhouette::from_offsets(spec.position, &offsets));

        self.name.push(spec.name);
        self.position.push(spec.position);
        self.rotation.push(spec.rotation);
        self.layer.push(spec.layer);
        self.caps.push(spec.caps);
        self.silhouette.push(silhouette);
        self.shape.push(spec.shape);
        self.count += 1;
        id
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub fn contains(&self, id: ObjectId) -> bool {
        id.index() < self.count
    }

    /// All object ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = ObjectId> + '_ {
        (0..self.count as u32).map(ObjectId)
    }

    pub fn get(&self, id: ObjectId) -> Option<ObjectRef<'_>> {
        if !self.contains(id) {
            return None;
        }
        let i = id.index();
        Some(ObjectRef {
            id,
            name:       &self.name[i],
            position:   self.position[i],
            rotation:   self.rotation[i],
            layer:      self.layer[i],
            caps:       self.caps[i],
            silhouette: self.silhouette[i].as_ref(),
            shape:      self.shape[i],
        })
    }

    pub fn find_by_name(&self, name: &str) -> Option<ObjectId> {
        self.name.iter().position(|n| n == name).map(|i| ObjectId(i as u32))
    }

    /// Name for log lines; unknown ids render as their `Display` form.
    pub fn label(&self, id: ObjectId) -> String {
        match self.name.get(id.index()) {
            Some(name) => name.clone(),
            None       => id.to_string(),
        }
    }

    // ── Capability queries ────────────────────────────────────────────────

    /// `false` for unknown ids.
    #[inline]
    pub fn is_detectable(&self, id: ObjectId) -> bool {
        self.caps.get(id.index()).is_some_and(|c| c.is_detectable())
    }

    #[inline]
    pub fn is_autonomous(&self, id: ObjectId) -> bool {
        self.caps.get(id.index()).is_some_and(|c| c.is_autonomous())
    }

    /// Points a Sight aims its rays at: the silhouette when it has any
    /// points, otherwise the object's own position.  Empty for unknown ids.
    pub fn sample_points(&self, id: ObjectId) -> &[Vec3] {
        let i = id.index();
        if i >= self.count {
            return &[];
        }
        match &self.silhouette[i] {
            Some(s) if !s.is_empty() => s.points(),
            _ => std::slice::from_ref(&self.position[i]),
        }
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Move an object by `delta`, carrying its silhouette along.
    pub fn translate(&mut self, id: ObjectId, delta: Vec3) -> SnResult<()> {
        let i = self.checked(id)?;
        self.position[i] += delta;
        if let Some(s) = &mut self.silhouette[i] {
            s.translate(delta);
        }
        Ok(())
    }

    /// Place an object at `position`, carrying its silhouette along.
    pub fn set_position(&mut self, id: ObjectId, position: Vec3) -> SnResult<()> {
        let i = self.checked(id)?;
        let delta = position - self.position[i];
        self.translate(id, delta)
    }

    pub fn set_rotation(&mut self, id: ObjectId, rotation: Quat) -> SnResult<()> {
        let i = self.checked(id)?;
        self.rotation[i] = rotation;
        Ok(())
    }

    pub fn set_layer(&mut self, id: ObjectId, layer: Layer) -> SnResult<()> {
        let i = self.checked(id)?;
        self.layer[i] = layer;
        Ok(())
    }

    pub fn set_capabilities(&mut self, id: ObjectId, caps: Capabilities) -> SnResult<()> {
        let i = self.checked(id)?;
        self.caps[i] = caps;
        Ok(())
    }

    pub fn set_shape(&mut self, id: ObjectId, shape: Option<Shape>) -> SnResult<()> {
        let i = self.checked(id)?;
        self.shape[i] = shape;
        Ok(())
    }

    #[inline]
    fn checked(&self, id: ObjectId) -> SnResult<usize> {
        if self.contains(id) {
            Ok(id.index())
        } else {
            Err(SnError::ObjectNotFound(id))
        }
    }
}
