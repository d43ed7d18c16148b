//! R-tree collider index with exact ray tests.
//!
//! # Design
//!
//! Every object with a [`Shape`] becomes one [`ColliderEntry`] whose
//! envelope is its world AABB.  A raycast first collects candidates whose
//! envelope intersects the ray segment's AABB, then runs an exact
//! ray–sphere or ray–box (slab) test on each.  The index is a snapshot:
//! rebuild it after moving objects or changing their layers.

use rstar::{RTree, RTreeObject, AABB};

use sn_core::{Layer, LayerMask, ObjectId, Vec3};
use sn_world::{Shape, WorldObjects};

use crate::{Ray, RayHit, Raycaster, SpatialError, SpatialResult};

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// One collider as stored in the R-tree.
#[derive(Clone, Debug)]
pub struct ColliderEntry {
    pub object: ObjectId,
    pub center: Vec3,
    pub shape:  Shape,
    pub layer:  Layer,
}

impl ColliderEntry {
    /// Exact entry distance along `ray`, if it hits within `max_distance`.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let t = match self.shape {
            Shape::Sphere { radius } => ray_sphere(ray, self.center, radius),
            Shape::Box { half_extents } => {
                ray_box(ray, self.center - half_extents, self.center + half_extents)
            }
        }?;
        (t <= ray.max_distance).then_some(t)
    }
}

impl RTreeObject for ColliderEntry {
    type Envelope = AABB<[f32; 3]>;

    fn envelope(&self) -> Self::Envelope {
        let h = self.shape.half_extents();
        AABB::from_corners((self.center - h).to_array(), (self.center + h).to_array())
    }
}

// ── ColliderIndex ─────────────────────────────────────────────────────────────

/// Snapshot of every collider in a [`WorldObjects`], indexed for raycasts
/// and volume queries.
pub struct ColliderIndex {
    tree: RTree<ColliderEntry>,
}

impl Default for ColliderIndex {
    fn default() -> Self {
        Self::empty()
    }
}

impl ColliderIndex {
    pub fn empty() -> Self {
        Self { tree: RTree::new() }
    }

    /// Bulk-load every object that has a shape.
    ///
    /// Fails if any collider position or extent is not finite, since such an
    /// entry would poison the tree's envelopes.
    pub fn from_world(world: &WorldObjects) -> SpatialResult<Self> {
        let mut entries = Vec::with_capacity(world.count);
        for id in world.ids() {
            let i = id.index();
            let Some(shape) = world.shape[i] else { continue };
            let center = world.position[i];
            if !center.is_finite() || !shape.half_extents().is_finite() {
                return Err(SpatialError::NonFinite(id));
            }
            entries.push(ColliderEntry { object: id, center, shape, layer: world.layer[i] });
        }
        Ok(Self { tree: RTree::bulk_load(entries) })
    }

    /// Replace the snapshot with the current state of `world`.
    pub fn rebuild(&mut self, world: &WorldObjects) -> SpatialResult<()> {
        *self = Self::from_world(world)?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Colliders whose AABB overlaps the box `[min, max]`.
    pub fn query_box(&self, min: Vec3, max: Vec3) -> impl Iterator<Item = &ColliderEntry> {
        let env = AABB::from_corners(min.to_array(), max.to_array());
        self.tree.locate_in_envelope_intersecting(&env)
    }
}

impl Raycaster for ColliderIndex {
    fn raycast(&self, ray: &Ray, ignore: LayerMask) -> Option<RayHit> {
        let end = ray.at(ray.max_distance);
        let mut best: Option<(f32, ObjectId)> = None;

        for entry in self.query_box(ray.origin.min(end), ray.origin.max(end)) {
            if ignore.contains(entry.layer) || entry.shape.contains(entry.center, ray.origin) {
                continue;
            }
            let Some(t) = entry.intersect(ray) else { continue };
            // Equal distances resolve to the lower id so results never depend
            // on tree layout.
            let closer = match best {
                None => true,
                Some((bt, bid)) => t < bt || (t == bt && entry.object < bid),
            };
            if closer {
                best = Some((t, entry.object));
            }
        }

        best.map(|(distance, object)| RayHit { object, distance, point: ray.at(distance) })
    }
}

// ── Exact intersection tests ──────────────────────────────────────────────────

/// Entry distance of `ray` into a sphere, ignoring hits behind the origin.
fn ray_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.direction);
    let c = oc.length_squared() - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Slab test against the box `[min, max]`.
fn ray_box(ray: &Ray, min: Vec3, max: Vec3) -> Option<f32> {
    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;

    for axis in 0..3 {
        let o = ray.origin[axis];
        let d = ray.direction[axis];
        if d.abs() < f32::EPSILON {
            if o < min[axis] || o > max[axis] {
                return None;
            }
            continue;
        }
        let inv = 1.0 / d;
        let mut t0 = (min[axis] - o) * inv;
        let mut t1 = (max[axis] - o) * inv;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_near = t_near.max(t0);
        t_far = t_far.min(t1);
        if t_near > t_far {
            return None;
        }
    }

    (t_near >= 0.0).then_some(t_near)
}
