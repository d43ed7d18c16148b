//! The `Sight` engine.

use sn_core::{ObjectId, Vec3};
use sn_spatial::{ContainmentEvent, Ray, Raycaster};
use sn_world::WorldObjects;

use crate::{EyeSet, ObjectSet, SightConfig, SightError, SightResult, Tally};

// ── SampleReport ──────────────────────────────────────────────────────────────

/// What one sampling pass did.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SampleReport {
    /// Rays cast.
    pub rays: u32,
    /// Rays that struck some collider.
    pub hits: u32,
    /// Objects promoted into the found set by this pass, in order.
    pub newly_found: Vec<ObjectId>,
}

// ── Sight ─────────────────────────────────────────────────────────────────────

/// Per-guard visibility state.
///
/// Lifecycle: created enabled and empty; [`register`](Self::register) binds
/// it to its owner and eyes; the containment notifier calls
/// [`include`](Self::include)/[`exclude`](Self::exclude); the tick loop
/// calls [`sample`](Self::sample); the owner's habit polls the counters and
/// may [`disable`](Self::disable) / [`enable`](Self::enable) it.
#[derive(Clone, Debug)]
pub struct Sight {
    config:      SightConfig,
    owner:       Option<ObjectId>,
    eyes:        EyeSet,
    containment: ObjectSet,
    found:       ObjectSet,
    found_tally: Tally,
    lost_tally:  Tally,
    enabled:     bool,
}

impl Default for Sight {
    fn default() -> Self {
        Self::new(SightConfig::default())
    }
}

impl Sight {
    pub fn new(config: SightConfig) -> Self {
        Self {
            config,
            owner:       None,
            eyes:        EyeSet::single(),
            containment: ObjectSet::new(),
            found:       ObjectSet::new(),
            found_tally: Tally::default(),
            lost_tally:  Tally::default(),
            enabled:     true,
        }
    }

    /// Bind the Sight to the object that owns it.
    pub fn register(&mut self, owner: ObjectId, eyes: EyeSet) {
        self.owner = Some(owner);
        self.eyes = eyes;
    }

    // ── Containment notifications ─────────────────────────────────────────

    /// Add `obj` to the containment set.  Returns whether membership changed.
    ///
    /// No-op while disabled, for undetectable objects, and for members.
    pub fn include(&mut self, obj: ObjectId, world: &WorldObjects) -> bool {
        if !self.enabled || !self.accepts(obj, world) {
            return false;
        }
        let added = self.containment.insert(obj);
        if added {
            log::trace!("{} feels {}", self.owner_label(world), world.label(obj));
        }
        added
    }

    /// Remove `obj` from the containment set, and from the found set if it
    /// was visible (bumping the lost counter).  Returns whether membership
    /// changed.
    pub fn exclude(&mut self, obj: ObjectId, world: &WorldObjects) -> bool {
        if !self.enabled || !self.accepts(obj, world) || !self.containment.remove(obj) {
            return false;
        }
        if self.found.remove(obj) {
            self.lost_tally.bump();
            log::debug!("{} lost {}", self.owner_label(world), world.label(obj));
        }
        true
    }

    /// Dispatch one notification from the containment broad-phase.
    pub fn apply(&mut self, event: ContainmentEvent, world: &WorldObjects) -> bool {
        match event {
            ContainmentEvent::Enter(obj) => self.include(obj, world),
            ContainmentEvent::Exit(obj)  => self.exclude(obj, world),
        }
    }

    // ── Sampling ──────────────────────────────────────────────────────────

    /// Cast one ray per (eye, contained object, sample point) and promote
    /// every detectable, contained, not-yet-found first hit.
    ///
    /// Nothing is ever removed here; losing an object only happens through
    /// [`exclude`](Self::exclude).
    pub fn sample<R: Raycaster + ?Sized>(
        &mut self,
        world:  &WorldObjects,
        caster: &R,
    ) -> SightResult<SampleReport> {
        let mut report = SampleReport::default();
        if !self.enabled || self.containment.is_empty() {
            return Ok(report);
        }

        let owner = self.owner.ok_or(SightError::NotRegistered)?;
        let pose = world.get(owner).ok_or(SightError::OwnerMissing(owner))?;
        let eyes = self.eyes.world_points(pose.position, pose.rotation);

        for eye in eyes {
            for target in self.containment.iter() {
                for &point in world.sample_points(target) {
                    let Ok(ray) = Ray::toward(eye, point, self.config.ray_overshoot) else {
                        continue;
                    };
                    report.rays += 1;

                    let Some(hit) = caster.raycast(&ray, self.config.ignore_layers) else {
                        if self.config.strict_ray_hits {
                            return Err(SightError::RayMissed { eye, object: target });
                        }
                        continue;
                    };
                    report.hits += 1;

                    let candidate = hit.object;
                    if self.found.contains(candidate)
                        || !self.containment.contains(candidate)
                        || !self.accepts(candidate, world)
                    {
                        continue;
                    }
                    self.found.insert(candidate);
                    self.found_tally.bump();
                    report.newly_found.push(candidate);
                    log::debug!(
                        "{} found {} at {:.2}",
                        world.label(owner),
                        world.label(candidate),
                        hit.distance,
                    );
                }
            }
        }

        Ok(report)
    }

    // ── Counters ──────────────────────────────────────────────────────────

    /// Objects found since the last call.
    pub fn consume_found(&mut self) -> u32 {
        self.found_tally.consume()
    }

    /// Objects lost since the last call.
    pub fn consume_lost(&mut self) -> u32 {
        self.lost_tally.consume()
    }

    pub fn pending_found(&self) -> u32 {
        self.found_tally.peek()
    }

    pub fn pending_lost(&self) -> u32 {
        self.lost_tally.peek()
    }

    // ── Enable / disable ──────────────────────────────────────────────────

    /// Forget everything and ignore notifications until re-enabled.
    pub fn disable(&mut self) {
        self.containment.clear();
        self.found.clear();
        self.found_tally.reset();
        self.lost_tally.reset();
        self.enabled = false;
    }

    /// Start listening again.  Sets stay empty until new `Enter`s arrive.
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Something detectable is inside the sensing volume.
    #[inline]
    pub fn is_feeling_presence(&self) -> bool {
        !self.containment.is_empty()
    }

    /// Something is confirmed visible.
    #[inline]
    pub fn is_object_visible(&self) -> bool {
        !self.found.is_empty()
    }

    #[inline]
    pub fn found(&self) -> &ObjectSet {
        &self.found
    }

    #[inline]
    pub fn containment(&self) -> &ObjectSet {
        &self.containment
    }

    #[inline]
    pub fn owner(&self) -> Option<ObjectId> {
        self.owner
    }

    #[inline]
    pub fn eyes(&self) -> &EyeSet {
        &self.eyes
    }

    #[inline]
    pub fn config(&self) -> &SightConfig {
        &self.config
    }

    /// The found object nearest to `from`.  Ties keep the earlier-found one.
    pub fn closest_found(&self, from: Vec3, world: &WorldObjects) -> Option<ObjectId> {
        let mut best: Option<(f32, ObjectId)> = None;
        for id in self.found.iter() {
            let Some(&pos) = world.position.get(id.index()) else { continue };
            let d = pos.distance_squared(from);
            if best.is_none_or(|(bd, _)| d < bd) {
                best = Some((d, id));
            }
        }
        best.map(|(_, id)| id)
    }

    // ── Diagnostics ───────────────────────────────────────────────────────

    /// Verify the set relations.  Any error means a bookkeeping bug.
    pub fn check_invariants(&self, world: &WorldObjects) -> SightResult<()> {
        let owner = self.owner.unwrap_or(ObjectId::INVALID);
        if let Some(object) = self.found.iter().find(|&f| !self.containment.contains(f)) {
            return Err(SightError::FoundNotContained { owner, object });
        }
        if let Some(object) = self.containment.iter().find(|&c| !self.accepts(c, world)) {
            return Err(SightError::MissingCapability { owner, object });
        }
        Ok(())
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// The detectability predicate.
    #[inline]
    fn accepts(&self, obj: ObjectId, world: &WorldObjects) -> bool {
        world.is_detectable(obj) && !(self.config.exclude_self && self.owner == Some(obj))
    }

    fn owner_label(&self, world: &WorldObjects) -> String {
        match self.owner {
            Some(o) => world.label(o),
            None    => "unregistered sight".to_owned(),
        }
    }
}
