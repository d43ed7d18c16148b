//! Per-guard containment tracking: the enter/exit notifier Sight listens to.

use rustc_hash::FxHashSet;

use sn_core::{ObjectId, Quat, Vec3};

use crate::{ColliderIndex, SensingVolume};

/// Notification that an object entered or left a guard's sensing volume.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ContainmentEvent {
    Enter(ObjectId),
    Exit(ObjectId),
}

impl ContainmentEvent {
    pub fn object(self) -> ObjectId {
        match self {
            ContainmentEvent::Enter(o) | ContainmentEvent::Exit(o) => o,
        }
    }
}

/// Remembers which colliders overlapped a volume last tick and reports the
/// difference.
///
/// Membership is physical: it does not care whether the listening Sight is
/// enabled.  An object that stays inside while the Sight is disabled does
/// not produce a fresh `Enter` when the Sight comes back.
#[derive(Clone, Debug, Default)]
pub struct ContainmentTracker {
    inside: FxHashSet<ObjectId>,
}

impl ContainmentTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn contains(&self, object: ObjectId) -> bool {
        self.inside.contains(&object)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inside.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inside.is_empty()
    }

    /// Forget all membership; the next update reports every overlap as new.
    pub fn clear(&mut self) {
        self.inside.clear();
    }

    /// Recompute membership for the owner pose and return the changes.
    ///
    /// All `Enter` events come before all `Exit` events; within each group
    /// events are in ascending id order.
    pub fn update(
        &mut self,
        volume:   &SensingVolume,
        position: Vec3,
        rotation: Quat,
        index:    &ColliderIndex,
    ) -> Vec<ContainmentEvent> {
        let origin = volume.origin(position, rotation);
        let reach = Vec3::splat(volume.reach());

        let now: FxHashSet<ObjectId> = index
            .query_box(origin - reach, origin + reach)
            .filter(|e| volume.overlaps(position, rotation, e.center, e.shape.bounding_radius()))
            .map(|e| e.object)
            .collect();

        let mut entered: Vec<ObjectId> = now.difference(&self.inside).copied().collect();
        let mut exited: Vec<ObjectId> = self.inside.difference(&now).copied().collect();
        entered.sort_unstable();
        exited.sort_unstable();

        if !entered.is_empty() || !exited.is_empty() {
            log::trace!("containment: +{} -{}", entered.len(), exited.len());
        }

        self.inside = now;
        entered
            .into_iter()
            .map(ContainmentEvent::Enter)
            .chain(exited.into_iter().map(ContainmentEvent::Exit))
            .collect()
    }
}
