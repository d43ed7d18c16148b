//! Fluent builder for constructing a [`Sim`].

use sn_core::{GuardId, SimConfig};
use sn_mobility::{MobilityEngine, PathPlanner};
use sn_sight::Sight;
use sn_spatial::{ColliderIndex, ContainmentTracker};
use sn_world::WorldObjects;

use crate::guard::{FALLBACK_REACH, REACH_MARGIN};
use crate::{Guard, GuardSpec, Sim, SimError, SimResult};

/// Fluent builder for [`Sim<P>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: fixed step, total ticks, violation policy
/// - [`WorldObjects`]: every object, guards' bodies included
/// - `P: PathPlanner`: e.g. [`sn_mobility::StraightLinePlanner`]
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, world, StraightLinePlanner)
///     .guard(GuardSpec::new(body, SensingVolume::cone(12.0, 45.0)?, LinearPursuitHabit::new()))
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<P: PathPlanner> {
    config:  SimConfig,
    world:   WorldObjects,
    planner: P,
    guards:  Vec<GuardSpec>,
}

impl<P: PathPlanner> SimBuilder<P> {
    pub fn new(config: SimConfig, world: WorldObjects, planner: P) -> Self {
        Self { config, world, planner, guards: Vec::new() }
    }

    /// Add one guard.  Guards get ids in the order they are added.
    pub fn guard(mut self, spec: GuardSpec) -> Self {
        self.guards.push(spec);
        self
    }

    pub fn guards(mut self, specs: impl IntoIterator<Item = GuardSpec>) -> Self {
        self.guards.extend(specs);
        self
    }

    /// Validate inputs, register every guard's Sight, build the collider
    /// index and mobility engine, and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<P>> {
        let dt = self.config.fixed_dt_secs;
        if !(dt > 0.0 && dt.is_finite()) {
            return Err(SimError::Config(format!("fixed_dt_secs must be positive, got {dt}")));
        }
        // The top id is reserved for `GuardId::INVALID`.
        if self.guards.len() >= usize::from(GuardId::INVALID.0) {
            return Err(SimError::Config(format!("{} guards exceed the GuardId range", self.guards.len())));
        }

        let world = self.world;
        let mut mobility = MobilityEngine::new(self.planner);
        let mut guards = Vec::with_capacity(self.guards.len());

        for spec in self.guards {
            let Some(body) = world.get(spec.body) else {
                return Err(SimError::Config(format!("guard body {} does not exist", spec.body)));
            };
            if !body.caps.is_autonomous() {
                return Err(SimError::Config(format!("guard body {} is not autonomous", body.name)));
            }
            if !(spec.speed >= 0.0 && spec.speed.is_finite()) {
                return Err(SimError::Config(format!("guard {} has speed {}", body.name, spec.speed)));
            }

            let id: GuardId = mobility.place(body.position, spec.speed);
            let reach_radius = spec
                .reach_radius
                .unwrap_or_else(|| body.shape.map_or(FALLBACK_REACH, |s| s.bounding_radius() + REACH_MARGIN));

            let mut sight = Sight::new(spec.sight);
            sight.register(spec.body, spec.eyes);

            log::debug!("{id} is {} with {} habit", body.name, spec.habit.name());
            guards.push(Guard {
                id,
                body: spec.body,
                sight,
                volume: spec.volume,
                tracker: ContainmentTracker::new(),
                habit: spec.habit,
                reach_radius,
            });
        }

        let colliders = ColliderIndex::from_world(&world)?;

        #[cfg(feature = "parallel")]
        let pool = match self.config.num_threads {
            Some(n) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| SimError::Config(format!("thread pool: {e}")))?,
            ),
            None => None,
        };

        Ok(Sim {
            clock: self.config.make_clock(),
            config: self.config,
            world,
            colliders,
            guards,
            mobility,
            captures: Vec::new(),
            #[cfg(feature = "parallel")]
            pool,
        })
    }
}
