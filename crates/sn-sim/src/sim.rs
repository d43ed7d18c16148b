//! The `Sim` struct and its tick loop.

use sn_behavior::{HabitContext, Intent};
use sn_core::{GuardId, ObjectId, SimClock, SimConfig, Tick};
use sn_mobility::{MobilityEngine, PathPlanner};
use sn_sight::{SampleReport, SightResult};
use sn_spatial::ColliderIndex;
use sn_world::WorldObjects;

use crate::{Guard, SimError, SimObserver, SimResult};

/// One successful capture.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Capture {
    pub tick:   Tick,
    pub guard:  GuardId,
    pub target: ObjectId,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// Every tick runs these passes in order:
///
/// 1. **Mobility**: actuators advance along their paths.
/// 2. **Colliders**: the R-tree is rebuilt from the world.
/// 3. **Containment**: each guard's tracker diffs its sensing volume and
///    feeds `Enter`s then `Exit`s to its Sight.
/// 4. **Sampling**: one raycast pass per guard (parallel with the
///    `parallel` feature).
/// 5. **Diagnostics**: Sight invariant checks when configured.
/// 6. **Habits**: each guard decides its intents from a read-only context.
/// 7. **Apply**: intents are applied in emission order, guard by guard.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: PathPlanner> {
    pub config: SimConfig,
    pub clock:  SimClock,

    /// Object state.  Callers may move non-guard objects between ticks
    /// through [`world_mut`](Self::world_mut).
    pub world: WorldObjects,

    /// Rebuilt at the start of every tick.
    pub colliders: ColliderIndex,

    /// Indexed by `GuardId`.
    pub guards: Vec<Guard>,

    pub mobility: MobilityEngine<P>,

    /// Every capture so far, in order.
    pub captures: Vec<Capture>,

    #[cfg(feature = "parallel")]
    pub(crate) pool: Option<rayon::ThreadPool>,
}

impl<P: PathPlanner> Sim<P> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.clock.current_tick < self.config.end_tick() {
            self.step(observer)?;
        }
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and for scripting the world between ticks.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    pub fn world(&self) -> &WorldObjects {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut WorldObjects {
        &mut self.world
    }

    pub fn guard(&self, id: GuardId) -> Option<&Guard> {
        self.guards.get(id.index())
    }

    pub fn captures(&self) -> &[Capture] {
        &self.captures
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);
        let rays = self.process_tick(now, observer)?;
        observer.on_tick_end(now, rays);
        self.clock.advance();
        Ok(())
    }

    fn process_tick<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> SimResult<usize> {
        let dt = self.config.fixed_dt_secs;

        // ── Phase 1: mobility ─────────────────────────────────────────────
        //
        // Guards without a path stay glued to their body so the next
        // `MoveTo` plans from where the body really is.
        for guard in &self.guards {
            self.mobility.sync_idle(guard.id, self.world.position[guard.body.index()])?;
        }
        self.mobility.advance_all(dt);

        // ── Phase 2: collider index ───────────────────────────────────────
        self.colliders.rebuild(&self.world)?;

        // ── Phase 3: containment ──────────────────────────────────────────
        for guard in &mut self.guards {
            let i = guard.body.index();
            let events = guard.tracker.update(
                &guard.volume,
                self.world.position[i],
                self.world.rotation[i],
                &self.colliders,
            );
            for event in events {
                let object = event.object();
                let was_found = guard.sight.found().contains(object);
                guard.sight.apply(event, &self.world);
                if was_found && !guard.sight.found().contains(object) {
                    observer.on_lost(now, guard.id, object);
                }
            }
        }

        // ── Phase 4: sampling ─────────────────────────────────────────────
        let reports = self.sample_all();
        let mut skip = vec![false; self.guards.len()];
        let mut rays = 0;
        for (guard, report) in self.guards.iter().zip(reports) {
            match report {
                Ok(report) => {
                    rays += report.rays as usize;
                    for object in report.newly_found {
                        observer.on_found(now, guard.id, object);
                    }
                }
                Err(source) => {
                    let err = SimError::Sight { guard: guard.id, source };
                    skip[guard.id.index()] = true;
                    violation(&self.config, observer, now, err)?;
                }
            }
        }

        // ── Phase 5: diagnostics ──────────────────────────────────────────
        if self.config.check_invariants {
            for guard in &self.guards {
                if let Err(source) = guard.sight.check_invariants(&self.world) {
                    skip[guard.id.index()] = true;
                    violation(&self.config, observer, now, SimError::Sight { guard: guard.id, source })?;
                }
            }
        }

        // ── Phases 6 + 7: habits, then apply ──────────────────────────────
        for gi in 0..self.guards.len() {
            if skip[gi] {
                continue;
            }
            let Some(intents) = self.tick_habit(gi, now, dt, observer)? else {
                continue;
            };
            let guard = &self.guards[gi];
            let (id, body) = (guard.id, guard.body);
            self.apply_intents(id, body, intents, now, observer)?;
        }

        Ok(rays)
    }

    /// Run one guard's habit.  `None` means the update was dropped as a
    /// violation.
    fn tick_habit<O: SimObserver>(
        &mut self,
        gi:       usize,
        now:      Tick,
        dt:       f32,
        observer: &mut O,
    ) -> SimResult<Option<Vec<Intent>>> {
        let guard = &mut self.guards[gi];
        let me = guard.body.index();
        let ctx = HabitContext {
            tick:         now,
            dt_secs:      dt,
            guard:        guard.id,
            body:         guard.body,
            position:     self.world.position[me],
            rotation:     self.world.rotation[me],
            reach_radius: guard.reach_radius,
            path:         self.mobility.view(guard.id)?,
            world:        &self.world,
        };

        let before = guard.habit.phase();
        let result = guard.habit.tick(&ctx, &mut guard.sight);
        let after = guard.habit.phase();
        if before != after {
            observer.on_phase_change(now, guard.id, before, after);
        }

        match result {
            Ok(intents) => Ok(Some(intents)),
            Err(source) => {
                let err = SimError::Behavior { guard: guard.id, source };
                violation(&self.config, observer, now, err)?;
                Ok(None)
            }
        }
    }

    fn apply_intents<O: SimObserver>(
        &mut self,
        guard:    GuardId,
        body:     ObjectId,
        intents:  Vec<Intent>,
        now:      Tick,
        observer: &mut O,
    ) -> SimResult<()> {
        for intent in intents {
            match intent {
                // ── Path intents go to the actuator ────────────────────────
                Intent::MoveTo(_) | Intent::ResetPath => {
                    if let Err(e) = self.mobility.apply(guard, &intent) {
                        // Planning failure is non-fatal: the guard stays put.
                        log::warn!("{guard}: {e}");
                    }
                }

                // ── FollowPath: adopt the actuator's position ──────────────
                Intent::FollowPath => {
                    let next = self.mobility.view(guard)?.next_position;
                    self.world.set_position(body, next)?;
                }

                Intent::Face(rotation) => {
                    self.world.set_rotation(body, rotation)?;
                }

                Intent::Capture(target) => {
                    log::info!(
                        "tick {now}: {} captured {}",
                        self.world.label(body),
                        self.world.label(target),
                    );
                    self.captures.push(Capture { tick: now, guard, target });
                    observer.on_capture(now, guard, target);
                }
            }
        }
        Ok(())
    }

    /// One sampling pass per guard.
    fn sample_all(&mut self) -> Vec<SightResult<SampleReport>> {
        let world = &self.world;
        let colliders = &self.colliders;
        let guards = &mut self.guards;

        #[cfg(not(feature = "parallel"))]
        {
            guards.iter_mut().map(|g| g.sight.sample(world, colliders)).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            let mut pass = move || -> Vec<SightResult<SampleReport>> {
                guards.par_iter_mut().map(|g| g.sight.sample(world, colliders)).collect()
            };
            match &self.pool {
                Some(pool) => pool.install(pass),
                None       => pass(),
            }
        }
    }
}

/// Abort with `err` when the config says so; otherwise log it and tell the
/// observer.
fn violation<O: SimObserver>(
    config:   &SimConfig,
    observer: &mut O,
    now:      Tick,
    err:      SimError,
) -> SimResult<()> {
    if config.abort_on_violation {
        return Err(err);
    }
    log::error!("tick {now}: {err}");
    observer.on_violation(now, &err);
    Ok(())
}
