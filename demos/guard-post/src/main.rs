//! guard-post — a small courtyard watched by two guards.
//!
//! One guard patrols a loop with the linear pursuit habit; the other stands
//! at the gate with the straight pursuit habit.  An intruder walks across the
//! yard along a jittered line, scripted between tick batches.  Every found,
//! lost, phase change and capture is printed as it happens.

use std::io::Cursor;
use std::time::Instant;

use anyhow::{Context, Result};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use sn_behavior::{LinearPursuitHabit, StraightPursuitHabit};
use sn_core::geom::facing_toward;
use sn_core::{GuardId, ObjectId, SimConfig, Tick, Vec3};
use sn_mobility::StraightLinePlanner;
use sn_patrol::load_routes_reader;
use sn_sim::{GuardSpec, SimBuilder, SimObserver};
use sn_spatial::SensingVolume;
use sn_world::{ObjectSpec, Shape, WorldObjects};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:          u64 = 7;
const FIXED_DT_SECS: f32 = 0.1;
const TOTAL_TICKS:   u64 = 600;  // one simulated minute
const BATCH_TICKS:   u64 = 5;    // intruder moves once per batch
const INTRUDER_STEP: f32 = 0.6;  // metres per batch
const JITTER:        f32 = 0.15;

// ── Patrol CSV ────────────────────────────────────────────────────────────────

// Route 1 is the courtyard loop walked by the patrolling guard.
const ROUTES_CSV: &str = "\
route_id,seq,x,y,z\n\
1,0,0,0,0\n\
1,1,0,0,6\n\
1,2,6,0,6\n\
1,3,6,0,0\n\
";

// ── Observer ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct EventLog {
    names:    Vec<String>,
    found:    usize,
    lost:     usize,
    captures: usize,
    rays:     usize,
}

impl EventLog {
    fn guard_name(&self, guard: GuardId) -> &str {
        self.names.get(guard.index()).map_or("?", String::as_str)
    }
}

impl SimObserver for EventLog {
    fn on_tick_end(&mut self, _tick: Tick, rays: usize) {
        self.rays += rays;
    }

    fn on_found(&mut self, tick: Tick, guard: GuardId, object: ObjectId) {
        self.found += 1;
        println!("[{tick}] {:<8} spots    {object}", self.guard_name(guard));
    }

    fn on_lost(&mut self, tick: Tick, guard: GuardId, object: ObjectId) {
        self.lost += 1;
        println!("[{tick}] {:<8} loses    {object}", self.guard_name(guard));
    }

    fn on_phase_change(&mut self, tick: Tick, guard: GuardId, from: &'static str, to: &'static str) {
        println!("[{tick}] {:<8} {from} -> {to}", self.guard_name(guard));
    }

    fn on_capture(&mut self, tick: Tick, guard: GuardId, target: ObjectId) {
        self.captures += 1;
        println!("[{tick}] {:<8} CAPTURES {target}", self.guard_name(guard));
    }
}

// ── Scene ─────────────────────────────────────────────────────────────────────

struct Courtyard {
    world:    WorldObjects,
    patrol:   ObjectId,
    gate:     ObjectId,
    intruder: ObjectId,
}

fn build_courtyard() -> Courtyard {
    let mut world = WorldObjects::new();

    let patrol = world.spawn(
        ObjectSpec::new("patrol")
            .detectable()
            .autonomous()
            .shape(Shape::Sphere { radius: 0.5 }),
    );
    let gate_post = Vec3::new(14.0, 0.0, 3.0);
    let gate = world.spawn(
        ObjectSpec::new("gate")
            .at(gate_post)
            .facing(facing_toward(gate_post, Vec3::new(0.0, 0.0, 3.0)))
            .detectable()
            .autonomous()
            .shape(Shape::Sphere { radius: 0.5 }),
    );

    // A crate stack the intruder can duck behind.
    world.spawn(
        ObjectSpec::new("crates")
            .at(Vec3::new(3.0, 0.0, 9.0))
            .shape(Shape::Box { half_extents: Vec3::new(1.0, 1.0, 0.5) }),
    );

    // Head, shoulders and feet: any one of them in view is enough.
    let intruder = world.spawn(
        ObjectSpec::new("intruder")
            .at(Vec3::new(-10.0, 0.0, 11.0))
            .detectable()
            .shape(Shape::Sphere { radius: 0.4 })
            .silhouette(vec![
                Vec3::new(0.0, 0.35, 0.0),
                Vec3::new(0.3, 0.1, 0.0),
                Vec3::new(-0.3, 0.1, 0.0),
                Vec3::new(0.0, -0.35, 0.0),
            ]),
    );

    Courtyard { world, patrol, gate, intruder }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("=== guard-post — sneak perception demo ===");
    println!("Ticks: {TOTAL_TICKS} @ {FIXED_DT_SECS} s  |  Seed: {SEED}");
    println!();

    // 1. Scene and patrol route.
    let yard = build_courtyard();
    let mut routes = load_routes_reader(Cursor::new(ROUTES_CSV))?;
    let loop_route = routes.remove(&1).context("route 1 missing from the patrol CSV")?;
    println!("Loaded patrol route with {} waypoints", loop_route.len());

    // 2. Guards.
    let config = SimConfig::default()
        .with_fixed_dt(FIXED_DT_SECS)
        .with_total_ticks(TOTAL_TICKS)
        .with_abort_on_violation(false);

    let patrol_spec = GuardSpec::new(
        yard.patrol,
        SensingVolume::cone(9.0, 35.0)?,
        LinearPursuitHabit::new().with_patrol(loop_route),
    );
    let gate_spec = GuardSpec::new(
        yard.gate,
        SensingVolume::cone(12.0, 25.0)?,
        StraightPursuitHabit::new(),
    )
    .with_speed(4.5);

    let names = vec![
        yard.world.label(yard.patrol),
        yard.world.label(yard.gate),
    ];
    let intruder = yard.intruder;

    let mut sim = SimBuilder::new(config, yard.world, StraightLinePlanner)
        .guard(patrol_spec)
        .guard(gate_spec)
        .build()?;

    // 3. Run in batches, walking the intruder east between them.
    let mut obs = EventLog { names, ..EventLog::default() };
    let mut rng = SmallRng::seed_from_u64(SEED);
    let t0 = Instant::now();

    while sim.clock.current_tick < sim.config.end_tick() {
        let jitter = rng.gen_range(-JITTER..=JITTER);
        sim.world_mut().translate(intruder, Vec3::new(INTRUDER_STEP, 0.0, jitter))?;
        sim.run_ticks(BATCH_TICKS, &mut obs)?;
        if !sim.captures().is_empty() {
            break;
        }
    }
    let elapsed = t0.elapsed();

    // 4. Summary.
    println!();
    println!("Stopped at {} after {:.3} s wall time", sim.clock, elapsed.as_secs_f64());
    println!("  rays cast : {}", obs.rays);
    println!("  found     : {}", obs.found);
    println!("  lost      : {}", obs.lost);
    println!("  captures  : {}", obs.captures);
    println!();

    println!("{:<10} {:<26} {:<20}", "Guard", "Phase", "Position");
    println!("{}", "-".repeat(56));
    for guard in &sim.guards {
        let p = sim.world().position[guard.body.index()];
        println!(
            "{:<10} {:<26} ({:>5.1}, {:>5.1})",
            sim.world().label(guard.body),
            guard.phase(),
            p.x,
            p.z,
        );
    }
    let p = sim.world().position[intruder.index()];
    println!("intruder ended at ({:.1}, {:.1})", p.x, p.z);

    Ok(())
}
