//! CSV loaders for designer data.
//!
//! # Routes
//!
//! One row per waypoint.  Rows may appear in any order; `seq` orders the
//! waypoints within a route.
//!
//! ```csv
//! route_id,seq,x,y,z
//! 0,0,0.0,0.0,0.0
//! 0,1,10.0,0.0,0.0
//! 0,2,10.0,0.0,10.0
//! ```
//!
//! # Sensor points
//!
//! One row per eye or silhouette point, keyed by object name.  Eyes are
//! offsets in the object's local frame; edges are silhouette offsets from
//! the object's position.
//!
//! ```csv
//! object,kind,x,y,z
//! guard,eye,0.0,1.6,0.2
//! thief,edge,0.0,1.8,0.0
//! thief,edge,0.0,0.1,0.0
//! ```

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use sn_core::Vec3;

use crate::{PatrolError, PatrolRoute};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct WaypointRecord {
    route_id: u32,
    seq:      u32,
    x:        f32,
    y:        f32,
    z:        f32,
}

#[derive(Deserialize)]
struct SensorRecord {
    object: String,
    kind:   String,
    x:      f32,
    y:      f32,
    z:      f32,
}

/// Eye and silhouette offsets for one named object.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SensorPoints {
    pub eyes:  Vec<Vec3>,
    pub edges: Vec<Vec3>,
}

// ── Routes ────────────────────────────────────────────────────────────────────

/// Load every route in a CSV file, keyed by `route_id`.
pub fn load_routes_csv(path: &Path) -> Result<BTreeMap<u32, PatrolRoute>, PatrolError> {
    let file = std::fs::File::open(path)?;
    load_routes_reader(file)
}

/// Like [`load_routes_csv`] but accepts any `Read` source.
pub fn load_routes_reader<R: Read>(reader: R) -> Result<BTreeMap<u32, PatrolRoute>, PatrolError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut by_route: BTreeMap<u32, Vec<WaypointRecord>> = BTreeMap::new();

    for result in csv_reader.deserialize::<WaypointRecord>() {
        let row = result.map_err(|e| PatrolError::Parse(e.to_string()))?;
        by_route.entry(row.route_id).or_default().push(row);
    }

    by_route
        .into_iter()
        .map(|(route, mut rows)| {
            rows.sort_by_key(|r| r.seq);
            if let Some(w) = rows.windows(2).find(|w| w[0].seq == w[1].seq) {
                return Err(PatrolError::Parse(format!(
                    "route {route} repeats waypoint seq {}",
                    w[0].seq
                )));
            }
            let points = rows.iter().map(|r| Vec3::new(r.x, r.y, r.z)).collect();
            Ok((route, PatrolRoute::numbered(route, points)?))
        })
        .collect()
}

// ── Sensor points ─────────────────────────────────────────────────────────────

/// Load eye and silhouette offsets, keyed by object name.
pub fn load_sensor_points_csv(path: &Path) -> Result<BTreeMap<String, SensorPoints>, PatrolError> {
    let file = std::fs::File::open(path)?;
    load_sensor_points_reader(file)
}

/// Like [`load_sensor_points_csv`] but accepts any `Read` source.
pub fn load_sensor_points_reader<R: Read>(
    reader: R,
) -> Result<BTreeMap<String, SensorPoints>, PatrolError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut by_object: BTreeMap<String, SensorPoints> = BTreeMap::new();

    for result in csv_reader.deserialize::<SensorRecord>() {
        let row = result.map_err(|e| PatrolError::Parse(e.to_string()))?;
        let point = Vec3::new(row.x, row.y, row.z);
        let entry = by_object.entry(row.object).or_default();
        match row.kind.trim() {
            "eye"  => entry.eyes.push(point),
            "edge" => entry.edges.push(point),
            other  => {
                return Err(PatrolError::Parse(format!(
                    "invalid sensor kind {other:?}: expected \"eye\" or \"edge\""
                )));
            }
        }
    }

    Ok(by_object)
}
