//! Patrol routes.
//!
//! A guard walks its waypoints forward to the last one, then backward to
//! the first, and so on.  The cursor starts at index 1 because the guard
//! is expected to begin standing on waypoint 0.

use sn_core::Vec3;

use crate::{PatrolError, PatrolResult};

/// An ordered list of at least two waypoints.
#[derive(Clone, Debug, PartialEq)]
pub struct PatrolRoute {
    waypoints: Vec<Vec3>,
}

impl PatrolRoute {
    pub fn new(waypoints: Vec<Vec3>) -> PatrolResult<Self> {
        Self::numbered(0, waypoints)
    }

    /// Like [`new`](Self::new) but names the route in the error.
    pub fn numbered(route: u32, waypoints: Vec<Vec3>) -> PatrolResult<Self> {
        if waypoints.len() < 2 {
            return Err(PatrolError::TooFewWaypoints { route, got: waypoints.len() });
        }
        Ok(Self { waypoints })
    }

    #[inline]
    pub fn waypoints(&self) -> &[Vec3] {
        &self.waypoints
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Always `false`; routes hold at least two points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<Vec3> {
        self.waypoints.get(index).copied()
    }

    /// A fresh cursor aimed at waypoint 1.
    pub fn cursor(&self) -> RouteCursor {
        RouteCursor { next: 1, step: 1 }
    }
}

/// Ping-pong position along a [`PatrolRoute`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RouteCursor {
    next: usize,
    step: isize,
}

impl RouteCursor {
    /// Index of the waypoint currently walked toward.
    #[inline]
    pub fn next_index(&self) -> usize {
        self.next
    }

    /// `+1` walking forward, `-1` walking back.
    #[inline]
    pub fn direction(&self) -> isize {
        self.step
    }

    #[inline]
    pub fn target(&self, route: &PatrolRoute) -> Vec3 {
        route.waypoints[self.next.min(route.len() - 1)]
    }

    /// Aim at the following waypoint, bouncing at both ends.
    pub fn advance(&mut self, route: &PatrolRoute) {
        let last = route.len() - 1;
        if self.next == 0 {
            self.step = 1;
        } else if self.next >= last {
            self.step = -1;
        }
        self.next = self.next.saturating_add_signed(self.step).min(last);
    }
}
