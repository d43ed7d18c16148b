//! Behavior state machines.
//!
//! A state enum implements [`Protocol`] by listing, for every target state,
//! the states it may be entered from.  [`StateMachine::transition`] refuses
//! anything else with [`BehaviorError::InvalidTransition`]; there is no
//! silent "stay" transition, so callers check the current state first.
//!
//! # Full variant ([`PursuitState`])
//!
//! | from                          | to                      |
//! |-------------------------------|-------------------------|
//! | GoBack                        | Wonder                  |
//! | Wonder                        | Track                   |
//! | Track                         | ReachedAttackDistance   |
//! | ReachedAttackDistance         | SearchingAttackObj      |
//! | SearchingAttackObj            | LostAttackObj           |
//! | ReachedAttackDistance         | Attacking               |
//! | Track, LostAttackObj          | JustLost                |
//! | JustLost                      | GoBack                  |
//! | any other state               | Disabled (terminal)     |
//!
//! # Reduced variant ([`StraightState`])
//!
//! Wonder → Track → ReachedAttackDistance → JustLost → GoBack → Wonder, with
//! JustLost also reachable straight from Track.

use std::fmt;

use crate::{BehaviorError, BehaviorResult};

// ── Protocol ──────────────────────────────────────────────────────────────────

/// A closed set of states with a fixed transition table.
pub trait Protocol: Copy + Eq + fmt::Debug + Send + 'static {
    /// Every state, in declaration order.
    const ALL: &'static [Self];

    /// States from which `to` may be entered.
    fn sources(to: Self) -> &'static [Self];

    fn name(self) -> &'static str;
}

// ── StateMachine ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct StateMachine<S: Protocol> {
    state: S,
}

impl<S: Protocol + Default> Default for StateMachine<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: Protocol> StateMachine<S> {
    pub fn new(initial: S) -> Self {
        Self { state: initial }
    }

    #[inline]
    pub fn state(&self) -> S {
        self.state
    }

    #[inline]
    pub fn is(&self, state: S) -> bool {
        self.state == state
    }

    #[inline]
    pub fn can_enter(&self, to: S) -> bool {
        S::sources(to).contains(&self.state)
    }

    /// Move to `to`, returning the previous state.
    pub fn transition(&mut self, to: S) -> BehaviorResult<S> {
        if !self.can_enter(to) {
            return Err(BehaviorError::InvalidTransition { from: self.state.name(), to: to.name() });
        }
        let from = std::mem::replace(&mut self.state, to);
        log::debug!("{} -> {}", from.name(), to.name());
        Ok(from)
    }
}

// ── PursuitState ──────────────────────────────────────────────────────────────

/// States of the full pursuit machine.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum PursuitState {
    /// Patrolling.
    #[default]
    Wonder,
    Track,
    ReachedAttackDistance,
    SearchingAttackObj,
    LostAttackObj,
    Attacking,
    JustLost,
    GoBack,
    /// Terminal: the machine no longer reacts to anything.
    Disabled,
}

impl Protocol for PursuitState {
    const ALL: &'static [Self] = &[
        PursuitState::Wonder,
        PursuitState::Track,
        PursuitState::ReachedAttackDistance,
        PursuitState::SearchingAttackObj,
        PursuitState::LostAttackObj,
        PursuitState::Attacking,
        PursuitState::JustLost,
        PursuitState::GoBack,
        PursuitState::Disabled,
    ];

    fn sources(to: Self) -> &'static [Self] {
        use PursuitState::*;
        match to {
            Wonder                => &[GoBack],
            Track                 => &[Wonder],
            ReachedAttackDistance => &[Track],
            SearchingAttackObj    => &[ReachedAttackDistance],
            LostAttackObj         => &[SearchingAttackObj],
            Attacking             => &[ReachedAttackDistance],
            JustLost              => &[Track, LostAttackObj],
            GoBack                => &[JustLost],
            Disabled              => &[
                Wonder, Track, ReachedAttackDistance, SearchingAttackObj,
                LostAttackObj, Attacking, JustLost, GoBack,
            ],
        }
    }

    fn name(self) -> &'static str {
        match self {
            PursuitState::Wonder                => "wonder",
            PursuitState::Track                 => "track",
            PursuitState::ReachedAttackDistance => "reached-attack-distance",
            PursuitState::SearchingAttackObj    => "searching-attack-obj",
            PursuitState::LostAttackObj         => "lost-attack-obj",
            PursuitState::Attacking             => "attacking",
            PursuitState::JustLost              => "just-lost",
            PursuitState::GoBack                => "go-back",
            PursuitState::Disabled              => "disabled",
        }
    }
}

impl fmt::Display for PursuitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl StateMachine<PursuitState> {
    pub fn to_wonder(&mut self) -> BehaviorResult<PursuitState> {
        self.transition(PursuitState::Wonder)
    }

    pub fn to_track(&mut self) -> BehaviorResult<PursuitState> {
        self.transition(PursuitState::Track)
    }

    pub fn to_reach_attack_distance(&mut self) -> BehaviorResult<PursuitState> {
        self.transition(PursuitState::ReachedAttackDistance)
    }

    pub fn to_search_attack_obj(&mut self) -> BehaviorResult<PursuitState> {
        self.transition(PursuitState::SearchingAttackObj)
    }

    pub fn to_lose_attack_obj(&mut self) -> BehaviorResult<PursuitState> {
        self.transition(PursuitState::LostAttackObj)
    }

    pub fn to_attack(&mut self) -> BehaviorResult<PursuitState> {
        self.transition(PursuitState::Attacking)
    }

    pub fn to_just_lost(&mut self) -> BehaviorResult<PursuitState> {
        self.transition(PursuitState::JustLost)
    }

    pub fn to_go_back(&mut self) -> BehaviorResult<PursuitState> {
        self.transition(PursuitState::GoBack)
    }

    /// Enter the terminal state.  A second call is a no-op.
    pub fn disable(&mut self) {
        if self.state != PursuitState::Disabled {
            log::debug!("{} -> {}", self.state.name(), PursuitState::Disabled.name());
            self.state = PursuitState::Disabled;
        }
    }

    #[inline]
    pub fn is_wondering(&self) -> bool {
        self.is(PursuitState::Wonder)
    }

    #[inline]
    pub fn is_tracking(&self) -> bool {
        self.is(PursuitState::Track)
    }

    #[inline]
    pub fn is_searching(&self) -> bool {
        self.is(PursuitState::SearchingAttackObj)
    }

    #[inline]
    pub fn is_going_back(&self) -> bool {
        self.is(PursuitState::GoBack)
    }

    #[inline]
    pub fn is_disabled(&self) -> bool {
        self.is(PursuitState::Disabled)
    }
}

// ── StraightState ─────────────────────────────────────────────────────────────

/// States of the reduced pursuit machine.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum StraightState {
    #[default]
    Wonder,
    Track,
    ReachedAttackDistance,
    JustLost,
    GoBack,
}

impl Protocol for StraightState {
    const ALL: &'static [Self] = &[
        StraightState::Wonder,
        StraightState::Track,
        StraightState::ReachedAttackDistance,
        StraightState::JustLost,
        StraightState::GoBack,
    ];

    fn sources(to: Self) -> &'static [Self] {
        use StraightState::*;
        match to {
            Wonder                => &[GoBack],
            Track                 => &[Wonder],
            ReachedAttackDistance => &[Track],
            JustLost              => &[Track, ReachedAttackDistance],
            GoBack                => &[JustLost],
        }
    }

    fn name(self) -> &'static str {
        match self {
            StraightState::Wonder                => "wonder",
            StraightState::Track                 => "track",
            StraightState::ReachedAttackDistance => "reached-attack-distance",
            StraightState::JustLost              => "just-lost",
            StraightState::GoBack                => "go-back",
        }
    }
}

impl fmt::Display for StraightState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
