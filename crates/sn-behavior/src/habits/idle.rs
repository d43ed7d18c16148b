use sn_sight::Sight;

use crate::{BehaviorResult, Habit, HabitContext, Intent};

/// A guard that watches but never reacts.
///
/// Counters are still drained every tick so nothing piles up if the habit
/// is swapped for a live one later.
#[derive(Copy, Clone, Debug, Default)]
pub struct IdleHabit;

impl Habit for IdleHabit {
    fn name(&self) -> &'static str {
        "idle"
    }

    fn phase(&self) -> &'static str {
        "idle"
    }

    fn tick(&mut self, _ctx: &HabitContext<'_>, sight: &mut Sight) -> BehaviorResult<Vec<Intent>> {
        sight.consume_found();
        sight.consume_lost();
        Ok(Vec::new())
    }
}
