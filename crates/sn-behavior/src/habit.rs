//! The `Habit` trait: the per-guard decision maker.

use sn_sight::Sight;

use crate::{BehaviorResult, HabitContext, Intent};

/// Pluggable guard behavior.
///
/// A habit owns its state machine and pursuit bookkeeping, so `tick` takes
/// `&mut self`.  It also receives the guard's own [`Sight`] mutably: reading
/// the found/lost counters consumes them, and some habits switch the Sight
/// off and on.
///
/// # Errors
///
/// An `Err` means the habit asked its state machine for an illegal
/// transition or hit some other protocol violation.  The tick loop decides
/// whether that aborts the run.
///
/// # Example
///
/// ```rust,ignore
/// struct Statue;
///
/// impl Habit for Statue {
///     fn name(&self) -> &'static str { "statue" }
///     fn phase(&self) -> &'static str { "still" }
///     fn tick(&mut self, _ctx: &HabitContext<'_>, sight: &mut Sight) -> BehaviorResult<Vec<Intent>> {
///         sight.consume_found();
///         sight.consume_lost();
///         Ok(vec![])
///     }
/// }
/// ```
pub trait Habit: Send {
    /// Short archetype name for logs.
    fn name(&self) -> &'static str;

    /// Name of the current state, for observers.
    fn phase(&self) -> &'static str;

    /// Decide this tick's intents.
    fn tick(&mut self, ctx: &HabitContext<'_>, sight: &mut Sight) -> BehaviorResult<Vec<Intent>>;
}

impl<H: Habit + ?Sized> Habit for Box<H> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn phase(&self) -> &'static str {
        (**self).phase()
    }

    fn tick(&mut self, ctx: &HabitContext<'_>, sight: &mut Sight) -> BehaviorResult<Vec<Intent>> {
        (**self).tick(ctx, sight)
    }
}
