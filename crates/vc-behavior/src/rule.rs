//! The `CleaningRule` trait - the extension point for agent behavior.

use vc_core::{AgentId, AgentRng};

use crate::{Intent, TickContext};

/// Pluggable per-agent decision rule.
///
/// Called once per agent per tick during the stage phase.  The rule sees the
/// world only through a read-only [`TickContext`] and draws randomness only
/// from the agent's own [`AgentRng`], so a run is fully determined by its
/// seed.
///
/// Any `Fn(AgentId, &TickContext, &mut AgentRng) -> Intent` closure is a rule
/// too, which keeps one-off experiments short:
///
/// ```rust,ignore
/// let always_stay = |_: AgentId, _: &TickContext<'_>, _: &mut AgentRng| Intent::Stay;
/// let model = ModelBuilder::new(config).rule(always_stay).build()?;
/// ```
pub trait CleaningRule: 'static {
    /// Choose this tick's action for `agent`.
    ///
    /// Returning [`Intent::MoveTo`] with a cell that is not on the grid is a
    /// bug in the rule and panics during commit.
    fn decide(
        &self,
        agent: AgentId,
        ctx:   &TickContext<'_>,
        rng:   &mut AgentRng,
    ) -> Intent;
}

impl<F> CleaningRule for F
where
    F: Fn(AgentId, &TickContext<'_>, &mut AgentRng) -> Intent + 'static,
{
    #[inline]
    fn decide(
        &self,
        agent: AgentId,
        ctx:   &TickContext<'_>,
        rng:   &mut AgentRng,
    ) -> Intent {
        self(agent, ctx, rng)
    }
}
