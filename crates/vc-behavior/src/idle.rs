//! A rule under which agents do nothing at all.

use vc_core::{AgentId, AgentRng};

use crate::{CleaningRule, Intent, TickContext};

/// A [`CleaningRule`] that always returns [`Intent::Stay`].
///
/// Useful as a placeholder in tests: the scheduler still runs both phases but
/// no agent moves and no dirt is removed.
pub struct IdleRule;

impl CleaningRule for IdleRule {
    fn decide(
        &self,
        _agent: AgentId,
        _ctx:   &TickContext<'_>,
        _rng:   &mut AgentRng,
    ) -> Intent {
        Intent::Stay
    }
}
