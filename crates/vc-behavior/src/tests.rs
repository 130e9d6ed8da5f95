//! Unit tests for vc-behavior.

use vc_core::{AgentId, AgentRng, Coord, Step};
use vc_grid::{DirtCells, Grid};

use crate::{CleaningRule, IdleRule, Intent, RandomWalkRule, TickContext};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn grid_with(width: u32, height: u32, agents: &[Coord]) -> Grid {
    let mut grid = Grid::new(width, height);
    for (i, &c) in agents.iter().enumerate() {
        grid.place(AgentId(i as u32), c);
    }
    grid
}

fn ctx<'a>(grid: &'a Grid, dirt: &'a DirtCells) -> TickContext<'a> {
    TickContext::new(Step(1), grid, dirt)
}

// ── Intent ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod intent_tests {
    use super::*;

    #[test]
    fn destination_of_each_variant() {
        let here = Coord::new(1, 1);
        let there = Coord::new(2, 1);
        assert_eq!(Intent::MoveTo(there).destination(here), there);
        assert_eq!(Intent::Stay.destination(here), here);
        assert_eq!(Intent::Clean.destination(here), here);
    }
}

// ── RandomWalkRule ────────────────────────────────────────────────────────────

#[cfg(test)]
mod random_walk_tests {
    use super::*;

    #[test]
    fn dirty_cell_is_cleaned_first() {
        let grid = grid_with(3, 3, &[Coord::new(1, 1)]);
        let dirt = DirtCells::from_cells([Coord::new(1, 1)]);
        let mut rng = AgentRng::new(0, AgentId(0));
        for _ in 0..20 {
            let intent = RandomWalkRule.decide(AgentId(0), &ctx(&grid, &dirt), &mut rng);
            assert_eq!(intent, Intent::Clean);
        }
    }

    #[test]
    fn clean_cell_moves_to_adjacent_empty_cell() {
        let grid = grid_with(5, 5, &[Coord::new(2, 2)]);
        let dirt = DirtCells::default();
        let mut rng = AgentRng::new(9, AgentId(0));
        for _ in 0..50 {
            match RandomWalkRule.decide(AgentId(0), &ctx(&grid, &dirt), &mut rng) {
                Intent::MoveTo(c) => assert_eq!(c.x.abs_diff(2).max(c.y.abs_diff(2)), 1),
                other => panic!("lone agent on an empty grid should always move, got {other:?}"),
            }
        }
    }

    #[test]
    fn every_neighbor_is_eventually_chosen() {
        let grid = grid_with(3, 3, &[Coord::new(1, 1)]);
        let dirt = DirtCells::default();
        let mut rng = AgentRng::new(5, AgentId(0));
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            if let Intent::MoveTo(c) = RandomWalkRule.decide(AgentId(0), &ctx(&grid, &dirt), &mut rng) {
                seen.insert(c);
            }
        }
        assert_eq!(seen.len(), 8);
    }

    #[test]
    fn fully_surrounded_agent_stays() {
        // Agent 0 in the corner, agents 1..=3 on all three of its neighbors.
        let grid = grid_with(
            3,
            3,
            &[Coord::new(0, 0), Coord::new(1, 0), Coord::new(0, 1), Coord::new(1, 1)],
        );
        let dirt = DirtCells::default();
        let mut rng = AgentRng::new(1, AgentId(0));
        for _ in 0..50 {
            assert_eq!(
                RandomWalkRule.decide(AgentId(0), &ctx(&grid, &dirt), &mut rng),
                Intent::Stay,
            );
        }
    }

    #[test]
    fn occupied_candidate_means_stay_not_redraw() {
        // Two neighbors only (1x3 strip, agent in the middle), one of them taken.
        let grid = grid_with(1, 3, &[Coord::new(0, 1), Coord::new(0, 0)]);
        let dirt = DirtCells::default();
        let mut rng = AgentRng::new(2, AgentId(0));
        let mut stays = 0;
        let mut moves = 0;
        for _ in 0..200 {
            match RandomWalkRule.decide(AgentId(0), &ctx(&grid, &dirt), &mut rng) {
                Intent::Stay => stays += 1,
                Intent::MoveTo(c) => {
                    assert_eq!(c, Coord::new(0, 2));
                    moves += 1;
                }
                Intent::Clean => unreachable!(),
            }
        }
        assert!(stays > 0 && moves > 0, "stays={stays} moves={moves}");
    }

    #[test]
    fn single_cell_grid_stays() {
        let grid = grid_with(1, 1, &[Coord::new(0, 0)]);
        let dirt = DirtCells::default();
        let mut rng = AgentRng::new(0, AgentId(0));
        assert_eq!(RandomWalkRule.decide(AgentId(0), &ctx(&grid, &dirt), &mut rng), Intent::Stay);
    }

    #[test]
    fn same_seed_same_decisions() {
        let grid = grid_with(6, 6, &[Coord::new(3, 3)]);
        let dirt = DirtCells::default();
        let mut a = AgentRng::new(77, AgentId(0));
        let mut b = AgentRng::new(77, AgentId(0));
        for _ in 0..30 {
            assert_eq!(
                RandomWalkRule.decide(AgentId(0), &ctx(&grid, &dirt), &mut a),
                RandomWalkRule.decide(AgentId(0), &ctx(&grid, &dirt), &mut b),
            );
        }
    }
}

// ── Other rules ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod rule_tests {
    use super::*;

    fn always_east(agent: AgentId, ctx: &TickContext<'_>, _rng: &mut AgentRng) -> Intent {
        let here = ctx.position(agent);
        match here.offset(1, 0) {
            Some(c) if ctx.grid.contains(c) => Intent::MoveTo(c),
            _ => Intent::Stay,
        }
    }

    #[test]
    fn idle_always_stays() {
        let grid = grid_with(3, 3, &[Coord::new(1, 1)]);
        let dirt = DirtCells::from_cells([Coord::new(1, 1)]);
        let mut rng = AgentRng::new(0, AgentId(0));
        assert_eq!(IdleRule.decide(AgentId(0), &ctx(&grid, &dirt), &mut rng), Intent::Stay);
    }

    #[test]
    fn plain_functions_are_rules() {
        let grid = grid_with(3, 1, &[Coord::new(0, 0)]);
        let dirt = DirtCells::default();
        let mut rng = AgentRng::new(0, AgentId(0));
        assert_eq!(
            always_east.decide(AgentId(0), &ctx(&grid, &dirt), &mut rng),
            Intent::MoveTo(Coord::new(1, 0)),
        );
    }
}

// ── Agent records ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod agent_tests {
    use crate::{AgentRngs, Cleaner};
    use vc_core::AgentId;

    #[test]
    fn new_cleaner_has_no_plan_and_no_moves() {
        let c = Cleaner::new(AgentId(3));
        assert_eq!(c.id, AgentId(3));
        assert_eq!(c.planned, None);
        assert_eq!(c.moves, 0);
    }

    #[test]
    fn rngs_are_per_agent() {
        let mut rngs = AgentRngs::new(2, 42);
        let pool: Vec<u32> = (0..1_000).collect();
        let mut draw = |id| -> Vec<u32> {
            (0..16).map(|_| *rngs.get_mut(id).choose(&pool[..]).unwrap()).collect()
        };
        let a = draw(AgentId(0));
        let b = draw(AgentId(1));
        assert_ne!(a, b);
    }
}
