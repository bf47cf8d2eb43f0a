//! Uniform-cost search over caller-defined state spaces.
//!
//! One generic Dijkstra loop ([`shortest_path`]) parameterized over a
//! successor strategy, plus the run-constrained grid walk built on top of it
//! ([`grid_min_cost`]). An unreachable goal is an ordinary `None`, distinct
//! from input errors.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::grid::{Direction, Grid, Point};

/// Lazy-deletion Dijkstra. Seeds every start state at cost zero, expands via
/// `successors` (state, non-negative edge cost), and returns the accumulated
/// cost of the first goal state settled, or `None` once the frontier empties.
///
/// Ties are broken by state order after cost; stale heap entries (cost above
/// the best known for that exact state) are skipped rather than removed.
pub fn shortest_path<S, I>(
    starts: impl IntoIterator<Item = S>,
    mut successors: impl FnMut(&S) -> I,
    mut is_goal: impl FnMut(&S) -> bool,
) -> Option<u32>
where
    S: Clone + Eq + Hash + Ord,
    I: IntoIterator<Item = (S, u32)>,
{
    let mut best: FxHashMap<S, u32> = FxHashMap::default();
    let mut frontier = BinaryHeap::new();
    for start in starts {
        best.insert(start.clone(), 0);
        frontier.push(Reverse((0, start)));
    }

    while let Some(Reverse((cost, state))) = frontier.pop() {
        if is_goal(&state) {
            return Some(cost);
        }
        if best.get(&state).is_some_and(|&b| cost > b) {
            continue;
        }
        for (next, step) in successors(&state) {
            let tentative = cost + step;
            if best.get(&next).map_or(true, |&b| tentative < b) {
                best.insert(next.clone(), tentative);
                frontier.push(Reverse((tentative, next)));
            }
        }
    }
    None
}

/// Straight-run limits for [`grid_min_cost`].
///
/// A walk may only continue straight while its run is below `max_run`, and
/// may only turn (or stop on the goal) once its run has reached `min_run`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunPolicy {
    pub min_run: u8,
    pub max_run: u8,
}

impl RunPolicy {
    pub const UNCONSTRAINED: RunPolicy = RunPolicy {
        min_run: 0,
        max_run: u8::MAX,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
struct Walk {
    pos: Point,
    dir: Direction,
    run: u8,
}

/// Minimum total entry cost of a run-constrained walk from `start` to `goal`.
///
/// The walk starts pointing right or down with a run of zero; the start
/// cell's own cost is never counted. Each step moves one cell and pays that
/// cell's cost. Reversals are never legal, and the goal only terminates the
/// search when the arriving run satisfies `min_run` (a fresh start on the
/// goal cell counts as satisfied, so a 1x1 grid costs zero).
pub fn grid_min_cost(costs: &Grid<u8>, start: Point, goal: Point, policy: RunPolicy) -> Option<u32> {
    let starts = [Direction::Right, Direction::Down]
        .map(|dir| Walk { pos: start, dir, run: 0 });

    shortest_path(
        starts,
        |walk| {
            let mut moves = Vec::with_capacity(3);
            if walk.run < policy.max_run {
                moves.push(Walk {
                    pos: walk.pos.step(walk.dir),
                    dir: walk.dir,
                    run: walk.run + 1,
                });
            }
            if walk.run >= policy.min_run {
                for dir in [walk.dir.turn_left(), walk.dir.turn_right()] {
                    moves.push(Walk {
                        pos: walk.pos.step(dir),
                        dir,
                        run: 1,
                    });
                }
            }
            moves
                .into_iter()
                .filter_map(|next| Some((next, u32::from(*costs.get(next.pos)?))))
                .collect::<Vec<_>>()
        },
        |walk| walk.pos == goal && (walk.run == 0 || walk.run >= policy.min_run),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use indoc::indoc;

    fn uniform(width: usize, height: usize) -> Grid<u8> {
        let row = "1".repeat(width);
        let input = (0..height).map(|_| row.as_str()).collect::<Vec<_>>().join("\n");
        Grid::digits(&input).unwrap()
    }

    #[test]
    fn single_cell_costs_zero() -> Result<()> {
        let grid = Grid::digits("5\n")?;
        let origin = Point::new(0, 0);
        assert_eq!(
            grid_min_cost(&grid, origin, origin, RunPolicy::UNCONSTRAINED),
            Some(0)
        );
        // The fixed convention holds under a minimum-run constraint too.
        let strict = RunPolicy { min_run: 4, max_run: 10 };
        assert_eq!(grid_min_cost(&grid, origin, origin, strict), Some(0));
        Ok(())
    }

    #[test]
    fn uniform_grid_matches_manhattan_distance() {
        let grid = uniform(7, 5);
        let start = Point::new(0, 0);
        for goal in grid.positions() {
            assert_eq!(
                grid_min_cost(&grid, start, goal, RunPolicy::UNCONSTRAINED),
                Some(start.manhattan(goal)),
                "goal {goal:?}"
            );
        }
    }

    #[test]
    fn obstacle_strictly_increases_cost() -> Result<()> {
        let open = Grid::digits(indoc! {"
            111
            111
            111
        "})?;
        let blocked = Grid::digits(indoc! {"
            111
            191
            119
        "})?;
        let start = Point::new(0, 0);
        let goal = Point::new(2, 2);
        let open_cost = grid_min_cost(&open, start, goal, RunPolicy::UNCONSTRAINED).unwrap();
        let blocked_cost = grid_min_cost(&blocked, start, goal, RunPolicy::UNCONSTRAINED).unwrap();
        assert!(blocked_cost > open_cost);
        Ok(())
    }

    #[test]
    fn relaxing_max_run_never_hurts() -> Result<()> {
        let grid = Grid::digits(indoc! {"
            2413432311323
            3215453535623
            3255245654254
            3446585845452
            4546657867536
            1438598798454
            4457876987766
            3637877979653
            4654967986887
            4564679986453
            1224686865563
            2546548887735
            4322674655533
        "})?;
        let start = Point::new(0, 0);
        let goal = grid.bottom_right();
        let mut prev = None;
        for max_run in 3..=10 {
            let cost = grid_min_cost(&grid, start, goal, RunPolicy { min_run: 0, max_run })
                .expect("goal reachable");
            if let Some(prev) = prev {
                assert!(cost <= prev, "max_run {max_run} regressed");
            }
            prev = Some(cost);
        }
        Ok(())
    }

    #[test]
    fn unreachable_goal_is_none_not_a_panic() {
        let grid = uniform(4, 4);
        let start = Point::new(0, 0);
        assert_eq!(
            grid_min_cost(&grid, start, Point::new(10, 10), RunPolicy::UNCONSTRAINED),
            None
        );
        // With min_run above max_run no move is ever legal past the seeds.
        let impossible = RunPolicy { min_run: 8, max_run: 4 };
        assert_eq!(
            grid_min_cost(&grid, start, Point::new(3, 3), impossible),
            None
        );
    }

    #[test]
    fn routes_around_expensive_cells() -> Result<()> {
        // The 9s block the middle; the cheapest walk hugs the top row and
        // right edge, paying the four cells it enters.
        let grid = Grid::digits(indoc! {"
            111
            991
            111
        "})?;
        assert_eq!(
            grid_min_cost(
                &grid,
                Point::new(0, 0),
                Point::new(2, 2),
                RunPolicy::UNCONSTRAINED
            ),
            Some(4)
        );
        Ok(())
    }

    #[test]
    fn goal_reached_below_min_run_is_not_terminal() {
        // Straight along the top row would need an 11-long run; with runs
        // capped at 10 the walk has to drop down, realign, and re-enter the
        // corner with a legal 4-long run, an 8-cost detour over Manhattan.
        let grid = uniform(12, 5);
        let policy = RunPolicy { min_run: 4, max_run: 10 };
        assert_eq!(
            grid_min_cost(&grid, Point::new(0, 0), Point::new(0, 11), policy),
            Some(19)
        );
        // A goal only reachable with a run shorter than min_run stays
        // unreachable: a 1x3 strip cannot host a 4-long run.
        let strip = uniform(3, 1);
        assert_eq!(
            grid_min_cost(&strip, Point::new(0, 0), Point::new(0, 2), policy),
            None
        );
    }

    #[test]
    fn forced_turn_with_nowhere_to_go_is_unreachable() {
        // A single row longer than max_run: the walk must turn but both
        // turns leave the grid.
        let strip = uniform(12, 1);
        assert_eq!(
            grid_min_cost(
                &strip,
                Point::new(0, 0),
                Point::new(0, 11),
                RunPolicy { min_run: 0, max_run: 10 }
            ),
            None
        );
    }

    #[test]
    fn generic_search_on_a_plain_graph() {
        // Tiny explicit graph: 0 -> 1 (4), 0 -> 2 (1), 2 -> 1 (1), 1 -> 3 (1).
        let edges: &[&[(u32, u32)]] = &[&[(1, 4), (2, 1)], &[(3, 1)], &[(1, 1)], &[]];
        let cost = shortest_path(
            [0u32],
            |&n| edges[n as usize].iter().copied(),
            |&n| n == 3,
        );
        assert_eq!(cost, Some(3));
        let unreachable = shortest_path(
            [3u32],
            |&n| edges[n as usize].iter().copied(),
            |&n| n == 0,
        );
        assert_eq!(unreachable, None);
    }
}
