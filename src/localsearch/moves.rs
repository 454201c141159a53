//! Move representation and the shared neighborhood scan.
//!
//! One scan serves every trajectory strategy in the crate: GRASP local search
//! runs it unfiltered, tabu search runs it with a tabu/aspiration
//! admissibility filter. The scan prices all three move categories with the
//! evaluator's delta methods and returns the single cheapest admissible move.

use crate::objective::Evaluator;
use crate::solution::Solution;

/// Scan discipline for a single neighborhood pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchPolicy {
    /// Stop scanning a category as soon as a candidate improves the running
    /// minimum; later categories still scan against the inherited minimum.
    FirstImproving,
    /// Scan every candidate in every category and keep the overall minimum.
    BestImproving,
}

impl Default for SearchPolicy {
    fn default() -> Self {
        SearchPolicy::BestImproving
    }
}

/// A single candidate move: insert, remove, or exchange.
///
/// At least one side is always present. `delta` is the cost change the
/// evaluator predicted for applying the move to the scanned solution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Move {
    /// Variable entering the solution, if any.
    pub cand_in: Option<usize>,
    /// Variable leaving the solution, if any.
    pub cand_out: Option<usize>,
    /// Predicted cost change (minimization: negative is better).
    pub delta: f64,
}

/// Scans removal, exchange, and insertion moves in that order and returns the
/// minimum-delta move accepted by `admit`.
///
/// The admissibility filter sees each move that improves the running minimum;
/// rejected moves neither update the minimum nor trigger a first-improving
/// break. The returned move may have a non-negative delta; callers that only
/// want strict improvements (local search) must check the delta themselves,
/// while tabu search applies the move regardless.
///
/// Returns `None` when no candidate in any category is admissible.
pub fn scan_moves<E, F>(
    evaluator: &E,
    solution: &Solution,
    candidates: &[usize],
    policy: SearchPolicy,
    mut admit: F,
) -> Option<Move>
where
    E: Evaluator,
    F: FnMut(&Move) -> bool,
{
    let first_improving = policy == SearchPolicy::FirstImproving;
    let mut min_delta = f64::INFINITY;
    let mut best: Option<Move> = None;

    for &cand_out in &solution.elements {
        let delta = evaluator.removal_cost(cand_out, solution);
        if delta < min_delta {
            let mv = Move {
                cand_in: None,
                cand_out: Some(cand_out),
                delta,
            };
            if admit(&mv) {
                min_delta = delta;
                best = Some(mv);
                if first_improving {
                    break;
                }
            }
        }
    }

    'exchanges: for &cand_in in candidates {
        for &cand_out in &solution.elements {
            let delta = evaluator.exchange_cost(cand_in, cand_out, solution);
            if delta < min_delta {
                let mv = Move {
                    cand_in: Some(cand_in),
                    cand_out: Some(cand_out),
                    delta,
                };
                if admit(&mv) {
                    min_delta = delta;
                    best = Some(mv);
                    if first_improving {
                        break 'exchanges;
                    }
                }
            }
        }
    }

    for &cand_in in candidates {
        let delta = evaluator.insertion_cost(cand_in, solution);
        if delta < min_delta {
            let mv = Move {
                cand_in: Some(cand_in),
                cand_out: None,
                delta,
            };
            if admit(&mv) {
                min_delta = delta;
                best = Some(mv);
                if first_improving {
                    break;
                }
            }
        }
    }

    best
}

/// Applies `mv` to the solution and candidate list, then re-evaluates the
/// solution cost from scratch.
///
/// Membership moves in lockstep: a removed variable returns to the candidate
/// list, an inserted one leaves it, so the two stay disjoint and keep
/// covering the domain.
///
/// # Panics
/// Panics when the move references a variable on the wrong side (out-variable
/// not in the solution, in-variable not in the candidate list).
pub fn apply_move<E: Evaluator>(
    evaluator: &E,
    solution: &mut Solution,
    candidates: &mut Vec<usize>,
    mv: &Move,
) {
    if let Some(cand_out) = mv.cand_out {
        assert!(
            solution.remove(cand_out),
            "move removes variable {cand_out} that is not in the solution"
        );
        candidates.push(cand_out);
    }
    if let Some(cand_in) = mv.cand_in {
        let pos = candidates
            .iter()
            .position(|&c| c == cand_in)
            .unwrap_or_else(|| panic!("move inserts variable {cand_in} that is not a candidate"));
        candidates.remove(pos);
        solution.insert(cand_in);
    }
    evaluator.evaluate(solution);
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Separable toy objective: cost is the sum of the selected weights.
    struct LinearObjective {
        weights: Vec<f64>,
    }

    impl Evaluator for LinearObjective {
        fn domain_size(&self) -> usize {
            self.weights.len()
        }

        fn evaluate(&self, solution: &mut Solution) -> f64 {
            let cost = solution.elements.iter().map(|&v| self.weights[v]).sum();
            solution.cost = cost;
            cost
        }

        fn insertion_cost(&self, candidate: usize, solution: &Solution) -> f64 {
            if solution.contains(candidate) {
                0.0
            } else {
                self.weights[candidate]
            }
        }

        fn removal_cost(&self, candidate: usize, solution: &Solution) -> f64 {
            if !solution.contains(candidate) {
                0.0
            } else {
                -self.weights[candidate]
            }
        }

        fn exchange_cost(&self, cand_in: usize, cand_out: usize, solution: &Solution) -> f64 {
            if cand_in == cand_out {
                return 0.0;
            }
            if solution.contains(cand_in) {
                return self.removal_cost(cand_out, solution);
            }
            if !solution.contains(cand_out) {
                return self.insertion_cost(cand_in, solution);
            }
            self.weights[cand_in] - self.weights[cand_out]
        }
    }

    fn evaluated(objective: &LinearObjective, elements: Vec<usize>) -> Solution {
        let mut sol = Solution::from_elements(elements);
        objective.evaluate(&mut sol);
        sol
    }

    #[test]
    fn test_scan_empty_neighborhood_returns_none() {
        let objective = LinearObjective { weights: vec![] };
        let sol = evaluated(&objective, vec![]);
        let mv = scan_moves(&objective, &sol, &[], SearchPolicy::BestImproving, |_| true);
        assert!(mv.is_none());
    }

    #[test]
    fn test_scan_picks_global_minimum_across_categories() {
        // Removal of 0: +1, exchange 2<->0: -8 - 1 = -9, insertion of 2: -8.
        let objective = LinearObjective {
            weights: vec![1.0, 4.0, -8.0],
        };
        let sol = evaluated(&objective, vec![0]);
        let mv = scan_moves(&objective, &sol, &[2], SearchPolicy::BestImproving, |_| true)
            .expect("improving move exists");
        assert_eq!(mv.cand_in, Some(2));
        assert_eq!(mv.cand_out, Some(0));
        assert!((mv.delta - (-9.0)).abs() < 1e-12);
    }

    #[test]
    fn test_first_improving_stops_at_running_minimum() {
        // Removal deltas in scan order: -2 (var 0), then -9 (var 1).
        let objective = LinearObjective {
            weights: vec![2.0, 9.0],
        };
        let sol = evaluated(&objective, vec![0, 1]);

        let first = scan_moves(&objective, &sol, &[], SearchPolicy::FirstImproving, |_| true)
            .expect("improving move exists");
        assert_eq!(first.cand_out, Some(0), "first scan hit should win");
        assert!((first.delta - (-2.0)).abs() < 1e-12);

        let best = scan_moves(&objective, &sol, &[], SearchPolicy::BestImproving, |_| true)
            .expect("improving move exists");
        assert_eq!(best.cand_out, Some(1));
        assert!((best.delta - (-9.0)).abs() < 1e-12);
    }

    #[test]
    fn test_first_improving_later_category_can_override() {
        // Removal of 0 improves by -5; the exchange 1<->0 improves further
        // (-15) and must still be scanned after the removal-category break.
        let objective = LinearObjective {
            weights: vec![5.0, -10.0],
        };
        let sol = evaluated(&objective, vec![0]);
        let mv = scan_moves(&objective, &sol, &[1], SearchPolicy::FirstImproving, |_| true)
            .expect("improving move exists");
        assert_eq!(mv.cand_in, Some(1));
        assert_eq!(mv.cand_out, Some(0));
        assert!((mv.delta - (-15.0)).abs() < 1e-12);
    }

    #[test]
    fn test_admissibility_filter_skips_moves() {
        let objective = LinearObjective {
            weights: vec![-10.0, -5.0],
        };
        let sol = evaluated(&objective, vec![]);
        let mv = scan_moves(
            &objective,
            &sol,
            &[0, 1],
            SearchPolicy::BestImproving,
            |mv| mv.cand_in != Some(0),
        )
        .expect("variable 1 is still admissible");
        assert_eq!(mv.cand_in, Some(1));
        assert!((mv.delta - (-5.0)).abs() < 1e-12);
    }

    #[test]
    fn test_scan_returns_worsening_move_when_nothing_improves() {
        // Tabu search relies on getting the least-bad move back.
        let objective = LinearObjective {
            weights: vec![-3.0, 7.0],
        };
        let sol = evaluated(&objective, vec![0]);
        let mv = scan_moves(&objective, &sol, &[1], SearchPolicy::BestImproving, |_| true)
            .expect("scan returns the minimum even when non-negative");
        assert!(mv.delta > 0.0);
        assert_eq!(mv.cand_out, Some(0), "removing -3 costs less than adding 7");
    }

    #[test]
    fn test_apply_exchange_updates_membership_and_cost() {
        let objective = LinearObjective {
            weights: vec![1.0, -4.0],
        };
        let mut sol = evaluated(&objective, vec![0]);
        let mut candidates = vec![1];
        let mv = Move {
            cand_in: Some(1),
            cand_out: Some(0),
            delta: -5.0,
        };

        apply_move(&objective, &mut sol, &mut candidates, &mv);

        assert_eq!(sol.elements, vec![1]);
        assert_eq!(candidates, vec![0]);
        assert!((sol.cost - (-4.0)).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "not a candidate")]
    fn test_apply_unknown_candidate_panics() {
        let objective = LinearObjective {
            weights: vec![1.0, 2.0],
        };
        let mut sol = evaluated(&objective, vec![]);
        let mut candidates = vec![0];
        let mv = Move {
            cand_in: Some(1),
            cand_out: None,
            delta: 2.0,
        };
        apply_move(&objective, &mut sol, &mut candidates, &mv);
    }
}
