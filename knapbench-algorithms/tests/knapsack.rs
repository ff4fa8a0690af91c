use knapbench_algorithms::knapsack::{backtracking, brute_force, dynamic, greedy, SolveFn};
use knapbench_challenges::knapsack::{Challenge, Item, SolverOutput, Track};
use rand::{rngs::SmallRng, Rng, SeedableRng};

const ALL_SOLVERS: [(&str, SolveFn); 4] = [
    ("greedy", greedy::solve_challenge),
    ("dynamic", dynamic::solve_challenge),
    ("backtracking", backtracking::solve_challenge),
    ("brute_force", brute_force::solve_challenge),
];

const EXACT_SOLVERS: [(&str, SolveFn); 3] = [
    ("dynamic", dynamic::solve_challenge),
    ("backtracking", backtracking::solve_challenge),
    ("brute_force", brute_force::solve_challenge),
];

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() <= 1e-6 * a.abs().max(1.0), "{} != {}", a, b);
}

fn small_example() -> Challenge {
    Challenge::from_weights_and_values(&[2, 3, 4, 5], &[3.0, 4.0, 5.0, 6.0], 5).unwrap()
}

fn random_challenges() -> Vec<Challenge> {
    let mut rng = SmallRng::seed_from_u64(1337);
    (0..40)
        .map(|_| {
            let n_items = rng.gen_range(0..=16);
            let capacity = rng.gen_range(0..=400);
            let seed: [u8; 32] = rng.gen();
            Challenge::generate_instance(&seed, &Track { n_items, capacity }).unwrap()
        })
        .collect()
}

fn solve(f: SolveFn, challenge: &Challenge) -> SolverOutput {
    f(challenge).unwrap()
}

#[test]
fn test_small_example_is_solved_by_every_solver() {
    let challenge = small_example();
    for (name, f) in ALL_SOLVERS {
        let output = solve(f, &challenge);
        assert_close(output.value, 7.0);
        assert_eq!(
            output.solution.selected,
            vec![true, true, false, false],
            "{} picked the wrong items",
            name
        );
    }
}

#[test]
fn test_exact_solvers_agree() {
    for challenge in random_challenges() {
        let values: Vec<f64> = EXACT_SOLVERS
            .iter()
            .map(|(_, f)| solve(*f, &challenge).value)
            .collect();
        assert_close(values[0], values[1]);
        assert_close(values[0], values[2]);
    }
}

#[test]
fn test_selection_is_feasible_and_consistent() {
    for challenge in random_challenges() {
        for (name, f) in ALL_SOLVERS {
            let output = solve(f, &challenge);
            assert_eq!(output.solution.selected.len(), challenge.num_items());
            assert!(
                challenge.total_weight(&output.solution) <= challenge.capacity as u64,
                "{} exceeded capacity",
                name
            );
            challenge.verify_output(&output).unwrap();
        }
    }
}

#[test]
fn test_greedy_never_beats_optimum() {
    for challenge in random_challenges() {
        let heuristic = solve(greedy::solve_challenge, &challenge).value;
        let optimum = solve(dynamic::solve_challenge, &challenge).value;
        assert!(heuristic <= optimum + 1e-9);
    }
}

#[test]
fn test_solvers_are_deterministic() {
    for challenge in random_challenges().into_iter().take(10) {
        for (_, f) in ALL_SOLVERS {
            assert_eq!(solve(f, &challenge).value, solve(f, &challenge).value);
        }
    }
}

#[test]
fn test_zero_capacity() {
    let challenge =
        Challenge::from_weights_and_values(&[1, 2, 3], &[10.0, 20.0, 30.0], 0).unwrap();
    for (_, f) in ALL_SOLVERS {
        let output = solve(f, &challenge);
        assert_eq!(output.value, 0.0);
        assert_eq!(output.solution.selected, vec![false; 3]);
    }
}

#[test]
fn test_empty_instance() {
    let challenge = Challenge::new(Vec::new(), 10).unwrap();
    for (_, f) in ALL_SOLVERS {
        let output = solve(f, &challenge);
        assert_eq!(output.value, 0.0);
        assert!(output.solution.selected.is_empty());
    }
}

#[test]
fn test_visited_state_counts() {
    let challenge = small_example();
    assert_eq!(solve(brute_force::solve_challenge, &challenge).visited_states, 16);
    assert_eq!(solve(greedy::solve_challenge, &challenge).visited_states, 4);
    // (5-2+1) + (5-3+1) + (5-4+1) + (5-5+1)
    assert_eq!(solve(dynamic::solve_challenge, &challenge).visited_states, 10);

    let empty = Challenge::new(Vec::new(), 10).unwrap();
    assert_eq!(solve(brute_force::solve_challenge, &empty).visited_states, 1);
    assert_eq!(solve(backtracking::solve_challenge, &empty).visited_states, 1);
}

#[test]
fn test_backtracking_stops_when_full() {
    // The include branch at the root fills the knapsack, so the second item is
    // never considered on that path.
    let challenge = Challenge::from_weights_and_values(&[5, 1], &[9.0, 1.0], 5).unwrap();
    let output = solve(backtracking::solve_challenge, &challenge);
    assert_close(output.value, 9.0);
    assert_eq!(output.solution.selected, vec![true, false]);
    // root, exclude(0), exclude(0)->exclude(1), exclude(0)->include(1), include(0)
    assert_eq!(output.visited_states, 5);
}

#[test]
fn test_brute_force_keeps_first_best_subset() {
    // Subsets {0} (counter 1) and {1} (counter 2) tie; the lower counter wins.
    let challenge = Challenge::from_weights_and_values(&[3, 3], &[5.0, 5.0], 4).unwrap();
    let output = solve(brute_force::solve_challenge, &challenge);
    assert_eq!(output.solution.selected, vec![true, false]);
}

#[test]
fn test_brute_force_rejects_oversized_instances() {
    let items = (0..brute_force::MAX_ITEMS + 1)
        .map(|id| Item {
            id,
            weight: 1,
            value: 1.0,
        })
        .collect();
    let challenge = Challenge::new(items, 10).unwrap();
    assert!(brute_force::solve_challenge(&challenge).is_err());
}

#[test]
fn test_greedy_breaks_ratio_ties_by_id() {
    // Both items have ratio 2.0 and only one fits.
    let challenge = Challenge::from_weights_and_values(&[2, 2], &[4.0, 4.0], 3).unwrap();
    let output = solve(greedy::solve_challenge, &challenge);
    assert_eq!(output.solution.selected, vec![true, false]);
}

#[test]
fn test_greedy_can_be_suboptimal() {
    // Ratio order takes item 0 first, which blocks the better pair.
    let challenge =
        Challenge::from_weights_and_values(&[1, 5, 5], &[3.0, 10.0, 10.0], 10).unwrap();
    let heuristic = solve(greedy::solve_challenge, &challenge).value;
    let optimum = solve(dynamic::solve_challenge, &challenge).value;
    assert_close(heuristic, 13.0);
    assert_close(optimum, 20.0);
}

#[test]
fn test_dp_table_is_monotone_after_every_item() {
    for challenge in random_challenges() {
        let mut table = dynamic::DpTable::new(challenge.num_items(), challenge.capacity);
        for item in &challenge.items {
            table.insert(item);
            for pair in table.values().windows(2) {
                assert!(pair[0] <= pair[1]);
            }
        }
        let traced = table.traceback(&challenge.items);
        assert_close(challenge.evaluate_total_value(&traced).unwrap(), table.best_value());
    }
}

#[test]
fn test_dp_skips_items_heavier_than_capacity() {
    let challenge = Challenge::from_weights_and_values(&[8, 2], &[100.0, 1.0], 5).unwrap();
    let output = solve(dynamic::solve_challenge, &challenge);
    assert_close(output.value, 1.0);
    assert_eq!(output.solution.selected, vec![false, true]);
    assert_eq!(output.visited_states, 4);
}
