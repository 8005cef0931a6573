#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;
    use rand::prelude::SmallRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;
    use rand_distr::Normal;
    use test_case::test_case;
    use wlsp::entities::{Instance, LevelOrder, Rect, Solution};
    use wlsp::eval;
    use wlsp::heuristics::{
        self, Metric, best_fit, first_fit, next_fit, perturbed,
        randomized_best_fit_increasing_height, randomized_first_fit_decreasing_density,
    };
    use wlsp::io::generator::{GeneratorConfig, generate_instance};
    use wlsp::util::assertions;

    type Heuristic = fn(&Instance, &[usize]) -> Solution;

    fn instance(lengths: &[f64], recipient_length: f64) -> Instance {
        let rects = lengths.iter().map(|&l| Rect::new(l, 1.0, 1.0)).collect();
        Instance::new(rects, recipient_length)
    }

    fn small_config() -> GeneratorConfig {
        GeneratorConfig {
            n_items: (50, 150),
            ..GeneratorConfig::default()
        }
    }

    /// Linear scan reference for the first-fit heuristic
    fn naive_first_fit(instance: &Instance, permutation: &[usize]) -> Solution {
        let mut levels: Vec<Vec<usize>> = vec![];
        let mut remaining: Vec<f64> = vec![];
        for &i in permutation {
            let length = instance.rect(i).length;
            match remaining.iter().position(|r| eval::fits(length, *r)) {
                Some(l) => {
                    remaining[l] -= length;
                    levels[l].push(i);
                }
                None => {
                    remaining.push(instance.recipient_length - length);
                    levels.push(vec![i]);
                }
            }
        }
        Solution::new(levels)
    }

    #[test]
    fn next_fit_scenario() {
        let instance = Instance::new(
            vec![
                Rect::new(4.0, 2.0, 1.0),
                Rect::new(4.0, 3.0, 1.0),
                Rect::new(4.0, 1.0, 1.0),
            ],
            8.0,
        );
        let solution = next_fit(&instance, &[0, 1, 2]);
        assert_eq!(solution.levels, vec![vec![0, 1], vec![2]]);
        assert_eq!(solution.level_of(1), Some(0));
        assert_eq!(solution.level_of(2), Some(1));
        assert_eq!(solution.level_of(3), None);
        assert!(approx_eq!(f64, eval::cost(&instance, &solution), 3.0));
        assert!(eval::is_feasible(&instance, &solution));
    }

    #[test]
    fn next_fit_never_looks_back() {
        let instance = instance(&[6.0, 5.0, 2.0], 8.0);
        // item 2 would fit on level 0, but next-fit only considers the current level
        let solution = next_fit(&instance, &[0, 1, 2]);
        assert_eq!(solution.levels, vec![vec![0], vec![1, 2]]);
    }

    #[test]
    fn best_fit_scenario() {
        let instance = instance(&[5.0, 3.0, 6.0], 8.0);
        let solution = best_fit(&instance, &[0, 1, 2]);
        assert_eq!(solution.levels, vec![vec![0, 1], vec![2]]);
        assert_eq!(solution.level_lengths(&instance), vec![8.0, 6.0]);
    }

    #[test]
    fn best_fit_picks_tightest_level() {
        let instance = instance(&[5.0, 7.0, 3.0], 10.0);
        assert_eq!(best_fit(&instance, &[0, 1, 2]).levels, vec![vec![0], vec![1, 2]]);
        assert_eq!(first_fit(&instance, &[0, 1, 2]).levels, vec![vec![0, 2], vec![1]]);
    }

    #[test]
    fn best_fit_ties_break_by_lowest_level() {
        let instance = instance(&[6.0, 6.0, 2.0], 10.0);
        let solution = best_fit(&instance, &[0, 1, 2]);
        assert_eq!(solution.levels, vec![vec![0, 2], vec![1]]);
    }

    #[test_case(next_fit, &[1.9, 0.2, 1.8], 3.9, 1; "next fit decimal fill")]
    #[test_case(first_fit, &[1.9, 0.2, 1.8], 3.9, 1; "first fit decimal fill")]
    #[test_case(best_fit, &[1.9, 0.2, 1.8], 3.9, 1; "best fit decimal fill")]
    #[test_case(next_fit, &[0.1, 0.2, 0.7], 1.0, 1; "next fit tenths fill")]
    #[test_case(first_fit, &[0.1, 0.2, 0.7], 1.0, 1; "first fit tenths fill")]
    #[test_case(best_fit, &[0.1, 0.2, 0.7], 1.0, 1; "best fit tenths fill")]
    #[test_case(next_fit, &[0.3, 0.6, 0.1, 0.7, 0.3], 1.0, 2; "next fit tenths two levels")]
    #[test_case(first_fit, &[0.3, 0.6, 0.1, 0.7, 0.3], 1.0, 2; "first fit tenths two levels")]
    #[test_case(best_fit, &[0.3, 0.6, 0.1, 0.7, 0.3], 1.0, 2; "best fit tenths two levels")]
    #[test_case(next_fit, &[1.0, 1.0, 1.0], 1.0, 3; "next fit full length items")]
    #[test_case(first_fit, &[1.0, 1.0, 1.0], 1.0, 3; "first fit full length items")]
    #[test_case(best_fit, &[1.0, 1.0, 1.0], 1.0, 3; "best fit full length items")]
    fn exact_fill_stays_valid(
        heuristic: Heuristic,
        lengths: &[f64],
        recipient_length: f64,
        n_levels: usize,
    ) {
        let instance = instance(lengths, recipient_length);
        let permutation: Vec<usize> = (0..instance.n_items()).collect();
        let solution = heuristic(&instance, &permutation);
        assert_eq!(solution.n_levels(), n_levels);
        assert!(assertions::solution_is_valid(&instance, &solution));

        let mut normalized = solution.clone();
        normalized.normalize(&instance);
        assert!(eval::is_feasible(&instance, &normalized));
    }

    #[test]
    fn overfull_level_is_infeasible() {
        let instance = instance(&[0.6, 0.5, 1.1], 1.0);
        assert!(!eval::is_feasible(&instance, &Solution::new(vec![vec![0, 1]])));
        assert!(!eval::is_feasible(&instance, &Solution::new(vec![vec![2]])));
        assert!(eval::is_feasible(&instance, &Solution::new(vec![vec![0], vec![1]])));
    }

    #[test]
    fn fits_tolerates_rounding_only() {
        assert!(eval::fits(0.7, 1.0 - 0.1 - 0.2));
        assert!(eval::fits(0.1 + 0.2, 0.3));
        assert!(eval::fits(0.0, 0.0));
        assert!(!eval::fits(0.7001, 0.7));
        assert!(!eval::fits(f64::NAN, 1.0));
    }

    #[test_case(next_fit; "empty next fit")]
    #[test_case(first_fit; "empty first fit")]
    #[test_case(best_fit; "empty best fit")]
    fn empty_instance(heuristic: Heuristic) {
        let instance = Instance::new(vec![], 10.0);
        let solution = heuristic(&instance, &[]);
        assert_eq!(solution, Solution::empty());
        assert_eq!(eval::cost(&instance, &solution), 0.0);
    }

    #[test_case(next_fit, 0; "next fit seed 0")]
    #[test_case(next_fit, 1; "next fit seed 1")]
    #[test_case(first_fit, 0; "first fit seed 0")]
    #[test_case(first_fit, 1; "first fit seed 1")]
    #[test_case(best_fit, 0; "best fit seed 0")]
    #[test_case(best_fit, 1; "best fit seed 1")]
    fn valid_on_random_instances(heuristic: Heuristic, seed: u64) {
        let mut rng = SmallRng::seed_from_u64(seed);
        for _ in 0..10 {
            let instance = generate_instance(&mut rng, &small_config());
            let mut permutation: Vec<usize> = (0..instance.n_items()).collect();
            permutation.shuffle(&mut rng);

            let solution = heuristic(&instance, &permutation);
            assert!(assertions::solution_is_exact_cover(&solution, instance.n_items()));
            assert!(eval::is_feasible(&instance, &solution));
            assert!(solution.levels.iter().all(|l| !l.is_empty()));
            assert!(solution.n_levels() >= instance.min_levels());
        }
    }

    #[test_case(0; "seed 0")]
    #[test_case(7; "seed 7")]
    fn first_fit_matches_linear_scan(seed: u64) {
        let mut rng = SmallRng::seed_from_u64(seed);
        for _ in 0..10 {
            let instance = generate_instance(&mut rng, &small_config());
            let mut permutation: Vec<usize> = (0..instance.n_items()).collect();
            permutation.shuffle(&mut rng);
            assert_eq!(
                first_fit(&instance, &permutation),
                naive_first_fit(&instance, &permutation)
            );
        }
    }

    #[test]
    fn cost_is_invariant_to_order_within_levels() {
        let mut rng = SmallRng::seed_from_u64(11);
        let instance = generate_instance(&mut rng, &small_config());
        let permutation = heuristics::increasing_height_order(&instance);
        let solution = best_fit(&instance, &permutation);
        let cost = eval::cost(&instance, &solution);

        let mut shuffled = solution.clone();
        for level in shuffled.levels.iter_mut() {
            level.shuffle(&mut rng);
        }
        assert!(assertions::costs_match(cost, eval::cost(&instance, &shuffled)));

        let mut normalized = solution.clone();
        LevelOrder::HeightDescending.apply(&instance, &mut normalized);
        assert!(assertions::same_level_membership(&solution, &normalized));
        assert!(assertions::costs_match(cost, eval::cost(&instance, &normalized)));
        for level in &normalized.levels {
            assert!(level.windows(2).all(|w| {
                instance.rect(w[0]).height >= instance.rect(w[1]).height
            }));
        }
    }

    #[test]
    fn order_ties_break_by_index() {
        let instance = Instance::new(
            vec![
                Rect::new(1.0, 2.0, 4.0),
                Rect::new(1.0, 1.0, 2.0),
                Rect::new(1.0, 2.0, 4.0),
                Rect::new(0.0, 1.0, 1.0),
            ],
            10.0,
        );
        // densities: 2, 2, 2, inf
        assert_eq!(heuristics::decreasing_density_order(&instance), vec![3, 0, 1, 2]);
        assert_eq!(heuristics::increasing_height_order(&instance), vec![1, 3, 0, 2]);
    }

    #[test]
    fn perturbation_is_clamped_and_leaves_other_metrics() {
        let mut rng = SmallRng::seed_from_u64(0);
        let instance = generate_instance(&mut rng, &small_config());
        let noise = Normal::new(-100.0, 0.0).unwrap();

        let noisy = perturbed(&instance, Metric::Weight, &mut rng, &noise);
        assert!(noisy.rects.iter().all(|r| r.weight == 0.0));
        assert!(noisy.rects.iter().zip(&instance.rects).all(|(n, o)| {
            n.length == o.length && n.height == o.height
        }));

        let noisy = perturbed(&instance, Metric::Height, &mut rng, &noise);
        assert!(noisy.rects.iter().all(|r| r.height == 0.0));
        assert!(noisy.rects.iter().zip(&instance.rects).all(|(n, o)| n.weight == o.weight));
    }

    #[test]
    fn zero_noise_equals_deterministic_order() {
        let mut rng = SmallRng::seed_from_u64(5);
        let instance = generate_instance(&mut rng, &small_config());
        let noise = Normal::new(0.0, 0.0).unwrap();

        let ff = randomized_first_fit_decreasing_density(&instance, &mut rng, &noise);
        let expected = first_fit(&instance, &heuristics::decreasing_density_order(&instance));
        assert_eq!(ff, expected);

        let bf = randomized_best_fit_increasing_height(&instance, &mut rng, &noise);
        let expected = best_fit(&instance, &heuristics::increasing_height_order(&instance));
        assert_eq!(bf, expected);
    }

    #[test]
    fn randomized_heuristics_are_reproducible() {
        let mut rng = SmallRng::seed_from_u64(9);
        let instance = generate_instance(&mut rng, &small_config());
        let noise = Normal::new(0.0, 2.0).unwrap();

        let run = |seed: u64| {
            let mut rng = SmallRng::seed_from_u64(seed);
            let ff = randomized_first_fit_decreasing_density(&instance, &mut rng, &noise);
            let bf = randomized_best_fit_increasing_height(&instance, &mut rng, &noise);
            (ff, bf)
        };
        let (ff_a, bf_a) = run(1);
        let (ff_b, bf_b) = run(1);
        assert_eq!(ff_a, ff_b);
        assert_eq!(bf_a, bf_b);
        assert!(assertions::solution_is_valid(&instance, &ff_a));
        assert!(assertions::solution_is_valid(&instance, &bf_a));
    }
}
