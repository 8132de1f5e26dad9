use hanoi_core::{EncodingBase, HanoiParams};
use hanoi_graph::StateCodec;
use hanoi_walk::{aggregate, run, simulate, RunConfig, WalkStatistics};

fn statistics(disks: usize, positions: usize, rounds: usize) -> WalkStatistics {
    let params = HanoiParams::with_default_base(disks, positions).unwrap();
    let simulation = simulate(params, rounds, None).unwrap();
    aggregate(&simulation, &StateCodec::new(params)).unwrap()
}

fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() < tolerance,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn three_disks_three_positions_sixteen_rounds() {
    let stats = statistics(3, 3, 16);
    assert_close(stats.mean, 0.7777777778, 1e-6);
    assert_close(stats.std_dev, 0.3875638803, 1e-6);
    assert_eq!(stats.walks, 27);
}

#[test]
fn six_disks_six_positions_256_rounds() {
    let config = RunConfig {
        disks: 6,
        positions: 6,
        rounds: 256,
        ..RunConfig::default()
    };
    let summary = run(&config).unwrap();
    assert_close(summary.statistics.mean, 2.5004533463, 1e-4);
    assert_close(summary.statistics.std_dev, 0.7457665046, 1e-4);
    assert_eq!(summary.statistics.walks, 212_704);
}

#[test]
fn legacy_encoding_matches_default_when_disks_equal_positions() {
    let params = HanoiParams::new(3, 3, EncodingBase::Disks).unwrap();
    let simulation = simulate(params, 16, None).unwrap();
    let legacy = aggregate(&simulation, &StateCodec::new(params)).unwrap();
    assert_eq!(legacy, statistics(3, 3, 16));
}

#[test]
fn short_runs_match_hand_checked_values() {
    // a single round can only move the lightest disk: (1 * 1) / 6
    let one = statistics(3, 3, 1);
    assert_close(one.mean, 1.0 / 6.0, 1e-12);
    assert_close(one.std_dev, 0.0, 1e-12);
    assert_eq!(one.walks, 1);

    let two = statistics(3, 3, 2);
    assert_close(two.mean, 1.0 / 6.0, 1e-12);
    assert_close(two.std_dev, 1.0 / 6.0, 1e-12);
    assert_eq!(two.walks, 2);

    let five = statistics(3, 3, 5);
    assert_close(five.mean, 0.4047619048, 1e-9);
    assert_close(five.std_dev, 0.2332847374, 1e-9);
    assert_eq!(five.walks, 7);
}

#[test]
fn larger_and_rectangular_puzzles() {
    let square = statistics(4, 4, 32);
    assert_close(square.mean, 1.4801526718, 1e-9);
    assert_close(square.std_dev, 0.5860489841, 1e-9);
    assert_eq!(square.walks, 655);

    let wide = statistics(2, 3, 6);
    assert_close(wide.mean, 0.8, 1e-12);
    assert_close(wide.std_dev, 0.4, 1e-12);
    assert_eq!(wide.walks, 10);
}
