use hanoi_core::HanoiParams;
use hanoi_walk::{simulate, DiffusionEngine};

#[test]
fn frontier_increments_equal_moves_out_of_frontier() {
    let params = HanoiParams::with_default_base(4, 4).unwrap();
    let mut engine = DiffusionEngine::new(params).unwrap();
    for _ in 0..40 {
        let expected: u64 = engine
            .frontier()
            .iter()
            .map(|&id| engine.enumerator().successors_of(id).unwrap().len() as u64)
            .sum();
        let metrics = engine.step().unwrap();
        assert_eq!(metrics.frontier_increments, expected);
    }
}

#[test]
fn totals_split_into_diffusion_and_frontier_parts() {
    let params = HanoiParams::with_default_base(3, 3).unwrap();
    let simulation = simulate(params, 24, None).unwrap();
    let mut previous_total = 0;
    for row in simulation.metrics.rounds() {
        assert_eq!(
            row.total_multiplicity,
            previous_total + row.frontier_increments + row.diffusion_increments
        );
        previous_total = row.total_multiplicity;
    }
    let outgoing: u64 = simulation
        .graph
        .iter()
        .map(|(_, vertex)| vertex.outgoing_multiplicity())
        .sum();
    assert_eq!(outgoing, simulation.final_total);
    assert_eq!(simulation.final_inbound.iter().sum::<u64>(), simulation.final_total);
}

#[test]
fn early_rounds_follow_known_growth() {
    let params = HanoiParams::with_default_base(3, 3).unwrap();
    let simulation = simulate(params, 5, None).unwrap();
    let rows = simulation.metrics.rounds();
    let vertices: Vec<usize> = rows.iter().map(|row| row.vertices).collect();
    let edges: Vec<usize> = rows.iter().map(|row| row.edges).collect();
    let totals: Vec<u64> = rows.iter().map(|row| row.total_multiplicity).collect();
    let frontier: Vec<u64> = rows.iter().map(|row| row.frontier_increments).collect();
    assert_eq!(vertices, vec![2, 3, 4, 5, 6]);
    assert_eq!(edges, vec![1, 3, 5, 7, 9]);
    assert_eq!(totals, vec![1, 3, 6, 12, 19]);
    assert_eq!(frontier, vec![1, 2, 3, 4, 4]);
    assert_eq!(simulation.final_round_walks(), 7);
}

#[test]
fn graph_growth_is_monotone() {
    let params = HanoiParams::with_default_base(5, 4).unwrap();
    let simulation = simulate(params, 64, None).unwrap();
    assert!(simulation.metrics.growth_is_monotone());
    let rows = simulation.metrics.rounds();
    assert!(rows
        .windows(2)
        .all(|pair| pair[1].total_multiplicity >= pair[0].total_multiplicity));
}

#[test]
fn expanded_states_are_enumerated_once() {
    let params = HanoiParams::with_default_base(3, 3).unwrap();
    let simulation = simulate(params, 32, None).unwrap();
    let expansions: usize = simulation
        .metrics
        .rounds()
        .iter()
        .map(|row| row.expansions)
        .sum();
    let expanded = simulation
        .graph
        .iter()
        .filter(|(_, vertex)| vertex.is_expanded())
        .count();
    assert_eq!(expansions, expanded);
}

#[test]
fn frontier_guard_aborts_run() {
    let params = HanoiParams::with_default_base(4, 4).unwrap();
    let err = simulate(params, 16, Some(1)).unwrap_err();
    assert_eq!(err.code(), "frontier-limit");
}
