use hanoi_core::{Configuration, HanoiParams};
use hanoi_graph::MoveEnumerator;
use proptest::prelude::*;

#[test]
fn worked_example_has_two_successors() {
    let params = HanoiParams::with_default_base(3, 3).unwrap();
    let enumerator = MoveEnumerator::new(params);
    let config = Configuration::from_positions(&params, vec![0, 1, 2]).unwrap();
    let successors: Vec<Vec<usize>> = enumerator
        .successors(&config)
        .unwrap()
        .into_iter()
        .map(|successor| successor.configuration.positions().to_vec())
        .collect();
    assert_eq!(successors, vec![vec![1, 1, 2], vec![0, 2, 2]]);
}

#[test]
fn canonical_start_only_moves_lightest_disk() {
    let params = HanoiParams::with_default_base(4, 3).unwrap();
    let enumerator = MoveEnumerator::new(params);
    let start = Configuration::canonical_start(&params);
    let successors = enumerator.successors(&start).unwrap();
    assert_eq!(successors.len(), 1);
    assert_eq!(successors[0].disk_move.weight, 1);
    assert_eq!(successors[0].configuration.positions(), &[1, 0, 0, 0]);
}

#[test]
fn single_stack_has_no_moves() {
    let params = HanoiParams::with_default_base(5, 1).unwrap();
    let enumerator = MoveEnumerator::new(params);
    let start = Configuration::canonical_start(&params);
    assert!(enumerator.successors(&start).unwrap().is_empty());
}

#[test]
fn boundary_disks_test_single_neighbour() {
    let params = HanoiParams::with_default_base(2, 3).unwrap();
    let enumerator = MoveEnumerator::new(params);
    // disk 1 at the right edge, disk 2 at the left edge
    let config = Configuration::from_positions(&params, vec![2, 0]).unwrap();
    let moves: Vec<(usize, usize, usize)> = enumerator
        .successors(&config)
        .unwrap()
        .into_iter()
        .map(|s| (s.disk_move.weight, s.disk_move.from, s.disk_move.to))
        .collect();
    assert_eq!(moves, vec![(1, 2, 1), (2, 0, 1)]);
}

fn configuration_strategy() -> impl Strategy<Value = (usize, usize, Vec<usize>)> {
    (1usize..7, 1usize..7).prop_flat_map(|(disks, positions)| {
        (
            Just(disks),
            Just(positions),
            proptest::collection::vec(0..positions, disks),
        )
    })
}

proptest! {
    #[test]
    fn emitted_moves_are_legal((disks, positions, digits) in configuration_strategy()) {
        let params = HanoiParams::with_default_base(disks, positions).unwrap();
        let enumerator = MoveEnumerator::new(params);
        let config = Configuration::from_positions(&params, digits).unwrap();
        let successors = enumerator.successors(&config).unwrap();
        for successor in &successors {
            let m = successor.disk_move;
            prop_assert_eq!(config.position_of(m.weight), Some(m.from));
            prop_assert_eq!(m.from.abs_diff(m.to), 1);
            // moved disk is the lightest at both the source and the destination
            for (index, &position) in config.positions().iter().enumerate() {
                let weight = index + 1;
                if weight == m.weight {
                    continue;
                }
                if position == m.from || position == m.to {
                    prop_assert!(weight > m.weight);
                }
            }
            let expected = config.apply(&m);
            prop_assert_eq!(&successor.configuration, &expected);
        }
        let mut ids: Vec<_> = successors.iter().map(|s| s.id).collect();
        ids.sort();
        ids.dedup();
        prop_assert_eq!(ids.len(), successors.len());
    }
}
