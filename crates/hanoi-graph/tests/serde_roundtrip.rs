use hanoi_core::{HanoiParams, StateId};
use hanoi_graph::{MoveEnumerator, OutDegreeBounds, TransitionGraph, VertexIndex};

#[test]
fn out_degree_bounds_roundtrip_json() {
    let params = HanoiParams::with_default_base(3, 3).unwrap();
    let enumerator = MoveEnumerator::new(params);
    let mut graph = TransitionGraph::new(params);
    let start = StateId::from_raw(0);
    let source = graph.ensure_vertex(start);
    for successor in enumerator.successors_of(start).unwrap() {
        let target = graph.ensure_vertex(successor.id);
        graph.record_edge(source, target).unwrap();
    }

    let bounds = graph.out_degree_bounds();
    assert_eq!(bounds.min, Some(0));
    assert_eq!(bounds.max, Some(1));
    let json = serde_json::to_string(&bounds).unwrap();
    let restored: OutDegreeBounds = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, bounds);
}

#[test]
fn empty_bounds_serialize_as_null() {
    let empty = TransitionGraph::new(HanoiParams::with_default_base(2, 2).unwrap());
    let value = serde_json::to_value(empty.out_degree_bounds()).unwrap();
    assert_eq!(value, serde_json::json!({ "min": null, "max": null }));
}

#[test]
fn vertex_index_is_transparent_number() {
    let json = serde_json::to_string(&VertexIndex::new(7)).unwrap();
    assert_eq!(json, "7");
    let restored: VertexIndex = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.as_usize(), 7);
}
