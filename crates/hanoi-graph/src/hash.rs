use sha2::{Digest, Sha256};

use crate::graph::TransitionGraph;

/// Computes a canonical SHA-256 fingerprint of the graph.
///
/// Covers the dimensions, the vertex ids in discovery order and the sorted
/// `(source, destination, multiplicity)` triples, so two runs agree on the
/// fingerprint only if they discovered the same states in the same order and
/// attributed the same walk counts to every edge.
pub fn canonical_hash(graph: &TransitionGraph) -> String {
    let mut hasher = Sha256::new();
    let params = graph.params();
    hasher.update((params.disks() as u64).to_le_bytes());
    hasher.update((params.positions() as u64).to_le_bytes());
    hasher.update(params.base().to_le_bytes());

    hasher.update((graph.vertex_count() as u64).to_le_bytes());
    let ids: Vec<u64> = graph.iter().map(|(_, vertex)| vertex.id().as_raw()).collect();
    for id in &ids {
        hasher.update(id.to_le_bytes());
    }

    let mut triples = Vec::with_capacity(graph.edge_count());
    for (_, vertex) in graph.iter() {
        for edge in vertex.successors() {
            let target = ids.get(edge.target.as_usize()).copied().unwrap_or(u64::MAX);
            triples.push((vertex.id().as_raw(), target, edge.multiplicity));
        }
    }
    triples.sort_unstable();
    hasher.update((triples.len() as u64).to_le_bytes());
    for (source, target, multiplicity) in triples {
        hasher.update(source.to_le_bytes());
        hasher.update(target.to_le_bytes());
        hasher.update(multiplicity.to_le_bytes());
    }

    format!("{:x}", hasher.finalize())
}
