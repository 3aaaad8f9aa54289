use algograph::graph::*;
use std::collections::{BTreeSet, HashMap};

/// Rank (or probability) of every page in a graph.
pub type Distribution = HashMap<VertexId, f64, ahash::RandomState>;

pub fn norm_1(v: &Distribution) -> f64 {
    v.values().map(|x| x.abs()).sum()
}

pub fn max_abs(v: &Distribution) -> f64 {
    v.values().fold(0.0, |acc, x| f64::max(acc, x.abs()))
}

pub fn uniform<G: QueryableGraph>(graph: &G) -> Distribution {
    let n = graph.vertex_size() as f64;
    graph.iter_vertices().map(|v| (v, 1.0 / n)).collect()
}

/// Distinct pages `u` links to. Self loops and parallel edges collapse.
pub fn outlinks<G: QueryableGraph>(graph: &G, u: VertexId) -> BTreeSet<VertexId> {
    graph
        .out_edges(&u)
        .map(|e| e.sink)
        .filter(|v| *v != u)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outlinks_ignore_loops_and_duplicates() {
        let mut g = directed::TreeBackedGraph::new();
        let a = g.add_vertex();
        let b = g.add_vertex();
        g.add_edge(a, b);
        g.add_edge(a, b);
        g.add_edge(a, a);
        let links = outlinks(&g, a);
        assert_eq!(links.len(), 1);
        assert!(links.contains(&b));
        assert!(outlinks(&g, b).is_empty());
    }

    #[test]
    fn norms() {
        let mut g = directed::TreeBackedGraph::new();
        let a = g.add_vertex();
        let b = g.add_vertex();
        let mut v = Distribution::default();
        v.insert(a, -0.25);
        v.insert(b, 0.5);
        assert!((norm_1(&v) - 0.75).abs() < 1e-12);
        assert!((max_abs(&v) - 0.5).abs() < 1e-12);
        let u = uniform(&g);
        assert_eq!(u.len(), 2);
        assert!((norm_1(&u) - 1.0).abs() < 1e-12);
    }
}
