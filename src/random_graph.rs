use algograph::graph::*;
use quickcheck::Arbitrary;

/// Small directed graphs with parallel edges, self loops and dangling pages.
#[derive(Debug, Clone)]
pub struct RandomGraph {
    pub graph: directed::TreeBackedGraph,
}

impl Arbitrary for RandomGraph {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        const N: usize = 10;

        let n: usize = usize::arbitrary(g) % N + 1;
        let mut graph = directed::TreeBackedGraph::new();
        let vertices: Vec<_> = (0..n).map(|_| graph.add_vertex()).collect();
        for _ in 0..(2 * n) {
            let v0 = vertices[usize::arbitrary(g) % vertices.len()];
            let v1 = vertices[usize::arbitrary(g) % vertices.len()];
            graph.add_edge(v0, v1);
        }
        Self { graph }
    }
}

/// Like [`RandomGraph`], but every page links somewhere.
#[derive(Debug, Clone)]
pub struct NoDanglingGraph {
    pub graph: directed::TreeBackedGraph,
}

impl Arbitrary for NoDanglingGraph {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        const N: usize = 8;

        let n: usize = usize::arbitrary(g) % N + 2;
        let mut graph = directed::TreeBackedGraph::new();
        let vertices: Vec<_> = (0..n).map(|_| graph.add_vertex()).collect();
        for (i, u) in vertices.iter().enumerate() {
            let v = vertices[(i + 1) % n];
            graph.add_edge(*u, v);
        }
        for _ in 0..n {
            let v0 = vertices[usize::arbitrary(g) % vertices.len()];
            let v1 = vertices[usize::arbitrary(g) % vertices.len()];
            graph.add_edge(v0, v1);
        }
        Self { graph }
    }
}
