use super::*;
use crate::{common::*, error::check_damping, Distribution, Error};
use algograph::graph::{QueryableGraph, VertexId};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// PageRank by repeated application of the PageRank recurrence.
pub struct IteratedPageRank<'a, G>
where
    G: QueryableGraph,
{
    graph: &'a G,
    damping: f64,
    tolerance: f64,
    max_iterations: usize,
    dangling: Dangling,
    /// For every page `p`, the pages `q` linking to it with `1 / |links(q)|`.
    backlinks: HashMap<VertexId, Vec<(VertexId, f64)>, ahash::RandomState>,
    dangling_pages: Vec<VertexId>,
}

/// What happens to the rank held by a page without links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dangling {
    /// The rank leaves the system, so ranks may sum to less than 1.
    #[default]
    Discard,
    /// The rank is spread evenly over all pages, as a random surfer would.
    Uniform,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
    pub tolerance: f64,
    pub max_iterations: usize,
    pub dangling: Dangling,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: 0.85,
            tolerance: 0.001,
            max_iterations: 10_000,
            dangling: Dangling::Discard,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Result {
    pub page_rank: Distribution,
    /// Number of sweeps, the converging one included.
    pub iterations: usize,
    /// Largest per-page change of every sweep.
    pub max_deltas: Vec<f64>,
    /// Total change of every sweep.
    pub l1_deltas: Vec<f64>,
}

enum Sweep {
    Iterating,
    Converged,
}

impl<'a, G: QueryableGraph> IteratedPageRank<'a, G> {
    pub fn new(g: &'a G, config: &Config) -> std::result::Result<Self, Error> {
        if g.vertex_size() == 0 {
            return Err(Error::EmptyGraph);
        }
        let damping = check_damping(config.damping)?;
        let tolerance = config.tolerance;
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(Error::InvalidTolerance(tolerance));
        }
        let mut backlinks: HashMap<_, Vec<_>, ahash::RandomState> =
            g.iter_vertices().map(|v| (v, vec![])).collect();
        let mut dangling_pages = vec![];
        for q in g.iter_vertices() {
            let links = outlinks(g, q);
            if links.is_empty() {
                dangling_pages.push(q);
                continue;
            }
            let unit = 1.0 / (links.len() as f64);
            for p in links {
                backlinks.get_mut(&p).unwrap().push((q, unit));
            }
        }
        Ok(Self {
            graph: g,
            damping,
            tolerance,
            max_iterations: config.max_iterations,
            dangling: config.dangling,
            backlinks,
            dangling_pages,
        })
    }

    /// One application of the recurrence. Reads only `old`, writes only `new`.
    fn sweep(&self, old: &Distribution, new: &mut Distribution) {
        let damping = self.damping;
        let n = self.graph.vertex_size() as f64;
        let mut base = (1.0 - damping) / n;
        if self.dangling == Dangling::Uniform {
            let mass: f64 = self.dangling_pages.iter().map(|q| old[q]).sum();
            base += damping * mass / n;
        }
        new.clear();
        for (p, qs) in self.backlinks.iter() {
            let sigma: f64 = qs.iter().map(|(q, unit)| old[q] * unit).sum();
            new.insert(*p, base + damping * sigma);
        }
    }
}

impl<G: QueryableGraph> PageRank for IteratedPageRank<'_, G> {
    type Result = self::Result;

    fn calc(&self) -> std::result::Result<Self::Result, Error> {
        let mut p = uniform(self.graph);
        let mut r = HashMap::with_hasher(ahash::RandomState::new());
        let mut delta = HashMap::with_hasher(ahash::RandomState::new());
        let mut max_deltas = vec![];
        let mut l1_deltas = vec![];
        let mut state = Sweep::Iterating;
        while let Sweep::Iterating = state {
            if max_deltas.len() == self.max_iterations {
                let last = max_deltas.last().copied().unwrap_or(f64::INFINITY);
                warn!(
                    iterations = self.max_iterations,
                    delta = last,
                    "PageRank did not converge"
                );
                return Err(Error::DidNotConverge {
                    iterations: self.max_iterations,
                    delta: last,
                });
            }

            self.sweep(&p, &mut r);

            delta.clear();
            for v in self.graph.iter_vertices() {
                let a = p.get(&v).unwrap();
                let b = r.get(&v).unwrap();
                delta.insert(v, a - b);
            }
            let max_delta = max_abs(&delta);
            max_deltas.push(max_delta);
            l1_deltas.push(norm_1(&delta));
            debug!(iteration = max_deltas.len(), max_delta, "sweep");

            if max_delta <= self.tolerance {
                state = Sweep::Converged;
            }
            std::mem::swap(&mut p, &mut r);
        }
        info!(iterations = max_deltas.len(), "PageRank converged");
        Ok(Self::Result {
            page_rank: p,
            iterations: max_deltas.len(),
            max_deltas,
            l1_deltas,
        })
    }
}

impl PageRankResult for self::Result {
    fn page_rank(&self) -> &Distribution {
        &self.page_rank
    }

    fn debug<'a, G: QueryableGraph>(&'a self, graph: &'a G) -> impl std::fmt::Debug + 'a {
        ResultDebug {
            graph,
            result: self,
        }
    }
}

pub struct ResultDebug<'a, G: QueryableGraph> {
    graph: &'a G,
    result: &'a self::Result,
}

impl<G: QueryableGraph> std::fmt::Debug for ResultDebug<'_, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "after {} sweeps", self.result.iterations)?;
        for v in self.graph.iter_vertices() {
            let p = self.result.page_rank.get(&v).unwrap();
            writeln!(f, "{v:?}: {p:?}")?;
        }
        Ok(())
    }
}
