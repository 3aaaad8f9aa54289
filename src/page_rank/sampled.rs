use super::*;
use crate::{Distribution, Error};
use algograph::graph::{QueryableGraph, VertexId};
use rand::{
    distr::{weighted::WeightedIndex, Distribution as _},
    prelude::*,
    rngs::SmallRng,
};
use std::collections::HashMap;
use tracing::debug;

/// PageRank estimated by the visit frequencies of one random surfer.
pub struct SampledPageRank<'a, G>
where
    G: QueryableGraph,
{
    model: TransitionModel<'a, G>,
    vertices: Vec<VertexId>,
    samples: usize,
    seed: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
    pub samples: usize,
    /// Seeds the walk for reproducible runs. `None` draws a seed from the OS.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: 0.85,
            samples: 10_000,
            seed: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Result {
    pub page_rank: Distribution,
    pub visits: HashMap<VertexId, usize, ahash::RandomState>,
}

impl<'a, G: QueryableGraph> SampledPageRank<'a, G> {
    pub fn new(g: &'a G, config: &Config) -> std::result::Result<Self, Error> {
        if g.vertex_size() == 0 {
            return Err(Error::EmptyGraph);
        }
        if config.samples == 0 {
            return Err(Error::InvalidSampleCount);
        }
        let model = TransitionModel::new(g, config.damping)?;
        let mut vertices: Vec<_> = g.iter_vertices().collect();
        vertices.sort();
        Ok(Self {
            model,
            vertices,
            samples: config.samples,
            seed: config.seed,
        })
    }

    /// Walks `samples` pages, drawing every step from `rng`.
    pub fn calc_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> self::Result {
        let mut visits: HashMap<_, _, ahash::RandomState> =
            self.vertices.iter().map(|v| (*v, 0usize)).collect();
        let mut cur = *self.vertices.choose(rng).unwrap();
        *visits.get_mut(&cur).unwrap() += 1;
        for _ in 1..self.samples {
            let next = self.model.next(cur).unwrap();
            let weights: Vec<f64> = self.vertices.iter().map(|v| next[v]).collect();
            let pick = WeightedIndex::new(&weights)
                .unwrap_or_else(|e| panic!("bad transition weights {weights:?}: {e}"));
            cur = self.vertices[pick.sample(rng)];
            *visits.get_mut(&cur).unwrap() += 1;
        }

        let total: usize = visits.values().sum();
        assert_eq!(total, self.samples, "visits lost or duplicated");
        let n = self.samples as f64;
        let page_rank = visits.iter().map(|(v, c)| (*v, *c as f64 / n)).collect();
        debug!(samples = self.samples, "random walk finished");
        Result { page_rank, visits }
    }
}

impl<G: QueryableGraph> PageRank for SampledPageRank<'_, G> {
    type Result = self::Result;

    fn calc(&self) -> std::result::Result<Self::Result, Error> {
        let mut rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Ok(self.calc_with_rng(&mut rng))
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
        for v in self.graph.iter_vertices() {
            let p = self.result.page_rank.get(&v).unwrap();
            let c = self.result.visits.get(&v).unwrap();
            writeln!(f, "{v:?}: {p:?}, {c}")?;
        }
        Ok(())
    }
}
