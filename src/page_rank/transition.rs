use crate::{common::*, error::check_damping, Error};
use algograph::graph::*;
use std::collections::HashMap;

/// Where a random surfer goes next from each page.
///
/// With probability `damping` the surfer follows one of the current page's
/// links, chosen uniformly. Otherwise it jumps to any page of the graph,
/// again uniformly. A page without links is treated as linking to every page.
pub struct TransitionModel<'a, G>
where
    G: QueryableGraph,
{
    graph: &'a G,
    damping: f64,
    links: HashMap<VertexId, Vec<VertexId>, ahash::RandomState>,
}

impl<'a, G: QueryableGraph> TransitionModel<'a, G> {
    pub fn new(graph: &'a G, damping: f64) -> Result<Self, Error> {
        let damping = check_damping(damping)?;
        let links = graph
            .iter_vertices()
            .map(|u| (u, outlinks(graph, u).into_iter().collect()))
            .collect();
        Ok(Self {
            graph,
            damping,
            links,
        })
    }

    /// Distribution of the page visited right after `page`.
    pub fn next(&self, page: VertexId) -> Result<Distribution, Error> {
        let links = self.links.get(&page).ok_or(Error::InvalidPage(page))?;
        let n = self.graph.vertex_size() as f64;
        if links.is_empty() {
            return Ok(uniform(self.graph));
        }
        let jump = (1.0 - self.damping) / n;
        let mut res: Distribution = self.graph.iter_vertices().map(|v| (v, jump)).collect();
        let follow = self.damping / (links.len() as f64);
        for v in links.iter() {
            *res.get_mut(v).unwrap() += follow;
        }
        Ok(res)
    }
}

/// One-shot form of [`TransitionModel::next`].
pub fn transition<G: QueryableGraph>(
    graph: &G,
    page: VertexId,
    damping: f64,
) -> Result<Distribution, Error> {
    TransitionModel::new(graph, damping)?.next(page)
}
