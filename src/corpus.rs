use crate::{Distribution, Error};
use algograph::graph::*;
use std::collections::{BTreeMap, HashMap};

/// A closed set of labelled pages and the hyperlinks between them.
///
/// Every link target is a page of the corpus and no page links to itself.
/// Both hold by construction: [`Corpus::add_link`] rejects unknown pages and
/// ignores self links and repeated links.
#[derive(Debug, Clone)]
pub struct Corpus {
    graph: directed::TreeBackedGraph,
    vertices: HashMap<String, VertexId, ahash::RandomState>,
    labels: BTreeMap<VertexId, String>,
}

impl Corpus {
    pub fn new() -> Self {
        Self {
            graph: directed::TreeBackedGraph::new(),
            vertices: HashMap::with_hasher(ahash::RandomState::new()),
            labels: BTreeMap::new(),
        }
    }

    /// Builds a corpus from `(page, outlinks)` pairs.
    ///
    /// Links pointing outside the listed pages are dropped, as are self links.
    pub fn from_links<I, P, L, T>(links: I) -> Self
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<String>,
        L: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let links: Vec<(String, Vec<String>)> = links
            .into_iter()
            .map(|(p, ls)| (p.into(), ls.into_iter().map(Into::into).collect()))
            .collect();
        let mut corpus = Self::new();
        for (page, _) in links.iter() {
            corpus.add_page(page);
        }
        for (page, targets) in links.iter() {
            for target in targets.iter() {
                if corpus.vertices.contains_key(target) {
                    let _ = corpus.add_link(page, target);
                }
            }
        }
        corpus
    }

    /// Adds a page, returning the existing vertex if the label is known.
    pub fn add_page(&mut self, label: &str) -> VertexId {
        if let Some(v) = self.vertices.get(label) {
            return *v;
        }
        let v = self.graph.add_vertex();
        self.vertices.insert(label.to_string(), v);
        self.labels.insert(v, label.to_string());
        v
    }

    /// Adds a link between two known pages.
    ///
    /// Returns `false` when nothing was added, i.e. for a self link or a link
    /// already present.
    pub fn add_link(&mut self, from: &str, to: &str) -> Result<bool, Error> {
        let u = self.vertex(from)?;
        let v = self.vertex(to)?;
        if u == v || self.graph.edges_connecting(&u, &v).next().is_some() {
            return Ok(false);
        }
        self.graph.add_edge(u, v);
        Ok(true)
    }

    pub fn vertex(&self, label: &str) -> Result<VertexId, Error> {
        self.vertices
            .get(label)
            .copied()
            .ok_or_else(|| Error::UnknownPage(label.to_string()))
    }

    pub fn page(&self, v: &VertexId) -> Option<&str> {
        self.labels.get(v).map(String::as_str)
    }

    /// Labels of the pages `label` links to, sorted.
    pub fn links_of(&self, label: &str) -> Result<Vec<&str>, Error> {
        let u = self.vertex(label)?;
        let mut res: Vec<&str> = crate::outlinks(self, u)
            .into_iter()
            .filter_map(|v| self.page(&v))
            .collect();
        res.sort_unstable();
        Ok(res)
    }

    /// Re-keys a distribution by page label.
    pub fn labelled(&self, dist: &Distribution) -> BTreeMap<String, f64> {
        dist.iter()
            .filter_map(|(v, w)| self.page(v).map(|p| (p.to_string(), *w)))
            .collect()
    }
}

impl Default for Corpus {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryableGraph for Corpus {
    fn vertex_size(&self) -> usize {
        self.graph.vertex_size()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        self.graph.iter_vertices()
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        self.graph.contains_vertex(v)
    }

    fn edge_size(&self) -> usize {
        self.graph.edge_size()
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        self.graph.iter_edges()
    }

    fn contains_edge(&self, e: &EdgeId) -> bool {
        self.graph.contains_edge(e)
    }

    fn find_edge(&self, e: &EdgeId) -> Option<Edge> {
        self.graph.find_edge(e)
    }

    fn edges_connecting(
        &self,
        source: &VertexId,
        sink: &VertexId,
    ) -> Box<dyn Iterator<Item = Edge> + '_> {
        self.graph.edges_connecting(source, sink)
    }

    fn in_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_> {
        self.graph.in_edges(v)
    }

    fn out_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_> {
        self.graph.out_edges(v)
    }
}
