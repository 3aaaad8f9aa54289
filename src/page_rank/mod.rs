//! Two estimators of PageRank over the same graph.
//!
//! [`sampled::SampledPageRank`] follows a random surfer for a fixed number of
//! steps and counts visits. [`iterated::IteratedPageRank`] applies the
//! PageRank recurrence to all pages until no rank moves by more than a
//! tolerance. Both move according to [`TransitionModel`].

mod traits;
pub use self::traits::*;
mod transition;
pub use self::transition::{transition, TransitionModel};

pub mod iterated;
pub mod sampled;

use crate::{Distribution, Error};
use algograph::graph::QueryableGraph;
use rand::Rng;

/// Estimates PageRank from `samples` steps of a random surfer driven by `rng`.
pub fn sample<G, R>(
    graph: &G,
    damping: f64,
    samples: usize,
    rng: &mut R,
) -> Result<Distribution, Error>
where
    G: QueryableGraph,
    R: Rng + ?Sized,
{
    let config = sampled::Config {
        damping,
        samples,
        seed: None,
    };
    let res = sampled::SampledPageRank::new(graph, &config)?.calc_with_rng(rng);
    Ok(res.page_rank)
}

/// Iterates the PageRank recurrence until every rank moves by at most
/// `tolerance`, giving up after [`iterated::Config::default`]'s sweep cap.
pub fn iterate<G: QueryableGraph>(
    graph: &G,
    damping: f64,
    tolerance: f64,
) -> Result<Distribution, Error> {
    let config = iterated::Config {
        damping,
        tolerance,
        ..iterated::Config::default()
    };
    let res = iterated::IteratedPageRank::new(graph, &config)?.calc()?;
    Ok(res.page_rank)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Corpus;
    use rand::{rngs::SmallRng, SeedableRng};

    fn corpus0() -> Corpus {
        Corpus::from_links([
            ("1.html", vec!["2.html"]),
            ("2.html", vec!["1.html", "3.html"]),
            ("3.html", vec!["2.html", "4.html"]),
            ("4.html", vec!["2.html"]),
        ])
    }

    #[test]
    fn estimators_agree() {
        let corpus = corpus0();
        let mut rng = SmallRng::seed_from_u64(3407);
        let sampled = sample(&corpus, 0.85, 100_000, &mut rng).unwrap();
        let iterated = iterate(&corpus, 0.85, 1e-6).unwrap();
        let sampled = corpus.labelled(&sampled);
        let iterated = corpus.labelled(&iterated);
        for (page, r) in iterated.iter() {
            assert!((sampled[page] - r).abs() < 0.02, "{sampled:?} vs {iterated:?}");
        }
        assert!(iterated["2.html"] > iterated["1.html"]);
    }

    #[test]
    fn three_cycle_end_to_end() {
        let corpus = Corpus::from_links([("A", vec!["B"]), ("B", vec!["C"]), ("C", vec!["A"])]);
        let ranks = corpus.labelled(&iterate(&corpus, 0.85, 0.001).unwrap());
        for r in ranks.values() {
            assert!((r - 1.0 / 3.0).abs() <= 0.001, "{ranks:?}");
        }
        let mut rng = SmallRng::seed_from_u64(1);
        let ranks = corpus.labelled(&sample(&corpus, 0.85, 30_000, &mut rng).unwrap());
        for r in ranks.values() {
            assert!((r - 1.0 / 3.0).abs() <= 0.02, "{ranks:?}");
        }
    }
}
