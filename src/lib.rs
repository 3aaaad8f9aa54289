mod common;
pub use self::common::*;
mod error;
pub use self::error::Error;
mod corpus;
pub use self::corpus::Corpus;
pub mod crawl;
pub use self::crawl::crawl;

pub mod page_rank;

#[cfg(test)]
mod random_graph;
