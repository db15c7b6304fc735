//! Keyword-overlap job search: normalizer, Jaccard scorer, ranking loop.

pub mod handlers;
pub mod ranker;
pub mod text;
