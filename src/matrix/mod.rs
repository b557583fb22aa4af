//! Incidence-matrix construction and its truncated singular-value
//! decomposition.

pub mod incidence;
pub mod svd;

pub use incidence::{contains, IncidenceMatrix};
pub use svd::{truncated_svd, SvdOptions, TruncatedSvd};
