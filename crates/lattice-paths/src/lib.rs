//! Search and labelling algorithms over integer grids.
//!
//! - **Dijkstra** shortest path with origin-excluded entry costs
//!   ([`PathRange::shortest_path_cost`], [`PathRange::shortest_path`])
//! - **Lowest total risk** corner-to-corner, plain or tiled
//!   ([`lowest_total_risk`], [`lowest_total_risk_tiled`])
//! - **Region labelling** with deferred union-find merging ([`RegionMap`])
//! - **Connected components** by flood fill ([`PathRange::cc_map_all`])
//!
//! Searches run through [`PathRange`], which owns the scratch buffers, and
//! take their graph from a pather.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | connected components |
//! | [`WeightedPather`] : [`Pather`] | shortest paths |

mod cc;
mod dijkstra;
mod error;
mod pathrange;
mod regions;
mod risk;
mod traits;
mod union_find;

pub use error::PathError;
pub use pathrange::{Path, PathNode, PathRange};
pub use regions::{BarrierPather, DEFAULT_BARRIER, RegionMap};
pub use risk::{RiskPather, TiledRiskPather, lowest_total_risk, lowest_total_risk_tiled};
pub use traits::{Pather, WeightedPather};
pub use union_find::DisjointSet;
