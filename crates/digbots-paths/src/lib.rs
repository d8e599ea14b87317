//! Grid pathfinding and reachability for digging bots.
//!
//! Every query goes through a [`Navigator`], which borrows a
//! [`GridWorld`](digbots_core::GridWorld) and reads its tiles fresh on each
//! call:
//!
//! - **Neighbor expansion** ([`Navigator::neighbors`], [`Navigator::neighbor_blocks`])
//! - **Flood fill** reachability ([`Navigator::flood_reachable`])
//! - **Weighted A\*** through diggable tiles ([`Navigator::find_path`])
//! - **Patrol routes** covering a cavity ([`Navigator::patrol_route`])
//!
//! Each query comes in two forms: `try_*` returns a [`PathError`] on
//! failure, the plain form logs the error and returns an empty result.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | flood fill |
//! | [`WeightedPather`] : [`Pather`] | path cost |
//! | [`AstarPather`] : [`WeightedPather`] | A* |

mod astar;
mod config;
mod distance;
mod error;
mod flood;
mod navigator;
mod neighbors;
mod patrol;
mod traits;

pub use config::PathConfig;
pub use distance::{euclidean, manhattan};
pub use error::PathError;
pub use navigator::{DigPather, Navigator};
pub use neighbors::{Neighbors, traversable};
pub use traits::{AstarPather, Pather, WeightedPather};
