//! Transport network consumed read-only by the rule engine.
//!
//! A `Network` maps each `Location` to its outgoing `Edge`s. Games build one
//! at setup; after the game starts it is shared behind an `Arc` and never
//! mutated again.

pub mod graph;

pub use graph::{Edge, EdgeList, Location, Network};
