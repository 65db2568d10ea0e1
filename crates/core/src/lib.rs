//! Income-resolution rules for a dice-driven town-building economy. Keep
//! this crate free of IO and platform concerns.

pub mod cards;
pub mod catalog;
pub mod income;
pub mod market;
pub mod player;
pub mod rng;
pub mod triggers;

pub use cards::*;
pub use catalog::*;
pub use income::*;
pub use market::*;
pub use player::*;
pub use rng::*;
pub use triggers::*;
