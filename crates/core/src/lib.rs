//! Core game logic. Keep this crate free of IO and platform concerns.

pub mod cards;
pub mod config;
pub mod deck;
pub mod events;
pub mod hand;
pub mod modifier;
pub mod rng;
pub mod run;
pub mod scoring;

pub use cards::*;
pub use config::*;
pub use deck::*;
pub use events::*;
pub use hand::*;
pub use modifier::*;
pub use rng::*;
pub use run::*;
pub use scoring::*;
