//! Loading and validation of game config files and scripted action lists.

pub mod load;
pub mod schema;

pub use load::*;
pub use schema::*;
