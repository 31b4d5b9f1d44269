//! House and residential area entities.

pub mod area;
pub mod model;

pub use area::{CreateArea, ResidentialArea};
pub use model::{CreateHouse, House};
