pub mod player;

pub use player::{PlayerEntity, PlayerLoader};
