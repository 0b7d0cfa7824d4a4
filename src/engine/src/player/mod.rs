pub mod performance;
pub mod player;
pub mod position;
pub mod statistics;

pub use performance::{GamePerformance, points_allowed_bonus};
pub use player::{Player, PlayerCollection};
pub use position::Position;
pub use statistics::PlayerStatistics;
