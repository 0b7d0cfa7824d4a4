pub mod error;
pub mod league;
pub mod player;
pub mod team;
pub mod utils;

pub use error::LeagueError;

pub use league::{
    League, LeagueSettings, Matchup, MatchupOutcome, MatchupResult, PlayerDetail, PlayerSummary,
    Schedule, ScoringMode, TeamStanding, WeekResult, WeeklyReport,
};

pub use player::{GamePerformance, Player, PlayerCollection, PlayerStatistics, Position};

pub use team::{Team, TeamCollection};

pub use utils::*;
