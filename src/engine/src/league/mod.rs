pub mod league;
pub mod report;
pub mod result;
pub mod schedule;
pub mod standings;

pub use league::{League, LeagueSettings, ScoringMode};
pub use report::{PlayerDetail, PlayerSummary, TOP_PERFORMER_COUNT, WeeklyReport};
pub use result::{MatchupOutcome, MatchupResult, WeekResult};
pub use schedule::{Matchup, Schedule};
pub use standings::{TeamStanding, rank};
