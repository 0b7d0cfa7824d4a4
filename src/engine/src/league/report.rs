use crate::league::result::MatchupResult;
use crate::league::standings::TeamStanding;
use crate::player::{Player, PlayerStatistics, Position};
use serde::Serialize;

/// Compact player row for listings.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerSummary {
    pub id: u32,
    pub name: String,
    pub position: Position,
    pub home_team: String,
    pub fantasy_points: f64,
}

impl From<&Player> for PlayerSummary {
    fn from(player: &Player) -> Self {
        PlayerSummary {
            id: player.id,
            name: player.name.clone(),
            position: player.position,
            home_team: player.home_team.clone(),
            fantasy_points: player.fantasy_points,
        }
    }
}

/// Full per-player view: identity plus every cumulative counter.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerDetail {
    pub id: u32,
    pub name: String,
    pub position: Position,
    pub home_team: String,
    pub fantasy_points: f64,
    pub statistics: PlayerStatistics,
}

impl From<&Player> for PlayerDetail {
    fn from(player: &Player) -> Self {
        PlayerDetail {
            id: player.id,
            name: player.name.clone(),
            position: player.position,
            home_team: player.home_team.clone(),
            fantasy_points: player.fantasy_points,
            statistics: player.statistics.clone(),
        }
    }
}

pub const TOP_PERFORMER_COUNT: usize = 5;

/// Everything the front end renders after a simulated week: matchup
/// scores, the table, and the top rostered performers.
#[derive(Debug, Serialize)]
pub struct WeeklyReport {
    pub week: u32,
    pub results: Vec<MatchupResult>,
    pub standings: Vec<TeamStanding>,
    pub top_performers: Vec<PlayerSummary>,
}
