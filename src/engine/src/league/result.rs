use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchupOutcome {
    HomeWin,
    AwayWin,
    /// Both teams are charged a loss.
    Tie,
}

/// Display-ready outcome of a single completed matchup.
#[derive(Debug, Clone, Serialize)]
pub struct MatchupResult {
    pub home_team_id: u32,
    pub home_team_name: String,
    pub away_team_id: u32,
    pub away_team_name: String,

    pub home_score: f64,
    pub away_score: f64,

    pub outcome: MatchupOutcome,
}

/// Outcome of one simulated week. Matchups skipped for missing
/// lineups produce no result but still count as week progress, as
/// does the bye.
#[derive(Debug, Serialize)]
pub struct WeekResult {
    pub week: u32,
    pub results: Vec<MatchupResult>,
    pub bye_team_id: Option<u32>,
}
