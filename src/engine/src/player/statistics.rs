use crate::player::performance::GamePerformance;
use serde::Serialize;

/// Season-cumulative counters for a single player. Counters only grow:
/// every simulated game adds its deltas on top of the running totals.
#[derive(Debug, Default, Clone, Serialize)]
pub struct PlayerStatistics {
    pub games_played: u16,

    pub passing_yards: u32,
    pub passing_touchdowns: u16,
    pub interceptions: u16,

    pub rushing_yards: u32,
    pub rushing_touchdowns: u16,

    pub receiving_yards: u32,
    pub receiving_touchdowns: u16,

    pub field_goals: u16,
    pub extra_points: u16,

    pub sacks: u16,
    pub defensive_interceptions: u16,
    pub defensive_touchdowns: u16,
}

impl PlayerStatistics {
    pub fn add_performance(&mut self, performance: &GamePerformance) {
        self.games_played += 1;

        self.passing_yards += performance.passing_yards;
        self.passing_touchdowns += performance.passing_touchdowns;
        self.interceptions += performance.interceptions;

        self.rushing_yards += performance.rushing_yards;
        self.rushing_touchdowns += performance.rushing_touchdowns;

        self.receiving_yards += performance.receiving_yards;
        self.receiving_touchdowns += performance.receiving_touchdowns;

        self.field_goals += performance.field_goals;
        self.extra_points += performance.extra_points;

        self.sacks += performance.sacks;
        self.defensive_interceptions += performance.defensive_interceptions;
        self.defensive_touchdowns += performance.defensive_touchdowns;
    }
}
