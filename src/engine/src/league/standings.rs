use crate::team::TeamCollection;
use serde::Serialize;
use std::cmp::Ordering;

/// One row of the league table.
#[derive(Debug, Clone, Serialize)]
pub struct TeamStanding {
    pub team_id: u32,
    pub name: String,
    pub owner: String,
    pub wins: u32,
    pub losses: u32,
    pub total_points: f64,
}

/// Ranks teams by wins (descending), then total points (descending).
/// The sort is stable, so teams tied on both keys keep registration
/// order. Pure: no league state is touched.
pub fn rank(teams: &TeamCollection) -> Vec<TeamStanding> {
    let mut rows: Vec<TeamStanding> = teams
        .teams
        .iter()
        .map(|team| TeamStanding {
            team_id: team.id,
            name: team.name.clone(),
            owner: team.owner.clone(),
            wins: team.wins,
            losses: team.losses,
            total_points: team.total_points,
        })
        .collect();

    rows.sort_by(|a, b| {
        b.wins.cmp(&a.wins).then_with(|| {
            b.total_points
                .partial_cmp(&a.total_points)
                .unwrap_or(Ordering::Equal)
        })
    });

    rows
}
