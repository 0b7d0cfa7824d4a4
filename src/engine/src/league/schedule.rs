use crate::league::ScoringMode;
use crate::league::result::{MatchupOutcome, MatchupResult};
use crate::team::{Team, TeamCollection};
use itertools::Itertools;
use log::{info, warn};
use rand::Rng;
use rand::seq::SliceRandom;

/// One head-to-head pairing for the current week. Home/away follows
/// permutation order; no fairness guarantee across weeks.
#[derive(Debug)]
pub struct Matchup {
    pub home_team_id: u32,
    pub away_team_id: u32,

    pub home_score: f64,
    pub away_score: f64,

    pub completed: bool,
}

impl Matchup {
    pub fn new(home_team_id: u32, away_team_id: u32) -> Self {
        Matchup {
            home_team_id,
            away_team_id,
            home_score: 0.0,
            away_score: 0.0,
            completed: false,
        }
    }

    /// Plays the matchup. Skipped with a warning (stays incomplete) if
    /// either side has no active lineup. A strictly greater score
    /// wins; an exact tie charges a loss to both teams.
    pub fn simulate<R: Rng + ?Sized>(
        &mut self,
        home: &mut Team,
        away: &mut Team,
        rng: &mut R,
        scoring: ScoringMode,
    ) -> Option<MatchupResult> {
        if !home.has_lineup() || !away.has_lineup() {
            warn!(
                "skipping matchup {} vs {}: missing active lineup",
                home.name, away.name
            );
            return None;
        }

        self.home_score = home.simulate_game(rng, scoring);
        self.away_score = away.simulate_game(rng, scoring);
        self.completed = true;

        let outcome = if self.home_score > self.away_score {
            home.update_record(true);
            away.update_record(false);
            MatchupOutcome::HomeWin
        } else if self.away_score > self.home_score {
            home.update_record(false);
            away.update_record(true);
            MatchupOutcome::AwayWin
        } else {
            // Tie policy: both teams take a loss.
            home.update_record(false);
            away.update_record(false);
            MatchupOutcome::Tie
        };

        Some(MatchupResult {
            home_team_id: home.id,
            home_team_name: home.name.clone(),
            away_team_id: away.id,
            away_team_name: away.name.clone(),
            home_score: self.home_score,
            away_score: self.away_score,
            outcome,
        })
    }
}

/// The current week's matchups. Regenerating the schedule discards the
/// previous round wholesale.
#[derive(Debug, Default)]
pub struct Schedule {
    pub week: u32,
    pub matchups: Vec<Matchup>,
    pub bye_team_id: Option<u32>,
    pub simulated: bool,
}

impl Schedule {
    /// Pairs teams for the given week: a uniformly random permutation,
    /// consecutive elements paired, the unpaired trailing team (odd
    /// count) on a bye.
    pub fn generate<R: Rng + ?Sized>(teams: &TeamCollection, week: u32, rng: &mut R) -> Self {
        let mut shuffled_ids = teams.ids();
        shuffled_ids.shuffle(rng);

        let bye_team_id = if shuffled_ids.len() % 2 == 1 {
            shuffled_ids.last().copied()
        } else {
            None
        };

        let matchups: Vec<Matchup> = shuffled_ids
            .iter()
            .copied()
            .tuples()
            .map(|(home_id, away_id)| {
                info!(
                    "week {} matchup: {} vs {}",
                    week,
                    teams.by_id(home_id).map_or("?", |t| t.name.as_str()),
                    teams.by_id(away_id).map_or("?", |t| t.name.as_str()),
                );
                Matchup::new(home_id, away_id)
            })
            .collect();

        if let Some(bye_id) = bye_team_id {
            info!(
                "week {} bye: {}",
                week,
                teams.by_id(bye_id).map_or("?", |t| t.name.as_str()),
            );
        }

        Schedule {
            week,
            matchups,
            bye_team_id,
            simulated: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.matchups.is_empty()
    }
}
