use crate::error::LeagueError;
use crate::league::report::{PlayerDetail, PlayerSummary, TOP_PERFORMER_COUNT, WeeklyReport};
use crate::league::result::{MatchupOutcome, MatchupResult, WeekResult};
use crate::league::schedule::Schedule;
use crate::league::standings::{self, TeamStanding};
use crate::player::{Player, PlayerCollection, Position};
use crate::team::{Team, TeamCollection};
use crate::utils::Logging;
use log::info;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// How a team's weekly score is computed from its lineup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoringMode {
    /// Sum of lineup members' season-to-date fantasy points. Weekly
    /// scores compound over the season; kept as the default for
    /// compatibility with the historical behavior.
    #[default]
    CumulativeTotals,
    /// Sum of the point deltas produced this week only.
    WeeklyDelta,
}

/// Immutable league configuration, fixed at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueSettings {
    pub max_teams: usize,
    pub roster_size: usize,
    pub lineup_size: usize,
    pub scoring: ScoringMode,
}

impl Default for LeagueSettings {
    fn default() -> Self {
        LeagueSettings {
            max_teams: 8,
            roster_size: 10,
            lineup_size: 5,
            scoring: ScoringMode::default(),
        }
    }
}

/// The league orchestrator: draft pool, registered teams, the current
/// week's schedule and the week counter. All mutating operations are
/// atomic; a returned error means nothing changed.
#[derive(Debug)]
pub struct League {
    pub name: String,
    pub teams: TeamCollection,
    pub draft_pool: PlayerCollection,
    pub schedule: Schedule,
    pub current_week: u32,
    pub settings: LeagueSettings,
}

impl League {
    pub fn new(name: String, settings: LeagueSettings, players: Vec<Player>) -> Self {
        League {
            name,
            teams: TeamCollection::default(),
            draft_pool: PlayerCollection::new(players),
            schedule: Schedule::default(),
            current_week: 1,
            settings,
        }
    }

    // ========== REGISTRATION & DRAFT ==========

    pub fn register_team(&mut self, name: String, owner: String) -> Result<u32, LeagueError> {
        if self.teams.len() >= self.settings.max_teams {
            return Err(LeagueError::TeamLimitReached {
                max: self.settings.max_teams,
            });
        }

        if self.teams.contains_name(&name) {
            return Err(LeagueError::DuplicateTeamName(name));
        }

        let team_id = self.teams.len() as u32 + 1;
        info!("team '{}' registered (owner: {})", name, owner);
        self.teams.add(Team::new(team_id, name, owner));

        Ok(team_id)
    }

    /// Moves a player from the draft pool onto a team roster. All
    /// checks run before the transfer, so a failure leaves both the
    /// pool and the roster untouched.
    pub fn draft_player(&mut self, team_id: u32, player_id: u32) -> Result<(), LeagueError> {
        let roster_size = self.settings.roster_size;

        let team = self
            .teams
            .by_id_mut(team_id)
            .ok_or(LeagueError::UnknownTeam(team_id))?;

        if team.roster.len() >= roster_size {
            return Err(LeagueError::RosterFull { size: roster_size });
        }

        let player = self
            .draft_pool
            .take_player(player_id)
            .ok_or(LeagueError::PlayerNotAvailable(player_id))?;

        let player_name = player.name.clone();

        match team.add_player(player) {
            Ok(()) => {
                info!("{} drafted to {}", player_name, team.name);
                Ok(())
            }
            Err((player, err)) => {
                // Roster rejected the player: put it back in the pool.
                self.draft_pool.add(player);
                Err(err)
            }
        }
    }

    /// Returns a rostered player to the draft pool.
    pub fn release_player(&mut self, team_id: u32, player_id: u32) -> Result<(), LeagueError> {
        let team = self
            .teams
            .by_id_mut(team_id)
            .ok_or(LeagueError::UnknownTeam(team_id))?;

        let player = team
            .remove_player(player_id)
            .ok_or(LeagueError::PlayerNotOnRoster(player_id))?;

        info!("{} released from {}", player.name, team.name);
        self.draft_pool.add(player);

        Ok(())
    }

    pub fn set_team_lineup(&mut self, team_id: u32, player_ids: &[u32]) -> Result<(), LeagueError> {
        if player_ids.len() != self.settings.lineup_size {
            return Err(LeagueError::InvalidLineupSize {
                expected: self.settings.lineup_size,
                actual: player_ids.len(),
            });
        }

        let team = self
            .teams
            .by_id_mut(team_id)
            .ok_or(LeagueError::UnknownTeam(team_id))?;

        team.set_lineup(player_ids)
    }

    // ========== WEEKLY LIFECYCLE ==========

    /// Pairs teams for the current week, discarding the previous
    /// round's matchups. Precondition: at least two registered teams
    /// (checked before the old schedule is dropped).
    pub fn generate_matchups<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<&Schedule, LeagueError> {
        if self.teams.len() < 2 {
            return Err(LeagueError::NotEnoughTeams);
        }

        self.schedule = Schedule::generate(&self.teams, self.current_week, rng);
        Ok(&self.schedule)
    }

    /// Plays every scheduled matchup and advances the week counter by
    /// exactly one. Matchups skipped for missing lineups and the bye
    /// still count as week progress.
    pub fn simulate_week<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<WeekResult, LeagueError> {
        if self.schedule.is_empty() {
            return Err(LeagueError::EmptySchedule);
        }

        if self.schedule.simulated {
            return Err(LeagueError::WeekAlreadySimulated);
        }

        let week = self.current_week;
        let scoring = self.settings.scoring;

        info!("simulating week {} of league '{}'", week, self.name);

        let mut results = Vec::with_capacity(self.schedule.matchups.len());

        for matchup in &mut self.schedule.matchups {
            if let Some((home, away)) = self.teams.pair_mut(matchup.home_team_id, matchup.away_team_id) {
                let message = format!("play matchup: {} vs {}", home.name, away.name);

                if let Some(result) = Logging::estimate_result(
                    || matchup.simulate(home, away, &mut *rng, scoring),
                    &message,
                ) {
                    results.push(result);
                }
            }
        }

        self.schedule.simulated = true;
        self.current_week += 1;

        Ok(WeekResult {
            week,
            results,
            bye_team_id: self.schedule.bye_team_id,
        })
    }

    // ========== QUERIES ==========

    pub fn standings(&self) -> Vec<TeamStanding> {
        standings::rank(&self.teams)
    }

    /// Team rows in registration order, unranked.
    pub fn team_summaries(&self) -> Vec<TeamStanding> {
        self.teams
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
            .collect()
    }

    pub fn available_players(&self, position: Option<Position>) -> Vec<PlayerSummary> {
        self.draft_pool
            .players
            .iter()
            .filter(|p| position.is_none_or(|pos| p.position == pos))
            .map(PlayerSummary::from)
            .collect()
    }

    /// Looks a player up across the draft pool and every roster.
    pub fn player_stats(&self, player_id: u32) -> Result<PlayerDetail, LeagueError> {
        self.all_players()
            .find(|p| p.id == player_id)
            .map(PlayerDetail::from)
            .ok_or(LeagueError::UnknownPlayer(player_id))
    }

    /// Every player with points on the board, best first.
    pub fn player_statistics(&self) -> Vec<PlayerSummary> {
        let mut rows: Vec<PlayerSummary> = self
            .all_players()
            .filter(|p| p.fantasy_points > 0.0)
            .map(PlayerSummary::from)
            .collect();

        rows.sort_by(|a, b| {
            b.fantasy_points
                .partial_cmp(&a.fantasy_points)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        rows
    }

    /// Report for the most recently simulated week. Available until
    /// the next `generate_matchups` call discards the schedule.
    pub fn weekly_report(&self) -> Result<WeeklyReport, LeagueError> {
        if !self.schedule.simulated {
            return Err(LeagueError::NoCompletedWeek);
        }

        let results: Vec<MatchupResult> = self
            .schedule
            .matchups
            .iter()
            .filter(|m| m.completed)
            .map(|m| {
                let home = self.teams.by_id(m.home_team_id);
                let away = self.teams.by_id(m.away_team_id);

                MatchupResult {
                    home_team_id: m.home_team_id,
                    home_team_name: home.map_or_else(String::new, |t| t.name.clone()),
                    away_team_id: m.away_team_id,
                    away_team_name: away.map_or_else(String::new, |t| t.name.clone()),
                    home_score: m.home_score,
                    away_score: m.away_score,
                    outcome: if m.home_score > m.away_score {
                        MatchupOutcome::HomeWin
                    } else if m.away_score > m.home_score {
                        MatchupOutcome::AwayWin
                    } else {
                        MatchupOutcome::Tie
                    },
                }
            })
            .collect();

        let mut top_performers: Vec<PlayerSummary> = self
            .teams
            .teams
            .iter()
            .flat_map(|team| &team.roster.players)
            .filter(|p| p.fantasy_points > 0.0)
            .map(PlayerSummary::from)
            .collect();

        top_performers.sort_by(|a, b| {
            b.fantasy_points
                .partial_cmp(&a.fantasy_points)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        top_performers.truncate(TOP_PERFORMER_COUNT);

        Ok(WeeklyReport {
            week: self.schedule.week,
            results,
            standings: self.standings(),
            top_performers,
        })
    }

    pub fn all_teams_have_full_rosters(&self) -> bool {
        !self.teams.is_empty()
            && self
                .teams
                .teams
                .iter()
                .all(|team| team.roster.len() == self.settings.roster_size)
    }

    fn all_players(&self) -> impl Iterator<Item = &Player> {
        self.draft_pool
            .players
            .iter()
            .chain(self.teams.teams.iter().flat_map(|team| &team.roster.players))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pool_of_kickers(count: u32) -> Vec<Player> {
        (1..=count)
            .map(|id| {
                Player::new(
                    id,
                    format!("Kicker {}", id),
                    Position::Kicker,
                    String::from("Baltimore"),
                )
            })
            .collect()
    }

    fn small_league(pool_size: u32) -> League {
        let settings = LeagueSettings {
            max_teams: 4,
            roster_size: 3,
            lineup_size: 2,
            scoring: ScoringMode::CumulativeTotals,
        };
        League::new(String::from("Test League"), settings, pool_of_kickers(pool_size))
    }

    fn league_ready_for_week(team_count: u32) -> League {
        let mut league = small_league(team_count * 3);
        let mut next_player = 1;

        for team_no in 1..=team_count {
            let team_id = league
                .register_team(format!("Team {}", team_no), format!("Owner {}", team_no))
                .unwrap();

            let first = next_player;
            let second = next_player + 1;
            league.draft_player(team_id, first).unwrap();
            league.draft_player(team_id, second).unwrap();
            next_player += 3;

            league.set_team_lineup(team_id, &[first, second]).unwrap();
        }

        league
    }

    #[test]
    fn register_team_enforces_capacity_and_unique_names() {
        let mut league = small_league(0);

        for i in 0..4 {
            league
                .register_team(format!("Team {}", i), String::from("Owner"))
                .unwrap();
        }

        let err = league
            .register_team(String::from("Overflow"), String::from("Owner"))
            .unwrap_err();
        assert_eq!(err, LeagueError::TeamLimitReached { max: 4 });

        let mut league = small_league(0);
        league
            .register_team(String::from("Same"), String::from("A"))
            .unwrap();
        let err = league
            .register_team(String::from("Same"), String::from("B"))
            .unwrap_err();
        assert_eq!(err, LeagueError::DuplicateTeamName(String::from("Same")));
    }

    #[test]
    fn drafted_player_is_in_exactly_one_place() {
        let mut league = small_league(6);
        let first = league
            .register_team(String::from("First"), String::from("A"))
            .unwrap();
        let second = league
            .register_team(String::from("Second"), String::from("B"))
            .unwrap();

        league.draft_player(first, 1).unwrap();

        assert!(!league.draft_pool.contains(1));
        assert!(league.teams.by_id(first).unwrap().roster.contains(1));

        // Drafting the same player again fails for every team.
        assert_eq!(
            league.draft_player(second, 1).unwrap_err(),
            LeagueError::PlayerNotAvailable(1)
        );
        assert!(!league.teams.by_id(second).unwrap().roster.contains(1));
    }

    #[test]
    fn draft_on_full_roster_changes_nothing() {
        let mut league = small_league(6);
        let team_id = league
            .register_team(String::from("Full"), String::from("A"))
            .unwrap();

        for player_id in 1..=3 {
            league.draft_player(team_id, player_id).unwrap();
        }

        let pool_before = league.draft_pool.len();
        let err = league.draft_player(team_id, 4).unwrap_err();

        assert_eq!(err, LeagueError::RosterFull { size: 3 });
        assert_eq!(league.draft_pool.len(), pool_before);
        assert!(league.draft_pool.contains(4));
        assert_eq!(league.teams.by_id(team_id).unwrap().roster.len(), 3);
    }

    #[test]
    fn release_player_returns_to_pool_without_duplicates() {
        let mut league = small_league(6);
        let team_id = league
            .register_team(String::from("Churn"), String::from("A"))
            .unwrap();

        league.draft_player(team_id, 1).unwrap();
        league.release_player(team_id, 1).unwrap();

        assert!(league.draft_pool.contains(1));
        assert!(!league.teams.by_id(team_id).unwrap().roster.contains(1));
        assert_eq!(league.draft_pool.len(), 6);

        assert_eq!(
            league.release_player(team_id, 1).unwrap_err(),
            LeagueError::PlayerNotOnRoster(1)
        );
    }

    #[test]
    fn lineup_cardinality_is_checked_by_the_league() {
        let mut league = small_league(6);
        let team_id = league
            .register_team(String::from("Short"), String::from("A"))
            .unwrap();
        league.draft_player(team_id, 1).unwrap();

        let err = league.set_team_lineup(team_id, &[1]).unwrap_err();
        assert_eq!(
            err,
            LeagueError::InvalidLineupSize {
                expected: 2,
                actual: 1
            }
        );
        assert!(!league.teams.by_id(team_id).unwrap().has_lineup());
    }

    #[test]
    fn generate_matchups_requires_two_teams_and_keeps_old_schedule() {
        let mut rng = StdRng::seed_from_u64(8);

        let mut league = league_ready_for_week(2);
        league.generate_matchups(&mut rng).unwrap();
        league.simulate_week(&mut rng).unwrap();

        let mut lonely = small_league(3);
        lonely
            .register_team(String::from("Solo"), String::from("A"))
            .unwrap();
        let err = lonely.generate_matchups(&mut rng).unwrap_err();
        assert_eq!(err, LeagueError::NotEnoughTeams);
        assert!(err.is_precondition());

        // The report for the already-simulated week survives a failed
        // regeneration attempt.
        assert!(league.weekly_report().is_ok());
    }

    #[test]
    fn simulate_week_on_empty_schedule_is_a_no_op() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut league = league_ready_for_week(2);

        let err = league.simulate_week(&mut rng).unwrap_err();

        assert_eq!(err, LeagueError::EmptySchedule);
        assert!(err.is_precondition());
        assert_eq!(league.current_week, 1);
    }

    #[test]
    fn simulate_week_advances_week_exactly_once() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut league = league_ready_for_week(4);

        league.generate_matchups(&mut rng).unwrap();
        let week_result = league.simulate_week(&mut rng).unwrap();

        assert_eq!(week_result.week, 1);
        assert_eq!(week_result.results.len(), 2);
        assert_eq!(league.current_week, 2);

        // Re-simulating the same schedule is rejected.
        let err = league.simulate_week(&mut rng).unwrap_err();
        assert_eq!(err, LeagueError::WeekAlreadySimulated);
        assert_eq!(league.current_week, 2);
    }

    #[test]
    fn bye_counts_as_week_progress() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut league = league_ready_for_week(3);

        league.generate_matchups(&mut rng).unwrap();
        let week_result = league.simulate_week(&mut rng).unwrap();

        assert_eq!(week_result.results.len(), 1);
        assert!(week_result.bye_team_id.is_some());
        assert_eq!(league.current_week, 2);
    }

    #[test]
    fn available_players_filters_by_position() {
        let mut league = small_league(2);
        league.draft_pool.add(Player::new(
            50,
            String::from("QB Fifty"),
            Position::Quarterback,
            String::from("Dallas"),
        ));

        assert_eq!(league.available_players(None).len(), 3);

        let quarterbacks = league.available_players(Some(Position::Quarterback));
        assert_eq!(quarterbacks.len(), 1);
        assert_eq!(quarterbacks[0].id, 50);
    }

    #[test]
    fn player_stats_searches_pool_and_rosters() {
        let mut league = small_league(3);
        let team_id = league
            .register_team(String::from("Seekers"), String::from("A"))
            .unwrap();
        league.draft_player(team_id, 2).unwrap();

        assert_eq!(league.player_stats(1).unwrap().id, 1);
        assert_eq!(league.player_stats(2).unwrap().id, 2);
        assert_eq!(
            league.player_stats(99).unwrap_err(),
            LeagueError::UnknownPlayer(99)
        );
    }

    #[test]
    fn weekly_report_reflects_last_simulated_week() {
        let mut rng = StdRng::seed_from_u64(15);
        let mut league = league_ready_for_week(4);

        assert_eq!(
            league.weekly_report().unwrap_err(),
            LeagueError::NoCompletedWeek
        );

        league.generate_matchups(&mut rng).unwrap();
        league.simulate_week(&mut rng).unwrap();

        let report = league.weekly_report().unwrap();
        assert_eq!(report.week, 1);
        assert_eq!(report.results.len(), 2);
        assert_eq!(report.standings.len(), 4);
        assert!(!report.top_performers.is_empty());
        assert!(report.top_performers.len() <= TOP_PERFORMER_COUNT);
    }

    #[test]
    fn all_teams_have_full_rosters_tracks_capacity() {
        let mut league = small_league(6);
        assert!(!league.all_teams_have_full_rosters());

        let team_id = league
            .register_team(String::from("Filling"), String::from("A"))
            .unwrap();
        assert!(!league.all_teams_have_full_rosters());

        for player_id in 1..=3 {
            league.draft_player(team_id, player_id).unwrap();
        }
        assert!(league.all_teams_have_full_rosters());
    }
}
