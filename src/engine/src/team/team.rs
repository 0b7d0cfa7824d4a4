use crate::error::LeagueError;
use crate::league::ScoringMode;
use crate::player::{Player, PlayerCollection};
use log::warn;
use rand::Rng;

/// A fantasy team: the drafted roster, the validated active lineup and
/// the season record. The roster owns its players; the lineup stores
/// ids referencing roster members.
#[derive(Debug)]
pub struct Team {
    pub id: u32,
    pub name: String,
    pub owner: String,

    pub roster: PlayerCollection,
    pub active_lineup: Vec<u32>,

    pub wins: u32,
    pub losses: u32,
    pub total_points: f64,
}

impl Team {
    pub fn new(id: u32, name: String, owner: String) -> Self {
        Team {
            id,
            name,
            owner,
            roster: PlayerCollection::default(),
            active_lineup: Vec::new(),
            wins: 0,
            losses: 0,
            total_points: 0.0,
        }
    }

    /// Appends a player to the roster. Rejects duplicate ids and hands
    /// the player back unchanged so the caller can restore it; global
    /// exclusivity across pool and rosters is the league's concern.
    pub fn add_player(&mut self, player: Player) -> Result<(), (Player, LeagueError)> {
        if self.roster.contains(player.id) {
            let id = player.id;
            return Err((player, LeagueError::PlayerAlreadyOnRoster(id)));
        }

        self.roster.add(player);
        Ok(())
    }

    /// Moves a player out of the roster, dropping it from the active
    /// lineup as well. `None` if the id is not on the roster.
    pub fn remove_player(&mut self, player_id: u32) -> Option<Player> {
        let player = self.roster.take_player(player_id)?;
        self.active_lineup.retain(|&id| id != player_id);
        Some(player)
    }

    /// Replaces the active lineup atomically. The whole call fails,
    /// leaving the previous lineup untouched, if any id is duplicated
    /// or does not resolve to a roster member. Lineup cardinality is
    /// enforced by the league, not here.
    pub fn set_lineup(&mut self, player_ids: &[u32]) -> Result<(), LeagueError> {
        for (idx, &id) in player_ids.iter().enumerate() {
            if player_ids[..idx].contains(&id) {
                return Err(LeagueError::DuplicateLineupPlayer(id));
            }
            if !self.roster.contains(id) {
                return Err(LeagueError::PlayerNotOnRoster(id));
            }
        }

        self.active_lineup = player_ids.to_vec();
        Ok(())
    }

    pub fn has_lineup(&self) -> bool {
        !self.active_lineup.is_empty()
    }

    /// Simulates a game for every lineup member and returns the team's
    /// weekly score, which is also added to `total_points`.
    ///
    /// Under `CumulativeTotals` the score is the sum of the lineup's
    /// season-to-date fantasy points, so it compounds week over week;
    /// `WeeklyDelta` sums only this week's point deltas.
    pub fn simulate_game<R: Rng + ?Sized>(&mut self, rng: &mut R, scoring: ScoringMode) -> f64 {
        if self.active_lineup.is_empty() {
            warn!("team {} has no active lineup, scoring 0", self.name);
            return 0.0;
        }

        let mut game_score = 0.0;

        let lineup = &self.active_lineup;
        let roster = &mut self.roster;

        for &player_id in lineup {
            // set_lineup guarantees lineup ids resolve to the roster
            if let Some(player) = roster.by_id_mut(player_id) {
                let delta = player.simulate_game(rng);

                game_score += match scoring {
                    ScoringMode::CumulativeTotals => player.fantasy_points,
                    ScoringMode::WeeklyDelta => delta,
                };
            }
        }

        self.total_points += game_score;
        game_score
    }

    pub fn update_record(&mut self, is_win: bool) {
        if is_win {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
    }
}
