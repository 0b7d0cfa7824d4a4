use crate::player::performance;
use crate::player::position::Position;
use crate::player::statistics::PlayerStatistics;
use rand::Rng;
use std::fmt::{Display, Formatter};

/// One draftable player. Owned by value by exactly one
/// [`PlayerCollection`] at a time (the league draft pool or a team
/// roster); the draft moves the player between collections.
#[derive(Debug)]
pub struct Player {
    pub id: u32,
    pub name: String,
    pub position: Position,
    /// Cosmetic real-world club label, unrelated to fantasy teams.
    pub home_team: String,

    pub statistics: PlayerStatistics,
    pub fantasy_points: f64,
}

impl Player {
    pub fn new(id: u32, name: String, position: Position, home_team: String) -> Self {
        Player {
            id,
            name,
            position,
            home_team,
            statistics: PlayerStatistics::default(),
            fantasy_points: 0.0,
        }
    }

    /// Simulates one game for this player: draws a position-specific
    /// performance, folds it into the cumulative statistics and the
    /// season fantasy-point total, and returns the point delta.
    pub fn simulate_game<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f64 {
        let performance = performance::simulate(self.position, rng);

        self.statistics.add_performance(&performance);
        self.fantasy_points += performance.points;

        performance.points
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.position, self.home_team)
    }
}

#[derive(Debug, Default)]
pub struct PlayerCollection {
    pub players: Vec<Player>,
}

impl PlayerCollection {
    pub fn new(players: Vec<Player>) -> Self {
        PlayerCollection { players }
    }

    pub fn add(&mut self, player: Player) {
        self.players.push(player);
    }

    pub fn by_id(&self, player_id: u32) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn by_id_mut(&mut self, player_id: u32) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == player_id)
    }

    pub fn by_position(&self, position: Position) -> Vec<&Player> {
        self.players
            .iter()
            .filter(|p| p.position == position)
            .collect()
    }

    /// Moves a player out of the collection. Ownership hand-off for
    /// the draft and release operations.
    pub fn take_player(&mut self, player_id: u32) -> Option<Player> {
        let player_idx = self.players.iter().position(|p| p.id == player_id);
        player_idx.map(|idx| self.players.remove(idx))
    }

    pub fn contains(&self, player_id: u32) -> bool {
        self.players.iter().any(|p| p.id == player_id)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn kicker() -> Player {
        Player::new(30, String::from("Justin Tucker"), Position::Kicker, String::from("Baltimore"))
    }

    #[test]
    fn simulate_game_accumulates_and_counts_games() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut player = kicker();

        let first_delta = player.simulate_game(&mut rng);
        assert_eq!(player.statistics.games_played, 1);
        assert_eq!(player.fantasy_points, first_delta);

        let second_delta = player.simulate_game(&mut rng);
        assert_eq!(player.statistics.games_played, 2);
        assert_eq!(player.fantasy_points, first_delta + second_delta);
    }

    #[test]
    fn fantasy_points_never_decrease_for_kickers() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut player = kicker();

        let mut previous = 0.0;
        for _ in 0..50 {
            player.simulate_game(&mut rng);
            assert!(player.fantasy_points >= previous);
            previous = player.fantasy_points;
        }
    }

    #[test]
    fn take_player_moves_ownership_out() {
        let mut pool = PlayerCollection::new(vec![kicker()]);

        let taken = pool.take_player(30);
        assert!(taken.is_some());
        assert!(!pool.contains(30));
        assert!(pool.take_player(30).is_none());
    }
}
