use crate::DatabaseEntity;
use engine::{League, LeagueSettings, Player, Position};
use std::str::FromStr;

pub struct DatabaseGenerator;

impl DatabaseGenerator {
    /// Builds a fresh league from the embedded catalog: every player
    /// starts in the draft pool with zeroed statistics.
    pub fn generate(data: &DatabaseEntity) -> League {
        let players = data
            .players
            .iter()
            .map(|entity| {
                Player::new(
                    entity.id,
                    entity.name.clone(),
                    Position::from_str(&entity.position).unwrap(),
                    entity.team.clone(),
                )
            })
            .collect();

        League::new(
            String::from("Gridiron Fantasy League"),
            LeagueSettings::default(),
            players,
        )
    }
}
