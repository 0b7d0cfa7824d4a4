use serde::Deserialize;

const STATIC_PLAYERS_JSON: &str = include_str!("../data/players.json");

#[derive(Deserialize)]
pub struct PlayerEntity {
    pub id: u32,
    pub name: String,
    pub position: String,
    pub team: String,
}

pub struct PlayerLoader;

impl PlayerLoader {
    pub fn load() -> Vec<PlayerEntity> {
        serde_json::from_str(STATIC_PLAYERS_JSON).unwrap()
    }
}
