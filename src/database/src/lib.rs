pub mod generators;
pub mod loaders;

pub use generators::DatabaseGenerator;
pub use loaders::{PlayerEntity, PlayerLoader};

use log::info;

/// Static seed data embedded at compile time.
pub struct DatabaseEntity {
    pub players: Vec<PlayerEntity>,
}

pub struct DatabaseLoader;

impl DatabaseLoader {
    pub fn load() -> DatabaseEntity {
        let players = PlayerLoader::load();

        info!("loaded {} players", players.len());

        DatabaseEntity { players }
    }
}
