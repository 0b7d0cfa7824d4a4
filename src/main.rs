use database::{DatabaseGenerator, DatabaseLoader};
use engine::utils::TimeEstimation;
use engine::League;
use env_logger::Env;
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::env;

const SEASON_WEEKS: u32 = 14;

const DEMO_TEAMS: [(&str, &str); 4] = [
    ("Gridiron Giants", "Alice"),
    ("End Zone Elite", "Bob"),
    ("Blitz Brigade", "Carol"),
    ("Hail Mary Heroes", "Dan"),
];

fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    // A single session-scoped generator drives every random decision
    // of the run. SEED makes the whole season reproducible.
    let mut rng = match env::var("SEED").ok().and_then(|s| s.parse::<u64>().ok()) {
        Some(seed) => {
            info!("seeded run: {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let (database, estimated) = TimeEstimation::estimate(DatabaseLoader::load);

    info!("database loaded: {} ms", estimated);

    let mut league = DatabaseGenerator::generate(&database);

    for (name, owner) in DEMO_TEAMS {
        league.register_team(String::from(name), String::from(owner))?;
    }

    run_draft(&mut league)?;
    run_season(&mut league, &mut rng)?;

    Ok(())
}

/// Round-robin draft: each team in turn takes the first still-available
/// player, until every roster is full or the pool runs dry.
fn run_draft(league: &mut League) -> color_eyre::eyre::Result<()> {
    let team_ids = league.teams.ids();
    let roster_size = league.settings.roster_size;
    let lineup_size = league.settings.lineup_size;

    'draft: for _round in 0..roster_size {
        for &team_id in &team_ids {
            if league.draft_pool.is_empty() {
                break 'draft;
            }

            let player_id = match league.draft_pool.players.first() {
                Some(player) => player.id,
                None => break 'draft,
            };

            league.draft_player(team_id, player_id)?;
        }
    }

    for &team_id in &team_ids {
        let lineup: Vec<u32> = league
            .teams
            .by_id(team_id)
            .map(|team| team.roster.players.iter().take(lineup_size).map(|p| p.id).collect())
            .unwrap_or_default();

        league.set_team_lineup(team_id, &lineup)?;
    }

    info!(
        "draft complete: {} players remain in the pool",
        league.draft_pool.len()
    );

    Ok(())
}

fn run_season<R: Rng + ?Sized>(league: &mut League, rng: &mut R) -> color_eyre::eyre::Result<()> {
    for _ in 0..SEASON_WEEKS {
        league.generate_matchups(rng)?;
        let week_result = league.simulate_week(rng)?;

        for result in &week_result.results {
            info!(
                "week {}: {} {:.2} - {:.2} {} ({:?})",
                week_result.week,
                result.home_team_name,
                result.home_score,
                result.away_score,
                result.away_team_name,
                result.outcome,
            );
        }

        if let Some(bye_id) = week_result.bye_team_id {
            info!("week {}: team {} on bye", week_result.week, bye_id);
        }
    }

    info!("=== final standings: {} ===", league.name);
    for (rank, row) in league.standings().iter().enumerate() {
        info!(
            "{}. {} ({}) {}-{} {:.2} pts",
            rank + 1,
            row.name,
            row.owner,
            row.wins,
            row.losses,
            row.total_points,
        );
    }

    info!("=== top performers ===");
    for row in league.player_statistics().iter().take(10) {
        info!(
            "{} ({}, {}) {:.2} pts",
            row.name, row.position, row.home_team, row.fantasy_points,
        );
    }

    Ok(())
}
