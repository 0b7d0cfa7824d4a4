use thiserror::Error;

/// Failure modes of the league engine. Every variant is recoverable:
/// a failed operation leaves the league state exactly as it was.
#[derive(Debug, Error, PartialEq)]
pub enum LeagueError {
    #[error("maximum number of teams ({max}) reached")]
    TeamLimitReached { max: usize },

    #[error("team name '{0}' already exists")]
    DuplicateTeamName(String),

    #[error("no team with id {0}")]
    UnknownTeam(u32),

    #[error("no player with id {0}")]
    UnknownPlayer(u32),

    #[error("player {0} is not in the draft pool")]
    PlayerNotAvailable(u32),

    #[error("team roster is full ({size} players maximum)")]
    RosterFull { size: usize },

    #[error("player {0} is already on the roster")]
    PlayerAlreadyOnRoster(u32),

    #[error("player {0} is not on the roster")]
    PlayerNotOnRoster(u32),

    #[error("lineup must have exactly {expected} players, got {actual}")]
    InvalidLineupSize { expected: usize, actual: usize },

    #[error("player {0} appears more than once in the lineup")]
    DuplicateLineupPlayer(u32),

    #[error("need at least 2 teams to generate matchups")]
    NotEnoughTeams,

    #[error("no matchups scheduled")]
    EmptySchedule,

    #[error("current schedule has already been simulated")]
    WeekAlreadySimulated,

    #[error("no completed week to report on")]
    NoCompletedWeek,
}

impl LeagueError {
    /// True for the precondition-not-met class: the operation was a
    /// no-op because the league is not in the right phase, as opposed
    /// to a validation failure in the caller's input.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            LeagueError::NotEnoughTeams
                | LeagueError::EmptySchedule
                | LeagueError::WeekAlreadySimulated
                | LeagueError::NoCompletedWeek
        )
    }
}
