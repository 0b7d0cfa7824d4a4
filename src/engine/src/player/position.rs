use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Quarterback,
    RunningBack,
    WideReceiver,
    TightEnd,
    Kicker,
    Defense,
}

impl Position {
    pub const ALL: [Position; 6] = [
        Position::Quarterback,
        Position::RunningBack,
        Position::WideReceiver,
        Position::TightEnd,
        Position::Kicker,
        Position::Defense,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Position::Quarterback => "QB",
            Position::RunningBack => "RB",
            Position::WideReceiver => "WR",
            Position::TightEnd => "TE",
            Position::Kicker => "K",
            Position::Defense => "DEF",
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "QB" => Ok(Position::Quarterback),
            "RB" => Ok(Position::RunningBack),
            "WR" => Ok(Position::WideReceiver),
            "TE" => Ok(Position::TightEnd),
            "K" => Ok(Position::Kicker),
            "DEF" => Ok(Position::Defense),
            _ => Err(format!("unknown position code: {}", value)),
        }
    }
}
