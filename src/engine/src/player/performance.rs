use crate::player::position::Position;
use rand::Rng;

// Standard scoring weights.
const POINTS_PER_PASSING_YARD: f64 = 0.04;
const POINTS_PER_PASSING_TD: f64 = 4.0;
const POINTS_PER_INTERCEPTION_THROWN: f64 = -2.0;
const POINTS_PER_RUSHING_YARD: f64 = 0.1;
const POINTS_PER_RUSHING_TD: f64 = 6.0;
const POINTS_PER_RECEIVING_YARD: f64 = 0.1;
const POINTS_PER_RECEIVING_TD: f64 = 6.0;
const POINTS_PER_FIELD_GOAL: f64 = 3.0;
const POINTS_PER_EXTRA_POINT: f64 = 1.0;
const POINTS_PER_SACK: f64 = 1.0;
const POINTS_PER_DEFENSIVE_INTERCEPTION: f64 = 2.0;
const POINTS_PER_DEFENSIVE_TD: f64 = 6.0;

/// Stat deltas and the point delta produced by one simulated game.
///
/// `points_allowed` is drawn for defenses and scored through the tier
/// bonus, but is not carried into the cumulative statistics.
#[derive(Debug, Default, Clone)]
pub struct GamePerformance {
    pub passing_yards: u32,
    pub passing_touchdowns: u16,
    pub interceptions: u16,

    pub rushing_yards: u32,
    pub rushing_touchdowns: u16,

    pub receiving_yards: u32,
    pub receiving_touchdowns: u16,

    pub field_goals: u16,
    pub extra_points: u16,

    pub sacks: u16,
    pub defensive_interceptions: u16,
    pub defensive_touchdowns: u16,
    pub points_allowed: u16,

    pub points: f64,
}

/// Generates one game performance for the given position.
///
/// Every stat is an independent uniform draw over its closed range;
/// there is no cross-stat correlation. The caller threads a single
/// session-scoped generator through here.
pub fn simulate<R: Rng + ?Sized>(position: Position, rng: &mut R) -> GamePerformance {
    let mut performance = GamePerformance::default();

    match position {
        Position::Quarterback => {
            performance.passing_yards = rng.random_range(150..=400);
            performance.passing_touchdowns = rng.random_range(0..=4);
            performance.interceptions = rng.random_range(0..=3);
            performance.rushing_yards = rng.random_range(0..=50);
            performance.rushing_touchdowns = rng.random_range(0..=1);

            performance.points = performance.passing_yards as f64 * POINTS_PER_PASSING_YARD
                + performance.passing_touchdowns as f64 * POINTS_PER_PASSING_TD
                + performance.interceptions as f64 * POINTS_PER_INTERCEPTION_THROWN
                + performance.rushing_yards as f64 * POINTS_PER_RUSHING_YARD
                + performance.rushing_touchdowns as f64 * POINTS_PER_RUSHING_TD;
        }
        Position::RunningBack => {
            performance.rushing_yards = rng.random_range(30..=150);
            performance.rushing_touchdowns = rng.random_range(0..=2);
            performance.receiving_yards = rng.random_range(0..=50);
            performance.receiving_touchdowns = rng.random_range(0..=1);

            performance.points = performance.rushing_yards as f64 * POINTS_PER_RUSHING_YARD
                + performance.rushing_touchdowns as f64 * POINTS_PER_RUSHING_TD
                + performance.receiving_yards as f64 * POINTS_PER_RECEIVING_YARD
                + performance.receiving_touchdowns as f64 * POINTS_PER_RECEIVING_TD;
        }
        Position::WideReceiver => {
            performance.receiving_yards = rng.random_range(20..=150);
            performance.receiving_touchdowns = rng.random_range(0..=2);

            performance.points = performance.receiving_yards as f64 * POINTS_PER_RECEIVING_YARD
                + performance.receiving_touchdowns as f64 * POINTS_PER_RECEIVING_TD;
        }
        Position::TightEnd => {
            performance.receiving_yards = rng.random_range(10..=100);
            performance.receiving_touchdowns = rng.random_range(0..=1);

            performance.points = performance.receiving_yards as f64 * POINTS_PER_RECEIVING_YARD
                + performance.receiving_touchdowns as f64 * POINTS_PER_RECEIVING_TD;
        }
        Position::Kicker => {
            performance.field_goals = rng.random_range(0..=5);
            performance.extra_points = rng.random_range(1..=5);

            performance.points = performance.field_goals as f64 * POINTS_PER_FIELD_GOAL
                + performance.extra_points as f64 * POINTS_PER_EXTRA_POINT;
        }
        Position::Defense => {
            performance.sacks = rng.random_range(0..=5);
            performance.defensive_interceptions = rng.random_range(0..=3);
            performance.defensive_touchdowns = rng.random_range(0..=1);
            performance.points_allowed = rng.random_range(0..=35);

            performance.points = performance.sacks as f64 * POINTS_PER_SACK
                + performance.defensive_interceptions as f64 * POINTS_PER_DEFENSIVE_INTERCEPTION
                + performance.defensive_touchdowns as f64 * POINTS_PER_DEFENSIVE_TD
                + points_allowed_bonus(performance.points_allowed);
        }
    }

    performance
}

/// Non-linear defense bonus by points allowed. Tiers are exact:
/// 0 -> +10, 1-6 -> +7, 7-13 -> +4, 14-20 -> +1, 21-27 -> 0,
/// 28-34 -> -1, 35+ -> -4.
pub fn points_allowed_bonus(points_allowed: u16) -> f64 {
    match points_allowed {
        0 => 10.0,
        1..=6 => 7.0,
        7..=13 => 4.0,
        14..=20 => 1.0,
        21..=27 => 0.0,
        28..=34 => -1.0,
        _ => -4.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn points_allowed_tiers_are_exact_at_boundaries() {
        assert_eq!(points_allowed_bonus(0), 10.0);
        assert_eq!(points_allowed_bonus(1), 7.0);
        assert_eq!(points_allowed_bonus(6), 7.0);
        assert_eq!(points_allowed_bonus(7), 4.0);
        assert_eq!(points_allowed_bonus(13), 4.0);
        assert_eq!(points_allowed_bonus(14), 1.0);
        assert_eq!(points_allowed_bonus(20), 1.0);
        assert_eq!(points_allowed_bonus(21), 0.0);
        assert_eq!(points_allowed_bonus(27), 0.0);
        assert_eq!(points_allowed_bonus(28), -1.0);
        assert_eq!(points_allowed_bonus(34), -1.0);
        assert_eq!(points_allowed_bonus(35), -4.0);
    }

    #[test]
    fn quarterback_draws_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let performance = simulate(Position::Quarterback, &mut rng);

            assert!((150..=400).contains(&performance.passing_yards));
            assert!(performance.passing_touchdowns <= 4);
            assert!(performance.interceptions <= 3);
            assert!(performance.rushing_yards <= 50);
            assert!(performance.rushing_touchdowns <= 1);
            assert_eq!(performance.receiving_yards, 0);
        }
    }

    #[test]
    fn kicker_always_scores_at_least_one_extra_point() {
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..200 {
            let performance = simulate(Position::Kicker, &mut rng);

            assert!((1..=5).contains(&performance.extra_points));
            assert!(performance.points >= POINTS_PER_EXTRA_POINT);
        }
    }

    #[test]
    fn defense_points_match_component_sum() {
        let mut rng = StdRng::seed_from_u64(13);

        for _ in 0..200 {
            let performance = simulate(Position::Defense, &mut rng);

            let expected = performance.sacks as f64
                + performance.defensive_interceptions as f64 * 2.0
                + performance.defensive_touchdowns as f64 * 6.0
                + points_allowed_bonus(performance.points_allowed);

            assert_eq!(performance.points, expected);
        }
    }
}
