use crate::team::Team;

/// Registration-ordered team storage. Teams are addressed by their
/// stable id; insertion order is preserved for standings tie-breaks.
#[derive(Debug, Default)]
pub struct TeamCollection {
    pub teams: Vec<Team>,
}

impl TeamCollection {
    pub fn new(teams: Vec<Team>) -> Self {
        TeamCollection { teams }
    }

    pub fn add(&mut self, team: Team) {
        self.teams.push(team);
    }

    pub fn by_id(&self, team_id: u32) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == team_id)
    }

    pub fn by_id_mut(&mut self, team_id: u32) -> Option<&mut Team> {
        self.teams.iter_mut().find(|t| t.id == team_id)
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.teams.iter().any(|t| t.name == name)
    }

    pub fn ids(&self) -> Vec<u32> {
        self.teams.iter().map(|t| t.id).collect()
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Disjoint mutable borrows of two distinct teams, so one matchup
    /// can score both sides. `None` if either id is unknown or the ids
    /// are equal.
    pub fn pair_mut(&mut self, first_id: u32, second_id: u32) -> Option<(&mut Team, &mut Team)> {
        if first_id == second_id {
            return None;
        }

        let first_idx = self.teams.iter().position(|t| t.id == first_id)?;
        let second_idx = self.teams.iter().position(|t| t.id == second_id)?;

        if first_idx < second_idx {
            let (left, right) = self.teams.split_at_mut(second_idx);
            Some((&mut left[first_idx], &mut right[0]))
        } else {
            let (left, right) = self.teams.split_at_mut(first_idx);
            Some((&mut right[0], &mut left[second_idx]))
        }
    }
}
