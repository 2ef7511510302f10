// 👥 Team - a name plus an ordered, growable list of users

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::user::User;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub members: Vec<User>,
}

impl Team {
    /// Create an empty team
    pub fn new(name: impl Into<String>) -> Self {
        Team {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Append a member. No capacity limit, no duplicate detection.
    pub fn add_member(&mut self, user: User) {
        debug!(team = %self.name, member = %user.user_name, "adding team member");
        self.members.push(user);
    }

    pub fn size(&self) -> usize {
        self.members.len()
    }

    /// Member names in insertion order
    pub fn member_names(&self) -> Vec<String> {
        self.members
            .iter()
            .map(|u| u.user_name.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_team() {
        let team = Team::new("Engineering");

        assert_eq!(team.name, "Engineering");
        assert_eq!(team.size(), 0);
        assert!(team.member_names().is_empty());
    }

    #[test]
    fn test_size_tracks_add_member_calls() {
        for n in 0..20 {
            let mut team = Team::new("T");
            for i in 0..n {
                team.add_member(User::new(i, "member"));
            }
            assert_eq!(team.size(), n as usize);
        }
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut team = Team::new("Engineering");
        let bob = User::new(2, "Bob").with_active(true);

        team.add_member(bob.clone());
        team.add_member(bob);

        assert_eq!(team.size(), 2);
    }

    #[test]
    fn test_member_order_preserved() {
        let mut team = Team::new("Engineering");
        team.add_member(User::new(1, "Alice"));
        team.add_member(User::new(2, "Bob"));
        team.add_member(User::new(3, "Charlie"));

        assert_eq!(team.member_names(), vec!["Alice", "Bob", "Charlie"]);
    }
}
