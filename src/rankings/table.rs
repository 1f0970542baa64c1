use std::collections::HashMap;

/// Rank positions per team, in order of first appearance
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankingTable {
    teams: Vec<String>,
    ranks: Vec<Vec<u32>>,
    index: HashMap<String, usize>,
}

impl RankingTable {
    pub fn new() -> Self {
        RankingTable::default()
    }

    /// Record that one ranker placed `team` at `rank`
    pub fn push(&mut self, team: &str, rank: u32) {
        match self.index.get(team) {
            Some(&idx) => self.ranks[idx].push(rank),
            None => {
                self.index.insert(team.to_string(), self.teams.len());
                self.teams.push(team.to_string());
                self.ranks.push(vec![rank]);
            }
        }
    }

    /// Rank positions recorded for `team`
    pub fn ranks(&self, team: &str) -> Option<&[u32]> {
        self.index.get(team).map(|&idx| self.ranks[idx].as_slice())
    }

    /// Position of `team` in [`teams`](Self::teams)
    pub fn index_of(&self, team: &str) -> Option<usize> {
        self.index.get(team).copied()
    }

    pub fn contains(&self, team: &str) -> bool {
        self.index.contains_key(team)
    }

    /// Team names in order of first appearance
    pub fn teams(&self) -> &[String] {
        &self.teams
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u32])> {
        self.teams
            .iter()
            .zip(self.ranks.iter())
            .map(|(team, ranks)| (team.as_str(), ranks.as_slice()))
    }

    /// Number of distinct teams
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, u32)> for RankingTable {
    fn from_iter<I: IntoIterator<Item = (&'a str, u32)>>(iter: I) -> Self {
        let mut table = RankingTable::new();
        for (team, rank) in iter {
            table.push(team, rank);
        }
        table
    }
}
