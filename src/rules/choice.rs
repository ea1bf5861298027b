use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// One move from the five-way choice set.
///
/// The beats-relation is fixed: every move defeats exactly two others and
/// loses to the remaining two, so any pair of distinct moves has exactly
/// one winner.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
    Lizard,
    Spock,
}

impl Choice {
    pub const ALL: [Self; 5] = [
        Self::Rock,
        Self::Paper,
        Self::Scissors,
        Self::Lizard,
        Self::Spock,
    ];

    /// The two moves this one defeats.
    pub fn beats(&self) -> [Self; 2] {
        match self {
            Self::Rock => [Self::Scissors, Self::Lizard],
            Self::Paper => [Self::Rock, Self::Spock],
            Self::Scissors => [Self::Paper, Self::Lizard],
            Self::Lizard => [Self::Paper, Self::Spock],
            Self::Spock => [Self::Rock, Self::Scissors],
        }
    }

    pub fn defeats(&self, other: &Self) -> bool {
        self.beats().contains(other)
    }

    /// Fixed phrase for an ordered (winner, loser) pair.
    /// Total over the beats-relation; undefined outside it.
    pub fn phrase(&self, loser: &Self) -> &'static str {
        match (self, loser) {
            (Self::Rock, Self::Scissors) => "Rock crushes Scissors",
            (Self::Rock, Self::Lizard) => "Rock crushes Lizard",
            (Self::Paper, Self::Rock) => "Paper covers Rock",
            (Self::Paper, Self::Spock) => "Paper disproves Spock",
            (Self::Scissors, Self::Paper) => "Scissors cuts Paper",
            (Self::Scissors, Self::Lizard) => "Scissors decapitates Lizard",
            (Self::Lizard, Self::Paper) => "Lizard eats Paper",
            (Self::Lizard, Self::Spock) => "Lizard poisons Spock",
            (Self::Spock, Self::Rock) => "Spock vaporizes Rock",
            (Self::Spock, Self::Scissors) => "Spock smashes Scissors",
            _ => unreachable!("phrase queried outside the beats-relation"),
        }
    }
}

impl Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Rock => write!(f, "rock"),
            Self::Paper => write!(f, "paper"),
            Self::Scissors => write!(f, "scissors"),
            Self::Lizard => write!(f, "lizard"),
            Self::Spock => write!(f, "spock"),
        }
    }
}
