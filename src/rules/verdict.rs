use super::*;
use serde::Serialize;

/// Message attached to a drawn round.
pub const DRAW_MESSAGE: &str = "Both players selected the same move.";

/// Which slot won a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Winner {
    #[serde(rename = "player1")]
    PlayerOne,
    #[serde(rename = "player2")]
    PlayerTwo,
    #[serde(rename = "draw")]
    Draw,
}

/// Outcome of one exchange of simultaneous moves: a winner designation
/// plus the phrase explaining it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub winner: Winner,
    pub message: &'static str,
}

impl Verdict {
    /// Resolves player 1's move against player 2's.
    /// Total over the domain; no side effects, no failure.
    pub fn resolve(p1: Choice, p2: Choice) -> Self {
        if p1 == p2 {
            Self {
                winner: Winner::Draw,
                message: DRAW_MESSAGE,
            }
        } else if p1.defeats(&p2) {
            Self {
                winner: Winner::PlayerOne,
                message: p1.phrase(&p2),
            }
        } else {
            Self {
                winner: Winner::PlayerTwo,
                message: p2.phrase(&p1),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_moves_draw() {
        for a in Choice::ALL {
            let verdict = Verdict::resolve(a, a);
            assert!(verdict.winner == Winner::Draw);
            assert!(verdict.message == DRAW_MESSAGE);
        }
    }

    #[test]
    fn orderings_report_opposite_winners() {
        for a in Choice::ALL {
            for b in Choice::ALL {
                if a != b {
                    let forward = Verdict::resolve(a, b);
                    let reverse = Verdict::resolve(b, a);
                    match forward.winner {
                        Winner::PlayerOne => assert!(reverse.winner == Winner::PlayerTwo),
                        Winner::PlayerTwo => assert!(reverse.winner == Winner::PlayerOne),
                        Winner::Draw => unreachable!("distinct moves cannot draw"),
                    }
                    assert!(forward.message == reverse.message);
                }
            }
        }
    }

    #[test]
    fn rock_crushes_scissors() {
        let verdict = Verdict::resolve(Choice::Rock, Choice::Scissors);
        assert!(verdict.winner == Winner::PlayerOne);
        assert!(verdict.message == "Rock crushes Scissors");
    }

    #[test]
    fn spock_smashes_scissors() {
        let verdict = Verdict::resolve(Choice::Spock, Choice::Scissors);
        assert!(verdict.winner == Winner::PlayerOne);
        assert!(verdict.message == "Spock smashes Scissors");
    }

    #[test]
    fn lizard_poisons_spock() {
        let verdict = Verdict::resolve(Choice::Lizard, Choice::Spock);
        assert!(verdict.winner == Winner::PlayerOne);
        assert!(verdict.message == "Lizard poisons Spock");
    }

    #[test]
    fn message_names_the_winning_move() {
        for a in Choice::ALL {
            for b in Choice::ALL {
                if a != b {
                    let verdict = Verdict::resolve(a, b);
                    let winning = match verdict.winner {
                        Winner::PlayerOne => a,
                        Winner::PlayerTwo => b,
                        Winner::Draw => unreachable!(),
                    };
                    assert!(
                        verdict
                            .message
                            .to_lowercase()
                            .starts_with(&winning.to_string())
                    );
                }
            }
        }
    }
}
