use crate::PlayerId;
use std::collections::HashMap;

/// A registered identity. Allocated once per distinct name and reused
/// across games; a game never changes its players.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

/// Name-keyed identity table. Same name seen again yields the same id.
#[derive(Debug, Default)]
pub struct Roster {
    players: HashMap<PlayerId, Player>,
    names: HashMap<String, PlayerId>,
    count: PlayerId,
}

impl Roster {
    /// Returns the id registered under `name`, allocating one if unseen.
    pub fn enroll(&mut self, name: &str) -> PlayerId {
        match self.names.get(name) {
            Some(id) => *id,
            None => {
                self.count += 1;
                let id = self.count;
                self.names.insert(name.to_string(), id);
                self.players.insert(
                    id,
                    Player {
                        id,
                        name: name.to_string(),
                    },
                );
                id
            }
        }
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(&id)
    }
}
