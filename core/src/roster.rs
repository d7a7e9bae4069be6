use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// Storage key the whole roster is persisted under.
pub const PLAYERS_KEY: &str = "players";

/// Player identity, a decimal sequence number kept as a string.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the id, if it has one.
    pub fn ordinal(&self) -> Option<u64> {
        self.0.trim().parse().ok()
    }
}

impl From<u64> for PlayerId {
    fn from(ordinal: u64) -> Self {
        Self(alloc::format!("{}", ordinal))
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub score: Score,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RemoveOutcome {
    pub removed: bool,
    /// The removed player was the one currently playing.
    pub was_active: bool,
}

/// Score descending, then lowest id first. Ids that are not numbers go last.
fn rank(a: &Player, b: &Player) -> Ordering {
    let ordinal = |player: &Player| player.id.ordinal().unwrap_or(u64::MAX);
    b.score
        .cmp(&a.score)
        .then_with(|| ordinal(a).cmp(&ordinal(b)))
}

pub fn validate_name(name: &str) -> core::result::Result<(), ValidationError> {
    if name.trim().is_empty() {
        Err(ValidationError::BlankName)
    } else {
        Ok(())
    }
}

/// Every player who ever played, written through to a [`KeyValueStore`] on each change.
///
/// A failed write leaves the in-memory roster as it was, so it never drifts from
/// what is persisted. Operations on ids that are not in the roster are no-ops
/// rather than errors.
#[derive(Clone, Debug)]
pub struct Roster<S> {
    store: S,
    players: Vec<Player>,
}

impl<S: KeyValueStore> Roster<S> {
    /// Reads the roster from `store`, sorted for display. Missing or unreadable
    /// data gives an empty roster.
    pub fn load(store: S) -> Self {
        let players = Self::read_players(&store);
        Self { store, players }
    }

    fn read_players(store: &S) -> Vec<Player> {
        let Some(raw) = store.get(PLAYERS_KEY) else {
            log::debug!("no stored roster");
            return Vec::new();
        };

        match serde_json::from_str::<Vec<Player>>(&raw) {
            Ok(mut players) => {
                players.sort_by(rank);
                log::debug!("loaded {} players", players.len());
                players
            }
            Err(err) => {
                log::warn!("stored roster is unreadable, starting empty: {}", err);
                Vec::new()
            }
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn find(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|player| &player.id == id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// One past the highest numeric id, or `1` when there is none.
    pub fn next_id(&self) -> Result<PlayerId> {
        let max = self
            .players
            .iter()
            .filter_map(|player| player.id.ordinal())
            .max();

        match max {
            None => Ok(PlayerId::from(1)),
            Some(max) => max
                .checked_add(1)
                .map(PlayerId::from)
                .ok_or(GameError::IdsExhausted),
        }
    }

    pub fn create(&mut self, name: &str) -> Result<Player> {
        validate_name(name)?;

        let player = Player {
            id: self.next_id()?,
            name: name.into(),
            score: 0,
        };

        let mut players = self.players.clone();
        players.push(player.clone());
        self.commit(players)?;

        log::info!("created player {} ({:?})", player.id, player.name);
        Ok(player)
    }

    /// Returns whether the player was found.
    pub fn update_score(&mut self, id: &PlayerId, score: Score) -> Result<bool> {
        self.modify(id, |player| player.score = score)
    }

    /// Returns whether the player was found.
    pub fn edit(&mut self, id: &PlayerId, name: &str, score: Score) -> Result<bool> {
        validate_name(name)?;
        self.modify(id, |player| {
            player.name = name.into();
            player.score = score;
        })
    }

    pub fn remove(&mut self, id: &PlayerId, active: Option<&PlayerId>) -> Result<RemoveOutcome> {
        let was_active = active == Some(id);

        if self.find(id).is_none() {
            return Ok(RemoveOutcome {
                removed: false,
                was_active,
            });
        }

        let players = self
            .players
            .iter()
            .filter(|player| &player.id != id)
            .cloned()
            .collect();
        self.commit(players)?;

        log::info!("removed player {}", id);
        Ok(RemoveOutcome {
            removed: true,
            was_active,
        })
    }

    /// The best `n` players, score descending.
    pub fn top_n(&self, n: usize) -> Vec<&Player> {
        let mut ranked: Vec<&Player> = self.players.iter().collect();
        ranked.sort_by(|a, b| rank(a, b));
        ranked.truncate(n);
        ranked
    }

    pub fn leaderboard(&self) -> Vec<&Player> {
        self.top_n(LEADERBOARD_SIZE)
    }

    fn modify(&mut self, id: &PlayerId, update: impl FnOnce(&mut Player)) -> Result<bool> {
        let Some(position) = self.players.iter().position(|player| &player.id == id) else {
            log::debug!("player {} not found, nothing to update", id);
            return Ok(false);
        };

        let mut players = self.players.clone();
        update(&mut players[position]);
        self.commit(players)?;
        Ok(true)
    }

    fn commit(&mut self, players: Vec<Player>) -> Result<()> {
        let json = serde_json::to_string(&players)?;
        self.store.set(PLAYERS_KEY, &json)?;
        self.players = players;
        Ok(())
    }
}

impl<S: KeyValueStore> ScoreSink for Roster<S> {
    fn record_final_score(&mut self, player: &PlayerId, score: Score) -> Result<()> {
        if !self.update_score(player, score)? {
            log::warn!("final score {} for unknown player {}", score, player);
        }
        Ok(())
    }
}
