//! Unassigned players.
//!
//! The roster holds players waiting to be seated. Placing a player takes it
//! out of the roster; removing a placed player puts it back with its name and
//! size intact.

use seating_core::PlayerSize;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Errors from roster edits.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    /// The name was empty after trimming.
    #[error("player name cannot be empty")]
    EmptyName,

    /// A player with this name already exists.
    #[error("player '{0}' already exists")]
    Duplicate(String),

    /// No unassigned player has this name.
    #[error("player '{0}' is not in the roster")]
    NotFound(String),
}

/// A player waiting to be seated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    #[serde(default)]
    pub size: PlayerSize,
}

impl RosterEntry {
    #[must_use]
    pub fn new(name: impl Into<String>, size: PlayerSize) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

/// Header cell that marks the first row of an exported sheet.
const HEADER_NAME: &str = "Player";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RosterEntry> {
        let name = name.trim();
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Adds a player. The name is trimmed first.
    ///
    /// # Errors
    ///
    /// [`RosterError::EmptyName`] or [`RosterError::Duplicate`].
    pub fn add(&mut self, name: &str, size: PlayerSize) -> Result<&RosterEntry, RosterError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RosterError::EmptyName);
        }
        if self.contains(name) {
            return Err(RosterError::Duplicate(name.to_string()));
        }
        self.entries.push(RosterEntry::new(name, size));
        let last = self.entries.len() - 1;
        Ok(&self.entries[last])
    }

    /// Removes and returns a player, e.g. to seat it.
    ///
    /// # Errors
    ///
    /// [`RosterError::NotFound`] if no unassigned player has this name.
    pub fn take(&mut self, name: &str) -> Result<RosterEntry, RosterError> {
        let trimmed = name.trim();
        let position = self
            .entries
            .iter()
            .position(|entry| entry.name == trimmed)
            .ok_or_else(|| RosterError::NotFound(trimmed.to_string()))?;
        Ok(self.entries.remove(position))
    }

    /// Returns a player taken earlier. Unlike [`add`](Self::add) this does
    /// not re-validate the name; the entry came out of the roster intact.
    ///
    /// Returns `false` if a player of that name is already waiting, in which
    /// case the returned entry is dropped.
    pub(crate) fn put_back(&mut self, entry: RosterEntry) -> bool {
        if let Some(existing) = self.get(&entry.name) {
            warn!(
                name = %entry.name,
                size = %entry.size,
                kept = %existing.size,
                "player already in roster, returned entry dropped"
            );
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Deletes a player outright. Returns whether it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        self.take(name).is_ok()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries in alphabetical order, ignoring case.
    #[must_use]
    pub fn sorted(&self) -> Vec<&RosterEntry> {
        let mut entries: Vec<&RosterEntry> = self.entries.iter().collect();
        entries.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name))
        });
        entries
    }

    /// Adds `(name, keep size)` rows from an exported sheet.
    ///
    /// Blank names, the header row and names already present are skipped.
    /// Returns the number of players added.
    pub fn import_rows<'a, I>(&mut self, rows: I) -> usize
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut added = 0;
        for (name, keep_size) in rows {
            if name.trim() == HEADER_NAME {
                continue;
            }
            if self.add(name, PlayerSize::from_keep_size(keep_size)).is_ok() {
                added += 1;
            }
        }
        added
    }
}
