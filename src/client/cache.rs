use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::client::{error::ClientError, mutation::OptimisticMutation};

/// Cached list, one per HTTP resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKey {
    Factions,
    FighterCategories,
    FighterTypes,
    SkillTypes,
    Skills,
    Traits,
    WeaponTypes,
    Weapons,
}

impl ResourceKey {
    /// Path of the list endpoint
    pub fn path(&self) -> &'static str {
        match self {
            Self::Factions => "/factions",
            Self::FighterCategories => "/fighter-categories",
            Self::FighterTypes => "/fighter-types",
            Self::SkillTypes => "/skill-types",
            Self::Skills => "/skills",
            Self::Traits => "/traits",
            Self::WeaponTypes => "/weapon-types",
            Self::Weapons => "/weapons",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Freshness {
    /// Fetched within the stale time and not invalidated since.
    Fresh,
    /// Usable for display, but should be refetched.
    Stale,
}

#[derive(Clone, Debug)]
pub struct CachedList<T> {
    pub rows: Vec<T>,
    pub freshness: Freshness,
}

#[derive(Clone, Debug)]
pub(crate) struct CacheEntry {
    rows: Vec<Value>,
    fetched_at: Instant,
    invalidated: bool,
}

/// Handle for an in-flight list request.
///
/// Completing a fetch whose key was canceled after the ticket was issued has no effect.
#[derive(Clone, Copy, Debug)]
pub struct FetchTicket {
    key: ResourceKey,
    generation: u64,
}

impl FetchTicket {
    pub fn key(&self) -> ResourceKey {
        self.key
    }
}

/// Session-scoped cache of list responses.
pub struct QueryCache {
    stale_time: Duration,
    entries: HashMap<ResourceKey, CacheEntry>,
    // Bumped on cancel; fetches issued under an older generation are discarded.
    generations: HashMap<ResourceKey, u64>,
}

impl QueryCache {
    /// Creates an empty cache whose entries turn stale `stale_time` after being fetched
    pub fn new(stale_time: Duration) -> Self {
        Self {
            stale_time,
            entries: HashMap::new(),
            generations: HashMap::new(),
        }
    }

    /// Returns the cached rows for `key` with their freshness, or `None` if never fetched
    pub fn get<T: DeserializeOwned>(
        &self,
        key: ResourceKey,
    ) -> Result<Option<CachedList<T>>, ClientError> {
        let Some(entry) = self.entries.get(&key) else {
            return Ok(None);
        };

        let rows = entry
            .rows
            .iter()
            .cloned()
            .map(serde_json::from_value)
            .collect::<Result<Vec<T>, _>>()?;

        Ok(Some(CachedList {
            rows,
            freshness: self.freshness(entry),
        }))
    }

    /// Whether `key` must be fetched before it can be considered server truth
    pub fn is_stale(&self, key: ResourceKey) -> bool {
        match self.entries.get(&key) {
            Some(entry) => self.freshness(entry) == Freshness::Stale,
            None => true,
        }
    }

    /// Stores a list response for `key`, replacing whatever was cached
    pub fn set<T: Serialize>(&mut self, key: ResourceKey, rows: &[T]) -> Result<(), ClientError> {
        let rows = rows
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<Value>, _>>()?;

        self.entries.insert(
            key,
            CacheEntry {
                rows,
                fetched_at: Instant::now(),
                invalidated: false,
            },
        );

        Ok(())
    }

    /// Marks `key` stale; cached rows stay readable until the next fetch replaces them
    pub fn invalidate(&mut self, key: ResourceKey) {
        if let Some(entry) = self.entries.get_mut(&key) {
            entry.invalidated = true;
        }
    }

    /// Registers a list request for `key`
    pub fn begin_fetch(&mut self, key: ResourceKey) -> FetchTicket {
        FetchTicket {
            key,
            generation: self.generation(key),
        }
    }

    /// Stores the response of a fetch unless it was canceled
    ///
    /// Returns `Ok(false)` when the response was discarded.
    pub fn complete_fetch<T: Serialize>(
        &mut self,
        ticket: FetchTicket,
        rows: &[T],
    ) -> Result<bool, ClientError> {
        if ticket.generation != self.generation(ticket.key) {
            return Ok(false);
        }

        self.set(ticket.key, rows)?;

        Ok(true)
    }

    /// Cancels every fetch of `key` issued so far
    pub fn cancel(&mut self, key: ResourceKey) {
        *self.generations.entry(key).or_insert(0) += 1;
    }

    /// Inserts `placeholder` at the end of the cached list for `key`
    ///
    /// Pending fetches of `key` are canceled so a response issued before the mutation cannot
    /// overwrite the placeholder. The returned value holds a snapshot of the prior entry and
    /// must be settled once the server has answered.
    pub fn begin_optimistic<T: Serialize>(
        &mut self,
        key: ResourceKey,
        placeholder: &T,
    ) -> Result<OptimisticMutation, ClientError> {
        let placeholder = serde_json::to_value(placeholder)?;

        self.cancel(key);
        let snapshot = self.entries.get(&key).cloned();

        let entry = self.entries.entry(key).or_insert_with(|| CacheEntry {
            rows: Vec::new(),
            fetched_at: Instant::now(),
            invalidated: true,
        });
        entry.rows.push(placeholder);

        Ok(OptimisticMutation::new(key, snapshot))
    }

    pub(crate) fn restore(&mut self, key: ResourceKey, snapshot: Option<CacheEntry>) {
        match snapshot {
            Some(entry) => {
                self.entries.insert(key, entry);
            }
            None => {
                self.entries.remove(&key);
            }
        }
    }

    fn generation(&self, key: ResourceKey) -> u64 {
        self.generations.get(&key).copied().unwrap_or(0)
    }

    fn freshness(&self, entry: &CacheEntry) -> Freshness {
        if entry.invalidated || entry.fetched_at.elapsed() >= self.stale_time {
            Freshness::Stale
        } else {
            Freshness::Fresh
        }
    }
}
