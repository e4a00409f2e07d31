#![cfg(feature = "bevy")]

//! Resources for hosting the match core inside a Bevy app.
//!
//! The orchestrator systems own the roster and the selector through these resources and
//! supply their own RNG on every call.

use bevy::prelude::*;

use crate::config::SelectorConfig;
use crate::error::Result;
use crate::roster::Roster;
use crate::selector::MonsterSelector;

/// The roster of the running match.
#[derive(Resource, Deref, DerefMut, Debug, Default)]
pub struct MatchRoster(pub Roster);

/// Spawn selector of the running match.
#[derive(Resource, Deref, DerefMut, Debug)]
pub struct MonsterDirector(pub MonsterSelector);

/// Inserts an empty [`MatchRoster`] and a fresh [`MonsterDirector`].
pub struct MatchCorePlugin {
    selector: MonsterSelector,
}

impl MatchCorePlugin {
    /// Fails if `config` is not valid for the monster catalog.
    pub fn new(config: SelectorConfig) -> Result<Self> {
        Ok(Self {
            selector: MonsterSelector::monsters(config)?,
        })
    }
}

impl Plugin for MatchCorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MatchRoster>()
            .insert_resource(MonsterDirector(self.selector.clone()));
    }
}
