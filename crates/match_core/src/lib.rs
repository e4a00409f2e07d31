//! Match coordination for the survival/defense mode.
//!
//! Two independent pieces are driven by the match orchestrator:
//! - [`balance`]: keeps the job assignment of a [`Roster`] even, moving players from the
//!   most to the least populated job.
//! - [`selector`]: picks the next monster to spawn, steering away from the tactics of
//!   recent picks without ever ruling a monster out.
//!
//! Randomness is always passed in by the caller. Nothing here blocks, performs I/O on its
//! own (apart from [`SelectorConfig::load`]) or locks; hosts that share a roster or a
//! selector between threads must serialize access themselves.
//!
//! # Example
//! ```
//! use match_core::{balance, Job, MonsterSelector, Participant, Roster, SelectorConfig};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut roster: Roster = (0..5).map(|_| Participant::random(Job::Defender)).collect();
//! let transfers = balance::balance_all(&mut roster, &mut rng).unwrap();
//! assert_eq!(transfers.len(), 3);
//!
//! let mut selector = MonsterSelector::monsters(SelectorConfig::default()).unwrap();
//! let monster = selector.select(&mut rng).unwrap();
//! assert_eq!(selector.history(), &[monster]);
//! ```

#[cfg(feature = "bevy")]
pub mod bevy_adapter;

pub mod balance;
pub mod config;
pub mod error;
pub mod job;
pub mod monster;
pub mod participant;
pub mod roster;
pub mod selector;
pub mod transfer;
pub mod util;

pub use balance::Transfers;
pub use config::SelectorConfig;
pub use error::{MatchError, Result};
pub use job::{Job, JobCounts, JobKind};
pub use monster::{AttributeSet, Monster, MonsterAttribute, SpawnCandidate};
pub use participant::Participant;
pub use roster::{JoinGuard, MaxParticipants, Roster};
pub use selector::{AdaptiveSelector, MonsterSelector};
pub use transfer::JobTransfer;
