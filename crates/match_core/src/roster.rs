//! The live set of participants in a match.
//!
//! The roster is owned by the match orchestrator. Membership changes go through
//! [`Roster::add`] / [`Roster::add_with`] / [`Roster::remove`]; job changes go through the
//! [`balance`](crate::balance) functions, which borrow the roster mutably for the duration
//! of one call.

use indexmap::IndexMap;
use tracing::debug;
use uuid::Uuid;

use crate::job::{Job, JobCounts, JobKind};
use crate::participant::Participant;

/// Veto hook consulted before a participant is added to a roster.
///
/// The hook sees the roster as it was before the addition.
pub trait JoinGuard<J: JobKind = Job> {
    fn before_add(&mut self, roster: &Roster<J>, participant: &Participant<J>) -> bool;
}

/// Rejects joins once the roster holds the given number of participants.
#[derive(Debug, Clone, Copy)]
pub struct MaxParticipants(pub usize);

impl<J: JobKind> JoinGuard<J> for MaxParticipants {
    fn before_add(&mut self, roster: &Roster<J>, _participant: &Participant<J>) -> bool {
        roster.len() < self.0
    }
}

/// Participants keyed by id, in insertion order.
#[derive(Debug, Clone)]
pub struct Roster<J: JobKind = Job> {
    participants: IndexMap<Uuid, Participant<J>>,
}

impl<J: JobKind> Default for Roster<J> {
    fn default() -> Self {
        Self {
            participants: IndexMap::new(),
        }
    }
}

impl<J: JobKind> Roster<J> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a participant without consulting any guard.
    ///
    /// Returns `false` if a participant with the same id is already present.
    pub fn add(&mut self, participant: Participant<J>) -> bool {
        self.add_with(participant, |_, _| true)
    }

    /// Adds a participant unless `before_add` vetoes it.
    ///
    /// The predicate is only invoked for ids not yet in the roster. Returns `true` if the
    /// participant was added.
    pub fn add_with<F>(&mut self, participant: Participant<J>, before_add: F) -> bool
    where
        F: FnOnce(&Self, &Participant<J>) -> bool,
    {
        if self.contains(participant.id()) {
            return false;
        }
        if !before_add(self, &participant) {
            debug!(participant = %participant.id(), "join vetoed");
            return false;
        }
        self.participants.insert(participant.id(), participant);
        true
    }

    /// [`add_with`](Self::add_with) for a reusable [`JoinGuard`].
    pub fn add_guarded<G>(&mut self, participant: Participant<J>, guard: &mut G) -> bool
    where
        G: JoinGuard<J> + ?Sized,
    {
        self.add_with(participant, |roster, participant| {
            guard.before_add(roster, participant)
        })
    }

    pub fn remove(&mut self, id: Uuid) -> Option<Participant<J>> {
        self.participants.shift_remove(&id)
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.participants.contains_key(&id)
    }

    pub fn get(&self, id: Uuid) -> Option<&Participant<J>> {
        self.participants.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: Uuid) -> Option<&mut Participant<J>> {
        self.participants.get_mut(&id)
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Participant<J>> + '_ {
        self.participants.values()
    }

    pub fn ids(&self) -> impl ExactSizeIterator<Item = Uuid> + '_ {
        self.participants.keys().copied()
    }

    /// Head count per job, with every job present.
    pub fn job_counts(&self) -> JobCounts<J> {
        JobCounts::tally(self.iter().map(Participant::job))
    }

    /// Ids of the participants currently holding `job`, in roster order.
    pub fn ids_in_job(&self, job: J) -> Vec<Uuid> {
        self.iter()
            .filter(|participant| participant.job() == job)
            .map(Participant::id)
            .collect()
    }
}

impl<J: JobKind> FromIterator<Participant<J>> for Roster<J> {
    fn from_iter<I: IntoIterator<Item = Participant<J>>>(iter: I) -> Self {
        let mut roster = Self::new();
        for participant in iter {
            roster.add(participant);
        }
        roster
    }
}
