//! Jobs (player roles) and per-job head counts.

use std::collections::BTreeMap;
use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, IntoEnumIterator};

/// A closed enumeration of jobs.
///
/// Declaration order is significant: it is the iteration order of [`JobCounts`] and
/// therefore the tie-break order of the balancer. Any fieldless enum deriving
/// `EnumIter`, `EnumCount` and `Ord` qualifies.
pub trait JobKind:
    Copy + Eq + Ord + Hash + Debug + IntoEnumIterator + EnumCount + Send + Sync + 'static
{
}

impl<T> JobKind for T where
    T: Copy + Eq + Ord + Hash + Debug + IntoEnumIterator + EnumCount + Send + Sync + 'static
{
}

/// The jobs a human player can hold during a match.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumCount,
)]
pub enum Job {
    Defender,
    Engineer,
    Medic,
}

/// Number of participants per job.
///
/// Every job of the enumeration is present, including those with a count of zero, and
/// iteration follows declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobCounts<J: JobKind = Job> {
    counts: BTreeMap<J, usize>,
}

impl<J: JobKind> JobCounts<J> {
    /// Counts the given jobs, one entry per participant.
    pub fn tally<I: IntoIterator<Item = J>>(jobs: I) -> Self {
        let mut counts: BTreeMap<J, usize> = J::iter().map(|job| (job, 0)).collect();
        for job in jobs {
            *counts.entry(job).or_default() += 1;
        }
        Self { counts }
    }

    pub fn get(&self, job: J) -> usize {
        self.counts.get(&job).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (J, usize)> + '_ {
        self.counts.iter().map(|(job, count)| (*job, *count))
    }

    /// Sum over all jobs.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Job with the highest count; the first one in declaration order wins a tie.
    pub fn most_populated(&self) -> Option<J> {
        let mut best: Option<(J, usize)> = None;
        for (job, count) in self.iter() {
            if best.map_or(true, |(_, best_count)| count > best_count) {
                best = Some((job, count));
            }
        }
        best.map(|(job, _)| job)
    }

    /// Job with the lowest count; the first one in declaration order wins a tie.
    pub fn least_populated(&self) -> Option<J> {
        let mut best: Option<(J, usize)> = None;
        for (job, count) in self.iter() {
            if best.map_or(true, |(_, best_count)| count < best_count) {
                best = Some((job, count));
            }
        }
        best.map(|(job, _)| job)
    }

    pub fn max(&self) -> usize {
        self.counts.values().copied().max().unwrap_or(0)
    }

    pub fn min(&self) -> usize {
        self.counts.values().copied().min().unwrap_or(0)
    }

    /// Difference between the most and the least populated job.
    pub fn spread(&self) -> usize {
        self.max() - self.min()
    }
}
