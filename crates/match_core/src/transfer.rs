use std::fmt;

use serde::{Deserialize, Serialize};

use crate::job::{Job, JobKind};

/// A move of one participant from `old_job` to `new_job`.
///
/// Ordered by `old_job` first, then by `new_job`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct JobTransfer<J: JobKind = Job> {
    pub old_job: J,
    pub new_job: J,
}

impl<J: JobKind> JobTransfer<J> {
    pub fn new(old_job: J, new_job: J) -> Self {
        Self { old_job, new_job }
    }

    /// `true` if the transfer does not change anything.
    pub fn is_redundant(&self) -> bool {
        self.old_job == self.new_job
    }
}

impl<J: JobKind> fmt::Display for JobTransfer<J> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} -> {:?}", self.old_job, self.new_job)
    }
}
