use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::job::{Job, JobKind};
use crate::transfer::JobTransfer;

/// A player taking part in a match.
///
/// Identity is the id alone: two participants with the same id are equal whatever their
/// job. The job can only be changed through the balancer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant<J: JobKind = Job> {
    id: Uuid,
    job: J,
}

impl<J: JobKind> Participant<J> {
    pub fn new(id: Uuid, job: J) -> Self {
        Self { id, job }
    }

    /// A participant with a freshly generated id.
    pub fn random(job: J) -> Self {
        Self::new(Uuid::new_v4(), job)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn job(&self) -> J {
        self.job
    }

    pub(crate) fn switch_job(&mut self, new_job: J) -> JobTransfer<J> {
        let old_job = std::mem::replace(&mut self.job, new_job);
        JobTransfer::new(old_job, new_job)
    }
}

impl<J: JobKind> PartialEq for Participant<J> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<J: JobKind> Eq for Participant<J> {}

impl<J: JobKind> Hash for Participant<J> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
