//! Job balancing.
//!
//! Keeps the number of participants per job as even as possible: after [`balance_all`]
//! the most and least populated jobs differ by at most one, and by zero when the roster
//! size is a multiple of the number of jobs.
//!
//! These functions are the only code that changes a participant's job. They borrow the
//! roster for the duration of a call and keep nothing afterwards.

use indexmap::IndexMap;
use rand::Rng;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{MatchError, Result};
use crate::job::{Job, JobCounts, JobKind};
use crate::roster::Roster;
use crate::transfer::JobTransfer;
use crate::util::random_element;

/// Net transfers of one balancing pass, keyed by participant id in the order they were
/// first moved.
pub type Transfers<J = Job> = IndexMap<Uuid, JobTransfer<J>>;

/// Head count per job. Jobs without participants are reported with a count of zero.
pub fn count_by_job<J: JobKind>(roster: &Roster<J>) -> JobCounts<J> {
    roster.job_counts()
}

/// The job with the most participants; ties go to the first job in declaration order.
pub fn most_populated_job<J: JobKind>(roster: &Roster<J>) -> Result<J> {
    if roster.is_empty() {
        return Err(MatchError::EmptyRoster);
    }
    count_by_job(roster)
        .most_populated()
        .ok_or(MatchError::EmptyRoster)
}

/// The job with the fewest participants; ties go to the first job in declaration order.
pub fn least_populated_job<J: JobKind>(roster: &Roster<J>) -> Result<J> {
    if roster.is_empty() {
        return Err(MatchError::EmptyRoster);
    }
    count_by_job(roster)
        .least_populated()
        .ok_or(MatchError::EmptyRoster)
}

/// Difference between the most and the least populated job, `0` for an empty roster.
pub fn largest_difference<J: JobKind>(roster: &Roster<J>) -> usize {
    if roster.is_empty() {
        return 0;
    }
    count_by_job(roster).spread()
}

/// Ids of the participants holding `job`.
pub fn participants_in_job<J: JobKind>(roster: &Roster<J>, job: J) -> Vec<Uuid> {
    roster.ids_in_job(job)
}

/// Moves one participant to `new_job`. Returns `None` if the id is not in the roster.
pub fn transfer_participant<J: JobKind>(
    roster: &mut Roster<J>,
    id: Uuid,
    new_job: J,
) -> Option<JobTransfer<J>> {
    let transfer = roster.get_mut(id)?.switch_job(new_job);
    debug!(participant = %id, %transfer, "transferred participant");
    Some(transfer)
}

/// Largest job spread a roster of `size` participants is allowed to keep.
fn target_spread<J: JobKind>(size: usize) -> usize {
    if size % J::COUNT == 0 {
        0
    } else {
        1
    }
}

/// Rebalances the whole roster.
///
/// While the spread exceeds its target, a participant picked uniformly at random from the
/// most populated job is moved to the least populated job. Each move strictly lowers the
/// sum of squared job counts, so the loop ends after at most `roster.len()²` moves.
///
/// A participant moved more than once is reported with its net transfer (first old job,
/// last new job); a participant that ends up back in its original job is not reported.
pub fn balance_all<J, R>(roster: &mut Roster<J>, rng: &mut R) -> Result<Transfers<J>>
where
    J: JobKind,
    R: Rng + ?Sized,
{
    let mut transfers = Transfers::new();
    if roster.is_empty() {
        return Ok(transfers);
    }

    let target = target_spread::<J>(roster.len());
    let mut moves = 0usize;
    loop {
        let counts = count_by_job(roster);
        if counts.spread() <= target {
            break;
        }
        let (Some(most), Some(least)) = (counts.most_populated(), counts.least_populated())
        else {
            return Err(MatchError::EmptyRoster);
        };

        let candidates = participants_in_job(roster, most);
        let id = *random_element(&candidates, rng)?;
        if let Some(transfer) = transfer_participant(roster, id, least) {
            record(&mut transfers, id, transfer);
            moves += 1;
        }
    }

    info!(
        participants = roster.len(),
        moves,
        reported = transfers.len(),
        "balanced jobs"
    );
    Ok(transfers)
}

fn record<J: JobKind>(transfers: &mut Transfers<J>, id: Uuid, transfer: JobTransfer<J>) {
    let net = match transfers.get(&id) {
        Some(previous) => JobTransfer::new(previous.old_job, transfer.new_job),
        None => transfer,
    };
    if net.is_redundant() {
        transfers.shift_remove(&id);
    } else {
        transfers.insert(id, net);
    }
}

/// Moves a single participant to the least populated job.
///
/// Returns `None`, touching nothing, when the id is not in the roster or when the
/// participant's job already has the lowest head count. No other participant is moved.
pub fn balance_one<J: JobKind>(roster: &mut Roster<J>, id: Uuid) -> Option<JobTransfer<J>> {
    let current = roster.get(id)?.job();
    let counts = count_by_job(roster);
    let least = counts.least_populated()?;
    if counts.get(current) == counts.get(least) {
        return None;
    }
    transfer_participant(roster, id, least)
}
