//! End-to-end use of the match core the way an orchestrator drives it:
//! joins behind a veto hook, job balancing after membership changes, and a spawn
//! selector consulted once per wave.

use match_core::balance::{self, count_by_job};
use match_core::{
    AdaptiveSelector, AttributeSet, Job, JobTransfer, MatchError, Monster, MonsterAttribute,
    MonsterSelector, Participant, Roster, SelectorConfig, SpawnCandidate,
};
use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use strum::{EnumCount, EnumIter, IntoEnumIterator};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, EnumCount)]
enum Team {
    A,
    B,
    C,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Wave {
    Brute,
    Archer,
}

impl SpawnCandidate for Wave {
    fn attributes(&self) -> AttributeSet {
        match self {
            Wave::Brute => AttributeSet::of(&[MonsterAttribute::Melee]),
            Wave::Archer => AttributeSet::EMPTY,
        }
    }
}

#[test]
fn seven_players_in_one_team_end_up_three_two_two() {
    let mut roster: Roster<Team> = (0..7).map(|_| Participant::random(Team::A)).collect();
    let mut rng = StdRng::seed_from_u64(1234);

    let transfers = balance::balance_all(&mut roster, &mut rng).unwrap();

    let counts = count_by_job(&roster);
    let mut sizes: Vec<usize> = counts.iter().map(|(_, count)| count).collect();
    sizes.sort_unstable();
    assert_eq!(sizes, vec![2, 2, 3]);
    assert_eq!(counts.total(), 7);
    assert_eq!(transfers.len(), 4);
    assert!(transfers.values().all(|t| t.old_job == Team::A && !t.is_redundant()));
}

#[test]
fn balancing_holds_across_sizes_and_starting_assignments() {
    let mut rng = StdRng::seed_from_u64(99);
    for size in 0..=30 {
        for start in Team::iter() {
            let mut roster: Roster<Team> =
                (0..size).map(|_| Participant::random(start)).collect();
            balance::balance_all(&mut roster, &mut rng).unwrap();

            let counts = count_by_job(&roster);
            assert_eq!(counts.total(), size);
            assert!(counts.spread() <= 1);
            if size % Team::COUNT == 0 {
                assert_eq!(counts.spread(), 0);
            }
        }
    }
}

#[test]
fn join_veto_and_late_joiner_balancing() {
    let mut roster: Roster = Roster::new();
    let banned = Uuid::new_v4();
    let gate = |_: &Roster, participant: &Participant| participant.id() != banned;

    for _ in 0..3 {
        assert!(roster.add_with(Participant::random(Job::Defender), gate));
    }
    assert!(!roster.add_with(Participant::new(banned, Job::Medic), gate));
    assert!(!roster.contains(banned));

    let mut rng = StdRng::seed_from_u64(5);
    balance::balance_all(&mut roster, &mut rng).unwrap();
    assert_eq!(balance::largest_difference(&roster), 0);

    let late = Participant::random(Job::Engineer);
    let late_id = late.id();
    assert!(roster.add_with(late, gate));

    // Engineer now holds two players, Defender and Medic one each.
    let transfer = balance::balance_one(&mut roster, late_id).unwrap();
    assert_eq!(transfer, JobTransfer::new(Job::Engineer, Job::Defender));
    assert_eq!(balance::largest_difference(&roster), 1);

    let engineer = balance::participants_in_job(&roster, Job::Engineer)[0];
    let before = count_by_job(&roster);
    assert_eq!(balance::balance_one(&mut roster, engineer), None);
    assert_eq!(count_by_job(&roster), before);
}

#[test]
fn empty_roster_queries_fail_fast() {
    let mut roster: Roster = Roster::new();
    assert!(matches!(
        balance::most_populated_job(&roster),
        Err(MatchError::EmptyRoster)
    ));
    assert!(matches!(
        balance::least_populated_job(&roster),
        Err(MatchError::EmptyRoster)
    ));
    let mut rng = StdRng::seed_from_u64(0);
    assert!(balance::balance_all(&mut roster, &mut rng).unwrap().is_empty());
}

#[test]
fn two_option_catalog_after_one_melee_pick() {
    let mut selector =
        AdaptiveSelector::new(vec![Wave::Brute, Wave::Archer], SelectorConfig::default())
            .unwrap();

    // A zero draw always lands on the first catalog entry.
    let mut first = StepRng::new(0, 0);
    assert_eq!(selector.select(&mut first).unwrap(), Wave::Brute);

    assert_eq!(selector.weights(), vec![0.25, 0.75]);
    assert_eq!(selector.probabilities(), vec![0.25, 0.75]);
    assert_eq!(selector.most_probable_options(), vec![Wave::Archer]);
    assert_eq!(selector.history(), &[Wave::Brute]);
}

#[test]
fn highest_draw_lands_on_last_entry() {
    let mut selector = MonsterSelector::monsters(SelectorConfig::default()).unwrap();
    let mut last = StepRng::new(u64::MAX, 0);
    assert_eq!(selector.select(&mut last).unwrap(), Monster::Ravager);
}

#[test]
fn every_monster_keeps_appearing() {
    let mut selector = MonsterSelector::monsters(SelectorConfig::default()).unwrap();
    let mut rng = StdRng::seed_from_u64(31337);
    let mut picks: HashMap<Monster, usize> = HashMap::new();

    for _ in 0..3000 {
        let monster = selector.select(&mut rng).unwrap();
        *picks.entry(monster).or_default() += 1;
    }

    for monster in Monster::iter() {
        assert!(
            picks.get(&monster).copied().unwrap_or(0) > 0,
            "{monster} was never selected"
        );
    }
}

#[test]
fn reset_between_matches() {
    let mut selector = MonsterSelector::monsters(SelectorConfig::default()).unwrap();
    let mut rng = StdRng::seed_from_u64(8);
    for _ in 0..20 {
        selector.select(&mut rng).unwrap();
    }
    selector.reset();
    assert!(selector.history().is_empty());
    assert_eq!(selector.most_probable_options().len(), Monster::COUNT);
}
