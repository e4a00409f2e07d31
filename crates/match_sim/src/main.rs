use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use match_core::balance;
use match_core::{
    Job, MaxParticipants, Monster, MonsterSelector, Participant, Roster, SelectorConfig,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _, EnvFilter};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "match_sim")]
#[command(about = "Simulates job balancing and monster waves for one match")]
struct Args {
    /// Players trying to join the match
    #[arg(short, long, default_value_t = 7)]
    players: usize,

    /// Join limit enforced by the veto hook
    #[arg(long, default_value_t = 16)]
    max_players: usize,

    /// Monster waves to select
    #[arg(short, long, default_value_t = 20)]
    rounds: usize,

    /// RNG seed; fresh entropy when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Selector configuration (RON)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let config = match &args.config {
        Some(path) => SelectorConfig::load(path)?,
        None => SelectorConfig::default(),
    };

    let mut roster: Roster = Roster::new();
    let mut guard = MaxParticipants(args.max_players);
    for _ in 0..args.players {
        let participant = Participant::new(Uuid::new_v4(), Job::Defender);
        if !roster.add_guarded(participant, &mut guard) {
            warn!(limit = args.max_players, "match is full, player turned away");
        }
    }

    let transfers = balance::balance_all(&mut roster, &mut rng)?;
    for (id, transfer) in &transfers {
        info!(player = %id, %transfer, "job changed");
    }
    for (job, count) in balance::count_by_job(&roster).iter() {
        info!(%job, count, "job head count");
    }

    let mut selector = MonsterSelector::monsters(config)?;
    let mut picks: BTreeMap<Monster, usize> = BTreeMap::new();
    for wave in 1..=args.rounds {
        let monster = selector.select(&mut rng)?;
        *picks.entry(monster).or_default() += 1;
        info!(wave, %monster, "spawning wave");
    }
    for (monster, count) in &picks {
        info!(%monster, count, "waves per monster");
    }

    Ok(())
}
