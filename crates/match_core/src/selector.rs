//! Adaptive spawn selection.
//!
//! Every round starts from a uniform prior over the catalog. Each past pick is folded in
//! attribute by attribute: options carrying the attribute are multiplied by
//! `1 - p` and clamped to the probability floor, all other options are multiplied by
//! `1 + p / (k - 1)`. The result is normalized, the floor is re-applied to the normalized
//! distribution, and one option is drawn with a cumulative walk in catalog order.
//!
//! Options that share tactics with recent picks become rarer but never impossible, and the
//! rest of the catalog is promoted in return.

use rand::Rng;
use strum::IntoEnumIterator;
use tracing::{debug, error};

use crate::config::SelectorConfig;
use crate::error::{MatchError, Result};
use crate::monster::{Monster, SpawnCandidate};

const ROUNDING_TOLERANCE: f64 = 1e-9;

/// Selector over the full [`Monster`] catalog.
pub type MonsterSelector = AdaptiveSelector<Monster>;

#[derive(Debug, Clone)]
pub struct AdaptiveSelector<T: SpawnCandidate> {
    catalog: Vec<T>,
    config: SelectorConfig,
    history: Vec<T>,
}

impl AdaptiveSelector<Monster> {
    /// Selector over every monster, in declaration order.
    pub fn monsters(config: SelectorConfig) -> Result<Self> {
        Self::new(Monster::iter().collect(), config)
    }
}

impl<T: SpawnCandidate> AdaptiveSelector<T> {
    /// Fails with [`MatchError::EmptyCatalog`] for an empty catalog and with
    /// [`MatchError::InvalidConfig`] if `config` cannot be honoured for it.
    pub fn new(catalog: Vec<T>, config: SelectorConfig) -> Result<Self> {
        if catalog.is_empty() {
            return Err(MatchError::EmptyCatalog);
        }
        config.validate(catalog.len())?;
        Ok(Self {
            catalog,
            config,
            history: Vec::new(),
        })
    }

    pub fn catalog(&self) -> &[T] {
        &self.catalog
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Past picks, oldest first.
    pub fn history(&self) -> &[T] {
        &self.history
    }

    /// Forgets every past pick, e.g. between matches.
    pub fn reset(&mut self) {
        self.history.clear();
    }

    /// Unnormalized weights of the coming round, in catalog order.
    pub fn weights(&self) -> Vec<f64> {
        let size = self.catalog.len();
        let mut weights = vec![1.0 / size as f64; size];
        if size < 2 {
            return weights;
        }

        let reduction = self.config.reduction_factor();
        let promotion = self.config.promotion_factor(size);
        let floor = self.config.minimum_probability;

        for previous in &self.history {
            for attribute in previous.attributes().iter() {
                for (candidate, weight) in self.catalog.iter().zip(weights.iter_mut()) {
                    if candidate.attributes().contains(attribute) {
                        *weight = (*weight * reduction).max(floor);
                    } else {
                        *weight *= promotion;
                    }
                }
            }
        }
        weights
    }

    /// Selection probabilities of the coming round, in catalog order.
    ///
    /// Sums to one and no entry is below the configured floor.
    pub fn probabilities(&self) -> Vec<f64> {
        let mut probabilities = self.weights();
        normalize(&mut probabilities);
        apply_floor(&mut probabilities, self.config.minimum_probability);
        probabilities
    }

    /// Every option tied for the highest weight, in catalog order. Does not touch history.
    pub fn most_probable_options(&self) -> Vec<T> {
        let weights = self.weights();
        let highest = weights.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        self.catalog
            .iter()
            .zip(&weights)
            .filter(|(_, &weight)| weight == highest)
            .map(|(candidate, _)| *candidate)
            .collect()
    }

    /// Draws the next option and remembers it.
    ///
    /// The uniform `[0, 1)` draw selects the first option whose cumulative probability
    /// reaches it. [`MatchError::SelectionExhausted`] means the distribution was corrupted
    /// (NaN or infinite weights); it is not recoverable by retrying.
    pub fn select<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<T> {
        let probabilities = self.probabilities();
        let draw = rng.gen::<f64>();

        let last = probabilities.len() - 1;
        let mut cumulative = 0.0;
        for (index, (candidate, probability)) in
            self.catalog.iter().zip(&probabilities).enumerate()
        {
            cumulative += probability;
            // The final sum may round a few ulps short of one.
            let closes_walk = index == last && (cumulative - 1.0).abs() < ROUNDING_TOLERANCE;
            if draw <= cumulative || closes_walk {
                let picked = *candidate;
                self.record(picked);
                debug!(option = ?picked, probability, "selected option");
                return Ok(picked);
            }
        }

        error!(draw, cumulative, "cumulative probability walk ended without a pick");
        Err(MatchError::SelectionExhausted { draw })
    }

    pub(crate) fn record(&mut self, picked: T) {
        self.history.push(picked);
        if let Some(limit) = self.config.history_limit {
            if self.history.len() > limit {
                let excess = self.history.len() - limit;
                self.history.drain(..excess);
            }
        }
    }
}

fn normalize(values: &mut [f64]) {
    let sum: f64 = values.iter().sum();
    for value in values.iter_mut() {
        *value /= sum;
    }
}

/// Raises every probability below `floor` to it and takes the difference from the other
/// entries in proportion to their size. Requires `floor * values.len() <= 1`.
fn apply_floor(probabilities: &mut [f64], floor: f64) {
    let mut pinned = vec![false; probabilities.len()];
    loop {
        let mut changed = false;
        for (probability, pin) in probabilities.iter().zip(pinned.iter_mut()) {
            if !*pin && *probability < floor {
                *pin = true;
                changed = true;
            }
        }
        if !changed {
            return;
        }

        let pinned_count = pinned.iter().filter(|&&pin| pin).count();
        let free_mass: f64 = probabilities
            .iter()
            .zip(&pinned)
            .filter(|(_, &pin)| !pin)
            .map(|(probability, _)| *probability)
            .sum();
        let target = 1.0 - floor * pinned_count as f64;

        for (probability, &pin) in probabilities.iter_mut().zip(&pinned) {
            if pin {
                *probability = floor;
            } else if free_mass > 0.0 {
                *probability *= target / free_mass;
            }
        }
    }
}
