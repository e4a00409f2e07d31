//! Monster catalog and the tactical attributes used to steer spawn selection.

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, IntoEnumIterator};

/// Tactical trait of a monster.
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
pub enum MonsterAttribute {
    Melee,
    Ranged,
    Horde,
    Surge,
    Debuff,
    Support,
    Destroy,
}

impl MonsterAttribute {
    const fn bit(self) -> u16 {
        1 << self as u16
    }
}

/// Set of [`MonsterAttribute`]s, stored as a bit mask.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AttributeSet(u16);

impl AttributeSet {
    pub const EMPTY: Self = Self(0);

    pub const fn of(attributes: &[MonsterAttribute]) -> Self {
        let mut mask = 0;
        let mut i = 0;
        while i < attributes.len() {
            mask |= attributes[i].bit();
            i += 1;
        }
        Self(mask)
    }

    pub const fn contains(self, attribute: MonsterAttribute) -> bool {
        self.0 & attribute.bit() != 0
    }

    pub fn insert(&mut self, attribute: MonsterAttribute) {
        self.0 |= attribute.bit();
    }

    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Members in declaration order.
    pub fn iter(self) -> impl Iterator<Item = MonsterAttribute> {
        MonsterAttribute::iter().filter(move |attribute| self.contains(*attribute))
    }
}

impl FromIterator<MonsterAttribute> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = MonsterAttribute>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for attribute in iter {
            set.insert(attribute);
        }
        set
    }
}

impl fmt::Debug for AttributeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Anything the adaptive selector can pick: a fixed entry tagged with attributes.
pub trait SpawnCandidate: Copy + Eq + fmt::Debug {
    fn attributes(&self) -> AttributeSet;
}

/// Monsters that can be spawned during a wave.
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
pub enum Monster {
    Zombie,
    Skeleton,
    Spider,
    Slime,
    Silverfish,
    Guardian,
    Enderman,
    Creeper,
    Ravager,
}

impl Monster {
    pub const fn attributes(self) -> AttributeSet {
        use MonsterAttribute::{Debuff, Destroy, Horde, Melee, Ranged, Support, Surge};

        match self {
            Monster::Zombie => AttributeSet::of(&[Melee, Horde]),
            Monster::Skeleton => AttributeSet::of(&[Ranged]),
            Monster::Spider => AttributeSet::of(&[Ranged, Surge, Debuff]),
            Monster::Slime => AttributeSet::of(&[Melee, Support, Surge]),
            Monster::Silverfish => AttributeSet::of(&[Melee, Horde, Destroy]),
            Monster::Guardian => AttributeSet::of(&[Ranged, Debuff]),
            Monster::Enderman => AttributeSet::of(&[Support, Surge]),
            Monster::Creeper => AttributeSet::of(&[Destroy]),
            Monster::Ravager => AttributeSet::of(&[Destroy]),
        }
    }

    pub const fn has_attribute(self, attribute: MonsterAttribute) -> bool {
        self.attributes().contains(attribute)
    }
}

impl SpawnCandidate for Monster {
    fn attributes(&self) -> AttributeSet {
        Monster::attributes(*self)
    }
}
