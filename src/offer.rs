use rand::rngs::StdRng;
use rand::{Rng, SeedableRng, thread_rng};
use serde::{Deserialize, Serialize};

use crate::moves::MoveOptionName;

/// Offer catalog, in the order the offer pointer indexes it.
pub const OFFER_CATALOG: [MoveOptionName; 5] = [
    MoveOptionName::Jazair,
    MoveOptionName::Chowkidar,
    MoveOptionName::Cuirassier,
    MoveOptionName::Ryott,
    MoveOptionName::Faujdar,
];

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum RandomizerKind {
    TrueRandom,
    Seeded { seed: u64 },
    SingleOffer { name: MoveOptionName },
}

impl Default for RandomizerKind {
    fn default() -> Self {
        RandomizerKind::TrueRandom
    }
}

trait Randomizer {
    /// Next index into `OFFER_CATALOG`.
    fn next(&mut self) -> usize;
}

struct TrueRandom;

impl Randomizer for TrueRandom {
    fn next(&mut self) -> usize {
        thread_rng().gen_range(0..OFFER_CATALOG.len())
    }
}

struct Seeded {
    rng: StdRng,
}

impl Randomizer for Seeded {
    fn next(&mut self) -> usize {
        self.rng.gen_range(0..OFFER_CATALOG.len())
    }
}

struct SingleOffer {
    index: usize,
}

impl Randomizer for SingleOffer {
    fn next(&mut self) -> usize {
        self.index
    }
}

fn randomizer_from_kind(kind: &RandomizerKind) -> Box<dyn Randomizer> {
    match kind {
        RandomizerKind::TrueRandom => Box::new(TrueRandom),
        RandomizerKind::Seeded { seed } => Box::new(Seeded {
            rng: StdRng::seed_from_u64(*seed),
        }),
        RandomizerKind::SingleOffer { name } => Box::new(SingleOffer {
            index: catalog_index(*name),
        }),
    }
}

fn catalog_index(name: MoveOptionName) -> usize {
    OFFER_CATALOG
        .iter()
        .position(|&n| n == name)
        .unwrap_or_default()
}

/// The shared offer both players may buy into their queue.
pub struct MoveOfferGenerator {
    position: usize,
    randomizer: Box<dyn Randomizer>,
}

impl MoveOfferGenerator {
    pub fn new(kind: &RandomizerKind) -> Self {
        let position = match kind {
            RandomizerKind::SingleOffer { name } => catalog_index(*name),
            _ => 0,
        };
        Self {
            position,
            randomizer: randomizer_from_kind(kind),
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn current(&self) -> MoveOptionName {
        OFFER_CATALOG[self.position]
    }

    /// Picks a fresh pointer after the current offer was taken.
    pub fn reroll(&mut self) {
        self.position = self.randomizer.next();
    }
}

impl std::fmt::Debug for MoveOfferGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MoveOfferGenerator")
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}
