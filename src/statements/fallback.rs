//! Built-in statements for offline play and provider failures

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Mutex;

use crate::core::error::{Result, RouletteError};
use crate::statements::provider::StatementProvider;
use crate::statements::set::{Statement, StatementSet};

const TRUE_HEADLINES: &[&str] = &[
    "Scientists confirm octopuses have three hearts",
    "Honey found in ancient Egyptian tombs still edible, archaeologists say",
    "Scotland keeps the unicorn as its national animal",
    "Researchers explain why wombat droppings are cube-shaped",
    "Botanists reaffirm bananas are berries while strawberries are not",
    "A day on Venus lasts longer than its year, astronomers note",
];

const FALSE_HEADLINES: &[&str] = &[
    "Astronauts confirm Great Wall of China visible to the naked eye from the Moon",
    "Study finds goldfish memory limited to three seconds",
    "Meteorologists confirm lightning never strikes the same place twice",
    "Neurologists announce humans use only 10 percent of their brains",
    "Vets confirm bulls are enraged by the colour red",
    "Mount Everest shrinking by one metre every year, survey says",
];

/// The set used whenever a provider fails or returns something unusable
pub fn fallback_statements() -> StatementSet {
    StatementSet::new(vec![
        Statement::new(TRUE_HEADLINES[0], true),
        Statement::new(FALSE_HEADLINES[0], false),
    ])
}

/// Provider that draws from the built-in headline pool
///
/// Each fetch returns one true and one false headline in random order.
pub struct OfflineProvider {
    rng: Mutex<ChaCha8Rng>,
}

impl OfflineProvider {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    fn draw(&self) -> Result<StatementSet> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| RouletteError::LlmError("offline provider lock poisoned".into()))?;

        let real = TRUE_HEADLINES
            .choose(&mut *rng)
            .ok_or_else(|| RouletteError::MalformedStatements("empty true pool".into()))?;
        let fake = FALSE_HEADLINES
            .choose(&mut *rng)
            .ok_or_else(|| RouletteError::MalformedStatements("empty false pool".into()))?;

        let mut statements = vec![Statement::new(*real, true), Statement::new(*fake, false)];
        statements.shuffle(&mut *rng);
        Ok(StatementSet::new(statements))
    }
}

impl Default for OfflineProvider {
    fn default() -> Self {
        Self::new(rand::random())
    }
}

impl StatementProvider for OfflineProvider {
    async fn fetch(&self) -> Result<StatementSet> {
        self.draw()
    }
}
