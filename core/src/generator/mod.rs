use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;
pub use random::*;

mod random;

/// Source of uniform permutations used when dealing.
pub trait Shuffler {
    fn shuffle(&mut self, symbols: &mut [Symbol]);
}

/// Leaves the order untouched, dealing the catalog front to back in pairs.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct IdentityShuffler;

impl Shuffler for IdentityShuffler {
    fn shuffle(&mut self, _symbols: &mut [Symbol]) {}
}

/// Positional symbol assignment of every card on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    symbols: Vec<Symbol>,
}

impl Deck {
    /// Deals `config.needed_pairs()` pairs from `catalog`, repeating the catalog when it is too small.
    pub fn deal(
        catalog: &SymbolCatalog,
        config: &GameConfig,
        shuffler: &mut dyn Shuffler,
    ) -> Result<Self> {
        config.validate()?;
        let needed_pairs = usize::from(config.needed_pairs());

        let mut pool = catalog.symbols().to_vec();
        if needed_pairs > pool.len() {
            log::warn!(
                "Catalog too small, repeating it, requested {} pairs but only has {} symbols",
                needed_pairs,
                catalog.len()
            );
            while pool.len() < needed_pairs {
                pool.extend_from_slice(catalog.symbols());
            }
        }

        shuffler.shuffle(&mut pool);
        pool.truncate(needed_pairs);

        let mut symbols: Vec<Symbol> = pool
            .into_iter()
            .flat_map(|symbol| [symbol.clone(), symbol])
            .collect();
        shuffler.shuffle(&mut symbols);

        log::debug!(
            "Dealt {} cards for a {}x{} board",
            symbols.len(),
            config.size,
            config.size
        );
        Ok(Self { symbols })
    }

    /// Builds a deck from an explicit layout, every symbol must occur an even number of times.
    pub fn from_symbols(symbols: Vec<Symbol>) -> Result<Self> {
        if symbols.is_empty() || symbols.len() % 2 != 0 || symbols.len() > usize::from(CardCount::MAX)
        {
            return Err(GameError::InvalidLayout);
        }

        let mut counts: BTreeMap<&Symbol, usize> = BTreeMap::new();
        for symbol in &symbols {
            *counts.entry(symbol).or_default() += 1;
        }
        if counts.values().any(|count| count % 2 != 0) {
            return Err(GameError::InvalidLayout);
        }

        Ok(Self { symbols })
    }

    pub fn total_cards(&self) -> CardCount {
        // bounded by `total_cards_for` or checked in `from_symbols`
        self.symbols.len() as CardCount
    }

    pub fn symbol_at(&self, index: CardIndex) -> Option<&Symbol> {
        self.symbols.get(usize::from(index))
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }
}
