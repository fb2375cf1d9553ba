use std::collections::HashMap;
use std::hash::Hash;

use crate::huffman::SymbolWeight;

/// Counts occurrences per distinct symbol, remembering the order in which
/// symbols were first seen.
pub struct SymbolCounter<S> {
    positions: HashMap<S, usize>,
    symbol_frequencies: Vec<(S, usize)>,
}

impl<S: Eq + Hash + Clone> SymbolCounter<S> {
    pub fn new() -> Self {
        Self {
            positions: HashMap::new(),
            symbol_frequencies: Vec::new(),
        }
    }

    pub fn increment_symbol(&mut self, symbol: S) {
        match self.positions.get(&symbol) {
            Some(&position) => self.symbol_frequencies[position].1 += 1,
            None => {
                self.positions
                    .insert(symbol.clone(), self.symbol_frequencies.len());
                self.symbol_frequencies.push((symbol, 1));
            }
        }
    }

    pub fn to_symbol_weights(&self) -> Vec<SymbolWeight<S>> {
        self.symbol_frequencies
            .iter()
            .map(|(symbol, frequency)| SymbolWeight::new(symbol.clone(), *frequency as f64))
            .collect()
    }
}

impl<S: Eq + Hash + Clone> Default for SymbolCounter<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Eq + Hash + Clone> FromIterator<S> for SymbolCounter<S> {
    fn from_iter<T: IntoIterator<Item = S>>(symbols: T) -> Self {
        let mut counter = Self::new();
        for symbol in symbols {
            counter.increment_symbol(symbol);
        }
        counter
    }
}

pub fn build_alphabet<S, I>(symbols: I) -> Vec<SymbolWeight<S>>
where
    S: Eq + Hash + Clone,
    I: IntoIterator<Item = S>,
{
    let counter: SymbolCounter<S> = symbols.into_iter().collect();
    let alphabet = counter.to_symbol_weights();
    log::debug!("Alphabet with {} distinct symbols built", alphabet.len());
    alphabet
}

/// Builds the alphabet of a text, one symbol per unicode scalar value.
pub fn alphabet_from_text(text: &str) -> Vec<SymbolWeight<char>> {
    build_alphabet(text.chars())
}
