use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// Opaque identifier of a card face, in the browser game an image path.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl From<&str> for Symbol {
    fn from(id: &str) -> Self {
        Self(id.into())
    }
}

impl From<String> for Symbol {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub const IMAGE_FOLDER: &str = "images/";

pub const IMAGE_FILES: [&str; 18] = [
    "bash.png",
    "c.png",
    "c%23.png",
    "c++.png",
    "dart.png",
    "go.png",
    "java.png",
    "javascript.png",
    "kotlin.png",
    "matlab.png",
    "perl.png",
    "php.png",
    "python.png",
    "r.png",
    "ruby.png",
    "rust.png",
    "swift.png",
    "typescript.png",
];

/// Ordered, non-empty list of unique symbols cards are dealt from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Symbol>", into = "Vec<Symbol>")]
pub struct SymbolCatalog {
    symbols: Vec<Symbol>,
}

impl SymbolCatalog {
    pub fn new(symbols: Vec<Symbol>) -> Result<Self> {
        if symbols.is_empty() {
            return Err(GameError::EmptyCatalog);
        }

        let mut seen = BTreeSet::new();
        if !symbols.iter().all(|symbol| seen.insert(symbol)) {
            return Err(GameError::DuplicateSymbol);
        }

        Ok(Self { symbols })
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }
}

impl Default for SymbolCatalog {
    fn default() -> Self {
        let symbols = IMAGE_FILES
            .iter()
            .map(|file| {
                let mut path = String::from(IMAGE_FOLDER);
                path.push_str(file);
                Symbol::from(path)
            })
            .collect();
        Self { symbols }
    }
}

impl TryFrom<Vec<Symbol>> for SymbolCatalog {
    type Error = GameError;

    fn try_from(symbols: Vec<Symbol>) -> Result<Self> {
        Self::new(symbols)
    }
}

impl From<SymbolCatalog> for Vec<Symbol> {
    fn from(catalog: SymbolCatalog) -> Self {
        catalog.symbols
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn default_catalog_is_valid() {
        let catalog = SymbolCatalog::default();

        assert_eq!(catalog.len(), IMAGE_FILES.len());
        assert_eq!(catalog.symbols()[0], Symbol::from("images/bash.png"));
        assert_eq!(SymbolCatalog::new(catalog.symbols().to_vec()), Ok(catalog));
    }

    #[test]
    fn empty_catalog_is_refused() {
        assert_eq!(SymbolCatalog::new(vec![]), Err(GameError::EmptyCatalog));
    }

    #[test]
    fn duplicate_symbols_are_refused() {
        let symbols = vec![Symbol::from("a"), Symbol::from("b"), Symbol::from("a")];
        assert_eq!(SymbolCatalog::new(symbols), Err(GameError::DuplicateSymbol));
    }

    #[test]
    fn deserializing_validates_catalog() {
        assert!(serde_json::from_str::<SymbolCatalog>(r#"["x", "x"]"#).is_err());
        assert!(serde_json::from_str::<SymbolCatalog>("[]").is_err());
        let catalog: SymbolCatalog = serde_json::from_str(r#"["x", "y"]"#).unwrap();
        assert_eq!(serde_json::to_string(&catalog).unwrap(), r#"["x","y"]"#);
    }
}
