use serde::{Deserialize, Serialize};

use crate::Symbol;

/// Canonical per-card state stored by the engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardState {
    FaceDown,
    FaceUp,
    Matched,
}

impl CardState {
    /// Whether the card can still be flipped by a selection.
    pub const fn is_selectable(self) -> bool {
        matches!(self, Self::FaceDown)
    }
}

impl Default for CardState {
    fn default() -> Self {
        Self::FaceDown
    }
}

/// Player-visible card, the symbol is only present once the card has been revealed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardView {
    Hidden,
    Revealed(Symbol),
    Matched(Symbol),
}

impl CardView {
    pub(crate) fn new(state: CardState, symbol: &Symbol) -> Self {
        match state {
            CardState::FaceDown => Self::Hidden,
            CardState::FaceUp => Self::Revealed(symbol.clone()),
            CardState::Matched => Self::Matched(symbol.clone()),
        }
    }

    pub fn symbol(&self) -> Option<&Symbol> {
        match self {
            Self::Hidden => None,
            Self::Revealed(symbol) | Self::Matched(symbol) => Some(symbol),
        }
    }

    pub const fn is_hidden(&self) -> bool {
        matches!(self, Self::Hidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_down_view_carries_no_symbol() {
        let symbol = Symbol::from("images/rust.png");

        assert_eq!(CardView::new(CardState::FaceDown, &symbol), CardView::Hidden);
        assert_eq!(CardView::new(CardState::FaceDown, &symbol).symbol(), None);
        assert_eq!(
            CardView::new(CardState::Matched, &symbol).symbol(),
            Some(&symbol)
        );
    }

    #[test]
    fn hidden_view_serializes_without_symbol() {
        let json = serde_json::to_string(&CardView::Hidden).unwrap();
        assert_eq!(json, "\"Hidden\"");
    }
}
