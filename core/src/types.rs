/// Side length of the square board.
pub type Coord = u8;

/// Count type used for card and pair counts.
pub type CardCount = u16;

/// Stable position of a card on the board, `0..total_cards`.
pub type CardIndex = u16;

pub const fn squared(size: Coord) -> CardCount {
    let size = size as CardCount;
    size.saturating_mul(size)
}

/// Number of cards dealt for a board of `size * size` cells, rounded up to an even count so every card has a pair.
pub const fn total_cards_for(size: Coord) -> CardCount {
    let cells = squared(size);
    if cells % 2 != 0 { cells + 1 } else { cells }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_squares_are_kept() {
        assert_eq!(total_cards_for(2), 4);
        assert_eq!(total_cards_for(4), 16);
        assert_eq!(total_cards_for(8), 64);
    }

    #[test]
    fn odd_squares_are_bumped_to_even() {
        assert_eq!(total_cards_for(1), 2);
        assert_eq!(total_cards_for(3), 10);
        assert_eq!(total_cards_for(5), 26);
        assert_eq!(total_cards_for(Coord::MAX), 65026);
    }
}
