//! Grid cell tags

/// What occupies a grid cell
///
/// A closed set: a cell holds at most one tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Cell {
    #[default]
    Empty = 0,
    Player = 1,
    Invader = 2,
    Missile = 3,
}

impl Cell {
    /// All tags, in glyph-table order
    pub const ALL: [Cell; 4] = [Cell::Empty, Cell::Player, Cell::Invader, Cell::Missile];

    /// Index into tables keyed by tag
    pub fn index(self) -> usize {
        self as usize
    }

    /// Check if the cell holds nothing
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_table_order() {
        for (i, cell) in Cell::ALL.iter().enumerate() {
            assert_eq!(cell.index(), i);
        }
    }

    #[test]
    fn test_default_is_empty() {
        assert!(Cell::default().is_empty());
        assert!(!Cell::Missile.is_empty());
    }
}
