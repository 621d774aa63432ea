//! The four lines a move can complete.

use serde::{Deserialize, Serialize};

/// One of the four axes along which a win line is checked.
///
/// Variant order is the priority order used by win detection.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Axis {
    /// Left to right.
    #[display("horizontal")]
    Horizontal,
    /// Top to bottom.
    #[display("vertical")]
    Vertical,
    /// Top-left to bottom-right.
    #[display("left diagonal")]
    LeftDiagonal,
    /// Bottom-left to top-right.
    #[display("right diagonal")]
    RightDiagonal,
}

impl Axis {
    /// All axes in detection priority order.
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::LeftDiagonal,
        Axis::RightDiagonal,
    ];

    /// Unit step `(d_row, d_col)` towards the start of a line on this axis.
    pub fn backward(self) -> (isize, isize) {
        match self {
            Axis::Horizontal => (0, -1),
            Axis::Vertical => (-1, 0),
            Axis::LeftDiagonal => (-1, -1),
            Axis::RightDiagonal => (1, -1),
        }
    }

    /// Unit step `(d_row, d_col)` towards the end of a line on this axis.
    pub fn forward(self) -> (isize, isize) {
        let (d_row, d_col) = self.backward();
        (-d_row, -d_col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_all_matches_declaration_order() {
        assert_eq!(Axis::iter().collect::<Vec<_>>(), Axis::ALL.to_vec());
    }

    #[test]
    fn test_forward_is_opposite_of_backward() {
        for axis in Axis::ALL {
            let (br, bc) = axis.backward();
            let (fr, fc) = axis.forward();
            assert_eq!((br + fr, bc + fc), (0, 0), "{axis}");
        }
    }
}
