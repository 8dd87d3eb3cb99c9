/// `Op` represents a single operation in a pairwise alignment.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Op {
    /// Gap in the first sequence: only the second sequence advances (v)
    GapFirst,
    /// Gap in the second sequence: only the first sequence advances (^)
    GapSecond,
    /// Both sequences advance (~). The engine does not classify the aligned
    /// pair as match or mismatch; that interpretation belongs to the scoring
    /// scheme that produced the matrix.
    Equivalent,
}

impl Op {
    /// Returns `true` if the operation is represented by a diagonal movement
    /// in the alignment matrix.
    pub fn is_diagonal(&self) -> bool {
        matches!(self, Op::Equivalent)
    }

    /// Returns the symbol representation of the operation.
    pub fn symbol(&self) -> char {
        match self {
            Op::GapFirst => 'v',
            Op::GapSecond => '^',
            Op::Equivalent => '~',
        }
    }

    /// Applies the operation to the given pair of sequence cursors.
    pub fn apply(&self, seq1: &mut usize, seq2: &mut usize) {
        match self {
            Op::GapFirst => *seq2 += 1,
            Op::GapSecond => *seq1 += 1,
            Op::Equivalent => {
                *seq1 += 1;
                *seq2 += 1;
            }
        }
    }
}

impl TryFrom<char> for Op {
    type Error = ();

    /// Tries to convert a character into an `Op`.
    /// Returns an error if the character does not represent a valid operation.
    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'v' => Ok(Op::GapFirst),
            '^' => Ok(Op::GapSecond),
            '~' => Ok(Op::Equivalent),
            _ => Err(()),
        }
    }
}
