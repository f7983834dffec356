use std::fmt;

/// One of the two conjugate bases a qubit is prepared or measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Basis {
    /// Z basis, states |0> and |1>. Encoded as 0.
    Rectilinear,
    /// X basis, states |+> and |->. Encoded as 1.
    Diagonal,
}

impl Basis {
    pub fn from_bit(bit: bool) -> Self {
        if bit {
            Basis::Diagonal
        } else {
            Basis::Rectilinear
        }
    }

    pub fn as_u8(self) -> u8 {
        match self {
            Basis::Rectilinear => 0,
            Basis::Diagonal => 1,
        }
    }
}

impl fmt::Display for Basis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}
