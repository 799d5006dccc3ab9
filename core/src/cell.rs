use serde::{Deserialize, Serialize};

/// Side owning a claimed square. `X` always moves first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub const fn opponent(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    /// Side to move at the given ply. `X` moves on even plies.
    pub const fn for_ply(ply: usize) -> Self {
        if ply % 2 == 0 { Self::X } else { Self::O }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::O => "O",
        }
    }
}

impl core::fmt::Display for Player {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One square's contents.
pub type Cell = Option<Player>;
