//! Ball colors.
//!
//! Colors are opaque 1-based ids. A level with `n` colors uses
//! `Color(1)..=Color(n)`; how they are painted is the UI's business.
//!
//! ```
//! use ball_sort::core::Color;
//!
//! let palette: Vec<_> = Color::palette(3).collect();
//! assert_eq!(palette, vec![Color(1), Color(2), Color(3)]);
//! ```

use serde::{Deserialize, Serialize};

/// Color of a single ball.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Color(pub u8);

impl Color {
    /// Create a new color.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw color id.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Iterate over the colors used by a level with `count` colors.
    pub fn palette(count: u8) -> impl Iterator<Item = Color> {
        (1..=count).map(Color)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
