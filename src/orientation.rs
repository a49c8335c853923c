use core::fmt;
use core::str::FromStr;

/// Rotor cross layout selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Arms aligned with the body axes.
    Cross,
    /// Arms yawed on to the diagonals.
    X,
}

/// Error returned when an orientation tag matches neither recognized form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOrientationError;

impl fmt::Display for ParseOrientationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown orientation, expected \"+\", \"cross\" or \"x\"")
    }
}

impl FromStr for Orientation {
    type Err = ParseOrientationError;

    /// Parse an orientation tag: `"+"` or `"cross"` for [`Orientation::Cross`],
    /// `"x"` in either case for [`Orientation::X`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" | "cross" => Ok(Orientation::Cross),
            _ if s.eq_ignore_ascii_case("x") => Ok(Orientation::X),
            _ => Err(ParseOrientationError),
        }
    }
}
