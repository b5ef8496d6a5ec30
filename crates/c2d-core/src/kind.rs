// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::str::FromStr;

use crate::error::ColliderError;

/// Shape kind of a collider.
///
/// The set is closed: dispatch matches on pairs of kinds exhaustively.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ColliderKind {
    /// Axis-aligned bounding box.
    Box,
    /// Bounding circle.
    Circle,
    /// Pixel-exact coverage of the rendered artwork.
    Alpha,
}

impl ColliderKind {
    /// All kinds, in table order.
    pub const ALL: [Self; 3] = [Self::Box, Self::Circle, Self::Alpha];

    /// Stable lowercase tag (`"box"`, `"circle"`, `"alpha"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Box => "box",
            Self::Circle => "circle",
            Self::Alpha => "alpha",
        }
    }
}

impl fmt::Display for ColliderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColliderKind {
    type Err = ColliderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "box" => Ok(Self::Box),
            "circle" => Ok(Self::Circle),
            "alpha" => Ok(Self::Alpha),
            other => Err(ColliderError::UnknownKind(other.to_owned())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip() {
        for kind in ColliderKind::ALL {
            assert_eq!(kind.as_str().parse::<ColliderKind>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_tag_is_rejected() {
        assert_eq!(
            "polygon".parse::<ColliderKind>(),
            Err(ColliderError::UnknownKind("polygon".into()))
        );
        assert!("Box".parse::<ColliderKind>().is_err());
    }
}
