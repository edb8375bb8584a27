use std::fmt;
use std::str::FromStr;

use crate::ActionError;

/// The nine named places a view can snap to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapSlot {
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
    TopLeft,
    Center,
}

impl SnapSlot {
    pub const ALL: [SnapSlot; 9] = [
        SnapSlot::Top,
        SnapSlot::TopRight,
        SnapSlot::Right,
        SnapSlot::BottomRight,
        SnapSlot::Bottom,
        SnapSlot::BottomLeft,
        SnapSlot::Left,
        SnapSlot::TopLeft,
        SnapSlot::Center,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SnapSlot::Top => "top",
            SnapSlot::TopRight => "top_right",
            SnapSlot::Right => "right",
            SnapSlot::BottomRight => "bottom_right",
            SnapSlot::Bottom => "bottom",
            SnapSlot::BottomLeft => "bottom_left",
            SnapSlot::Left => "left",
            SnapSlot::TopLeft => "top_left",
            SnapSlot::Center => "center",
        }
    }
}

impl FromStr for SnapSlot {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SnapSlot::ALL
            .into_iter()
            .find(|slot| slot.as_str() == s)
            .ok_or_else(|| ActionError::InvalidSnapLocation {
                location: s.to_owned(),
            })
    }
}

impl fmt::Display for SnapSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
