use serde::{Deserialize, Serialize};

/// Axis a scroll gesture travels along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollAxis {
    Horizontal,
    Vertical,
}

/// Physical scroll direction, as issued to the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollDirection {
    Up,
    Down,
    Left,
    Right,
}

impl ScrollDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScrollDirection::Up => "up",
            ScrollDirection::Down => "down",
            ScrollDirection::Left => "left",
            ScrollDirection::Right => "right",
        }
    }
}

/// Maps a physical direction onto the axis it moves along.
///
/// Injected rather than hardcoded so containers with mirrored or rotated
/// layouts can substitute their own mapping without touching the engine.
pub trait DirectionConverter: Send + Sync {
    fn axis_of(&self, direction: ScrollDirection) -> ScrollAxis;
}

/// Standard screen mapping: up/down travel the vertical axis, left/right the
/// horizontal one.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardDirectionConverter;

impl DirectionConverter for StandardDirectionConverter {
    fn axis_of(&self, direction: ScrollDirection) -> ScrollAxis {
        match direction {
            ScrollDirection::Up | ScrollDirection::Down => ScrollAxis::Vertical,
            ScrollDirection::Left | ScrollDirection::Right => ScrollAxis::Horizontal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_directions_map_to_vertical_axis() {
        let converter = StandardDirectionConverter;
        assert_eq!(converter.axis_of(ScrollDirection::Up), ScrollAxis::Vertical);
        assert_eq!(converter.axis_of(ScrollDirection::Down), ScrollAxis::Vertical);
    }

    #[test]
    fn horizontal_directions_map_to_horizontal_axis() {
        let converter = StandardDirectionConverter;
        assert_eq!(
            converter.axis_of(ScrollDirection::Left),
            ScrollAxis::Horizontal
        );
        assert_eq!(
            converter.axis_of(ScrollDirection::Right),
            ScrollAxis::Horizontal
        );
    }

    #[test]
    fn direction_as_str() {
        assert_eq!(ScrollDirection::Down.as_str(), "down");
        assert_eq!(ScrollDirection::Left.as_str(), "left");
    }
}
