/// Horizontal placement of a control inside its layout slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalAlignment {
    Left,
    Center,
    Right,
    #[default]
    Stretch,
}

/// Vertical placement of a control inside its layout slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAlignment {
    Top,
    Center,
    Bottom,
    #[default]
    Stretch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Row,
    #[default]
    Column,
}

/// How a plain container positions its children after a structural change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutStrategy {
    /// Children keep the positions the application gave them.
    #[default]
    Manual,
    /// Children are placed one after another along the direction, separated by
    /// the container's spacing.
    Stack(Direction),
}

/// What happens to the hover state when the pointer leaves a pressed control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverPolicy {
    /// Leave fires as soon as the pointer exits, pressed or not.
    #[default]
    Track,
    /// Leave is held back until the press is released.
    HoldWhilePressed,
}
