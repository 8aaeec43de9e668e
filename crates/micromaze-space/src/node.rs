//! Per-node state of the wall grid.

/// State of a single wall-grid node.
///
/// Wall segments are `Open` or `Wall`. Cell centers are `Open`, except the
/// start and end cells which carry `Start` and `End` for the whole session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum NodeState {
    /// Nothing known to block this node.
    #[default]
    Open = 0,
    /// A detected (or border) wall.
    Wall = 1,
    /// The start cell.
    Start = 2,
    /// The goal cell.
    End = 3,
}

impl NodeState {
    /// Anything but `Wall` can be travelled through.
    pub const fn is_passable(self) -> bool {
        !matches!(self, NodeState::Wall)
    }
}
