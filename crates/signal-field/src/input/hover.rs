use glam::Vec2;

/// The particle a hit test resolved, with its display attributes.
/// Cloned out of the field so the tooltip layer owns its copy.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverTarget {
    /// Index in the field's fixed enumeration order.
    pub index: usize,
    pub label: String,
    pub count: u32,
}

/// Ephemeral hover state published for a tooltip overlay.
/// `pointer` keeps the raw viewport coordinates so the tooltip can be
/// positioned next to the cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct Hover {
    pub target: HoverTarget,
    pub pointer: Vec2,
}
