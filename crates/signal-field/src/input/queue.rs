/// Pointer event types the renderer understands.
/// Coordinates are viewport-space; the runner converts to surface-local
/// space using the recorded surface origin.
#[derive(Debug, Clone, Copy)]
pub enum PointerEvent {
    /// The cursor moved to viewport coordinates (x, y).
    Moved { x: f32, y: f32 },
    /// The cursor left the surface.
    Left,
}

/// A queue of pointer events.
/// The host writes events into the queue; the runner drains them each frame.
pub struct PointerQueue {
    events: Vec<PointerEvent>,
}

impl PointerQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new pointer event (called from the host's event handler).
    pub fn push(&mut self, event: PointerEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<PointerEvent> {
        std::mem::take(&mut self.events)
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for PointerQueue {
    fn default() -> Self {
        Self::new()
    }
}
