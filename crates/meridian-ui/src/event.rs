use meridian_engine::coords::Vec2;

/// Pointer events routed through the widget tree.
///
/// `PointerDown` is delivered until a widget consumes it. `PointerMove`,
/// `PointerUp` and `PointerLeave` reach every widget unless consumed, so a
/// pressed widget learns about a release or exit even when the pointer is no
/// longer over it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiEvent {
    /// Primary button pressed at `pos`.
    PointerDown { pos: Vec2 },
    /// Primary button released at `pos`.
    PointerUp { pos: Vec2 },
    /// Pointer moved to `pos`.
    PointerMove { pos: Vec2 },
    /// Pointer left the surface entirely.
    PointerLeave,
}

/// Result returned by [`Widget::on_event`](crate::Widget::on_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled; stop routing.
    Consumed,
    /// Keep routing.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}
