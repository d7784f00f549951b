//! Capability interface the host map widget exposes to the layer.

use velocity_common::{GeoBounds, Viewport};

/// What the layer needs from its host map widget: the visible region and
/// the canvas rectangle it may draw on.
///
/// The host forwards its own pan/zoom/resize notifications as
/// [`HostEvent`]s through [`WindLayer::handle_event`]; callback
/// registration stays on the host side, so the layer holds no event state
/// of its own.
///
/// [`WindLayer::handle_event`]: crate::layer::WindLayer::handle_event
pub trait MapHost {
    /// Geographic edges of the currently visible map area, degrees.
    fn visible_bounds(&self) -> GeoBounds;

    /// Current canvas rectangle in pixels.
    fn viewport(&self) -> Viewport;
}

/// View-change notifications forwarded by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// The map was panned.
    Moved,
    /// The zoom level changed.
    Zoomed,
    /// The canvas was resized.
    Resized,
}
