use super::types::{MapProjection, Marker, Viewport};

/// Narrow interface to whatever draws the map. Implemented by platform
/// adapters; the projector itself knows nothing about drawing.
pub trait MapRenderer {
    /// Replace the drawn marker set with `markers`, in order.
    fn render_markers(&mut self, markers: &[Marker]);

    fn set_viewport(&mut self, viewport: Viewport);
}

/// Hand a projection to a renderer: markers first, then the viewport.
pub fn publish<R: MapRenderer + ?Sized>(renderer: &mut R, projection: &MapProjection) {
    renderer.render_markers(&projection.markers);
    renderer.set_viewport(projection.viewport);
}
