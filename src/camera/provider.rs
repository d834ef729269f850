//! Host-side viewport queries.

/// Supplies the rendering host's current surface sizes.
///
/// The camera reads this once at construction; later changes are pushed in
/// through [`Camera2D::on_viewport_resized`](super::Camera2D::on_viewport_resized).
pub trait ViewportProvider {
    /// Viewport size in pixels.
    fn viewport_size(&self) -> (i32, i32);

    /// Physical back-buffer size in pixels, used for letterboxing.
    fn back_buffer_size(&self) -> (i32, i32) {
        self.viewport_size()
    }
}

/// A fixed `(width, height)` viewport.
impl ViewportProvider for (i32, i32) {
    fn viewport_size(&self) -> (i32, i32) {
        *self
    }
}
