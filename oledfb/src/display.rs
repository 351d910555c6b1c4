use core::fmt::Debug;

/// Transfer seam between the renderer and the physical panel.
///
/// An implementation consumes one full frame of page-major framebuffer
/// bytes per refresh cycle. It must not retain the slice.
pub trait FrameSink {
    type Error: Debug;

    fn write_frame(&mut self, frame: &[u8]) -> Result<(), Self::Error>;
}
