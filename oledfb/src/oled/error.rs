use defmt::Format;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
pub enum Error {
    /// A drawing operation would have touched (x, y), which lies outside
    /// the framebuffer. Nothing was written.
    OutOfRange { x: u32, y: u32 },
}
