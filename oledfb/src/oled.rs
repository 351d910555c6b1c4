mod error;
mod frame_buffer;
mod graphics;

pub use error::Error;
pub use frame_buffer::Framebuffer;
