use display_interface::{DisplayError, WriteOnlyDataCommand};
use oledfb::{display::FrameSink, oled::Framebuffer};
use ssd1306::{
    command::AddrMode, mode::BasicMode, rotation::DisplayRotation, size::DisplaySize128x64,
    Ssd1306,
};

/// SSD1306 panel in basic mode, fed raw page-major frames straight from
/// the renderer.
pub struct Oled<DI: WriteOnlyDataCommand>(Ssd1306<DI, DisplaySize128x64, BasicMode>);

impl<DI: WriteOnlyDataCommand> Oled<DI> {
    pub fn new(interface: DI) -> Result<Self, DisplayError> {
        let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0);
        display.init_with_addr_mode(AddrMode::Horizontal)?;
        display.set_draw_area(
            (0, 0),
            (Framebuffer::WIDTH as u8, Framebuffer::HEIGHT as u8),
        )?;
        Ok(Oled(display))
    }
}

impl<DI: WriteOnlyDataCommand> FrameSink for Oled<DI> {
    type Error = DisplayError;

    fn write_frame(&mut self, frame: &[u8]) -> Result<(), Self::Error> {
        self.0.draw(frame)
    }
}
