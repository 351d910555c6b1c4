use super::Error;

/// Packed 1-bit framebuffer for a 128x64 monochrome OLED panel.
///
/// The layout matches the SSD1306 page addressing scheme: each byte holds a
/// vertical column of 8 pixels, and the buffer is 8 pages of 128 bytes
/// stacked top to bottom. Pixel (x, y) lives at byte `x + (y / 8) * 128`,
/// bit `y % 8`.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    buf: [u8; Self::BUFFER_SIZE],
}

impl Framebuffer {
    pub const WIDTH: u32 = 128;
    pub const HEIGHT: u32 = 64;
    // TODO: support the 128x32 variant of the panel.
    pub const PAGES: u32 = (Self::HEIGHT + 7) / 8;
    pub const BUFFER_SIZE: usize = (Self::WIDTH * Self::PAGES) as usize;

    pub const fn new() -> Self {
        Framebuffer {
            buf: [0x00; Self::BUFFER_SIZE],
        }
    }

    /// Raw page-major bytes, for handing to the display transfer.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Fills every byte of the buffer with `pattern`.
    ///
    /// `0x00` turns every pixel off and `0xFF` turns every pixel on. Any
    /// other value repeats vertically within each page, producing
    /// horizontal stripes with an 8-row period.
    pub fn clear(&mut self, pattern: u8) {
        self.buf.fill(pattern);
    }

    /// Sets or clears the pixel at (x, y).
    pub fn write_pixel(&mut self, x: u32, y: u32, color: bool) -> Result<(), Error> {
        Self::check(x, y)?;
        let (offset, mask) = Self::locate(x, y);
        if color {
            self.buf[offset] |= mask;
        } else {
            self.buf[offset] &= !mask;
        }
        Ok(())
    }

    /// Reads the pixel at (x, y) back out of the packed buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Result<bool, Error> {
        Self::check(x, y)?;
        let (offset, mask) = Self::locate(x, y);
        Ok(self.buf[offset] & mask != 0)
    }

    /// Draws a horizontal run of `width` pixels starting at (x, y).
    ///
    /// Every pixel of the run shares one page and one bit mask, so both are
    /// computed once and only the byte index varies.
    pub fn draw_h_line(&mut self, x: u32, y: u32, width: u32, color: bool) -> Result<(), Error> {
        if width == 0 {
            return Ok(());
        }
        Self::check_h_run(x, y, width)?;
        let (start, mask) = Self::locate(x, y);
        for offset in start..start + width as usize {
            if color {
                self.buf[offset] |= mask;
            } else {
                self.buf[offset] &= !mask;
            }
        }
        Ok(())
    }

    /// Draws a vertical run of `height` pixels starting at (x, y).
    ///
    /// Successive rows may cross page boundaries, so the page and mask are
    /// recomputed per row.
    pub fn draw_v_line(&mut self, x: u32, y: u32, height: u32, color: bool) -> Result<(), Error> {
        if height == 0 {
            return Ok(());
        }
        Self::check_v_run(x, y, height)?;
        for y_pos in y..y + height {
            let (offset, mask) = Self::locate(x, y_pos);
            if color {
                self.buf[offset] |= mask;
            } else {
                self.buf[offset] &= !mask;
            }
        }
        Ok(())
    }

    /// Draws a rectangle with origin (x, y) and size w x h.
    ///
    /// A positive `outline` draws a border that many pixels thick, measured
    /// inward from the bounding box, and leaves the interior untouched; the
    /// thickness saturates at the smaller dimension. Zero or negative
    /// `outline` fills the whole box, sweeping in whichever direction needs
    /// fewer line calls.
    ///
    /// The bounding box is validated before anything is written, so a
    /// failed call leaves the buffer unchanged.
    pub fn draw_rect(
        &mut self,
        x: u32,
        y: u32,
        w: u32,
        h: u32,
        outline: i32,
        color: bool,
    ) -> Result<(), Error> {
        if w == 0 || h == 0 {
            return Ok(());
        }
        Self::check_h_run(x, y, w)?;
        Self::check_v_run(x, y, h)?;
        if outline > 0 {
            let outline = (outline as u32).min(w).min(h);
            // Top.
            for row in y..y + outline {
                self.draw_h_line(x, row, w, color)?;
            }
            // Bottom.
            for row in (y + h - outline..y + h).rev() {
                self.draw_h_line(x, row, w, color)?;
            }
            // Left.
            for col in x..x + outline {
                self.draw_v_line(col, y, h, color)?;
            }
            // Right.
            for col in (x + w - outline..x + w).rev() {
                self.draw_v_line(col, y, h, color)?;
            }
        } else if w > h {
            // Fewer horizontal lines than vertical ones.
            for row in y..y + h {
                self.draw_h_line(x, row, w, color)?;
            }
        } else {
            for col in x..x + w {
                self.draw_v_line(col, y, h, color)?;
            }
        }
        Ok(())
    }

    // Single source of truth for the page/bit layout. Callers must have
    // bounds-checked (x, y) already.
    fn locate(x: u32, y: u32) -> (usize, u8) {
        let page = y / 8;
        ((x + page * Self::WIDTH) as usize, 1 << (y % 8))
    }

    fn check(x: u32, y: u32) -> Result<(), Error> {
        if x >= Self::WIDTH || y >= Self::HEIGHT {
            Err(Error::OutOfRange { x, y })
        } else {
            Ok(())
        }
    }

    fn check_h_run(x: u32, y: u32, width: u32) -> Result<(), Error> {
        Self::check(x, y)?;
        if width > Self::WIDTH - x {
            return Err(Error::OutOfRange {
                x: x.saturating_add(width) - 1,
                y,
            });
        }
        Ok(())
    }

    fn check_v_run(x: u32, y: u32, height: u32) -> Result<(), Error> {
        Self::check(x, y)?;
        if height > Self::HEIGHT - y {
            return Err(Error::OutOfRange {
                x,
                y: y.saturating_add(height) - 1,
            });
        }
        Ok(())
    }
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}
