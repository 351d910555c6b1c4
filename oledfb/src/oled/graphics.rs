use embedded_graphics::{
    draw_target::DrawTarget,
    pixelcolor::BinaryColor,
    prelude::{OriginDimensions, Size},
    Pixel,
};

use super::Framebuffer;

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        Size::new(Self::WIDTH, Self::HEIGHT)
    }
}

/// embedded-graphics seam. Pixels outside the panel are discarded, as the
/// `DrawTarget` contract requires; the native drawing API keeps the hard
/// `OutOfRange` error instead.
impl DrawTarget for Framebuffer {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 {
                continue;
            }
            self.write_pixel(point.x as u32, point.y as u32, color.is_on())
                .ok();
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        Framebuffer::clear(self, if color.is_on() { 0xFF } else { 0x00 });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::{
        prelude::{Point, Primitive},
        primitives::{PrimitiveStyle, Rectangle},
        Drawable,
    };

    use super::*;

    #[test]
    fn styled_rectangle_matches_native_fill() {
        let mut target = Framebuffer::new();
        Rectangle::new(Point::new(12, 30), Size::new(50, 20))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut target)
            .unwrap();

        let mut native = Framebuffer::new();
        native.draw_rect(12, 30, 50, 20, 0, true).unwrap();

        assert_eq!(target.as_bytes(), native.as_bytes());
    }

    #[test]
    fn clear_maps_binary_color_to_fill_pattern() {
        let mut fb = Framebuffer::new();
        DrawTarget::clear(&mut fb, BinaryColor::On).unwrap();
        assert!(fb.as_bytes().iter().all(|&b| b == 0xFF));
        DrawTarget::clear(&mut fb, BinaryColor::Off).unwrap();
        assert!(fb.as_bytes().iter().all(|&b| b == 0x00));
    }

    #[test]
    fn out_of_bounds_pixels_are_discarded() {
        let mut fb = Framebuffer::new();
        fb.draw_iter([
            Pixel(Point::new(-1, 0), BinaryColor::On),
            Pixel(Point::new(0, -5), BinaryColor::On),
            Pixel(Point::new(200, 10), BinaryColor::On),
            Pixel(Point::new(3, 3), BinaryColor::On),
        ])
        .unwrap();
        assert!(fb.pixel(3, 3).unwrap());
        assert_eq!(fb.as_bytes().iter().filter(|&&b| b != 0).count(), 1);
    }
}
