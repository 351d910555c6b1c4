#![no_std]
#![no_main]

use cortex_m::delay::Delay;
use defmt_rtt as _;
use fugit::RateExtU32;
use oledfb::{display::FrameSink, oled::Framebuffer};
use panic_probe as _;
use rp2040_hal::{
    clocks::init_clocks_and_plls,
    entry,
    gpio::{FunctionI2C, Pin, Pins, PullUp},
    pac, Sio, Watchdog, I2C,
};
use ssd1306::I2CDisplayInterface;

use crate::oled::Oled;

mod oled;

#[link_section = ".boot2"]
#[used]
pub static BOOT2: [u8; 256] = rp2040_boot2::BOOT_LOADER_W25Q080;

const XOSC_CRYSTAL_FREQ: u32 = 12_000_000;
const FRAME_INTERVAL_MS: u32 = 500;

#[entry]
fn main() -> ! {
    defmt::info!("Launching oledfb-pico");

    let mut pac = pac::Peripherals::take().unwrap();
    let core = pac::CorePeripherals::take().unwrap();
    // The single-cycle I/O block controls our GPIO pins
    let sio = Sio::new(pac.SIO);
    let pins = Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );
    // Set up the watchdog driver - needed by the clock setup code
    let mut watchdog = Watchdog::new(pac.WATCHDOG);
    // The default is to generate a 125 MHz system clock
    let clocks = init_clocks_and_plls(
        XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();
    let mut delay = Delay::new(core.SYST, clocks.system_clock.freq().to_Hz());

    let sda_pin: Pin<_, FunctionI2C, PullUp> = pins.gpio16.reconfigure();
    let scl_pin: Pin<_, FunctionI2C, PullUp> = pins.gpio17.reconfigure();
    let i2c = I2C::i2c0(
        pac.I2C0,
        sda_pin,
        scl_pin,
        400.kHz(),
        &mut pac.RESETS,
        &clocks.system_clock,
    );
    let mut oled = Oled::new(I2CDisplayInterface::new(i2c)).unwrap();

    let mut frame = Framebuffer::new();
    frame.clear(0x00);
    frame.draw_rect(0, 0, 127, 63, 2, true).unwrap();

    loop {
        if let Err(e) = oled.write_frame(frame.as_bytes()) {
            defmt::warn!("Failed to write frame: {}", defmt::Debug2Format(&e));
        }
        delay.delay_ms(FRAME_INTERVAL_MS);
    }
}
