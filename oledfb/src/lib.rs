//! Monochrome framebuffer renderer for SSD1306-style 128x64 OLED panels.

#![no_std]

pub mod display;
pub mod oled;
