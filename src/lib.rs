//! Driver for the Maxim MAX6950/MAX6951 LED display drivers, built on the
//! `embedded-hal` [`SpiDevice`] trait.
//!
//! The chip is a write-only 3-wire device: each command clocks 16 bits,
//! address byte then data byte, while chip select is held low.

#![no_std]

mod constants;
mod decompose;

pub use constants::*;
pub use decompose::{ipow10, CodeBDigits};

use embedded_hal::spi::SpiDevice;
use num_traits::ToPrimitive;

/// Digit register block written by a display operation.
///
/// The chip keeps two planes of digit data and alternates between them
/// while blinking is enabled; `Both` updates the two planes in one command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Plane {
    P0 = 0x20,
    P1 = 0x40,
    Both = 0x60,
}

impl Plane {
    /// Register address of `digit` within this plane's block.
    pub fn digit_register(self, digit: u8) -> Option<u8> {
        if digit >= MAX_DIGITS {
            return None;
        }
        Some(self as u8 + digit)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlinkMode {
    Disabled,
    Slow,
    Fast,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayMode {
    Test,
    Normal,
}

/// Packs the configuration register fields into a data byte. Bit D1 is
/// reserved and must be written as 0, so no field maps to it.
pub fn pack_configuration(
    normal_operation: bool,
    reset_data: bool,
    blink_rate_fast: bool,
    blink_enable: bool,
    blink_timing_reset: bool,
) -> u8 {
    let mut data = 0;
    if normal_operation {
        data |= register::configuration::NORMAL_OPERATION;
    }
    if reset_data {
        data |= register::configuration::RESET_DATA;
    }
    if blink_rate_fast {
        data |= register::configuration::BLINK_RATE_FAST;
    }
    if blink_enable {
        data |= register::configuration::BLINK_ENABLE;
    }
    if blink_timing_reset {
        data |= register::configuration::BLINK_TIMING_RESET;
    }
    data
}

pub struct Max6951<SPI> {
    pub spi: SPI,
    num_digits: u8,
}

impl<SPI, E> Max6951<SPI>
where
    SPI: SpiDevice<Error = E>,
{
    pub fn new(spi: SPI) -> Self {
        Self {
            spi,
            num_digits: MAX_DIGITS,
        }
    }

    pub fn destroy(self) -> SPI {
        self.spi
    }

    pub fn init(&mut self, intensity: u8) -> Result<(), Max6951Error<E>> {
        self.set_display_mode(DisplayMode::Normal)?;
        self.set_num_digits(MAX_DIGITS)?;
        self.set_decode_mode(0)?;
        self.clear_digit_data()?;
        self.set_intensity(intensity)?;
        // The configuration writes above leave the operation-mode bit
        // clear, so shutdown must be exited last.
        self.set_shutdown(false)?;
        Ok(())
    }

    /// Enters or leaves shutdown. The part powers up shut down; digit data
    /// and the other control registers survive shutdown, blink settings in
    /// the configuration register do not.
    pub fn set_shutdown(&mut self, shutdown: bool) -> Result<(), Max6951Error<E>> {
        let data = pack_configuration(!shutdown, false, false, false, false);
        self.write_register(register::CONFIGURATION, data)
    }

    pub fn set_blink_mode(&mut self, blink_mode: BlinkMode) -> Result<(), Max6951Error<E>> {
        let data = match blink_mode {
            BlinkMode::Disabled => pack_configuration(false, false, false, false, false),
            BlinkMode::Slow => pack_configuration(false, false, false, true, false),
            BlinkMode::Fast => pack_configuration(false, false, true, true, false),
        };
        self.write_register(register::CONFIGURATION, data)
    }

    /// Clears all digit data in planes P0 and P1.
    pub fn clear_digit_data(&mut self) -> Result<(), Max6951Error<E>> {
        let data = pack_configuration(false, true, false, false, false);
        self.write_register(register::CONFIGURATION, data)
    }

    pub fn set_display_mode(&mut self, display_mode: DisplayMode) -> Result<(), Max6951Error<E>> {
        let data = match display_mode {
            DisplayMode::Normal => register::display_test::NORMAL_OPERATION,
            DisplayMode::Test => register::display_test::TEST_MODE,
        };
        self.write_register(register::DISPLAY_TEST, data)
    }

    /// Sets how many digits are scanned, 1 to 8.
    ///
    /// Scanning fewer digits raises each digit's drive duty cycle, so this
    /// also alters apparent brightness. A MAX6950 next to a MAX6951 can be
    /// brightness-matched by giving both the same digit count, even though
    /// the 6950 only drives five digits.
    pub fn set_num_digits(&mut self, digits: u8) -> Result<(), Max6951Error<E>> {
        if digits < 1 || digits > MAX_DIGITS {
            return Err(Max6951Error::InvalidArgument);
        }
        // 1 digit = 0x00, 2 digits = 0x01, ..., 8 digits = 0x07.
        self.write_register(register::SCAN_LIMIT, digits - 1)?;
        self.num_digits = digits;
        Ok(())
    }

    /// There are 16 intensity steps of typically 2.5mA segment current
    /// each; 0xE and 0xF give the same current.
    pub fn set_intensity(&mut self, intensity: u8) -> Result<(), Max6951Error<E>> {
        if intensity > MAX_INTENSITY {
            return Err(Max6951Error::InvalidArgument);
        }
        self.write_register(register::INTENSITY, intensity)
    }

    /// Enables hex/Code-B decoding for the digits set in `digits_mask`,
    /// one bit per digit position, e.g. `(1 << 0) | (1 << 2)` for the
    /// first and third digits.
    pub fn set_decode_mode(&mut self, digits_mask: u8) -> Result<(), Max6951Error<E>> {
        if digits_mask > MAX_DECODE_MASK {
            return Err(Max6951Error::InvalidArgument);
        }
        self.write_register(register::DECODE_MODE, digits_mask)
    }

    /// Writes one digit register. `value` is a Code-B index or a raw
    /// 4-bit segment value depending on the digit's decode mode; OR in
    /// [`DP`] to light the decimal point in either mode.
    pub fn display_digit(
        &mut self,
        plane: Plane,
        digit: u8,
        value: u8,
    ) -> Result<(), Max6951Error<E>> {
        let register = plane
            .digit_register(digit)
            .ok_or(Max6951Error::InvalidArgument)?;
        if (value & !(0x0F | DP)) != 0 {
            return Err(Max6951Error::InvalidArgument);
        }
        self.write_register(register, value)
    }

    /// Renders `number` in decimal across the scanned digits, hyphen
    /// first when negative, most significant digit at position 0.
    ///
    /// The written positions must have Code-B decoding enabled. Fails if
    /// the number does not fit the digit count set by [`set_num_digits`].
    ///
    /// [`set_num_digits`]: Max6951::set_num_digits
    pub fn display_number<T>(&mut self, plane: Plane, number: T) -> Result<(), Max6951Error<E>>
    where
        T: ToPrimitive,
    {
        let value = number.to_i32().ok_or(Max6951Error::InvalidArgument)?;
        let codes = CodeBDigits::fit(value, self.num_digits).ok_or(Max6951Error::InvalidArgument)?;
        for (digit, code) in codes.enumerate() {
            let register = plane
                .digit_register(digit as u8)
                .ok_or(Max6951Error::InvalidArgument)?;
            self.write_register(register, code)?;
        }
        Ok(())
    }

    /// Writes text as raw segment patterns starting at digit 0, stopping
    /// at the scanned digit count. Characters without a glyph render
    /// blank. The written positions must have decoding disabled.
    pub fn display_ascii(&mut self, plane: Plane, bytes: &[u8]) -> Result<(), Max6951Error<E>> {
        let mut digit = 0;
        for c in bytes {
            let segment_data = match c {
                b'0'..=b'9' => NUMBERS[(c - b'0') as usize],
                b'a'..=b'z' => LETTERS[(c - b'a') as usize],
                b'A'..=b'Z' => LETTERS[(c - b'A') as usize],
                b'-' => SEG_MINUS,
                _ => 0,
            };
            let register = plane
                .digit_register(digit)
                .ok_or(Max6951Error::InvalidArgument)?;
            self.write_register(register, segment_data)?;
            digit += 1;
            if digit >= self.num_digits {
                break;
            }
        }
        Ok(())
    }

    fn write_register(&mut self, register: u8, data: u8) -> Result<(), Max6951Error<E>> {
        self.spi.write(&[register, data])?;
        Ok(())
    }
}

#[derive(Clone, Copy, Debug)]
pub enum Max6951Error<E> {
    SpiError(E),
    InvalidArgument,
}

impl<E> From<E> for Max6951Error<E> {
    fn from(error: E) -> Self {
        Max6951Error::SpiError(error)
    }
}
