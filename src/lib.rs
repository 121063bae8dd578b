//! # TCS34725 RGBC Color Sensor Driver
//!
//! This is a platform-agnostic Rust driver for the TCS34725 RGBC color sensor,
//! built using the [`embedded-hal`] traits for I2C communication.
//!
//! The TCS34725 provides:
//! - Individual Red, Green, Blue, and Clear (unfiltered) channels
//! - Programmable gain (1x to 60x)
//! - Programmable integration time (2.4ms to 700ms)
//! - Clear-channel interrupt enable/clear control
//! - I2C interface (address 0x29)
//!
//! ## Features
//!
//! - **High-level API** for RGBC measurements
//! - **Async/await support** with feature gating (optional)
//! - **Configurable gain and integration time**
//! - **Lux calculation** from the color channels
//! - **Color temperature estimation** (McCamy's approximation)
//! - **Power management** with low-power sleep
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tcs34725::{Gain, IntegrationTime, Tcs34725};
//! use embedded_hal::i2c::I2c;
//!
//! # fn main() {
//! # let i2c = embedded_hal_mock::eh1::i2c::Mock::new(&[]);
//! # let delay = embedded_hal_mock::eh1::delay::NoopDelay;
//! let mut sensor = Tcs34725::new_with_delay(i2c, delay);
//!
//! // Verify the device ID and power the sensor up
//! sensor.init().unwrap();
//!
//! // Configure measurement settings
//! sensor.set_integration_time(IntegrationTime::Ms50).unwrap();
//! sensor.set_gain(Gain::X4).unwrap();
//!
//! // Read all four channels in one block read
//! // let rgbc = sensor.read_rgbc_data().unwrap();
//! // println!("R: {} G: {} B: {} C: {}", rgbc.red, rgbc.green, rgbc.blue, rgbc.clear);
//!
//! // Derive photometric values from the color channels
//! // let lux = tcs34725::calculate_lux(rgbc.red, rgbc.green, rgbc.blue);
//! # }
//! ```
//!
//! ## Async Usage
//!
//! Enable the `async` feature to use async/await patterns:
//!
//! ```toml
//! [dependencies]
//! tcs34725 = { version = "0.1", features = ["async"] }
//! ```
//!
//! The async API mirrors the blocking one with `_async`-suffixed methods
//! over [`embedded-hal-async`] I2C implementations.
//!
//! [`embedded-hal`]: https://crates.io/crates/embedded-hal
//! [`embedded-hal-async`]: https://crates.io/crates/embedded-hal-async

#![no_std]
#![deny(missing_docs)]

use embedded_hal::i2c::I2c;

#[cfg(feature = "async")]
use embedded_hal_async::i2c::I2c as AsyncI2c;

/// I2C address of the TCS34725 sensor
pub const I2C_ADDRESS: u8 = 0x29;

/// Part number of the TCS34725 (ID register contents)
pub const DEVICE_ID_TCS34725: u8 = 0x44;
/// Part number of the TCS34727 variant, accepted as compatible
pub const DEVICE_ID_TCS34727: u8 = 0x4D;

/// RGBC integration time settings
///
/// The register value is `256 - (time_ms / 2.4)`; longer integration times
/// gather more light per cycle at the cost of update rate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum IntegrationTime {
    /// 2.4ms integration time (1 cycle, max count 1024)
    Ms2_4 = 0xFF,
    /// 24ms integration time (10 cycles)
    Ms24 = 0xF6,
    /// 50ms integration time (21 cycles)
    Ms50 = 0xEB,
    /// 101ms integration time (43 cycles)
    Ms101 = 0xD5,
    /// 154ms integration time (64 cycles)
    Ms154 = 0xC0,
    /// 700ms integration time (256 cycles, max count 65535)
    Ms700 = 0x00,
}

/// RGBC analog gain settings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Gain {
    /// 1x gain
    X1 = 0b00,
    /// 4x gain
    X4 = 0b01,
    /// 16x gain
    X16 = 0b10,
    /// 60x gain
    X60 = 0b11,
}

/// Raw RGBC measurement data
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbcData {
    /// Red channel value
    pub red: u16,
    /// Green channel value
    pub green: u16,
    /// Blue channel value
    pub blue: u16,
    /// Clear (unfiltered) channel value
    pub clear: u16,
}

/// All possible errors in this crate
#[derive(Debug)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Error<E> {
    /// I2C communication error
    I2c(E),
    /// Invalid device ID detected
    InvalidDeviceId {
        /// Expected device ID
        expected: u8,
        /// Found device ID
        found: u8,
    },
}

// Register addresses (accessed through the command bit)
const COMMAND_BIT: u8 = 0x80;
const COMMAND_AUTO_INCREMENT: u8 = 0x20;
const ENABLE: u8 = 0x00;
const ATIME: u8 = 0x01;
const CONTROL: u8 = 0x0F;
const ID: u8 = 0x12;
const STATUS: u8 = 0x13;
const CDATAL: u8 = 0x14;

// ENABLE register bits
const ENABLE_PON: u8 = 0x01;
const ENABLE_AEN: u8 = 0x02;
const ENABLE_AIEN: u8 = 0x10;

// STATUS register bits
const STATUS_AVALID: u8 = 0x01;

// Special function: clear the channel interrupt
const SF_CLEAR_INTERRUPT: u8 = 0x66;

/// High-level TCS34725 driver
pub struct Tcs34725<I2C, Delay = ()> {
    i2c: I2C,
    delay: Delay,
}

impl<I2C, E> Tcs34725<I2C, ()>
where
    I2C: I2c<Error = E>,
{
    /// Create a new TCS34725 driver instance without delay support
    ///
    /// Power-up ([`init`](Tcs34725::init)) requires a delay provider; use
    /// [`new_with_delay`](Tcs34725::new_with_delay) for a fully functional
    /// instance.
    pub fn new(i2c: I2C) -> Self {
        Self { i2c, delay: () }
    }
}

impl<I2C, E, Delay> Tcs34725<I2C, Delay>
where
    I2C: I2c<Error = E>,
    Delay: embedded_hal::delay::DelayNs,
{
    /// Create a new TCS34725 driver instance with delay support
    pub fn new_with_delay(i2c: I2C, delay: Delay) -> Self {
        Self { i2c, delay }
    }

    /// Initialize the sensor: verify the device ID and power it up
    pub fn init(&mut self) -> Result<(), Error<E>> {
        let id = self.read_register(ID)?;
        if id != DEVICE_ID_TCS34725 && id != DEVICE_ID_TCS34727 {
            return Err(Error::InvalidDeviceId {
                expected: DEVICE_ID_TCS34725,
                found: id,
            });
        }

        self.enable()
    }

    /// Power the oscillator up and enable the RGBC ADCs
    ///
    /// The datasheet requires a 2.4ms warm-up between PON and AEN.
    pub fn enable(&mut self) -> Result<(), Error<E>> {
        self.write_register(ENABLE, ENABLE_PON)?;
        self.delay.delay_ms(3);
        self.write_register(ENABLE, ENABLE_PON | ENABLE_AEN)
    }
}

impl<I2C, E, Delay> Tcs34725<I2C, Delay>
where
    I2C: I2c<Error = E>,
{
    /// Set the RGBC integration time
    pub fn set_integration_time(&mut self, time: IntegrationTime) -> Result<(), Error<E>> {
        self.write_register(ATIME, time as u8)
    }

    /// Set the RGBC analog gain
    pub fn set_gain(&mut self, gain: Gain) -> Result<(), Error<E>> {
        self.write_register(CONTROL, gain as u8)
    }

    /// Enable or disable the RGBC clear-channel interrupt
    pub fn set_interrupt(&mut self, enable: bool) -> Result<(), Error<E>> {
        let mut ctrl = self.read_register(ENABLE)?;
        if enable {
            ctrl |= ENABLE_AIEN;
        } else {
            ctrl &= !ENABLE_AIEN;
        }
        self.write_register(ENABLE, ctrl)
    }

    /// Clear a pending channel interrupt (special function command)
    pub fn clear_interrupt(&mut self) -> Result<(), Error<E>> {
        self.i2c
            .write(I2C_ADDRESS, &[COMMAND_BIT | SF_CLEAR_INTERRUPT])
            .map_err(Error::I2c)
    }

    /// Check whether an RGBC integration cycle has completed since AEN
    pub fn is_data_valid(&mut self) -> Result<bool, Error<E>> {
        let status = self.read_register(STATUS)?;
        Ok((status & STATUS_AVALID) != 0)
    }

    /// Read raw RGBC data using a block read for channel coherency
    pub fn read_rgbc_data(&mut self) -> Result<RgbcData, Error<E>> {
        // Auto-increment block read from CDATAL: clear, red, green, blue,
        // each as a little-endian u16.
        let mut data = [0u8; 8];
        self.i2c
            .write_read(
                I2C_ADDRESS,
                &[COMMAND_BIT | COMMAND_AUTO_INCREMENT | CDATAL],
                &mut data,
            )
            .map_err(Error::I2c)?;

        Ok(RgbcData {
            clear: u16::from_le_bytes([data[0], data[1]]),
            red: u16::from_le_bytes([data[2], data[3]]),
            green: u16::from_le_bytes([data[4], data[5]]),
            blue: u16::from_le_bytes([data[6], data[7]]),
        })
    }

    /// Put the sensor back into low-power sleep
    ///
    /// Clears PON and AEN; other ENABLE bits (such as the interrupt enable)
    /// are left as configured.
    pub fn disable(&mut self) -> Result<(), Error<E>> {
        let ctrl = self.read_register(ENABLE)?;
        self.write_register(ENABLE, ctrl & !(ENABLE_PON | ENABLE_AEN))
    }

    /// Get the device part number from the ID register
    pub fn get_device_id(&mut self) -> Result<u8, Error<E>> {
        self.read_register(ID)
    }

    /// Destroy the driver and return the I2C interface
    pub fn destroy(self) -> I2C {
        self.i2c
    }

    // Helper methods for register access
    fn read_register(&mut self, address: u8) -> Result<u8, Error<E>> {
        let mut buffer = [0u8; 1];
        self.i2c
            .write_read(I2C_ADDRESS, &[COMMAND_BIT | address], &mut buffer)
            .map_err(Error::I2c)?;
        Ok(buffer[0])
    }

    fn write_register(&mut self, address: u8, value: u8) -> Result<(), Error<E>> {
        self.i2c
            .write(I2C_ADDRESS, &[COMMAND_BIT | address, value])
            .map_err(Error::I2c)
    }
}

/// Calculate color temperature in Kelvin from the color channels
///
/// Maps the raw channels to CIE XYZ, derives the chromaticity coordinates
/// and applies McCamy's approximation. Returns `None` for an all-dark
/// sample, where the chromaticity math degenerates.
pub fn calculate_color_temperature(r: u16, g: u16, b: u16) -> Option<f32> {
    if r == 0 && g == 0 && b == 0 {
        return None;
    }

    let r = f32::from(r);
    let g = f32::from(g);
    let b = f32::from(b);

    // Map RGB counts to CIE XYZ
    let x = -0.14282 * r + 1.54924 * g - 0.95641 * b;
    let y = -0.32466 * r + 1.57837 * g - 0.73191 * b;
    let z = -0.68202 * r + 0.77073 * g + 0.56332 * b;

    let sum = x + y + z;
    if sum == 0.0 {
        return None;
    }

    // Chromaticity coordinates
    let xc = x / sum;
    let yc = y / sum;

    // McCamy's approximation for CCT
    let n = (xc - 0.3320) / (0.1858 - yc);
    Some(449.0 * libm::powf(n, 3.0) + 3525.0 * libm::powf(n, 2.0) + 6823.3 * n + 5520.33)
}

/// Calculate an illuminance estimate in lux from the color channels
///
/// This is the CIE Y (luminance) component of the same RGB-to-XYZ mapping
/// used for the color temperature.
pub fn calculate_lux(r: u16, g: u16, b: u16) -> f32 {
    -0.32466 * f32::from(r) + 1.57837 * f32::from(g) - 0.73191 * f32::from(b)
}

#[cfg(feature = "async")]
impl<I2C, E> Tcs34725<I2C, ()>
where
    I2C: AsyncI2c<Error = E>,
{
    /// Create a new TCS34725 driver instance without delay support (async version)
    pub fn new_async(i2c: I2C) -> Self {
        Self { i2c, delay: () }
    }
}

#[cfg(feature = "async")]
impl<I2C, E, Delay> Tcs34725<I2C, Delay>
where
    I2C: AsyncI2c<Error = E>,
    Delay: embedded_hal_async::delay::DelayNs,
{
    /// Create a new TCS34725 driver instance with delay support (async version)
    pub fn new_async_with_delay(i2c: I2C, delay: Delay) -> Self {
        Self { i2c, delay }
    }

    /// Initialize the sensor: verify the device ID and power it up (async version)
    pub async fn init_async(&mut self) -> Result<(), Error<E>> {
        let id = self.read_register_async(ID).await?;
        if id != DEVICE_ID_TCS34725 && id != DEVICE_ID_TCS34727 {
            return Err(Error::InvalidDeviceId {
                expected: DEVICE_ID_TCS34725,
                found: id,
            });
        }

        self.enable_async().await
    }

    /// Power the oscillator up and enable the RGBC ADCs (async version)
    pub async fn enable_async(&mut self) -> Result<(), Error<E>> {
        self.write_register_async(ENABLE, ENABLE_PON).await?;
        self.delay.delay_ms(3).await;
        self.write_register_async(ENABLE, ENABLE_PON | ENABLE_AEN)
            .await
    }
}

#[cfg(feature = "async")]
impl<I2C, E, Delay> Tcs34725<I2C, Delay>
where
    I2C: AsyncI2c<Error = E>,
{
    /// Set the RGBC integration time (async version)
    pub async fn set_integration_time_async(
        &mut self,
        time: IntegrationTime,
    ) -> Result<(), Error<E>> {
        self.write_register_async(ATIME, time as u8).await
    }

    /// Set the RGBC analog gain (async version)
    pub async fn set_gain_async(&mut self, gain: Gain) -> Result<(), Error<E>> {
        self.write_register_async(CONTROL, gain as u8).await
    }

    /// Enable or disable the RGBC clear-channel interrupt (async version)
    pub async fn set_interrupt_async(&mut self, enable: bool) -> Result<(), Error<E>> {
        let mut ctrl = self.read_register_async(ENABLE).await?;
        if enable {
            ctrl |= ENABLE_AIEN;
        } else {
            ctrl &= !ENABLE_AIEN;
        }
        self.write_register_async(ENABLE, ctrl).await
    }

    /// Clear a pending channel interrupt (async version)
    pub async fn clear_interrupt_async(&mut self) -> Result<(), Error<E>> {
        self.i2c
            .write(I2C_ADDRESS, &[COMMAND_BIT | SF_CLEAR_INTERRUPT])
            .await
            .map_err(Error::I2c)
    }

    /// Check whether an RGBC integration cycle has completed (async version)
    pub async fn is_data_valid_async(&mut self) -> Result<bool, Error<E>> {
        let status = self.read_register_async(STATUS).await?;
        Ok((status & STATUS_AVALID) != 0)
    }

    /// Read raw RGBC data using a block read for channel coherency (async version)
    pub async fn read_rgbc_data_async(&mut self) -> Result<RgbcData, Error<E>> {
        let mut data = [0u8; 8];
        self.i2c
            .write_read(
                I2C_ADDRESS,
                &[COMMAND_BIT | COMMAND_AUTO_INCREMENT | CDATAL],
                &mut data,
            )
            .await
            .map_err(Error::I2c)?;

        Ok(RgbcData {
            clear: u16::from_le_bytes([data[0], data[1]]),
            red: u16::from_le_bytes([data[2], data[3]]),
            green: u16::from_le_bytes([data[4], data[5]]),
            blue: u16::from_le_bytes([data[6], data[7]]),
        })
    }

    /// Put the sensor back into low-power sleep (async version)
    pub async fn disable_async(&mut self) -> Result<(), Error<E>> {
        let ctrl = self.read_register_async(ENABLE).await?;
        self.write_register_async(ENABLE, ctrl & !(ENABLE_PON | ENABLE_AEN))
            .await
    }

    /// Get the device part number from the ID register (async version)
    pub async fn get_device_id_async(&mut self) -> Result<u8, Error<E>> {
        self.read_register_async(ID).await
    }

    // Helper methods for async register access
    async fn read_register_async(&mut self, address: u8) -> Result<u8, Error<E>> {
        let mut buffer = [0u8; 1];
        self.i2c
            .write_read(I2C_ADDRESS, &[COMMAND_BIT | address], &mut buffer)
            .await
            .map_err(Error::I2c)?;
        Ok(buffer[0])
    }

    async fn write_register_async(&mut self, address: u8, value: u8) -> Result<(), Error<E>> {
        self.i2c
            .write(I2C_ADDRESS, &[COMMAND_BIT | address, value])
            .await
            .map_err(Error::I2c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
    extern crate std;
    use std::vec;

    #[test]
    fn test_device_creation() {
        let expectations = [];
        let i2c = I2cMock::new(&expectations);
        let sensor = Tcs34725::new(i2c);
        let mut i2c = sensor.destroy();
        i2c.done();
    }

    #[test]
    fn test_device_id_read() {
        let expectations = [I2cTransaction::write_read(
            I2C_ADDRESS,
            vec![COMMAND_BIT | ID],
            vec![DEVICE_ID_TCS34725],
        )];
        let i2c = I2cMock::new(&expectations);
        let mut sensor = Tcs34725::new(i2c);

        assert_eq!(sensor.get_device_id().unwrap(), 0x44);

        let mut i2c = sensor.destroy();
        i2c.done();
    }

    #[test]
    fn test_init_powers_up_after_id_check() {
        let expectations = [
            I2cTransaction::write_read(
                I2C_ADDRESS,
                vec![COMMAND_BIT | ID],
                vec![DEVICE_ID_TCS34725],
            ),
            I2cTransaction::write(I2C_ADDRESS, vec![COMMAND_BIT | ENABLE, ENABLE_PON]),
            I2cTransaction::write(
                I2C_ADDRESS,
                vec![COMMAND_BIT | ENABLE, ENABLE_PON | ENABLE_AEN],
            ),
        ];
        let i2c = I2cMock::new(&expectations);
        let mut sensor = Tcs34725::new_with_delay(i2c, NoopDelay);

        sensor.init().unwrap();

        let mut i2c = sensor.destroy();
        i2c.done();
    }

    #[test]
    fn test_init_rejects_unknown_device_id() {
        let expectations = [I2cTransaction::write_read(
            I2C_ADDRESS,
            vec![COMMAND_BIT | ID],
            vec![0x99],
        )];
        let i2c = I2cMock::new(&expectations);
        let mut sensor = Tcs34725::new_with_delay(i2c, NoopDelay);

        match sensor.init() {
            Err(Error::InvalidDeviceId { expected, found }) => {
                assert_eq!(expected, DEVICE_ID_TCS34725);
                assert_eq!(found, 0x99);
            }
            _ => panic!("expected InvalidDeviceId"),
        }

        let mut i2c = sensor.destroy();
        i2c.done();
    }

    #[test]
    fn test_set_integration_time() {
        let expectations = [I2cTransaction::write(
            I2C_ADDRESS,
            vec![COMMAND_BIT | ATIME, 0xEB],
        )];
        let i2c = I2cMock::new(&expectations);
        let mut sensor = Tcs34725::new(i2c);

        sensor.set_integration_time(IntegrationTime::Ms50).unwrap();

        let mut i2c = sensor.destroy();
        i2c.done();
    }

    #[test]
    fn test_set_gain() {
        let expectations = [I2cTransaction::write(
            I2C_ADDRESS,
            vec![COMMAND_BIT | CONTROL, 0x03],
        )];
        let i2c = I2cMock::new(&expectations);
        let mut sensor = Tcs34725::new(i2c);

        sensor.set_gain(Gain::X60).unwrap();

        let mut i2c = sensor.destroy();
        i2c.done();
    }

    #[test]
    fn test_set_interrupt_toggles_aien() {
        let expectations = [
            // Enabling sets AIEN on top of the current ENABLE contents
            I2cTransaction::write_read(
                I2C_ADDRESS,
                vec![COMMAND_BIT | ENABLE],
                vec![ENABLE_PON | ENABLE_AEN],
            ),
            I2cTransaction::write(
                I2C_ADDRESS,
                vec![COMMAND_BIT | ENABLE, ENABLE_PON | ENABLE_AEN | ENABLE_AIEN],
            ),
            // Disabling clears only AIEN
            I2cTransaction::write_read(
                I2C_ADDRESS,
                vec![COMMAND_BIT | ENABLE],
                vec![ENABLE_PON | ENABLE_AEN | ENABLE_AIEN],
            ),
            I2cTransaction::write(
                I2C_ADDRESS,
                vec![COMMAND_BIT | ENABLE, ENABLE_PON | ENABLE_AEN],
            ),
        ];
        let i2c = I2cMock::new(&expectations);
        let mut sensor = Tcs34725::new(i2c);

        sensor.set_interrupt(true).unwrap();
        sensor.set_interrupt(false).unwrap();

        let mut i2c = sensor.destroy();
        i2c.done();
    }

    #[test]
    fn test_clear_interrupt_special_function() {
        let expectations = [I2cTransaction::write(
            I2C_ADDRESS,
            vec![COMMAND_BIT | SF_CLEAR_INTERRUPT],
        )];
        let i2c = I2cMock::new(&expectations);
        let mut sensor = Tcs34725::new(i2c);

        sensor.clear_interrupt().unwrap();

        let mut i2c = sensor.destroy();
        i2c.done();
    }

    #[test]
    fn test_read_rgbc_data_block_read() {
        let expectations = [I2cTransaction::write_read(
            I2C_ADDRESS,
            vec![COMMAND_BIT | COMMAND_AUTO_INCREMENT | CDATAL],
            vec![0xDA, 0x00, 0x41, 0x00, 0x4E, 0x00, 0x53, 0x00],
        )];
        let i2c = I2cMock::new(&expectations);
        let mut sensor = Tcs34725::new(i2c);

        let rgbc = sensor.read_rgbc_data().unwrap();
        assert_eq!(
            rgbc,
            RgbcData {
                red: 65,
                green: 78,
                blue: 83,
                clear: 218,
            }
        );

        let mut i2c = sensor.destroy();
        i2c.done();
    }

    #[test]
    fn test_read_rgbc_data_wide_values() {
        // High bytes must land in the upper half of each channel
        let expectations = [I2cTransaction::write_read(
            I2C_ADDRESS,
            vec![COMMAND_BIT | COMMAND_AUTO_INCREMENT | CDATAL],
            vec![0xFF, 0xFF, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06],
        )];
        let i2c = I2cMock::new(&expectations);
        let mut sensor = Tcs34725::new(i2c);

        let rgbc = sensor.read_rgbc_data().unwrap();
        assert_eq!(rgbc.clear, 0xFFFF);
        assert_eq!(rgbc.red, 0x0201);
        assert_eq!(rgbc.green, 0x0403);
        assert_eq!(rgbc.blue, 0x0605);

        let mut i2c = sensor.destroy();
        i2c.done();
    }

    #[test]
    fn test_disable_preserves_interrupt_enable() {
        let expectations = [
            I2cTransaction::write_read(
                I2C_ADDRESS,
                vec![COMMAND_BIT | ENABLE],
                vec![ENABLE_PON | ENABLE_AEN | ENABLE_AIEN],
            ),
            I2cTransaction::write(I2C_ADDRESS, vec![COMMAND_BIT | ENABLE, ENABLE_AIEN]),
        ];
        let i2c = I2cMock::new(&expectations);
        let mut sensor = Tcs34725::new(i2c);

        sensor.disable().unwrap();

        let mut i2c = sensor.destroy();
        i2c.done();
    }

    #[test]
    fn test_is_data_valid() {
        let expectations = [
            I2cTransaction::write_read(I2C_ADDRESS, vec![COMMAND_BIT | STATUS], vec![0x00]),
            I2cTransaction::write_read(
                I2C_ADDRESS,
                vec![COMMAND_BIT | STATUS],
                vec![STATUS_AVALID],
            ),
        ];
        let i2c = I2cMock::new(&expectations);
        let mut sensor = Tcs34725::new(i2c);

        assert!(!sensor.is_data_valid().unwrap());
        assert!(sensor.is_data_valid().unwrap());

        let mut i2c = sensor.destroy();
        i2c.done();
    }

    #[test]
    fn test_calculate_lux_known_value() {
        let lux = calculate_lux(50, 100, 50);
        // -0.32466 * 50 + 1.57837 * 100 - 0.73191 * 50
        assert!((lux - 105.0085).abs() < 1e-3);
    }

    #[test]
    fn test_calculate_color_temperature_neutral_sample() {
        let cct = calculate_color_temperature(100, 100, 100).unwrap();
        assert!(cct > 8800.0 && cct < 8950.0, "cct = {}", cct);
    }

    #[test]
    fn test_color_temperature_red_is_warmer_than_blue() {
        let warm = calculate_color_temperature(200, 100, 50).unwrap();
        let cool = calculate_color_temperature(50, 100, 200).unwrap();
        assert!(warm < cool, "warm = {}, cool = {}", warm, cool);
    }

    #[test]
    fn test_calculate_color_temperature_dark_sample() {
        assert_eq!(calculate_color_temperature(0, 0, 0), None);
    }
}
