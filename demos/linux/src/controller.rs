//! Sensor controller: owns the bus-attached TCS34725 and the LED control
//! pin for the process lifetime.

use std::fmt;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::i2c::I2c;
use log::info;
use tcs34725::{calculate_color_temperature, calculate_lux, Tcs34725};

use crate::opts;

/// Controller errors: sensor bus I/O or indicator-pin I/O.
#[derive(Debug, thiserror::Error)]
pub enum TcsError<E, EP> {
    /// Sensor bus error
    #[error("sensor error: {0:?}")]
    Sensor(tcs34725::Error<E>),
    /// LED control pin error
    #[error("LED pin error: {0:?}")]
    Led(EP),
}

impl<E, EP> From<tcs34725::Error<E>> for TcsError<E, EP> {
    fn from(e: tcs34725::Error<E>) -> Self {
        TcsError::Sensor(e)
    }
}

/// One poll result: the four raw channels and the derived values.
///
/// `Display` renders the report line the poller prints, one per poll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    /// Red channel value
    pub red: u16,
    /// Green channel value
    pub green: u16,
    /// Blue channel value
    pub blue: u16,
    /// Clear channel value
    pub clear: u16,
    /// Color temperature in Kelvin; `None` for an all-dark sample
    pub color_temp: Option<f32>,
    /// Luminosity estimate in lux
    pub lux: f32,
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Color: red={} green={} blue={} clear={}, ",
            self.red, self.green, self.blue, self.clear
        )?;
        match self.color_temp {
            Some(temp) => write!(f, "Temperature: {:.1} K, ", temp)?,
            None => write!(f, "Temperature: ---- K, ")?,
        }
        write!(f, "Luminosity: {:.1} lux", self.lux)
    }
}

/// TCS34725 poller: sensor plus the LED control pin on the sensor board.
pub struct Tcs<I2C, D, P> {
    sensor: Tcs34725<I2C, D>,
    led: P,
}

impl<I2C, D, P, E> Tcs<I2C, D, P>
where
    I2C: I2c<Error = E>,
    D: DelayNs,
    P: OutputPin,
{
    /// Open and configure the sensor, then drive the LED pin to its
    /// initial level.
    ///
    /// Option tokens are resolved leniently (see [`crate::opts`]); bus or
    /// pin failures propagate to the caller and are fatal to startup.
    pub fn new(
        i2c: I2C,
        delay: D,
        led: P,
        int_time_opt: &str,
        gain_opt: &str,
        led_on: bool,
    ) -> Result<Self, TcsError<E, P::Error>> {
        let int_time = opts::resolve_integration_time(int_time_opt);
        let gain = opts::resolve_gain(gain_opt);

        info!(
            "Initializing TCS with integration time: {:?}, gain: {:?}",
            int_time, gain
        );

        let mut sensor = Tcs34725::new_with_delay(i2c, delay);
        sensor.init()?;
        sensor.set_integration_time(int_time)?;
        sensor.set_gain(gain)?;
        // Free-running polling only; the sensor's own interrupt engine
        // stays off until shutdown.
        sensor.set_interrupt(false)?;

        let mut tcs = Self { sensor, led };
        if led_on {
            tcs.enable_led()?;
        } else {
            tcs.disable_led()?;
        }
        Ok(tcs)
    }

    /// Turn the sensor board LED on.
    pub fn enable_led(&mut self) -> Result<(), TcsError<E, P::Error>> {
        self.led.set_high().map_err(TcsError::Led)
    }

    /// Turn the sensor board LED off.
    pub fn disable_led(&mut self) -> Result<(), TcsError<E, P::Error>> {
        self.led.set_low().map_err(TcsError::Led)
    }

    /// Read the four raw channels and compute the derived photometric
    /// values from (red, green, blue).
    pub fn read_sensor(&mut self) -> Result<Reading, TcsError<E, P::Error>> {
        let rgbc = self.sensor.read_rgbc_data()?;
        Ok(Reading {
            red: rgbc.red,
            green: rgbc.green,
            blue: rgbc.blue,
            clear: rgbc.clear,
            color_temp: calculate_color_temperature(rgbc.red, rgbc.green, rgbc.blue),
            lux: calculate_lux(rgbc.red, rgbc.green, rgbc.blue),
        })
    }

    /// Forward to the sensor's interrupt-mode configuration.
    pub fn set_interrupt(&mut self, enable: bool) -> Result<(), TcsError<E, P::Error>> {
        Ok(self.sensor.set_interrupt(enable)?)
    }

    /// Put the sensor into low-power sleep.
    pub fn disable(&mut self) -> Result<(), TcsError<E, P::Error>> {
        Ok(self.sensor.disable()?)
    }

    /// Terminal shutdown sequence: interrupt mode on, sensor disabled,
    /// LED off — in that order. There is no path back to polling.
    pub fn shutdown(&mut self) -> Result<(), TcsError<E, P::Error>> {
        self.set_interrupt(true)?;
        self.disable()?;
        self.disable_led()
    }
}
