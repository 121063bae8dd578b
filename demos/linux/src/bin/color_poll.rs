//! Poll a TCS34725 color sensor and print the raw channels plus derived
//! color temperature and luminosity at a fixed cadence.
//!
//! Expects the sensor on `/dev/i2c-1` and the sensor board's LED control
//! pin wired to a `gpiochip0` line (BCM numbering on a Raspberry Pi).
//! Runs until interrupted with Ctrl+C, then powers the sensor down and
//! turns the LED off.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use clap::Parser;
use linux_embedded_hal::gpio_cdev::{Chip, LineRequestFlags};
use linux_embedded_hal::{CdevPin, Delay, I2cdev};
use log::info;
use tcs34725_linux_demos::Tcs;

#[derive(Parser, Debug)]
#[command(about = "Poll a TCS34725 color sensor and print derived photometric values")]
struct Args {
    /// Integration time in ms; valid options: 2.4, 24, 50, 101, 154, 700
    #[arg(short = 'i', long = "integration_time", default_value = "50")]
    integration_time: String,

    /// Analog gain; valid options: 1, 4, 16, 60
    #[arg(short = 'g', long = "gain", default_value = "4")]
    gain: String,

    /// GPIO line wired to the sensor board's LED control
    #[arg(short = 'l', long = "led_ctrl_pin", default_value_t = 26)]
    led_ctrl_pin: u32,

    /// Turn off the LED on the sensor board at startup
    #[arg(short = 'd', long = "led_disable")]
    led_disable: bool,

    /// Time interval between color measurements in seconds
    #[arg(short = 't', long = "time_interval", default_value_t = 0.1)]
    time_interval: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let running = Arc::new(AtomicBool::new(true));
    let stop = running.clone();
    ctrlc::set_handler(move || stop.store(false, Ordering::SeqCst))?;

    let i2c = I2cdev::new("/dev/i2c-1")?;

    let mut chip = Chip::new("/dev/gpiochip0")?;
    let led_line = chip
        .get_line(args.led_ctrl_pin)?
        .request(LineRequestFlags::OUTPUT, 0, "tcs34725-led")?;
    let led = CdevPin::new(led_line)?;

    info!(
        "TCS LED control pin: {}, initial state: {}",
        args.led_ctrl_pin,
        if args.led_disable { "off" } else { "on" }
    );

    let mut tcs = Tcs::new(
        i2c,
        Delay,
        led,
        &args.integration_time,
        &args.gain,
        !args.led_disable,
    )?;

    let interval = Duration::from_secs_f64(args.time_interval);
    while running.load(Ordering::SeqCst) {
        println!("{}", tcs.read_sensor()?);

        // Re-check before pausing so an interrupt that arrived during the
        // read goes straight to shutdown.
        if !running.load(Ordering::SeqCst) {
            break;
        }
        thread::sleep(interval);
    }

    info!("Disabling sensor...");
    tcs.shutdown()?;
    info!("Done!");

    Ok(())
}
