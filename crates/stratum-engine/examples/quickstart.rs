//! Stratum quickstart: a display driver loop over a layered environment.
//!
//! Demonstrates:
//!   1. Building an RGB environment configuration
//!   2. Binding a data layer (bar cycle) to the green channel
//!   3. Adding a motion layer (horizontal oscillation) and devices
//!   4. Stepping, capturing frames, and reading device positions
//!   5. Implementing a custom data layer
//!
//! Run with:
//!   RUST_LOG=stratum_engine=trace cargo run --example quickstart

use stratum_core::{ChannelId, Coord, Device, ScalarField};
use stratum_engine::{DisplayPolicy, Environment, EnvironmentConfig, Extent, Frame};
use stratum_layers::{BarCycle, HorizontalOscillation};
use tracing_subscriber::EnvFilter;

// ─── Screen parameters ──────────────────────────────────────────

const WIDTH: u32 = 48;
const HEIGHT: u32 = 16;
const TICKS: usize = 6;

// ─── Custom data layer: checkerboard that inverts every tick ────

struct Checker {
    inverted: bool,
}

impl ScalarField for Checker {
    fn name(&self) -> &str {
        "checker"
    }

    fn value_at(&self, at: Coord) -> i32 {
        let dark = (at.x / 4 + at.y / 4) % 2 == 0;
        if dark != self.inverted {
            40
        } else {
            0
        }
    }

    fn step(&mut self) {
        self.inverted = !self.inverted;
    }
}

fn glyph(level: u8) -> char {
    match level {
        0 => ' ',
        1..=63 => '.',
        64..=127 => ':',
        128..=191 => '*',
        _ => '#',
    }
}

fn print_frame(env: &Environment, frame: &Frame) {
    let devices = env.devices();
    for (y, row) in frame.rows().enumerate() {
        let line: String = row
            .iter()
            .enumerate()
            .map(|(x, px)| {
                let here = Coord::new(x as i32, y as i32);
                if devices.iter().any(|d| d.position == here) {
                    '@'
                } else {
                    glyph(px.r.max(px.g))
                }
            })
            .collect();
        println!("|{line}|");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let extent = Extent::new(WIDTH, HEIGHT);
    let mut config = EnvironmentConfig::rgb(extent);

    let checker = config.add_data_layer(Checker { inverted: false });
    config.bind(ChannelId::RED, checker)?;

    // The bar peaks at 255 and falls off by 10 per column.
    let bar = config.add_data_layer(BarCycle::new(0, WIDTH as i32, 0xFF, 0xFF)?);
    config.bind(ChannelId::GREEN, bar)?;

    config.add_motion_layer(HorizontalOscillation::new(extent.mid_row()));
    config.add_device(Device::at((4, 1)));
    config.add_device(Device::moving((20, 14), (1, 0)));

    let mut env = Environment::new(config)?;
    println!("{env:?}");

    for _ in 0..TICKS {
        let metrics = env.step().clone();
        let frame = Frame::capture(&env, DisplayPolicy::Clamp);
        println!(
            "\ntick {} ({} us, {} devices)",
            env.current_tick(),
            metrics.total_us,
            metrics.devices_integrated
        );
        print_frame(&env, &frame);
        for (i, d) in env.devices().iter().enumerate() {
            println!("  device {i}: position {} velocity {}", d.position, d.velocity);
        }
    }

    Ok(())
}
