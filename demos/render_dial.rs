//! Drives the dial the way a widget host would: once a second, render the current
//! instant for a fixed location and write the SVG out.
//!
//! Usage: render_dial [LATITUDE LONGITUDE] [TICKS] [OUTPUT]

use std::thread;
use std::time::Duration;

use chrono::Utc;
use log::{info, warn};

use sundial::{render, Almanac, Coordinate, Dial, SundialConfig};

fn main() {
    pretty_env_logger::init_timed();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let location = match (args.first(), args.get(1)) {
        (Some(lat), Some(lon)) => match (lat.parse(), lon.parse()) {
            (Ok(lat), Ok(lon)) => Some(Coordinate::new(lat, lon)),
            _ => {
                warn!("could not parse location {:?} {:?}", lat, lon);
                None
            }
        },
        _ => Some(Coordinate::new(51.5, -0.12)),
    };
    let ticks: u32 = args.get(2).and_then(|t| t.parse().ok()).unwrap_or(1);
    let output = args.get(3).cloned().unwrap_or_else(|| "sundial.svg".to_string());

    let config = SundialConfig::default();
    let almanac = Almanac::new();

    for tick in 0..ticks {
        if tick > 0 {
            thread::sleep(Duration::from_secs(1));
        }
        let now = Utc::now();
        match render(&almanac, now, location, &config) {
            Ok(Dial::Ready(scene)) => match scene.save(&output) {
                Ok(()) => info!("tick {}: wrote {}", tick, output),
                Err(e) => warn!("tick {}: {}", tick, e),
            },
            Ok(Dial::Waiting) => println!("{}", Dial::Waiting),
            Err(e) => warn!("tick {}: {}", tick, e),
        }
    }
}
