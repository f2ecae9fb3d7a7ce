//! Heliotrope simulator binary
//!
//! Wires the simulated world to the tracking core and plays the host:
//! one driver step per scheduling tick, one world integration after it,
//! status board rendered along the way. Runs the configured number of
//! exploration passes with the sun drifting between them, then exits.

use std::env;
use std::fs;

use anyhow::{bail, Context};
use log::{debug, info};

use heliotrope_core::array::SolarArray;
use heliotrope_core::driver::StepDriver;
use heliotrope_core::status::StatusBoard;

use heliotrope_sim::config::{SimConfig, EMBEDDED_CONFIG};
use heliotrope_sim::world::SimWorld;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config()?;
    if let Err(error) = config.tracker.validate() {
        bail!("invalid tracker configuration: {error:?}");
    }

    let world = SimWorld::new(&config.world);
    let status = StatusBoard::new();
    let array = SolarArray::from_config(
        &config.tracker,
        world.rotor_handle(),
        world.hinge_handle(),
        world.panels(),
        status.clone(),
    );

    info!(
        "tracker up: orientation {}, output {:.3} MW, sun at azimuth {:.1}°, elevation {:.1}°",
        array.current_orientation(),
        array.total_output_mw(),
        world.sun.borrow().azimuth_deg,
        world.sun.borrow().elevation_deg,
    );

    let mut driver = StepDriver::new();
    driver.install(array.explore_neighbors());

    let mut passes_done = 0;
    while passes_done < config.world.explore_passes {
        status.bump_iteration();
        let more_work = driver.step();
        world.tick();
        debug!("{}", status.render());

        if !more_work {
            passes_done += 1;
            info!(
                "pass {passes_done} done after {} iterations: orientation {}, output {:.3} MW",
                status.iteration(),
                array.current_orientation(),
                array.total_output_mw(),
            );
            if passes_done < config.world.explore_passes {
                world.drift_sun();
                driver.install(array.explore_neighbors());
            }
        }
    }

    Ok(())
}

/// Load the TOML document named on the command line, or fall back to
/// the embedded default.
fn load_config() -> anyhow::Result<SimConfig> {
    let config = match env::args().nth(1) {
        Some(path) => {
            info!("loading configuration from {path}");
            let text = fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
            SimConfig::from_toml(&text).with_context(|| format!("parsing {path}"))?
        }
        None => SimConfig::from_toml(EMBEDDED_CONFIG).context("parsing embedded configuration")?,
    };
    Ok(config)
}
