//! Headless door simulation. Runs one scripted scenario against a level,
//! logging every door change and printing the replicated snapshot bytes.

mod cli;
mod config;
mod scenario;
mod timestep;

use cli::*;
use mimalloc::MiMalloc;
use simplelog::TermLogger;
use sound_traits::{SoundAction, SoundServer, SoundServerTic};
use std::error::Error;
use std::thread;
use std::time::Duration;

use crate::config::UserConfig;
use crate::scenario::Runner;
use crate::timestep::TimeStep;
use gameplay::{log, Level};

use crate::log::{info, warn};

const BASE_DIR: &str = "doorsim/";

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> Result<(), Box<dyn Error>> {
    let mut options: CLIOptions = argh::from_env();

    TermLogger::init(
        options.verbose.unwrap_or(log::LevelFilter::Info),
        simplelog::ConfigBuilder::default()
            .set_time_level(log::LevelFilter::Trace)
            .build(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let mut user_config = match UserConfig::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!("Could not load user config, using defaults: {e}");
            UserConfig::default()
        }
    };
    user_config.sync_cli(&mut options);
    if let Err(e) = user_config.write() {
        warn!("Could not save user config: {e}");
    }

    let mut snd = sound_nosnd::Snd::new(user_config.sfx_vol)?;
    let snd_tx = snd.init()?;
    let snd_thread = thread::spawn(move || {
        loop {
            if !snd.tic() {
                break;
            }
        }
        snd.started()
    });

    let level = Level::new(snd_tx.clone(), user_config.door);
    let mut runner = Runner::new(
        level,
        options.scenario,
        user_config.facing.vector(),
        user_config.tic_ms,
        user_config.snapshots,
    );

    let tics = if options.tics == 0 {
        options.scenario.default_tics()
    } else {
        options.tics
    };
    info!(
        "Running {:?} for {tics} tics of {}ms",
        options.scenario, user_config.tic_ms
    );

    if user_config.realtime {
        let mut timestep = TimeStep::new(user_config.tic_ms);
        let mut result = Ok(());
        while runner.current_tic() < tics && result.is_ok() {
            timestep.run_this(|| {
                if result.is_ok() && runner.current_tic() < tics {
                    result = runner.tic();
                }
            });
            if let Some(rate) = timestep.tic_rate() {
                log::debug!("{rate}, {} total", timestep.run_tics());
            }
            thread::sleep(Duration::from_millis(1));
        }
        result?;
    } else {
        runner.run(tics)?;
    }

    for door in runner.level().doors() {
        info!(
            "Door {} finished {:?} at {:.0} deg after {}ms",
            door.id(),
            door.state(),
            door.orientation().degrees(),
            runner.level().level_time
        );
    }

    info!(
        "{} door changes, {} chat messages",
        runner.history().len(),
        runner.messages().len()
    );

    if log::max_level() >= log::LevelFilter::Debug {
        coarse_prof::write(&mut std::io::stdout())?;
    }

    snd_tx.send(SoundAction::Shutdown)?;
    match snd_thread.join() {
        Ok(started) => info!("{started} sounds played"),
        Err(_) => warn!("Sound thread panicked"),
    }
    Ok(())
}
