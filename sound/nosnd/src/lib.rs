//! A sound server with no output device. Every request is written to the
//! log instead, which is all a headless simulation needs.

use std::{
    collections::HashMap,
    error::Error,
    fmt::Display,
    sync::mpsc::{channel, Receiver},
};

use log::{debug, info};

use sound_traits::{
    InitResult, SfxName, SndServerRx, SndServerTx, SoundAction, SoundServer, SoundServerTic,
};

pub struct Snd {
    rx: SndServerRx,
    tx: SndServerTx,
    /// Last effect started per owner, so a stop can report what it cut off
    playing: HashMap<usize, SfxName>,
    sfx_vol: i32,
    started: usize,
}

impl Snd {
    pub fn new(sfx_vol: i32) -> Result<Self, Box<dyn Error>> {
        let (tx, rx) = channel();
        Ok(Self {
            rx,
            tx,
            playing: HashMap::new(),
            sfx_vol,
            started: 0,
        })
    }

    /// Count of effects started since creation
    pub fn started(&self) -> usize {
        self.started
    }
}

#[derive(Debug)]
pub enum SndError {
    None,
}

impl Display for SndError {
    fn fmt(&self, _: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Ok(())
    }
}

impl std::error::Error for SndError {}

impl SoundServer<SfxName, SndError> for Snd {
    fn init(&mut self) -> InitResult<SfxName, SndError> {
        Ok(self.tx.clone())
    }

    fn start_sound(&mut self, uid: usize, sfx: SfxName, x: f32, y: f32) {
        info!(
            "sfx {} from {uid} at ({x:.1}, {y:.1}) vol {}",
            sfx.sample_name(),
            self.sfx_vol
        );
        self.playing.insert(uid, sfx);
        self.started += 1;
    }

    fn stop_sound(&mut self, uid: usize) {
        if let Some(sfx) = self.playing.remove(&uid) {
            debug!("stopped {} from {uid}", sfx.sample_name());
        }
    }

    fn stop_sound_all(&mut self) {
        self.playing.clear();
    }

    fn set_sfx_volume(&mut self, volume: i32) {
        self.sfx_vol = volume;
    }

    fn get_sfx_volume(&mut self) -> i32 {
        self.sfx_vol
    }

    fn get_rx(&mut self) -> &mut Receiver<SoundAction<SfxName>> {
        &mut self.rx
    }

    fn shutdown_sound(&mut self) {
        info!("Shutdown sound server");
        self.stop_sound_all();
    }
}

impl SoundServerTic<SfxName, SndError> for Snd {}
