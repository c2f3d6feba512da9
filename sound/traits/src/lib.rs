use std::{
    fmt::Debug,
    sync::mpsc::{Receiver, Sender},
    time::Duration,
};

mod sounds;
pub use sounds::*;

/// `S` is SFX enum, `E` is Errors
pub type InitResult<S, E> = Result<Sender<SoundAction<S>>, E>;

pub type SndServerRx = Receiver<SoundAction<SfxName>>;
pub type SndServerTx = Sender<SoundAction<SfxName>>;

#[derive(Debug, Clone, PartialEq)]
pub enum SoundAction<S: Debug + Copy> {
    StartSfx {
        /// Objects unique ID. This should be used to track which object owns
        /// which sounds so it can be stopped or replaced.
        uid: usize,
        /// The Sound effect this object has
        sfx: S,
        /// The world XY coords of this object
        x: f32,
        y: f32,
    },
    StopSfx {
        uid: usize,
    },
    StopSfxAll,
    SfxVolume(i32),
    Shutdown,
}

/// A sound server implementing `SoundServer` must also implement `SoundServerTic`
/// typically by a one-liner: `impl SoundServerTic<SfxName, Err> for Snd {}`
pub trait SoundServer<S, E>
where
    S: Debug + Copy,
    E: std::error::Error,
{
    /// Start up and grab the `Sender` channel for cloning.
    fn init(&mut self) -> InitResult<S, E>;

    /// Playback a sound
    fn start_sound(&mut self, uid: usize, sfx: S, x: f32, y: f32);

    /// Stop this sound playback
    fn stop_sound(&mut self, uid: usize);

    fn stop_sound_all(&mut self);

    fn set_sfx_volume(&mut self, volume: i32);

    fn get_sfx_volume(&mut self) -> i32;

    /// Helper function used by the `SoundServerTic` trait
    fn get_rx(&mut self) -> &mut Receiver<SoundAction<S>>;

    /// Stop all sound and release the sound device
    fn shutdown_sound(&mut self);
}

/// Run the `SoundServer`
pub trait SoundServerTic<S, E>
where
    Self: SoundServer<S, E>,
    S: Debug + Copy,
    E: std::error::Error,
{
    /// Will be called every period on a thread containing `SoundServer`, returns
    /// `true` if the thread should continue running, else `false` if it should exit.
    fn tic(&mut self) -> bool {
        if let Ok(sound) = self.get_rx().recv_timeout(Duration::from_micros(500)) {
            match sound {
                SoundAction::StartSfx { uid, sfx, x, y } => self.start_sound(uid, sfx, x, y),
                SoundAction::StopSfx { uid } => self.stop_sound(uid),
                SoundAction::StopSfxAll => self.stop_sound_all(),
                SoundAction::SfxVolume(v) => self.set_sfx_volume(v),
                SoundAction::Shutdown => {
                    self.shutdown_sound();
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use std::{
        error::Error,
        fmt::Display,
        sync::mpsc::{channel, Receiver, Sender},
    };

    use crate::{InitResult, SfxName, SoundAction, SoundServer, SoundServerTic};

    #[derive(Debug)]
    enum FxError {}

    impl Error for FxError {}

    impl Display for FxError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str(&format!("{:?}", self))
        }
    }

    struct Snd {
        rx: Receiver<SoundAction<SfxName>>,
        tx: Sender<SoundAction<SfxName>>,
        started: Vec<(usize, SfxName)>,
        volume: i32,
        shutdown: bool,
    }

    impl Snd {
        fn new() -> Self {
            let (tx, rx) = channel();
            Self {
                rx,
                tx,
                started: Vec::new(),
                volume: 0,
                shutdown: false,
            }
        }
    }

    impl SoundServer<SfxName, FxError> for Snd {
        fn init(&mut self) -> InitResult<SfxName, FxError> {
            Ok(self.tx.clone())
        }

        fn start_sound(&mut self, uid: usize, sfx: SfxName, _x: f32, _y: f32) {
            self.started.push((uid, sfx));
        }

        fn stop_sound(&mut self, uid: usize) {
            self.started.retain(|(u, _)| *u != uid);
        }

        fn stop_sound_all(&mut self) {
            self.started.clear();
        }

        fn set_sfx_volume(&mut self, volume: i32) {
            self.volume = volume;
        }

        fn get_sfx_volume(&mut self) -> i32 {
            self.volume
        }

        fn get_rx(&mut self) -> &mut Receiver<SoundAction<SfxName>> {
            &mut self.rx
        }

        fn shutdown_sound(&mut self) {
            self.shutdown = true;
        }
    }

    impl SoundServerTic<SfxName, FxError> for Snd {}

    #[test]
    fn run_tic() {
        let mut snd = Snd::new();
        let tx = snd.init().unwrap();

        tx.send(SoundAction::StartSfx {
            uid: 123,
            sfx: SfxName::DoorOpen,
            x: 0.3,
            y: 0.3,
        })
        .unwrap();
        tx.send(SoundAction::StartSfx {
            uid: 42,
            sfx: SfxName::DoorCloseBlocked,
            x: 0.3,
            y: 0.3,
        })
        .unwrap();
        tx.send(SoundAction::StopSfx { uid: 123 }).unwrap();
        tx.send(SoundAction::SfxVolume(80)).unwrap();

        for _ in 0..4 {
            assert!(snd.tic());
        }
        assert_eq!(snd.started, vec![(42, SfxName::DoorCloseBlocked)]);
        assert_eq!(snd.get_sfx_volume(), 80);
        assert_eq!(snd.rx.try_iter().count(), 0);

        tx.send(SoundAction::Shutdown).unwrap();
        assert!(!snd.tic());
        assert!(snd.shutdown);
    }

    #[test]
    fn sample_names_are_unique() {
        let mut names: Vec<_> = SfxName::ALL.iter().map(|s| s.sample_name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), SfxName::ALL.len());
    }
}
