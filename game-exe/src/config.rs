//! User configuration options.

use crate::{cli::Facing, CLIOptions, BASE_DIR};
use dirs::config_dir;
use gameplay::log::{info, warn};
use gameplay::DoorTuning;
use serde::{Deserialize, Serialize};
use std::{
    error::Error,
    fs::{create_dir_all, File, OpenOptions},
    io::{self, Read, Write},
    path::PathBuf,
};

const LOG_TAG: &str = "UserConfig";

fn get_cfg_file() -> io::Result<PathBuf> {
    let mut dir = config_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("{LOG_TAG}: Couldn't find user config dir"),
        )
    })?;
    dir.push(BASE_DIR);
    if !dir.exists() {
        create_dir_all(&dir)?;
    }
    dir.push("user.toml");
    Ok(dir)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    pub sfx_vol: i32,
    pub tic_ms: u32,
    pub realtime: bool,
    pub snapshots: bool,
    pub facing: Facing,
    /// Handed to every door the level spawns
    pub door: DoorTuning,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            sfx_vol: 80,
            tic_ms: 50,
            realtime: false,
            snapshots: true,
            facing: Facing::default(),
            door: DoorTuning::default(),
        }
    }
}

impl UserConfig {
    /// Read the config, creating it with defaults if missing or unreadable
    pub fn load() -> Result<Self, Box<dyn Error>> {
        let path = get_cfg_file()?;

        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)?;
        let mut buf = String::new();
        if let Ok(read_len) = file.read_to_string(&mut buf) {
            if read_len == 0 {
                return UserConfig::create_default(&mut file);
            } else {
                match toml::from_str(&buf) {
                    Ok(data) => {
                        info!(target: LOG_TAG, "Loaded user config file");
                        return Ok(data);
                    }
                    Err(e) => warn!("Could not deserialise {:?} recreating config: {e}", path),
                }
            }
        }
        let mut file = File::create(&path)?;
        UserConfig::create_default(&mut file)
    }

    fn create_default(file: &mut File) -> Result<Self, Box<dyn Error>> {
        let config = UserConfig::default();
        let data = toml::to_string_pretty(&config)?;
        file.write_all(data.as_bytes())?;
        info!("Created default user config file");
        Ok(config)
    }

    pub fn write(&self) -> Result<(), Box<dyn Error>> {
        let path = get_cfg_file()?;
        let data = toml::to_string_pretty(self)?;
        File::create(&path)?.write_all(data.as_bytes())?;
        info!(target: LOG_TAG, "Saved user config to {:?}", path);
        Ok(())
    }

    /// Sync the CLI options and UserOptions with each other
    pub fn sync_cli(&mut self, cli: &mut CLIOptions) {
        info!("Checking CLI options");

        if let Some(ms) = cli.tic_ms {
            if ms != 0 && ms != self.tic_ms {
                self.tic_ms = ms;
                info!("Tic length changed to: {ms}ms");
            }
        } else {
            cli.tic_ms = Some(self.tic_ms);
        }

        if let Some(f) = cli.facing {
            if f != self.facing {
                self.facing = f;
            }
        } else {
            cli.facing = Some(self.facing);
        }

        if let Some(f) = cli.realtime {
            if f != self.realtime {
                self.realtime = f;
            }
        } else {
            cli.realtime = Some(self.realtime);
        }

        if let Some(f) = cli.snapshots {
            if f != self.snapshots {
                self.snapshots = f;
            }
        } else {
            cli.snapshots = Some(self.snapshots);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::UserConfig;
    use crate::cli::{CLIOptions, Facing};
    use argh::FromArgs;

    #[test]
    fn cli_overrides_config() {
        let mut cfg = UserConfig::default();
        let mut cli =
            CLIOptions::from_args(&["doorsim"], &["--facing", "west", "--tic-ms", "20"]).unwrap();
        cfg.sync_cli(&mut cli);
        assert_eq!(cfg.facing, Facing::West);
        assert_eq!(cfg.tic_ms, 20);
        // unset options pick up the config
        assert_eq!(cli.realtime, Some(false));
        assert_eq!(cli.snapshots, Some(true));
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let cfg: UserConfig = toml::from_str(
            r#"
            facing = "North"

            [door]
            auto_close_ms = 3000
            "#,
        )
        .unwrap();
        assert_eq!(cfg.facing, Facing::North);
        assert_eq!(cfg.door.auto_close_ms, 3000);
        assert_eq!(cfg.door.touch_extent, 48.0);
        assert_eq!(cfg.tic_ms, 50);
    }

    #[test]
    fn survives_a_round_trip_through_toml() {
        let cfg = UserConfig::default();
        let text = toml::to_string_pretty(&cfg).unwrap();
        assert_eq!(toml::from_str::<UserConfig>(&text).unwrap(), cfg);
    }
}
