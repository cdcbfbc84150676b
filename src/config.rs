use crate::board::Theme;
use crate::consts;
use crate::sim::Grid;
use serde::Deserialize;
use std::num::{NonZeroU32, NonZeroU64};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
    /// Geometry of the playing field
    #[serde(default)]
    pub(crate) grid: GridConfig,

    /// Frame rate & snake speed
    #[serde(default)]
    pub(crate) timing: TimingConfig,

    /// Styles for the tiles
    #[serde(default)]
    pub(crate) styles: StyleConfig,

    /// Settings about auxiliary files
    #[serde(default)]
    pub(crate) files: FileConfig,
}

impl Config {
    /// Return the default configuration file path, if the local
    /// configuration directory can be determined
    pub(crate) fn default_path() -> Option<PathBuf> {
        dirs::config_local_dir().map(|p| p.join("tilesnake").join("config.toml"))
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

/// Size of the grid in cells and of each cell in terminal columns.  Always
/// large enough to hold the starting snake plus one food item.
#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawGridConfig")]
pub(crate) struct GridConfig {
    pub(crate) width: u16,
    pub(crate) height: u16,
    pub(crate) cell_width: u16,
}

impl GridConfig {
    pub(crate) fn grid(self) -> Grid {
        Grid::new(self.width, self.height)
    }
}

impl Default for GridConfig {
    fn default() -> GridConfig {
        GridConfig {
            width: consts::GRID_WIDTH,
            height: consts::GRID_HEIGHT,
            cell_width: consts::CELL_WIDTH,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
struct RawGridConfig {
    width: u16,
    height: u16,
    cell_width: u16,
}

impl Default for RawGridConfig {
    fn default() -> RawGridConfig {
        let GridConfig {
            width,
            height,
            cell_width,
        } = GridConfig::default();
        RawGridConfig {
            width,
            height,
            cell_width,
        }
    }
}

impl TryFrom<RawGridConfig> for GridConfig {
    type Error = GridError;

    fn try_from(value: RawGridConfig) -> Result<GridConfig, GridError> {
        let RawGridConfig {
            width,
            height,
            cell_width,
        } = value;
        if width < consts::INITIAL_SNAKE_LENGTH {
            Err(GridError::TooNarrow(width))
        } else if height == 0 {
            Err(GridError::ZeroHeight)
        } else if Grid::new(width, height).area() <= usize::from(consts::INITIAL_SNAKE_LENGTH) {
            Err(GridError::NoRoomForFood)
        } else if cell_width == 0 {
            Err(GridError::ZeroCellWidth)
        } else {
            Ok(GridConfig {
                width,
                height,
                cell_width,
            })
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum GridError {
    #[error("grid width must be at least {min}; got {0}", min = consts::INITIAL_SNAKE_LENGTH)]
    TooNarrow(u16),
    #[error("grid height must be nonzero")]
    ZeroHeight,
    #[error("grid has no room for food beside the starting snake")]
    NoRoomForFood,
    #[error("cell width must be nonzero")]
    ZeroCellWidth,
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub(crate) struct TimingConfig {
    /// Time between frames, in milliseconds
    pub(crate) frame_period_ms: NonZeroU64,

    /// Number of frames between movements of the snake
    pub(crate) frames_per_tick: NonZeroU32,
}

impl TimingConfig {
    pub(crate) fn frame_period(self) -> Duration {
        Duration::from_millis(self.frame_period_ms.get())
    }
}

impl Default for TimingConfig {
    fn default() -> TimingConfig {
        TimingConfig {
            frame_period_ms: NonZeroU64::new(consts::FRAME_PERIOD_MS).unwrap_or(NonZeroU64::MIN),
            frames_per_tick: NonZeroU32::new(consts::FRAMES_PER_TICK).unwrap_or(NonZeroU32::MIN),
        }
    }
}

/// Tile styles given as style strings like `"bold green"` or
/// `"red on black"`.  Unset styles fall back to the built-in defaults.
#[derive(Clone, Deserialize, Debug, Default)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct StyleConfig {
    background: Option<parse_style::Style>,
    snake: Option<parse_style::Style>,
    food: Option<parse_style::Style>,
}

impl StyleConfig {
    pub(crate) fn into_theme(self) -> Theme {
        let defaults = Theme::default();
        Theme {
            background: self
                .background
                .map_or(defaults.background, ratatui::style::Style::from),
            snake: self
                .snake
                .map_or(defaults.snake, ratatui::style::Style::from),
            food: self.food.map_or(defaults.food, ratatui::style::Style::from),
        }
    }
}

#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub(crate) struct FileConfig {
    /// File to write log messages to
    pub(crate) log_file: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}
