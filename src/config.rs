//! Demo selection and tuning, read from the page's query string
//! (`?demo=save-point&seed=7`).

use std::fmt;
use std::str::FromStr;

use log::LevelFilter;

use crate::error::ConfigError;

/// Texture used by the textured cube when the page does not name one.
pub const DEFAULT_TEXTURE_URL: &str =
    "https://www.mozilla.org/media/protocol/img/logos/firefox/browser/logo.eb1324e44442.svg";

/// Canvas size of the raw WebGL cube demos.
pub const CUBE_SIZE: (u32, u32) = (640, 480);
/// Canvas size of the globe and shape ring.
pub const SCENE_SIZE: (u32, u32) = (960, 540);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DemoKind {
    #[default]
    Cube,
    TexturedCube,
    Globe,
    Shapes,
    SavePoint,
}

impl DemoKind {
    pub const ALL: [DemoKind; 5] = [
        DemoKind::Cube,
        DemoKind::TexturedCube,
        DemoKind::Globe,
        DemoKind::Shapes,
        DemoKind::SavePoint,
    ];

    pub fn id(self) -> &'static str {
        match self {
            DemoKind::Cube => "cube",
            DemoKind::TexturedCube => "textured-cube",
            DemoKind::Globe => "globe",
            DemoKind::Shapes => "shapes",
            DemoKind::SavePoint => "save-point",
        }
    }

    /// The raw WebGL demos draw into `#glCanvas`, the scene-graph ones into `#canvas`.
    pub fn default_canvas_id(self) -> &'static str {
        match self {
            DemoKind::Cube | DemoKind::TexturedCube => "glCanvas",
            DemoKind::Globe | DemoKind::Shapes | DemoKind::SavePoint => "canvas",
        }
    }

    /// `None` means the canvas follows the window size.
    pub fn fixed_size(self) -> Option<(u32, u32)> {
        match self {
            DemoKind::Cube | DemoKind::TexturedCube => Some(CUBE_SIZE),
            DemoKind::Globe | DemoKind::Shapes => Some(SCENE_SIZE),
            DemoKind::SavePoint => None,
        }
    }
}

impl fmt::Display for DemoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for DemoKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DemoKind::ALL
            .into_iter()
            .find(|kind| kind.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::UnknownDemo(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub demo: DemoKind,
    pub canvas_id: String,
    pub texture_url: String,
    pub seed: Option<u64>,
    pub log_level: LevelFilter,
}

impl Default for DemoConfig {
    fn default() -> Self {
        let demo = DemoKind::default();
        Self {
            demo,
            canvas_id: demo.default_canvas_id().to_string(),
            texture_url: DEFAULT_TEXTURE_URL.to_string(),
            seed: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl DemoConfig {
    /// Parses a `location.search` string. The leading `?` is optional and
    /// unknown keys are ignored.
    pub fn from_query(query: &str) -> Result<Self, ConfigError> {
        let mut config = DemoConfig::default();
        let mut canvas_override = None;

        let query = query.strip_prefix('?').unwrap_or(query);
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = urlencoding::decode(&value.replace('+', " "))
                .map_err(|_| ConfigError::InvalidEncoding(value.to_string()))?
                .into_owned();
            match key {
                "demo" => config.demo = value.parse()?,
                "canvas" if !value.is_empty() => canvas_override = Some(value),
                "texture" if !value.is_empty() => config.texture_url = value,
                "seed" => {
                    let seed = value
                        .parse::<u64>()
                        .map_err(|_| ConfigError::InvalidSeed(value.clone()))?;
                    config.seed = Some(seed);
                }
                "log" => {
                    config.log_level = value
                        .parse::<LevelFilter>()
                        .map_err(|_| ConfigError::InvalidLogLevel(value.clone()))?;
                }
                _ => {}
            }
        }

        config.canvas_id =
            canvas_override.unwrap_or_else(|| config.demo.default_canvas_id().to_string());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_gives_defaults() {
        let config = DemoConfig::from_query("").unwrap();
        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.canvas_id, "glCanvas");
    }

    #[test]
    fn demo_ids_round_trip() {
        for kind in DemoKind::ALL {
            assert_eq!(kind.id().parse::<DemoKind>().unwrap(), kind);
            assert_eq!(kind.to_string(), kind.id());
        }
    }

    #[test]
    fn canvas_follows_demo_unless_overridden() {
        let config = DemoConfig::from_query("?demo=save-point").unwrap();
        assert_eq!(config.demo, DemoKind::SavePoint);
        assert_eq!(config.canvas_id, "canvas");

        let config = DemoConfig::from_query("?canvas=mine&demo=globe").unwrap();
        assert_eq!(config.canvas_id, "mine");
    }

    #[test]
    fn parses_seed_texture_and_log_level() {
        let config =
            DemoConfig::from_query("?demo=textured-cube&seed=42&log=debug&texture=img%2Fcrate.png")
                .unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.texture_url, "img/crate.png");
    }

    #[test]
    fn only_the_save_point_follows_the_window() {
        let fills: Vec<_> = DemoKind::ALL
            .into_iter()
            .filter(|k| k.fixed_size().is_none())
            .collect();
        assert_eq!(fills, vec![DemoKind::SavePoint]);
        assert_eq!(DemoKind::Globe.fixed_size(), Some((960, 540)));
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            DemoConfig::from_query("demo=teapot"),
            Err(ConfigError::UnknownDemo("teapot".into()))
        );
        assert_eq!(
            DemoConfig::from_query("demo=cube&seed=-1"),
            Err(ConfigError::InvalidSeed("-1".into()))
        );
        assert!(matches!(
            DemoConfig::from_query("log=loud"),
            Err(ConfigError::InvalidLogLevel(_))
        ));
    }

    #[test]
    fn ignores_unknown_keys_and_keeps_stray_percent() {
        let config = DemoConfig::from_query("?foo=bar&texture=100%&demo=shapes").unwrap();
        assert_eq!(config.demo, DemoKind::Shapes);
        assert_eq!(config.texture_url, "100%");
    }

    #[test]
    fn plus_is_a_space_and_bad_utf8_is_an_error() {
        let config = DemoConfig::from_query("texture=my+crate%20box.png").unwrap();
        assert_eq!(config.texture_url, "my crate box.png");

        assert_eq!(
            DemoConfig::from_query("demo=globe&texture=%FF%FE"),
            Err(ConfigError::InvalidEncoding("%FF%FE".into()))
        );
    }
}
