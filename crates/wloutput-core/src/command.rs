//! Rendering of per-output configuration commands.
//!
//! Commands are produced as text only; running them is up to the caller.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::screen::Screen;

/// Compositor family the commands are rendered for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayEnvironment {
    /// sway IPC `output` commands, including the background
    #[default]
    Sway,
    /// Generic wlroots compositor driven by `wlr-randr`; no background support
    Wlroots,
}

impl DisplayEnvironment {
    /// Sway advertises its IPC socket through `SWAYSOCK`
    pub fn from_sway_socket(sway_socket: Option<&str>) -> Self {
        match sway_socket {
            Some(socket) if !socket.is_empty() => DisplayEnvironment::Sway,
            _ => DisplayEnvironment::Wlroots,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayEnvironment::Sway => "sway",
            DisplayEnvironment::Wlroots => "wlroots",
        }
    }

    pub fn supports_background(&self) -> bool {
        matches!(self, DisplayEnvironment::Sway)
    }
}

impl fmt::Display for DisplayEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayEnvironment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sway" => Ok(DisplayEnvironment::Sway),
            "wlroots" | "wlr" | "wlr-randr" => Ok(DisplayEnvironment::Wlroots),
            other => Err(format!(
                "Unknown display environment '{}'. Expected 'sway' or 'wlroots'",
                other
            )),
        }
    }
}

/// Render the configuration command for one screen
pub fn render_command(screen: &Screen, environment: DisplayEnvironment) -> String {
    match environment {
        DisplayEnvironment::Sway => render_sway(screen),
        DisplayEnvironment::Wlroots => render_wlr_randr(screen),
    }
}

/// Render one command per screen, in arrangement order
pub fn render_commands(screens: &[Screen], environment: DisplayEnvironment) -> Vec<String> {
    screens
        .iter()
        .map(|screen| render_command(screen, environment))
        .collect()
}

fn render_sway(screen: &Screen) -> String {
    let mode = if screen.mode.refresh > 0 {
        format!("{}@{}Hz", screen.mode, screen.mode.refresh_hz())
    } else {
        screen.mode.to_string()
    };

    let mut command = format!(
        "output {} mode {} pos {} {} scale {} scale_filter {}",
        quote(&screen.name),
        mode,
        screen.position.x,
        screen.position.y,
        screen.scale,
        screen.scale_filter
    );

    if let Some(background) = &screen.background {
        command.push_str(&format!(
            " bg {} fill",
            quote(&background.display().to_string())
        ));
    }

    command
}

fn render_wlr_randr(screen: &Screen) -> String {
    let refresh = screen.mode.refresh;
    let mode = if refresh > 0 {
        format!("{}@{}.{:03}Hz", screen.mode, refresh / 1000, refresh % 1000)
    } else {
        screen.mode.to_string()
    };

    format!(
        "wlr-randr --output {} --mode {} --pos {},{} --scale {}",
        screen.name, mode, screen.position.x, screen.position.y, screen.scale
    )
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}
