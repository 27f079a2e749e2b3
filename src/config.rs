//! Runtime tuning for the eye, loaded from `assets/eye.toml`.
//!
//! [`EyeConfig`] starts from compiled defaults. On native builds
//! [`load_eye_config`] overwrites it with any keys present in the file; a
//! missing file keeps the defaults, a malformed one logs a warning and keeps
//! them too. Web builds always use the defaults.

use bevy::prelude::*;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::eye::SECTION_SHELL_OFFSET;
use crate::sections::SECTION_COUNT;

pub const CONFIG_PATH: &str = "assets/eye.toml";

#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EyeConfig {
    // Shells
    pub ring_count: usize,
    pub base_radius: f32,
    pub radius_step: f32,
    pub segments: usize,

    // Shell opacity targets
    pub active_opacity: f32,
    pub hover_opacity: f32,
    pub locked_opacity: f32,
    pub inactive_opacity: f32,
    pub hidden_opacity: f32,
    pub core_opacity: f32,

    // Idle motion
    pub breathe_speed: f32,
    pub breathe_amount: f32,
    pub rotation_speed: f32,
    pub wobble_speed: f32,
    pub wobble_amount: f32,

    // Pointer parallax
    pub parallax_strength: f32,
    pub parallax_easing: f32,

    // Camera
    pub default_camera_z: f32,
    pub mobile_camera_z: f32,
    pub zoomed_camera_z: f32,
    pub default_fov: f32,
    pub zoomed_fov: f32,
    pub mobile_breakpoint: f32,
    pub zoom_in_secs: f32,
    pub zoom_out_secs: f32,

    // Butterfly orbits
    pub orbit_count: usize,
    pub orbit_radius: f32,
    pub orbit_speed: f32,
    pub orbit_opacity: f32,
}

impl Default for EyeConfig {
    fn default() -> Self {
        Self {
            ring_count: 8,
            base_radius: 0.15,
            radius_step: 0.22,
            segments: 48,

            active_opacity: 0.45,
            hover_opacity: 0.7,
            locked_opacity: 0.12,
            inactive_opacity: 0.06,
            hidden_opacity: 0.0,
            core_opacity: 0.4,

            breathe_speed: 0.35,
            breathe_amount: 0.015,
            rotation_speed: 0.025,
            wobble_speed: 0.2,
            wobble_amount: 0.012,

            parallax_strength: 0.45,
            parallax_easing: 0.04,

            default_camera_z: 5.0,
            mobile_camera_z: 8.5,
            zoomed_camera_z: 1.8,
            default_fov: 50.0,
            zoomed_fov: 42.0,
            mobile_breakpoint: 768.0,
            zoom_in_secs: 1.2,
            zoom_out_secs: 1.0,

            orbit_count: 3,
            orbit_radius: 1.8,
            orbit_speed: 0.3,
            orbit_opacity: 0.15,
        }
    }
}

impl EyeConfig {
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: EyeConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let min_rings = SECTION_SHELL_OFFSET + SECTION_COUNT;
        if self.ring_count < min_rings {
            return Err(invalid(
                "ring_count",
                format!("need at least {min_rings} shells, got {}", self.ring_count),
            ));
        }
        if self.segments < 3 {
            return Err(invalid("segments", format!("{} < 3", self.segments)));
        }
        for (field, value) in [
            ("base_radius", self.base_radius),
            ("radius_step", self.radius_step),
            ("orbit_radius", self.orbit_radius),
            ("default_camera_z", self.default_camera_z),
            ("mobile_camera_z", self.mobile_camera_z),
            ("zoomed_camera_z", self.zoomed_camera_z),
            ("zoom_in_secs", self.zoom_in_secs),
            ("zoom_out_secs", self.zoom_out_secs),
        ] {
            if !(value > 0.0) {
                return Err(invalid(field, format!("{value} must be positive")));
            }
        }
        for (field, value) in [
            ("active_opacity", self.active_opacity),
            ("hover_opacity", self.hover_opacity),
            ("locked_opacity", self.locked_opacity),
            ("inactive_opacity", self.inactive_opacity),
            ("hidden_opacity", self.hidden_opacity),
            ("core_opacity", self.core_opacity),
            ("orbit_opacity", self.orbit_opacity),
            ("parallax_easing", self.parallax_easing),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(field, format!("{value} outside [0, 1]")));
            }
        }
        for (field, value) in [
            ("default_fov", self.default_fov),
            ("zoomed_fov", self.zoomed_fov),
        ] {
            if !(value > 0.0 && value < 180.0) {
                return Err(invalid(field, format!("{value} outside (0, 180) degrees")));
            }
        }
        Ok(())
    }

    pub fn shell_radius(&self, shell: usize) -> f32 {
        self.base_radius + shell as f32 * self.radius_step
    }

    /// Camera distance for the eye at rest, wider on narrow windows.
    pub fn resting_camera_z(&self, window_width: f32) -> f32 {
        if window_width <= self.mobile_breakpoint {
            self.mobile_camera_z
        } else {
            self.default_camera_z
        }
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_eye_config(mut config: ResMut<EyeConfig>) {
    let contents = match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            info!("no {CONFIG_PATH} found, using compiled defaults");
            return;
        }
        Err(err) => {
            warn!("{}; using defaults", ConfigError::from(err));
            return;
        }
    };
    match EyeConfig::from_toml(&contents) {
        Ok(loaded) => {
            *config = loaded;
            info!("loaded eye config from {CONFIG_PATH}");
        }
        Err(err) => warn!("{err}; using defaults"),
    }
}

#[cfg(target_arch = "wasm32")]
pub fn load_eye_config(_config: ResMut<EyeConfig>) {
    debug!("web build, using compiled eye config");
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EyeConfig>()
            .add_systems(PreStartup, load_eye_config);
    }
}
