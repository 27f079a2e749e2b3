// Main
use bevy::prelude::*;

use almond_eye::audio::SoundPlugin;
use almond_eye::config::ConfigPlugin;
use almond_eye::eye::EyePlugin;
use almond_eye::grain::GrainPlugin;
use almond_eye::menu::MenuPlugin;
use almond_eye::navigation::NavigationPlugin;
use almond_eye::overlay::OverlayPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "almondgod".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins((
            ConfigPlugin,
            NavigationPlugin,
            SoundPlugin,
            EyePlugin,
            MenuPlugin,
            OverlayPlugin,
            GrainPlugin,
        ))
        .run();
}
