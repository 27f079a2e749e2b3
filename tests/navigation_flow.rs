//! Headless tests for the menu → overlay → navigation flow.
//!
//! These tests use [`MinimalPlugins`] with the UI-facing plugins on top, and
//! simulate clicks by writing [`Interaction`] directly. No window, no
//! rendering, no audio output.
//!
//! Covered scenarios:
//! 1. Only unlocked menu entries open a section.
//! 2. Escape and the close button in the same frame advance the rank once.
//! 3. Escape with nothing open changes nothing; a backdrop click closes.
//! 4. A closed panel fades out and despawns.
//! 5. The sound toggle flips the sound flag and asks for the ambient bed.

use std::time::Duration;

use almond_eye::audio::AudioCue;
use almond_eye::menu::{MenuEntry, MenuPlugin, SoundToggle};
use almond_eye::navigation::{Navigation, NavigationPlugin};
use almond_eye::overlay::{CloseButton, Closing, OverlayPlugin, SectionOverlay};
use almond_eye::sections::SectionId;
use bevy::input::mouse::MouseWheel;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Build a headless app with navigation, the menu and the overlay, and run
/// the first frame so `Startup` spawns the menu.
fn headless_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)))
        .init_resource::<ButtonInput<KeyCode>>()
        .add_message::<AudioCue>()
        .add_message::<MouseWheel>()
        .add_plugins((NavigationPlugin, MenuPlugin, OverlayPlugin));
    app.update();
    app
}

fn nav(app: &App) -> &Navigation {
    app.world().resource::<Navigation>()
}

fn menu_entry(app: &mut App, index: usize) -> Entity {
    let mut query = app.world_mut().query::<(Entity, &MenuEntry)>();
    query
        .iter(app.world())
        .find(|(_, entry)| entry.0 == index)
        .map(|(entity, _)| entity)
        .expect("menu entry spawned")
}

fn single_with<T: Component>(app: &mut App) -> Entity {
    let mut query = app.world_mut().query_filtered::<Entity, With<T>>();
    query.single(app.world()).expect("exactly one entity")
}

fn press(app: &mut App, entity: Entity) {
    *app.world_mut()
        .get_mut::<Interaction>(entity)
        .expect("pressable entity") = Interaction::Pressed;
}

fn press_escape(app: &mut App) {
    let mut keyboard = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
    keyboard.release_all();
    keyboard.clear();
    keyboard.press(KeyCode::Escape);
}

fn open_overlays(app: &mut App) -> usize {
    let mut query = app
        .world_mut()
        .query_filtered::<&SectionOverlay, Without<Closing>>();
    query.iter(app.world()).count()
}

fn all_overlays(app: &mut App) -> usize {
    let mut query = app.world_mut().query::<&SectionOverlay>();
    query.iter(app.world()).count()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

/// A locked entry is inert; the unlocked first entry opens About and its panel.
#[test]
fn only_unlocked_entries_open() {
    let mut app = headless_app();

    let works = menu_entry(&mut app, 1);
    press(&mut app, works);
    app.update();
    assert_eq!(nav(&app).active_section(), None);
    assert_eq!(all_overlays(&mut app), 0);

    let about = menu_entry(&mut app, 0);
    press(&mut app, about);
    app.update();
    assert_eq!(nav(&app).active_section(), Some(SectionId::About));
    assert!(nav(&app).is_zoomed());
    assert_eq!(open_overlays(&mut app), 1);
}

/// Two close gestures in one frame count as one close.
#[test]
fn simultaneous_close_gestures_advance_once() {
    let mut app = headless_app();
    let about = menu_entry(&mut app, 0);
    press(&mut app, about);
    app.update();

    let close = single_with::<CloseButton>(&mut app);
    press(&mut app, close);
    press_escape(&mut app);
    app.update();

    assert_eq!(nav(&app).current_step(), 1);
    assert_eq!(nav(&app).active_section(), None);
    assert!(!nav(&app).is_zoomed());
    assert_eq!(open_overlays(&mut app), 0);

    // The panel is still fading; another Escape must not advance again.
    press_escape(&mut app);
    app.update();
    assert_eq!(nav(&app).current_step(), 1);
}

/// Clicking the panel outside its content closes it like the button does.
#[test]
fn backdrop_click_closes_once() {
    let mut app = headless_app();
    let about = menu_entry(&mut app, 0);
    press(&mut app, about);
    app.update();

    let panel = single_with::<SectionOverlay>(&mut app);
    press(&mut app, panel);
    app.update();

    assert_eq!(nav(&app).current_step(), 1);
    assert_eq!(nav(&app).active_section(), None);
    assert_eq!(open_overlays(&mut app), 0);

    // A fading panel ignores further gestures.
    press_escape(&mut app);
    app.update();
    assert_eq!(nav(&app).current_step(), 1);
}

#[test]
fn escape_with_nothing_open_is_ignored() {
    let mut app = headless_app();
    press_escape(&mut app);
    app.update();
    assert_eq!(nav(&app).current_step(), 0);
    assert_eq!(all_overlays(&mut app), 0);
}

/// Closing unlocks the next entry, and the old panel is gone once faded.
#[test]
fn closed_panel_despawns_and_next_entry_unlocks() {
    let mut app = headless_app();
    let about = menu_entry(&mut app, 0);
    press(&mut app, about);
    app.update();

    press_escape(&mut app);
    app.update();
    for _ in 0..10 {
        app.update();
    }
    assert_eq!(all_overlays(&mut app), 0);

    let works = menu_entry(&mut app, 1);
    press(&mut app, works);
    app.update();
    assert_eq!(nav(&app).active_section(), Some(SectionId::Works));
    let mut query = app.world_mut().query::<&SectionOverlay>();
    let sections: Vec<_> = query.iter(app.world()).map(|o| o.section).collect();
    assert_eq!(sections, vec![SectionId::Works]);
}

#[test]
fn sound_toggle_flips_and_requests_ambient() {
    let mut app = headless_app();
    assert!(nav(&app).is_sound_enabled());

    let toggle = single_with::<SoundToggle>(&mut app);
    press(&mut app, toggle);
    app.update();

    assert!(!nav(&app).is_sound_enabled());
    let cues = app.world().resource::<Messages<AudioCue>>();
    let mut cursor = cues.get_cursor();
    let sent: Vec<_> = cursor.read(cues).copied().collect();
    assert_eq!(sent, vec![AudioCue::StartAmbient]);
}
