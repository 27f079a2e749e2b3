// Side menu, progress indicator, sound toggle and the idle captions.

use bevy::prelude::*;

use crate::audio::AudioCue;
use crate::navigation::{Navigation, NavigationSet, rank_label};
use crate::sections::{SECTION_COUNT, SectionId};

pub struct MenuPlugin;

impl Plugin for MenuPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_menu)
            .add_systems(
                Update,
                (entry_actions, sound_toggle_actions).in_set(NavigationSet::Menu),
            )
            .add_systems(
                Update,
                (entry_visuals, progress_visuals, sound_label, captions)
                    .in_set(NavigationSet::Present),
            );
    }
}

const INK: Color = Color::BLACK;
const SOUND_BUTTON: Color = Color::srgba(0.0, 0.0, 0.0, 0.9);
const SOUND_BUTTON_HOVERED: Color = Color::BLACK;
const SEGMENT_EMPTY: Color = Color::srgb(0.898, 0.906, 0.922);
const MUTED: Color = Color::srgb(0.612, 0.639, 0.686);
const TAGLINE: &str = "peer into the eye of almondgod";

/// How a menu entry looks for the current navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryVisual {
    Active,
    Unlocked,
    Locked,
}

impl EntryVisual {
    fn alpha(self, hovered: bool) -> f32 {
        match self {
            EntryVisual::Active => 1.0,
            EntryVisual::Unlocked if hovered => 1.0,
            EntryVisual::Unlocked => 0.6,
            EntryVisual::Locked => 0.25,
        }
    }
}

pub fn entry_visual(nav: &Navigation, index: usize) -> EntryVisual {
    if nav.is_active(index) {
        EntryVisual::Active
    } else if nav.is_unlocked(index) {
        EntryVisual::Unlocked
    } else {
        EntryVisual::Locked
    }
}

/// Text under the eye: the hovered section, or the current ring and a prompt.
pub fn caption_lines(nav: &Navigation) -> (String, Option<&'static str>) {
    if let Some(section) = nav.hovered_ring().and_then(SectionId::from_index) {
        return (section.title().to_uppercase(), None);
    }
    let title = nav.caption_section().map(SectionId::title).unwrap_or_default();
    (
        format!("RING {} · {}", nav.current_step(), title.to_uppercase()),
        Some("click to enter"),
    )
}

#[derive(Component)]
pub struct MenuEntry(pub usize);

#[derive(Component)]
struct EntryLabel(usize);

#[derive(Component)]
struct EntryRank(usize);

#[derive(Component)]
struct ProgressSegment(usize);

#[derive(Component)]
struct ProgressText;

#[derive(Component)]
pub struct SoundToggle;

#[derive(Component)]
struct SoundLabel;

/// Hidden while a section is open.
#[derive(Component)]
struct IdleOnly;

#[derive(Component)]
struct CaptionTitle;

#[derive(Component)]
struct CaptionPrompt;

fn text(label: impl Into<String>, size: f32, color: Color) -> impl Bundle {
    (
        Text::new(label),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(color),
    )
}

fn setup_menu(mut commands: Commands) {
    // Side navigation.
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            left: Val::Px(24.0),
            top: Val::Percent(22.0),
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(12.0),
            ..default()
        })
        .with_children(|nav| {
            for section in SectionId::ALL {
                spawn_entry(nav, section);
            }
        });

    // Progress indicator.
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            top: Val::Px(32.0),
            right: Val::Px(32.0),
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(6.0),
            ..default()
        })
        .with_children(|corner| {
            corner.spawn(text("PROGRESS", 10.0, MUTED));
            corner
                .spawn(Node {
                    column_gap: Val::Px(4.0),
                    ..default()
                })
                .with_children(|bar| {
                    for index in 0..SECTION_COUNT {
                        bar.spawn((
                            ProgressSegment(index),
                            Node {
                                width: Val::Px(24.0),
                                height: Val::Px(4.0),
                                ..default()
                            },
                            BackgroundColor(SEGMENT_EMPTY),
                        ));
                    }
                });
            corner.spawn((ProgressText, text("20% complete", 9.0, MUTED)));
        });

    // Sound toggle.
    commands
        .spawn((
            SoundToggle,
            Button,
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(24.0),
                bottom: Val::Px(24.0),
                width: Val::Px(64.0),
                height: Val::Px(32.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(SOUND_BUTTON),
            GlobalZIndex(100),
        ))
        .with_children(|button| {
            button.spawn((SoundLabel, text("Pause", 12.0, Color::WHITE)));
        });

    // Tagline and ring caption under the eye.
    commands
        .spawn((
            IdleOnly,
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                bottom: Val::Percent(4.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                row_gap: Val::Px(6.0),
                ..default()
            },
        ))
        .with_children(|bottom| {
            bottom.spawn((
                text(TAGLINE, 15.0, INK.with_alpha(0.4)),
                Node {
                    margin: UiRect::bottom(Val::Px(32.0)),
                    ..default()
                },
            ));
            bottom.spawn((CaptionTitle, text("", 10.0, INK.with_alpha(0.3))));
            bottom.spawn((CaptionPrompt, text("", 9.0, INK.with_alpha(0.15))));
        });
}

fn spawn_entry(parent: &mut ChildSpawnerCommands, section: SectionId) {
    let index = section.index();
    parent
        .spawn((
            MenuEntry(index),
            Button,
            Node {
                flex_direction: FlexDirection::Column,
                padding: UiRect::axes(Val::Px(8.0), Val::Px(6.0)),
                ..default()
            },
            BackgroundColor(Color::NONE),
        ))
        .with_children(|entry| {
            entry.spawn((
                EntryLabel(index),
                text(section.title().to_uppercase(), 12.0, INK.with_alpha(0.25)),
            ));
            entry.spawn((
                EntryRank(index),
                text(rank_label(index), 8.0, INK.with_alpha(0.2)),
            ));
        });
}

fn entry_actions(
    query: Query<(&Interaction, &MenuEntry), Changed<Interaction>>,
    mut nav: ResMut<Navigation>,
) {
    for (interaction, entry) in &query {
        if *interaction != Interaction::Pressed {
            continue;
        }
        if !nav.request_open(entry.0) {
            debug!("menu entry {} is not clickable", entry.0);
        }
    }
}

fn sound_toggle_actions(
    query: Query<&Interaction, (Changed<Interaction>, With<SoundToggle>)>,
    mut nav: ResMut<Navigation>,
    mut cues: MessageWriter<AudioCue>,
) {
    for interaction in &query {
        if *interaction == Interaction::Pressed {
            cues.write(AudioCue::StartAmbient);
            nav.toggle_sound();
        }
    }
}

fn entry_visuals(
    nav: Res<Navigation>,
    entries: Query<(&Interaction, &MenuEntry)>,
    mut labels: Query<(&EntryLabel, &mut TextColor)>,
    mut ranks: Query<(&EntryRank, &mut Visibility)>,
) {
    let mut hovered = [false; SECTION_COUNT];
    for (interaction, entry) in &entries {
        if let Some(slot) = hovered.get_mut(entry.0) {
            *slot = *interaction != Interaction::None && nav.is_clickable(entry.0);
        }
    }
    for (label, mut color) in &mut labels {
        let alpha = entry_visual(&nav, label.0).alpha(hovered[label.0]);
        color.set_if_neq(TextColor(INK.with_alpha(alpha)));
    }
    for (rank, mut visibility) in &mut ranks {
        let shown = if nav.is_unlocked(rank.0) {
            Visibility::Hidden
        } else {
            Visibility::Inherited
        };
        visibility.set_if_neq(shown);
    }
}

fn progress_visuals(
    nav: Res<Navigation>,
    mut segments: Query<(&ProgressSegment, &mut BackgroundColor)>,
    mut label: Query<&mut Text, With<ProgressText>>,
) {
    if !nav.is_changed() {
        return;
    }
    for (segment, mut color) in &mut segments {
        let fill = if nav.is_unlocked(segment.0) {
            INK
        } else {
            SEGMENT_EMPTY
        };
        color.set_if_neq(BackgroundColor(fill));
    }
    if let Ok(mut text) = label.single_mut() {
        **text = format!("{}% complete", nav.progress_percent());
    }
}

fn sound_label(
    nav: Res<Navigation>,
    mut labels: Query<&mut Text, With<SoundLabel>>,
    mut buttons: Query<(&Interaction, &mut BackgroundColor), With<SoundToggle>>,
) {
    for (interaction, mut color) in &mut buttons {
        let fill = if *interaction == Interaction::None {
            SOUND_BUTTON
        } else {
            SOUND_BUTTON_HOVERED
        };
        color.set_if_neq(BackgroundColor(fill));
    }
    if !nav.is_changed() {
        return;
    }
    for mut text in &mut labels {
        **text = if nav.is_sound_enabled() { "Pause" } else { "Play" }.to_string();
    }
}

fn captions(
    nav: Res<Navigation>,
    mut idle: Query<&mut Visibility, With<IdleOnly>>,
    mut title: Query<&mut Text, (With<CaptionTitle>, Without<CaptionPrompt>)>,
    mut prompt: Query<&mut Text, (With<CaptionPrompt>, Without<CaptionTitle>)>,
) {
    if !nav.is_changed() {
        return;
    }
    let shown = if nav.is_zoomed() {
        Visibility::Hidden
    } else {
        Visibility::Inherited
    };
    for mut visibility in &mut idle {
        visibility.set_if_neq(shown);
    }
    let (line, hint) = caption_lines(&nav);
    if let Ok(mut text) = title.single_mut() {
        **text = line;
    }
    if let Ok(mut text) = prompt.single_mut() {
        **text = hint.unwrap_or_default().to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_reflect_rank_and_active_section() {
        let mut nav = Navigation::default();
        assert_eq!(entry_visual(&nav, 0), EntryVisual::Unlocked);
        assert_eq!(entry_visual(&nav, 1), EntryVisual::Locked);
        nav.open_section(SectionId::About);
        assert_eq!(entry_visual(&nav, 0), EntryVisual::Active);
    }

    #[test]
    fn hover_brightens_only_unlocked_entries() {
        assert_eq!(EntryVisual::Unlocked.alpha(true), 1.0);
        assert_eq!(EntryVisual::Unlocked.alpha(false), 0.6);
        assert_eq!(EntryVisual::Locked.alpha(true), 0.25);
    }

    #[test]
    fn caption_shows_hovered_section_first() {
        let mut nav = Navigation::default();
        nav.advance_step();
        let (line, hint) = caption_lines(&nav);
        assert_eq!(line, "RING 1 · ABOUT");
        assert_eq!(hint, Some("click to enter"));

        nav.set_hovered_ring(Some(1));
        assert_eq!(caption_lines(&nav), ("WORKS".to_string(), None));
    }

    #[test]
    fn caption_at_first_step_has_no_title() {
        let (line, _) = caption_lines(&Navigation::default());
        assert_eq!(line, "RING 0 · ");
    }
}
