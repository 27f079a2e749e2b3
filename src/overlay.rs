// Content panel for the open section.
//
// A close gesture (button, backdrop click or Escape) marks the panel `Closing`
// and calls `Navigation::close_section` once; the panel ignores further
// gestures while it fades out.

use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy::ui::FocusPolicy;

use crate::content::{self, BookCategory, MAX_REALITY_RATING, SectionContent};
use crate::navigation::{Navigation, NavigationSet};
use crate::sections::{SECTION_COUNT, SectionId};

pub struct OverlayPlugin;

impl Plugin for OverlayPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (close_gestures, sync_overlay)
                .chain()
                .in_set(NavigationSet::Overlay),
        )
        .add_systems(
            Update,
            (fade_overlays, scroll_overlay).in_set(NavigationSet::Present),
        );
    }
}

const FADE_IN_SECS: f32 = 0.8;
const FADE_OUT_SECS: f32 = 0.5;
const BACKDROP_ALPHA: f32 = 0.92;
const LINE_HEIGHT_PX: f32 = 24.0;

const INK: Color = Color::BLACK;

#[derive(Component)]
pub struct SectionOverlay {
    pub section: SectionId,
    alpha: f32,
}

/// Exit fade in progress; the panel despawns when the timer finishes.
#[derive(Component)]
pub struct Closing(Timer);

#[derive(Component)]
pub struct CloseButton;

#[derive(Component)]
struct OverlayScroll;

/// Resting alpha of a text inside the panel, scaled by the panel fade.
#[derive(Component)]
struct Ink(f32);

fn close_gestures(
    mut commands: Commands,
    mut nav: ResMut<Navigation>,
    keyboard: Res<ButtonInput<KeyCode>>,
    buttons: Query<(&Interaction, &ChildOf), (Changed<Interaction>, With<CloseButton>)>,
    backdrops: Query<&Interaction, (Changed<Interaction>, With<SectionOverlay>, Without<Closing>)>,
    open: Query<Entity, (With<SectionOverlay>, Without<Closing>)>,
) {
    let clicked = buttons
        .iter()
        .filter(|(interaction, _)| **interaction == Interaction::Pressed)
        .any(|(_, parent)| open.contains(parent.parent()));
    let backdrop = backdrops
        .iter()
        .any(|interaction| *interaction == Interaction::Pressed);
    if !(clicked || backdrop || keyboard.just_pressed(KeyCode::Escape)) {
        return;
    }
    if nav.active_section().is_none() {
        return;
    }
    let Some(overlay) = open.iter().next() else {
        return;
    };
    commands.entity(overlay).insert(closing());
    nav.close_section();
}

fn closing() -> Closing {
    Closing(Timer::from_seconds(FADE_OUT_SECS, TimerMode::Once))
}

fn sync_overlay(
    mut commands: Commands,
    nav: Res<Navigation>,
    open: Query<(Entity, &SectionOverlay), Without<Closing>>,
) {
    if !nav.is_changed() {
        return;
    }
    let active = nav.active_section();
    let mut showing_active = false;
    for (entity, overlay) in &open {
        if Some(overlay.section) == active {
            showing_active = true;
        } else {
            commands.entity(entity).insert(closing());
        }
    }
    if let Some(section) = active {
        if !showing_active {
            spawn_overlay(&mut commands, section, nav.current_step());
        }
    }
}

fn ink(label: impl Into<String>, size: f32, alpha: f32) -> impl Bundle {
    (
        Ink(alpha),
        Text::new(label),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(INK.with_alpha(0.0)),
    )
}

fn spawn_overlay(commands: &mut Commands, section: SectionId, step: usize) {
    let content = content::lookup(section);
    commands
        .spawn((
            SectionOverlay {
                section,
                alpha: 0.0,
            },
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                ..default()
            },
            BackgroundColor(Color::WHITE.with_alpha(0.0)),
            // Pressed only where no panel content covers it.
            Interaction::default(),
            FocusPolicy::Block,
            GlobalZIndex(50),
        ))
        .with_children(|panel| {
            panel
                .spawn(Node {
                    position_type: PositionType::Absolute,
                    top: Val::Px(32.0),
                    left: Val::Px(32.0),
                    flex_direction: FlexDirection::Column,
                    row_gap: Val::Px(4.0),
                    ..default()
                })
                .with_children(|header| {
                    header.spawn(ink(format!("RING {step} / {SECTION_COUNT}"), 10.0, 0.3));
                    header.spawn(ink(section.title(), 18.0, 0.6));
                });

            panel
                .spawn((
                    CloseButton,
                    Button,
                    Node {
                        position_type: PositionType::Absolute,
                        top: Val::Px(32.0),
                        right: Val::Px(32.0),
                        padding: UiRect::axes(Val::Px(14.0), Val::Px(10.0)),
                        border: UiRect::all(Val::Px(1.0)),
                        ..default()
                    },
                    BorderColor::all(INK.with_alpha(0.1)),
                ))
                .with_children(|button| {
                    button.spawn(ink("CLOSE", 12.0, 0.5));
                });

            panel
                .spawn((
                    OverlayScroll,
                    ScrollPosition::default(),
                    Node {
                        position_type: PositionType::Absolute,
                        top: Val::Px(96.0),
                        bottom: Val::Px(64.0),
                        width: Val::Percent(100.0),
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        overflow: Overflow::scroll_y(),
                        ..default()
                    },
                ))
                .with_children(|scroll| {
                    scroll
                        .spawn((
                            Node {
                                max_width: Val::Px(720.0),
                                width: Val::Percent(90.0),
                                flex_direction: FlexDirection::Column,
                                row_gap: Val::Px(18.0),
                                ..default()
                            },
                            FocusPolicy::Block,
                        ))
                        .with_children(|column| spawn_content(column, content));
                });

            panel
                .spawn(Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(28.0),
                    width: Val::Percent(100.0),
                    justify_content: JustifyContent::Center,
                    ..default()
                })
                .with_children(|hint| {
                    hint.spawn(ink("PRESS ESC TO CLOSE", 10.0, 0.2));
                });
        });
    info!("showing {section}");
}

fn spawn_content(column: &mut ChildSpawnerCommands, content: &'static SectionContent) {
    column.spawn(ink(content.hero_title.unwrap_or(content.title), 40.0, 1.0));
    column.spawn(ink(content.hero_subtitle.unwrap_or(content.subtitle), 20.0, 0.7));

    for paragraph in content.paragraphs() {
        column.spawn(ink(paragraph, 16.0, 0.9));
    }

    for item in content.items {
        column.spawn(ink(item.title, 22.0, 0.9));
        column.spawn(ink(item.description, 14.0, 0.6));
    }

    for work in content.works {
        column.spawn(ink(format!("{}  {}", work.title, work.year), 22.0, 0.9));
        column.spawn(ink(work.summary, 14.0, 0.7));
        column.spawn(ink(work.tech_stack.join(" · "), 11.0, 0.4));
    }

    for statement in content.statements {
        column.spawn(ink(format!("{}  {}", statement.number, statement.title), 20.0, 0.9));
        column.spawn(ink(statement.body, 14.0, 0.7));
    }

    for experiment in content.experiments {
        column.spawn(ink(
            format!("{}  [{}]", experiment.title, experiment.kind.label()),
            18.0,
            0.9,
        ));
        column.spawn(ink(experiment.description, 14.0, 0.6));
    }

    for category in BookCategory::ALL {
        let mut books = content.books_in(category).peekable();
        if books.peek().is_none() {
            continue;
        }
        column.spawn(ink(category.label().to_uppercase(), 12.0, 0.4));
        for book in books {
            column.spawn(ink(book.title, 20.0, 0.9));
            column.spawn(ink(format!("{}  ·  {}", book.author, book.genre), 11.0, 0.5));
            column.spawn(ink(book.summary, 14.0, 0.7));
            column.spawn(ink(book.core_idea, 14.0, 0.6));
            column.spawn(ink(
                format!("Reality Rating {}/{MAX_REALITY_RATING}", book.reality_rating),
                10.0,
                0.4,
            ));
        }
    }

    if let Some(quote) = &content.quote {
        column.spawn(ink(format!("\u{201c}{}\u{201d}", quote.text), 18.0, 0.8));
        column.spawn(ink(format!("— {}", quote.author), 12.0, 0.5));
    }
}

fn fade_overlays(
    mut commands: Commands,
    time: Res<Time>,
    mut overlays: Query<(
        Entity,
        &mut SectionOverlay,
        &mut BackgroundColor,
        Option<&mut Closing>,
    )>,
    children: Query<&Children>,
    mut texts: Query<(&Ink, &mut TextColor)>,
) {
    for (entity, mut overlay, mut backdrop, closing) in &mut overlays {
        let alpha = match closing {
            Some(mut closing) => {
                closing.0.tick(time.delta());
                if closing.0.is_finished() {
                    commands.entity(entity).despawn();
                    continue;
                }
                overlay.alpha.min(1.0 - closing.0.fraction())
            }
            None => (overlay.alpha + time.delta_secs() / FADE_IN_SECS).min(1.0),
        };
        if alpha == overlay.alpha {
            continue;
        }
        overlay.alpha = alpha;
        backdrop.0 = Color::WHITE.with_alpha(BACKDROP_ALPHA * alpha);
        for child in children.iter_descendants(entity) {
            if let Ok((ink, mut color)) = texts.get_mut(child) {
                color.0 = INK.with_alpha(ink.0 * alpha);
            }
        }
    }
}

fn scroll_overlay(
    mut wheel: MessageReader<MouseWheel>,
    mut panels: Query<(&mut ScrollPosition, &ChildOf), With<OverlayScroll>>,
    open: Query<(), (With<SectionOverlay>, Without<Closing>)>,
) {
    let mut delta = 0.0;
    for event in wheel.read() {
        delta += match event.unit {
            MouseScrollUnit::Line => event.y * LINE_HEIGHT_PX,
            MouseScrollUnit::Pixel => event.y,
        };
    }
    if delta == 0.0 {
        return;
    }
    for (mut scroll, parent) in &mut panels {
        if open.contains(parent.parent()) {
            scroll.0.y = (scroll.0.y - delta).max(0.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_section_builds_a_panel() {
        let mut world = World::new();
        for (step, section) in SectionId::ALL.into_iter().enumerate() {
            let mut queue = bevy::ecs::world::CommandQueue::default();
            let mut commands = Commands::new(&mut queue, &world);
            spawn_overlay(&mut commands, section, step);
            queue.apply(&mut world);
        }
        let mut overlays = world.query::<&SectionOverlay>();
        assert_eq!(overlays.iter(&world).count(), SECTION_COUNT);
        let mut buttons = world.query::<&CloseButton>();
        assert_eq!(buttons.iter(&world).count(), SECTION_COUNT);
    }

    #[test]
    fn philosophy_panel_lists_every_book() {
        let mut world = World::new();
        let mut queue = bevy::ecs::world::CommandQueue::default();
        let mut commands = Commands::new(&mut queue, &world);
        spawn_overlay(&mut commands, SectionId::Philosophy, 2);
        queue.apply(&mut world);

        let mut texts = world.query::<&Text>();
        let ratings = texts
            .iter(&world)
            .filter(|text| text.0.starts_with("Reality Rating"))
            .count();
        assert_eq!(ratings, content::lookup(SectionId::Philosophy).books.len());
        assert!(texts.iter(&world).any(|text| text.0 == "MANGA"));
    }
}
