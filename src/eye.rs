// The eye: concentric wireframe shells, orbit loops, camera zoom and ring picking.
use std::f32::consts::{FRAC_PI_2, PI, TAU};

use bevy::asset::RenderAssetUsages;
use bevy::math::curve::easing::EaseFunction;
use bevy::mesh::{Indices, PrimitiveTopology};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::audio::AudioCue;
use crate::config::EyeConfig;
use crate::navigation::{Navigation, NavigationSet};
use crate::sections::SECTION_COUNT;
use crate::tween::{Tween, ease_towards};

pub struct EyePlugin;

impl Plugin for EyePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::WHITE))
            .init_resource::<Parallax>()
            .add_systems(Startup, (spawn_camera, spawn_eye))
            .add_systems(Update, pick_rings.in_set(NavigationSet::Scene))
            .add_systems(
                Update,
                (
                    track_pointer,
                    drive_camera_zoom,
                    animate_eye_root,
                    animate_shells,
                    animate_orbits,
                )
                    .in_set(NavigationSet::Present),
            );
    }
}

/// Shell 0 is the decorative core; shells 1..=5 carry the sections in order.
pub const SECTION_SHELL_OFFSET: usize = 1;

const SECTION_WIRE: Color = Color::srgb(0.102, 0.102, 0.102);
const DECORATIVE_WIRE: Color = Color::srgb(0.227, 0.227, 0.227);
const ORBIT_WIRE: Color = Color::srgb(0.353, 0.353, 0.353);

const OPACITY_EASE: f32 = 0.05;
const SCALE_EASE: f32 = 0.04;
const RECENTER_EASE: f32 = 0.05;
const FOCUSED_SCALE: f32 = 1.15;
const RECEDED_SCALE: f32 = 0.85;
const ORBIT_ZOOMED_OPACITY: f32 = 0.02;
const ORBIT_SEGMENTS: usize = 128;

#[derive(Component)]
pub struct EyeCamera;

/// Camera distance and field of view, each eased independently.
#[derive(Component)]
struct CameraZoom {
    z: Tween,
    fov: Tween,
}

#[derive(Component)]
struct EyeRoot;

#[derive(Component)]
pub struct Shell {
    pub index: usize,
    spin: f32,
}

/// Rendered opacity and scale, lagging behind the derived target.
#[derive(Component)]
struct ShellFade {
    opacity: f32,
    scale: f32,
}

#[derive(Component)]
struct Orbit {
    index: usize,
    opacity: f32,
}

/// Pointer position in [-1, 1] on both axes, eased.
#[derive(Resource, Default)]
struct Parallax {
    current: Vec2,
    target: Vec2,
}

/// What a shell is easing towards this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShellTarget {
    pub opacity: f32,
    pub scale: f32,
}

/// Section index carried by `shell`, if any.
pub fn section_for_shell(shell: usize) -> Option<usize> {
    shell
        .checked_sub(SECTION_SHELL_OFFSET)
        .filter(|section| *section < SECTION_COUNT)
}

/// Target opacity and scale for `shell` given the navigation state.
pub fn derive_target(
    nav: &Navigation,
    config: &EyeConfig,
    shell: usize,
    elapsed_secs: f32,
) -> ShellTarget {
    let section = section_for_shell(shell);

    if nav.is_zoomed() {
        return if section.is_some_and(|s| nav.is_active(s)) {
            ShellTarget {
                opacity: config.active_opacity,
                scale: FOCUSED_SCALE,
            }
        } else {
            ShellTarget {
                opacity: config.hidden_opacity,
                scale: RECEDED_SCALE,
            }
        };
    }

    match section {
        Some(s) if nav.is_unlocked(s) => ShellTarget {
            opacity: if nav.hovered_ring() == Some(s) {
                config.hover_opacity
            } else {
                config.active_opacity
            },
            scale: 1.0,
        },
        Some(_) => ShellTarget {
            opacity: config.locked_opacity,
            scale: 1.0,
        },
        None if shell == 0 => ShellTarget {
            opacity: config.core_opacity,
            scale: 1.0 + (elapsed_secs * 0.8).sin() * 0.03,
        },
        None => ShellTarget {
            opacity: config.inactive_opacity,
            scale: 1.0,
        },
    }
}

/// Section under a pointer ray passing `distance` from the eye center.
///
/// The ray crosses every shell at least that large and meets the outermost
/// first; locked shells let it through, so the outermost clickable one wins.
pub fn pick_section(nav: &Navigation, config: &EyeConfig, distance: f32) -> Option<usize> {
    (0..config.ring_count)
        .rev()
        .filter(|shell| config.shell_radius(*shell) >= distance)
        .filter_map(section_for_shell)
        .find(|section| nav.is_clickable(*section))
}

/// Latitude and longitude circles of a sphere as a line list.
fn wire_sphere(radius: f32, segments: usize) -> Mesh {
    let latitudes = (segments / 4).max(2);
    let longitudes = (segments / 2).max(3);
    let mut positions = Vec::new();
    let mut normals = Vec::new();
    let mut indices = Vec::new();

    let mut push_loop = |points: Vec<Vec3>| {
        let start = positions.len() as u32;
        let count = points.len() as u32;
        for point in points {
            positions.push((point * radius).to_array());
            normals.push(point.to_array());
        }
        for i in 0..count {
            indices.push(start + i);
            indices.push(start + (i + 1) % count);
        }
    };

    for lat in 1..latitudes {
        let polar = PI * lat as f32 / latitudes as f32;
        let (ring, y) = (polar.sin(), polar.cos());
        push_loop(
            (0..segments)
                .map(|i| {
                    let theta = TAU * i as f32 / segments as f32;
                    Vec3::new(ring * theta.cos(), y, ring * theta.sin())
                })
                .collect(),
        );
    }
    for lon in 0..longitudes {
        let theta = TAU * lon as f32 / longitudes as f32;
        push_loop(
            (0..segments)
                .map(|i| {
                    let polar = TAU * i as f32 / segments as f32;
                    Vec3::new(polar.sin() * theta.cos(), polar.cos(), polar.sin() * theta.sin())
                })
                .collect(),
        );
    }

    let mut mesh = Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}

fn orbit_loop(radius: f32) -> Mesh {
    let positions: Vec<[f32; 3]> = (0..=ORBIT_SEGMENTS)
        .map(|i| {
            let theta = TAU * i as f32 / ORBIT_SEGMENTS as f32;
            [theta.cos() * radius, theta.sin() * radius, 0.0]
        })
        .collect();
    let normals = vec![[0.0_f32, 0.0, 1.0]; positions.len()];
    let mut mesh = Mesh::new(PrimitiveTopology::LineStrip, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh
}

fn wire_material(color: Color, opacity: f32) -> StandardMaterial {
    StandardMaterial {
        base_color: color.with_alpha(opacity),
        unlit: true,
        alpha_mode: AlphaMode::Blend,
        ..default()
    }
}

fn spawn_camera(
    mut commands: Commands,
    config: Res<EyeConfig>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let width = windows.single().map(|w| w.width()).unwrap_or(f32::MAX);
    let z = config.resting_camera_z(width);
    commands.spawn((
        EyeCamera,
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: config.default_fov.to_radians(),
            ..default()
        }),
        Transform::from_xyz(0.0, 0.0, z).looking_at(Vec3::ZERO, Vec3::Y),
        CameraZoom {
            z: Tween::settled(z),
            fov: Tween::settled(config.default_fov),
        },
    ));
}

fn spawn_eye(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<EyeConfig>,
) {
    commands
        .spawn((EyeRoot, Transform::default(), Visibility::default()))
        .with_children(|root| {
            for index in 0..config.ring_count {
                let color = if section_for_shell(index).is_some() {
                    SECTION_WIRE
                } else {
                    DECORATIVE_WIRE
                };
                root.spawn((
                    Shell { index, spin: 0.0 },
                    ShellFade {
                        opacity: config.active_opacity,
                        scale: 1.0,
                    },
                    Mesh3d(meshes.add(wire_sphere(config.shell_radius(index), config.segments))),
                    MeshMaterial3d(materials.add(wire_material(color, config.active_opacity))),
                    Transform::from_rotation(Quat::from_rotation_x(FRAC_PI_2)),
                ));
            }
            for index in 0..config.orbit_count {
                root.spawn((
                    Orbit {
                        index,
                        opacity: config.orbit_opacity,
                    },
                    Mesh3d(meshes.add(orbit_loop(config.orbit_radius))),
                    MeshMaterial3d(materials.add(wire_material(ORBIT_WIRE, config.orbit_opacity))),
                    Transform::default(),
                ));
            }
        });
    info!("spawned eye with {} shells", config.ring_count);
}

fn pick_rings(
    mut nav: ResMut<Navigation>,
    config: Res<EyeConfig>,
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    camera: Query<(&Camera, &GlobalTransform), With<EyeCamera>>,
    ui: Query<&Interaction>,
    mut cues: MessageWriter<AudioCue>,
) {
    let over_ui = ui.iter().any(|interaction| *interaction != Interaction::None);
    let pick = resolve_pick(
        &nav,
        &config,
        pointer_distance(&windows, &camera),
        over_ui,
        mouse.just_pressed(MouseButton::Left),
    );

    if nav.hovered_ring() != pick.hovered {
        nav.set_hovered_ring(pick.hovered);
    }
    if let Some(section) = pick.open {
        if nav.request_open(section) {
            cues.write(AudioCue::RingClick);
        }
    }
}

/// What the pointer does to the rings this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pick {
    pub hovered: Option<usize>,
    pub open: Option<usize>,
}

/// Hover and click for a pointer ray `distance` from the eye center.
///
/// Nothing is picked while zoomed or while the pointer is over the UI. A click
/// opens the picked section and drops the hover.
pub fn resolve_pick(
    nav: &Navigation,
    config: &EyeConfig,
    distance: Option<f32>,
    over_ui: bool,
    clicked: bool,
) -> Pick {
    let picked = if nav.is_zoomed() || over_ui {
        None
    } else {
        distance.and_then(|d| pick_section(nav, config, d))
    };
    match picked {
        Some(section) if clicked => Pick {
            hovered: None,
            open: Some(section),
        },
        hovered => Pick {
            hovered,
            open: None,
        },
    }
}

/// Closest approach of the pointer ray to the eye center.
fn pointer_distance(
    windows: &Query<&Window, With<PrimaryWindow>>,
    camera: &Query<(&Camera, &GlobalTransform), With<EyeCamera>>,
) -> Option<f32> {
    let cursor = windows.single().ok()?.cursor_position()?;
    let (camera, transform) = camera.single().ok()?;
    let ray = camera.viewport_to_world(transform, cursor).ok()?;
    let direction = *ray.direction;
    let along = (-ray.origin.dot(direction)).max(0.0);
    Some((ray.origin + direction * along).length())
}

fn track_pointer(
    mut parallax: ResMut<Parallax>,
    config: Res<EyeConfig>,
    time: Res<Time>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    if let Ok(window) = windows.single() {
        if let Some(cursor) = window.cursor_position() {
            let size = window.size().max(Vec2::ONE);
            parallax.target = (cursor / size - 0.5) * 2.0;
        }
    }
    let dt = time.delta_secs();
    let target = parallax.target;
    parallax.current.x = ease_towards(parallax.current.x, target.x, config.parallax_easing, dt);
    parallax.current.y = ease_towards(parallax.current.y, target.y, config.parallax_easing, dt);
}

fn drive_camera_zoom(
    nav: Res<Navigation>,
    config: Res<EyeConfig>,
    time: Res<Time>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut camera: Query<(&mut Transform, &mut Projection, &mut CameraZoom), With<EyeCamera>>,
) {
    let Ok((mut transform, mut projection, mut zoom)) = camera.single_mut() else {
        return;
    };

    let (z, fov, secs, ease) = if nav.is_zoomed() {
        (
            config.zoomed_camera_z,
            config.zoomed_fov,
            config.zoom_in_secs,
            EaseFunction::CubicInOut,
        )
    } else {
        let width = windows.single().map(|w| w.width()).unwrap_or(f32::MAX);
        (
            config.resting_camera_z(width),
            config.default_fov,
            config.zoom_out_secs,
            EaseFunction::CubicOut,
        )
    };
    zoom.z.retarget(z, secs, ease);
    zoom.fov.retarget(fov, secs, ease);

    if zoom.z.is_finished() && zoom.fov.is_finished() && transform.translation.z == zoom.z.target() {
        return;
    }
    let dt = time.delta_secs();
    transform.translation.z = zoom.z.tick(dt);
    let fov = zoom.fov.tick(dt);
    if let Projection::Perspective(perspective) = &mut *projection {
        perspective.fov = fov.to_radians();
    }
}

fn animate_eye_root(
    nav: Res<Navigation>,
    config: Res<EyeConfig>,
    parallax: Res<Parallax>,
    time: Res<Time>,
    mut root: Query<&mut Transform, With<EyeRoot>>,
) {
    let Ok(mut transform) = root.single_mut() else {
        return;
    };
    if nav.is_zoomed() {
        let (x, y, _) = transform.rotation.to_euler(EulerRot::XYZ);
        let dt = time.delta_secs();
        let x = ease_towards(x, 0.0, RECENTER_EASE, dt);
        let y = ease_towards(y, 0.0, RECENTER_EASE, dt);
        transform.rotation = Quat::from_euler(EulerRot::XYZ, x, y, 0.0);
        return;
    }
    let tilt = parallax.current * config.parallax_strength;
    transform.rotation = Quat::from_euler(EulerRot::XYZ, tilt.y * 0.8, tilt.x, 0.0);
    let breathe = 1.0 + (time.elapsed_secs() * config.breathe_speed).sin() * config.breathe_amount;
    transform.scale = Vec3::splat(breathe);
}

fn animate_shells(
    nav: Res<Navigation>,
    config: Res<EyeConfig>,
    time: Res<Time>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut shells: Query<(
        &mut Shell,
        &mut ShellFade,
        &mut Transform,
        &MeshMaterial3d<StandardMaterial>,
    )>,
) {
    let t = time.elapsed_secs();
    let dt = time.delta_secs();
    for (mut shell, mut fade, mut transform, material) in &mut shells {
        let target = derive_target(&nav, &config, shell.index, t);
        fade.opacity = ease_towards(fade.opacity, target.opacity, OPACITY_EASE, dt);
        fade.scale = ease_towards(fade.scale, target.scale, SCALE_EASE, dt);
        transform.scale = Vec3::splat(fade.scale);

        if !nav.is_zoomed() {
            let i = shell.index as f32;
            let direction = if shell.index % 2 == 0 { 1.0 } else { -1.0 };
            // The reference spin is per 60 Hz frame.
            shell.spin += config.rotation_speed * 0.01 * direction * dt * 60.0;
            let wobble_z = (t * config.wobble_speed + i * 0.4).sin() * config.wobble_amount;
            let wobble_x =
                (t * config.wobble_speed * 0.7 + i * 0.3).cos() * config.wobble_amount * 0.5;
            transform.rotation =
                Quat::from_euler(EulerRot::XYZ, FRAC_PI_2 + wobble_x, shell.spin, wobble_z);
        }

        if let Some(material) = materials.get_mut(&material.0) {
            material.base_color.set_alpha(fade.opacity);
        }
    }
}

fn animate_orbits(
    nav: Res<Navigation>,
    config: Res<EyeConfig>,
    time: Res<Time>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut orbits: Query<(&mut Orbit, &mut Transform, &MeshMaterial3d<StandardMaterial>)>,
) {
    let t = time.elapsed_secs();
    let count = config.orbit_count.max(1) as f32;
    for (mut orbit, mut transform, material) in &mut orbits {
        let i = orbit.index as f32;
        let speed = config.orbit_speed * (1.0 + i * 0.15);
        let phase = i * TAU / count;
        let angle = t * speed + phase;
        let tilt = (t * speed * 0.7 + phase).sin() * 0.4;
        transform.rotation = Quat::from_euler(
            EulerRot::XYZ,
            angle.sin() * 0.8 + tilt,
            angle,
            (angle * 0.5).cos() * 0.3,
        );

        let target = if nav.is_zoomed() {
            ORBIT_ZOOMED_OPACITY
        } else {
            config.orbit_opacity
        };
        orbit.opacity = ease_towards(orbit.opacity, target, OPACITY_EASE, time.delta_secs());
        if let Some(material) = materials.get_mut(&material.0) {
            material.base_color.set_alpha(orbit.opacity);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::SectionId;

    fn config() -> EyeConfig {
        EyeConfig::default()
    }

    #[test]
    fn section_shells_are_one_through_five() {
        assert_eq!(section_for_shell(0), None);
        for shell in 1..=5 {
            assert_eq!(section_for_shell(shell), Some(shell - 1));
        }
        assert_eq!(section_for_shell(6), None);
        assert_eq!(section_for_shell(7), None);
    }

    #[test]
    fn idle_targets_follow_unlock_and_hover() {
        let config = config();
        let mut nav = Navigation::default();
        nav.set_hovered_ring(Some(0));

        assert_eq!(derive_target(&nav, &config, 1, 0.0).opacity, config.hover_opacity);
        assert_eq!(derive_target(&nav, &config, 2, 0.0).opacity, config.locked_opacity);
        assert_eq!(derive_target(&nav, &config, 6, 0.0).opacity, config.inactive_opacity);
        assert_eq!(derive_target(&nav, &config, 0, 0.0).opacity, config.core_opacity);

        nav.set_hovered_ring(None);
        assert_eq!(derive_target(&nav, &config, 1, 0.0).opacity, config.active_opacity);
    }

    #[test]
    fn zoom_focuses_the_active_shell_and_hides_the_rest() {
        let config = config();
        let mut nav = Navigation::default();
        nav.advance_step();
        nav.open_section(SectionId::Works);

        let focused = derive_target(&nav, &config, 2, 0.0);
        assert_eq!(focused.opacity, config.active_opacity);
        assert_eq!(focused.scale, FOCUSED_SCALE);

        for shell in [0, 1, 3, 6, 7] {
            let target = derive_target(&nav, &config, shell, 0.0);
            assert_eq!(target.opacity, config.hidden_opacity);
            assert_eq!(target.scale, RECEDED_SCALE);
        }
    }

    #[test]
    fn core_breathes_only_at_rest() {
        let config = config();
        let mut nav = Navigation::default();
        let quarter = FRAC_PI_2 / 0.8;
        assert!((derive_target(&nav, &config, 0, quarter).scale - 1.03).abs() < 1e-5);
        nav.open_section(SectionId::About);
        assert_eq!(derive_target(&nav, &config, 0, quarter).scale, RECEDED_SCALE);
    }

    #[test]
    fn picking_lands_on_the_outermost_clickable_shell() {
        let config = config();
        let mut nav = Navigation::default();
        // Through the middle only About is unlocked.
        assert_eq!(pick_section(&nav, &config, 0.0), Some(0));
        // Outside the About shell nothing is clickable yet.
        assert_eq!(pick_section(&nav, &config, 0.5), None);

        nav.advance_step();
        // Works (radius 0.59) covers About, so the centre now opens Works.
        assert_eq!(pick_section(&nav, &config, 0.0), Some(1));
        assert_eq!(pick_section(&nav, &config, 0.8), None);

        nav.advance_step();
        assert_eq!(pick_section(&nav, &config, 0.0), Some(2));
        assert_eq!(pick_section(&nav, &config, 0.5), Some(2));
        assert_eq!(pick_section(&nav, &config, 0.7), Some(2));
        assert_eq!(pick_section(&nav, &config, 0.85), None);
        assert_eq!(pick_section(&nav, &config, 2.0), None);
    }

    #[test]
    fn click_on_a_ring_opens_it_and_drops_the_hover() {
        let config = config();
        let nav = Navigation::default();
        assert_eq!(
            resolve_pick(&nav, &config, Some(0.1), false, false),
            Pick {
                hovered: Some(0),
                open: None
            }
        );
        assert_eq!(
            resolve_pick(&nav, &config, Some(0.1), false, true),
            Pick {
                hovered: None,
                open: Some(0)
            }
        );
    }

    #[test]
    fn clicks_over_ui_or_while_zoomed_do_nothing() {
        let config = config();
        let idle = Pick {
            hovered: None,
            open: None,
        };
        let mut nav = Navigation::default();
        nav.set_hovered_ring(Some(0));
        assert_eq!(resolve_pick(&nav, &config, Some(0.1), true, true), idle);

        nav.open_section(SectionId::About);
        assert_eq!(resolve_pick(&nav, &config, Some(0.1), false, true), idle);
        // Off the eye entirely.
        assert_eq!(resolve_pick(&Navigation::default(), &config, None, false, true), idle);
    }

    #[test]
    fn nothing_is_picked_while_zoomed() {
        let config = config();
        let mut nav = Navigation::default();
        nav.open_section(SectionId::About);
        assert_eq!(pick_section(&nav, &config, 0.0), None);
    }

    #[test]
    fn wire_sphere_vertices_sit_on_the_radius() {
        let mesh = wire_sphere(0.59, 16);
        let Some(positions) = mesh
            .attribute(Mesh::ATTRIBUTE_POSITION)
            .and_then(|attr| attr.as_float3())
        else {
            panic!("wire sphere has no positions");
        };
        assert!(!positions.is_empty());
        for p in positions {
            assert!((Vec3::from_array(*p).length() - 0.59).abs() < 1e-4);
        }
    }
}
