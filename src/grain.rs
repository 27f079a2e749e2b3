// Film grain drawn over the whole window.
use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use bevy::ui::widget::NodeImageMode;
use rand::Rng;

pub struct GrainPlugin;

impl Plugin for GrainPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_grain)
            .add_systems(Update, refresh_grain);
    }
}

const GRAIN_SIZE: u32 = 256;
/// Peak alpha of a grain pixel out of 255.
const GRAIN_ALPHA: u8 = 14;
const GRAIN_FPS: f32 = 24.0;

#[derive(Component)]
struct Grain {
    image: Handle<Image>,
    timer: Timer,
}

fn spawn_grain(mut commands: Commands, mut images: ResMut<Assets<Image>>) {
    let mut image = Image::new_fill(
        Extent3d {
            width: GRAIN_SIZE,
            height: GRAIN_SIZE,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        &[0, 0, 0, 0],
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::default(),
    );
    if let Some(data) = image.data.as_mut() {
        fill_grain(data, &mut rand::rng());
    }
    let image = images.add(image);

    commands.spawn((
        Grain {
            image: image.clone(),
            timer: Timer::from_seconds(1.0 / GRAIN_FPS, TimerMode::Repeating),
        },
        ImageNode::new(image).with_mode(NodeImageMode::Tiled {
            tile_x: true,
            tile_y: true,
            stretch_value: 1.0,
        }),
        Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        },
        Pickable::IGNORE,
        GlobalZIndex(200),
    ));
}

/// Writes random grey noise with a low random alpha into an RGBA8 buffer.
pub fn fill_grain(data: &mut [u8], rng: &mut impl Rng) {
    for pixel in data.chunks_exact_mut(4) {
        let shade: u8 = rng.random();
        pixel[0] = shade;
        pixel[1] = shade;
        pixel[2] = shade;
        pixel[3] = rng.random_range(0..=GRAIN_ALPHA);
    }
}

fn refresh_grain(time: Res<Time>, mut grains: Query<&mut Grain>, mut images: ResMut<Assets<Image>>) {
    let mut rng = rand::rng();
    for mut grain in &mut grains {
        if !grain.timer.tick(time.delta()).just_finished() {
            continue;
        }
        let Some(image) = images.get_mut(&grain.image) else {
            continue;
        };
        if let Some(data) = image.data.as_mut() {
            fill_grain(data, &mut rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn grain_stays_faint() {
        let mut data = vec![0u8; 64 * 4];
        fill_grain(&mut data, &mut StdRng::seed_from_u64(7));
        for pixel in data.chunks_exact(4) {
            assert_eq!(pixel[0], pixel[1]);
            assert_eq!(pixel[1], pixel[2]);
            assert!(pixel[3] <= GRAIN_ALPHA);
        }
    }
}
