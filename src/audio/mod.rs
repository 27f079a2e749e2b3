// Click cue and ambient bed, synthesized at startup and played through bevy_audio.
pub mod synth;

use bevy::audio::{AudioSinkPlayback, Volume};
use bevy::prelude::*;

use crate::navigation::Navigation;
use synth::SAMPLE_RATE;

pub struct SoundPlugin;

impl Plugin for SoundPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<AudioCue>()
            .init_resource::<AmbientBed>()
            .add_systems(Startup, build_sound_bank)
            .add_systems(
                Update,
                (start_on_first_interaction, play_cues, fade_ambient).chain(),
            );
    }
}

/// Fire-and-forget sound requests.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    RingClick,
    StartAmbient,
}

/// Seconds for the bed to fade between silent and full volume.
const FADE_SECS: f32 = 0.3;

/// Synthesized clips. A clip that failed to synthesize stays `None` and its
/// cue becomes a no-op.
#[derive(Resource, Default)]
pub struct SoundBank {
    click: Option<Handle<AudioSource>>,
    ambient: Option<Handle<AudioSource>>,
}

#[derive(Resource, Default, Debug)]
pub struct AmbientBed {
    started: bool,
    volume: f32,
}

impl AmbientBed {
    pub fn is_started(&self) -> bool {
        self.started
    }
}

#[derive(Component)]
struct AmbientSink;

fn build_sound_bank(mut commands: Commands, mut sources: ResMut<Assets<AudioSource>>) {
    let click = store_clip(&mut sources, "ring click", &synth::ring_click(SAMPLE_RATE));
    let ambient = store_clip(&mut sources, "ambient bed", &synth::ambient_bed(SAMPLE_RATE));
    commands.insert_resource(SoundBank { click, ambient });
}

fn store_clip(
    sources: &mut Assets<AudioSource>,
    name: &str,
    samples: &[f32],
) -> Option<Handle<AudioSource>> {
    match synth::encode_wav(samples, SAMPLE_RATE) {
        Ok(bytes) => Some(sources.add(AudioSource {
            bytes: bytes.into(),
        })),
        Err(err) => {
            warn!("{name} disabled: {err}");
            None
        }
    }
}

/// Browsers only allow audio after a gesture, so the bed waits for one.
fn start_on_first_interaction(
    bed: Res<AmbientBed>,
    mouse: Res<ButtonInput<MouseButton>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    touches: Res<Touches>,
    mut cues: MessageWriter<AudioCue>,
) {
    if bed.is_started() {
        return;
    }
    let interacted = mouse.get_just_pressed().next().is_some()
        || keyboard.get_just_pressed().next().is_some()
        || touches.any_just_pressed();
    if interacted {
        cues.write(AudioCue::StartAmbient);
    }
}

fn play_cues(
    mut commands: Commands,
    mut cues: MessageReader<AudioCue>,
    mut bed: ResMut<AmbientBed>,
    bank: Option<Res<SoundBank>>,
    nav: Res<Navigation>,
) {
    let Some(bank) = bank else {
        cues.clear();
        return;
    };
    for cue in cues.read() {
        match cue {
            AudioCue::RingClick => {
                if !nav.is_sound_enabled() {
                    continue;
                }
                if let Some(click) = &bank.click {
                    commands.spawn((AudioPlayer::new(click.clone()), PlaybackSettings::DESPAWN));
                }
                start_ambient(&mut commands, &mut bed, &bank);
            }
            AudioCue::StartAmbient => start_ambient(&mut commands, &mut bed, &bank),
        }
    }
}

fn start_ambient(commands: &mut Commands, bed: &mut AmbientBed, bank: &SoundBank) {
    if bed.is_started() {
        return;
    }
    bed.started = true;
    let Some(ambient) = &bank.ambient else {
        return;
    };
    commands.spawn((
        AmbientSink,
        AudioPlayer::new(ambient.clone()),
        PlaybackSettings::LOOP.with_volume(Volume::Linear(0.0)),
    ));
    info!("ambient bed started");
}

/// Linear ramp of the bed volume towards on or off.
pub fn step_volume(current: f32, enabled: bool, delta_secs: f32) -> f32 {
    let target = if enabled { 1.0 } else { 0.0 };
    let step = delta_secs / FADE_SECS;
    if current < target {
        (current + step).min(target)
    } else {
        (current - step).max(target)
    }
}

fn fade_ambient(
    time: Res<Time>,
    nav: Res<Navigation>,
    mut bed: ResMut<AmbientBed>,
    mut sinks: Query<&mut AudioSink, With<AmbientSink>>,
) {
    if !bed.is_started() {
        return;
    }
    bed.volume = step_volume(bed.volume, nav.is_sound_enabled(), time.delta_secs());
    // The sink appears some frames after the spawn, so keep applying.
    for mut sink in &mut sinks {
        sink.set_volume(Volume::Linear(bed.volume));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bed_starts_once_and_survives_a_missing_clip() {
        let mut world = World::new();
        let mut queue = bevy::ecs::world::CommandQueue::default();
        let mut commands = Commands::new(&mut queue, &world);
        let mut bed = AmbientBed::default();
        let bank = SoundBank::default();

        assert!(!bed.is_started());
        start_ambient(&mut commands, &mut bed, &bank);
        start_ambient(&mut commands, &mut bed, &bank);
        assert!(bed.is_started());

        queue.apply(&mut world);
        let mut sinks = world.query::<&AmbientSink>();
        assert_eq!(sinks.iter(&world).count(), 0);
    }

    #[test]
    fn volume_ramps_up_and_stops_at_full() {
        let mut volume = 0.0;
        for _ in 0..10 {
            volume = step_volume(volume, true, 0.1);
        }
        assert_eq!(volume, 1.0);
    }

    #[test]
    fn volume_reaches_silence_after_the_fade() {
        let half = step_volume(1.0, false, FADE_SECS / 2.0);
        assert!((half - 0.5).abs() < 1e-5);
        assert_eq!(step_volume(half, false, FADE_SECS), 0.0);
    }
}
