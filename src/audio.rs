use bevy::{
    asset::LoadState,
    audio::{PlaybackMode, Volume},
    prelude::*,
};

pub struct BackgroundAudioPlugin;

impl Plugin for BackgroundAudioPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_track);
        add_audio_control(app);
    }
}

/// Anything else writing `AudioCommand`s (the panel) runs between these two,
/// so its commands land after the first-click Play in the same frame.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioSet {
    Input,
    Apply,
}

fn add_audio_control(app: &mut App) {
    app.insert_resource(AudioSettings::default())
        .add_event::<AudioCommand>()
        .configure_sets(Update, (AudioSet::Input, AudioSet::Apply).chain())
        .add_systems(
            Update,
            (
                play_on_first_click.in_set(AudioSet::Input),
                (apply_audio_commands, sync_track, report_load_failure)
                    .chain()
                    .in_set(AudioSet::Apply),
            ),
        );
}

#[derive(Resource, Clone, Debug, PartialEq)]
pub struct AudioSettings {
    pub path: String,
    pub volume: f32,
    pub looped: bool,
    /// Whether the track should be audible right now.
    pub enabled: bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            path: "sounds/across-the-quiet-galaxy.ogg".into(),
            volume: 0.5,
            looped: true,
            // silent until the first click
            enabled: false,
        }
    }
}

#[derive(Event, Clone, Copy, Debug, PartialEq)]
pub enum AudioCommand {
    Play,
    Stop,
    SetVolume(f32),
}

#[derive(Component)]
struct BackgroundTrack;

fn spawn_track(mut commands: Commands, assets: Res<AssetServer>, settings: Res<AudioSettings>) {
    let mode = if settings.looped {
        PlaybackMode::Loop
    } else {
        PlaybackMode::Once
    };
    commands.spawn((
        BackgroundTrack,
        AudioPlayer::<AudioSource>::new(assets.load(settings.path.clone())),
        PlaybackSettings {
            mode,
            volume: Volume::Linear(settings.volume),
            paused: true,
            ..default()
        },
    ));
}

fn play_on_first_click(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mut started: Local<bool>,
    mut audio: EventWriter<AudioCommand>,
) {
    if !*started && mouse_buttons.just_pressed(MouseButton::Left) {
        *started = true;
        audio.write(AudioCommand::Play);
    }
}

fn apply_audio_commands(mut commands: EventReader<AudioCommand>, mut settings: ResMut<AudioSettings>) {
    for command in commands.read() {
        match *command {
            AudioCommand::Play => settings.enabled = true,
            AudioCommand::Stop => settings.enabled = false,
            AudioCommand::SetVolume(volume) => settings.volume = volume.clamp(0.0, 1.0),
        }
    }
}

/// Pushes the settings onto the sink. The sink only shows up once the track
/// has loaded, so a Play before that is applied when it appears.
fn sync_track(
    settings: Res<AudioSettings>,
    mut sinks: Query<(Entity, &mut AudioSink), With<BackgroundTrack>>,
    mut synced: Local<Option<Entity>>,
) {
    for (entity, mut sink) in &mut sinks {
        if !settings.is_changed() && *synced == Some(entity) {
            continue;
        }
        sink.set_volume(Volume::Linear(settings.volume));
        if settings.enabled {
            sink.play();
        } else {
            sink.pause();
        }
        *synced = Some(entity);
    }
}

/// A missing or broken track only costs the sound, never the galaxy.
fn report_load_failure(
    assets: Res<AssetServer>,
    tracks: Query<&AudioPlayer, With<BackgroundTrack>>,
    mut reported: Local<bool>,
) {
    if *reported {
        return;
    }
    for player in &tracks {
        if let Some(LoadState::Failed(err)) = assets.get_load_state(player.0.id()) {
            warn!("Background audio unavailable, continuing without sound: {}", err);
            *reported = true;
        }
    }
}
