use bevy_ecs::message::Message;

/// Commands sent *to* the audio thread.
///
/// Sounds are loaded as music streams so the warning bell can loop until it
/// is stopped.
#[derive(Message, Debug, Clone, PartialEq)]
pub enum AudioCmd {
    LoadMusic { id: String, path: String },
    PlayMusic { id: String, looped: bool },
    StopMusic { id: String },
    StopAllMusic,
    VolumeMusic { id: String, vol: f32 },
    Shutdown,
}

/// Events sent *back* from the audio thread.
#[derive(Message, Debug, Clone, PartialEq)]
pub enum AudioMessage {
    MusicLoaded { id: String },
    MusicLoadFailed { id: String, error: String },
    MusicPlayStarted { id: String },
    MusicStopped { id: String },
    /// A non-looping stream reached its end.
    MusicFinished { id: String },
}
