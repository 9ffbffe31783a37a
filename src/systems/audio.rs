//! Audio system implementation backed by a dedicated thread and Raylib.
//!
//! - [`audio_thread`] runs on its own OS thread, owns the Raylib audio device,
//!   and processes [`AudioCmd`] messages, emitting [`AudioMessage`] responses.
//! - [`forward_audio_cmds`] hands the commands written by systems and
//!   observers this frame over to the thread.
//! - [`poll_audio_messages`] non-blockingly drains the thread's replies into
//!   the ECS message queue, and [`log_audio_messages`] reports failures.
//!
//! Raylib audio calls stay on a single thread; the game thread only talks to
//! it through lock-free channels.

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::resources::audio::AudioBridge;
use bevy_ecs::prelude::{MessageReader, MessageWriter, Messages, Res, ResMut};
use crossbeam_channel::{Receiver, Sender};
use log::{debug, error, info, warn};
use raylib::core::audio::{Music, RaylibAudio};
use rustc_hash::{FxHashMap, FxHashSet};

/// Drain pending replies from the audio thread into `Messages<AudioMessage>`.
pub fn poll_audio_messages(bridge: Res<AudioBridge>, mut writer: MessageWriter<AudioMessage>) {
    writer.write_batch(bridge.rx_msg.try_iter());
}

/// Advance the ECS message queue for [`AudioMessage`].
pub fn update_bevy_audio_messages(mut msgs: ResMut<Messages<AudioMessage>>) {
    msgs.update();
}

/// Forward ECS [`AudioCmd`] messages to the audio thread.
pub fn forward_audio_cmds(bridge: Res<AudioBridge>, mut reader: MessageReader<AudioCmd>) {
    for cmd in reader.read() {
        // the receiver is gone only after shutdown
        let _ = bridge.tx_cmd.send(cmd.clone());
    }
}

/// Advance the ECS message queue for [`AudioCmd`].
pub fn update_bevy_audio_cmds(mut msgs: ResMut<Messages<AudioCmd>>) {
    msgs.update();
}

/// Report what the audio thread answered. Load failures are not fatal: the
/// simulation runs silently without the missing sound.
pub fn log_audio_messages(mut reader: MessageReader<AudioMessage>) {
    for msg in reader.read() {
        match msg {
            AudioMessage::MusicLoadFailed { id, error } => {
                warn!("sound '{}' unavailable: {}", id, error);
            }
            other => debug!("audio: {:?}", other),
        }
    }
}

/// Entry point of the dedicated audio thread.
///
/// Owns every `Music` handle for the life of the thread, pumps
/// music streams, restarts looped streams and reports finished ones. Blocks
/// until [`AudioCmd::Shutdown`] is received.
pub fn audio_thread(rx_cmd: Receiver<AudioCmd>, tx_evt: Sender<AudioMessage>) {
    let audio = match RaylibAudio::init_audio_device() {
        Ok(device) => device,
        Err(e) => {
            error!("failed to initialize audio device: {}", e);
            // keep draining so senders never block on a dead thread
            for cmd in rx_cmd.iter() {
                if cmd == AudioCmd::Shutdown {
                    break;
                }
            }
            return;
        }
    };

    info!(
        "[audio] thread starting (id={:?})",
        std::thread::current().id()
    );

    let mut musics: FxHashMap<String, Music> = FxHashMap::default();
    let mut playing: FxHashSet<String> = FxHashSet::default();
    let mut looped: FxHashSet<String> = FxHashSet::default();

    'run: loop {
        for cmd in rx_cmd.try_iter() {
            match cmd {
                AudioCmd::LoadMusic { id, path } => match audio.new_music(&path) {
                    Ok(music) => {
                        debug!("[audio] loaded id='{}' path='{}'", id, path);
                        musics.insert(id.clone(), music);
                        let _ = tx_evt.send(AudioMessage::MusicLoaded { id });
                    }
                    Err(e) => {
                        let _ = tx_evt.send(AudioMessage::MusicLoadFailed {
                            id,
                            error: format!("{} ({})", e, path),
                        });
                    }
                },
                AudioCmd::PlayMusic {
                    id,
                    looped: want_loop,
                } => {
                    if let Some(music) = musics.get(&id) {
                        debug!("[audio] play id='{}' looped={}", id, want_loop);
                        music.seek_stream(0.0);
                        music.play_stream();
                        playing.insert(id.clone());
                        if want_loop {
                            looped.insert(id.clone());
                        } else {
                            looped.remove(&id);
                        }
                        let _ = tx_evt.send(AudioMessage::MusicPlayStarted { id });
                    }
                }
                AudioCmd::StopMusic { id } => {
                    if let Some(music) = musics.get(&id) {
                        music.stop_stream();
                        playing.remove(&id);
                        looped.remove(&id);
                        let _ = tx_evt.send(AudioMessage::MusicStopped { id });
                    }
                }
                AudioCmd::StopAllMusic => {
                    for id in playing.drain() {
                        if let Some(music) = musics.get(&id) {
                            music.stop_stream();
                        }
                        let _ = tx_evt.send(AudioMessage::MusicStopped { id });
                    }
                    looped.clear();
                }
                AudioCmd::VolumeMusic { id, vol } => {
                    if let Some(music) = musics.get(&id) {
                        music.set_volume(vol);
                    }
                }
                AudioCmd::Shutdown => {
                    info!("[audio] shutdown requested");
                    musics.clear();
                    playing.clear();
                    looped.clear();
                    break 'run;
                }
            }
        }

        // update_stream() must be called regularly while playing
        let mut ended: Vec<String> = Vec::new();
        for id in playing.iter() {
            if let Some(music) = musics.get(id) {
                if music.is_stream_playing() {
                    music.update_stream();
                } else if music.get_time_played() >= music.get_time_length() - 0.01 {
                    ended.push(id.clone());
                }
            }
        }
        for id in ended {
            if looped.contains(&id) {
                if let Some(music) = musics.get(&id) {
                    music.seek_stream(0.0);
                    music.play_stream();
                }
            } else {
                playing.remove(&id);
                let _ = tx_evt.send(AudioMessage::MusicFinished { id });
            }
        }

        std::thread::sleep(std::time::Duration::from_millis(10));
    }

    info!(
        "[audio] thread exiting (id={:?})",
        std::thread::current().id()
    );
}
