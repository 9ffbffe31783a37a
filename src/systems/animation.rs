//! Animation system.
//!
//! Advances every playing [`Animation`] by the frame delta and shows the
//! matching sheet frame on its [`Sprite`]. Stopped animations that were just
//! rewound show their clip's first frame once and then leave the sprite alone.

use bevy_ecs::prelude::*;
use log::warn;

use crate::components::animation::Animation;
use crate::components::sprite::Sprite;
use crate::resources::animationstore::AnimationStore;
use crate::resources::worldtime::WorldTime;

pub fn animation(
    mut query: Query<(&mut Animation, &mut Sprite)>,
    animation_store: Res<AnimationStore>,
    time: Res<WorldTime>,
) {
    for (mut anim, mut sprite) in query.iter_mut() {
        let Some(clip) = animation_store.get(&anim.animation_key) else {
            if anim.playing {
                warn!("unknown animation '{}'", anim.animation_key);
                anim.playing = false;
            }
            continue;
        };

        if anim.rewind {
            anim.rewind = false;
            sprite.set_frame(clip.sheet_frame(0));
        }
        if !anim.playing || clip.fps <= 0.0 {
            continue;
        }

        anim.elapsed_time += time.delta;
        let frame_duration = 1.0 / clip.fps;
        while anim.elapsed_time >= frame_duration {
            anim.elapsed_time -= frame_duration;
            anim.frame_index += 1;
            if anim.frame_index >= clip.frames.len() {
                if clip.looped {
                    anim.frame_index = 0;
                } else {
                    anim.frame_index = clip.frames.len().saturating_sub(1);
                    anim.playing = false;
                    break;
                }
            }
        }

        let frame = clip.sheet_frame(anim.frame_index);
        if sprite.frame != frame {
            sprite.set_frame(frame);
        }
    }
}
