//! Time update systems.
//!
//! [`update_world_time`] advances the shared
//! [`WorldTime`](crate::resources::worldtime::WorldTime) once per frame,
//! and [`update_timers`] ticks every [`Timer`] component with its delta.
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::timer::{Timer, TimerTick};
use crate::events::timer::TimerEvent;
use crate::resources::worldtime::WorldTime;

/// Update elapsed and delta seconds on the `WorldTime` resource.
///
/// `dt` is the unscaled frame delta in seconds; `time_scale` is applied here.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let scaled_dt = dt * wt.time_scale;
    wt.elapsed += scaled_dt;
    wt.delta = scaled_dt;
    wt.frame_count += 1;
}

/// Advance timers and trigger a [`TimerEvent`] for each firing.
///
/// A timer on its last firing is removed before the event is delivered, so
/// an observer may arm a fresh one on the same entity.
pub fn update_timers(
    mut query: Query<(Entity, &mut Timer)>,
    time: Res<WorldTime>,
    mut commands: Commands,
) {
    for (entity, mut timer) in query.iter_mut() {
        match timer.advance(time.delta) {
            TimerTick::Pending => {}
            TimerTick::Fired => {
                debug!("timer '{}' fired on {:?}", timer.signal, entity);
                commands.trigger(TimerEvent {
                    entity,
                    signal: timer.signal.clone(),
                });
            }
            TimerTick::Finished => {
                debug!("timer '{}' finished on {:?}", timer.signal, entity);
                commands.entity(entity).remove::<Timer>();
                commands.trigger(TimerEvent {
                    entity,
                    signal: timer.signal.clone(),
                });
            }
        }
    }
}
