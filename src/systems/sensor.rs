//! Locomotive versus sensor overlap.
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::sensor::{Locomotive, Sensor};
use crate::events::simulation::SimInputEvent;
use crate::resources::simulation::{SimInput, Simulation};

/// Trigger [`SimInput::SensorEntered`] on the frame the locomotive starts
/// overlapping any sensor. Staying on a sensor does not trigger again.
pub fn sensor_overlap_system(
    locomotives: Query<(&MapPosition, &BoxCollider), With<Locomotive>>,
    sensors: Query<(&MapPosition, &BoxCollider), With<Sensor>>,
    mut simulation: ResMut<Simulation>,
    mut commands: Commands,
) {
    let overlapping = locomotives.iter().any(|(loco_pos, loco_box)| {
        sensors
            .iter()
            .any(|(sensor_pos, sensor_box)| loco_box.overlaps(loco_pos.pos, sensor_box, sensor_pos.pos))
    });

    if overlapping && !simulation.train_over_sensor {
        debug!("locomotive entered a sensor");
        commands.trigger(SimInputEvent {
            input: SimInput::SensorEntered,
        });
    }
    simulation.train_over_sensor = overlapping;
}
