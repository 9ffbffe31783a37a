//! Engine tick integration tests for movement, waypoints, sensors, timers,
//! buttons, animation and label bindings.

use std::sync::Arc;

use bevy_ecs::prelude::*;
use bevy_ecs::system::ScheduleSystem;
use raylib::prelude::{Color, Vector2};

use railreflex::components::animation::Animation;
use railreflex::components::boxcollider::BoxCollider;
use railreflex::components::button::{Button, ButtonAction, ButtonFrames, FrameCycler, PointerState};
use railreflex::components::dynamictext::DynamicText;
use railreflex::components::mapposition::MapPosition;
use railreflex::components::rigidbody::RigidBody;
use railreflex::components::sensor::{Locomotive, Sensor, Wagon};
use railreflex::components::signalbinding::SignalBinding;
use railreflex::components::sprite::Sprite;
use railreflex::components::timer::Timer;
use railreflex::components::waypointfollower::WaypointFollower;
use railreflex::events::button::ButtonClickedEvent;
use railreflex::events::simulation::SimInputEvent;
use railreflex::events::timer::TimerEvent;
use railreflex::resources::animationstore::{AnimationResource, AnimationStore};
use railreflex::resources::input::InputState;
use railreflex::resources::scenario::{Scenario, Variant};
use railreflex::resources::simulation::{SimInput, Simulation};
use railreflex::resources::worldsignals::WorldSignals;
use railreflex::resources::worldtime::WorldTime;
use railreflex::systems::animation::animation;
use railreflex::systems::button::button_system;
use railreflex::systems::movement::movement_system;
use railreflex::systems::sensor::sensor_overlap_system;
use railreflex::systems::signalbinding::update_world_signals_binding_system;
use railreflex::systems::simulation::sync_train_speed;
use railreflex::systems::time::{update_timers, update_world_time};
use railreflex::systems::waypoint::waypoint_follower_system;

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world(delta: f32) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime {
        elapsed: 0.0,
        delta,
        time_scale: 1.0,
        frame_count: 0,
    });
    world.insert_resource(WorldSignals::default());
    world.insert_resource(InputState::default());
    world.insert_resource(Simulation::new(
        Scenario::new(Variant::Simulation, 1.5).rules,
    ));
    world
}

fn tick<M>(world: &mut World, systems: impl IntoScheduleConfigs<ScheduleSystem, M>) {
    let mut schedule = Schedule::default();
    schedule.add_systems(systems);
    schedule.run(world);
}

fn tick_motion(world: &mut World) {
    tick(world, (waypoint_follower_system, movement_system).chain());
}

fn line() -> Arc<[Vector2]> {
    Arc::from(vec![
        Vector2 { x: 0.0, y: 0.0 },
        Vector2 { x: 100.0, y: 0.0 },
    ])
}

#[derive(Resource)]
struct Heard<T: Send + Sync + 'static>(Vec<T>);

impl<T: Send + Sync + 'static> Default for Heard<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

fn listen<E: Event + Clone>(world: &mut World) {
    world.init_resource::<Heard<E>>();
    world.add_observer(|trigger: On<E>, mut heard: ResMut<Heard<E>>| {
        heard.0.push(trigger.event().clone());
    });
    world.flush();
}

// ---------------------------------------------------------------------------
// movement & waypoints
// ---------------------------------------------------------------------------

#[test]
fn movement_integrates_velocity_into_position() {
    let mut world = make_world(0.0);
    let mut rb = RigidBody::new();
    rb.velocity = Vector2 { x: 10.0, y: 0.0 };
    let entity = world.spawn((MapPosition::new(0.0, 0.0), rb)).id();

    update_world_time(&mut world, 0.5);
    tick(&mut world, movement_system);

    let pos = world.get::<MapPosition>(entity).unwrap();
    assert!(approx_eq(pos.pos.x, 5.0));
    assert!(approx_eq(pos.pos.y, 0.0));
}

#[test]
fn movement_leaves_halted_bodies_in_place() {
    let mut world = make_world(0.0);
    let mut rb = RigidBody::new();
    rb.velocity = Vector2 { x: 10.0, y: 0.0 };
    rb.halt();
    let entity = world.spawn((MapPosition::new(0.0, 0.0), rb)).id();

    update_world_time(&mut world, 1.0);
    tick(&mut world, movement_system);

    assert!(approx_eq(world.get::<MapPosition>(entity).unwrap().pos.x, 0.0));
}

#[test]
fn follower_drives_train_to_the_end_and_stops() {
    let mut world = make_world(0.1);
    let mut follower = WaypointFollower::new(line(), false, 200.0).unwrap();
    follower.start();
    let train = world
        .spawn((MapPosition::new(0.0, 0.0), RigidBody::new(), follower))
        .id();

    // first frame arrives on the start point, then 20 px per frame
    for _ in 0..10 {
        tick_motion(&mut world);
    }

    let pos = world.get::<MapPosition>(train).unwrap().pos;
    assert!(approx_eq(pos.x, 100.0));
    let follower = world.get::<WaypointFollower>(train).unwrap();
    assert!(!follower.running);
    assert!(approx_eq(world.get::<RigidBody>(train).unwrap().speed(), 0.0));

    // stopped trains stay put
    tick_motion(&mut world);
    assert!(approx_eq(world.get::<MapPosition>(train).unwrap().pos.x, 100.0));
}

#[test]
fn follower_cycles_back_to_first_point() {
    let mut world = make_world(0.1);
    let mut follower = WaypointFollower::new(line(), true, 200.0).unwrap();
    follower.start();
    let train = world
        .spawn((MapPosition::new(0.0, 0.0), RigidBody::new(), follower))
        .id();

    for _ in 0..7 {
        tick_motion(&mut world);
    }
    let follower = world.get::<WaypointFollower>(train).unwrap();
    assert!(follower.running);
    assert_eq!(follower.current_index(), 0);
}

#[test]
fn stopped_follower_never_moves() {
    let mut world = make_world(0.1);
    let follower = WaypointFollower::new(line(), true, 200.0).unwrap();
    let train = world
        .spawn((MapPosition::new(0.0, 0.0), RigidBody::new(), follower))
        .id();
    world
        .get_mut::<RigidBody>(train)
        .unwrap()
        .set_velocity(Vector2 { x: 50.0, y: 0.0 });

    tick_motion(&mut world);

    assert!(approx_eq(world.get::<MapPosition>(train).unwrap().pos.x, 0.0));
    assert!(approx_eq(world.get::<RigidBody>(train).unwrap().speed(), 0.0));
}

#[test]
fn train_speed_signal_sets_every_follower() {
    let mut world = make_world(0.1);
    let a = world
        .spawn(WaypointFollower::new(line(), true, 50.0).unwrap())
        .id();
    let b = world
        .spawn(WaypointFollower::new(line(), true, 50.0).unwrap())
        .id();

    tick(&mut world, sync_train_speed);
    assert!(approx_eq(world.get::<WaypointFollower>(a).unwrap().max_speed, 50.0));

    world
        .resource_mut::<WorldSignals>()
        .set_scalar("train_speed", 30.0);
    tick(&mut world, sync_train_speed);
    assert!(approx_eq(world.get::<WaypointFollower>(a).unwrap().max_speed, 30.0));
    assert!(approx_eq(world.get::<WaypointFollower>(b).unwrap().max_speed, 30.0));
}

// ---------------------------------------------------------------------------
// sensors
// ---------------------------------------------------------------------------

#[test]
fn sensor_triggers_once_per_entry() {
    let mut world = make_world(0.0);
    listen::<SimInputEvent>(&mut world);

    world.spawn((
        Sensor,
        MapPosition::new(100.0, 100.0),
        BoxCollider::new(20.0, 20.0),
    ));
    let loco = world
        .spawn((
            Locomotive,
            MapPosition::new(105.0, 105.0),
            BoxCollider::new(10.0, 10.0),
        ))
        .id();

    tick(&mut world, sensor_overlap_system);
    tick(&mut world, sensor_overlap_system);
    assert_eq!(world.resource::<Heard<SimInputEvent>>().0.len(), 1);
    assert_eq!(
        world.resource::<Heard<SimInputEvent>>().0[0].input,
        SimInput::SensorEntered
    );
    assert!(world.resource::<Simulation>().train_over_sensor);

    // leave and come back
    world.get_mut::<MapPosition>(loco).unwrap().pos = Vector2 { x: 300.0, y: 300.0 };
    tick(&mut world, sensor_overlap_system);
    assert!(!world.resource::<Simulation>().train_over_sensor);
    world.get_mut::<MapPosition>(loco).unwrap().pos = Vector2 { x: 105.0, y: 105.0 };
    tick(&mut world, sensor_overlap_system);
    assert_eq!(world.resource::<Heard<SimInputEvent>>().0.len(), 2);
}

#[test]
fn wagons_do_not_trigger_sensors() {
    let mut world = make_world(0.0);
    listen::<SimInputEvent>(&mut world);

    world.spawn((
        Sensor,
        MapPosition::new(100.0, 100.0),
        BoxCollider::new(20.0, 20.0),
    ));
    world.spawn((
        Wagon,
        MapPosition::new(105.0, 105.0),
        BoxCollider::new(10.0, 10.0),
    ));

    tick(&mut world, sensor_overlap_system);
    assert!(world.resource::<Heard<SimInputEvent>>().0.is_empty());
}

// ---------------------------------------------------------------------------
// timers
// ---------------------------------------------------------------------------

#[test]
fn repeating_timer_fires_and_then_removes_itself() {
    let mut world = make_world(0.0);
    listen::<TimerEvent>(&mut world);
    let clock = world
        .spawn(Timer::repeating(1.5, 2, "check_reaction"))
        .id();

    for _ in 0..4 {
        update_world_time(&mut world, 1.5);
        tick(&mut world, update_timers);
    }

    let heard = &world.resource::<Heard<TimerEvent>>().0;
    assert_eq!(heard.len(), 3);
    assert!(heard.iter().all(|e| e.entity == clock && e.signal == "check_reaction"));
    assert!(world.get::<Timer>(clock).is_none());
}

#[test]
fn paused_timer_does_not_fire() {
    let mut world = make_world(0.0);
    listen::<TimerEvent>(&mut world);
    let mut timer = Timer::once(1.0, "autostart");
    timer.pause();
    let entity = world.spawn(timer).id();

    update_world_time(&mut world, 5.0);
    tick(&mut world, update_timers);
    assert!(world.resource::<Heard<TimerEvent>>().0.is_empty());

    world.get_mut::<Timer>(entity).unwrap().resume();
    update_world_time(&mut world, 1.0);
    tick(&mut world, update_timers);
    assert_eq!(world.resource::<Heard<TimerEvent>>().0.len(), 1);
}

// ---------------------------------------------------------------------------
// buttons
// ---------------------------------------------------------------------------

fn press_at(world: &mut World, x: f32, y: f32, pressed: bool) {
    let mut input = world.resource_mut::<InputState>();
    input.pointer.position = Vector2 { x, y };
    input.pointer.just_pressed = pressed;
    input.pointer.active = pressed;
    input.pointer.just_released = !pressed;
}

#[test]
fn button_click_needs_press_and_release_inside() {
    let mut world = make_world(0.0);
    listen::<ButtonClickedEvent>(&mut world);
    let start = world
        .spawn((
            MapPosition::new(194.0, 40.0),
            Sprite::new("controlButton", 64.0, 64.0, Vector2 { x: 0.0, y: 0.0 })
                .with_columns(9)
                .with_frame(1),
            Button::new(ButtonAction::Start, ButtonFrames::new(2, 1, 0)),
        ))
        .id();

    press_at(&mut world, 200.0, 50.0, true);
    tick(&mut world, button_system);
    assert_eq!(world.get::<Button>(start).unwrap().state, PointerState::Down);
    assert_eq!(world.get::<Sprite>(start).unwrap().frame, 0);

    press_at(&mut world, 200.0, 50.0, false);
    tick(&mut world, button_system);
    let heard = &world.resource::<Heard<ButtonClickedEvent>>().0;
    assert_eq!(heard.len(), 1);
    assert_eq!(heard[0].action, ButtonAction::Start);
    assert_eq!(world.get::<Button>(start).unwrap().state, PointerState::Over);
    assert_eq!(world.get::<Sprite>(start).unwrap().frame, 2);
}

#[test]
fn button_release_outside_is_not_a_click() {
    let mut world = make_world(0.0);
    listen::<ButtonClickedEvent>(&mut world);
    let start = world
        .spawn((
            MapPosition::new(194.0, 40.0),
            Sprite::new("controlButton", 64.0, 64.0, Vector2 { x: 0.0, y: 0.0 }).with_columns(9),
            Button::new(ButtonAction::Start, ButtonFrames::new(2, 1, 0)),
        ))
        .id();

    press_at(&mut world, 200.0, 50.0, true);
    tick(&mut world, button_system);
    press_at(&mut world, 500.0, 500.0, false);
    tick(&mut world, button_system);

    assert!(world.resource::<Heard<ButtonClickedEvent>>().0.is_empty());
    assert_eq!(world.get::<Button>(start).unwrap().state, PointerState::Out);
    assert_eq!(world.get::<Sprite>(start).unwrap().frame, 1);
}

#[test]
fn cycling_buttons_keep_their_frame() {
    let mut world = make_world(0.0);
    let dial = world
        .spawn((
            MapPosition::new(0.0, 0.0),
            Sprite::new("speedControl", 200.0, 200.0, Vector2 { x: 0.0, y: 0.0 })
                .with_columns(7)
                .with_frame(3),
            Button::new(ButtonAction::SpeedControl, ButtonFrames::fixed(0)),
            FrameCycler::new(7),
        ))
        .id();

    press_at(&mut world, 10.0, 10.0, true);
    tick(&mut world, button_system);
    assert_eq!(world.get::<Sprite>(dial).unwrap().frame, 3);
}

// ---------------------------------------------------------------------------
// animation & labels
// ---------------------------------------------------------------------------

#[test]
fn animation_loops_through_clip_frames() {
    let mut world = make_world(0.0);
    let mut store = AnimationStore::default();
    store.insert("step2", AnimationResource::new(vec![2, 3], 4.0, true));
    world.insert_resource(store);

    let mut anim = Animation::new("step2");
    anim.play("step2");
    let schema = world
        .spawn((
            anim,
            Sprite::new("schemat", 400.0, 400.0, Vector2 { x: 0.0, y: 0.0 }).with_columns(4),
        ))
        .id();

    update_world_time(&mut world, 0.1);
    tick(&mut world, animation);
    assert_eq!(world.get::<Sprite>(schema).unwrap().frame, 2);

    update_world_time(&mut world, 0.25);
    tick(&mut world, animation);
    assert_eq!(world.get::<Sprite>(schema).unwrap().frame, 3);

    update_world_time(&mut world, 0.25);
    tick(&mut world, animation);
    assert_eq!(world.get::<Sprite>(schema).unwrap().frame, 2);
}

#[test]
fn stopped_animation_rewinds_to_first_frame() {
    let mut world = make_world(0.0);
    let mut store = AnimationStore::default();
    store.insert("ringing", AnimationResource::new(vec![0, 1], 8.0, true));
    world.insert_resource(store);

    let mut anim = Animation::new("ringing");
    anim.play("ringing");
    let bell = world
        .spawn((
            anim,
            Sprite::new("reactionBell", 50.0, 50.0, Vector2 { x: 0.5, y: 0.5 }).with_columns(2),
        ))
        .id();
    update_world_time(&mut world, 0.125);
    tick(&mut world, animation);
    assert_eq!(world.get::<Sprite>(bell).unwrap().frame, 1);

    world.get_mut::<Animation>(bell).unwrap().stop();
    update_world_time(&mut world, 0.125);
    tick(&mut world, animation);
    assert_eq!(world.get::<Sprite>(bell).unwrap().frame, 0);
    assert!(!world.get::<Animation>(bell).unwrap().playing);
}

#[test]
fn labels_follow_world_signals() {
    let mut world = make_world(0.0);
    let speed = world
        .spawn((
            DynamicText::new("0", 30.0, Color::BLACK),
            SignalBinding::new("train_speed"),
        ))
        .id();
    let score = world
        .spawn((
            DynamicText::new("", 30.0, Color::WHITE),
            SignalBinding::new("score").with_format("Score: {}"),
        ))
        .id();
    let missing = world
        .spawn((
            DynamicText::new("untouched", 30.0, Color::WHITE),
            SignalBinding::new("nothing"),
        ))
        .id();

    {
        let mut signals = world.resource_mut::<WorldSignals>();
        signals.set_scalar("train_speed", 40.0);
        signals.set_integer("score", 3);
    }
    tick(&mut world, update_world_signals_binding_system);

    assert_eq!(world.get::<DynamicText>(speed).unwrap().content, "40");
    assert_eq!(world.get::<DynamicText>(score).unwrap().content, "Score: 3");
    assert_eq!(world.get::<DynamicText>(missing).unwrap().content, "untouched");
}
