//! Drawing.
//!
//! Everything with a [`ZIndex`] is drawn back to front: filled rectangles,
//! track polylines, sprites and texts. A sprite whose texture is not loaded
//! is drawn as a grey box of the same size, so the scene stays readable
//! without art. With [`DebugMode`] present, colliders (labelled with their
//! [`Group`]), waypoint targets and the simulation state are overlaid.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::dynamictext::DynamicText;
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::shape::{FilledRect, TrackLine};
use crate::components::sprite::Sprite;
use crate::components::waypointfollower::WaypointFollower;
use crate::components::zindex::ZIndex;
use crate::resources::debugmode::DebugMode;
use crate::resources::scenario::Scenario;
use crate::resources::screensize::ScreenSize;
use crate::resources::simulation::Simulation;
use crate::resources::texturestore::TextureStore;

const PLACEHOLDER: Color = Color {
    r: 150,
    g: 150,
    b: 150,
    a: 255,
};

enum Drawable<'a> {
    Rect(&'a FilledRect, Vector2),
    Line(&'a TrackLine),
    Sprite {
        sprite: &'a Sprite,
        pos: Vector2,
        scale: Vector2,
        degrees: f32,
    },
    Text(&'a DynamicText, Vector2),
}

#[allow(clippy::too_many_arguments)]
pub fn render_system(
    mut rl: NonSendMut<RaylibHandle>,
    thread: NonSend<RaylibThread>,
    textures: Res<TextureStore>,
    scenario: Res<Scenario>,
    screen: Res<ScreenSize>,
    rects: Query<(&FilledRect, &MapPosition, &ZIndex)>,
    lines: Query<(&TrackLine, &ZIndex)>,
    sprites: Query<(
        &Sprite,
        &MapPosition,
        &ZIndex,
        Option<&Scale>,
        Option<&Rotation>,
    )>,
    texts: Query<(&DynamicText, &MapPosition, &ZIndex)>,
    debug: Option<Res<DebugMode>>,
    colliders: Query<(&BoxCollider, &MapPosition, Option<&Group>)>,
    followers: Query<&WaypointFollower>,
    simulation: Option<Res<Simulation>>,
    entities: Query<Entity>,
) {
    let mut to_draw: Vec<(ZIndex, Drawable)> = Vec::new();
    to_draw.extend(
        rects
            .iter()
            .map(|(rect, pos, z)| (*z, Drawable::Rect(rect, pos.pos))),
    );
    to_draw.extend(lines.iter().map(|(line, z)| (*z, Drawable::Line(line))));
    to_draw.extend(sprites.iter().map(|(sprite, pos, z, scale, rotation)| {
        (
            *z,
            Drawable::Sprite {
                sprite,
                pos: pos.pos,
                scale: scale.map_or(Vector2 { x: 1.0, y: 1.0 }, |s| s.scale),
                degrees: rotation.map_or(0.0, |r| r.degrees),
            },
        )
    }));
    to_draw.extend(
        texts
            .iter()
            .map(|(text, pos, z)| (*z, Drawable::Text(text, pos.pos))),
    );
    // stable: equal z keeps query order
    to_draw.sort_by_key(|(z, _)| *z);

    let mut d = rl.begin_drawing(&thread);
    d.clear_background(scenario.background);

    for (_, drawable) in to_draw.iter() {
        match drawable {
            Drawable::Rect(rect, pos) => {
                d.draw_rectangle_v(*pos, rect.size, rect.color);
            }
            Drawable::Line(line) => {
                for pair in line.points.windows(2) {
                    d.draw_line_ex(pair[0], pair[1], line.thickness, line.color);
                }
                // round joints
                for p in line.points.iter() {
                    d.draw_circle_v(*p, line.thickness * 0.5, line.color);
                }
            }
            Drawable::Sprite {
                sprite,
                pos,
                scale,
                degrees,
            } => {
                let dest = Rectangle {
                    x: pos.x,
                    y: pos.y,
                    width: sprite.width * scale.x,
                    height: sprite.height * scale.y,
                };
                let origin = Vector2 {
                    x: sprite.origin.x * scale.x,
                    y: sprite.origin.y * scale.y,
                };
                match textures.get(&sprite.tex_key) {
                    Some(tex) => {
                        let src = Rectangle {
                            x: sprite.offset.x,
                            y: sprite.offset.y,
                            width: sprite.width,
                            height: sprite.height,
                        };
                        d.draw_texture_pro(tex, src, dest, origin, *degrees, Color::WHITE);
                    }
                    None => {
                        d.draw_rectangle_pro(dest, origin, *degrees, PLACEHOLDER);
                        d.draw_text(
                            &sprite.tex_key,
                            (pos.x - origin.x) as i32 + 2,
                            (pos.y - origin.y) as i32 + 2,
                            10,
                            Color::BLACK,
                        );
                    }
                }
            }
            Drawable::Text(text, pos) => {
                d.draw_text(
                    &text.content,
                    pos.x as i32,
                    pos.y as i32,
                    text.font_size as i32,
                    text.color,
                );
            }
        }
    }

    if debug.is_none() {
        return;
    }

    for (collider, position, group) in colliders.iter() {
        let (x, y, w, h) = collider.get_aabb(position.pos);
        d.draw_rectangle_lines(x as i32, y as i32, w as i32, h as i32, Color::RED);
        if let Some(group) = group {
            d.draw_text(group.name(), x as i32, y as i32 - 10, 10, Color::RED);
        }
    }
    for follower in followers.iter() {
        for p in follower.points() {
            d.draw_circle_v(*p, 3.0, Color::BLUE);
        }
        d.draw_circle_lines(
            follower.current_target().x as i32,
            follower.current_target().y as i32,
            8.0,
            Color::GREEN,
        );
    }

    let fps = d.get_fps();
    d.draw_text(
        &format!("DEBUG MODE (press F11 to toggle) | FPS: {}", fps),
        10,
        screen.h - 40,
        10,
        Color::BLACK,
    );
    let state = simulation
        .as_ref()
        .map(|s| format!("{:?} running={} over_sensor={}", s.state(), s.running, s.train_over_sensor))
        .unwrap_or_default();
    d.draw_text(
        &format!("Entities: {} | {}", entities.iter().count(), state),
        10,
        screen.h - 25,
        10,
        Color::BLACK,
    );
}
