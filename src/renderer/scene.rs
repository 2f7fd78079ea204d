//! Scene composition
//!
//! Turns a [`FrameView`] into one triangle list in logical screen pixels.
//! World-space layers are shifted by the camera offset; the end-of-run dim
//! layer is drawn in screen space on top.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::session::FrameView;
use crate::sim::{Actor, Coin, Facing, Platform};

/// The backdrop spans this many displays of world width
const BACKDROP_SCREENS: f32 = 3.0;
/// Ground line the mountains stand on, measured up from the display bottom
const HORIZON_HEIGHT: f32 = 60.0;
const MOUNTAIN_COUNT: u32 = 10;
const MOUNTAIN_SPACING: f32 = 300.0;
const STAR_COUNT: u32 = 50;
const STAR_SIZE: f32 = 2.0;
const PLATFORM_TOP_HEIGHT: f32 = 5.0;
const COIN_SEGMENTS: u32 = 16;
const CUBE_INSET: f32 = 5.0;
const EYE_SIZE: f32 = 5.0;

/// Build every vertex for one frame
pub fn build_scene(view: &FrameView) -> Vec<Vertex> {
    let camera = Vec2::new(view.camera_offset, 0.0);
    let mut vertices = Vec::with_capacity(1024);

    backdrop(&mut vertices, view.display, camera);

    for platform in view.platforms {
        vertices.extend(platform_vertices(platform, camera));
    }

    for coin in view.coins.iter().filter(|c| !c.collected) {
        vertices.extend(coin_vertices(coin, camera));
    }

    vertices.extend(cube_vertices(view.actor, camera));

    if view.status.is_terminal() {
        vertices.extend(shapes::rect(
            Vec2::ZERO,
            view.display,
            colors::rgba(colors::OVERLAY, colors::OVERLAY_ALPHA),
        ));
    }

    vertices
}

fn backdrop(out: &mut Vec<Vertex>, display: Vec2, camera: Vec2) {
    let span = display.x * BACKDROP_SCREENS;

    out.extend(shapes::vertical_gradient(
        -camera,
        Vec2::new(span, display.y),
        colors::rgb(colors::SKY_TOP),
        colors::rgb(colors::SKY_BOTTOM),
    ));

    let horizon = display.y - HORIZON_HEIGHT;
    let mountain = colors::rgb(colors::MOUNTAIN);
    for i in 0..MOUNTAIN_COUNT {
        let x = (i as f32 * MOUNTAIN_SPACING) % span;
        let height = 80.0 + (i as f32).sin() * 20.0;
        out.extend(shapes::triangle(
            Vec2::new(x, horizon) - camera,
            Vec2::new(x + MOUNTAIN_SPACING / 2.0, horizon - height) - camera,
            Vec2::new(x + MOUNTAIN_SPACING, horizon) - camera,
            mountain,
        ));
    }

    let star = colors::rgb(colors::STAR);
    let sky_depth = display.y - 100.0;
    for i in 0..STAR_COUNT {
        let pos = Vec2::new((i as f32 * 70.0) % span, (i as f32 * 30.0) % sky_depth);
        out.extend(shapes::rect(pos - camera, Vec2::splat(STAR_SIZE), star));
    }
}

fn platform_vertices(platform: &Platform, camera: Vec2) -> Vec<Vertex> {
    let b = &platform.bounds;
    let min = Vec2::new(b.x, b.y) - camera;

    let mut v = shapes::rect(min, Vec2::new(b.width, b.height), colors::rgb(platform.color));
    v.extend(shapes::rect(
        min,
        Vec2::new(b.width, PLATFORM_TOP_HEIGHT),
        colors::rgb(colors::PLATFORM_TOP),
    ));
    v
}

fn coin_vertices(coin: &Coin, camera: Vec2) -> Vec<Vertex> {
    let b = &coin.bounds;
    let min = Vec2::new(b.x, b.y) - camera;

    let mut v = shapes::circle(
        min + Vec2::new(b.width / 2.0, b.height / 2.0),
        b.width / 2.0,
        colors::rgb(colors::COIN),
        COIN_SEGMENTS,
    );
    v.extend(shapes::circle(
        min + Vec2::new(b.width / 3.0, b.height / 3.0),
        b.width / 6.0,
        colors::rgb(colors::COIN_SHINE),
        COIN_SEGMENTS / 2,
    ));
    v
}

fn cube_vertices(actor: &Actor, camera: Vec2) -> Vec<Vertex> {
    let min = actor.pos - camera;

    let mut v = shapes::rect(min, actor.size, colors::rgb(colors::CUBE));
    v.extend(shapes::rect(
        min + Vec2::splat(CUBE_INSET),
        actor.size - Vec2::splat(CUBE_INSET * 2.0),
        colors::rgb(colors::CUBE_INNER),
    ));

    let eye_x = match actor.facing {
        Facing::Right => 25.0,
        Facing::Left => 10.0,
    };
    v.extend(shapes::rect(
        min + Vec2::new(eye_x, 15.0),
        Vec2::splat(EYE_SIZE),
        colors::rgb(colors::EYE),
    ));
    v
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;
    use crate::sim::{GameStatus, TickInput};
    use crate::tuning::Tuning;

    fn with_color(vertices: &[Vertex], color: [f32; 4]) -> Vec<Vertex> {
        vertices.iter().copied().filter(|v| v.color == color).collect()
    }

    #[test]
    fn test_collected_coins_are_hidden() {
        let session = Session::new(Tuning::default());
        let gold = colors::rgb(colors::COIN);
        let before = with_color(&build_scene(&session.view()), gold).len();
        assert_eq!(before, 5 * COIN_SEGMENTS as usize * 3);

        let mut coins: Vec<Coin> = session.level().coins.clone();
        coins[0].collected = true;
        let mut view = session.view();
        view.coins = &coins;
        let after = with_color(&build_scene(&view), gold).len();
        assert_eq!(after, 4 * COIN_SEGMENTS as usize * 3);
    }

    #[test]
    fn test_overlay_only_when_run_ended() {
        let session = Session::new(Tuning::default());
        let dim = colors::rgba(colors::OVERLAY, colors::OVERLAY_ALPHA);

        let mut view = session.view();
        assert!(with_color(&build_scene(&view), dim).is_empty());

        view.status = GameStatus::Lost;
        let scene = build_scene(&view);
        assert_eq!(with_color(&scene, dim).len(), 6);
        // Drawn last, on top of everything
        assert_eq!(scene.last().map(|v| v.color), Some(dim));

        view.status = GameStatus::Won;
        assert_eq!(with_color(&build_scene(&view), dim).len(), 6);
    }

    #[test]
    fn test_eye_follows_facing() {
        let mut session = Session::new(Tuning::default());
        let black = colors::rgb(colors::EYE);

        let eye_left_edge = |session: &Session| {
            let view = session.view();
            let cube_x = view.actor.pos.x - view.camera_offset;
            with_color(&build_scene(&view), black)
                .iter()
                .map(|v| v.position[0])
                .fold(f32::INFINITY, f32::min)
                - cube_x
        };

        assert!((eye_left_edge(&session) - 25.0).abs() < 1e-3);

        session.tick(&TickInput {
            move_left: true,
            ..Default::default()
        });
        assert!((eye_left_edge(&session) - 10.0).abs() < 1e-3);
    }

    #[test]
    fn test_camera_shifts_world_layers() {
        let session = Session::new(Tuning::default());
        let top = colors::rgb(colors::PLATFORM_TOP);

        let mut view = session.view();
        view.camera_offset = 0.0;
        let unshifted = with_color(&build_scene(&view), top);
        view.camera_offset = 120.0;
        let shifted = with_color(&build_scene(&view), top);

        assert_eq!(unshifted.len(), shifted.len());
        for (a, b) in unshifted.iter().zip(&shifted) {
            assert!((a.position[0] - b.position[0] - 120.0).abs() < 1e-3);
            assert_eq!(a.position[1], b.position[1]);
        }
    }

    #[test]
    fn test_backdrop_layers_present() {
        let session = Session::new(Tuning::default());
        let scene = build_scene(&session.view());
        assert_eq!(
            with_color(&scene, colors::rgb(colors::MOUNTAIN)).len(),
            MOUNTAIN_COUNT as usize * 3
        );
        // White stars (the cube has no pure white)
        assert_eq!(
            with_color(&scene, colors::rgb(colors::STAR)).len(),
            STAR_COUNT as usize * 6
        );
    }
}
