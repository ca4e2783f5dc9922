/// Render translator — world state in, draw primitives out.
///
/// No game logic here; one call paints one complete frame into the
/// framebuffer.  Draw order matters: player, NPC, fruit, furniture, enemy,
/// then the score lines on top.

use crate::entities::{Phase, WorldState, CEILING_Y, ENEMY_RADIUS, FRUIT_RADIUS, NPC_H, NPC_W,
    PLAYER_H, PLAYER_W, WORLD_W};
use crate::framebuffer::{FrameBuffer, Shade};

/// Sprite backend, chosen at composition time.  `Procedural` carves the
/// ghost out of filled rectangles; `Bitmap` blits pre-packed 8x9 glyphs.
/// Same silhouette either way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpriteStyle {
    Procedural,
    Bitmap,
}

// 8x9 ghost glyphs, one byte per row, MSB leftmost.  Face baked in per
// facing direction.
const GHOST_RIGHT: [u8; 9] = [0x3c, 0x7e, 0xff, 0xe4, 0xe4, 0xff, 0xff, 0xff, 0xda];
const GHOST_LEFT: [u8; 9] = [0x3c, 0x7e, 0xff, 0x27, 0x27, 0xff, 0xff, 0xff, 0xd7];

// ── Public entry point ───────────────────────────────────────────────────────

/// Paint one frame.  While playing this is the full scene; after a loss it
/// is the frozen game-over screen.
pub fn render(world: &WorldState, style: SpriteStyle, fb: &mut FrameBuffer) {
    fb.clear();
    match world.phase {
        Phase::Playing => render_scene(world, style, fb),
        Phase::GameOver => render_game_over(world, fb),
    }
}

fn render_scene(world: &WorldState, style: SpriteStyle, fb: &mut FrameBuffer) {
    draw_ghost(fb, style, world.player.x, world.player.y, world.player.dir);
    draw_ghost(fb, style, world.npc.x, world.npc.y, world.npc.dir);
    draw_fruit(world, fb);
    draw_furniture(world, fb);
    draw_enemy(world, fb);

    fb.text(0, 0, 1, &format!("Score: {}", world.score));
    fb.text(WORLD_W - 50, 0, 1, &format!("High: {}", world.high_score));
}

fn render_game_over(world: &WorldState, fb: &mut FrameBuffer) {
    fb.text(0, 0, 2, "Game Over!");
    let line = if world.new_high_score {
        format!("New High Score: {}", world.score)
    } else {
        format!("Score: {}", world.score)
    };
    fb.text(0, 20, 1, &line);
    fb.text(0, 50, 1, "Press JUMP to retry");
}

// ── Sprites ──────────────────────────────────────────────────────────────────

fn draw_ghost(fb: &mut FrameBuffer, style: SpriteStyle, x: i32, y: i32, dir: i32) {
    match style {
        SpriteStyle::Bitmap => {
            let glyph = if dir == 1 { &GHOST_RIGHT } else { &GHOST_LEFT };
            fb.blit(x, y, PLAYER_W, PLAYER_H, glyph);
        }
        SpriteStyle::Procedural => draw_ghost_procedural(fb, x, y, dir),
    }
}

// Rounded head, full body, eyes looking the way it moves, wavy skirt.
fn draw_ghost_procedural(fb: &mut FrameBuffer, x: i32, y: i32, dir: i32) {
    let (w, h) = (PLAYER_W, PLAYER_H);
    fb.fill_rect(x, y + 2, w, h - 2, Shade::On);
    fb.fill_rect(x + 1, y + 1, w - 2, 1, Shade::On);
    fb.fill_rect(x + 2, y, w - 4, 1, Shade::On);

    let face_x = if dir == 1 { 3 } else { 0 };
    fb.fill_rect(x + face_x, y + 3, 2, 2, Shade::Off);
    fb.fill_rect(x + face_x + 3, y + 3, 2, 2, Shade::Off);
    fb.fill_rect(x + face_x - 1, y + h - 1, 1, 1, Shade::Off);
    fb.fill_rect(x + face_x + 2, y + h - 1, 1, 1, Shade::Off);
    fb.fill_rect(x + face_x + 4, y + h - 1, 1, 1, Shade::Off);
}

fn draw_fruit(world: &WorldState, fb: &mut FrameBuffer) {
    if !world.fruit.active {
        return;
    }
    fb.fill_circle(world.fruit.x, world.fruit.y, FRUIT_RADIUS, Shade::On);
}

// Filled disc, one eye, and when the mouth is open a wedge carved out of
// the leading edge.
fn draw_enemy(world: &WorldState, fb: &mut FrameBuffer) {
    let enemy = &world.enemy;
    if !enemy.active {
        return;
    }
    let r = ENEMY_RADIUS;
    fb.fill_circle(enemy.x + r, enemy.y + r, r, Shade::On);

    let eye_x = if enemy.dir == 1 { 1 } else { -3 };
    fb.fill_rect(enemy.x + r + eye_x, enemy.y + r - 2, 2, 2, Shade::Off);

    if !enemy.mouth_open {
        return;
    }
    let mouth_x = if enemy.dir == 1 { r + 3 } else { 0 };
    fb.fill_rect(enemy.x + mouth_x, enemy.y + r - 2, 2, 4, Shade::Off);
    fb.line(
        enemy.x + mouth_x + 2,
        enemy.y + r,
        enemy.x + mouth_x + 2,
        enemy.y + r + 4,
        Shade::Off,
    );
}

fn draw_furniture(world: &WorldState, fb: &mut FrameBuffer) {
    fb.line(0, CEILING_Y, WORLD_W, CEILING_Y, Shade::On);
    for p in &world.platforms {
        fb.draw_rect(p.x, p.y, p.w, p.h, Shade::On);
    }
}

// Keep the NPC glyph honest: it shares the player's sprite dimensions.
const _: () = assert!(NPC_W == PLAYER_W && NPC_H == PLAYER_H);
