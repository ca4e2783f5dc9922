/// Pure simulation logic.
///
/// One tick = one call to `advance`: enemy-contact check, player physics,
/// NPC wander, spawn timers, fruit fall, enemy bounce, fruit pickup.  The
/// world is mutated through an exclusive borrow; randomness comes through an
/// injected `Rng` and time through a caller-supplied millisecond clock, so
/// every path is reproducible in tests without hardware.

use rand::Rng;

use crate::entities::{
    Enemy, Fruit, Npc, Phase, Platform, Player, WorldState, CEILING_Y, ENEMY_RADIUS, ENEMY_SPEED,
    FRUIT_RADIUS, FRUIT_SPEED, GRAVITY, HIGH_SCORE_ADDR, JUMP_FORCE, MOUTH_TOGGLE_MS, MOVE_SPEED,
    NPC_H, NPC_SPEED, NPC_START_X, NPC_START_Y, NPC_W, PLATFORM_LEFT, PLATFORM_RIGHT, PLATFORM_Y,
    PLAYER_H, PLAYER_START_X, PLAYER_W, WORLD_H, WORLD_W,
};
use crate::input::Intent;
use crate::store::Eeprom;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial world layout.  The high score comes from the persistent
/// store; the enemy starts inactive with its first spawn delay already armed.
pub fn init_world(now: u64, rng: &mut impl Rng, store: &impl Eeprom) -> WorldState {
    WorldState {
        player: Player {
            x: PLAYER_START_X,
            y: WORLD_H - PLAYER_H,
            dir: 1,
            vy: 0,
            can_jump: true,
        },
        npc: Npc {
            x: NPC_START_X,
            y: NPC_START_Y,
            dir: 1,
            last_move: now,
            next_move_delay: 1000,
        },
        enemy: Enemy {
            x: 0,
            y: 0,
            dir: 1,
            bounces: 0,
            active: false,
            mouth_open: false,
            mouth_toggled: now,
            last_active: now,
            next_active_delay: rng.gen_range(4000..10000),
        },
        fruit: Fruit {
            x: 0,
            y: 0,
            active: false,
            last_spawn: now,
            next_spawn_delay: 4000,
        },
        platforms: [PLATFORM_LEFT, PLATFORM_RIGHT],
        score: 0,
        high_score: store.load16(HIGH_SCORE_ADDR),
        new_high_score: false,
        phase: Phase::Playing,
    }
}

// ── Collision resolver (pure predicates) ─────────────────────────────────────

fn player_center(p: &Player) -> (f32, f32) {
    (
        p.x as f32 + PLAYER_W as f32 / 2.0,
        p.y as f32 + PLAYER_H as f32 / 2.0,
    )
}

/// Circle overlap between the player's center and the fruit, strict `<`:
/// tangent circles do not count as touching.
pub fn player_touching_fruit(world: &WorldState) -> bool {
    let fruit = &world.fruit;
    if !fruit.active {
        return false;
    }
    let (pcx, pcy) = player_center(&world.player);
    let dx = fruit.x as f32 - pcx;
    let dy = fruit.y as f32 - pcy;
    (dx * dx + dy * dy).sqrt() < FRUIT_RADIUS as f32 + PLAYER_H as f32 / 2.0
}

pub fn player_touching_enemy(world: &WorldState) -> bool {
    let enemy = &world.enemy;
    if !enemy.active {
        return false;
    }
    let (pcx, pcy) = player_center(&world.player);
    let dx = (enemy.x + ENEMY_RADIUS) as f32 - pcx;
    let dy = (enemy.y + ENEMY_RADIUS) as f32 - pcy;
    (dx * dx + dy * dy).sqrt() < ENEMY_RADIUS as f32 + PLAYER_W as f32 / 2.0
}

/// Standing check used only to grant landing and jump reset: the player's
/// horizontal extent touches a platform's extent (inclusive) and the feet
/// line falls within the platform's vertical thickness band.
pub fn standing_on_platform(player: &Player, platforms: &[Platform; 2]) -> bool {
    let feet = player.y + PLAYER_H;
    platforms.iter().any(|p| {
        player.x <= p.x + p.w
            && player.x + PLAYER_W >= p.x
            && feet >= p.y
            && feet <= p.y + p.h
    })
}

// ── Movement engine ──────────────────────────────────────────────────────────

/// Player physics for one tick.  Jump eligibility and the landing snap both
/// use the pre-move position; landing is a discrete event (feet snap to the
/// ledge surface, velocity zeroes), not a continuous contact resolution.
pub fn move_player(world: &mut WorldState, intent: Intent) {
    let standing = standing_on_platform(&world.player, &world.platforms);
    let p = &mut world.player;

    if p.y + PLAYER_H == WORLD_H || (standing && p.vy == 0) {
        p.can_jump = true;
    }

    let mut step_x = 0;
    if intent.moves_left() {
        step_x = -MOVE_SPEED;
        p.dir = -1;
    }
    if intent.moves_right() {
        step_x = MOVE_SPEED;
        p.dir = 1;
    }
    if intent.jumps() && p.can_jump {
        p.vy = -JUMP_FORCE;
        p.can_jump = false;
    }

    let new_x = (p.x + step_x).clamp(0, WORLD_W - PLAYER_W);

    let mut new_y = p.y;
    if p.y + PLAYER_H <= WORLD_H {
        p.vy += GRAVITY;
        new_y = p.y + p.vy;
    } else {
        p.vy = 0;
    }
    // A jump may not carry past the NPC's line.
    if new_y <= CEILING_Y {
        p.vy = 0;
    }
    if new_y < 0 {
        new_y = 0;
    }
    if standing && p.vy > 0 {
        new_y = PLATFORM_Y - PLAYER_H;
        p.vy = 0;
    }
    if new_y > WORLD_H - PLAYER_H {
        new_y = WORLD_H - PLAYER_H;
    }

    p.x = new_x;
    p.y = new_y;
}

/// NPC wander: re-randomize heading on an elapsed interval, walk, bounce off
/// the walls.  The NPC never interacts with anything; it just marks where
/// fruit will drop from.
pub fn move_npc(world: &mut WorldState, now: u64, rng: &mut impl Rng) {
    let npc = &mut world.npc;
    if now >= npc.last_move + npc.next_move_delay {
        npc.last_move = now;
        npc.next_move_delay = rng.gen_range(1000..4000);
        npc.dir = if rng.gen_range(0..2) == 0 { -1 } else { 1 };
    }
    npc.x += npc.dir * NPC_SPEED;
    if npc.x < 0 {
        npc.x = 0;
        npc.dir = -npc.dir;
    }
    if npc.x > WORLD_W - NPC_W {
        npc.x = WORLD_W - NPC_W;
        npc.dir = -npc.dir;
    }
}

pub fn move_fruit(world: &mut WorldState) {
    let fruit = &mut world.fruit;
    if !fruit.active {
        return;
    }
    fruit.y += FRUIT_SPEED;
    if fruit.y > WORLD_H {
        fruit.active = false;
    }
}

/// Enemy for one tick: mouth animation, then motion.  While the bounce
/// budget lasts, walls clamp and reverse it; once exhausted it keeps going
/// and deactivates the moment it is fully outside, arming the respawn
/// cooldown right there.
pub fn move_enemy(world: &mut WorldState, now: u64, rng: &mut impl Rng) {
    let enemy = &mut world.enemy;
    if !enemy.active {
        return;
    }
    if now >= enemy.mouth_toggled + MOUTH_TOGGLE_MS {
        enemy.mouth_open = !enemy.mouth_open;
        enemy.mouth_toggled = now;
    }

    enemy.x += enemy.dir * ENEMY_SPEED;

    if enemy.bounces <= 0 {
        if enemy.x < 0 || enemy.x > WORLD_W + ENEMY_RADIUS {
            enemy.active = false;
            enemy.last_active = now;
            enemy.next_active_delay = rng.gen_range(3000..6000);
        }
        return;
    }

    if enemy.x < 0 && enemy.dir == -1 {
        enemy.x = 0;
        enemy.dir = 1;
        enemy.bounces -= 1;
    }
    if enemy.x > WORLD_W - ENEMY_RADIUS * 2 && enemy.dir == 1 {
        enemy.x = WORLD_W - ENEMY_RADIUS * 2;
        enemy.dir = -1;
        enemy.bounces -= 1;
    }
}

// ── Spawner ──────────────────────────────────────────────────────────────────

/// Drop a fruit from the NPC's current position when the timer elapses.
/// At most one fruit exists; an active one blocks the timer.
pub fn maybe_spawn_fruit(world: &mut WorldState, now: u64, rng: &mut impl Rng) {
    if world.fruit.active || now < world.fruit.last_spawn + world.fruit.next_spawn_delay {
        return;
    }
    let fruit = &mut world.fruit;
    fruit.last_spawn = now;
    fruit.next_spawn_delay = rng.gen_range(4000..7000);
    fruit.x = world.npc.x + NPC_W / 2;
    fruit.y = world.npc.y + NPC_H - NPC_H / 4;
    fruit.active = true;
}

/// Send in the enemy from a random side once its cooldown elapses, with a
/// fresh bounce budget of 1..=3 and heading into the world.
pub fn maybe_spawn_enemy(world: &mut WorldState, now: u64, rng: &mut impl Rng) {
    let enemy = &mut world.enemy;
    if enemy.active || now < enemy.last_active + enemy.next_active_delay {
        return;
    }
    enemy.active = true;
    enemy.dir = if rng.gen_range(0..2) == 0 { -1 } else { 1 };
    enemy.x = if enemy.dir == 1 { -ENEMY_RADIUS } else { WORLD_W };
    enemy.y = WORLD_H - ENEMY_RADIUS * 2;
    enemy.bounces = rng.gen_range(1..4);
}

// ── Game state machine ───────────────────────────────────────────────────────

fn end_game(world: &mut WorldState, store: &mut impl Eeprom) {
    world.phase = Phase::GameOver;
    if world.score > world.high_score {
        world.high_score = world.score;
        world.new_high_score = true;
        store.store16(HIGH_SCORE_ADDR, world.high_score);
    }
}

/// Advance the simulation by one tick.
///
/// While playing: enemy contact is checked against the positions the last
/// tick left behind, and ends the run before any further movement is
/// applied.  While game-over the world is frozen; only a jump intent
/// restarts, rebuilding the layout and reloading the high score from the
/// store.
pub fn advance(
    world: &mut WorldState,
    intent: Intent,
    now: u64,
    rng: &mut impl Rng,
    store: &mut impl Eeprom,
) {
    match world.phase {
        Phase::GameOver => {
            if intent.jumps() {
                *world = init_world(now, rng, store);
            }
        }
        Phase::Playing => {
            if player_touching_enemy(world) {
                end_game(world, store);
                return;
            }
            move_player(world, intent);
            move_npc(world, now, rng);
            maybe_spawn_fruit(world, now, rng);
            move_fruit(world);
            maybe_spawn_enemy(world, now, rng);
            move_enemy(world, now, rng);
            if player_touching_fruit(world) {
                world.score = world.score.saturating_add(1);
                world.fruit.active = false;
            }
        }
    }
}
