/// All game entity types — pure data, no logic.
///
/// Everything lives in one `WorldState` aggregate that the simulation
/// functions in `compute` mutate through exclusive borrows; nothing here
/// touches hardware, the clock or the RNG.

// ── World constants ──────────────────────────────────────────────────────────

pub const WORLD_W: i32 = 128;
pub const WORLD_H: i32 = 64;

pub const PLAYER_W: i32 = 8;
pub const PLAYER_H: i32 = 9;
pub const PLAYER_START_X: i32 = 60;
pub const MOVE_SPEED: i32 = 2;
pub const GRAVITY: i32 = 1;
pub const JUMP_FORCE: i32 = 8;

/// Horizontal line the NPC walks along.  Doubles as the ceiling threshold:
/// vertical velocity is force-zeroed once the player reaches it, so a jump
/// can never drift through the NPC's ledge.
pub const CEILING_Y: i32 = 14;

pub const NPC_W: i32 = 8;
pub const NPC_H: i32 = 9;
pub const NPC_START_X: i32 = 60;
pub const NPC_START_Y: i32 = 4;
pub const NPC_SPEED: i32 = 4;

pub const ENEMY_RADIUS: i32 = 5;
pub const ENEMY_SPEED: i32 = 3;
/// Mouth animation cadence in milliseconds.
pub const MOUTH_TOGGLE_MS: u64 = 200;

pub const FRUIT_RADIUS: i32 = 2;
pub const FRUIT_SPEED: i32 = 2;

pub const PLATFORM_W: i32 = 10;
pub const PLATFORM_H: i32 = 3;
pub const PLATFORM_Y: i32 = WORLD_H - 15;

/// Fixed EEPROM slot holding the big-endian 16-bit high score.
pub const HIGH_SCORE_ADDR: u16 = 45;

// ── Entities ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Player {
    /// Top-left corner.
    pub x: i32,
    pub y: i32,
    /// Facing, ±1.  Only the renderer cares.
    pub dir: i32,
    /// Vertical velocity, positive = downward.
    pub vy: i32,
    pub can_jump: bool,
}

#[derive(Clone, Debug)]
pub struct Npc {
    pub x: i32,
    pub y: i32,
    pub dir: i32,
    /// Last time direction/interval were re-randomized.
    pub last_move: u64,
    pub next_move_delay: u64,
}

#[derive(Clone, Debug)]
pub struct Enemy {
    pub x: i32,
    pub y: i32,
    pub dir: i32,
    /// Remaining wall reversals before the enemy may exit the world.
    pub bounces: i32,
    pub active: bool,
    pub mouth_open: bool,
    pub mouth_toggled: u64,
    /// Set when the enemy deactivates; spawn cooldown counts from here.
    pub last_active: u64,
    pub next_active_delay: u64,
}

#[derive(Clone, Debug)]
pub struct Fruit {
    /// Center of the fruit circle.
    pub x: i32,
    pub y: i32,
    pub active: bool,
    pub last_spawn: u64,
    pub next_spawn_delay: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Platform {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

pub const PLATFORM_LEFT: Platform = Platform {
    x: 0,
    y: PLATFORM_Y,
    w: PLATFORM_W,
    h: PLATFORM_H,
};

pub const PLATFORM_RIGHT: Platform = Platform {
    x: WORLD_W - PLATFORM_W,
    y: PLATFORM_Y,
    w: PLATFORM_W,
    h: PLATFORM_H,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Playing,
    GameOver,
}

// ── Master world state ───────────────────────────────────────────────────────

/// The entire simulation state for one run.  Built by `compute::init_world`
/// and advanced once per tick by `compute::advance`.
#[derive(Clone, Debug)]
pub struct WorldState {
    pub player: Player,
    pub npc: Npc,
    pub enemy: Enemy,
    pub fruit: Fruit,
    pub platforms: [Platform; 2],
    pub score: u16,
    /// Best score ever, reloaded from the persistent store on reset.
    pub high_score: u16,
    /// Latched when the run that just ended beat the stored record.
    pub new_high_score: bool,
    pub phase: Phase,
}
