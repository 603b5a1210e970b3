//! Game state and core simulation types
//!
//! `GameWorld` owns everything the driver mutates: the player, the live
//! obstacles, the run bookkeeping, the tuning and the seeded RNG.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Aabb;
use super::physics;
use super::tuning::Tuning;
use crate::sinks::Snapshot;

/// Whether the current run is being simulated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Active gameplay
    Running,
    /// Run ended by a collision; state is frozen until reset
    Ended,
}

/// The player's runner
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Top-left corner (x never changes)
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (negative = up)
    pub vy: f32,
    pub on_ground: bool,
}

impl Player {
    /// A player standing still on the ground line
    pub fn at_rest(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.player_x, tuning.ground_y - tuning.player_height),
            size: Vec2::new(tuning.player_width, tuning.player_height),
            vy: 0.0,
            on_ground: true,
        }
    }

    /// Put the player back on the ground with no velocity
    pub fn rest_on(&mut self, ground_y: f32) {
        self.pos.y = ground_y - self.size.y;
        self.vy = 0.0;
        self.on_ground = true;
    }

    /// Bottom edge
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// A block scrolling toward the player
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// Top-left corner; the bottom edge sits on the ground line
    pub pos: Vec2,
    pub size: Vec2,
    /// Units moved left per tick
    pub speed: f32,
}

impl Obstacle {
    /// An obstacle resting on `ground_y` with its left edge at `x`
    pub fn on_ground(x: f32, size: Vec2, speed: f32, ground_y: f32) -> Self {
        Self {
            pos: Vec2::new(x, ground_y - size.y),
            size,
            speed,
        }
    }

    /// Right edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Fully past the left edge of the field
    #[inline]
    pub fn is_off_screen(&self) -> bool {
        self.right() < 0.0
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// Per-run bookkeeping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunState {
    /// Ticks simulated since the last reset
    pub frame: u64,
    /// Obstacles cleared this run
    pub score: u32,
    /// Best score seen by this world; survives resets
    pub high_score: u32,
    pub status: RunStatus,
}

impl Default for RunState {
    fn default() -> Self {
        Self {
            frame: 0,
            score: 0,
            high_score: 0,
            status: RunStatus::Running,
        }
    }
}

impl RunState {
    #[inline]
    pub fn is_running(&self) -> bool {
        self.status == RunStatus::Running
    }

    /// Count one cleared obstacle and lift the high score if beaten
    pub fn add_point(&mut self) {
        self.score += 1;
        if self.score > self.high_score {
            self.high_score = self.score;
        }
    }

    /// Running -> Ended
    pub fn end(&mut self) {
        self.status = RunStatus::Ended;
    }

    /// Start a fresh run, keeping the high score
    pub fn restart(&mut self) {
        self.frame = 0;
        self.score = 0;
        self.status = RunStatus::Running;
    }
}

/// Something the host may want to react to (score label, logs)
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// Player left the ground
    Jumped,
    /// A new obstacle entered the set
    ObstacleSpawned { width: f32, height: f32, speed: f32 },
    /// An obstacle scrolled off the left edge and scored
    ObstacleCleared { score: u32, high_score: u32 },
    /// Player touched an obstacle; the run is over
    Collision { score: u32 },
    /// A new run started
    Reset { high_score: u32 },
}

/// What a jump request ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpOutcome {
    Jumped,
    /// Run was over, so the request restarted it instead
    Restarted,
    /// Already airborne
    Ignored,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameWorld {
    pub player: Player,
    /// Live obstacles in spawn order (oldest first)
    pub obstacles: Vec<Obstacle>,
    pub run: RunState,
    pub(crate) tuning: Tuning,
    pub(crate) rng: Pcg32,
    /// Seed the RNG was created from
    seed: u64,
    /// Events produced since the last drain
    pub(crate) events: Vec<GameEvent>,
}

impl GameWorld {
    /// Create a world with the given tuning and RNG seed.
    ///
    /// Panics if the tuning is malformed: that is a setup mistake, not a
    /// condition the tick loop can recover from.
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        if let Err(err) = tuning.validate() {
            panic!("invalid tuning: {err}");
        }

        let mut world = Self {
            player: Player::at_rest(&tuning),
            obstacles: Vec::new(),
            run: RunState::default(),
            rng: Pcg32::seed_from_u64(seed),
            seed,
            tuning,
            events: Vec::new(),
        };
        world.reset_game();
        world
    }

    /// Create a world with the default tuning
    pub fn with_seed(seed: u64) -> Self {
        Self::new(Tuning::default(), seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Start a new run. The high score is kept.
    pub fn reset_game(&mut self) {
        self.run.restart();
        self.player.rest_on(self.tuning.ground_y);
        self.obstacles.clear();
        self.events.push(GameEvent::Reset {
            high_score: self.run.high_score,
        });
        log::info!("New run (best so far: {})", self.run.high_score);
    }

    /// Jump if standing; restart if the run is over
    pub fn request_jump(&mut self) -> JumpOutcome {
        if !self.run.is_running() {
            self.reset_game();
            return JumpOutcome::Restarted;
        }
        if physics::try_jump(&mut self.player, self.tuning.jump_force) {
            self.events.push(GameEvent::Jumped);
            JumpOutcome::Jumped
        } else {
            JumpOutcome::Ignored
        }
    }

    /// Take the events produced since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Read-only view handed to sinks
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            player: &self.player,
            obstacles: &self.obstacles,
            run: &self.run,
            tuning: &self.tuning,
        }
    }
}
