//! One playthrough, from launch (or replay) to collision.
//!
//! The session owns every entity and is rebuilt as a fresh value on each
//! replay — there is no field-by-field reset. `step` runs the fixed tick
//! order: input, scoring, difficulty, motion, collision, recycling. Draws
//! and sounds are the caller's job; `step` only reports events.

use crate::audio::SoundCue;
use crate::config::GameConfig;
use crate::constants::LEVEL_NOTICE_TICKS;
use crate::game::collision::{self, MaskSet};
use crate::game::difficulty;
use crate::game::entity::{Bird, Ground, Pipe};
use crate::game::spawn;
use rand::Rng;

/// What a tick produced, for the main loop to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    Sound(SoundCue),
    LevelUp(u32),
}

/// Short "level up" overlay during which the world is frozen.
#[derive(Debug, Clone)]
pub struct LevelNotice {
    pub level: u32,
    pub ticks_left: u32,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    pub config: GameConfig,
    pub bird: Bird,
    pub grounds: [Ground; 2],
    /// Two pairs, oldest first, as [lower, upper, lower, upper].
    pub pipes: [Pipe; 4],
    pub score: f64,
    pub active: bool,
    /// Current scroll speed; every mover reads it each tick, so applying
    /// an escalation updates all live pipes and ground at once.
    pub speed: f64,
    /// Gap used for the next spawned pair.
    pub gap: i32,
    pub last_applied_level: u32,
    pub notice: Option<LevelNotice>,
    flap_queued: bool,
    masks: MaskSet,
}

impl GameSession {
    /// Build the initial layout: bird at spawn, two ground tiles flush,
    /// two pipe pairs off the right edge. `slow_gravity` is true only on
    /// the replay path.
    pub fn new<R: Rng>(config: &GameConfig, rng: &mut R, slow_gravity: bool) -> Self {
        let ground_width = f64::from(2 * config.screen_width);
        let grounds = [
            Ground::new(config, 0.0),
            Ground::new(config, ground_width),
        ];

        let gap = difficulty::gap_for_level(config, 0);
        let (l0, u0) = spawn::pipe_pair(config, rng, config.first_pipe_x, gap);
        let (l1, u1) =
            spawn::pipe_pair(config, rng, config.first_pipe_x + config.pipe_spacing, gap);

        Self {
            bird: Bird::new(config, slow_gravity),
            grounds,
            pipes: [l0, u0, l1, u1],
            score: 0.0,
            active: true,
            speed: difficulty::speed_for_level(config, 0),
            gap,
            last_applied_level: 0,
            notice: None,
            flap_queued: false,
            masks: MaskSet::new(config),
            config: config.clone(),
        }
    }

    /// Buffer a flap for the next tick. Ignored once the session is over.
    pub fn queue_flap(&mut self) {
        if self.active {
            self.flap_queued = true;
        }
    }

    /// Current difficulty tier, derived from score.
    pub fn level(&self) -> u32 {
        difficulty::level(self.score, self.config.score_threshold)
    }

    /// Advance one fixed tick. No-op once inactive.
    pub fn step<R: Rng>(&mut self, rng: &mut R) -> Vec<TickEvent> {
        let mut events = Vec::new();
        if !self.active {
            self.flap_queued = false;
            return events;
        }

        // Level-up notice: the world holds still while it shows.
        if let Some(notice) = &mut self.notice {
            notice.ticks_left = notice.ticks_left.saturating_sub(1);
            if notice.ticks_left == 0 {
                self.notice = None;
            }
            return events;
        }

        // (1) consume buffered input
        if self.flap_queued {
            self.flap_queued = false;
            self.bird.bump();
            events.push(TickEvent::Sound(SoundCue::Flap));
        }

        // (2) score newly passed pipe halves, 0.5 each
        for pipe in &mut self.pipes {
            if !pipe.passed && pipe.right() < self.bird.left() {
                pipe.passed = true;
                self.score += 0.5;
            }
        }

        // (3) escalate on a fresh threshold crossing, once
        if difficulty::should_escalate(
            self.score,
            self.config.score_threshold,
            self.last_applied_level,
        ) {
            let level = self.level();
            self.last_applied_level = level;
            self.speed = difficulty::speed_for_level(&self.config, level);
            self.gap = difficulty::gap_for_level(&self.config, level);
            self.notice = Some(LevelNotice {
                level,
                ticks_left: LEVEL_NOTICE_TICKS,
            });
            events.push(TickEvent::LevelUp(level));
        }

        // (4) advance all entities
        self.bird.tick();
        for pipe in &mut self.pipes {
            pipe.tick(self.speed);
        }
        for ground in &mut self.grounds {
            ground.tick(self.speed);
        }

        // (5) collision ends the run; checked after motion so the
        // post-move position is what gets tested
        if collision::bird_hits(&self.bird, &self.pipes, &self.grounds, &self.masks) {
            self.active = false;
            events.push(TickEvent::Sound(SoundCue::Hit));
            return events;
        }

        // (6) recycle off-screen entities
        spawn::recycle_ground(&mut self.grounds, &self.config);
        spawn::recycle_pipes(&mut self.pipes, &self.config, rng, self.gap);

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn session() -> (GameSession, StdRng) {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(42);
        let session = GameSession::new(&config, &mut rng, false);
        (session, rng)
    }

    #[test]
    fn test_initial_layout() {
        let (session, _) = session();
        assert!(session.active);
        assert!((session.score).abs() < f64::EPSILON);
        assert_eq!(session.pipes.len(), 4);
        assert_eq!(session.grounds.len(), 2);
        assert!((session.pipes[0].x - session.config.first_pipe_x).abs() < f64::EPSILON);
        assert!(
            (session.pipes[2].x - (session.config.first_pipe_x + session.config.pipe_spacing))
                .abs()
                < f64::EPSILON
        );
        // Ground strip is seamless from x=0.
        assert_eq!(session.grounds[0].left(), 0);
        assert_eq!(session.grounds[1].left(), session.grounds[0].right());
    }

    #[test]
    fn test_first_tick_after_bump_moves_up() {
        let config = GameConfig {
            gravity: 2.0,
            flap_impulse: 10.0,
            ..GameConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        let mut session = GameSession::new(&config, &mut rng, false);
        session.queue_flap();
        let y0 = session.bird.y;
        session.step(&mut rng);
        // bump sets speed to -10, gravity adds 2, so the bird rises 8.
        assert!((session.bird.y - (y0 - 8.0)).abs() < f64::EPSILON);
        // And descends again once speed turns positive.
        for _ in 0..6 {
            session.step(&mut rng);
        }
        assert!(session.bird.speed > 0.0);
    }

    #[test]
    fn test_flap_event_is_emitted() {
        let (mut session, mut rng) = session();
        session.queue_flap();
        let events = session.step(&mut rng);
        assert!(events.contains(&TickEvent::Sound(SoundCue::Flap)));
    }

    #[test]
    fn test_flap_ignored_after_collision() {
        let (mut session, mut rng) = session();
        session.active = false;
        session.queue_flap();
        let speed = session.bird.speed;
        assert!(session.step(&mut rng).is_empty());
        assert!((session.bird.speed - speed).abs() < f64::EPSILON);
    }

    #[test]
    fn test_falling_bird_eventually_hits_ground() {
        let (mut session, mut rng) = session();
        let mut hit = Vec::new();
        for _ in 0..100 {
            hit = session.step(&mut rng);
            if !session.active {
                break;
            }
        }
        assert!(!session.active);
        assert!(hit.contains(&TickEvent::Sound(SoundCue::Hit)));
    }

    #[test]
    fn test_escalation_fires_once_and_applies() {
        let (mut session, mut rng) = session();
        // Pin the bird somewhere safe so the run survives the tick.
        session.bird.bump();
        session.score = 4.5;
        // Drag a pipe half just past the bird so the next tick scores 0.5.
        session.pipes[0].x = f64::from(session.bird.left() - session.config.pipe_width - 1);

        let events = session.step(&mut rng);
        assert!((session.score - 5.0).abs() < f64::EPSILON);
        assert!(events.contains(&TickEvent::LevelUp(1)));
        assert_eq!(session.last_applied_level, 1);
        assert!(
            (session.speed - (session.config.base_speed + session.config.speed_increment)).abs()
                < f64::EPSILON
        );
        assert_eq!(
            session.gap,
            session.config.initial_gap - session.config.gap_decrement
        );
        assert!(session.notice.is_some());

        // The next tick at score 5.0 escalates nothing further.
        let events = session.step(&mut rng);
        assert!(!events.iter().any(|e| matches!(e, TickEvent::LevelUp(_))));
        assert_eq!(session.last_applied_level, 1);
    }

    #[test]
    fn test_notice_freezes_world_then_clears() {
        let (mut session, mut rng) = session();
        session.notice = Some(LevelNotice {
            level: 1,
            ticks_left: 3,
        });
        let y0 = session.bird.y;
        let pipe_x0 = session.pipes[0].x;
        for _ in 0..3 {
            assert!(session.notice.is_some());
            session.step(&mut rng);
        }
        assert!(session.notice.is_none());
        assert!((session.bird.y - y0).abs() < f64::EPSILON);
        assert!((session.pipes[0].x - pipe_x0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_pass_flag_flips_once_and_scores_half() {
        let (mut session, mut rng) = session();
        session.bird.bump();
        session.pipes[0].x = f64::from(session.bird.left() - session.config.pipe_width - 1);
        session.step(&mut rng);
        assert!(session.pipes[0].passed);
        assert!((session.score - 0.5).abs() < f64::EPSILON);
        // Already-passed halves never score again.
        session.bird.bump();
        session.step(&mut rng);
        assert!((session.score - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_replay_layout_matches_fresh_start() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(9);
        let fresh = GameSession::new(&config, &mut rng, false);
        let replay = GameSession::new(&config, &mut rng, true);

        assert!((replay.score).abs() < f64::EPSILON);
        assert!(replay.active);
        assert!((replay.bird.x - fresh.bird.x).abs() < f64::EPSILON);
        assert!((replay.bird.y - fresh.bird.y).abs() < f64::EPSILON);
        assert!((replay.bird.gravity() - config.slow_gravity).abs() < f64::EPSILON);
        assert_eq!(replay.grounds[0].left(), fresh.grounds[0].left());
        assert!((replay.pipes[0].x - fresh.pipes[0].x).abs() < f64::EPSILON);
    }
}
