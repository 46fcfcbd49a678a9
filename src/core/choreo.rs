//! Camera choreography: the shot table, the tween primitive that moves
//! render state between shots, and the scroll-progress rotation coupling.
//!
//! Everything here is pure and platform-free; the web frontend owns one
//! [`Choreographer`] and one [`RenderState`] and drives them from scroll
//! events and the frame loop.

use glam::Vec3;

/// Seconds a shot transition takes (collapses to 0 under reduced motion).
pub const SHOT_TWEEN_DURATION: f32 = 1.2;

/// Full-page scroll maps linearly onto this many radians of hero rotation.
pub const SCROLL_ROTATION_SPAN: f32 = std::f32::consts::PI * 2.5;

/// A fixed camera/light configuration the page can cut to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shot {
    pub cam: Vec3,
    pub look: Vec3,
    pub key: Vec3,
}

/// The five shots, in panel order: hero, work, chapter1, chapter2, about.
pub const SHOTS: [Shot; 5] = [
    Shot {
        cam: Vec3::new(0.0, 0.75, 9.0),
        look: Vec3::new(0.0, 0.2, 0.0),
        key: Vec3::new(3.0, 3.0, 5.0),
    },
    Shot {
        cam: Vec3::new(1.35, 0.45, 6.6),
        look: Vec3::new(0.0, 0.1, 0.0),
        key: Vec3::new(4.5, 2.2, 3.4),
    },
    Shot {
        cam: Vec3::new(-1.25, 0.95, 7.4),
        look: Vec3::new(0.25, 0.25, 0.0),
        key: Vec3::new(-3.0, 3.4, 4.4),
    },
    Shot {
        cam: Vec3::new(0.75, 1.15, 5.9),
        look: Vec3::new(0.0, 0.22, 0.0),
        key: Vec3::new(2.6, 4.0, 2.1),
    },
    Shot {
        cam: Vec3::new(0.0, 0.62, 9.4),
        look: Vec3::new(0.0, 0.2, 0.0),
        key: Vec3::new(3.6, 2.8, 5.6),
    },
];

/// Mutable record the frame updater projects into visuals every frame.
///
/// Single instance, single-threaded; written only by [`Choreographer::apply`]
/// and [`Choreographer::set_scroll_progress`].
#[derive(Clone, Copy, Debug)]
pub struct RenderState {
    pub cam: Vec3,
    pub look: Vec3,
    pub key: Vec3,
    /// Accumulated scroll-driven rotation, radians.
    pub rot: f32,
}

impl RenderState {
    pub fn at_shot(shot: &Shot) -> Self {
        Self {
            cam: shot.cam,
            look: shot.look,
            key: shot.key,
            rot: 0.0,
        }
    }
}

impl Default for RenderState {
    fn default() -> Self {
        Self::at_shot(&SHOTS[0])
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    QuadOut,
    CubicOut,
}

impl Ease {
    #[inline]
    pub fn sample(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Ease::CubicOut => 1.0 - (1.0 - t) * (1.0 - t) * (1.0 - t),
        }
    }
}

/// One in-flight interpolation over a Vec3 field group.
///
/// Re-targeting replaces start value, target and start time in place; tweens
/// on the same fields never stack, so the latest call always wins and
/// interpolates from wherever the previous one left the value.
#[derive(Clone, Copy, Debug)]
pub struct VecTween {
    from: Vec3,
    to: Vec3,
    start: f64,
    duration: f32,
    ease: Ease,
}

impl VecTween {
    /// A tween at rest on `value`.
    pub fn settled(value: Vec3) -> Self {
        Self {
            from: value,
            to: value,
            start: 0.0,
            duration: 0.0,
            ease: Ease::Linear,
        }
    }

    pub fn retarget(&mut self, current: Vec3, to: Vec3, now: f64, duration: f32, ease: Ease) {
        self.from = current;
        self.to = to;
        self.start = now;
        self.duration = duration;
        self.ease = ease;
    }

    pub fn target(&self) -> Vec3 {
        self.to
    }

    pub fn sample(&self, now: f64) -> Vec3 {
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = (now - self.start) as f32 / self.duration;
        if t >= 1.0 {
            // land on the target exactly; lerp at 1.0 can be a ulp off
            return self.to;
        }
        self.from.lerp(self.to, self.ease.sample(t.max(0.0)))
    }

    pub fn settled_at(&self, now: f64) -> bool {
        self.duration <= 0.0 || (now - self.start) as f32 >= self.duration
    }
}

/// Maps shot transitions and scroll progress onto [`RenderState`].
pub struct Choreographer {
    cam: VecTween,
    look: VecTween,
    key: VecTween,
    reduce_motion: bool,
    active_shot: usize,
}

impl Choreographer {
    /// Starts at rest on shot 0.
    pub fn new(reduce_motion: bool) -> Self {
        let s = &SHOTS[0];
        Self {
            cam: VecTween::settled(s.cam),
            look: VecTween::settled(s.look),
            key: VecTween::settled(s.key),
            reduce_motion,
            active_shot: 0,
        }
    }

    pub fn active_shot(&self) -> usize {
        self.active_shot
    }

    /// Re-targets the three field tweens toward `SHOTS[index]` (out-of-range
    /// indices fall back to shot 0), starting from the current state values.
    pub fn go_to_shot(&mut self, index: usize, state: &RenderState, now: f64) {
        let resolved = if index < SHOTS.len() { index } else { 0 };
        let shot = &SHOTS[resolved];
        let (duration, ease) = if self.reduce_motion {
            (0.0, Ease::Linear)
        } else {
            (SHOT_TWEEN_DURATION, Ease::CubicOut)
        };
        self.cam.retarget(state.cam, shot.cam, now, duration, ease);
        self.look.retarget(state.look, shot.look, now, duration, ease);
        self.key.retarget(state.key, shot.key, now, duration, ease);
        self.active_shot = resolved;
    }

    /// Writes the sampled tween values into `state`. Call once per frame,
    /// after scroll triggers have fired and before the frame updater reads.
    pub fn apply(&self, state: &mut RenderState, now: f64) {
        state.cam = self.cam.sample(now);
        state.look = self.look.sample(now);
        state.key = self.key.sample(now);
    }

    /// Direct (untweened) scroll coupling; inert under reduced motion.
    pub fn set_scroll_progress(&self, state: &mut RenderState, progress: f32) {
        if !self.reduce_motion {
            state.rot = scroll_rotation(progress);
        }
    }

    pub fn in_transition(&self, now: f64) -> bool {
        !(self.cam.settled_at(now) && self.look.settled_at(now) && self.key.settled_at(now))
    }
}

/// Linear map from page progress in [0, 1] to rotation radians.
#[inline]
pub fn scroll_rotation(progress: f32) -> f32 {
    progress.clamp(0.0, 1.0) * SCROLL_ROTATION_SPAN
}
