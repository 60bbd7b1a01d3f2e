use bevy::prelude::*;
use nalgebra::Vector3;

/// Button and axis state as sampled from the host this frame.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct RawInput {
    /// Motion axes (strafe, vertical, throttle)
    pub m: Vector3<f64>,
    /// Rotation axes (pitch, yaw, roll)
    pub r: Vector3<f64>,
    pub fire: bool,
    pub next: bool,
    pub reset: bool,
    pub quit: bool,
}

/// Per-tick input consumed by the simulation.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct ControlInput {
    /// Seconds since the previous tick
    pub dt: f64,
    pub m: Vector3<f64>,
    pub r: Vector3<f64>,
    /// Fire button released this tick
    pub handle_fire: bool,
    pub handle_next: bool,
    pub handle_r: bool,
    pub handle_q: bool,
}

impl ControlInput {
    /// Input with the given timestep and every axis at rest.
    pub fn idle(dt: f64) -> Self {
        Self {
            dt,
            ..Default::default()
        }
    }

    pub fn with_axes(mut self, m: Vector3<f64>, r: Vector3<f64>) -> Self {
        self.m = m;
        self.r = r;
        self
    }

    pub fn with_fire(mut self) -> Self {
        self.handle_fire = true;
        self
    }
}

/// Release-edge detector with a bounce guard.
///
/// Fires on the tick a held button is let go. After firing, edges are
/// ignored for `guard_frames` ticks so contact chatter on noisy inputs does
/// not produce a second event.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeTrigger {
    was_pressed: bool,
    cooldown: u32,
    guard_frames: u32,
}

impl EdgeTrigger {
    pub fn new(guard_frames: u32) -> Self {
        Self {
            guard_frames,
            ..Default::default()
        }
    }

    pub fn update(&mut self, pressed: bool) -> bool {
        let released = self.was_pressed && !pressed;
        self.was_pressed = pressed;

        if self.cooldown > 0 {
            self.cooldown -= 1;
            return false;
        }
        if released {
            self.cooldown = self.guard_frames;
        }
        released
    }
}

/// Turns [`RawInput`] into [`ControlInput`], one call per tick.
#[derive(Resource, Debug, Clone, Copy)]
pub struct InputSampler {
    fire: EdgeTrigger,
    next: EdgeTrigger,
    reset: EdgeTrigger,
    quit: EdgeTrigger,
}

impl Default for InputSampler {
    fn default() -> Self {
        Self::new(4)
    }
}

impl InputSampler {
    pub fn new(guard_frames: u32) -> Self {
        Self {
            fire: EdgeTrigger::new(guard_frames),
            next: EdgeTrigger::new(guard_frames),
            reset: EdgeTrigger::new(guard_frames),
            quit: EdgeTrigger::new(guard_frames),
        }
    }

    pub fn sample(&mut self, raw: &RawInput, dt: f64) -> ControlInput {
        ControlInput {
            dt,
            m: raw.m.map(clamp_axis),
            r: raw.r.map(clamp_axis),
            handle_fire: self.fire.update(raw.fire),
            handle_next: self.next.update(raw.next),
            handle_r: self.reset.update(raw.reset),
            handle_q: self.quit.update(raw.quit),
        }
    }
}

fn clamp_axis(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}
