use super::constants::{
    BURST_COLORS, BURST_DURATION_MS, BURST_LEFT_ANGLE_DEG, BURST_ORIGIN_Y, BURST_PARTICLE_COUNT,
    BURST_RIGHT_ANGLE_DEG, BURST_SPREAD_DEG,
};
use glam::Vec2;
use smallvec::{smallvec, SmallVec};

/// One confetti emission.
///
/// `origin` is a fraction of the viewport: `(0, 0.5)` is the middle of the
/// left edge. `angle_deg` is measured counter-clockwise from the +x axis, so
/// 90 shoots straight up.
#[derive(Clone, Debug, PartialEq)]
pub struct Burst {
    pub particle_count: u32,
    pub angle_deg: f32,
    pub spread_deg: f32,
    pub origin: Vec2,
    pub colors: &'static [&'static str],
}

/// Anything that can turn a [`Burst`] into particles on screen.
pub trait ConfettiSink {
    fn fire(&mut self, burst: &Burst);
}

/// The pair of edge bursts emitted on every celebration frame.
pub fn side_bursts() -> SmallVec<[Burst; 2]> {
    smallvec![
        Burst {
            particle_count: BURST_PARTICLE_COUNT,
            angle_deg: BURST_LEFT_ANGLE_DEG,
            spread_deg: BURST_SPREAD_DEG,
            origin: Vec2::new(0.0, BURST_ORIGIN_Y),
            colors: &BURST_COLORS,
        },
        Burst {
            particle_count: BURST_PARTICLE_COUNT,
            angle_deg: BURST_RIGHT_ANGLE_DEG,
            spread_deg: BURST_SPREAD_DEG,
            origin: Vec2::new(1.0, BURST_ORIGIN_Y),
            colors: &BURST_COLORS,
        },
    ]
}

/// Emits side bursts every frame until a wall-clock deadline passes.
#[derive(Clone, Debug)]
pub struct BurstLoop {
    end_ms: f64,
    frames: u32,
    finished: bool,
}

impl BurstLoop {
    pub fn start(now_ms: f64) -> Self {
        Self {
            end_ms: now_ms + BURST_DURATION_MS,
            frames: 0,
            finished: false,
        }
    }

    #[inline]
    pub fn end_ms(&self) -> f64 {
        self.end_ms
    }

    #[inline]
    pub fn frames(&self) -> u32 {
        self.frames
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Run one frame: fire both bursts, then report whether another frame
    /// should be scheduled. A finished loop fires nothing.
    pub fn frame(&mut self, now_ms: f64, sink: &mut impl ConfettiSink) -> bool {
        if self.finished {
            return false;
        }
        for burst in side_bursts().iter() {
            sink.fire(burst);
        }
        self.frames += 1;
        if now_ms < self.end_ms {
            true
        } else {
            self.finished = true;
            false
        }
    }
}
