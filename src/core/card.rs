use super::burst::BurstLoop;
use super::evade::Evader;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Question,
    Celebration,
}

/// Page-level state: the question with its evasive button, then the
/// celebration. The transition is one-way.
pub struct Card {
    phase: Phase,
    evader: Evader,
}

impl Card {
    pub fn new(evader: Evader) -> Self {
        Self {
            phase: Phase::Question,
            evader,
        }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn is_confirmed(&self) -> bool {
        self.phase == Phase::Celebration
    }

    #[inline]
    pub fn offset(&self) -> Vec2 {
        self.evader.offset()
    }

    pub fn evader(&self) -> &Evader {
        &self.evader
    }

    /// Pointer moved inside the button zone. `target_center` is the rendered
    /// centre of the avoidance target, `None` if it could not be resolved.
    /// Returns whether the target jumped.
    pub fn on_pointer_move(&mut self, pointer: Vec2, target_center: Option<Vec2>) -> bool {
        if self.is_confirmed() {
            return false;
        }
        match target_center {
            Some(center) => self.evader.track_pointer(pointer, center),
            None => false,
        }
    }

    /// Unconditional jump (pointer enter, touch start, click on the target).
    pub fn relocate(&mut self) -> bool {
        if self.is_confirmed() {
            return false;
        }
        self.evader.relocate();
        true
    }

    /// Flip to the celebration. Only the first call starts a burst loop.
    pub fn confirm(&mut self, now_ms: f64) -> Option<BurstLoop> {
        if self.is_confirmed() {
            return None;
        }
        self.phase = Phase::Celebration;
        Some(BurstLoop::start(now_ms))
    }
}
