use std::num::NonZeroU32;

/// Decides which render frames also advance the simulation: the first frame
/// and every `frames_per_tick`-th frame after it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Pacer {
    frames_per_tick: NonZeroU32,
    /// Number of frames seen so far
    frames: u64,
}

impl Pacer {
    pub(crate) fn new(frames_per_tick: NonZeroU32) -> Pacer {
        Pacer {
            frames_per_tick,
            frames: 0,
        }
    }

    /// Count a frame and return `true` if the simulation should tick on it
    pub(crate) fn frame(&mut self) -> bool {
        let due = self.frames % u64::from(self.frames_per_tick.get()) == 0;
        self.frames += 1;
        due
    }
}
