/// Input sampler — turns one raw hardware sample into a discrete intent.
///
/// Two physical mappings exist: three digital buttons, or a single analog
/// directional pad whose level encodes the pressed directions.  Both collapse
/// into the same `Intent` set, so the simulation never knows which one is
/// wired.  Pure functions only; sampling the pins is the caller's problem.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    None,
    Left,
    Right,
    Up,
    LeftUp,
    RightUp,
}

impl Intent {
    pub fn moves_left(self) -> bool {
        matches!(self, Intent::Left | Intent::LeftUp)
    }

    pub fn moves_right(self) -> bool {
        matches!(self, Intent::Right | Intent::RightUp)
    }

    pub fn jumps(self) -> bool {
        matches!(self, Intent::Up | Intent::LeftUp | Intent::RightUp)
    }
}

/// One snapshot of whichever input hardware is configured.
#[derive(Clone, Copy, Debug)]
pub enum RawSample {
    Digital { left: bool, right: bool, up: bool },
    /// ADC reading of the directional pad, 0..=1023.
    Analog(u16),
}

// Pad codes after discretization.  Single directions are prime-ish spaced so
// the two-button chords (left+up, right+up) land on distinct codes.
const CODE_ENTER: u16 = 1;
const CODE_LEFT: u16 = 2;
const CODE_UP: u16 = 3;
const CODE_LEFT_UP: u16 = 5;
const CODE_RIGHT: u16 = 6;
const CODE_RIGHT_UP: u16 = 9;

/// Bucket a raw ADC level into a pad code: rescale 0..=1023 to 0..=100,
/// then halve with ceiling.  This is what stabilizes the noisy pad.
fn analog_code(raw: u16) -> u16 {
    let percent = u32::from(raw.min(1023)) * 100 / 1023;
    ((percent + 1) / 2) as u16
}

/// Derive the tick's intent from a raw sample.  Total and idempotent:
/// the same sample always yields the same intent, and unknown analog
/// codes (pad at rest, noise between detents) yield `Intent::None`.
pub fn sample_intent(raw: RawSample) -> Intent {
    match raw {
        RawSample::Digital { left, right, up } => {
            // Opposing buttons cancel horizontally.
            let (left, right) = if left && right { (false, false) } else { (left, right) };
            match (left, right, up) {
                (true, _, true) => Intent::LeftUp,
                (_, true, true) => Intent::RightUp,
                (true, _, false) => Intent::Left,
                (_, true, false) => Intent::Right,
                (false, false, true) => Intent::Up,
                (false, false, false) => Intent::None,
            }
        }
        RawSample::Analog(raw) => match analog_code(raw) {
            CODE_LEFT => Intent::Left,
            CODE_RIGHT => Intent::Right,
            CODE_UP => Intent::Up,
            CODE_LEFT_UP => Intent::LeftUp,
            CODE_RIGHT_UP => Intent::RightUp,
            // Enter has no meaning inside the simulation.
            CODE_ENTER => Intent::None,
            _ => Intent::None,
        },
    }
}
