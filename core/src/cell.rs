use crate::*;

/// Where a flap is in its step cycle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum CellPhase {
    /// At rest. Stable until a new target differs from the current symbol.
    #[default]
    Idle,
    /// The upcoming symbol is showing while the top half falls.
    Flipping { upcoming: char },
    /// A step was just committed, waiting briefly before the next one.
    Pausing,
}

impl CellPhase {
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// The four painted regions of one flap.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Faces {
    pub top: char,
    pub bottom: char,
    pub next_top: char,
    pub next_bottom: char,
    pub flipping: bool,
}

/// One position on the board, rotating forward through the wheel until it
/// shows its target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlapCell {
    current: char,
    target: char,
    phase: CellPhase,
    flips: u32,
}

impl FlapCell {
    pub const fn new() -> Self {
        Self {
            current: wheel::BLANK,
            target: wheel::BLANK,
            phase: CellPhase::Idle,
            flips: 0,
        }
    }

    pub fn current(&self) -> char {
        self.current
    }

    pub fn target(&self) -> char {
        self.target
    }

    pub fn phase(&self) -> CellPhase {
        self.phase
    }

    pub fn is_moving(&self) -> bool {
        !self.phase.is_idle()
    }

    /// Number of steps committed since the cell was created.
    pub fn flips(&self) -> u32 {
        self.flips
    }

    pub fn faces(&self) -> Faces {
        let (next, flipping) = match self.phase {
            CellPhase::Flipping { upcoming } => (upcoming, true),
            CellPhase::Idle | CellPhase::Pausing => (self.current, false),
        };
        Faces {
            top: self.current,
            bottom: self.current,
            next_top: next,
            next_bottom: next,
            flipping,
        }
    }

    /// Points the cell at `ch`, which is normalized onto the wheel first.
    ///
    /// Returns the delay of the wake-up the caller must schedule, if this call
    /// started the cell moving. A cell already in motion just keeps rotating
    /// toward the new target.
    pub fn set_target(&mut self, ch: char, timing: &FlipTiming) -> Option<u32> {
        self.target = wheel::normalize(ch);
        if self.phase.is_idle() && self.current != self.target {
            Some(self.begin_step(timing))
        } else {
            None
        }
    }

    /// Handles a scheduled wake-up, returning the delay of the next one.
    pub fn advance(&mut self, timing: &FlipTiming) -> Option<u32> {
        match self.phase {
            CellPhase::Idle => None,
            CellPhase::Flipping { upcoming } => {
                self.current = upcoming;
                self.flips += 1;
                if self.current != self.target {
                    self.phase = CellPhase::Pausing;
                    Some(timing.step_delay_ms)
                } else {
                    log::trace!("flap settled on {:?} after {} flips", self.current, self.flips);
                    self.phase = CellPhase::Idle;
                    None
                }
            }
            CellPhase::Pausing if self.current == self.target => {
                self.phase = CellPhase::Idle;
                None
            }
            CellPhase::Pausing => Some(self.begin_step(timing)),
        }
    }

    fn begin_step(&mut self, timing: &FlipTiming) -> u32 {
        let upcoming = wheel::next(self.current);
        self.phase = CellPhase::Flipping { upcoming };
        timing.flip_ms
    }
}

impl Default for FlapCell {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timing() -> FlipTiming {
        FlipTiming::default()
    }

    /// Drives the cell through wake-ups until it stops asking for more.
    fn run(cell: &mut FlapCell, mut delay: Option<u32>) -> usize {
        let mut wakes = 0;
        while delay.is_some() {
            delay = cell.advance(&timing());
            wakes += 1;
        }
        wakes
    }

    #[test]
    fn new_cell_is_idle_on_blank() {
        let cell = FlapCell::new();

        assert_eq!(cell.current(), ' ');
        assert_eq!(cell.target(), ' ');
        assert!(!cell.is_moving());
    }

    #[test]
    fn unknown_target_becomes_blank_and_does_not_move() {
        let mut cell = FlapCell::new();

        assert_eq!(cell.set_target('x', &timing()), None);
        assert_eq!(cell.target(), ' ');
        assert!(!cell.is_moving());
    }

    #[test]
    fn step_shows_upcoming_then_commits() {
        let mut cell = FlapCell::new();

        assert_eq!(cell.set_target('B', &timing()), Some(300));
        assert_eq!(cell.phase(), CellPhase::Flipping { upcoming: 'A' });
        let faces = cell.faces();
        assert_eq!((faces.top, faces.next_top, faces.flipping), (' ', 'A', true));

        assert_eq!(cell.advance(&timing()), Some(30));
        assert_eq!(cell.current(), 'A');
        assert_eq!(cell.phase(), CellPhase::Pausing);
        assert!(!cell.faces().flipping);

        assert_eq!(cell.advance(&timing()), Some(300));
        assert_eq!(cell.advance(&timing()), None);
        assert_eq!(cell.current(), 'B');
        assert!(!cell.is_moving());
        assert_eq!(cell.flips(), 2);
    }

    #[test]
    fn every_pair_converges_after_forward_distance() {
        for from in wheel::CHARS.chars() {
            for to in wheel::CHARS.chars() {
                let mut cell = FlapCell::new();
                let delay = cell.set_target(from, &timing());
                run(&mut cell, delay);
                let base = cell.flips();

                let delay = cell.set_target(to, &timing());
                run(&mut cell, delay);

                let expected = (wheel::index_of(to).unwrap() + wheel::LEN
                    - wheel::index_of(from).unwrap())
                    % wheel::LEN;
                assert_eq!((cell.flips() - base) as usize, expected, "{from:?} -> {to:?}");
                assert_eq!(cell.current(), to);
                assert!(!cell.is_moving());
            }
        }
    }

    #[test]
    fn target_behind_current_wraps_all_the_way_around() {
        let mut cell = FlapCell::new();
        let delay = cell.set_target('B', &timing());
        run(&mut cell, delay);

        let delay = cell.set_target('A', &timing());
        run(&mut cell, delay);

        assert_eq!(cell.flips(), 2 + wheel::LEN as u32 - 1);
        assert_eq!(cell.current(), 'A');
    }

    #[test]
    fn retarget_mid_flight_keeps_a_single_chain() {
        let mut cell = FlapCell::new();
        assert!(cell.set_target('C', &timing()).is_some());
        assert_eq!(cell.advance(&timing()), Some(30));

        // already moving, so no second wake-up is requested
        assert_eq!(cell.set_target('E', &timing()), None);
        run(&mut cell, Some(30));

        assert_eq!(cell.current(), 'E');
        assert_eq!(cell.flips(), 5);
    }

    #[test]
    fn retarget_to_current_during_pause_goes_idle() {
        let mut cell = FlapCell::new();
        cell.set_target('C', &timing());
        cell.advance(&timing());
        assert_eq!(cell.current(), 'A');

        assert_eq!(cell.set_target('A', &timing()), None);
        assert_eq!(cell.advance(&timing()), None);
        assert!(!cell.is_moving());
        assert_eq!(cell.flips(), 1);
    }

    #[test]
    fn stale_wake_on_idle_cell_is_ignored() {
        let mut cell = FlapCell::new();

        assert_eq!(cell.advance(&timing()), None);
        assert_eq!(cell.flips(), 0);
    }

    #[test]
    fn speed_drives_flip_duration() {
        let timing = FlipTiming::default().with_speed(150);
        let mut cell = FlapCell::new();

        assert_eq!(cell.set_target('A', &timing), Some(300));
        let fast = FlipTiming::default().with_speed(40);
        assert_eq!(cell.advance(&fast), None);
        assert_eq!(cell.set_target('B', &fast), Some(80));
    }
}
