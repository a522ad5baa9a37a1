use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use crate::*;

/// What a snapshot changed on the board.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SyncOutcome {
    /// Every cell was discarded and recreated.
    pub rebuilt: bool,
    /// Rows and columns changed without changing the cell count.
    pub relaid: bool,
    /// The document theme has to change.
    pub theme: Option<ThemeSwap>,
    /// Number of cells that started moving.
    pub started: usize,
}

impl SyncOutcome {
    pub fn has_update(&self) -> bool {
        self.rebuilt || self.relaid || self.theme.is_some() || self.started > 0
    }
}

/// Lays `message` out over `cells` positions: padded with blanks, truncated
/// when too long, and centered on request.
pub fn fit_message(message: &str, cells: usize, alignment: Alignment) -> Vec<char> {
    let len = message.chars().count();
    let lead = match alignment {
        Alignment::Left => 0,
        Alignment::Center => cells.saturating_sub(len) / 2,
    };
    let mut fitted: Vec<char> = core::iter::repeat_n(wheel::BLANK, lead)
        .chain(message.chars())
        .take(cells)
        .collect();
    fitted.resize(cells, wheel::BLANK);
    fitted
}

/// Owns the grid of flaps and reconciles it with remote snapshots.
///
/// The board only ever writes cell targets. Stepping state changes through
/// [`Board::wake`], driven by whatever [`Scheduler`] is passed in.
#[derive(Clone, Debug)]
pub struct Board {
    layout: Option<Layout>,
    theme: Option<String>,
    cells: Vec<FlapCell>,
    base_timing: FlipTiming,
    timing: FlipTiming,
    alignment: Alignment,
    generation: u32,
}

impl Board {
    pub fn new(timing: FlipTiming, alignment: Alignment) -> Self {
        Self {
            layout: None,
            theme: None,
            cells: Vec::new(),
            base_timing: timing,
            timing,
            alignment,
            generation: 0,
        }
    }

    pub fn layout(&self) -> Option<Layout> {
        self.layout
    }

    pub fn theme(&self) -> Option<&str> {
        self.theme.as_deref()
    }

    pub fn timing(&self) -> FlipTiming {
        self.timing
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn cells(&self) -> &[FlapCell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// True once no cell is moving.
    pub fn is_settled(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_moving())
    }

    /// Characters currently committed on the board, in grid order.
    pub fn committed(&self) -> String {
        self.cells.iter().map(FlapCell::current).collect()
    }

    /// Characters the board is rotating toward, in grid order.
    pub fn targets(&self) -> String {
        self.cells.iter().map(FlapCell::target).collect()
    }

    /// Rebuilds the board from scratch: theme, grid and message.
    pub fn initialize(
        &mut self,
        snapshot: &BoardSnapshot,
        scheduler: &mut impl Scheduler,
    ) -> Result<SyncOutcome> {
        let layout = snapshot.layout()?;
        log::info!(
            "provisioning {}x{} board, theme {:?}",
            layout.rows(),
            layout.cols(),
            snapshot.theme
        );

        let theme = Some(ThemeSwap {
            previous: self.theme.replace(snapshot.theme.clone()),
            next: snapshot.theme.clone(),
        });
        self.timing = snapshot.timing(self.base_timing);
        self.provision(layout, scheduler);
        let started = self.apply_message(&snapshot.current_message, scheduler);

        Ok(SyncOutcome {
            rebuilt: true,
            relaid: false,
            theme,
            started,
        })
    }

    /// Points every cell at its character of `message`, returning how many
    /// cells started moving. Cells already headed for the right character are
    /// left alone, so repeating a message is free.
    pub fn apply_message(&mut self, message: &str, scheduler: &mut impl Scheduler) -> usize {
        let fitted = fit_message(message, self.cells.len(), self.alignment);
        let generation = self.generation;
        let mut started = 0;
        for (index, (cell, ch)) in self.cells.iter_mut().zip(fitted).enumerate() {
            if let Some(delay_ms) = cell.set_target(ch, &self.timing) {
                scheduler.schedule(
                    delay_ms,
                    Wake {
                        cell: index,
                        generation,
                    },
                );
                started += 1;
            }
        }
        if started > 0 {
            log::debug!("message {:?} started {} flaps", message, started);
        }
        started
    }

    /// Applies one polled snapshot.
    ///
    /// A different cell count rebuilds the whole board and drops animations
    /// in flight. Otherwise the cells are kept and only the theme (if it
    /// changed) and the message are applied.
    pub fn sync(
        &mut self,
        snapshot: &BoardSnapshot,
        scheduler: &mut impl Scheduler,
    ) -> Result<SyncOutcome> {
        let layout = snapshot.layout()?;
        if layout.cell_count() != self.cells.len() {
            log::debug!(
                "cell count changed {} -> {}, rebuilding",
                self.cells.len(),
                layout.cell_count()
            );
            return self.initialize(snapshot, scheduler);
        }

        let relaid = self.layout.replace(layout) != Some(layout);
        if relaid {
            log::debug!("board relaid as {}x{}", layout.rows(), layout.cols());
        }

        let theme = if self.theme() != Some(snapshot.theme.as_str()) {
            Some(ThemeSwap {
                previous: self.theme.replace(snapshot.theme.clone()),
                next: snapshot.theme.clone(),
            })
        } else {
            None
        };

        self.timing = snapshot.timing(self.base_timing);
        let started = self.apply_message(&snapshot.current_message, scheduler);

        Ok(SyncOutcome {
            rebuilt: false,
            relaid,
            theme,
            started,
        })
    }

    /// Delivers a scheduler wake-up to its cell. Returns whether anything
    /// visible changed.
    pub fn wake(&mut self, wake: Wake, scheduler: &mut impl Scheduler) -> bool {
        if wake.generation != self.generation {
            log::trace!("dropping wake-up from generation {}", wake.generation);
            return false;
        }
        let Some(cell) = self.cells.get_mut(wake.cell) else {
            return false;
        };
        if !cell.is_moving() {
            return false;
        }
        if let Some(delay_ms) = cell.advance(&self.timing) {
            scheduler.schedule(delay_ms, wake);
        }
        true
    }

    /// Delivers every wake-up due up to `until_ms` of virtual time.
    pub fn run_until(&mut self, scheduler: &mut ManualScheduler, until_ms: u64) -> usize {
        let mut delivered = 0;
        while let Some(wake) = scheduler.pop_due(until_ms) {
            self.wake(wake, scheduler);
            delivered += 1;
        }
        delivered
    }

    /// Runs virtual time forward until every animation has finished.
    pub fn settle(&mut self, scheduler: &mut ManualScheduler) -> usize {
        let mut delivered = 0;
        while let Some(due_ms) = scheduler.next_due_ms() {
            delivered += self.run_until(scheduler, due_ms);
        }
        delivered
    }

    fn provision(&mut self, layout: Layout, scheduler: &mut impl Scheduler) {
        scheduler.cancel_all();
        self.generation = self.generation.wrapping_add(1);
        self.layout = Some(layout);
        self.cells = vec![FlapCell::new(); layout.cell_count()];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(FlipTiming::default(), Alignment::default())
    }
}
