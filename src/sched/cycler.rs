//! Timed rotation of solution overlays after a win
//!
//! Once the puzzle is won, recorded solutions are flashed over the board:
//! first showing 3 s after the cycle starts, one showing every 5 s after
//! that, each visible for a 2 s window before the puzzle rows come back.
//! Pure display; puzzle state is untouched. Stopping the cycle cancels any
//! pending revert through the token tree.

use crate::core::Board;
use crate::sched::{CancelToken, Scheduler};
use std::time::{Duration, Instant};

const INITIAL_DELAY: Duration = Duration::from_secs(3);
const CYCLE_PERIOD: Duration = Duration::from_secs(5);
const DISPLAY_WINDOW: Duration = Duration::from_secs(2);

/// Timer events the cycler schedules for itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleEvent {
    /// Swap the next solution over the puzzle rows
    Show,
    /// Put the puzzle rows back
    Revert,
}

/// Rotates the board through its accepted solutions on a fixed cadence
pub struct SolutionCycler {
    token: CancelToken,
    next_index: usize,
    running: bool,
}

impl SolutionCycler {
    #[must_use]
    pub fn new() -> Self {
        Self {
            token: CancelToken::new(),
            next_index: 0,
            running: false,
        }
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Begin cycling; the first overlay appears after the initial delay
    pub fn start(&mut self, sched: &mut Scheduler<CycleEvent>, now: Instant) {
        if self.running {
            return;
        }
        self.token = CancelToken::new();
        self.next_index = 0;
        self.running = true;
        sched.schedule(now + INITIAL_DELAY, self.token.child(), CycleEvent::Show);
    }

    /// Stop cycling and cancel every pending show/revert timer
    ///
    /// The board is reverted immediately if an overlay is on display.
    pub fn stop(&mut self, board: &mut Board) {
        self.token.cancel();
        self.running = false;
        board.revert_overlay();
    }

    /// React to a fired timer event
    pub fn on_event(
        &mut self,
        event: CycleEvent,
        board: &mut Board,
        sched: &mut Scheduler<CycleEvent>,
        now: Instant,
    ) {
        if !self.running {
            return;
        }
        match event {
            CycleEvent::Show => {
                let count = board.solution_count();
                if count > 0 {
                    board.show_solution(self.next_index % count);
                    self.next_index = (self.next_index + 1) % count;
                    // The revert timer lives under a child token so stopping
                    // the cycle cancels it with everything else.
                    sched.schedule(
                        now + DISPLAY_WINDOW,
                        self.token.child(),
                        CycleEvent::Revert,
                    );
                }
                sched.schedule(now + CYCLE_PERIOD, self.token.child(), CycleEvent::Show);
            }
            CycleEvent::Revert => {
                board.revert_overlay();
            }
        }
    }
}

impl Default for SolutionCycler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Solution;
    use crate::core::Word;

    fn board_with_solutions(paths: &[&[&str]]) -> Board {
        let mut board = Board::new(4, 2);
        board.initialize("COLD", "WORD").unwrap();
        for path in paths {
            let words = path
                .iter()
                .map(|t| {
                    let mut w = Word::new(4);
                    w.set_text(t, false);
                    w
                })
                .collect();
            assert!(board.add_solution(Solution::new(words).unwrap()));
        }
        board
    }

    fn drive(
        cycler: &mut SolutionCycler,
        board: &mut Board,
        sched: &mut Scheduler<CycleEvent>,
        now: Instant,
    ) {
        for event in sched.poll(now) {
            cycler.on_event(event, board, sched, now);
        }
    }

    #[test]
    fn first_overlay_appears_after_initial_delay() {
        let mut board = board_with_solutions(&[&["COLD", "CORD", "WORD"]]);
        let mut sched = Scheduler::new();
        let mut cycler = SolutionCycler::new();
        let t0 = Instant::now();

        cycler.start(&mut sched, t0);
        drive(&mut cycler, &mut board, &mut sched, t0 + Duration::from_secs(2));
        assert!(!board.overlay_active());

        drive(&mut cycler, &mut board, &mut sched, t0 + Duration::from_secs(3));
        assert!(board.overlay_active());
        assert_eq!(board.word(1).stringify().as_deref(), Some("CORD"));
    }

    #[test]
    fn overlay_reverts_after_display_window() {
        let mut board = board_with_solutions(&[&["COLD", "CORD", "WORD"]]);
        let mut sched = Scheduler::new();
        let mut cycler = SolutionCycler::new();
        let t0 = Instant::now();

        cycler.start(&mut sched, t0);
        drive(&mut cycler, &mut board, &mut sched, t0 + Duration::from_secs(3));
        assert!(board.overlay_active());

        drive(&mut cycler, &mut board, &mut sched, t0 + Duration::from_secs(5));
        assert!(!board.overlay_active());
        assert_eq!(board.word(1).stringify(), None);
    }

    #[test]
    fn solutions_rotate_on_each_period() {
        let mut board = board_with_solutions(&[
            &["COLD", "CORD", "WORD"],
            &["COLD", "WOLD", "WORD"],
        ]);
        let mut sched = Scheduler::new();
        let mut cycler = SolutionCycler::new();
        let t0 = Instant::now();

        cycler.start(&mut sched, t0);

        // t+3: first solution.
        let mut now = t0 + Duration::from_secs(3);
        drive(&mut cycler, &mut board, &mut sched, now);
        assert_eq!(board.word(1).stringify().as_deref(), Some("CORD"));

        // t+5: revert, t+8: second solution.
        now = t0 + Duration::from_secs(5);
        drive(&mut cycler, &mut board, &mut sched, now);
        now = t0 + Duration::from_secs(8);
        drive(&mut cycler, &mut board, &mut sched, now);
        assert_eq!(board.word(1).stringify().as_deref(), Some("WOLD"));

        // t+10: revert, t+13: back to the first.
        now = t0 + Duration::from_secs(10);
        drive(&mut cycler, &mut board, &mut sched, now);
        now = t0 + Duration::from_secs(13);
        drive(&mut cycler, &mut board, &mut sched, now);
        assert_eq!(board.word(1).stringify().as_deref(), Some("CORD"));
    }

    #[test]
    fn stop_cancels_pending_revert_and_restores_board() {
        let mut board = board_with_solutions(&[&["COLD", "CORD", "WORD"]]);
        let mut sched = Scheduler::new();
        let mut cycler = SolutionCycler::new();
        let t0 = Instant::now();

        cycler.start(&mut sched, t0);
        drive(&mut cycler, &mut board, &mut sched, t0 + Duration::from_secs(3));
        assert!(board.overlay_active());

        // Stop while the revert timer is pending; everything is cancelled.
        cycler.stop(&mut board);
        assert!(!board.overlay_active());
        assert!(sched.poll(t0 + Duration::from_secs(60)).is_empty());
        assert!(sched.is_empty());
    }

    #[test]
    fn show_event_without_solutions_keeps_cycling() {
        let mut board = Board::new(4, 2);
        board.initialize("COLD", "WORD").unwrap();
        let mut sched = Scheduler::new();
        let mut cycler = SolutionCycler::new();
        let t0 = Instant::now();

        cycler.start(&mut sched, t0);
        drive(&mut cycler, &mut board, &mut sched, t0 + Duration::from_secs(3));
        assert!(!board.overlay_active());
        // The next show is still scheduled.
        assert!(sched.next_due().is_some());
    }
}
