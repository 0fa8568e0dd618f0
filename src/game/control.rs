use std::time::{Duration, Instant};

use log::debug;

/// Ticks that may be replayed back to back after a slow frame,
/// older ones are dropped
const MAX_MISSED_TICKS: u32 = 5;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum State {
    NotStarted,
    Running,
    GameOver,
}

// combines the tick timer with game state management
pub struct Control {
    tick_period: Duration,
    game_state: State,

    // at most one tick is ever pending, it is taken out
    // when it fires and dropped when the game ends
    next_tick: Option<Instant>,
}

impl Control {
    pub fn new(tick_period: Duration) -> Self {
        Self {
            tick_period,
            game_state: State::NotStarted,
            next_tick: None,
        }
    }

    pub fn state(&self) -> State {
        self.game_state
    }

    pub fn play(&mut self, now: Instant) {
        self.game_state = State::Running;
        self.schedule(now);
    }

    pub fn game_over(&mut self) {
        self.game_state = State::GameOver;
        self.cancel();
    }

    /// Replaces any pending tick with one due a period after `after`
    pub fn schedule(&mut self, after: Instant) -> Instant {
        let due = after + self.tick_period;
        self.next_tick = Some(due);
        due
    }

    /// Returns whether a tick was pending
    pub fn cancel(&mut self) -> bool {
        self.next_tick.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.next_tick.is_some()
    }

    pub fn next_tick(&self) -> Option<Instant> {
        self.next_tick
    }

    // repeatedly called in update() as while loop condition,
    // yields the instant the tick was due at
    pub fn poll(&mut self, now: Instant) -> Option<Instant> {
        if self.game_state != State::Running {
            return None;
        }

        let due = match self.next_tick {
            Some(due) if due <= now => due,
            _ => return None,
        };
        self.next_tick = None;

        let behind = now - due;
        if behind > self.tick_period * MAX_MISSED_TICKS {
            debug!("{}ms behind, skipping missed ticks", behind.as_millis());
            Some(now)
        } else {
            Some(due)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(100);

    fn running(now: Instant) -> Control {
        let mut control = Control::new(PERIOD);
        control.play(now);
        control
    }

    #[test]
    fn test_not_due_before_period() {
        let start = Instant::now();
        let mut control = running(start);

        assert_eq!(control.poll(start), None);
        assert_eq!(control.poll(start + PERIOD / 2), None);
        assert_eq!(control.poll(start + PERIOD), Some(start + PERIOD));
        // taken out once fired
        assert!(!control.is_pending());
        assert_eq!(control.poll(start + PERIOD * 2), None);
    }

    #[test]
    fn test_cancelled_tick_never_fires() {
        let start = Instant::now();
        let mut control = running(start);

        control.game_over();
        assert_eq!(control.state(), State::GameOver);
        assert!(!control.is_pending());
        assert!(!control.cancel());
        assert_eq!(control.poll(start + PERIOD * 10), None);
    }

    #[test]
    fn test_schedule_replaces_pending() {
        let start = Instant::now();
        let mut control = running(start);

        let due = control.schedule(start + PERIOD);
        assert_eq!(due, start + PERIOD * 2);
        assert_eq!(control.next_tick(), Some(due));
        assert_eq!(control.poll(start + PERIOD), None);
        assert_eq!(control.poll(due), Some(due));
    }

    #[test]
    fn test_nothing_fires_before_start() {
        let start = Instant::now();
        let mut control = Control::new(PERIOD);

        control.schedule(start);
        assert_eq!(control.poll(start + PERIOD), None);
    }

    #[test]
    fn test_long_stall_skips_missed_ticks() {
        let start = Instant::now();
        let mut control = running(start);

        let late = start + PERIOD * 20;
        assert_eq!(control.poll(late), Some(late));
    }
}
