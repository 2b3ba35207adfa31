//! Tick cadence for the play loop
//!
//! The period follows the engine's current speed. Any change of speed or play
//! state drops the old timer and arms a new one, so a tick scheduled for the
//! previous game can never land on a freshly reset one.

use std::time::Duration;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

use crate::game::PlayState;

pub struct GameClock {
    interval: Option<Interval>,
    period: Duration,
    play_state: PlayState,
}

impl GameClock {
    /// A stopped clock
    pub fn new(period: Duration) -> Self {
        Self {
            interval: None,
            period,
            play_state: PlayState::Paused,
        }
    }

    /// Match the clock to the engine. Returns true if the timer was re-armed.
    pub fn sync(&mut self, play_state: PlayState, period: Duration) -> bool {
        if play_state == self.play_state && period == self.period {
            return false;
        }

        self.play_state = play_state;
        self.period = period;
        self.interval = match play_state {
            PlayState::Running => {
                let mut interval = interval_at(Instant::now() + period, period);
                interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
                Some(interval)
            }
            PlayState::Paused => None,
        };

        tracing::trace!(?play_state, period_ms = period.as_millis() as u64, "clock re-armed");
        true
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.interval.is_some()
    }

    /// Wait for the next tick. Never completes while paused.
    pub async fn tick(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::timeout;

    #[tokio::test(start_paused = true)]
    async fn test_paused_clock_never_ticks() {
        let mut clock = GameClock::new(Duration::from_millis(100));
        assert!(!clock.is_running());
        assert!(timeout(Duration::from_secs(5), clock.tick()).await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_follow_period() {
        let mut clock = GameClock::new(Duration::from_millis(100));
        assert!(clock.sync(PlayState::Running, Duration::from_millis(100)));

        let start = Instant::now();
        clock.tick().await;
        let first = start.elapsed();
        clock.tick().await;
        let second = start.elapsed();

        assert!(first >= Duration::from_millis(100) && first < Duration::from_millis(110));
        assert!(second >= Duration::from_millis(200) && second < Duration::from_millis(210));
    }

    #[tokio::test(start_paused = true)]
    async fn test_speed_change_rearms() {
        let mut clock = GameClock::new(Duration::from_millis(100));
        clock.sync(PlayState::Running, Duration::from_millis(100));
        clock.tick().await;

        assert!(clock.sync(PlayState::Running, Duration::from_millis(90)));
        assert_eq!(clock.period(), Duration::from_millis(90));

        let start = Instant::now();
        clock.tick().await;
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(90) && elapsed < Duration::from_millis(100));
    }

    #[tokio::test(start_paused = true)]
    async fn test_unchanged_sync_keeps_timer() {
        let mut clock = GameClock::new(Duration::from_millis(100));
        assert!(clock.sync(PlayState::Running, Duration::from_millis(100)));
        assert!(!clock.sync(PlayState::Running, Duration::from_millis(100)));
        assert!(clock.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_stops_ticks() {
        let mut clock = GameClock::new(Duration::from_millis(100));
        clock.sync(PlayState::Running, Duration::from_millis(100));
        clock.tick().await;

        assert!(clock.sync(PlayState::Paused, Duration::from_millis(100)));
        assert!(!clock.is_running());
        assert!(timeout(Duration::from_secs(5), clock.tick()).await.is_err());
    }
}
