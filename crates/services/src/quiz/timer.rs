/// Seconds the user gets for each question.
pub const SECONDS_PER_QUESTION: u32 = 30;

/// Identifies one countdown; every restart issues a new token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TimerTick {
    /// The tick belongs to an earlier countdown or the timer is stopped.
    Stale,
    Running(u32),
    Expired,
}

/// Per-question countdown.
///
/// Callers schedule one tick per second with the token that was current when
/// they scheduled it; ticks from a superseded countdown are ignored, so a late
/// callback can never finalize a question twice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct QuestionTimer {
    remaining: u32,
    generation: u64,
    running: bool,
}

impl QuestionTimer {
    pub(crate) fn started() -> Self {
        Self {
            remaining: SECONDS_PER_QUESTION,
            generation: 0,
            running: true,
        }
    }

    pub(crate) fn remaining(&self) -> u32 {
        self.remaining
    }

    pub(crate) fn token(&self) -> TimerToken {
        TimerToken(self.generation)
    }

    pub(crate) fn restart(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.remaining = SECONDS_PER_QUESTION;
        self.running = true;
    }

    pub(crate) fn stop(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.running = false;
    }

    pub(crate) fn tick(&mut self, token: TimerToken) -> TimerTick {
        if !self.running || token != self.token() {
            return TimerTick::Stale;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            // Expiry is reported once; the owner restarts or stops the timer.
            self.running = false;
            TimerTick::Expired
        } else {
            TimerTick::Running(self.remaining)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_down_to_expiry_once() {
        let mut timer = QuestionTimer::started();
        let token = timer.token();
        for expected in (1..SECONDS_PER_QUESTION).rev() {
            assert_eq!(timer.tick(token), TimerTick::Running(expected));
        }
        assert_eq!(timer.tick(token), TimerTick::Expired);
        assert_eq!(timer.tick(token), TimerTick::Stale);
        assert_eq!(timer.remaining(), 0);
    }

    #[test]
    fn restart_invalidates_old_token() {
        let mut timer = QuestionTimer::started();
        let old = timer.token();
        timer.tick(old);
        timer.restart();

        assert_eq!(timer.tick(old), TimerTick::Stale);
        assert_eq!(timer.remaining(), SECONDS_PER_QUESTION);
        assert_eq!(
            timer.tick(timer.token()),
            TimerTick::Running(SECONDS_PER_QUESTION - 1)
        );
    }

    #[test]
    fn stopped_timer_ignores_ticks() {
        let mut timer = QuestionTimer::started();
        let token = timer.token();
        timer.stop();
        assert_eq!(timer.tick(token), TimerTick::Stale);
        assert_eq!(timer.tick(timer.token()), TimerTick::Stale);
    }
}
