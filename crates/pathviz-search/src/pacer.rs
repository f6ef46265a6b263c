use std::time::Duration;

/// Cooperative suspension between node expansions.
///
/// The search algorithms call [`pause`](Pacer::pause) once per expanded cell
/// (after the visit callback) so a host can repaint before the next step.
/// The pacer carries no cancellation signal: stopping a run is the host's
/// concern, by discarding the result of an abandoned run.
pub trait Pacer {
    /// Suspend the current search step for `delay`, then resume.
    fn pause(&mut self, delay: Duration);
}

/// Paces by putting the current thread to sleep.
#[derive(Clone, Copy, Debug, Default)]
pub struct SleepPacer;

impl Pacer for SleepPacer {
    fn pause(&mut self, delay: Duration) {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}

/// A pacer that does nothing, for tests and headless runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPacer;

impl Pacer for NoPacer {
    fn pause(&mut self, _delay: Duration) {}
}
