//! Named wall-clock timers.
//!
//! A timer accumulates every start/stop interval recorded under its name.
//! All timers are owned by one [`Timers`] value and reported together when
//! the run finishes.

use std::collections::{BTreeMap, HashMap};
use std::time::{Duration, Instant};

use log::debug;

use crate::errors::{TimerError, TimerResult};

#[derive(Debug, Default)]
pub struct Timers {
    totals: BTreeMap<String, Duration>,
    running: HashMap<String, Instant>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts timer `name`.
    ///
    /// # Errors
    /// [`TimerError::AlreadyRunning`] if `name` was started and not stopped.
    pub fn start(&mut self, name: &str) -> TimerResult<()> {
        if self.running.contains_key(name) {
            return Err(TimerError::AlreadyRunning(name.to_string()));
        }
        self.totals.entry(name.to_string()).or_default();
        self.running.insert(name.to_string(), Instant::now());
        Ok(())
    }

    /// Stops timer `name` and returns the length of the interval just closed.
    ///
    /// # Errors
    /// [`TimerError::NotRunning`] if `name` is not currently running.
    pub fn stop(&mut self, name: &str) -> TimerResult<Duration> {
        let started = self
            .running
            .remove(name)
            .ok_or_else(|| TimerError::NotRunning(name.to_string()))?;
        let elapsed = started.elapsed();
        self.add(name, elapsed);
        debug!("timer '{name}' stopped after {elapsed:?}");
        Ok(elapsed)
    }

    /// Adds `elapsed` to timer `name` without starting it.
    pub fn add(&mut self, name: &str, elapsed: Duration) {
        *self.totals.entry(name.to_string()).or_default() += elapsed;
    }

    /// Runs `f` between `start(name)` and `stop(name)`.
    pub fn time<T>(&mut self, name: &str, f: impl FnOnce() -> T) -> TimerResult<T> {
        self.start(name)?;
        let value = f();
        self.stop(name)?;
        Ok(value)
    }

    pub fn is_running(&self, name: &str) -> bool {
        self.running.contains_key(name)
    }

    /// Accumulated time of `name`, excluding any interval still open.
    pub fn get(&self, name: &str) -> Option<Duration> {
        self.totals.get(name).copied()
    }

    /// All timers sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Duration)> {
        self.totals.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_stop() {
        let mut t = Timers::new();
        t.start("forward").unwrap();
        assert!(t.is_running("forward"));
        let d = t.stop("forward").unwrap();
        assert!(!t.is_running("forward"));
        assert_eq!(t.get("forward"), Some(d));
    }

    #[test]
    fn test_double_start_errors() {
        let mut t = Timers::new();
        t.start("a").unwrap();
        assert_eq!(t.start("a").unwrap_err(), TimerError::AlreadyRunning("a".into()));
    }

    #[test]
    fn test_stop_without_start_errors() {
        let mut t = Timers::new();
        assert_eq!(t.stop("a").unwrap_err(), TimerError::NotRunning("a".into()));
    }

    #[test]
    fn test_intervals_accumulate() {
        let mut t = Timers::new();
        t.add("x", Duration::from_millis(5));
        t.add("x", Duration::from_millis(7));
        assert_eq!(t.get("x"), Some(Duration::from_millis(12)));
    }

    #[test]
    fn test_time_returns_value() {
        let mut t = Timers::new();
        let v = t.time("calc", || 6 * 7).unwrap();
        assert_eq!(v, 42);
        assert!(t.get("calc").is_some());
    }

    #[test]
    fn test_iter_sorted() {
        let mut t = Timers::new();
        t.add("total_time", Duration::ZERO);
        t.add("forward", Duration::ZERO);
        t.add("model_building", Duration::ZERO);
        let names: Vec<_> = t.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["forward", "model_building", "total_time"]);
    }
}
