//! Month cursor for the commercial module.

use std::sync::Arc;

use dashboard_common::YearMonth;
use serde::Serialize;
use tokio::sync::watch;

use crate::clock::Clock;

/// Stored navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    pub current_month: YearMonth,
    pub is_loading: bool,
}

/// Navigation state plus the values derived from it at read time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationSnapshot {
    pub current_month: YearMonth,
    pub label: String,
    pub is_current_month: bool,
    pub is_loading: bool,
}

/// A move of the month cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthStep {
    Previous,
    Next,
    /// Back to the real-world current month.
    Current,
}

/// Holds the selected month and the loading flag.
pub struct NavigationContext {
    clock: Arc<dyn Clock>,
    state: watch::Sender<NavigationState>,
}

impl NavigationContext {
    /// Start on the clock's current month.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        let current_month = YearMonth::from_date(clock.today());
        let (state, _) = watch::channel(NavigationState {
            current_month,
            is_loading: false,
        });
        Self { clock, state }
    }

    pub fn current_month(&self) -> YearMonth {
        self.state.borrow().current_month
    }

    pub fn go_to_previous_month(&self) -> YearMonth {
        self.navigate(MonthStep::Previous).current_month
    }

    pub fn go_to_next_month(&self) -> YearMonth {
        self.navigate(MonthStep::Next).current_month
    }

    /// Jump back to the real-world current month.
    pub fn go_to_current_month(&self) -> YearMonth {
        self.navigate(MonthStep::Current).current_month
    }

    /// Apply `step` and return the state it produced, even when other
    /// callers move the cursor concurrently.
    pub fn navigate(&self, step: MonthStep) -> NavigationSnapshot {
        let today = YearMonth::from_date(self.clock.today());
        let mut after = *self.state.borrow();
        self.state.send_if_modified(|state| {
            let target = match step {
                MonthStep::Previous => state.current_month.pred(),
                MonthStep::Next => state.current_month.succ(),
                MonthStep::Current => today,
            };
            let changed = target != state.current_month;
            state.current_month = target;
            after = *state;
            changed
        });
        tracing::debug!(month = %after.current_month, "Month cursor moved");
        self.snapshot_of(after)
    }

    /// Whether `month` is the real-world current month right now.
    pub fn is_current_month(&self, month: YearMonth) -> bool {
        month.contains(self.clock.today())
    }

    /// Whether the selected month is the real-world current month.
    pub fn is_on_current_month(&self) -> bool {
        self.is_current_month(self.current_month())
    }

    /// Localized label of the selected month, e.g. "octobre 2026".
    pub fn current_month_display(&self) -> String {
        self.current_month().label_fr()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading
    }

    /// Set the loading flag and return the resulting state.
    pub fn set_loading(&self, is_loading: bool) -> NavigationSnapshot {
        let mut after = *self.state.borrow();
        self.state.send_if_modified(|state| {
            let changed = state.is_loading != is_loading;
            state.is_loading = is_loading;
            after = *state;
            changed
        });
        self.snapshot_of(after)
    }

    pub fn snapshot(&self) -> NavigationSnapshot {
        let state = *self.state.borrow();
        self.snapshot_of(state)
    }

    fn snapshot_of(&self, state: NavigationState) -> NavigationSnapshot {
        NavigationSnapshot {
            current_month: state.current_month,
            label: state.current_month.label_fr(),
            is_current_month: self.is_current_month(state.current_month),
            is_loading: state.is_loading,
        }
    }

    /// Observe every change of the stored state.
    pub fn subscribe(&self) -> watch::Receiver<NavigationState> {
        self.state.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    fn context_at(today: NaiveDate) -> (Arc<FixedClock>, NavigationContext) {
        let clock = Arc::new(FixedClock::new(today));
        let context = NavigationContext::new(clock.clone());
        (clock, context)
    }

    #[test]
    fn test_starts_on_current_month() {
        let (_, nav) = context_at(date(2026, 10, 17));
        assert_eq!(nav.current_month(), ym(2026, 10));
        assert!(nav.is_on_current_month());
        assert!(!nav.is_loading());
    }

    #[test]
    fn test_previous_rolls_over_year() {
        let (_, nav) = context_at(date(2026, 1, 5));
        assert_eq!(nav.go_to_previous_month(), ym(2025, 12));
        assert_eq!(nav.current_month_display(), "décembre 2025");
        assert!(!nav.is_on_current_month());
    }

    #[test]
    fn test_previous_then_next_round_trip() {
        let (_, nav) = context_at(date(2026, 1, 31));
        let start = nav.current_month();
        nav.go_to_previous_month();
        assert_eq!(nav.go_to_next_month(), start);
    }

    #[test]
    fn test_go_to_current_after_deep_navigation() {
        let (_, nav) = context_at(date(2026, 10, 17));
        for _ in 0..30 {
            nav.go_to_previous_month();
        }
        assert_eq!(nav.current_month(), ym(2024, 4));
        assert_eq!(nav.go_to_current_month(), ym(2026, 10));
        assert!(nav.is_on_current_month());
    }

    #[test]
    fn test_is_current_month_follows_the_clock() {
        let (clock, nav) = context_at(date(2026, 10, 31));
        assert!(nav.is_current_month(ym(2026, 10)));
        clock.set(date(2026, 11, 1));
        assert!(!nav.is_current_month(ym(2026, 10)));
        assert!(nav.is_current_month(ym(2026, 11)));
        assert_eq!(nav.go_to_current_month(), ym(2026, 11));
    }

    #[test]
    fn test_loading_flag_is_consumer_driven() {
        let (_, nav) = context_at(date(2026, 10, 17));
        nav.set_loading(true);
        assert!(nav.is_loading());
        nav.go_to_next_month();
        assert!(nav.is_loading());
        nav.set_loading(false);
        assert!(!nav.snapshot().is_loading);
    }

    #[test]
    fn test_snapshot() {
        let (_, nav) = context_at(date(2026, 10, 17));
        nav.go_to_next_month();
        let snapshot = nav.snapshot();
        assert_eq!(snapshot.current_month, ym(2026, 11));
        assert_eq!(snapshot.label, "novembre 2026");
        assert!(!snapshot.is_current_month);
    }

    #[test]
    fn test_navigate_returns_the_state_it_produced() {
        let (_, nav) = context_at(date(2026, 10, 17));
        nav.set_loading(true);
        let snapshot = nav.navigate(MonthStep::Previous);
        assert_eq!(snapshot.current_month, ym(2026, 9));
        assert_eq!(snapshot.label, "septembre 2026");
        assert!(snapshot.is_loading);
        assert!(!snapshot.is_current_month);

        let snapshot = nav.navigate(MonthStep::Current);
        assert_eq!(snapshot.current_month, ym(2026, 10));
        assert!(snapshot.is_current_month);
        assert!(!nav.set_loading(false).is_loading);
    }

    #[test]
    fn test_concurrent_moves_each_see_their_own_month() {
        let (_, nav) = context_at(date(2026, 10, 17));
        let nav = Arc::new(nav);

        let handles: Vec<_> = (0..12)
            .map(|_| {
                let nav = nav.clone();
                std::thread::spawn(move || nav.navigate(MonthStep::Next).current_month)
            })
            .collect();
        let mut months: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        months.sort();
        months.dedup();

        assert_eq!(months.len(), 12);
        assert_eq!(months.last(), Some(&ym(2027, 10)));
        assert_eq!(nav.current_month(), ym(2027, 10));
    }

    #[tokio::test]
    async fn test_subscribers_see_changes() {
        let (_, nav) = context_at(date(2026, 10, 17));
        let mut rx = nav.subscribe();
        nav.go_to_previous_month();
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().current_month, ym(2026, 9));

        // resetting onto the month already shown does not notify
        nav.go_to_next_month();
        rx.changed().await.unwrap();
        rx.borrow_and_update();
        nav.go_to_current_month();
        assert!(!rx.has_changed().unwrap());
    }
}
