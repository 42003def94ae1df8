//! Periodic expense summary reports.
//!
//! Three independent triggers (daily, weekly, monthly) fire at fixed UTC
//! calendar boundaries, take a summary from the engine for the report's
//! window and emit it to the operational log. Reports are not persisted and
//! are not exposed over HTTP.

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, NaiveTime, Utc};

use engine::{SharedEngine, Summary, SummaryFilter};

/// Source of the current instant, injected so tests can pin time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A periodic summary report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Report {
    /// Every midnight: today's expenses.
    Daily,
    /// Sunday midnight: the trailing seven days up to today, both ends
    /// included.
    Weekly,
    /// The 1st at midnight: the whole previous calendar month.
    Monthly,
}

impl Report {
    pub const ALL: [Report; 3] = [Report::Daily, Report::Weekly, Report::Monthly];

    pub fn label(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    /// The inclusive date window summarized when the report fires on `today`.
    pub fn window(self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        match self {
            Self::Daily => (today, today),
            Self::Weekly => (today - Duration::days(7), today),
            Self::Monthly => {
                let first_of_current = today.with_day(1).unwrap_or(today);
                let end = first_of_current.pred_opt().unwrap_or(first_of_current);
                let start = end.with_day(1).unwrap_or(end);
                (start, end)
            }
        }
    }

    /// The next instant strictly after `now` at which this report fires.
    pub fn next_fire(self, now: DateTime<Utc>) -> DateTime<Utc> {
        let tomorrow = now.date_naive() + Duration::days(1);
        let fire_date = match self {
            Self::Daily => tomorrow,
            Self::Weekly => {
                let offset = (7 - tomorrow.weekday().num_days_from_sunday() as i64) % 7;
                tomorrow + Duration::days(offset)
            }
            Self::Monthly => {
                let first_of_current = now.date_naive().with_day(1).unwrap_or(tomorrow);
                first_of_current
                    .checked_add_months(Months::new(1))
                    .unwrap_or(tomorrow)
            }
        };
        midnight(fire_date)
    }
}

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    DateTime::from_naive_utc_and_offset(date.and_time(NaiveTime::MIN), Utc)
}

/// Fires the periodic reports against a shared engine.
pub struct Scheduler<C: Clock = SystemClock> {
    engine: SharedEngine,
    clock: C,
}

impl Scheduler<SystemClock> {
    pub fn new(engine: SharedEngine) -> Self {
        Self::with_clock(engine, SystemClock)
    }
}

impl<C: Clock> Scheduler<C> {
    pub fn with_clock(engine: SharedEngine, clock: C) -> Self {
        Self { engine, clock }
    }

    /// Sleeps until the next calendar boundary, emits every report due at
    /// that instant, and repeats. Never returns.
    pub async fn run(self) {
        loop {
            let now = self.clock.now();
            let Some(fire_at) = Report::ALL.iter().map(|r| r.next_fire(now)).min() else {
                return;
            };

            let until = (fire_at - now).to_std().unwrap_or_default();
            tokio::time::sleep(until).await;

            // Boundaries can coincide (a Sunday that is also the 1st).
            let today = fire_at.date_naive();
            for report in Report::ALL {
                if report.next_fire(now) == fire_at {
                    self.emit(report, today).await;
                }
            }
        }
    }

    /// Takes the report's summary as of `today` and writes it to the log.
    pub async fn emit(&self, report: Report, today: NaiveDate) -> Summary {
        let (start, end) = report.window(today);
        let filter = SummaryFilter {
            category: None,
            start: Some(start),
            end: Some(end),
        };
        let summary = self.engine.read().await.summary(&filter);

        tracing::info!(
            report = report.label(),
            %start,
            %end,
            total = summary.total,
            expenses = summary.expenses.len(),
            "expense summary",
        );

        summary
    }
}
