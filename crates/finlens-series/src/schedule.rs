//! Sampling schedule for each chart range.

use chrono::{Months, NaiveDateTime, NaiveTime, TimeDelta};
use finlens_types::{FinlensError, TimeRange};

/// Session open used as the first intraday sample.
pub const MARKET_OPEN: NaiveTime = session_time(9, 30);

/// Session close. Intraday samples stop before reaching it.
pub const MARKET_CLOSE: NaiveTime = session_time(16, 0);

const fn session_time(hour: u32, minute: u32) -> NaiveTime {
    match NaiveTime::from_hms_opt(hour, minute, 0) {
        Some(time) => time,
        None => panic!("invalid session time"),
    }
}

/// How far back from the anchor time a window starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookback {
    /// The current trading session, starting at [`MARKET_OPEN`].
    Session,
    /// A number of calendar days.
    Days(i64),
    /// A number of calendar months.
    Months(u32),
}

/// Spacing between consecutive samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Minutes between samples.
    Minutes(i64),
    /// Days between samples.
    Days(i64),
}

impl Step {
    /// Returns the step as a time delta.
    #[must_use]
    pub fn delta(&self) -> TimeDelta {
        match self {
            Self::Minutes(m) => TimeDelta::minutes(*m),
            Self::Days(d) => TimeDelta::days(*d),
        }
    }
}

/// Axis label format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelStyle {
    /// `HH:MM`
    TimeOfDay,
    /// `MM/DD`
    MonthDay,
    /// `MM/YYYY`
    MonthYear,
}

impl LabelStyle {
    /// Returns the `strftime` pattern for this style.
    #[must_use]
    pub const fn pattern(&self) -> &'static str {
        match self {
            Self::TimeOfDay => "%H:%M",
            Self::MonthDay => "%m/%d",
            Self::MonthYear => "%m/%Y",
        }
    }
}

/// Window, spacing and label format for one range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangePolicy {
    /// The range this policy applies to.
    pub range: TimeRange,
    /// Window start relative to the anchor time.
    pub lookback: Lookback,
    /// Spacing between samples.
    pub step: Step,
    /// Number of samples requested. Intraday windows may yield fewer.
    pub nominal_points: usize,
    /// Axis label format.
    pub label_style: LabelStyle,
}

impl RangePolicy {
    /// Returns the policy for a range.
    #[must_use]
    pub const fn for_range(range: TimeRange) -> Self {
        let (lookback, step, nominal_points, label_style) = match range {
            TimeRange::OneDay => (Lookback::Session, Step::Minutes(5), 78, LabelStyle::TimeOfDay),
            TimeRange::OneWeek => (Lookback::Days(7), Step::Days(1), 7, LabelStyle::MonthDay),
            TimeRange::OneMonth => (Lookback::Months(1), Step::Days(1), 30, LabelStyle::MonthDay),
            TimeRange::ThreeMonths => {
                (Lookback::Months(3), Step::Days(3), 30, LabelStyle::MonthDay)
            }
            TimeRange::SixMonths => (Lookback::Months(6), Step::Days(7), 26, LabelStyle::MonthDay),
            TimeRange::OneYear => (Lookback::Months(12), Step::Days(14), 26, LabelStyle::MonthDay),
            TimeRange::FiveYears => {
                (Lookback::Months(60), Step::Days(60), 30, LabelStyle::MonthYear)
            }
            TimeRange::Max => (Lookback::Months(120), Step::Days(120), 30, LabelStyle::MonthYear),
        };
        Self {
            range,
            lookback,
            step,
            nominal_points,
            label_style,
        }
    }

    /// Returns the first sample time for a window anchored at `now`.
    #[must_use]
    pub fn window_start(&self, now: NaiveDateTime) -> Option<NaiveDateTime> {
        match self.lookback {
            Lookback::Session => Some(now.date().and_time(MARKET_OPEN)),
            Lookback::Days(days) => now.checked_sub_signed(TimeDelta::days(days)),
            Lookback::Months(months) => now.checked_sub_months(Months::new(months)),
        }
    }

    /// Returns the sample times for a window anchored at `now`.
    ///
    /// # Errors
    ///
    /// Returns [`FinlensError::DateOutOfRange`] if the window start falls
    /// outside the representable calendar.
    pub fn timestamps(&self, now: NaiveDateTime) -> Result<SampleTimes, FinlensError> {
        let start = self
            .window_start(now)
            .ok_or_else(|| FinlensError::DateOutOfRange {
                range: self.range,
                anchor: now.to_string(),
            })?;
        let cutoff = match self.lookback {
            Lookback::Session => Some(now.date().and_time(MARKET_CLOSE)),
            _ => None,
        };

        Ok(SampleTimes {
            start,
            step: self.step.delta(),
            index: 0,
            count: self.nominal_points,
            cutoff,
        })
    }

    /// Formats a sample time as an axis label.
    #[must_use]
    pub fn label(&self, timestamp: NaiveDateTime) -> String {
        timestamp.format(self.label_style.pattern()).to_string()
    }
}

/// Iterator over the sample times of one window.
///
/// Stops after the nominal point count, or as soon as a sample would land at
/// or after the session close.
#[derive(Debug, Clone)]
pub struct SampleTimes {
    start: NaiveDateTime,
    step: TimeDelta,
    index: usize,
    count: usize,
    cutoff: Option<NaiveDateTime>,
}

impl Iterator for SampleTimes {
    type Item = NaiveDateTime;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.count {
            return None;
        }

        let offset = self.step * i32::try_from(self.index).ok()?;
        let timestamp = self.start.checked_add_signed(offset)?;

        if self.cutoff.is_some_and(|cutoff| timestamp >= cutoff) {
            self.index = self.count;
            return None;
        }

        self.index += 1;
        Some(timestamp)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.count - self.index))
    }
}
