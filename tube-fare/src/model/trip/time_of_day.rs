use super::PeakWindow;
use chrono::{NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TimeOfDay {
    Peak,
    OffPeak,
}

impl TimeOfDay {
    /// peak applies Monday through Friday when the hour falls inside any
    /// of the peak windows. weekends are always off-peak.
    pub fn classify(weekday: Weekday, time: &NaiveTime, peak_windows: &[PeakWindow]) -> TimeOfDay {
        let is_weekday = weekday.number_from_monday() <= 5;
        if is_weekday && peak_windows.iter().any(|w| w.contains(time.hour())) {
            TimeOfDay::Peak
        } else {
            TimeOfDay::OffPeak
        }
    }
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeOfDay::Peak => write!(f, "Peak"),
            TimeOfDay::OffPeak => write!(f, "Off-peak"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TimeOfDay;
    use crate::model::trip::PeakWindow;
    use chrono::{NaiveTime, Weekday};

    fn windows() -> Vec<PeakWindow> {
        vec![PeakWindow::new(6, 9), PeakWindow::new(16, 19)]
    }

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).expect("valid time")
    }

    #[test]
    fn test_weekday_window_edges() {
        let w = windows();
        assert_eq!(TimeOfDay::classify(Weekday::Mon, &at(5, 59), &w), TimeOfDay::OffPeak);
        assert_eq!(TimeOfDay::classify(Weekday::Mon, &at(6, 0), &w), TimeOfDay::Peak);
        assert_eq!(TimeOfDay::classify(Weekday::Wed, &at(8, 59), &w), TimeOfDay::Peak);
        assert_eq!(TimeOfDay::classify(Weekday::Wed, &at(9, 0), &w), TimeOfDay::OffPeak);
        assert_eq!(TimeOfDay::classify(Weekday::Fri, &at(16, 0), &w), TimeOfDay::Peak);
        assert_eq!(TimeOfDay::classify(Weekday::Fri, &at(18, 59), &w), TimeOfDay::Peak);
        assert_eq!(TimeOfDay::classify(Weekday::Fri, &at(19, 0), &w), TimeOfDay::OffPeak);
    }

    #[test]
    fn test_weekend_is_off_peak() {
        let w = windows();
        assert_eq!(TimeOfDay::classify(Weekday::Sat, &at(7, 30), &w), TimeOfDay::OffPeak);
        assert_eq!(TimeOfDay::classify(Weekday::Sun, &at(17, 0), &w), TimeOfDay::OffPeak);
    }

    #[test]
    fn test_display() {
        assert_eq!(TimeOfDay::Peak.to_string(), "Peak");
        assert_eq!(TimeOfDay::OffPeak.to_string(), "Off-peak");
    }
}
