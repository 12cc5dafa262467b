use serde::{Deserialize, Serialize};

/// a half-open range of clock hours `[start_hour, end_hour)` charged at
/// peak rates on weekdays.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PeakWindow {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl PeakWindow {
    pub fn new(start_hour: u32, end_hour: u32) -> PeakWindow {
        PeakWindow {
            start_hour,
            end_hour,
        }
    }

    pub fn contains(&self, hour: u32) -> bool {
        self.start_hour <= hour && hour < self.end_hour
    }
}
