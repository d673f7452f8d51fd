use xdigest_common::Period;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct ScheduleSlot {
    pub hour: u32,
    #[serde(default)]
    pub minute: u32,
    pub period: Period,
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    pub timezone: chrono_tz::Tz,
    pub slots: Vec<ScheduleSlot>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: chrono_tz::America::Argentina::Buenos_Aires,
            slots: vec![
                ScheduleSlot {
                    hour: 6,
                    minute: 0,
                    period: Period::Morning,
                },
                ScheduleSlot {
                    hour: 18,
                    minute: 0,
                    period: Period::Evening,
                },
            ],
        }
    }
}
