use chrono::{DateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use xdigest_common::Period;

use crate::{Config, PipelineError, PipelineResult};

/// Fixed wall-clock triggers in a named time zone
#[derive(Debug, Clone)]
pub struct Schedule {
    timezone: Tz,
    slots: Vec<(NaiveTime, Period)>,
}

impl Schedule {
    pub fn new(config: &Config) -> PipelineResult<Self> {
        let slots = config
            .slots
            .iter()
            .map(|slot| {
                NaiveTime::from_hms_opt(slot.hour, slot.minute, 0)
                    .map(|time| (time, slot.period))
                    .ok_or(PipelineError::InvalidSchedule {
                        hour: slot.hour,
                        minute: slot.minute,
                    })
            })
            .collect::<PipelineResult<Vec<_>>>()?;

        Ok(Self {
            timezone: config.timezone,
            slots,
        })
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// First trigger strictly after `now`. Triggers in the past are never returned,
    /// so a tick missed while the process was down is skipped.
    pub fn next_after(&self, now: DateTime<Utc>) -> Option<(DateTime<Tz>, Period)> {
        let today = now.with_timezone(&self.timezone).date_naive();

        today
            .iter_days()
            .take(3)
            .flat_map(|day| {
                self.slots.iter().filter_map(move |(time, period)| {
                    // a local time skipped by a DST jump has no instant on that day
                    self.timezone
                        .from_local_datetime(&day.and_time(*time))
                        .earliest()
                        .map(|at| (at, *period))
                })
            })
            .filter(|(at, _)| *at > now)
            .min_by_key(|(at, _)| *at)
    }
}
