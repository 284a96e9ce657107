use crate::core::validator::validate_record;
use crate::errors::{AppError, AppResult};
use crate::models::{DailyRecord, Moment};
use crate::store::{MomentStore, RecordStore};
use tracing::{debug, info};

/// Records clock punches into daily records.
pub struct PunchRecorder<'a> {
    moments: &'a dyn MomentStore,
    records: &'a dyn RecordStore,
}

impl<'a> PunchRecorder<'a> {
    pub fn new(moments: &'a dyn MomentStore, records: &'a dyn RecordStore) -> Self {
        Self { moments, records }
    }

    /// Register one punch and return the updated record of its day.
    ///
    /// The raw moment is saved before the record is validated and is not
    /// removed if the punch is then rejected.
    pub fn record(&self, moment: Option<&Moment>) -> AppResult<DailyRecord> {
        info!("recording punch");

        // 1️⃣ input checks
        let moment = moment
            .ok_or_else(|| AppError::InvalidInput("required field not provided".into()))?;
        let at = moment.parse()?;

        // 2️⃣ audit trail
        let saved = self.moments.save_moment(moment)?;
        debug!(id = ?saved.id, timestamp = ?saved.timestamp, "moment saved");

        // 3️⃣ find or create the day
        let day = at.date();
        let time = at.time();

        let record = match self.records.find_by_date(day)? {
            Some(mut existing) => {
                existing.push(time);
                debug!(?existing, "punch appended to existing record");
                existing
            }
            None => {
                let created = DailyRecord::first_punch(day, time);
                debug!(?created, "new record created");
                created
            }
        };

        // 4️⃣ validate, then persist
        validate_record(&record)?;
        let stored = self.records.save_record(&record)?;

        info!(day = %stored.day, entries = stored.entries.len(), "punch recorded");
        Ok(stored)
    }
}
