// Domain models: baby profiles, feeding records, reminder settings

mod baby;
mod feeding;
mod reminder;
mod validation;

pub use baby::{Baby, BabyPatch, DEFAULT_AVATAR_COLOR, MAX_NAME_LEN, NewBaby};
pub use feeding::{
    FeedingRecord, FeedingRecordPatch, FeedingSide, MAX_AMOUNT_ML, MAX_NOTE_LEN, MIN_AMOUNT_ML,
    NewFeedingRecord,
};
pub use reminder::{
    MAX_REMINDER_INTERVAL_HOURS, MIN_REMINDER_INTERVAL_HOURS, ReminderSettings,
};
pub use validation::ValidationError;
