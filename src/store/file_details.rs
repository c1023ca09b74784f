use std::path::PathBuf;

use chrono::NaiveDate;
use derive_getters::Getters;

/// The members file a store was loaded from or last saved to.
#[derive(Debug, Getters, Clone, PartialEq, Eq)]
pub struct FileDetails {
    date: NaiveDate,
    path: PathBuf,
}

impl FileDetails {
    pub fn new(date: NaiveDate, path: PathBuf) -> Self {
        Self { date, path }
    }
}
