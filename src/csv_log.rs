//! Appending readings to a dated CSV file.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};

use crate::types::Reading;

/// Header row written to a new log file.
pub const HEADER: &str = "date,PM10,PM2_5";

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// CSV log whose file name may contain `{year}`, `{month}` and `{day}`.
///
/// `"pm-{year}-{month}.csv"` starts a new file every month,
/// `"pm.csv"` keeps everything in one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvLog {
    template: String,
}

impl CsvLog {
    pub fn new(template: impl Into<String>) -> Self {
        CsvLog {
            template: template.into(),
        }
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// File name for readings taken on `date`.
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        PathBuf::from(self.expand(date))
    }

    fn expand(&self, date: NaiveDate) -> String {
        self.template
            .replace("{year}", &format!("{:04}", date.year()))
            .replace("{month}", &format!("{:02}", date.month()))
            .replace("{day}", &format!("{:02}", date.day()))
    }

    /// Appends one row, writing the header first if the file is new or empty.
    ///
    /// Returns the path of the file written to.
    pub fn append(&self, timestamp: NaiveDateTime, reading: &Reading) -> io::Result<PathBuf> {
        let name = self.expand(timestamp.date());
        let mut file = OpenOptions::new().create(true).append(true).open(&name)?;

        let mut out = String::new();
        if file.metadata()?.len() == 0 {
            info!("starting csv log {}", name.as_str());
            out.push_str(HEADER);
            out.push('\n');
        }
        out.push_str(&format_row(timestamp, reading));
        out.push('\n');
        file.write_all(out.as_bytes())?;

        Ok(PathBuf::from(name))
    }

    /// Appends one row stamped with the local time.
    pub fn append_now(&self, reading: &Reading) -> io::Result<PathBuf> {
        self.append(Local::now().naive_local(), reading)
    }
}

/// Renders a reading as `date,PM10,PM2_5` without a line terminator.
pub fn format_row(timestamp: NaiveDateTime, reading: &Reading) -> String {
    format!(
        "{},{:.1},{:.1}",
        timestamp.format(DATE_FORMAT),
        reading.pm10,
        reading.pm2_5
    )
}
