use chrono::{DateTime, Datelike, Duration, Local, NaiveDate};

use crate::ledger::{Entry, EntryKind};

/// Bucketing resolution for the chart view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartMode {
    /// Seven buckets, one per calendar day, ending on the reference day.
    Weekly,
    /// Six buckets, one per calendar month, ending on the reference month.
    Monthly,
}

impl ChartMode {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "weekly" => Some(ChartMode::Weekly),
            "monthly" => Some(ChartMode::Monthly),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ChartMode::Weekly => "weekly",
            ChartMode::Monthly => "monthly",
        }
    }

    pub fn bucket_count(self) -> usize {
        match self {
            ChartMode::Weekly => 7,
            ChartMode::Monthly => 6,
        }
    }
}

/// One fixed time window with aggregated income/expense totals.
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket {
    pub label: String,
    pub income: f64,
    pub expense: f64,
}

impl Bucket {
    fn labeled(label: String) -> Self {
        Self {
            label,
            income: 0.0,
            expense: 0.0,
        }
    }

    fn tally(&mut self, entry: &Entry) {
        match entry.kind {
            EntryKind::Income => self.income += entry.amount,
            EntryKind::Expense => self.expense += entry.amount,
        }
    }
}

/// Derives the chart series from the entry sequence: exactly 7 daily or 6
/// monthly buckets, oldest first, with empty buckets reported as 0/0.
///
/// Bucket membership uses local calendar boundaries; entry timestamps are
/// stored UTC and converted here. Pure function of its inputs.
pub fn bucketize(entries: &[Entry], mode: ChartMode, reference: DateTime<Local>) -> Vec<Bucket> {
    let today = reference.date_naive();
    match mode {
        ChartMode::Weekly => daily_buckets(entries, today),
        ChartMode::Monthly => monthly_buckets(entries, today),
    }
}

fn daily_buckets(entries: &[Entry], today: NaiveDate) -> Vec<Bucket> {
    (0..7i64)
        .rev()
        .map(|back| {
            let day = today - Duration::days(back);
            let mut bucket = Bucket::labeled(day.format("%d/%m").to_string());
            for entry in entries {
                if local_day(entry) == day {
                    bucket.tally(entry);
                }
            }
            bucket
        })
        .collect()
}

fn monthly_buckets(entries: &[Entry], today: NaiveDate) -> Vec<Bucket> {
    (0..6i32)
        .rev()
        .map(|back| {
            let (year, month) = shift_month(today.year(), today.month(), -back);
            let mut bucket = Bucket::labeled(month_label(year, month));
            for entry in entries {
                let day = local_day(entry);
                if day.year() == year && day.month() == month {
                    bucket.tally(entry);
                }
            }
            bucket
        })
        .collect()
}

fn local_day(entry: &Entry) -> NaiveDate {
    entry.date.with_timezone(&Local).date_naive()
}

fn shift_month(year: i32, month: u32, months: i32) -> (i32, u32) {
    let mut year = year;
    let mut month = month as i32 + months;
    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }
    (year, month as u32)
}

fn month_label(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|date| date.format("%b").to_string())
        .unwrap_or_default()
}
