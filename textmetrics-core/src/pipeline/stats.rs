//! Statistics and BatchStats.

use crate::pipeline::batch::BatchReport;

/// A snapshot of batch outcome counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchStats {
    /// Documents submitted.
    pub documents: usize,
    /// Records produced.
    pub records: usize,
    /// Documents skipped.
    pub failed: usize,
}

impl BatchStats {
    /// Counts the outcome of a finished batch.
    pub fn from_report(report: &BatchReport) -> Self {
        Self {
            documents: report.records.len() + report.failed.len(),
            records: report.records.len(),
            failed: report.failed.len(),
        }
    }

    /// Fraction of submitted documents that were skipped.
    pub fn failure_ratio(&self) -> f64 {
        if self.documents == 0 {
            0.0
        } else {
            self.failed as f64 / self.documents as f64
        }
    }
}

impl core::fmt::Display for BatchStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} docs, {} records, {} skipped",
            self.documents, self.records, self.failed
        )?;

        if self.failed > 0 {
            write!(f, " ({:.1}%)", self.failure_ratio() * 100.0)?;
        }

        Ok(())
    }
}
