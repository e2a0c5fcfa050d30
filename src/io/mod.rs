//! Boundaries to the data source, the factor source and the result sink.
//!
//! The pipeline only sees these traits; reading spreadsheets or rendering
//! tables lives in the implementations.

use crate::core::Dataset;
use crate::error::Result;
use crate::factors::FactorRecord;
use crate::pipeline::PipelineOutput;

/// Supplies aligned series and their time index.
pub trait ObservationSource {
    fn load(&self) -> Result<Dataset>;
}

/// Supplies adjustment factor records with kinds already resolved.
pub trait FactorSource {
    fn factors(&self) -> Result<Vec<FactorRecord>>;
}

/// Receives the computed results of a run.
pub trait ForecastSink {
    fn accept(&mut self, output: &PipelineOutput) -> Result<()>;
}

impl ObservationSource for Dataset {
    fn load(&self) -> Result<Dataset> {
        Ok(self.clone())
    }
}

impl FactorSource for [FactorRecord] {
    fn factors(&self) -> Result<Vec<FactorRecord>> {
        Ok(self.to_vec())
    }
}

impl FactorSource for Vec<FactorRecord> {
    fn factors(&self) -> Result<Vec<FactorRecord>> {
        Ok(self.clone())
    }
}

/// Factor source with no factors.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFactors;

impl FactorSource for NoFactors {
    fn factors(&self) -> Result<Vec<FactorRecord>> {
        Ok(Vec::new())
    }
}

/// Sink that keeps the most recent output in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    last: Option<PipelineOutput>,
    runs: usize,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output(&self) -> Option<&PipelineOutput> {
        self.last.as_ref()
    }

    /// Number of outputs accepted so far.
    pub fn runs(&self) -> usize {
        self.runs
    }
}

impl ForecastSink for MemorySink {
    fn accept(&mut self, output: &PipelineOutput) -> Result<()> {
        self.last = Some(output.clone());
        self.runs += 1;
        Ok(())
    }
}
