//! Flop Counting UseCase

use crate::config::FlopCountConfig;
use crate::errors::Result;
use crate::features::cost_analysis::domain::FlopReport;
use crate::features::cost_analysis::infrastructure::{count_flop, FlopAnalyzer};
use crate::shared::models::Expr;

/// Flop Counting UseCase Trait
pub trait FlopCountUseCase: Send + Sync {
    /// Total flops of `roots`, each distinct subexpression counted once
    fn count(&self, roots: &[Expr]) -> Result<u64>;

    /// Detailed report shaped by the use case's configuration
    fn report(&self, roots: &[Expr]) -> Result<FlopReport>;
}

/// Flop Counting UseCase Implementation
#[derive(Debug, Default)]
pub struct FlopCountUseCaseImpl {
    analyzer: FlopAnalyzer,
}

impl FlopCountUseCaseImpl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use case with a custom configuration; fails if it does not validate
    pub fn with_config(config: FlopCountConfig) -> Result<Self> {
        Ok(Self {
            analyzer: FlopAnalyzer::new(config)?,
        })
    }
}

impl FlopCountUseCase for FlopCountUseCaseImpl {
    fn count(&self, roots: &[Expr]) -> Result<u64> {
        count_flop(roots)
    }

    fn report(&self, roots: &[Expr]) -> Result<FlopReport> {
        self.analyzer.analyze(roots)
    }
}
