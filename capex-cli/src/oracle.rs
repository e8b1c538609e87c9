//! Factor-oracle boundary: consumes an externally produced payload file.

use std::path::PathBuf;

use capex_core::errors::{CapexResult, OracleError};
use capex_core::models::{ComparableSet, FactorEstimate, ProjectRequest};
use capex_core::traits::IFactorOracle;

/// Reads the factor payload the external estimator wrote to disk and holds
/// it to the oracle contract. The reasoning itself stays outside this
/// repository.
pub struct JsonFileOracle {
    path: PathBuf,
}

impl JsonFileOracle {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl IFactorOracle for JsonFileOracle {
    fn infer_factors(
        &self,
        _request: &ProjectRequest,
        _comparables: &ComparableSet,
    ) -> CapexResult<FactorEstimate> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| OracleError::CallFailed {
            reason: format!("{}: {e}", self.path.display()),
        })?;
        Ok(FactorEstimate::from_json(&content)?)
    }
}
