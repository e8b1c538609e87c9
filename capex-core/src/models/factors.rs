use serde::{Deserialize, Serialize};

use crate::errors::OracleError;

/// Multiplicative adjustment factors supplied by the factor oracle.
///
/// The boundary contract is strict: unknown fields are rejected, not
/// ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScalingFactors {
    pub capacity_scale_factor: f64,
    pub regional_index_factor: f64,
    /// Cumulative inflation multiplier. The oracle's value is not assumed
    /// reliable: absent or non-positive values are replaced by a derivation
    /// from the base comparable's execution year at scaling time.
    #[serde(default)]
    pub inflation_factor: Option<f64>,
    pub complexity_modifier: f64,
}

impl ScalingFactors {
    /// The inflation value usable as-is, if the oracle supplied one.
    pub fn supplied_inflation(&self) -> Option<f64> {
        self.inflation_factor.filter(|v| *v > 0.0)
    }
}

/// Soft-cost percentages applied to the scaled WBS subtotal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SoftCosts {
    pub engineering_pct: f64,
    pub contingency_pct: f64,
}

/// Full payload returned across the factor-oracle boundary: factors,
/// soft costs, and the oracle's ordered free-text rationale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FactorEstimate {
    pub scaling_factors: ScalingFactors,
    pub soft_costs: SoftCosts,
    #[serde(default)]
    pub rationale: Vec<String>,
}

impl FactorEstimate {
    /// Parse and validate an oracle payload from JSON.
    ///
    /// Structural problems (missing fields, non-numeric values) surface as
    /// [`OracleError::MalformedPayload`] with the serde reason naming the
    /// field; value-level violations surface as [`OracleError::InvalidValue`].
    pub fn from_json(input: &str) -> Result<Self, OracleError> {
        let estimate: Self =
            serde_json::from_str(input).map_err(|e| OracleError::MalformedPayload {
                reason: e.to_string(),
            })?;
        estimate.validate()?;
        Ok(estimate)
    }

    /// Strict value-level validation of the oracle contract.
    ///
    /// Out-of-range but well-formed values (e.g. a complexity modifier beyond
    /// the expected band) pass here; judging those is the reviewer's job.
    pub fn validate(&self) -> Result<(), OracleError> {
        let sf = &self.scaling_factors;
        require_positive("scaling_factors.capacity_scale_factor", sf.capacity_scale_factor)?;
        require_positive("scaling_factors.regional_index_factor", sf.regional_index_factor)?;
        require_positive("scaling_factors.complexity_modifier", sf.complexity_modifier)?;
        if let Some(inflation) = sf.inflation_factor {
            if !inflation.is_finite() {
                return Err(OracleError::InvalidValue {
                    field: "scaling_factors.inflation_factor".to_string(),
                    value: inflation,
                    reason: "must be finite".to_string(),
                });
            }
        }
        require_fraction("soft_costs.engineering_pct", self.soft_costs.engineering_pct)?;
        require_fraction("soft_costs.contingency_pct", self.soft_costs.contingency_pct)?;
        Ok(())
    }
}

fn require_positive(field: &str, value: f64) -> Result<(), OracleError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(OracleError::InvalidValue {
            field: field.to_string(),
            value,
            reason: "must be a positive finite number".to_string(),
        });
    }
    Ok(())
}

fn require_fraction(field: &str, value: f64) -> Result<(), OracleError> {
    if !value.is_finite() || value < 0.0 {
        return Err(OracleError::InvalidValue {
            field: field.to_string(),
            value,
            reason: "must be a non-negative finite number".to_string(),
        });
    }
    Ok(())
}
