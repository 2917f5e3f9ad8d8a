/*!
 * Input Validation
 * Terminal checks performed before any run state exists
 */

use crate::core::types::{Label, Size};
use crate::segmentation::SegmentRequest;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Simulation result; the only terminal failure is invalid input
pub type SimResult<T> = Result<T, InputError>;

/// Invalid run description
///
/// Surfaced before the run starts; no partial pool or trace is ever
/// produced for a rejected input.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum InputError {
    #[error("{field} must not be empty")]
    Empty { field: Label },

    #[error("{field} must contain only positive sizes")]
    NonPositive { field: Label },
}

/// A size list must be non-empty and strictly positive
pub(super) fn validate_sizes(field: &str, sizes: &[Size]) -> SimResult<()> {
    if sizes.is_empty() {
        return Err(InputError::Empty {
            field: field.into(),
        });
    }
    if sizes.iter().any(|&size| size == 0) {
        return Err(InputError::NonPositive {
            field: field.into(),
        });
    }
    Ok(())
}

/// A scalar parameter must be positive
pub(super) fn validate_scalar(field: &str, value: Size) -> SimResult<()> {
    if value == 0 {
        return Err(InputError::NonPositive {
            field: field.into(),
        });
    }
    Ok(())
}

/// Segment requests must be non-empty with strictly positive sizes
pub(super) fn validate_requests(field: &str, requests: &[SegmentRequest]) -> SimResult<()> {
    if requests.is_empty() {
        return Err(InputError::Empty {
            field: field.into(),
        });
    }
    if requests.iter().any(|request| request.size == 0) {
        return Err(InputError::NonPositive {
            field: field.into(),
        });
    }
    Ok(())
}
