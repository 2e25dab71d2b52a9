//! Error types for plot parameters and PNG export.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for parameter validation.
pub type Result<T> = std::result::Result<T, ParamError>;

/// Rejected plot parameters or display options.
///
/// These never abort the application; the renderer shows them inline in the
/// plot area instead of a curve.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    /// The domain is empty or reversed.
    #[error("invalid domain: x min ({x_min}) must be less than x max ({x_max})")]
    InvalidDomain { x_min: f64, x_max: f64 },

    /// The sampling step is not a positive finite number.
    #[error("invalid step: Δx ({step}) must be positive")]
    InvalidStep { step: f64 },

    /// The step is too fine for the domain.
    #[error("step too fine: {count} samples exceed the limit of {max}")]
    TooManySamples { count: f64, max: usize },

    /// The point marker size is not positive.
    #[error("invalid point size: {size} must be positive")]
    InvalidPointSize { size: f32 },

    /// The Y clamp magnitude is not positive.
    #[error("invalid clamp limit: {limit} must be positive")]
    InvalidClampLimit { limit: f64 },
}

/// Failure while exporting a plot to PNG.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The requested image has no pixels.
    #[error("cannot export an empty {width}x{height} image")]
    EmptyImage { width: u32, height: u32 },

    /// Drawing into the bitmap failed.
    #[error("failed to draw {path}: {message}")]
    Draw { path: PathBuf, message: String },

    /// Encoding or writing the PNG failed.
    #[error("failed to write {path}: {message}")]
    Write { path: PathBuf, message: String },
}

impl ExportError {
    /// Create a Draw error from any displayable backend error.
    pub fn draw(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        Self::Draw {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// Create a Write error from any displayable backend error.
    pub fn write(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        Self::Write {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_error_keeps_underlying_text() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = ExportError::write("/tmp/out.png", io);
        let text = err.to_string();
        assert!(text.contains("/tmp/out.png"));
        assert!(text.contains("access denied"));
    }

    #[test]
    fn domain_error_names_both_bounds() {
        let err = ParamError::InvalidDomain {
            x_min: 1.0,
            x_max: 0.5,
        };
        assert_eq!(
            err.to_string(),
            "invalid domain: x min (1) must be less than x max (0.5)"
        );
    }
}
