// ---------------------------------------------------------------------------
// ParamsError: errors raised while loading or validating world parameters
// ---------------------------------------------------------------------------

use std::fmt;

/// Errors that can occur while loading or validating [`crate::params::WorldParams`].
#[derive(Debug)]
pub enum ParamsError {
    /// The parameter file could not be read.
    Io(std::io::Error),
    /// The parameter file is not valid JSON for `WorldParams`.
    Parse(String),
    /// The region threshold table is empty or not strictly ascending.
    UnorderedRegions(String),
    /// A field that must be strictly positive is zero or negative.
    NonPositive { field: &'static str, value: f32 },
    /// A `(min, max)` pair is empty or inverted.
    InvalidRange { field: &'static str, min: f32, max: f32 },
    /// The terrain window would need more cells per side than the sampler
    /// walks.
    WindowTooLarge { cells_per_side: f32, max: usize },
    /// The movement divisor does not match the sampling density, which would
    /// make carried bouncers slide across the terrain.
    OffsetScaleMismatch { density: f32, divisor: f32 },
}

impl fmt::Display for ParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamsError::Io(e) => write!(f, "I/O error: {e}"),
            ParamsError::Parse(msg) => write!(f, "Parse error: {msg}"),
            ParamsError::UnorderedRegions(msg) => write!(f, "Invalid region table: {msg}"),
            ParamsError::NonPositive { field, value } => {
                write!(f, "{field} must be positive, got {value}")
            }
            ParamsError::InvalidRange { field, min, max } => {
                write!(f, "{field} range is empty: [{min}, {max})")
            }
            ParamsError::WindowTooLarge {
                cells_per_side,
                max,
            } => write!(
                f,
                "terrain window needs {cells_per_side} cells per side, at most {max} allowed"
            ),
            ParamsError::OffsetScaleMismatch { density, divisor } => write!(
                f,
                "offset divisor {divisor} is not the reciprocal of sampling density {density}"
            ),
        }
    }
}

impl std::error::Error for ParamsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParamsError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ParamsError {
    fn from(e: std::io::Error) -> Self {
        ParamsError::Io(e)
    }
}

impl From<serde_json::Error> for ParamsError {
    fn from(e: serde_json::Error) -> Self {
        ParamsError::Parse(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_io() {
        let err = ParamsError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing.json",
        ));
        let msg = format!("{err}");
        assert!(msg.contains("I/O error"), "got: {msg}");
        assert!(msg.contains("missing.json"), "got: {msg}");
    }

    #[test]
    fn test_display_offset_mismatch() {
        let err = ParamsError::OffsetScaleMismatch {
            density: 0.0625,
            divisor: 40.0,
        };
        let msg = format!("{err}");
        assert!(msg.contains("40"), "got: {msg}");
        assert!(msg.contains("0.0625"), "got: {msg}");
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: ParamsError = json_err.into();
        assert!(matches!(err, ParamsError::Parse(_)));
    }

    #[test]
    fn test_io_has_source() {
        use std::error::Error;
        let err: ParamsError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert!(err.source().is_some());
        assert!(ParamsError::Parse("x".into()).source().is_none());
    }
}
