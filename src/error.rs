use thiserror::Error;

/// Everything that can go wrong while building a poster.
///
/// Geometry itself never fails once a transform exists; the variants below are
/// configuration problems caught up front, plus the I/O edges of the crate.
#[derive(Debug, Error)]
pub enum CalendarError {
    #[error("reference range is degenerate: end {end} must be after start {start}")]
    DegenerateReferenceRange { start: String, end: String },

    #[error("band cycle must be a positive finite number, got {0}")]
    InvalidCycle(f64),

    #[error("display range is empty or inverted: {start} .. {end}")]
    InvertedDisplayRange { start: String, end: String },

    #[error("latitude must lie within [-90, 90] degrees, got {0}")]
    InvalidLatitude(f64),

    #[error("{name} must be a finite number, got {value}")]
    NonFiniteDimension { name: &'static str, value: f64 },

    #[error("page size must be positive, got {width} x {height} inches")]
    InvalidPage { width: f64, height: f64 },

    #[error("invalid color `{0}` (expected #rgb or #rrggbb)")]
    InvalidColor(String),

    #[error("failed to serialize SVG: {0}")]
    Serialize(String),

    #[error("failed to render PNG: {0}")]
    Render(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("failed to initialize logging: {0}")]
    Logging(#[from] flexi_logger::FlexiLoggerError),
}

pub type Result<T> = std::result::Result<T, CalendarError>;
