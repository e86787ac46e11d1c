use derive_more::{Display, From};

/// Root error type for the engine.
///
/// Failures in this subsystem are local and non-fatal; these exist so the
/// layers can report precisely what went wrong at their boundaries.
#[derive(Debug, Clone, Display, From)]
pub enum EngineError {
    #[display(fmt = "domain error: {}", _0)]
    Domain(DomainError),
    #[display(fmt = "application error: {}", _0)]
    Application(ApplicationError),
    #[display(fmt = "infrastructure error: {}", _0)]
    Infrastructure(InfrastructureError),
    #[display(fmt = "presentation error: {}", _0)]
    Presentation(PresentationError),
}

/// Domain layer errors
#[derive(Debug, Clone, Display)]
pub enum DomainError {
    #[display(fmt = "invalid candle: {}", _0)]
    InvalidCandle(String),
    #[display(fmt = "invalid symbol: {}", _0)]
    InvalidSymbol(String),
    #[display(fmt = "invalid tool: {}", _0)]
    InvalidTool(String),
}

/// Application layer errors
#[derive(Debug, Clone, Display)]
pub enum ApplicationError {
    #[display(fmt = "no active chart session")]
    NoActiveSession,
    #[display(fmt = "session already started for {}", _0)]
    SessionAlreadyStarted(String),
}

/// Infrastructure layer errors
#[derive(Debug, Clone, Display)]
pub enum InfrastructureError {
    #[display(fmt = "feed connection failed: {}", _0)]
    FeedConnection(String),
    #[display(fmt = "feed payload unusable: {}", _0)]
    FeedPayload(String),
    #[display(fmt = "rendering failed: {}", _0)]
    Rendering(String),
}

/// Presentation layer errors
#[derive(Debug, Clone, Display)]
pub enum PresentationError {
    #[display(fmt = "canvas '{}' not found", _0)]
    CanvasNotFound(String),
    #[display(fmt = "element is not a canvas: {}", _0)]
    NotACanvas(String),
    #[display(fmt = "invalid dimensions {}x{}", _0, _1)]
    InvalidDimensions(u32, u32),
}
