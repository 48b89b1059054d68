use miette::Diagnostic;
use thiserror::Error;

/// Errors reported by validated draw calls.
///
/// Every variant maps to a stable numeric code (see [`DrawError::code`]) that
/// callers may echo back over their own transport.
#[derive(Error, Diagnostic, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawError {
    #[error("width must be greater than zero")]
    #[diagnostic(code(vgadraw::draw::width), help("rectangles need at least one column"))]
    WidthInvalid,

    #[error("height must be greater than zero")]
    #[diagnostic(code(vgadraw::draw::height), help("rectangles need at least one row"))]
    HeightInvalid,

    #[error("shape extends beyond the surface bounds")]
    #[diagnostic(
        code(vgadraw::draw::bounds),
        help("keep every painted pixel, including the brush, inside the surface")
    )]
    OutOfBounds,

    #[error("color is not a recognized palette value")]
    #[diagnostic(code(vgadraw::draw::color), help("run `vgadraw palette` to list valid colors"))]
    ColorInvalid,

    #[error("weight must not be negative")]
    #[diagnostic(code(vgadraw::draw::weight))]
    WeightInvalid,

    #[error("bitmap does not exist")]
    #[diagnostic(code(vgadraw::draw::bitmap), help("check the ids in the bitmap file"))]
    BitmapInvalid,

    #[error("radius must not be negative")]
    #[diagnostic(code(vgadraw::draw::radius))]
    RadiusInvalid,

    #[error("polygon needs at least 3 vertices")]
    #[diagnostic(code(vgadraw::draw::vertices))]
    VerticesInvalid,
}

impl DrawError {
    /// Numeric error code.
    pub const fn code(self) -> u16 {
        match self {
            DrawError::WidthInvalid => 601,
            DrawError::HeightInvalid => 602,
            DrawError::OutOfBounds => 603,
            DrawError::ColorInvalid => 604,
            DrawError::WeightInvalid => 605,
            DrawError::BitmapInvalid => 606,
            DrawError::RadiusInvalid => 607,
            DrawError::VerticesInvalid => 608,
        }
    }
}

/// Main error type for host-side operations (config, files, rendering).
#[derive(Error, Diagnostic, Debug)]
pub enum VgaError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Draw(#[from] DrawError),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(vgadraw::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(vgadraw::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Render error: {message}")]
    #[diagnostic(code(vgadraw::render))]
    Render {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, VgaError>;
