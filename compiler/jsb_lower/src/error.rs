//! Errors raised by the bodiless-declaration lowering.

use jsb_ir::DeclId;

/// Fatal lowering error. Always indicates a front-end contract violation;
/// the compilation must stop.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LowerError {
    /// A declaration's externally-implemented flag disagrees with the flag
    /// of the top-level declaration whose subtree contains it.
    #[error("isExternal validation failed for declaration {rendered}")]
    ExternalityConsistencyViolation {
        decl: DeclId,
        /// One-line structural rendering of `decl`.
        rendered: String,
        /// Flag of the enclosing top-level declaration.
        expected: bool,
        /// Flag found on `decl`.
        found: bool,
    },
}

impl LowerError {
    /// Stable error code for diagnostics output.
    pub fn code(&self) -> &'static str {
        match self {
            LowerError::ExternalityConsistencyViolation { .. } => "E6001",
        }
    }
}
