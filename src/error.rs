use std::process::ExitCode;

use jsloc_engine::EngineError;
use jsloc_shared_kernel::{DomainError, JslocError, PresentationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Jsloc(#[from] JslocError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<PresentationError> for AppError {
    fn from(err: PresentationError) -> Self {
        Self::Jsloc(err.into())
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        Self::Jsloc(err.into())
    }
}

impl AppError {
    /// 使い方の誤り (パス・値の指定ミス) か
    pub fn is_usage(&self) -> bool {
        fn presentation(err: &JslocError) -> bool {
            match err {
                JslocError::Presentation(_) => true,
                JslocError::Context { source, .. } => presentation(source),
                _ => false,
            }
        }
        matches!(self, Self::Jsloc(err) if presentation(err))
    }

    /// 使い方の誤りは 2、それ以外は 1
    pub fn exit_code(&self) -> ExitCode {
        if self.is_usage() { ExitCode::from(2) } else { ExitCode::FAILURE }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use jsloc_shared_kernel::ErrorContext;
    use std::path::PathBuf;

    #[test]
    fn presentation_errors_are_usage_errors() {
        let err = AppError::from(PresentationError::InvalidTarget { path: PathBuf::from("nowhere") });
        assert!(err.is_usage());
        assert_eq!(err.to_string(), "Presentation error: Incorrect path: nowhere");
    }

    #[test]
    fn context_keeps_usage_classification() {
        let result: std::result::Result<(), PresentationError> =
            Err(PresentationError::UnsupportedFile { path: PathBuf::from("a.ts") });
        let err = AppError::from(result.context("resolving target").unwrap_err());
        assert!(err.is_usage());
    }

    #[test]
    fn rule_errors_are_not_usage_errors() {
        let err = AppError::from(DomainError::InvalidRuleSet { reason: "bad".into() });
        assert!(!err.is_usage());
    }
}
