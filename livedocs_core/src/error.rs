use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum LivedocsError {
	#[error(transparent)]
	#[diagnostic(code(livedocs::io_error))]
	Io(#[from] std::io::Error),
}

pub type LivedocsResult<T> = Result<T, LivedocsError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
