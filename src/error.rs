//! Defines custom error types for the application.

use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

#[derive(Error, Debug)]
/// Error type returned when stripping a file fails.
pub enum StripError {
    #[error("Failed to read input file: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Input file is not valid UTF-8: {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },

    #[error("Failed to write output file: {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
