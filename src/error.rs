use std::{io, path::PathBuf};
use thiserror::Error;

/// Fatal failures of a generator run. All of them are I/O, nothing is retried.
#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot read header file {}: {source}", path.display())]
    ReadHeader {
        path: PathBuf,
        source: io::Error,
    },

    #[error("cannot create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: io::Error,
    },

    #[error("cannot write completion script {}: {source}", path.display())]
    WriteScript {
        path: PathBuf,
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
