use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// A loaded document and the name diagnostics refer to it by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub name: String,
    pub text: String,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("input is required: use a positional argument, - for stdin, or -q/--query")]
    Missing,

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{}': {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub fn load_source(path: Option<&Path>, text: Option<&str>) -> Result<Source, LoadError> {
    if let Some(text) = text {
        return Ok(Source {
            name: "<query>".to_string(),
            text: text.to_string(),
        });
    }

    match path {
        Some(path) if path.as_os_str() == "-" => load_stdin(),
        Some(path) => load_file(path),
        None => Err(LoadError::Missing),
    }
}

fn load_stdin() -> Result<Source, LoadError> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(LoadError::Stdin)?;
    Ok(Source {
        name: "<stdin>".to_string(),
        text: buf,
    })
}

fn load_file(path: &Path) -> Result<Source, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::File {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), len = text.len(), "loaded input");
    Ok(Source {
        name: path.to_string_lossy().into_owned(),
        text,
    })
}

/// Loads the input or exits with status 1.
pub fn load_or_exit(path: Option<&Path>, text: Option<&str>) -> Source {
    match load_source(path, text) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
    }
}
