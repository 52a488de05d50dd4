use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// A resource's text and the name it is reported under.
#[derive(Debug)]
pub struct LoadedSource {
    pub name: String,
    pub text: String,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("resource is required: use a positional FILE, `-` for stdin, or -t/--text")]
    Missing,

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{path}': {source}")]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub fn load_resource(path: Option<&Path>, text: Option<&str>) -> Result<LoadedSource, LoadError> {
    if let Some(text) = text {
        return Ok(LoadedSource {
            name: "<text>".to_string(),
            text: text.to_string(),
        });
    }

    match path {
        Some(path) if path.as_os_str() == "-" => load_stdin(),
        Some(path) => load_file(path),
        None => Err(LoadError::Missing),
    }
}

fn load_stdin() -> Result<LoadedSource, LoadError> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .map_err(LoadError::Stdin)?;
    Ok(LoadedSource {
        name: "<stdin>".to_string(),
        text,
    })
}

fn load_file(path: &Path) -> Result<LoadedSource, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::File {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(LoadedSource {
        name: path.display().to_string(),
        text,
    })
}
