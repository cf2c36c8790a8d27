use std::{error, fmt};

/// Unified error type
///
/// Only the loading surfaces (scene files and YAML configuration) can fail.
/// Classification, bone mapping, LOD grouping and clip normalization always
/// fall back to a defined result instead of returning an error.
///
/// Some foreign error types are very large so are boxed.
#[derive(Debug)]
pub enum PrepError {
    InvalidFile,
    UnsupportedFormat,
    EmptyScene,
    SerdeYamlError(Box<serde_yaml::Error>),
    StdIoError(std::io::Error),
    TObjLoadError(tobj::LoadError),
    GltfError(Box<gltf::Error>),
}

impl error::Error for PrepError {}

impl fmt::Display for PrepError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidFile => write!(f, "invalid file"),
            Self::UnsupportedFormat => write!(f, "format is not supported"),
            Self::EmptyScene => write!(f, "scene contains no nodes"),
            Self::SerdeYamlError(e) => {
                write!(f, "serde_yaml::Error: {e}")
            }
            Self::StdIoError(e) => write!(f, "std::io::Error: {}", e.kind()),
            Self::TObjLoadError(e) => write!(f, "tobj crate LoadError: {e}"),
            Self::GltfError(e) => {
                write!(f, "gltf Error: {e}")
            }
        }
    }
}

impl From<serde_yaml::Error> for PrepError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::SerdeYamlError(Box::new(e))
    }
}

impl From<std::io::Error> for PrepError {
    fn from(e: std::io::Error) -> Self {
        Self::StdIoError(e)
    }
}

impl From<tobj::LoadError> for PrepError {
    fn from(e: tobj::LoadError) -> Self {
        Self::TObjLoadError(e)
    }
}

impl From<gltf::Error> for PrepError {
    fn from(e: gltf::Error) -> Self {
        Self::GltfError(Box::new(e))
    }
}
