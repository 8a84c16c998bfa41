pub mod encoder;
pub mod error;
pub mod regressor;
pub mod store;

pub use encoder::OneHotEncoder;
pub use error::ArtifactLoadError;
pub use regressor::Regressor;
pub use store::{ArtifactPaths, ArtifactStore};
