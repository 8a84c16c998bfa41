pub mod assembly;
pub mod error;
pub mod service;

pub use error::PredictionError;
pub use service::PredictionService;
