pub mod error;
pub mod estimator;
pub mod event;
pub mod state;

pub use error::{BetteryError, Result, SamplerError};
pub use estimator::{Reading, RuntimeEstimator, RuntimeHistory};
pub use event::Message;
pub use state::{AppState, PowerSnapshot, Remaining};
