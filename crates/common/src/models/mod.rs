pub mod signal;

pub use signal::{DispatchResult, RenderedMessage, SignalRequest, SignalType};
