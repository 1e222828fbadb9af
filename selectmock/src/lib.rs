mod dto;
mod error;
mod random;
mod responder;
mod timer;

pub use dto::{SelectOption, SelectResponse, select_response};
pub use error::{Error, Result};
pub use random::{FixedRandom, RandomSource, SeededRandom, ThreadRandom};
pub use responder::{
    DEFAULT_DELAY, FAILURE_RATE, INTERFACE_ERROR, MockResponder, MockResponderBuilder,
    SUCCESS_THRESHOLD,
};
pub use timer::{NoDelayTimer, Timer, TokioTimer};
