mod state;
mod timer;

pub use state::{EngineFactory, RunState, Session};
pub use timer::StepTimer;
