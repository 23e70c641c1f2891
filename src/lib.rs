// Engine boundary - the simulation collaborator and its default implementation
pub mod engine;

// Application layer - session state, run control, frame pacing
pub mod session;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use engine::{Cell, Engine, Universe};
pub use session::{RunState, Session, StepTimer};
pub use ui::{Button, Checkbox, Dropdown};
