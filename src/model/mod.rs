//! Model layer - the behavioral core
//!
//! Everything in here is independent of the terminal:
//! - `catalog` - the fixed, validated set of join examples
//! - `sequencer` - the five-step animation state machine
//! - `session` - cursor + sequencer behind the command/query surface

pub mod catalog;
pub mod sequencer;
pub mod session;

// Re-export commonly used types
pub use catalog::{Catalog, CellValue, ExampleRecord, Row, Table};
pub use sequencer::{Phase, Sequencer, MAX_STEP, TICK_PERIOD};
pub use session::Session;
