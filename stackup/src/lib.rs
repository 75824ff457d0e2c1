//! stackup - environment provisioning for the live chat sentiment stack.
//!
//! The core is the [`Sequencer`]: a fixed, ordered list of environment
//! readiness checks and setup actions that halts on the first failure of a
//! required step and finishes by handing control to the dashboard
//! application. Everything the dashboard itself does (sentiment scoring,
//! Kafka plumbing, the web UI) lives outside this crate; we only get the
//! host ready and launch it.
//!
//! ## Architecture
//!
//! ```text
//! Sequencer (fail-fast): checks ──→ deps install ──→ corpus
//! then:                  compose up ──→ readiness ──→ banner ──→ launch
//! ```

pub mod checks;
pub mod compose;
pub mod console;
pub mod constants;
pub mod errors;
pub mod options;
pub mod plan;
pub mod readiness;
pub mod sequencer;
pub mod step;

pub use errors::{ProvisionError, ProvisionResult};
pub use options::SequencerOptions;
pub use sequencer::Sequencer;
pub use step::{Step, StepKind, StepReport};
