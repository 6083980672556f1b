//! Concrete backends.
//!
//! - [`line`]: a line-oriented writer; fields become a `[k=v]` suffix
//! - [`logkv`]: the `log` crate, with fields as native key/values
//! - [`tracer`]: `tracing` events, implementing the contract directly

pub mod line;
pub mod logkv;
pub mod tracer;

pub use line::{LineBackend, LineLogger, LineMapper};
pub use logkv::{GlobalLog, LogKvBackend, LogKvMapper};
pub use tracer::TracingBackend;
