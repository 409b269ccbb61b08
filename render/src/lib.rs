//! Pure computation behind a bounded terminal result view.
//!
//! Given the result of a tool or command invocation — plain text, a unified
//! diff, a todo marker, or a pre-styled buffer of terminal output — this
//! crate decides what subset of the content is shown in a fixed-size
//! viewport and with which downstream renderer. Everything here is a
//! deterministic function of its inputs: no I/O, no host queries, no state
//! carried between renders beyond the optional [`cache::RenderCache`]
//! recomputation guard.
#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod cache;
pub mod dispatch;
pub mod line_utils;
pub mod linkify;
pub mod truncation;
pub mod window;

pub use cache::RenderCache;
pub use dispatch::RenderInstruction;
pub use dispatch::ResultPayload;
pub use dispatch::dispatch;
pub use linkify::Segment;
pub use linkify::segment;
pub use truncation::LayoutBudget;
pub use truncation::MAX_RESULT_CHARS;
pub use truncation::RowReservations;
pub use truncation::effective_height;
pub use truncation::estimate_rows;
pub use truncation::truncate_result;
pub use window::DEFAULT_WINDOW_ROWS;
pub use window::StyledDocument;
pub use window::window_trailing;
