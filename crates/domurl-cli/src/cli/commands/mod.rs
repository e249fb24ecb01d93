//! CLI command handlers, one file per command.

mod codec;
mod completions;
mod edit;
mod man;
mod normalize;
mod parse;

pub use codec::{run_decode, run_encode};
pub use completions::run_completions;
pub use edit::{run_edit, QueryEdits};
pub use man::run_man;
pub use normalize::run_normalize;
pub use parse::run_parse;
