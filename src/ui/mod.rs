/// User interface module
///
/// One screen is alive at a time, each with its own event type:
/// - Image browser (browse.rs)
/// - Summary / running / result screens (run.rs)
/// - Native dialogs (dialogs.rs)
/// - Raw keyboard and mouse mapping for the browser (input.rs)

pub mod browse;
pub mod dialogs;
pub mod input;
pub mod run;
