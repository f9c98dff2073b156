//! 本地 UI 状态：正则表达式试验场。
//!
//! Local UI state holders. Each is a plain owned value handed by reference to
//! the component that edits it; there is no process-wide store.

pub mod playground;

pub use playground::{find_matches, FlagError, MatchSet, Playground, RegexFlags, RegexMatch};
