//! Platform-independent core of the portfolio site: theme persistence, menu
//! state, the hero typewriter, scroll reveals and the static page content.

pub mod config;
pub mod content;
pub mod menu;
pub mod reveal;
pub mod storage;
pub mod theme;
pub mod typewriter;
