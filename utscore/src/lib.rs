//! utscore — shared library for the Proyek UTS desktop apps

pub mod logging;
pub mod storage;
pub mod theme;

pub use theme::UtsTheme;
