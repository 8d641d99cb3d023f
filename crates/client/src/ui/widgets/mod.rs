//! Widgets for the exploration screen.
//!
//! Each widget is a pure function over session state that draws into one
//! area of the frame.
pub mod dialog;
pub mod footer;
pub mod hud;
pub mod map;
pub mod menu;
pub mod messages;
