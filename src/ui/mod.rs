//! UI module - reusable rendering components
//!
//! Custom-painted widgets shared by the control panel and the serial
//! settings dialog.

pub mod components;
