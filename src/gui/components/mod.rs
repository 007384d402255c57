// src/gui/components/mod.rs
pub mod range_panel;
pub mod result_panel;
