//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State structs are plain data with pure transition methods. Views wrap
//! them in `RwSignal`s, so every transition is testable without a browser.

pub mod appeal;
pub mod dialog;
pub mod evaluation;
pub mod processing;
