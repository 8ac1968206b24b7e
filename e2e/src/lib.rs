//! Helpers shared by the end-to-end cucumber suite. The scenarios themselves live under `tests/`.
pub mod helpers;
