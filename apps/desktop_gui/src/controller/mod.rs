//! Controller layer: UI events forwarded from the roster client and command
//! dispatch towards the backend thread.

pub mod events;
pub mod orchestration;
