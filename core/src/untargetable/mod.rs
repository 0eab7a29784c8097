//! Untargetable windows
//!
//! Tracks how many hostile units can currently be selected. Whenever that
//! count drops to zero the encounter target is untargetable until a unit
//! becomes selectable again. Targetability toggles and lethal damage are both
//! noisy, so each run of same-direction changes on a unit is reduced to one
//! representative change before replay.

mod computer;
mod counter;


pub use computer::UntargetableWindowComputer;
pub use counter::{SelectableCounter, Transition};
