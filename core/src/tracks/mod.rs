//! Track packing
//!
//! Greedy first-fit assignment of cast markers to display tracks. A marker
//! moves to the next track while the current one ends too recently, up to a
//! fixed number of tracks. The last track accepts everything that overflows.

mod packer;


pub use packer::{PackedTrack, TrackPacker};
