//! Timeline assembly and export
//!
//! Filters and renames cast markers, packs them onto tracks and builds the
//! combined marker document with the untargetable track in front.

mod assembler;
mod document;
mod pipeline;


pub use assembler::TimelineAssembler;
pub use document::{
    COMBINED_FILE_TYPE, MarkerEntry, TRACK_FILE_TYPE, TimelineDocument, TrackDocument,
    UNTARGETABLE_TRACK_INDEX,
};
pub use pipeline::{FightMarkers, generate_timeline};
