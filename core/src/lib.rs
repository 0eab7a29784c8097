pub mod anchor;
pub mod bundle;
pub mod casts;
pub mod events;
pub mod marker;
pub mod timeline;
pub mod tracks;
pub mod untargetable;

// Re-exports for convenience
pub use anchor::anchor_offset;
pub use bundle::{BundleError, FightEvents, FightSelector, ReportBundle};
pub use casts::{CastEventProcessor, ability_names};
pub use events::{CastEvent, CastKind, Fight, OverkillEvent, SchemaError, TargetabilityEvent};
pub use marker::{Marker, MarkerCategory, MarkerKind};
pub use markergen_types::{AppConfig, FilterConfig, GlobalSettings, SkillSelection, ZoneConfig};
pub use timeline::{FightMarkers, TimelineAssembler, TimelineDocument, generate_timeline};
pub use tracks::{PackedTrack, TrackPacker};
pub use untargetable::UntargetableWindowComputer;
