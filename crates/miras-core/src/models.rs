pub mod actor;
pub mod asset;
pub mod media;
pub mod metadata;
pub mod note;
pub mod segment;

pub use actor::{Actor, ActorDraft, AssetActor};
pub use asset::{AssetDraft, AssetPatch, AssetRow, HeritageAsset};
pub use media::{Media, MediaDraft};
pub use metadata::DatasetMetadata;
pub use note::{NoteDraft, UserNote};
pub use segment::{AssetSegment, SegmentDraft, SegmentPatch, SegmentType};
