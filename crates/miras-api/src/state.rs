use std::sync::Arc;

use miras_core::ports::{
    ActorStore, AssetStore, MediaStore, MetadataStore, NoteStore, SegmentStore,
};

/// Per-request store handles. Each handler works against these ports only;
/// nothing reaches a backend except through them.
#[derive(Clone)]
pub struct AppState {
    pub assets: Arc<dyn AssetStore>,
    pub segments: Arc<dyn SegmentStore>,
    pub notes: Arc<dyn NoteStore>,
    pub actors: Arc<dyn ActorStore>,
    pub media: Arc<dyn MediaStore>,
    pub metadata: Arc<dyn MetadataStore>,
}

impl AppState {
    /// Wire every port to one backend instance.
    pub fn from_catalog<S>(catalog: Arc<S>) -> Self
    where
        S: AssetStore + SegmentStore + NoteStore + ActorStore + MediaStore + MetadataStore + 'static,
    {
        Self {
            assets: catalog.clone(),
            segments: catalog.clone(),
            notes: catalog.clone(),
            actors: catalog.clone(),
            media: catalog.clone(),
            metadata: catalog,
        }
    }
}
