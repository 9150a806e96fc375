mod assets;
mod health;
mod metadata;
mod notes;
mod ogc;
mod segments;

pub use assets::{
    asset_actors, asset_media, asset_stats, assets_geojson, create_asset, delete_asset,
    get_asset, get_asset_by_identifier, list_assets, search_assets, update_asset,
};
pub use health::health_check;
pub use metadata::dataset_metadata;
pub use notes::{create_note, delete_note, get_note, list_notes, note_stats, notes_by_asset};
pub use ogc::{wfs_capabilities, wfs_describe, wfs_get_feature};
pub use segments::{
    create_segment, delete_segment, get_segment, list_segments, segment_stats,
    segment_stats_by_asset, segment_types, segments_by_asset, update_segment,
};
