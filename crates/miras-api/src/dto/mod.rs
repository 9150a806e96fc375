pub mod geojson;
pub mod request;
pub mod response;

pub use geojson::{
    AssetFeature, AssetFeatureProperties, CrsRef, FeatureCollection, PointGeometry,
    SegmentFeature, WfsAssetProperties,
};
pub use request::{
    AssetGeoJsonParams, AssetListParams, DescribeParams, NoteListParams, SearchParams,
    SegmentListParams, SegmentTypeParam, WfsQuery,
};
pub use response::{
    ActorWithRole, AssetDetail, AssetNoteCount, AssetSegmentStats, AssetStats, AssetSummary,
    HealthResponse, MetadataResponse, NoteStats, SearchHit, SearchResponse, SegmentDetail,
    SegmentStats, SegmentTypeEntry, SegmentTypeList,
};
