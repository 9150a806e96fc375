pub mod wfs;

pub use wfs::WfsService;
