mod hotspot;
mod store;

pub use hotspot::HotspotProcessor;
pub use store::StoreProcessor;
