// Tue Jan 20 2026 - Alex

pub mod entry;
pub mod registry;

pub use entry::{CatalogEntry, NativeStruct};
pub use registry::{CatalogIter, StructCatalog};
