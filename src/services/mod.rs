pub mod enrichment;
pub mod providers;
pub mod recommendations;

pub use enrichment::MetadataEnricher;
pub use providers::{MetadataProvider, TmdbProvider};
