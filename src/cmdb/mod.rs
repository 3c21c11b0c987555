/// CMDB document layer: loading, failure taxonomy, query engine.
pub mod errors;
pub mod load;
pub mod query;

pub use errors::CmdbError;
pub use load::load_document;
