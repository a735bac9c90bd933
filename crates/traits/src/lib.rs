pub mod emphasis;
pub mod resource;

pub use emphasis::{BionicEmphasizer, Emphasizer, SENTINEL_BEGIN, SENTINEL_END};
pub use resource::{InMemoryResourceProvider, ResourceError, ResourceProvider, SharedResourceData};
