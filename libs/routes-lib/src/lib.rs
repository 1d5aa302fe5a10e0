pub mod errors;
pub mod resource;
pub mod routes;
pub mod template;

pub use errors::*;
pub use resource::*;
pub use routes::*;
pub use template::*;
