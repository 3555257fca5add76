pub mod crud;
pub mod middleware;
pub mod model;
pub mod policy;

pub use middleware::{authorize, Gate};
pub use model::{Caller, Role};
pub use policy::{Ownership, Policy};
