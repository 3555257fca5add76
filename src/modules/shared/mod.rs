pub mod extract;
pub mod patch;
pub mod schema;
pub mod status;

pub use extract::{IdPath, ValidJson};
pub use patch::{delete_row, ensure_exists, ensure_reference, SparseUpdate};
pub use schema::{ApiResponse, ErrorResponse};
pub use status::{parse_optional, Status};
