//! The content store behind a sidebar: which documents exist and whether
//! every navigation reference resolves to one.

mod docs;
mod fs;
mod links;
mod source;

pub use docs::*;
pub use fs::*;
pub use links::*;
pub use source::*;

type Status = status::Status;
type Result<T, E = Status> = std::result::Result<T, E>;
