/// Primitive Ensembl REST data types and NewType-patterns.
mod format;
mod identifier;
mod method;
mod server;

pub use format::*;
pub use identifier::*;
pub use method::*;
pub use server::*;
