pub mod isolation;
pub mod note;
pub mod overtone;
pub mod session;

pub use isolation::*;
pub use note::*;
pub use overtone::*;
pub use session::*;
