mod entry;
mod kind;

pub use self::entry::{Entry, RawEntry};
pub use self::kind::ContentKind;
