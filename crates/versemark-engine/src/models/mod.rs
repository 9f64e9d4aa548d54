pub mod record;
pub mod verse;

pub use record::VerseRecord;
pub use verse::*;
