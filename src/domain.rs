//! Domain layer: the data the crawler exists to produce.

pub mod record;

pub use record::StingerRecord;
