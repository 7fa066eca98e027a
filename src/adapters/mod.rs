// Adapters layer: concrete implementations of the domain ports.

pub mod csv_sink;
pub mod random_skip;

pub use csv_sink::CsvFileSink;
pub use random_skip::RandomSkip;
