mod aggregator;

pub use aggregator::AggregateTable;
