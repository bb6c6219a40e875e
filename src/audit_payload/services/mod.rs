mod payload_builder;

pub use payload_builder::PayloadBuilder;
