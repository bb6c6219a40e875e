mod package_filter;
mod skip_policy;

pub use package_filter::PackageFilter;
pub use skip_policy::{NodeSkipPolicy, SkipPolicy};
