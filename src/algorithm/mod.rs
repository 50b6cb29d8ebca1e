/// Wall coordinate rebasing after remapping
pub mod adjust;
/// Combination enumeration in generation order
pub mod generator;
/// Wall / terrain-only classification
pub mod partition;
/// End-to-end table derivation
pub mod pipeline;
/// Reorder table validation and grid placement
pub mod remap;
/// Reference lookup for looked-up quadrants
pub mod resolver;
