mod adjust;
mod generator;
mod remap;
