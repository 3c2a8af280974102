/// Capacity of a default constructed array
pub const DEFAULT_CAPACITY: usize = 8;

/// Multiplier applied to the capacity each time an array grows
pub const GROWTH_FACTOR: usize = 2;

/// Multiplier applied to a requested initial size to get the capacity
pub const SIZED_CAPACITY_FACTOR: usize = 2;
