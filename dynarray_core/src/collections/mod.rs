mod dynamic_array;

pub use dynamic_array::{ArrayBuilder, DynamicArray};
