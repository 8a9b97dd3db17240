/// Product primary keys are caller-supplied 32-bit integers.
///
/// There is no auto-generation: clients pick the id and the write path
/// upserts on it.
pub type ProductId = i32;
