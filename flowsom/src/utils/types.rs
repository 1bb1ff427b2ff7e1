/// Alias to a scalar floating type.
///
/// NOTE: input data and node weights are exchanged with other tools as double precision values,
/// switching to `f32` breaks bit-identical reproduction of trained maps.
pub type Float = f64;
