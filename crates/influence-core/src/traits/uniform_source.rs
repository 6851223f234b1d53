/// Source of uniform random values in `[0, 1)`.
///
/// The engine draws exactly one value per offered candidate, in candidate
/// order, so a fixed sequence fully determines a run.
pub trait UniformSource {
    fn next_uniform(&mut self) -> f64;
}
