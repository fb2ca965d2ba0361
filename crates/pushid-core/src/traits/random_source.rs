/// Source of random suffix symbols.
///
/// Implementations should return values uniformly distributed in `[0, 64)`.
/// The generator reduces anything larger modulo 64.
pub trait RandomSource: Send + 'static {
    fn next_symbol(&mut self) -> u8;
}
