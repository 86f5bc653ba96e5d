/// A 2D noise function in one of the two shapes the generator understands.
///
/// `Seeded` functions take the seed as a third argument. `Unseeded` functions
/// have no seed input; the generator folds the seed into the sampling
/// coordinates instead.
pub enum NoiseFn {
    Seeded(Box<dyn FnMut(f32, f32, i32) -> f32>),
    Unseeded(Box<dyn FnMut(f32, f32) -> f32>),
}

impl NoiseFn {
    pub fn seeded(f: impl FnMut(f32, f32, i32) -> f32 + 'static) -> Self {
        NoiseFn::Seeded(Box::new(f))
    }

    pub fn unseeded(f: impl FnMut(f32, f32) -> f32 + 'static) -> Self {
        NoiseFn::Unseeded(Box::new(f))
    }

    #[inline]
    pub fn is_seeded(&self) -> bool {
        matches!(self, NoiseFn::Seeded(_))
    }
}

impl std::fmt::Debug for NoiseFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NoiseFn::Seeded(_) => f.write_str("NoiseFn::Seeded(..)"),
            NoiseFn::Unseeded(_) => f.write_str("NoiseFn::Unseeded(..)"),
        }
    }
}
