use crate::common::{NonZeroUInt, UInt};
use rand::{
    distributions::{Distribution, Uniform},
    Rng,
};

/// Where dice terms get their faces from.
pub trait Roller {
    /// Appends `num` results in `1..=faces` to `out`, in roll order.
    fn roll_into(&mut self, out: &mut Vec<UInt>, num: usize, faces: NonZeroUInt);
}

impl<R: Rng> Roller for R {
    fn roll_into(&mut self, out: &mut Vec<UInt>, num: usize, faces: NonZeroUInt) {
        let die = Uniform::new_inclusive(1, faces.get());
        out.extend(die.sample_iter(self).take(num));
    }
}

#[cfg(test)]
pub(crate) use step::StepRoller;
