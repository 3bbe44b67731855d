use std::sync::Arc;

/// Every bit of non-determinism in recipe synthesis goes through this.
pub trait RandomSource: Send {
    /// Uniform value in `0..=max`.
    fn up_to(&mut self, max: u32) -> u32;
}

pub type RandomFactory = Arc<dyn Fn() -> Box<dyn RandomSource> + Send + Sync>;

#[derive(Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn up_to(&mut self, max: u32) -> u32 {
        rand::random_range(0..=max)
    }
}

pub fn thread_random() -> RandomFactory {
    Arc::new(|| Box::new(ThreadRandom))
}

/// Replays a fixed sequence, wrapping around; each value is reduced into range.
#[derive(Clone, Debug)]
pub struct SequenceRandom {
    values: Vec<u32>,
    cursor: usize,
}

impl SequenceRandom {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Always yields zero jitter.
    pub fn zero() -> Self {
        Self::new(vec![0])
    }

    pub fn factory(values: impl Into<Vec<u32>>) -> RandomFactory {
        let values = values.into();
        Arc::new(move || Box::new(SequenceRandom::new(values.clone())))
    }
}

impl RandomSource for SequenceRandom {
    fn up_to(&mut self, max: u32) -> u32 {
        if self.values.is_empty() {
            return 0;
        }

        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;

        match max.checked_add(1) {
            Some(bound) => value % bound,
            None => value,
        }
    }
}
