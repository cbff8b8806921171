use crate::algorithms::divide::DivideAndConquer;

pub struct DivideAndConquerBuilder {
    parallel_cutoff: Option<usize>,
}

impl DivideAndConquerBuilder {
    pub fn new() -> Self {
        Self {
            parallel_cutoff: None,
        }
    }
    pub fn with_parallel_cutoff(mut self, cutoff: usize) -> Self {
        self.parallel_cutoff = Some(cutoff);
        self
    }
    pub fn build(self) -> DivideAndConquer {
        match self.parallel_cutoff {
            Some(c) => DivideAndConquer::with_parallel_cutoff(c),
            None => DivideAndConquer::new(),
        }
    }
}

impl Default for DivideAndConquerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
