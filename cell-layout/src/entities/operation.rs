/// A single processing step, performed on one machine.
/// Operations are shared between all process plans that reference them.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub id: usize,
    pub name: String,
    /// Id of the machine performing the operation
    pub machine: usize,
    /// Time required to perform the operation, strictly positive
    pub processing_time: f64,
}

impl Operation {
    pub fn new(id: usize, name: impl Into<String>, machine: usize, processing_time: f64) -> Self {
        assert!(
            processing_time > 0.0 && processing_time.is_finite(),
            "processing time must be positive and finite"
        );
        Self {
            id,
            name: name.into(),
            machine,
            processing_time,
        }
    }
}
