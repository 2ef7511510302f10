// 🔁 Data Processors - element-wise transforms over a fixed-size array
// The output has the same length as the input; the type guarantees it.

use crate::types::MyArray;

/// Processing capability for `MyArray`
pub trait DataProcessor {
    /// Short name, logged when the processor is run
    fn name(&self) -> &'static str;

    /// Produce a new array; the input is left untouched
    fn process(&self, data: &MyArray) -> MyArray;
}

// ============================================================================
// IMPLEMENTATIONS
// ============================================================================

/// Doubles every element
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrayDoubler;

impl DataProcessor for ArrayDoubler {
    fn name(&self) -> &'static str {
        "doubler"
    }

    fn process(&self, data: &MyArray) -> MyArray {
        data.map(|v| v.wrapping_mul(2))
    }
}

/// Squares every element
#[derive(Debug, Clone, Copy, Default)]
pub struct ArraySquarer;

impl DataProcessor for ArraySquarer {
    fn name(&self) -> &'static str {
        "squarer"
    }

    fn process(&self, data: &MyArray) -> MyArray {
        data.map(|v| v.wrapping_mul(v))
    }
}

// ============================================================================
// TESTS
// ============================================================================
