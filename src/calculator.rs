// 🧮 Calculator - functions as values
//
// The held operation can be any `Fn(i64, i64) -> i64`: a named function,
// a closure, or a closure capturing state. Swapping it changes behavior
// without touching `calculate`.

use std::fmt;

/// A binary integer operation
pub type Operation = Box<dyn Fn(i64, i64) -> i64>;

pub fn add(a: i64, b: i64) -> i64 {
    a.wrapping_add(b)
}

pub fn subtract(a: i64, b: i64) -> i64 {
    a.wrapping_sub(b)
}

pub struct Calculator {
    operation: Operation,
}

impl Calculator {
    pub fn new<F>(operation: F) -> Self
    where
        F: Fn(i64, i64) -> i64 + 'static,
    {
        Calculator {
            operation: Box::new(operation),
        }
    }

    /// Replace the held operation
    pub fn set_operation<F>(&mut self, operation: F)
    where
        F: Fn(i64, i64) -> i64 + 'static,
    {
        self.operation = Box::new(operation);
    }

    pub fn calculate(&self, a: i64, b: i64) -> i64 {
        (self.operation)(a, b)
    }
}

impl fmt::Debug for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calculator").finish_non_exhaustive()
    }
}

/// Assign named functions to an `Operation` variable and call it: `[8, 2]`
pub fn demonstrate_function_values() -> Vec<i64> {
    let mut results = Vec::new();

    let mut operation: Operation = Box::new(add);
    results.push(operation(5, 3));

    operation = Box::new(subtract);
    results.push(operation(5, 3));

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_functions() {
        assert_eq!(add(5, 3), 8);
        assert_eq!(subtract(5, 3), 2);
        assert_eq!(subtract(3, 5), -2);
    }

    #[test]
    fn test_swap_operations() {
        let mut calc = Calculator::new(add);
        assert_eq!(calc.calculate(5, 3), 8);

        calc.set_operation(subtract);
        assert_eq!(calc.calculate(5, 3), 2);

        calc.set_operation(|a, b| a * b);
        assert_eq!(calc.calculate(5, 3), 15);
    }

    #[test]
    fn test_capturing_closure() {
        let offset = 100;
        let calc = Calculator::new(move |a, b| a + b + offset);
        assert_eq!(calc.calculate(5, 3), 108);
    }

    #[test]
    fn test_demonstrate_function_values() {
        assert_eq!(demonstrate_function_values(), vec![8, 2]);
    }
}
