#[cfg(test)]
#[allow(clippy::float_cmp, clippy::unwrap_used)]
mod tests {
    use super::super::*;
    use calculator_sdk::{CalculationResult, CalculatorError, Operation};
    use tracing_test::traced_test;

    #[test]
    fn test_concrete_scenarios() {
        let service = Service::new();
        assert_eq!(service.calculate("Add", 5.0, 3.0).unwrap(), 8.0);
        assert_eq!(service.calculate("Subtract", 10.0, 4.0).unwrap(), 6.0);
        assert_eq!(service.calculate("Multiply", 6.0, 7.0).unwrap(), 42.0);
        assert_eq!(service.calculate("Divide", 15.0, 3.0).unwrap(), 5.0);
        assert_eq!(service.calculate("Square", 4.0, 0.0).unwrap(), 16.0);
    }

    #[test]
    fn test_square_ignores_second_operand() {
        let service = Service::new();
        for second in [0.0, 999.0, -1.0, f64::NAN] {
            assert_eq!(service.dispatch(Operation::Square, 5.0, second).unwrap(), 25.0);
        }
    }

    #[test]
    fn test_divide_by_zero() {
        let service = Service::new();
        let err = service.calculate("Divide", 5.0, 0.0).unwrap_err();
        assert_eq!(err, CalculatorError::DivisionByZero);
        assert_eq!(err.to_string(), "Error: Division by zero");
        assert!(!err.is_soft());
    }

    #[test]
    fn test_unknown_operation_is_a_soft_error_value() {
        let service = Service::new();
        let result = CalculationResult::from(service.calculate("Unknown", 1.0, 2.0));
        assert_eq!(
            result,
            CalculationResult::Error {
                message: "Error: Unknown operation".to_owned()
            }
        );
    }

    #[test]
    fn test_overflow_is_a_soft_error() {
        let service = Service::new();
        let err = service.calculate("Multiply", 1e308, 10.0).unwrap_err();
        assert_eq!(err, CalculatorError::NonFiniteResult);
        assert!(err.is_soft());
        assert_eq!(
            service.dispatch(Operation::Square, 1e200, 0.0),
            Err(CalculatorError::NonFiniteResult)
        );
        assert_eq!(
            service.dispatch(Operation::Add, f64::NAN, 1.0),
            Err(CalculatorError::NonFiniteResult)
        );
    }

    #[test]
    fn test_operation_names_are_case_sensitive() {
        let service = Service::new();
        assert!(matches!(
            service.calculate("add", 1.0, 2.0),
            Err(CalculatorError::UnknownOperation(name)) if name == "add"
        ));
    }

    #[test]
    fn test_binary_operations_match_arithmetic() {
        let service = Service::new();
        let pairs = [(2.5, -4.0), (0.0, 7.0), (-3.0, -3.0), (1e10, 1e-10)];
        for (a, b) in pairs {
            assert_eq!(service.dispatch(Operation::Add, a, b).unwrap(), a + b);
            assert_eq!(service.dispatch(Operation::Subtract, a, b).unwrap(), a - b);
            assert_eq!(service.dispatch(Operation::Multiply, a, b).unwrap(), a * b);
            assert_eq!(service.dispatch(Operation::Divide, a, b).unwrap(), a / b);
        }
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let service = Service::new();
        let first = service.calculate("Divide", 1.0, 3.0);
        for _ in 0..10 {
            assert_eq!(service.calculate("Divide", 1.0, 3.0), first);
        }
    }

    #[test]
    fn test_concurrent_dispatch() {
        let service = &Service::new();
        std::thread::scope(|s| {
            let handles: Vec<_> = (0_u32..8)
                .map(|i| s.spawn(move || service.dispatch(Operation::Multiply, f64::from(i), 2.0)))
                .collect();
            for (i, handle) in (0_u32..).zip(handles) {
                assert_eq!(handle.join().unwrap().unwrap(), f64::from(i) * 2.0);
            }
        });
    }

    #[test]
    #[traced_test]
    fn test_dispatch_is_traced() {
        let service = Service::new();
        let _ = service.calculate("Divide", 5.0, 0.0);
        assert!(logs_contain("calculation rejected"));
    }
}
