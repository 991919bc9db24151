//! Integration tests for the public evaluation API

use opcalc_core::{Error, OperationRequest, Operator, evaluate, evaluate_or_zero};

const OPERANDS: [i64; 9] = [0, 1, -1, 2, -3, 7, -100, 1_000_003, -65_536];

#[test]
fn test_operators_match_native_arithmetic() {
    for &a in &OPERANDS {
        for &b in &OPERANDS {
            assert_eq!(evaluate(&OperationRequest::new(a, '+', b)).unwrap(), a + b);
            assert_eq!(evaluate(&OperationRequest::new(a, '-', b)).unwrap(), a - b);
            assert_eq!(evaluate(&OperationRequest::new(a, 'x', b)).unwrap(), a * b);
            if b != 0 {
                assert_eq!(evaluate(&OperationRequest::new(a, '/', b)).unwrap(), a / b);
            }
        }
    }
}

#[test]
fn test_zero_result_is_distinguishable_from_failure() {
    let zero = evaluate(&OperationRequest::new(5, '-', 5));
    let failure = evaluate(&OperationRequest::new(5, '?', 5));

    assert_eq!(zero.unwrap(), 0);
    assert!(matches!(failure, Err(Error::UnknownOperator('?'))));

    // The sentinel form cannot tell them apart
    assert_eq!(evaluate_or_zero(&OperationRequest::new(5, '-', 5)), 0);
    assert_eq!(evaluate_or_zero(&OperationRequest::new(5, '?', 5)), 0);
}

#[test]
fn test_every_operator_symbol_is_accepted() {
    for op in Operator::ALL {
        assert!(evaluate(&OperationRequest::new(12, op.symbol(), 4)).is_ok());
    }
}

#[test]
fn test_evaluate_is_callable_from_many_threads() {
    let handles: Vec<_> = (0..4i64)
        .map(|i| std::thread::spawn(move || evaluate(&OperationRequest::new(i, 'x', 10)).unwrap()))
        .collect();

    let results: Vec<i64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![0, 10, 20, 30]);
}
