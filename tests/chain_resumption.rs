//! End-to-end chain resumption scenarios.

use strand::bridge::ResultConverter;
use strand::{BridgeError, Fault, Frame, RootCont, Step, Value, bridge, identical};

fn add(a: Value, b: Value) -> Value {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => Value::Number(x + y),
        _ => Value::Unit,
    }
}

fn done_value(step: Step) -> Value {
    match step {
        Step::Done(Ok(value)) => value,
        other => panic!("expected completed value, got {other:?}"),
    }
}

fn done_fault(step: Step) -> Fault {
    match step {
        Step::Done(Err(fault)) => fault,
        other => panic!("expected propagated fault, got {other:?}"),
    }
}

#[test]
fn resumed_adder_observes_exactly_the_delivered_value() {
    let adder = Frame::suspend(None, |signal| {
        Step::Done(signal.map(|value| add(value, Value::Number(5.0))))
    });

    let step = bridge::resume_with_value(&adder, Value::Number(7.0)).unwrap();
    assert_eq!(done_value(step), Value::Number(12.0));
}

#[test]
fn local_failure_handler_observes_exactly_the_injected_reason() {
    let guarded = Frame::suspend(None, |signal| match signal {
        Ok(value) => Step::Done(Ok(value)),
        Err(fault) if fault.message() == "division by zero" => {
            Step::Done(Ok(Value::Number(0.0)))
        }
        Err(fault) => Step::Done(Err(fault)),
    });

    let step = bridge::resume_with_failure(&guarded, Fault::new("division by zero")).unwrap();
    assert_eq!(done_value(step), Value::Number(0.0));
}

#[test]
fn unhandled_fault_propagates_verbatim() {
    let pass_through = Frame::suspend(None, Step::Done);

    let step = bridge::resume_with_failure(&pass_through, Fault::new("connection reset")).unwrap();
    assert_eq!(done_fault(step), Fault::new("connection reset"));
}

#[test]
fn chain_scenario_resumes_the_deepest_frame() {
    let root = RootCont::handle();
    let a = Frame::suspend(Some(root.clone()), Step::Done);
    let b = Frame::suspend(Some(a.clone()), Step::Done);
    let c = Frame::suspend(Some(b.clone()), |signal| {
        Step::Done(signal.map(|value| add(value, Value::Number(2.0))))
    });

    let parent = bridge::parent_of(&c).unwrap().expect("C reports to B");
    assert!(identical(&parent, &b));

    let step = bridge::resume_with_value(&c, Value::Number(10.0)).unwrap();
    assert_eq!(done_value(step), Value::Number(12.0));

    // The terminal handle is not a frame: asking for its parent is a caller
    // bug, not "no parent".
    assert!(matches!(
        bridge::parent_of(&root),
        Err(BridgeError::IncompatibleContinuation(_))
    ));
}

#[test]
fn parent_links_are_stable_across_lookups_and_resumption() {
    let a = Frame::suspend(None, Step::Done);
    let b = Frame::suspend(Some(a.clone()), Step::Done);
    let c = Frame::suspend(Some(b.clone()), Step::Done);

    let first = bridge::parent_of(&c).unwrap().unwrap();
    let second = bridge::parent_of(&c).unwrap().unwrap();
    assert!(identical(&first, &second));

    bridge::resume_with_value(&c, Value::Unit).unwrap();

    // Resuming C must not touch B's own link, and A stays parentless.
    let b_parent = bridge::parent_of(&b).unwrap().unwrap();
    assert!(identical(&b_parent, &a));
    assert!(bridge::parent_of(&a).unwrap().is_none());
}

#[test]
fn second_resumption_fails_fast_regardless_of_signal_kind() {
    let frame = Frame::suspend(None, Step::Done);
    bridge::resume_with_value(&frame, Value::Number(1.0)).unwrap();

    assert_eq!(
        bridge::resume_with_failure(&frame, Fault::new("late")).unwrap_err(),
        BridgeError::ReentrantResumption
    );
}

#[test]
fn reentrant_resumption_message() {
    let frame = Frame::suspend(None, Step::Done);
    bridge::resume_with_value(&frame, Value::Unit).unwrap();

    let err = bridge::resume_with_failure(&frame, Fault::new("late")).unwrap_err();
    insta::assert_snapshot!(err, @"reentrant resumption: frame has already been resumed");
}

#[test]
fn resumed_frame_may_suspend_again() {
    let outer = Frame::suspend(None, |signal| match signal {
        Ok(first) => Step::Suspended(Frame::suspend(None, move |second| {
            Step::Done(second.map(|value| add(first, value)))
        })),
        Err(fault) => Step::Done(Err(fault)),
    });

    let step = bridge::resume_with_value(&outer, Value::Number(3.0)).unwrap();
    let inner = match step {
        Step::Suspended(inner) => inner,
        other => panic!("expected a further suspension, got {other:?}"),
    };

    let step = bridge::resume_with_value(&inner, Value::Number(4.0)).unwrap();
    assert_eq!(done_value(step), Value::Number(7.0));
}

#[test]
fn convert_result_preserves_classification() {
    let done = bridge::convert_result(Step::Done(Ok(Value::Number(9.0))));
    assert_eq!(done_value(done), Value::Number(9.0));

    let failed = bridge::convert_result(Step::Done(Err(Fault::new("boom"))));
    assert_eq!(done_fault(failed), Fault::new("boom"));
}

/// Converter that unwraps single-element list results.
struct UnwrapSingleton;

impl ResultConverter for UnwrapSingleton {
    fn convert(&self, step: Step) -> Step {
        match step {
            Step::Done(Ok(Value::List(mut items))) if items.len() == 1 => {
                Step::Done(Ok(items.remove(0)))
            }
            other => other,
        }
    }
}

#[test]
fn custom_converter_unwraps_without_touching_call_sites() {
    let step = Step::Done(Ok(Value::List(vec![Value::Number(5.0)])));
    assert_eq!(done_value(UnwrapSingleton.convert(step)), Value::Number(5.0));

    // Failure classification is untouched.
    let failed = UnwrapSingleton.convert(Step::Done(Err(Fault::new("boom"))));
    assert_eq!(done_fault(failed), Fault::new("boom"));
}

#[test]
fn unrelated_chains_resume_independently_on_their_own_threads() {
    let workers: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let frame = Frame::suspend(None, move |signal| {
                    Step::Done(signal.map(|value| add(value, Value::Number(i as f64))))
                });
                done_value(bridge::resume_with_value(&frame, Value::Number(10.0)).unwrap())
            })
        })
        .collect();

    for (i, worker) in workers.into_iter().enumerate() {
        assert_eq!(worker.join().unwrap(), Value::Number(10.0 + i as f64));
    }
}
