//! Out-of-band resumption over suspended frame chains.
//!
//! The host model advances a chain implicitly: a completing frame reports to
//! its parent, and user code never touches the linkage. The operations here
//! bypass that path. Given any handle in a chain they expose the parent link
//! as a plain lookup and the resumption entry point as a plain synchronous
//! call, so an effect system can advance any link directly with a value or
//! an injected failure.
//!
//! This is the only module that narrows an opaque [`ContRef`] down to a
//! concrete [`Frame`]; everything else treats handles as fully opaque.

use crate::context::Context;
use crate::errors::{BridgeError, BridgeResult};
use crate::fault::Fault;
use crate::frame::{ContRef, Frame, Signal, Step};
use crate::value::Value;

fn narrow(cont: &ContRef) -> BridgeResult<&Frame> {
    cont.as_any()
        .downcast_ref::<Frame>()
        .ok_or_else(|| BridgeError::IncompatibleContinuation(format!("{cont:?}")))
}

/// Report the frame that receives `cont`'s eventual result.
///
/// Pure lookup, safe to call any number of times, before or after the frame
/// is resumed. `Ok(None)` means the frame has no parent link; a handle that
/// cannot be narrowed at all is rejected with
/// [`BridgeError::IncompatibleContinuation`] rather than silently mapped to
/// "no parent".
pub fn parent_of(cont: &ContRef) -> BridgeResult<Option<ContRef>> {
    Ok(narrow(cont)?.parent().cloned())
}

/// Resume `cont` with a produced value.
///
/// Invokes the frame's entry point with `Ok(value)` synchronously on the
/// calling thread, running the resumed code up to its next suspension point
/// or completion, and returns whatever it produced. Each frame resumes at
/// most once; a later attempt fails with
/// [`BridgeError::ReentrantResumption`].
pub fn resume_with_value(cont: &ContRef, value: Value) -> BridgeResult<Step> {
    resume(cont, Ok(value))
}

/// Resume `cont` with a failure, exactly as if the originally suspended
/// operation had itself failed with `fault`.
///
/// The resumed frame's own failure handling, if any, runs normally; the
/// bridge never interprets or recovers from the fault on the caller's
/// behalf.
pub fn resume_with_failure(cont: &ContRef, fault: Fault) -> BridgeResult<Step> {
    resume(cont, Err(fault))
}

fn resume(cont: &ContRef, signal: Signal) -> BridgeResult<Step> {
    let frame = narrow(cont)?;
    let entry = frame.claim_entry().ok_or(BridgeError::ReentrantResumption)?;
    Ok(convert_result(entry(signal)))
}

/// Interception point for normalizing raw resumption outcomes, such as
/// unwrapping a wrapper value, without touching the bridge's call sites.
///
/// Implementations must not change whether an outcome is a success or a
/// failure.
pub trait ResultConverter {
    fn convert(&self, step: Step) -> Step {
        step
    }
}

/// The baseline converter: passes every outcome through untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl ResultConverter for Identity {}

/// Normalize a raw resumption outcome. Identity in the baseline bridge;
/// every resumption routes its result through here.
pub fn convert_result(step: Step) -> Step {
    Identity.convert(step)
}

/// Report the ambient context governing code resumed at `cont`.
///
/// Bridge-minted frames deliberately report an empty context: they exist to
/// synthesize a resumption call, not to continue one transparently.
pub fn context_of(cont: &ContRef) -> BridgeResult<Context> {
    Ok(narrow(cont)?.context().clone())
}

/// Iterate `cont` and its ancestors, nearest first.
///
/// Walking stops after the first handle that is not a narrowable frame,
/// typically the host's terminal continuation. Pure lookups only.
pub fn chain(cont: &ContRef) -> Chain {
    Chain {
        next: Some(cont.clone()),
    }
}

/// Iterator returned by [`chain`].
pub struct Chain {
    next: Option<ContRef>,
}

impl Iterator for Chain {
    type Item = ContRef;

    fn next(&mut self) -> Option<ContRef> {
        let current = self.next.take()?;
        self.next = current
            .as_any()
            .downcast_ref::<Frame>()
            .and_then(|frame| frame.parent().cloned());
        Some(current)
    }
}
