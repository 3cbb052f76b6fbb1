//! Continuation resumption primitives for effect handler runtimes.
//!
//! A host coroutine model resumes suspended computations implicitly and
//! exactly once: when a frame completes, its result flows to the frame that
//! spawned it. This crate is the bridge that lets an effect system reach
//! into such a chain out of band:
//!
//! - Walk a chain one parent link at a time ([`bridge::parent_of`],
//!   [`bridge::chain`])
//! - Resume any frame directly with a produced value or an injected failure
//!   ([`bridge::resume_with_value`], [`bridge::resume_with_failure`])
//! - Normalize raw resumption outcomes through an explicit seam
//!   ([`bridge::convert_result`])
//!
//! Resumption is a plain synchronous call on the invoking thread, never a
//! scheduling event. Each frame resumes at most once; a second attempt is
//! detected and reported as [`errors::BridgeError::ReentrantResumption`]
//! instead of silently corrupting chained state.

pub mod bridge;
pub mod context;
pub mod errors;
pub mod fault;
pub mod frame;
pub mod value;


pub use bridge::{
    Chain, Identity, ResultConverter, chain, context_of, convert_result, parent_of,
    resume_with_failure, resume_with_value,
};
pub use context::Context;
pub use errors::{BridgeError, BridgeResult};
pub use fault::Fault;
pub use frame::{ContRef, Continuation, Frame, RootCont, Signal, Step, identical};
pub use value::Value;
