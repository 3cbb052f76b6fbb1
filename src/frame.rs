//! Suspended frame chains and the capability boundary around them.
//!
//! The host model hands out continuations as opaque [`ContRef`] handles.
//! Most of them are [`Frame`]s: one suspended computation each, holding a
//! read-only link to the frame that receives its eventual result, a one-shot
//! resumption entry point, and the ambient [`Context`] code resumed there
//! runs in. The chain terminates in a [`RootCont`], which is deliberately
//! not a frame.
//!
//! Frames are created here, by the suspension machinery, and reclaimed when
//! the last handle drops. The bridge in [`crate::bridge`] never allocates or
//! frees one; it only narrows a handle, performs one call, and discards the
//! narrowed view.

use std::any::Any;
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::context::Context;
use crate::fault::Fault;
use crate::value::Value;

/// Completion signal delivered to a resumption entry point: the produced
/// value, or the failure the frame should observe.
///
/// This is the host model's own result encoding, not a parallel one, so
/// in-frame failure handling behaves identically whether the resumption was
/// driven by the bridge or by the implicit path.
pub type Signal = Result<Value, Fault>;

/// What a resumed entry point produced.
#[derive(Debug)]
pub enum Step {
    /// The frame ran to completion, or raised, with this outcome.
    Done(Signal),
    /// The frame suspended again; the new frame awaits its own signal.
    Suspended(ContRef),
}

/// Opaque handle to a continuation of unknown concrete shape.
///
/// `Rc`-based and therefore `!Send`: a single chain stays on one thread,
/// while unrelated chains may live on different threads independently.
pub type ContRef = Rc<dyn Continuation>;

/// Any continuation the host model can hand out.
///
/// The bridge narrows these down to [`Frame`]s before operating on them;
/// handles of other shapes are rejected loudly.
pub trait Continuation: fmt::Debug {
    /// Upcast used for narrowing. Implementations return `self`.
    fn as_any(&self) -> &dyn Any;
}

type EntryFn = Box<dyn FnOnce(Signal) -> Step>;

/// One suspended frame in a chain.
pub struct Frame {
    parent: Option<ContRef>,
    entry: Cell<Option<EntryFn>>,
    resumed: AtomicBool,
    context: Context,
}

impl Frame {
    /// Mint a suspended frame whose entry point runs `entry` when the frame
    /// is resumed.
    ///
    /// The parent link is fixed for the frame's lifetime. The context is
    /// empty by construction: a bridge-minted frame synthesizes a resumption
    /// call and inherits nothing from its suspension site.
    pub fn suspend<F>(parent: Option<ContRef>, entry: F) -> ContRef
    where
        F: FnOnce(Signal) -> Step + 'static,
    {
        Rc::new(Frame {
            parent,
            entry: Cell::new(Some(Box::new(entry))),
            resumed: AtomicBool::new(false),
            context: Context::empty(),
        })
    }

    pub(crate) fn parent(&self) -> Option<&ContRef> {
        self.parent.as_ref()
    }

    pub(crate) fn context(&self) -> &Context {
        &self.context
    }

    /// Whether the entry point has already been claimed.
    pub fn is_resumed(&self) -> bool {
        self.resumed.load(Ordering::Acquire)
    }

    /// Claim the one-shot entry point. The first claim flips the frame from
    /// Suspended to Resumed; every later claim observes the flag and gets
    /// `None`. There is no transition back.
    pub(crate) fn claim_entry(&self) -> Option<EntryFn> {
        if self.resumed.swap(true, Ordering::AcqRel) {
            return None;
        }
        self.entry.take()
    }
}

impl Continuation for Frame {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frame")
            .field("resumed", &self.is_resumed())
            .field("has_parent", &self.parent.is_some())
            .finish_non_exhaustive()
    }
}

/// Terminal continuation installed by the host's entry point.
///
/// Not a frame: narrowing it fails, which is how callers learn they have
/// walked off the top of a chain.
#[derive(Debug)]
pub struct RootCont;

impl RootCont {
    pub fn handle() -> ContRef {
        Rc::new(RootCont)
    }
}

impl Continuation for RootCont {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Identity comparison for continuation handles: true when both refer to
/// the same allocation.
pub fn identical(a: &ContRef, b: &ContRef) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}
