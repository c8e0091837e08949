//! In-flight resolution stack
//!
//! Records which bindings and types are currently being resolved so that
//! re-entry can be reported as a cycle instead of recursing until the
//! stack overflows.

use std::fmt;

use capsule_domain::TypeIdentity;

/// One level of an in-progress resolution
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Frame {
    /// A binding whose recipe is running
    Binding(String),
    /// A type whose constructor arguments are being resolved
    Type(TypeIdentity),
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Binding(name) => f.write_str(name),
            Self::Type(identity) => f.write_str(identity.as_str()),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub(crate) struct ResolutionStack {
    frames: Vec<Frame>,
}

impl ResolutionStack {
    pub(crate) fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    pub(crate) fn pop(&mut self) {
        self.frames.pop();
    }

    pub(crate) fn contains(&self, frame: &Frame) -> bool {
        self.frames.contains(frame)
    }

    /// The chain `frame` would close, from its first occurrence back to itself
    pub(crate) fn cycle(&self, frame: &Frame) -> Option<Vec<String>> {
        let start = self.frames.iter().position(|f| f == frame)?;
        let mut chain: Vec<String> = self.frames[start..].iter().map(ToString::to_string).collect();
        chain.push(frame.to_string());
        Some(chain)
    }

    pub(crate) fn depth(&self) -> usize {
        self.frames.len()
    }
}
