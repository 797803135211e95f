//! Error reporting during evaluation
//!
//! Evaluation never returns an error. Each problem is handed to an injected
//! [`ErrorSink`] as an [`ErrorReport`] and the affected output slot is left
//! untouched.

use std::fmt;
use std::sync::Mutex;

#[cfg(feature = "serde-support")]
use serde::{Deserialize, Serialize};

/// Category of a reported problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub enum ErrorKind {
    /// A required buffer or structure is absent
    NullInput,
    /// Non-fatal informational report
    DiagnosticMessage,
    /// A referenced bone id has no static record
    NotFound,
}

impl ErrorKind {
    /// Stable numeric code handed to hosts
    pub const fn code(self) -> u32 {
        match self {
            Self::NullInput => 0,
            Self::DiagnosticMessage => 1,
            Self::NotFound => 2,
        }
    }

    /// Inverse of [`ErrorKind::code`]
    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Self::NullInput),
            1 => Some(Self::DiagnosticMessage),
            2 => Some(Self::NotFound),
            _ => None,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NullInput => write!(f, "null input"),
            Self::DiagnosticMessage => write!(f, "diagnostic"),
            Self::NotFound => write!(f, "not found"),
        }
    }
}

/// Call site that raised a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub enum SourceContext {
    /// Single-clip batch evaluation
    EvaluateSingle,
    /// Two-clip blended batch evaluation
    EvaluateBlended,
    /// Parent-chain resolution of one bone
    ResolveWorld,
    /// Channel sampling of one animated bone
    SampleBone,
    /// C ABI entry points
    Ffi,
}

impl SourceContext {
    /// Stable numeric code handed to hosts
    pub const fn code(self) -> u32 {
        match self {
            Self::EvaluateSingle => 1,
            Self::EvaluateBlended => 2,
            Self::ResolveWorld => 3,
            Self::SampleBone => 4,
            Self::Ffi => 5,
        }
    }
}

/// One reported problem: what went wrong, where, and for which subject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub struct ErrorReport {
    pub kind: ErrorKind,
    pub context: SourceContext,
    /// Bone id for lookups, required slot count for short buffers, 0 otherwise
    pub subject_id: u32,
}

impl ErrorReport {
    pub const fn new(kind: ErrorKind, context: SourceContext, subject_id: u32) -> Self {
        Self {
            kind,
            context,
            subject_id,
        }
    }

    /// `(kind, sourceContext, subjectId)` as plain integers
    pub const fn codes(&self) -> (u32, u32, u32) {
        (self.kind.code(), self.context.code(), self.subject_id)
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} in {:?} (subject {})",
            self.kind, self.context, self.subject_id
        )
    }
}

/// Receiver for evaluation problems, implemented by the host
pub trait ErrorSink {
    fn report(&self, report: ErrorReport);
}

impl<S: ErrorSink + ?Sized> ErrorSink for &S {
    fn report(&self, report: ErrorReport) {
        (**self).report(report);
    }
}

/// Adapts a closure into a sink
#[derive(Debug, Clone, Copy)]
pub struct FnSink<F>(pub F);

impl<F> ErrorSink for FnSink<F>
where
    F: Fn(ErrorReport),
{
    fn report(&self, report: ErrorReport) {
        (self.0)(report);
    }
}

/// Forwards every report to the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl ErrorSink for LogSink {
    fn report(&self, report: ErrorReport) {
        match report.kind {
            ErrorKind::DiagnosticMessage => log::info!("bonemix: {report}"),
            ErrorKind::NullInput | ErrorKind::NotFound => log::warn!("bonemix: {report}"),
        }
    }
}

/// Discards every report
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ErrorSink for NullSink {
    fn report(&self, _report: ErrorReport) {}
}

/// Keeps every report in arrival order
#[derive(Debug, Default)]
pub struct CollectingSink {
    reports: Mutex<Vec<ErrorReport>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the reports received so far
    pub fn reports(&self) -> Vec<ErrorReport> {
        match self.reports.lock() {
            Ok(reports) => reports.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.reports().is_empty()
    }

    /// Take the reports, leaving the sink empty
    pub fn drain(&self) -> Vec<ErrorReport> {
        match self.reports.lock() {
            Ok(mut reports) => std::mem::take(&mut *reports),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl ErrorSink for CollectingSink {
    fn report(&self, report: ErrorReport) {
        match self.reports.lock() {
            Ok(mut reports) => reports.push(report),
            Err(poisoned) => poisoned.into_inner().push(report),
        }
    }
}
