//! Display-only tracing of per-step cipher activity.
//!
//! The trace is a presentation aid, never an input to the transformation: the
//! returned bytes are identical whether tracing is on or off. Each stage
//! enforces its own display budget (a fixed number of leading steps plus a
//! trailing "and N more" count); the sink just stores what it is handed.
//! The untraced path uses [`NoTrace`], whose methods compile to nothing.

use serde::Serialize;
use std::fmt;

/// One per-byte transform step: `input (op key) = output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TraceStep {
    pub index: usize,
    pub input: u8,
    pub op: TraceOp,
    pub key: u8,
    pub output: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceOp {
    Add,
    Sub,
    Xor,
}

impl TraceOp {
    fn symbol(self) -> char {
        match self {
            TraceOp::Add => '+',
            TraceOp::Sub => '-',
            TraceOp::Xor => '^',
        }
    }
}

impl fmt::Display for TraceStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}) {} {} = {}({})",
            printable(self.input),
            self.input,
            self.op.symbol(),
            self.key,
            printable(self.output),
            self.output
        )
    }
}

/// Printable rendering of a byte for trace lines; non-printable bytes show
/// as a middle dot.
fn printable(byte: u8) -> char {
    if (32..=126).contains(&byte) {
        byte as char
    } else {
        '\u{b7}'
    }
}

/// Sink for per-stage trace records. Stages call these only when
/// [`TraceSink::is_enabled`] returns true, so disabled tracing pays no
/// formatting or allocation cost.
pub trait TraceSink {
    fn is_enabled(&self) -> bool {
        false
    }

    /// Free-form annotation, e.g. the LFSR's register states.
    fn note(&mut self, _text: String) {}

    fn record(&mut self, _step: TraceStep) {}

    /// Count of annotations elided past the stage's display budget.
    fn elide_notes(&mut self, _count: usize) {}

    /// Count of per-byte steps elided past the stage's display budget.
    fn elide_steps(&mut self, _count: usize) {}
}

/// Zero-cost sink for the untraced path.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;

impl TraceSink for NoTrace {}

/// Captured trace of one cipher stage.
#[derive(Debug, Clone, Serialize)]
pub struct StageTrace {
    pub stage: &'static str,
    pub notes: Vec<String>,
    pub steps: Vec<TraceStep>,
    pub elided_notes: usize,
    pub elided_steps: usize,
}

impl StageTrace {
    pub fn new(stage: &'static str) -> Self {
        Self {
            stage,
            notes: Vec::new(),
            steps: Vec::new(),
            elided_notes: 0,
            elided_steps: 0,
        }
    }
}

impl TraceSink for StageTrace {
    fn is_enabled(&self) -> bool {
        true
    }

    fn note(&mut self, text: String) {
        self.notes.push(text);
    }

    fn record(&mut self, step: TraceStep) {
        self.steps.push(step);
    }

    fn elide_notes(&mut self, count: usize) {
        self.elided_notes += count;
    }

    fn elide_steps(&mut self, count: usize) {
        self.elided_steps += count;
    }
}

impl fmt::Display for StageTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}]", self.stage)?;
        for note in &self.notes {
            writeln!(f, "{}", note)?;
        }
        if self.elided_notes > 0 {
            writeln!(f, "... +{} more steps", self.elided_notes)?;
        }
        for step in &self.steps {
            writeln!(f, "{}", step)?;
        }
        if self.elided_steps > 0 {
            writeln!(f, "... +{} more", self.elided_steps)?;
        }
        Ok(())
    }
}

/// Traces of every stage of one pipeline run, in applied order (so decryption
/// lists the stages reversed relative to encryption).
#[derive(Debug, Clone, Serialize)]
pub struct ChainTrace {
    pub stages: Vec<StageTrace>,
}

impl fmt::Display for ChainTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stage in &self.stages {
            writeln!(f, "{}", stage)?;
        }
        Ok(())
    }
}
