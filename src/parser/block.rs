//! Doc-comment state machine — line-by-line.
//!
//! A block opens on a `---` line, accumulates description, annotations,
//! notes and fenced examples, and is either promoted to a [`FunctionRecord`]
//! when a public signature follows within the lookahead window, or dropped.

use super::annotation::{self, Annotation};
use super::signature::{self, Signature};
use crate::model::{FunctionRecord, Generic, Note, Param, Return};

/// Parser state. `Lookahead` is the tail of `InComment`: the comment has
/// ended and the block waits for its signature.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum State {
    #[default]
    Idle,
    InComment,
    InCodeBlock,
    Lookahead {
        remaining: usize,
    },
}

/// Accumulator for the block being read.
#[derive(Debug, Default)]
struct CommentBlock {
    description: Vec<String>,
    /// Set once the first paragraph has ended
    description_closed: bool,
    /// A plain `--` line has been read, so the next `---` starts a new block
    continued: bool,
    params: Vec<Param>,
    returns: Option<Return>,
    generics: Vec<Generic>,
    notes: Vec<Note>,
    code: Vec<String>,
}

impl CommentBlock {
    fn push_text(&mut self, text: &str) {
        if self.description_closed {
            self.notes.push(Note::Text(text.to_string()));
        } else {
            self.description.push(text.to_string());
        }
    }

    fn close_paragraph(&mut self) {
        if !self.description.is_empty() {
            self.description_closed = true;
        }
    }

    fn annotate(&mut self, annotation: Annotation) {
        match annotation {
            Annotation::Param(p) => self.params.push(p),
            Annotation::Generic(g) => self.generics.push(g),
            Annotation::Return(r) => match self.returns.as_mut() {
                // Multiple returns: `a, b`
                Some(existing) => {
                    existing.ty.push_str(", ");
                    existing.ty.push_str(&r.ty);
                    if !r.description.is_empty() {
                        if !existing.description.is_empty() {
                            existing.description.push_str("; ");
                        }
                        existing.description.push_str(&r.description);
                    }
                }
                None => self.returns = Some(r),
            },
        }
    }

    fn into_record(self, sig: Signature) -> FunctionRecord {
        let simple_name = signature::simple_name(&sig.name).to_string();
        FunctionRecord {
            name: sig.name,
            simple_name,
            params_raw: sig.params_raw,
            signature_params: sig.params,
            params: self.params,
            returns: self.returns.unwrap_or_default(),
            generics: self.generics,
            description: self.description,
            notes: self.notes,
            hierarchy: Default::default(),
        }
    }
}

/// The state machine. Feed lines through [`Machine::step`].
#[derive(Debug)]
pub struct Machine {
    lookahead: usize,
    state: State,
    block: CommentBlock,
}

impl Machine {
    /// `lookahead` is the number of lines after a comment in which the
    /// signature must appear (at least 1).
    pub fn new(lookahead: usize) -> Self {
        Self {
            lookahead: lookahead.max(1),
            state: State::Idle,
            block: CommentBlock::default(),
        }
    }

    /// Advance by one source line; returns a record when a block completes.
    pub fn step(&mut self, line: &str) -> Option<FunctionRecord> {
        match self.state {
            State::Idle => {
                if is_doc_opener(line) {
                    self.open(line);
                }
                None
            }
            State::InComment => match comment_text(line) {
                Some(_) if is_doc_opener(line) && self.block.continued => {
                    self.abandon("superseded by a new doc comment");
                    self.open(line);
                    None
                }
                Some(text) => {
                    if !is_doc_opener(line) {
                        self.block.continued = true;
                    }
                    self.comment_line(text);
                    None
                }
                None => {
                    self.state = State::Lookahead {
                        remaining: self.lookahead,
                    };
                    self.step(line)
                }
            },
            State::InCodeBlock => {
                match comment_text(line) {
                    Some(text) if is_fence(text) => {
                        let code = std::mem::take(&mut self.block.code).join("\n");
                        self.block.notes.push(Note::Code(code));
                        self.state = State::InComment;
                    }
                    Some(text) => self.block.code.push(text.to_string()),
                    None => self.abandon("unterminated code fence"),
                }
                None
            }
            State::Lookahead { remaining } => {
                if is_doc_opener(line) {
                    self.abandon("superseded by a new doc comment");
                    self.open(line);
                    return None;
                }
                if let Some(sig) = signature::extract(line) {
                    let block = std::mem::take(&mut self.block);
                    self.state = State::Idle;
                    tracing::debug!(function = %sig.name, "documented function");
                    return Some(block.into_record(sig));
                }
                if line.trim().is_empty() && remaining > 1 {
                    self.state = State::Lookahead {
                        remaining: remaining - 1,
                    };
                } else {
                    self.abandon("no public signature follows");
                }
                None
            }
        }
    }

    /// Drop whatever block is pending at end of input.
    pub fn finish(mut self) {
        if self.state != State::Idle {
            self.abandon("end of input");
        }
    }

    fn open(&mut self, line: &str) {
        self.block = CommentBlock::default();
        self.state = State::InComment;
        if let Some(text) = comment_text(line) {
            self.comment_line(text);
        }
    }

    fn comment_line(&mut self, text: &str) {
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed.chars().all(|c| c == '-') {
            self.block.close_paragraph();
        } else if annotation::is_annotation(trimmed) {
            self.block.close_paragraph();
            match annotation::parse(trimmed) {
                Some(a) => self.block.annotate(a),
                None => tracing::trace!(line = trimmed, "malformed annotation dropped"),
            }
        } else if is_fence(trimmed) {
            self.block.close_paragraph();
            self.state = State::InCodeBlock;
        } else if trimmed.starts_with('@') {
            tracing::trace!(line = trimmed, "unsupported annotation ignored");
        } else {
            self.block.push_text(trimmed);
        }
    }

    fn abandon(&mut self, reason: &str) {
        tracing::trace!(reason, "doc comment abandoned");
        self.block = CommentBlock::default();
        self.state = State::Idle;
    }
}

/// `---` opens a block; `----` and longer rules do not.
fn is_doc_opener(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with("---") && !trimmed.starts_with("----")
}

/// Comment text with the dashes and one following space removed.
/// `None` for code, blank lines and `--[[` block comments.
fn comment_text(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();
    if !trimmed.starts_with("--") || trimmed.starts_with("--[[") {
        return None;
    }
    let text = trimmed.trim_start_matches('-');
    Some(text.strip_prefix(' ').unwrap_or(text))
}

fn is_fence(text: &str) -> bool {
    text.trim_start().starts_with("```")
}
