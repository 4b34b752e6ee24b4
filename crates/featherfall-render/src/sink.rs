//! The draw sink capability: where instructions go to be rasterized.

use crate::instruction::DrawInstruction;
use crate::passes::RenderPass;

/// Executes draw instructions against a real graphics backend.
///
/// The frame renderer calls `begin_pass`, then `draw` for each instruction of
/// the pass in order, then `end_pass`. A sink typically sets the projection
/// matrix and begins its sprite batch in `begin_pass` and flushes in
/// `end_pass`.
pub trait DrawSink {
    fn begin_pass(&mut self, pass: RenderPass);
    fn draw(&mut self, instruction: &DrawInstruction);
    fn end_pass(&mut self, pass: RenderPass);
}

/// A sink that keeps every instruction, grouped by pass.
///
/// Used by tests and headless tools to inspect exactly what a frame asked
/// the engine to draw.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    passes: Vec<(RenderPass, Vec<DrawInstruction>)>,
    open: Option<RenderPass>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Passes recorded so far, in execution order.
    pub fn passes(&self) -> &[(RenderPass, Vec<DrawInstruction>)] {
        &self.passes
    }

    /// Instructions of the first recorded occurrence of `pass`.
    pub fn instructions(&self, pass: RenderPass) -> Option<&[DrawInstruction]> {
        self.passes
            .iter()
            .find(|(p, _)| *p == pass)
            .map(|(_, instructions)| instructions.as_slice())
    }

    /// Total instructions across all passes.
    pub fn instruction_count(&self) -> usize {
        self.passes.iter().map(|(_, i)| i.len()).sum()
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.passes.clear();
        self.open = None;
    }
}

impl DrawSink for RecordingSink {
    fn begin_pass(&mut self, pass: RenderPass) {
        debug_assert!(
            self.open.is_none(),
            "begin_pass({pass}) while pass {:?} is still open",
            self.open
        );
        self.open = Some(pass);
        self.passes.push((pass, Vec::new()));
    }

    fn draw(&mut self, instruction: &DrawInstruction) {
        debug_assert!(self.open.is_some(), "draw outside of a pass");
        if let Some((_, instructions)) = self.passes.last_mut() {
            instructions.push(instruction.clone());
        }
    }

    fn end_pass(&mut self, pass: RenderPass) {
        debug_assert_eq!(self.open, Some(pass), "end_pass does not match begin_pass");
        self.open = None;
    }
}
