//! Step sequence playback

use super::AlgorithmStep;

/// Holds the ordered, finite step sequence and the current index.
///
/// The steps themselves are never mutated; the player only changes *which*
/// step is current. `current` is `None` until the user starts playback,
/// which is when the panel shows its start prompt instead of a step.
#[derive(Debug)]
pub struct StepPlayer {
    steps: Vec<AlgorithmStep>,
    current: Option<usize>,
}

impl StepPlayer {
    pub fn new(steps: Vec<AlgorithmStep>) -> Self {
        StepPlayer {
            steps,
            current: None,
        }
    }

    /// Begin playback at the first step. Returns false on an empty sequence.
    pub fn start(&mut self) -> bool {
        if self.steps.is_empty() {
            return false;
        }
        self.current = Some(0);
        true
    }

    /// Advance one step, starting playback if it has not started yet.
    /// Returns false when already at the last step (or the sequence is empty).
    pub fn step_forward(&mut self) -> bool {
        match self.current {
            None => self.start(),
            Some(i) if i + 1 < self.steps.len() => {
                self.current = Some(i + 1);
                true
            }
            Some(_) => false,
        }
    }

    /// Go back one step. Returns false at the first step or before start.
    pub fn step_backward(&mut self) -> bool {
        match self.current {
            Some(i) if i > 0 => {
                self.current = Some(i - 1);
                true
            }
            _ => false,
        }
    }

    /// Jump back to the first step (keeps playback started).
    pub fn restart(&mut self) -> bool {
        self.start()
    }

    /// Jump to the last step. Returns false on an empty sequence.
    pub fn jump_to_end(&mut self) -> bool {
        if self.steps.is_empty() {
            return false;
        }
        self.current = Some(self.steps.len() - 1);
        true
    }

    pub fn current(&self) -> Option<&AlgorithmStep> {
        self.current.and_then(|i| self.steps.get(i))
    }

    pub fn position(&self) -> Option<usize> {
        self.current
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn started(&self) -> bool {
        self.current.is_some()
    }

    pub fn at_end(&self) -> bool {
        self.current
            .is_some_and(|i| i + 1 >= self.steps.len())
    }
}
