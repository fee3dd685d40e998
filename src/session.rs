//! Conversion session: collect, transform, retain
//!
//! A session holds the inputs collected for one coordinate system and the
//! converted outputs for the duration of a run.

use log::debug;

use crate::coordinate::{Coordinate, CoordinateKind};

/// Convert every coordinate into its opposite system
///
/// Makes one conversion call per item; `output[i]` always corresponds to
/// `inputs[i]`.
pub fn transform_coordinates(inputs: &[Coordinate]) -> Vec<Coordinate> {
    inputs.iter().map(Coordinate::convert).collect()
}

/// Inputs of a single coordinate system and their converted outputs
#[derive(Debug, Clone)]
pub struct ConversionSession {
    kind: CoordinateKind,
    inputs: Vec<Coordinate>,
    outputs: Vec<Coordinate>,
}

impl ConversionSession {
    /// Create an empty session for the given input system
    pub fn new(kind: CoordinateKind) -> Self {
        ConversionSession {
            kind,
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    /// Input coordinate system of this session
    pub fn kind(&self) -> CoordinateKind {
        self.kind
    }

    /// Record a numeric pair as a coordinate of the session's system
    pub fn add_pair(&mut self, first: f64, second: f64) {
        let coord = Coordinate::from_pair(self.kind, first, second);
        debug!("Collected {} coordinate #{}: {}", self.kind, self.inputs.len() + 1, coord);
        self.inputs.push(coord);
    }

    /// Convert all collected inputs, replacing any previous outputs
    pub fn transform(&mut self) -> &[Coordinate] {
        self.outputs = transform_coordinates(&self.inputs);
        debug!("Converted {} {} coordinate(s) to {}",
               self.outputs.len(), self.kind, self.kind.opposite());
        &self.outputs
    }

    /// Collected inputs, in collection order
    pub fn inputs(&self) -> &[Coordinate] {
        &self.inputs
    }

    /// Outputs of the last [`transform`](Self::transform)
    pub fn outputs(&self) -> &[Coordinate] {
        &self.outputs
    }

    /// Input/output pairs of the last transform
    pub fn results(&self) -> impl Iterator<Item = (&Coordinate, &Coordinate)> {
        self.inputs.iter().zip(self.outputs.iter())
    }

    /// Number of collected inputs
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    /// Whether no inputs have been collected
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}
