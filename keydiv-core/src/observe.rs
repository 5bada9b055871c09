//! Diagnostic observation of intermediate derivation material.
//!
//! The derivation engine is a pure function; everything it would ever log is
//! pushed through this injectable observer instead of a hard logging
//! dependency. Ambient `tracing` events emitted by the engine itself carry
//! algorithm names and buffer lengths only — raw key material crosses this
//! boundary exclusively, and only when the embedder opts in.

use keydiv_primitives::bytes;
use tracing::debug;

/// Receives intermediate and final key material during one derivation call.
///
/// All callbacks default to no-ops; the engine never reads anything back, so
/// implementations cannot influence the derivation result.
pub trait DerivationObserver {
    /// The diversification input M (or the AN0148 base block) once built.
    fn on_diversification_input(&mut self, _input: &[u8]) {}

    /// The encrypted zero block L and the CMAC subkeys K1, K2 (AN10922 only).
    fn on_subkeys(&mut self, _l: &[u8], _k1: &[u8], _k2: &[u8]) {}

    /// The output of one CMAC pass (AN10922-AES192 runs two passes).
    fn on_pass_output(&mut self, _pass: u8, _output: &[u8]) {}

    /// The final derived key, before it is handed back to the caller.
    fn on_derived_key(&mut self, _key: &[u8]) {}
}

/// The default observer: ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl DerivationObserver for NoopObserver {}

/// An observer that emits intermediate material as `tracing` debug events.
///
/// Key material is logged in the clear; enable this only in environments
/// where the trace output is as protected as the keys themselves.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl DerivationObserver for TracingObserver {
    fn on_diversification_input(&mut self, input: &[u8]) {
        debug!(m = %bytes::format_hex(input, ' '), "diversification input");
    }

    fn on_subkeys(&mut self, l: &[u8], k1: &[u8], k2: &[u8]) {
        debug!(
            l = %bytes::format_hex(l, ' '),
            k1 = %bytes::format_hex(k1, ' '),
            k2 = %bytes::format_hex(k2, ' '),
            "cmac subkeys"
        );
    }

    fn on_pass_output(&mut self, pass: u8, output: &[u8]) {
        debug!(pass, output = %bytes::format_hex(output, ' '), "cmac pass output");
    }

    fn on_derived_key(&mut self, key: &[u8]) {
        debug!(derived = %bytes::format_hex(key, ' '), "derived key");
    }
}

/// Observer used by unit tests to capture what the engine reports.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingObserver {
    pub(crate) inputs: Vec<Vec<u8>>,
    pub(crate) subkey_sets: Vec<(Vec<u8>, Vec<u8>, Vec<u8>)>,
    pub(crate) pass_outputs: Vec<(u8, Vec<u8>)>,
    pub(crate) derived: Vec<Vec<u8>>,
}

#[cfg(test)]
impl DerivationObserver for RecordingObserver {
    fn on_diversification_input(&mut self, input: &[u8]) {
        self.inputs.push(input.to_vec());
    }

    fn on_subkeys(&mut self, l: &[u8], k1: &[u8], k2: &[u8]) {
        self.subkey_sets.push((l.to_vec(), k1.to_vec(), k2.to_vec()));
    }

    fn on_pass_output(&mut self, pass: u8, output: &[u8]) {
        self.pass_outputs.push((pass, output.to_vec()));
    }

    fn on_derived_key(&mut self, key: &[u8]) {
        self.derived.push(key.to_vec());
    }
}
