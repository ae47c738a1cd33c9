//! # Vitrine
//!
//! A static site generator and interaction engine for personal portfolio
//! websites. Your filesystem is the data source: one TOML file per
//! project (ordered by numeric prefix), a profile file for identity and
//! skills, and a markdown about page.
//!
//! # Architecture: Pipeline + Engine
//!
//! Vitrine has two surfaces that share one set of types and templates:
//!
//! ```text
//! 1. Scan      content/  →  manifest.json   (filesystem → structured data)
//! 2. Generate  manifest  →  dist/           (entrance + portfolio HTML)
//!
//!    Engine    manifest + live page → reactive behavior (library only)
//! ```
//!
//! The build pipeline mirrors a classic two-stage static generator: a
//! scan stage that validates content into a JSON manifest you can
//! inspect, and a generate stage that renders it to plain HTML with
//! inline CSS. The interaction engine is the runtime half: every dynamic
//! behavior of the portfolio — project filtering, contact-form
//! validation, scroll-spy, reveal animations, the entrance typing loop —
//! implemented as explicit state machines over an injected page handle
//! and a deterministic timer scheduler.
//!
//! This split exists for three reasons:
//!
//! - **Debuggability**: the manifest is human-readable JSON.
//! - **Testability**: the engine never reads the clock or touches a real
//!   DOM, so every timer and every edit is deterministic under test.
//! - **No drift**: the generator's initial project grid and the engine's
//!   re-rendered one come from the same maud functions.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`catalog`] | Stage 1 — scans the content directory into the manifest |
//! | [`generate`] | Stage 2 — renders the static site from the manifest using Maud |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS generation |
//! | [`markup`] | Maud components shared by the generator and the engine |
//! | [`page`] | The injected page handle the engine operates on |
//! | [`ui`] | The interaction engine: managers, scheduler, events |
//! | [`output`] | CLI output formatting — entity trees for pipeline results |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a
//! compile-time HTML macro system. Malformed HTML is a build error,
//! template variables are Rust expressions, and all interpolation is
//! auto-escaped — the same escaper doubles as the form's submission
//! sanitizer.
//!
//! ## An Injected Page, Not a DOM
//!
//! The engine addresses the page through the [`page::Page`] trait:
//! explicit element ids, explicit absence (operations on missing
//! elements are no-ops that report the miss), reads as snapshots. An
//! embedder maps the handle onto a live page; the test suite maps it
//! onto a recording double. Nothing in the engine knows which one it is
//! talking to.
//!
//! ## Deterministic Time
//!
//! All delayed behavior — typing ticks, notification auto-dismiss,
//! debounced resizes, the simulated submission latency — goes through
//! one scheduler keyed by monotonic deadlines that the embedder feeds.
//! The engine never calls the clock, which is what makes properties like
//! "rapid resizes rebuild the particle field exactly once" testable as
//! plain assertions.
//!
//! ## Pluggable Submission
//!
//! There is no backend. The contact form validates, sanitizes, and hands
//! the payload to a [`ui::form::Submitter`]; the stock implementation
//! simulates a fixed round trip and succeeds. Swapping in a real
//! transport touches zero validation code.
//!
//! ## NNN-Prefix Ordering
//!
//! Project files use a numeric prefix (`010-`, `020-`) for explicit
//! catalog order, parsed by [`catalog::parse_order_prefix`]. Files
//! without a prefix are drafts and stay out of the catalog. The
//! filesystem is the source of truth; no database, no front-matter
//! ordering key.

pub mod catalog;
pub mod config;
pub mod generate;
pub mod markup;
pub mod output;
pub mod page;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_helpers;
