//! Core library for the regx-report command line application.
//!
//! The library turns a before/after metrics export into an annotated
//! comparison workbook. Input adapters live under [`regx::report::io`], the
//! table representations inside [`regx::report::model`], the pivot logic in
//! [`regx::report::reshape`], and the end-to-end orchestration under
//! [`regx::report::pipeline`].

pub mod regx;

pub use regx::report::{
    Result, ToolError, config, error, highlight, io, model, pipeline, reference, reshape,
};
