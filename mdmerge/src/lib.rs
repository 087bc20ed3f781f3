//! # mdmerge
//!
//! The `mdmerge` library reconstructs a markdown document from the
//! geometrically structured, per-page text blocks produced by a document
//! layout / OCR stage.
//!
//! The pipeline merges recognized spans into lines (inserting emphasis
//! markers), folds lines into coherent blocks with hyphenation repair and
//! sentence-boundary heuristics, applies type-specific markdown formatting,
//! and assembles the finalized blocks into a single document string.
//!
//! ## Quick Start
//!
//! ```rust
//! use mdmerge::config::MergeConfig;
//! use mdmerge::models::{BBox, Block, BlockType, Line, Page};
//! use mdmerge::pipeline::reconstruct;
//!
//! let bbox = BBox::new(10.0, 10.0, 200.0, 30.0);
//! let mut line = Line::new(bbox);
//! line.add_span("hello world", "Times-Bold", true, false);
//! let mut block = Block::new(BlockType::Title, bbox, 0);
//! block.lines.push(line);
//! let mut page = Page::new(0);
//! page.blocks.push(block);
//!
//! let config = MergeConfig::new();
//! let (blocks, markdown) = reconstruct(&[page], &config);
//! assert_eq!(markdown, "# Hello World\n");
//! assert_eq!(blocks[0].id, "2|-final");
//! ```
//!
//! Pages can also be read from the upstream stage's JSON with
//! [`pipeline::pages_from_json`], and the finalized block records (text,
//! type, bounding box, page-end flag, identifier) serialized back out with
//! [`pipeline::blocks2json`] for consumers that need per-block structure.
//!
//! ## Tests
//!
//! The library includes a set of tests to ensure its functionality. To run
//! the tests, use the following command:
//!
//! ```sh
//! cargo test
//! ```

pub mod accumulator;
pub mod assembler;
pub mod config;
pub mod formatter;
pub mod joiner;
pub mod merger;
pub mod models;
pub mod pipeline;
pub mod test_utils;
