// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! lg-core: issue-to-timeline pipeline for labgantt
//!
//! This crate turns GitLab issues into Gantt timeline entries: it reads
//! scheduling metadata embedded in descriptions, filters issues by status
//! and milestone, normalizes dates, and orders the result by up to two
//! sort keys. Every stage is a pure function of its inputs; the current
//! date comes from an injected [`Clock`].

pub mod clock;
pub mod date;
pub mod draft;
pub mod error;
pub mod filter;
pub mod frontmatter;
pub mod issue;
pub mod pipeline;
pub mod sort;
pub mod timeline;

pub use clock::{Clock, FixedClock, SystemClock};
pub use date::{format_date, parse_date};
pub use draft::{CreateIssueRequest, IssueDraft};
pub use error::{Error, Result};
pub use filter::{filter_issues, ViewFilter};
pub use frontmatter::{extract, EmbeddedMetadata, FrontMatter, MetaValue};
pub use issue::{Milestone, RawIssue};
pub use pipeline::{build_timeline, ViewOptions};
pub use sort::{sort_entries, Direction, SortField, SortKey, SortSpec, StoredSortField};
pub use timeline::{normalize, TimelineEntry};
