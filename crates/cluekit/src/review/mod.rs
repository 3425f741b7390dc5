//! Human review of sampled entries.
//!
//! Reviewers work through a [`ReviewQueue`] built from a review sample. Each
//! decision maps to a lifecycle status; every action except approval needs a
//! reason code.
//!
//! # Usage
//!
//! ```no_run
//! use cluekit::dataset::build_review_sample;
//! use cluekit::review::{ReasonCode, ReviewAction, ReviewDecision, ReviewQueue};
//!
//! let sample = build_review_sample("data/pilot", 500, 42).unwrap();
//! let mut queue = ReviewQueue::from_sample(&sample);
//!
//! queue.decide("en-000001", &ReviewDecision::approve()).unwrap();
//! queue
//!     .decide(
//!         "en-000002",
//!         &ReviewDecision::with_reason(ReviewAction::Reject, ReasonCode::Duplicate),
//!     )
//!     .unwrap();
//!
//! queue.save("data/review/queue.json").unwrap();
//! println!("Pending: {}", queue.pending().len());
//! ```

mod decision;
mod item;
mod persistence;
mod queue;

pub use decision::{ReasonCode, ReviewAction, ReviewDecision};
pub use item::{apply_decision, QueueItem};
pub use queue::{QueueSummary, ReviewQueue, StatusCounts, QUEUE_FORMAT_VERSION};
