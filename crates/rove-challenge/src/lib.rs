//! Seeded navigation-challenge generation and reward scoring.
//!
//! A [`NavigationChallenge`] is a `(start, target object, optimal
//! solution)` tuple guaranteed solvable at creation time: the generator
//! only ever emits targets it has already pathed to. Scoring grades an
//! arbitrary attempt against the challenge — full-credit efficiency for
//! rule-respecting attempts, fractional cross-score progress credit for
//! attempts that broke a rule on the way.
//!
//! Selection is driven by an explicit [`rand_chacha`] generator seeded per
//! call, so identical snapshot + identical seed always reproduce the
//! identical challenge, and parallel generation against different
//! snapshots cannot interfere through shared RNG state.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod generate;
pub mod score;
pub mod task;

pub use generate::{ChallengeGenerator, NavigationChallenge};
pub use score::{score_attempt, RewardResult};
pub use task::NavigationTask;
