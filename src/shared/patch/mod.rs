//! Partial-update and uniqueness guard shared by every mutable resource.
//!
//! A patch moves through `Fetch -> Validate -> Apply`:
//! - Fetch: a missing row ends with [`GuardError::NotFound`];
//! - Validate: format and reference checks, then uniqueness, each stage
//!   collecting every violation before rejecting;
//! - Apply: only present fields are written, and an empty patch is a no-op.

mod field;
mod guard;
mod violation;

pub use field::PatchField;
pub use guard::{
    check_patch, check_unique, commit_patch, guard_create, guarded_patch, CheckedPatch,
    CreatePlan, GuardError, PatchOutcome, PatchPlan, PatchStore, StoreError,
    UniqueLookup,
};
pub use violation::{Conflict, FieldError, UniqueClaim, UniqueField};
