use async_trait::async_trait;
use serde::Serialize;

use super::violation::{Conflict, FieldError, UniqueClaim, UniqueField};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

/// Failures raised by a store adapter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// A unique index rejected the write (lost race between check and write).
    #[error("Unique constraint violated on {0}")]
    UniqueViolation(UniqueField),

    /// A stored value could not be mapped onto the domain (e.g. unknown enum code).
    #[error("Invalid row: {0}")]
    InvalidRow(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// Outcome taxonomy shared by every guarded create and patch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GuardError {
    #[error("Record not found")]
    NotFound,

    #[error("Validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("Uniqueness conflict on {} field(s)", .0.len())]
    Conflict(Vec<Conflict>),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for GuardError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::UniqueViolation(field) => GuardError::Conflict(vec![Conflict {
                field,
                value: String::new(),
                owner_id: None,
            }]),
            other => GuardError::Internal(other.to_string()),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Plans
// ──────────────────────────────────────────────────────────
//

/// A partial update for rows of type `R`.
pub trait PatchPlan<R>: Send + Sync {
    /// Canonical form: trimmed strings, blank strings dropped.
    fn normalize(self) -> Self
    where
        Self: Sized;

    /// Names of the fields this patch writes, in declaration order.
    fn present_fields(&self) -> Vec<&'static str>;

    /// Format and range checks against the row the patch will land on.
    fn validate(&self, current: &R) -> Vec<FieldError>;

    fn unique_claims(&self) -> Vec<UniqueClaim> {
        Vec::new()
    }

    /// Overwrites exactly the present fields of `row`.
    fn apply_to(&self, row: &mut R);
}

/// Input for a new row.
pub trait CreatePlan: Send + Sync {
    fn validate(&self) -> Vec<FieldError>;

    fn unique_claims(&self) -> Vec<UniqueClaim> {
        Vec::new()
    }
}

//
// ──────────────────────────────────────────────────────────
// Store ports
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UniqueLookup: Send + Sync {
    /// Id of the row currently holding `value` in `field`.
    /// Stores without unique columns keep the default.
    async fn owner_of(&self, _field: UniqueField, _value: &str) -> Result<Option<i32>, StoreError> {
        Ok(None)
    }
}

#[async_trait]
pub trait PatchStore<P>: UniqueLookup
where
    P: Send + Sync + 'static,
{
    type Row: Clone + Send + Sync;

    /// Live row by primary key.
    async fn fetch(&self, id: i32) -> Result<Option<Self::Row>, StoreError>;

    /// Foreign-key style checks that need the store (e.g. "approver exists").
    async fn check_references(&self, _patch: &P) -> Result<Vec<FieldError>, StoreError> {
        Ok(Vec::new())
    }

    /// Writes the present columns; returns the affected row count.
    async fn apply(&self, id: i32, patch: &P) -> Result<u64, StoreError>;
}

//
// ──────────────────────────────────────────────────────────
// Results
// ──────────────────────────────────────────────────────────
//

/// A patch that passed Fetch and Validate and may be committed.
#[derive(Debug, Clone)]
pub struct CheckedPatch<R, P> {
    pub id: i32,
    pub current: R,
    pub patch: P,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PatchOutcome<R> {
    pub id: i32,
    /// Fetched row with the patch applied.
    pub row: R,
    pub affected_rows: u64,
    pub updated_fields: Vec<&'static str>,
}

impl<R> PatchOutcome<R> {
    pub fn summary(&self) -> PatchSummary {
        PatchSummary {
            id: self.id,
            affected_rows: self.affected_rows,
            updated_fields: self.updated_fields.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchSummary {
    pub id: i32,
    pub affected_rows: u64,
    pub updated_fields: Vec<&'static str>,
}

//
// ──────────────────────────────────────────────────────────
// Orchestration
// ──────────────────────────────────────────────────────────
//

/// Collects every claim already held by a row other than `exclude`.
pub async fn check_unique<L>(
    lookup: &L,
    claims: &[UniqueClaim],
    exclude: Option<i32>,
) -> Result<Vec<Conflict>, StoreError>
where
    L: UniqueLookup + ?Sized,
{
    let mut conflicts = Vec::new();

    for claim in claims {
        if let Some(owner) = lookup.owner_of(claim.field, &claim.value).await? {
            if Some(owner) != exclude {
                conflicts.push(Conflict {
                    field: claim.field,
                    value: claim.value.clone(),
                    owner_id: Some(owner),
                });
            }
        }
    }

    Ok(conflicts)
}

/// Validate stage of a create: format, then references, then uniqueness.
pub async fn guard_create<L, C>(
    lookup: &L,
    plan: &C,
    reference_errors: Vec<FieldError>,
) -> Result<(), GuardError>
where
    L: UniqueLookup + ?Sized,
    C: CreatePlan,
{
    let mut errors = plan.validate();
    errors.extend(reference_errors);
    if !errors.is_empty() {
        return Err(GuardError::Validation(errors));
    }

    let conflicts = check_unique(lookup, &plan.unique_claims(), None).await?;
    if !conflicts.is_empty() {
        return Err(GuardError::Conflict(conflicts));
    }

    Ok(())
}

/// Fetch and Validate stages of a patch.
pub async fn check_patch<S, P>(
    store: &S,
    id: i32,
    patch: P,
) -> Result<CheckedPatch<S::Row, P>, GuardError>
where
    S: PatchStore<P> + ?Sized,
    P: PatchPlan<S::Row> + 'static,
{
    let current = store.fetch(id).await?.ok_or(GuardError::NotFound)?;
    let patch = patch.normalize();

    let mut errors = patch.validate(&current);
    errors.extend(store.check_references(&patch).await?);
    if !errors.is_empty() {
        return Err(GuardError::Validation(errors));
    }

    let conflicts = check_unique(store, &patch.unique_claims(), Some(id)).await?;
    if !conflicts.is_empty() {
        return Err(GuardError::Conflict(conflicts));
    }

    Ok(CheckedPatch { id, current, patch })
}

/// Apply stage. An empty patch commits nothing and still succeeds.
pub async fn commit_patch<S, P>(
    store: &S,
    checked: CheckedPatch<S::Row, P>,
) -> Result<PatchOutcome<S::Row>, GuardError>
where
    S: PatchStore<P> + ?Sized,
    P: PatchPlan<S::Row> + 'static,
{
    let CheckedPatch {
        id,
        mut current,
        patch,
    } = checked;

    let updated_fields = patch.present_fields();
    if updated_fields.is_empty() {
        return Ok(PatchOutcome {
            id,
            row: current,
            affected_rows: 0,
            updated_fields,
        });
    }

    let affected_rows = store.apply(id, &patch).await?;
    if affected_rows == 0 {
        // Row vanished between Fetch and Apply.
        return Err(GuardError::NotFound);
    }

    patch.apply_to(&mut current);

    Ok(PatchOutcome {
        id,
        row: current,
        affected_rows,
        updated_fields,
    })
}

pub async fn guarded_patch<S, P>(
    store: &S,
    id: i32,
    patch: P,
) -> Result<PatchOutcome<S::Row>, GuardError>
where
    S: PatchStore<P> + ?Sized,
    P: PatchPlan<S::Row> + 'static,
{
    let checked = check_patch(store, id, patch).await?;
    commit_patch(store, checked).await
}
