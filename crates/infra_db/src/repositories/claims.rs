//! Claims repository implementation
//!
//! This module provides database access for claim records stored in the
//! `claims` table, including the soft-delete filters and substring search.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::debug;

use core_kernel::ClaimId;
use domain_claims::{Claim, SearchScope};

use crate::error::DatabaseError;

const SELECT_BY_ID: &str = r#"
    SELECT id, claim_number, policyholder_name, policy_number, claim_type, amount,
           description, incident_date, claim_date, status, is_fraudulent, fraud_reason, deleted_at
    FROM claims
    WHERE id = $1
"#;

const SELECT_BY_CLAIM_NUMBER: &str = r#"
    SELECT id, claim_number, policyholder_name, policy_number, claim_type, amount,
           description, incident_date, claim_date, status, is_fraudulent, fraud_reason, deleted_at
    FROM claims
    WHERE claim_number = $1
"#;

const SELECT_ACTIVE: &str = r#"
    SELECT id, claim_number, policyholder_name, policy_number, claim_type, amount,
           description, incident_date, claim_date, status, is_fraudulent, fraud_reason, deleted_at
    FROM claims
    WHERE deleted_at IS NULL
    ORDER BY id
"#;

const SELECT_ACTIVE_FRAUDULENT: &str = r#"
    SELECT id, claim_number, policyholder_name, policy_number, claim_type, amount,
           description, incident_date, claim_date, status, is_fraudulent, fraud_reason, deleted_at
    FROM claims
    WHERE deleted_at IS NULL AND is_fraudulent = TRUE
    ORDER BY id
"#;

const SELECT_DELETED: &str = r#"
    SELECT id, claim_number, policyholder_name, policy_number, claim_type, amount,
           description, incident_date, claim_date, status, is_fraudulent, fraud_reason, deleted_at
    FROM claims
    WHERE deleted_at IS NOT NULL
    ORDER BY id
"#;

// Pattern and columns are both folded by PostgreSQL's LOWER.
const SEARCH_ACTIVE: &str = r#"
    SELECT id, claim_number, policyholder_name, policy_number, claim_type, amount,
           description, incident_date, claim_date, status, is_fraudulent, fraud_reason, deleted_at
    FROM claims
    WHERE deleted_at IS NULL
      AND (LOWER(claim_number) LIKE LOWER($1) ESCAPE '\'
        OR LOWER(policyholder_name) LIKE LOWER($1) ESCAPE '\'
        OR LOWER(policy_number) LIKE LOWER($1) ESCAPE '\')
    ORDER BY id
"#;

const SEARCH_DELETED: &str = r#"
    SELECT id, claim_number, policyholder_name, policy_number, claim_type, amount,
           description, incident_date, claim_date, status, is_fraudulent, fraud_reason, deleted_at
    FROM claims
    WHERE deleted_at IS NOT NULL
      AND (LOWER(claim_number) LIKE LOWER($1) ESCAPE '\'
        OR LOWER(policyholder_name) LIKE LOWER($1) ESCAPE '\'
        OR LOWER(policy_number) LIKE LOWER($1) ESCAPE '\')
    ORDER BY id
"#;

const INSERT_CLAIM: &str = r#"
    INSERT INTO claims (
        claim_number, policyholder_name, policy_number, claim_type,
        amount, description, incident_date, claim_date, status,
        is_fraudulent, fraud_reason, deleted_at
    ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
    RETURNING id, claim_number, policyholder_name, policy_number, claim_type, amount,
              description, incident_date, claim_date, status, is_fraudulent, fraud_reason, deleted_at
"#;

const REPLACE_CLAIM: &str = r#"
    UPDATE claims
    SET claim_number = $2,
        policyholder_name = $3,
        policy_number = $4,
        claim_type = $5,
        amount = $6,
        description = $7,
        incident_date = $8,
        claim_date = $9,
        status = $10,
        is_fraudulent = $11,
        fraud_reason = $12,
        deleted_at = $13
    WHERE id = $1
    RETURNING id, claim_number, policyholder_name, policy_number, claim_type, amount,
              description, incident_date, claim_date, status, is_fraudulent, fraud_reason, deleted_at
"#;

/// Repository for managing claim rows
#[derive(Debug, Clone)]
pub struct ClaimsRepository {
    pool: PgPool,
}

impl ClaimsRepository {
    /// Creates a new ClaimsRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Retrieves a claim by identity, regardless of lifecycle state
    pub async fn get_by_id(&self, id: ClaimId) -> Result<Option<ClaimRow>, DatabaseError> {
        let row = sqlx::query_as::<_, ClaimRow>(SELECT_BY_ID)
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    /// Retrieves a claim by exact claim number
    pub async fn get_by_claim_number(&self, claim_number: &str) -> Result<Option<ClaimRow>, DatabaseError> {
        let row = sqlx::query_as::<_, ClaimRow>(SELECT_BY_CLAIM_NUMBER)
            .bind(claim_number)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    /// Lists claims that have not been soft-deleted
    pub async fn find_active(&self) -> Result<Vec<ClaimRow>, DatabaseError> {
        self.fetch_list(SELECT_ACTIVE).await
    }

    /// Lists active claims whose fraud flag is true
    pub async fn find_active_fraudulent(&self) -> Result<Vec<ClaimRow>, DatabaseError> {
        self.fetch_list(SELECT_ACTIVE_FRAUDULENT).await
    }

    /// Lists soft-deleted claims
    pub async fn find_deleted(&self) -> Result<Vec<ClaimRow>, DatabaseError> {
        self.fetch_list(SELECT_DELETED).await
    }

    /// Case-insensitive substring search over claim number, policyholder
    /// name, and policy number, restricted to one lifecycle state
    pub async fn search(&self, query: &str, scope: SearchScope) -> Result<Vec<ClaimRow>, DatabaseError> {
        let pattern = contains_pattern(query);
        debug!(%pattern, ?scope, "Searching claims");

        let rows = sqlx::query_as::<_, ClaimRow>(search_statement(scope))
            .bind(pattern)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    /// Inserts a new claim row and returns it with its assigned identity
    pub async fn insert(&self, claim: &Claim) -> Result<ClaimRow, DatabaseError> {
        let row = sqlx::query_as::<_, ClaimRow>(INSERT_CLAIM)
            .bind(&claim.claim_number)
            .bind(&claim.policyholder_name)
            .bind(&claim.policy_number)
            .bind(&claim.claim_type)
            .bind(claim.amount)
            .bind(&claim.description)
            .bind(claim.incident_date)
            .bind(claim.claim_date)
            .bind(&claim.status)
            .bind(claim.is_fraudulent)
            .bind(&claim.fraud_reason)
            .bind(claim.deleted_at)
            .fetch_one(&self.pool)
            .await?;

        Ok(row)
    }

    /// Replaces every column of an existing claim row
    ///
    /// # Returns
    ///
    /// The updated row, or `None` if no row has the given identity
    pub async fn replace(&self, id: ClaimId, claim: &Claim) -> Result<Option<ClaimRow>, DatabaseError> {
        let row = sqlx::query_as::<_, ClaimRow>(REPLACE_CLAIM)
            .bind(id.value())
            .bind(&claim.claim_number)
            .bind(&claim.policyholder_name)
            .bind(&claim.policy_number)
            .bind(&claim.claim_type)
            .bind(claim.amount)
            .bind(&claim.description)
            .bind(claim.incident_date)
            .bind(claim.claim_date)
            .bind(&claim.status)
            .bind(claim.is_fraudulent)
            .bind(&claim.fraud_reason)
            .bind(claim.deleted_at)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    async fn fetch_list(&self, sql: &'static str) -> Result<Vec<ClaimRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, ClaimRow>(sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }
}

fn search_statement(scope: SearchScope) -> &'static str {
    match scope {
        SearchScope::Active => SEARCH_ACTIVE,
        SearchScope::Deleted => SEARCH_DELETED,
    }
}

/// Builds a LIKE pattern matching the query literally anywhere in a column
///
/// Case is left alone; the statement folds both sides with `LOWER`.
pub fn contains_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for ch in query.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

/// Database row for claim
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ClaimRow {
    pub id: i64,
    pub claim_number: Option<String>,
    pub policyholder_name: Option<String>,
    pub policy_number: Option<String>,
    pub claim_type: Option<String>,
    pub amount: Option<Decimal>,
    pub description: Option<String>,
    pub incident_date: Option<NaiveDateTime>,
    pub claim_date: Option<NaiveDateTime>,
    pub status: Option<String>,
    pub is_fraudulent: Option<bool>,
    pub fraud_reason: Option<String>,
    pub deleted_at: Option<NaiveDateTime>,
}

impl From<ClaimRow> for Claim {
    fn from(row: ClaimRow) -> Self {
        Claim {
            id: Some(ClaimId::new(row.id)),
            claim_number: row.claim_number,
            policyholder_name: row.policyholder_name,
            policy_number: row.policy_number,
            claim_type: row.claim_type,
            amount: row.amount,
            description: row.description,
            incident_date: row.incident_date,
            claim_date: row.claim_date,
            status: row.status,
            is_fraudulent: row.is_fraudulent,
            fraud_reason: row.fraud_reason,
            deleted_at: row.deleted_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_pattern_leaves_case_to_the_database() {
        assert_eq!(contains_pattern("Jane"), "%Jane%");
        assert_eq!(contains_pattern("İSTANBUL"), "%İSTANBUL%");
        assert_eq!(contains_pattern(""), "%%");
    }

    #[test]
    fn test_search_folds_pattern_in_sql() {
        for scope in [SearchScope::Active, SearchScope::Deleted] {
            let sql = search_statement(scope);
            assert_eq!(sql.matches("LIKE LOWER($1) ESCAPE").count(), 3);
        }
        assert!(SEARCH_ACTIVE.contains("deleted_at IS NULL"));
        assert!(SEARCH_DELETED.contains("deleted_at IS NOT NULL"));
    }

    #[test]
    fn test_contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(contains_pattern("a\\b"), "%a\\\\b%");
    }

    #[test]
    fn test_row_conversion_assigns_identity() {
        let row = ClaimRow {
            id: 7,
            claim_number: Some("CLM-7".to_string()),
            policyholder_name: None,
            policy_number: None,
            claim_type: None,
            amount: None,
            description: None,
            incident_date: None,
            claim_date: None,
            status: Some("PENDING".to_string()),
            is_fraudulent: None,
            fraud_reason: None,
            deleted_at: None,
        };

        let claim = Claim::from(row);
        assert_eq!(claim.id, Some(ClaimId::new(7)));
        assert_eq!(claim.claim_number.as_deref(), Some("CLM-7"));
        assert!(claim.is_active());
    }
}
