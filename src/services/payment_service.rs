use crate::error::{AppError, AppResult};
use crate::models::Balance;
use crate::repositories::{AccessRepository, CourseRepository, UserRepository};
use crate::services::GroupService;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

/// Outcome of a settlement attempt. Every rejection is an expected,
/// user-facing reason; infrastructure failures travel as `Err` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SettleOutcome {
    Success,
    AlreadyPurchased,
    NotAvailable,
    InvalidPrice,
    InsufficientBalance,
}

impl SettleOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SettleOutcome::Success)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SettleOutcome::Success => "success",
            SettleOutcome::AlreadyPurchased => "already-purchased",
            SettleOutcome::NotAvailable => "not-available",
            SettleOutcome::InvalidPrice => "invalid-price",
            SettleOutcome::InsufficientBalance => "insufficient-balance",
        }
    }
}

/// Service for settling course purchases against user balances.
///
/// The check-then-debit section runs as one transaction holding a row lock
/// on the buyer's balance, so concurrent settlements for the same user
/// serialize and can never drive the balance below zero.
pub struct PaymentService {
    pool: PgPool,
    course_repo: Arc<CourseRepository>,
    user_repo: Arc<UserRepository>,
    access_repo: Arc<AccessRepository>,
    group_service: Arc<GroupService>,
}

impl PaymentService {
    pub fn new(
        pool: PgPool,
        course_repo: Arc<CourseRepository>,
        user_repo: Arc<UserRepository>,
        access_repo: Arc<AccessRepository>,
        group_service: Arc<GroupService>,
    ) -> Self {
        Self {
            pool,
            course_repo,
            user_repo,
            access_repo,
            group_service,
        }
    }

    /// Settle a purchase: validate, debit the balance and grant access as a
    /// single all-or-nothing operation, then hand the buyer to group
    /// assignment.
    ///
    /// Rejections leave no side effects. Group assignment runs strictly
    /// after commit; its failure never rolls back the payment.
    pub async fn settle(&self, user_id: Uuid, course_id: Uuid) -> AppResult<SettleOutcome> {
        let course = self
            .course_repo
            .find_by_id(course_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Course {} not found", course_id)))?;

        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

        if self.access_repo.exists(user_id, course_id).await? {
            info!(%user_id, %course_id, "settlement rejected: already purchased");
            return Ok(SettleOutcome::AlreadyPurchased);
        }

        if !course.is_available() {
            info!(%user_id, %course_id, "settlement rejected: course not yet available");
            return Ok(SettleOutcome::NotAvailable);
        }

        if course.price <= Decimal::ZERO {
            info!(%user_id, %course_id, "settlement rejected: course is not purchasable");
            return Ok(SettleOutcome::InvalidPrice);
        }

        let mut tx = self.pool.begin().await?;

        // Lock the buyer's balance row for the whole check-then-debit
        // section; concurrent settlements for this user queue up here.
        let balance = sqlx::query_as::<_, Balance>(
            r#"
            SELECT user_id, amount, updated_at
            FROM balances
            WHERE user_id = $1
            FOR UPDATE
            "#,
        )
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Balance for user {} not found", user_id)))?;

        if !balance.covers(course.price) {
            tx.rollback().await?;
            info!(
                %user_id, %course_id,
                balance = %balance.amount, price = %course.price,
                "settlement rejected: insufficient balance"
            );
            return Ok(SettleOutcome::InsufficientBalance);
        }

        let remaining = balance.amount - course.price;

        // The schema's CHECK (amount >= 0) backs this write up; if it ever
        // fires the transaction aborts and surfaces as an internal error.
        sqlx::query(
            r#"
            UPDATE balances
            SET amount = $2, updated_at = NOW()
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .bind(remaining)
        .execute(&mut *tx)
        .await?;

        // A settlement that raced us past the precondition check loses here
        // on the (user_id, course_id) unique constraint.
        let granted = sqlx::query(
            r#"
            INSERT INTO accesses (user_id, course_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id, course_id) DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(course_id)
        .execute(&mut *tx)
        .await?;

        if granted.rows_affected() == 0 {
            tx.rollback().await?;
            info!(%user_id, %course_id, "settlement rejected: purchase raced an earlier grant");
            return Ok(SettleOutcome::AlreadyPurchased);
        }

        tx.commit().await?;

        info!(
            %user_id, %course_id,
            price = %course.price, remaining = %remaining,
            "payment settled, access granted"
        );

        // Post-commit side effect, exactly once. The payment stays committed
        // whatever happens here; assignment is idempotent and can be retried
        // by the caller.
        if let Err(err) = self.group_service.assign(user_id, course_id).await {
            error!(
                %user_id, %course_id, error = %err,
                "group assignment failed after committed payment; retry required"
            );
        }

        Ok(SettleOutcome::Success)
    }
}
