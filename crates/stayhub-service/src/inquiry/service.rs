//! Inquiry lifecycle: send, verify, cancel.
//!
//! Inquiries are correspondence only — they never touch room state.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use stayhub_core::clock::Clock;
use stayhub_core::error::AppError;
use stayhub_core::result::AppResult;
use stayhub_database::repositories::{HouseRepository, InquiryRepository};
use stayhub_entity::house::model::House;
use stayhub_entity::inquiry::model::{CreateInquiry, Inquiry};

use crate::access::{AccessAction, AccessGateway};
use crate::context::RequestContext;

/// Manages student inquiries to house owners.
#[derive(Debug, Clone)]
pub struct InquiryService {
    inquiries: Arc<InquiryRepository>,
    houses: Arc<HouseRepository>,
    gateway: AccessGateway,
    clock: Arc<dyn Clock>,
}

impl InquiryService {
    /// Create a new inquiry service.
    pub fn new(
        inquiries: Arc<InquiryRepository>,
        houses: Arc<HouseRepository>,
        gateway: AccessGateway,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            inquiries,
            houses,
            gateway,
            clock,
        }
    }

    /// Send an inquiry about a house. Inquiries expose owner contact
    /// details in the reply, so this sits behind the full-access tier.
    pub async fn send_inquiry(
        &self,
        ctx: &RequestContext,
        house_id: Uuid,
        subject: String,
        message: String,
    ) -> AppResult<Inquiry> {
        if !ctx.is_student() {
            return Err(AppError::forbidden("Only students send inquiries"));
        }
        self.gateway
            .require(ctx.user_id, AccessAction::SendInquiry)
            .await?;

        let house = self.find_house(house_id).await?;
        if !house.is_active {
            return Err(AppError::not_found("House not found"));
        }

        let inquiry = self
            .inquiries
            .create(&CreateInquiry {
                house_id,
                student_id: ctx.user_id,
                subject,
                message,
            })
            .await?;

        info!(inquiry_id = %inquiry.id, %house_id, student_id = %ctx.user_id, "Inquiry sent");
        Ok(inquiry)
    }

    /// Acknowledge an inquiry as the house owner (or an admin), optionally
    /// attaching a response.
    pub async fn verify_inquiry(
        &self,
        ctx: &RequestContext,
        inquiry_id: Uuid,
        response: Option<&str>,
    ) -> AppResult<Inquiry> {
        let inquiry = self.find_inquiry(inquiry_id).await?;
        let house = self.find_house(inquiry.house_id).await?;

        let is_owner = house.owner_id.is_some_and(|o| o == ctx.user_id);
        if !is_owner && !ctx.is_admin() {
            return Err(AppError::forbidden("Not authorized to verify this inquiry"));
        }

        match self
            .inquiries
            .verify(inquiry_id, response, self.clock.now())
            .await?
        {
            Some(verified) => {
                info!(inquiry_id = %verified.id, "Inquiry verified");
                Ok(verified)
            }
            None => Err(AppError::conflict(format!(
                "Inquiry is already {}",
                self.find_inquiry(inquiry_id).await?.status
            ))),
        }
    }

    /// Withdraw or dismiss an inquiry. Allowed to the sending student, the
    /// house owner, or an admin.
    pub async fn cancel_inquiry(
        &self,
        ctx: &RequestContext,
        inquiry_id: Uuid,
    ) -> AppResult<Inquiry> {
        let inquiry = self.find_inquiry(inquiry_id).await?;

        let mut allowed = inquiry.student_id == ctx.user_id || ctx.is_admin();
        if !allowed {
            let house = self.find_house(inquiry.house_id).await?;
            allowed = house.owner_id.is_some_and(|o| o == ctx.user_id);
        }
        if !allowed {
            return Err(AppError::forbidden("Not authorized to cancel this inquiry"));
        }

        match self.inquiries.cancel(inquiry_id, self.clock.now()).await? {
            Some(cancelled) => {
                info!(inquiry_id = %cancelled.id, "Inquiry cancelled");
                Ok(cancelled)
            }
            None => Err(AppError::conflict(format!(
                "Inquiry is already {}",
                self.find_inquiry(inquiry_id).await?.status
            ))),
        }
    }

    /// List inquiries for a house, visible to its owner or an admin.
    pub async fn house_inquiries(
        &self,
        ctx: &RequestContext,
        house_id: Uuid,
    ) -> AppResult<Vec<Inquiry>> {
        let house = self.find_house(house_id).await?;
        let is_owner = house.owner_id.is_some_and(|o| o == ctx.user_id);
        if !is_owner && !ctx.is_admin() {
            return Err(AppError::forbidden("Not authorized to view these inquiries"));
        }
        self.inquiries.find_by_house(house_id).await
    }

    /// List the calling student's inquiries.
    pub async fn my_inquiries(&self, ctx: &RequestContext) -> AppResult<Vec<Inquiry>> {
        self.inquiries.find_by_student(ctx.user_id).await
    }

    async fn find_inquiry(&self, inquiry_id: Uuid) -> AppResult<Inquiry> {
        self.inquiries
            .find_by_id(inquiry_id)
            .await?
            .ok_or_else(|| AppError::not_found("Inquiry not found"))
    }

    async fn find_house(&self, house_id: Uuid) -> AppResult<House> {
        self.houses
            .find_by_id(house_id)
            .await?
            .ok_or_else(|| AppError::not_found("House not found"))
    }
}
