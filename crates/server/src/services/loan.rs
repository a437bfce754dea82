use tracing::info;
use ukef_acbs::{AcbsBundleInformationService, AcbsLoanService};
use ukef_core::builders::bundle::{build_bundle, loan_advance_message, new_loan_message};
use ukef_core::builders::loan::{build_update_loan_expiry_date, loan_from_acbs};
use ukef_core::domain::loan::{
    CreateLoanRequest, Loan, LoanIdentifierResponse, UpdateLoanAmountRequest,
    UpdateLoanExpiryDateRequest,
};
use ukef_core::domain::transaction::BundleIdentifierResponse;

use super::ServiceContext;
use crate::error::ApiError;

#[derive(Clone)]
pub struct LoanService {
    loans: AcbsLoanService,
    bundles: AcbsBundleInformationService,
    context: ServiceContext,
}

impl LoanService {
    pub fn new(
        loans: AcbsLoanService,
        bundles: AcbsBundleInformationService,
        context: ServiceContext,
    ) -> Self {
        Self { loans, bundles, context }
    }

    pub async fn get_loans_for_facility(
        &self,
        facility_identifier: &str,
    ) -> Result<Vec<Loan>, ApiError> {
        let id_token = self.context.id_token().await?;
        let loans = self
            .loans
            .get_loans_for_facility(self.context.portfolio(), facility_identifier, &id_token)
            .await?;
        Ok(loans.into_iter().map(|loan| loan_from_acbs(loan, self.context.defaults())).collect())
    }

    pub async fn create_loan(
        &self,
        facility_identifier: &str,
        request: &CreateLoanRequest,
    ) -> Result<BundleIdentifierResponse, ApiError> {
        let id_token = self.context.id_token().await?;
        let defaults = self.context.defaults();
        let bundle =
            build_bundle(vec![new_loan_message(facility_identifier, request, defaults)], None, defaults);
        let created = self.bundles.create_bundle_information(&bundle, &id_token).await?;

        info!(
            event_name = "facility.loan.created",
            facility_identifier = %facility_identifier,
            bundle_identifier = %created.bundle_identifier,
            "new loan bundle created in ACBS"
        );
        Ok(created.into())
    }

    /// Nothing is written unless the loan could be read first.
    pub async fn amend_loan_expiry_date(
        &self,
        facility_identifier: &str,
        loan_identifier: &str,
        request: &UpdateLoanExpiryDateRequest,
    ) -> Result<LoanIdentifierResponse, ApiError> {
        let id_token = self.context.id_token().await?;
        let portfolio = self.context.portfolio();
        let snapshot = self.loans.get_loan_snapshot(portfolio, loan_identifier, &id_token).await?;
        let loan = build_update_loan_expiry_date(snapshot, request);
        self.loans.replace_loan(portfolio, loan_identifier, &loan, &id_token).await?;

        info!(
            event_name = "facility.loan.expiry_amended",
            facility_identifier = %facility_identifier,
            loan_identifier = %loan_identifier,
            "loan expiry date amended in ACBS"
        );
        Ok(LoanIdentifierResponse { loan_identifier: loan_identifier.to_string() })
    }

    pub async fn amend_loan_amount(
        &self,
        facility_identifier: &str,
        loan_identifier: &str,
        request: &UpdateLoanAmountRequest,
    ) -> Result<BundleIdentifierResponse, ApiError> {
        let id_token = self.context.id_token().await?;
        let defaults = self.context.defaults();
        let bundle =
            build_bundle(vec![loan_advance_message(loan_identifier, request, defaults)], None, defaults);
        let created = self.bundles.create_bundle_information(&bundle, &id_token).await?;

        info!(
            event_name = "facility.loan.amount_amended",
            facility_identifier = %facility_identifier,
            loan_identifier = %loan_identifier,
            bundle_identifier = %created.bundle_identifier,
            "loan advance bundle created in ACBS"
        );
        Ok(created.into())
    }
}
