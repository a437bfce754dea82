use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::common::{Currency, PartyRef, ProductGroup, ProductType};

/// Loan as listed by `GET /Portfolio/{portfolio}/Facility/{facility}/Loan`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AcbsGetLoanResponse {
    pub portfolio_identifier: String,
    pub loan_identifier: String,
    pub parent_facility_identifier: String,
    pub primary_party: PartyRef,
    pub currency: Currency,
    #[serde(default)]
    pub effective_date: Option<String>,
    #[serde(default)]
    pub maturity_date: Option<String>,
    #[serde(default)]
    pub principal_balance: Option<Decimal>,
    #[serde(default)]
    pub interest_balance: Option<Decimal>,
    #[serde(default)]
    pub fee_balance: Option<Decimal>,
    #[serde(default)]
    pub other_balance: Option<Decimal>,
    #[serde(default)]
    pub discounted_principal: Option<Decimal>,
    pub product_type: ProductType,
    pub product_group: ProductGroup,
}

/// Loan fields replaced by the expiry date amendment.
pub const LOAN_MATURITY_DATE_FIELD: &str = "MaturityDate";
