use chrono::NaiveDate;

use crate::acbs::bundle::{
    AccrualSchedule, AcbsCreateBundleRequest, AcbsGetBundleResponse, BundleMessage,
    FacilityCodeValueTransaction, FacilityFeeAmountTransaction, LoanAdvanceTransaction,
    NewLoanRequest, RepaymentSchedule,
};
use crate::acbs::common::{
    AccrualCategory, BusinessDayAdjustment, Calendar, Currency, FacilityTransactionCodeValue,
    IndexRateChangeFrequency, LenderType, LimitType, LoanBillingFrequencyType, OperationType,
    ProductGroup, ProductType, ServicingUnit, ServicingUnitSection, TransactionType,
    UsageFrequency, YearBasis,
};
use crate::acbs::facility::AcbsGetFacilityResponse;
use crate::dates::{day_of_month, months_ahead, remove_time_component_if_present, DateOnly};
use crate::defaults::{DefaultValues, DOMESTIC_CURRENCY};
use crate::domain::fee::FixedFeeAmountAmendment;
use crate::domain::loan::{CreateLoanRequest, UpdateLoanAmountRequest};
use crate::domain::transaction::{FacilityActivationTransaction, LoanTransaction};

/// Wraps messages in a bundle envelope. `initial_status` overrides the
/// default initial bundle status.
pub fn build_bundle(
    messages: Vec<BundleMessage>,
    initial_status: Option<u32>,
    defaults: &DefaultValues,
) -> AcbsCreateBundleRequest {
    let bundle = &defaults.bundle;
    AcbsCreateBundleRequest {
        portfolio_identifier: defaults.portfolio_identifier.clone(),
        initial_bundle_status_code: initial_status.unwrap_or(bundle.initial_bundle_status_code),
        initiating_user_name: bundle.initiating_user_name.clone(),
        use_api_user_indicator: bundle.use_api_user_indicator,
        bundle_message_list: messages,
    }
}

/// Activation is keyed on the facility's borrower and dated from its original
/// effective date, so it is built from the facility ACBS holds.
pub fn facility_activation_message(
    facility: &AcbsGetFacilityResponse,
    defaults: &DefaultValues,
    today: NaiveDate,
) -> BundleMessage {
    let bundle = &defaults.bundle;
    let organisation = &defaults.organisation;
    let effective_date = facility
        .original_effective_date
        .clone()
        .unwrap_or_else(|| DateOnly::from(today).to_date_time());

    BundleMessage::FacilityCodeValueTransaction(FacilityCodeValueTransaction {
        account_owner_identifier: organisation.account_owner_identifier.clone(),
        effective_date,
        facility_identifier: facility.facility_identifier.clone(),
        facility_transaction_code_value: FacilityTransactionCodeValue::new(
            &bundle.facility_activation_code_value,
        ),
        facility_transaction_type: TransactionType::new(&bundle.facility_activation_type_code),
        is_draft_indicator: false,
        lender_type: LenderType::new(&defaults.facility.lender_type_code),
        limit_key_value: facility.borrower_party.party_identifier.clone(),
        limit_type: LimitType::new(&organisation.limit_type_code),
        section_identifier: organisation.section_identifier.clone(),
    })
}

/// Repayments fall due `N` months after issue, `N` following the billing
/// frequency, on the issue date's day of month. Usage rate and operation type
/// are only sent for foreign currency loans.
pub fn new_loan_message(
    facility_identifier: &str,
    request: &CreateLoanRequest,
    defaults: &DefaultValues,
) -> BundleMessage {
    let loan = &defaults.loan;
    let organisation = &defaults.organisation;
    let issue_date = request.issue_date.date();
    let effective_date = request.issue_date.to_date_time();
    let months = loan.billing_frequency_months.get(&request.loan_billing_frequency_type);
    let next_due_date = DateOnly::from(months_ahead(issue_date, months)).to_date_time();
    let (deal_customer_usage_rate, deal_customer_usage_operation_type) =
        if request.currency == DOMESTIC_CURRENCY {
            (None, None)
        } else {
            (
                request.deal_customer_usage_rate,
                Some(OperationType::new(
                    request
                        .deal_customer_usage_operation_type
                        .as_deref()
                        .unwrap_or(&loan.foreign_operation_type_code),
                )),
            )
        };

    BundleMessage::NewLoanRequest(Box::new(NewLoanRequest {
        effective_date: effective_date.clone(),
        facility_identifier: facility_identifier.to_string(),
        borrower_party_identifier: request.borrower_party_identifier.clone(),
        section_identifier: organisation.section_identifier.clone(),
        lender_type: LenderType::new(&defaults.facility.lender_type_code),
        loan_instrument_code: loan.loan_instrument_code.get(&request.product_type_id),
        currency: Currency::active(&request.currency),
        loan_amount: request.amount,
        product_type: ProductType::new(&request.product_type_id),
        product_group: ProductGroup::new(loan.product_group_code.get(&request.product_type_id)),
        maturity_date: request.expiry_date.to_date_time(),
        servicing_user: organisation.servicing_user.clone(),
        administrative_user: organisation.administrative_user.clone(),
        servicing_unit: ServicingUnit::new(&organisation.servicing_unit_identifier),
        servicing_unit_section: ServicingUnitSection::new(
            &organisation.servicing_unit_section_identifier,
        ),
        deal_customer_usage_rate,
        deal_customer_usage_operation_type,
        financial_rate_group: organisation.financial_rate_group.clone(),
        customer_usage_rate_group: organisation.financial_rate_group.clone(),
        financial_frequency: UsageFrequency::new(&loan.usage_frequency_type_code),
        customer_usage_frequency: UsageFrequency::new(&loan.usage_frequency_type_code),
        financial_business_day_adjustment: BusinessDayAdjustment::new(
            &loan.business_day_adjustment_type_code,
        ),
        customer_usage_business_day_adjustment: BusinessDayAdjustment::new(
            &loan.business_day_adjustment_type_code,
        ),
        financial_calendar: Calendar::new(&loan.calendar_identifier),
        customer_usage_calendar: Calendar::new(&loan.calendar_identifier),
        financial_next_valuation_date: next_due_date.clone(),
        customer_usage_next_valuation_date: next_due_date.clone(),
        accrual_schedule_list: vec![AccrualSchedule {
            accrual_category: AccrualCategory::new(&loan.accrual_category_code),
            effective_date,
            year_basis: YearBasis::new(
                request.year_basis.as_deref().unwrap_or(&loan.year_basis_code),
            ),
            index_rate_change_frequency: IndexRateChangeFrequency::new(
                request
                    .index_rate_change_frequency
                    .as_deref()
                    .unwrap_or(&loan.index_rate_change_frequency_code),
            ),
            spread_rate: request.spread_rate,
        }],
        repayment_schedule_list: vec![RepaymentSchedule {
            loan_billing_frequency_type: LoanBillingFrequencyType::new(
                &request.loan_billing_frequency_type,
            ),
            next_due_date: next_due_date.clone(),
            next_accrue_to_date: next_due_date,
            billing_due_cycle_day: day_of_month(issue_date),
            billing_calendar: Calendar::new(&loan.calendar_identifier),
            business_day_adjustment: BusinessDayAdjustment::new(
                &loan.business_day_adjustment_type_code,
            ),
            primary_schedule_indicator: true,
        }],
    }))
}

pub fn loan_advance_message(
    loan_identifier: &str,
    request: &UpdateLoanAmountRequest,
    defaults: &DefaultValues,
) -> BundleMessage {
    BundleMessage::LoanAdvanceTransaction(LoanAdvanceTransaction {
        effective_date: request.effective_date.to_date_time(),
        loan_identifier: loan_identifier.to_string(),
        section_identifier: defaults.organisation.section_identifier.clone(),
        transaction_type: TransactionType::new(&defaults.bundle.loan_advance_type_code),
        is_draft_indicator: false,
        loan_advance_amount: request.amount_amendment,
    })
}

/// Positive amendments increase the fee, negative ones decrease it; ACBS is
/// always sent the absolute amount.
pub fn fee_amount_messages(
    facility_identifier: &str,
    amendments: &[FixedFeeAmountAmendment],
    defaults: &DefaultValues,
) -> Vec<BundleMessage> {
    let bundle = &defaults.bundle;
    let organisation = &defaults.organisation;

    amendments
        .iter()
        .map(|amendment| {
            let type_code = if amendment.amount_amendment.is_sign_negative() {
                &bundle.fee_amount_decrease_type_code
            } else {
                &bundle.fee_amount_increase_type_code
            };

            BundleMessage::FacilityFeeAmountTransaction(FacilityFeeAmountTransaction {
                facility_identifier: facility_identifier.to_string(),
                effective_date: amendment.effective_date.to_date_time(),
                account_owner_identifier: organisation.account_owner_identifier.clone(),
                lender_type: LenderType::new(&amendment.lender_type_code),
                segment_identifier: amendment.period.clone(),
                transaction_amount: amendment.amount_amendment.abs(),
                is_draft_indicator: false,
                facility_fee_transaction_type: TransactionType::new(type_code),
                limit_key_value: amendment.party_identifier.clone(),
                limit_type: LimitType::new(&organisation.limit_type_code),
                section_identifier: organisation.section_identifier.clone(),
            })
        })
        .collect()
}

/// `None` when the bundle's first message is not an activation of
/// `facility_identifier`.
pub fn facility_activation_from_acbs(
    facility_identifier: &str,
    bundle: AcbsGetBundleResponse,
) -> Option<FacilityActivationTransaction> {
    let AcbsGetBundleResponse {
        portfolio_identifier,
        initial_bundle_status_code,
        initiating_user_name,
        bundle_status,
        bundle_message_list,
        ..
    } = bundle;
    let Some(BundleMessage::FacilityCodeValueTransaction(message)) =
        bundle_message_list.into_iter().next()
    else {
        return None;
    };
    if message.facility_identifier != facility_identifier {
        return None;
    }
    let (bundle_status_code, bundle_status_desc) = match bundle_status {
        Some(status) => (Some(status.bundle_status_code), status.bundle_status_short_description),
        None => (None, None),
    };

    Some(FacilityActivationTransaction {
        portfolio_identifier,
        facility_identifier: message.facility_identifier,
        bundle_status_code,
        bundle_status_desc,
        initial_bundle_status_code,
        initiating_user_name,
        account_owner_identifier: message.account_owner_identifier,
        effective_date: remove_time_component_if_present(Some(message.effective_date.as_str())),
        facility_transaction_code_value_code: message
            .facility_transaction_code_value
            .facility_transaction_code_value_code,
        facility_transaction_type_code: message.facility_transaction_type.type_code,
        is_draft_indicator: message.is_draft_indicator,
        lender_type_code: message.lender_type.lender_type_code,
        limit_key_value: message.limit_key_value,
        limit_type_code: message.limit_type.limit_type_code,
        section_identifier: message.section_identifier,
    })
}

/// `None` when the bundle's first message is not a new loan under
/// `facility_identifier`.
pub fn loan_transaction_from_acbs(
    facility_identifier: &str,
    bundle: AcbsGetBundleResponse,
) -> Option<LoanTransaction> {
    let AcbsGetBundleResponse {
        portfolio_identifier, bundle_status, posting_date, bundle_message_list, ..
    } = bundle;
    let Some(BundleMessage::NewLoanRequest(message)) = bundle_message_list.into_iter().next()
    else {
        return None;
    };
    if message.facility_identifier != facility_identifier {
        return None;
    }
    let NewLoanRequest {
        effective_date,
        facility_identifier,
        borrower_party_identifier,
        loan_instrument_code,
        currency,
        loan_amount,
        product_type,
        product_group,
        maturity_date,
        deal_customer_usage_rate,
        deal_customer_usage_operation_type,
        accrual_schedule_list,
        repayment_schedule_list,
        ..
    } = *message;
    let accrual = accrual_schedule_list.into_iter().next();
    let repayment = repayment_schedule_list.into_iter().next();
    let (bundle_status_code, bundle_status_desc) = match bundle_status {
        Some(status) => (Some(status.bundle_status_code), status.bundle_status_short_description),
        None => (None, None),
    };

    Some(LoanTransaction {
        portfolio_identifier,
        facility_identifier,
        bundle_status_code,
        bundle_status_desc,
        posting_date: remove_time_component_if_present(posting_date.as_deref()),
        borrower_party_identifier,
        currency: currency.currency_code,
        deal_customer_usage_rate,
        deal_customer_usage_operation_type: deal_customer_usage_operation_type
            .map(|operation| operation.operation_type_code),
        amount: loan_amount,
        issue_date: remove_time_component_if_present(Some(effective_date.as_str())),
        expiry_date: remove_time_component_if_present(Some(maturity_date.as_str())),
        spread_rate: accrual.as_ref().map(|schedule| schedule.spread_rate),
        next_due_date: repayment
            .as_ref()
            .and_then(|schedule| remove_time_component_if_present(Some(schedule.next_due_date.as_str()))),
        year_basis: accrual.as_ref().map(|schedule| schedule.year_basis.year_basis_code.clone()),
        index_rate_change_frequency: accrual.map(|schedule| {
            schedule.index_rate_change_frequency.index_rate_change_frequency_code
        }),
        loan_billing_frequency_type: repayment
            .map(|schedule| schedule.loan_billing_frequency_type.loan_billing_frequency_type_code),
        product_type_id: product_type.product_type_code,
        product_type_group: product_group.product_group_code,
        loan_instrument_code,
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use serde_json::{json, Value};

    use super::{
        build_bundle, facility_activation_from_acbs, facility_activation_message,
        fee_amount_messages, loan_transaction_from_acbs, new_loan_message,
    };
    use crate::acbs::bundle::{AcbsGetBundleResponse, BundleMessage};
    use crate::acbs::facility::AcbsGetFacilityResponse;
    use crate::defaults::DefaultValues;
    use crate::domain::fee::FixedFeeAmountAmendment;
    use crate::domain::loan::fixtures::create_loan_body;
    use crate::domain::loan::CreateLoanRequest;

    fn loan_request(overrides: Value) -> CreateLoanRequest {
        let mut body = create_loan_body();
        if let (Some(body), Some(overrides)) = (body.as_object_mut(), overrides.as_object()) {
            for (key, value) in overrides {
                body.insert(key.clone(), value.clone());
            }
        }
        serde_json::from_value(body).expect("loan request")
    }

    fn new_loan_wire(request: &CreateLoanRequest) -> Value {
        let defaults = DefaultValues::default();
        let bundle =
            build_bundle(vec![new_loan_message("0030000321", request, &defaults)], None, &defaults);
        serde_json::to_value(bundle).expect("serialize")
    }

    #[test]
    fn bundle_envelope_uses_defaults() {
        let wire = new_loan_wire(&loan_request(json!({})));

        assert_eq!(wire["PortfolioIdentifier"], json!("E1"));
        assert_eq!(wire["InitialBundleStatusCode"], json!(3));
        assert_eq!(wire["InitiatingUserName"], json!("APIUKEF"));
        assert_eq!(wire["UseAPIUserIndicator"], json!(false));
        assert_eq!(wire["BundleMessageList"][0]["$type"], json!("NewLoanRequest"));
    }

    #[test]
    fn repayment_schedule_follows_billing_frequency() {
        for (frequency, next_due) in [
            ("M", "2023-05-19T00:00:00Z"),
            ("Q", "2023-07-19T00:00:00Z"),
            ("S", "2023-10-19T00:00:00Z"),
            ("A", "2024-04-19T00:00:00Z"),
        ] {
            let wire = new_loan_wire(&loan_request(json!({ "loanBillingFrequencyType": frequency })));
            let schedule = &wire["BundleMessageList"][0]["RepaymentScheduleList"][0];

            assert_eq!(schedule["NextDueDate"], json!(next_due));
            assert_eq!(schedule["BillingDueCycleDay"], json!(19));
            assert_eq!(
                schedule["LoanBillingFrequencyType"],
                json!({ "LoanBillingFrequencyTypeCode": frequency })
            );
        }
    }

    #[test]
    fn domestic_loans_send_null_usage_rate() {
        let wire = new_loan_wire(&loan_request(json!({})));
        let message = &wire["BundleMessageList"][0];

        assert_eq!(message["DealCustomerUsageRate"], Value::Null);
        assert_eq!(message["DealCustomerUsageOperationType"], Value::Null);
        assert_eq!(message["LoanInstrumentCode"], json!("9100"));
        assert_eq!(message["ProductGroup"], json!({ "ProductGroupCode": "BS" }));
    }

    #[test]
    fn foreign_loans_carry_usage_rate_and_operation_type() {
        let wire = new_loan_wire(&loan_request(json!({
            "currency": "USD",
            "dealCustomerUsageRate": 0.75
        })));
        let message = &wire["BundleMessageList"][0];

        assert_eq!(message["DealCustomerUsageRate"], json!(0.75));
        assert_eq!(message["DealCustomerUsageOperationType"], json!({ "OperationTypeCode": "M" }));
    }

    #[test]
    fn fee_amendments_pick_direction_and_send_absolute_amounts() {
        let amendments: Vec<FixedFeeAmountAmendment> = serde_json::from_value(json!([
            { "partyIdentifier": "00291013", "period": "01", "lenderTypeCode": "100",
              "effectiveDate": "2023-04-19", "amountAmendment": 250 },
            { "partyIdentifier": "00291013", "period": "02", "lenderTypeCode": "100",
              "effectiveDate": "2023-04-19", "amountAmendment": -125.5 }
        ]))
        .expect("amendments");

        let messages = fee_amount_messages("0030000321", &amendments, &DefaultValues::default());

        let [BundleMessage::FacilityFeeAmountTransaction(increase), BundleMessage::FacilityFeeAmountTransaction(decrease)] =
            messages.as_slice()
        else {
            panic!("expected two fee amount messages");
        };
        assert_eq!(increase.facility_fee_transaction_type.type_code, "1700");
        assert_eq!(increase.transaction_amount, Decimal::from(250));
        assert_eq!(decrease.facility_fee_transaction_type.type_code, "1701");
        assert_eq!(decrease.transaction_amount, Decimal::new(1255, 1));
    }

    fn facility() -> AcbsGetFacilityResponse {
        serde_json::from_value(json!({
            "FacilityIdentifier": "0030000321",
            "Currency": { "CurrencyCode": "GBP" },
            "OriginalEffectiveDate": "2023-03-01T00:00:00Z",
            "FacilityType": { "FacilityTypeCode": "250" },
            "BorrowerParty": { "PartyIdentifier": "00291013" }
        }))
        .expect("facility")
    }

    #[test]
    fn activation_uses_facility_borrower_and_effective_date() {
        let today = NaiveDate::from_ymd_opt(2023, 4, 19).expect("date");
        let message = facility_activation_message(&facility(), &DefaultValues::default(), today);

        let BundleMessage::FacilityCodeValueTransaction(message) = message else {
            panic!("expected an activation message");
        };
        assert_eq!(message.limit_key_value, "00291013");
        assert_eq!(message.effective_date, "2023-03-01T00:00:00Z");
        assert_eq!(message.facility_transaction_type.type_code, "3403");
    }

    fn activation_bundle(facility_identifier: &str) -> AcbsGetBundleResponse {
        serde_json::from_value(json!({
            "PortfolioIdentifier": "E1",
            "InitialBundleStatusCode": 3,
            "InitiatingUserName": "APIUKEF",
            "BundleStatus": { "BundleStatusCode": "U", "BundleStatusShortDescription": "Unposted" },
            "BundleMessageList": [{
                "$type": "FacilityCodeValueTransaction",
                "AccountOwnerIdentifier": "00000000",
                "EffectiveDate": "2023-03-01T00:00:00Z",
                "FacilityIdentifier": facility_identifier,
                "FacilityTransactionCodeValue": { "FacilityTransactionCodeValueCode": "A" },
                "FacilityTransactionType": { "TypeCode": "3403" },
                "IsDraftIndicator": false,
                "LenderType": { "LenderTypeCode": "100" },
                "LimitKeyValue": "00291013",
                "LimitType": { "LimitTypeCode": "00" },
                "SectionIdentifier": "00"
            }]
        }))
        .expect("bundle")
    }

    #[test]
    fn activation_bundle_maps_to_flat_transaction() {
        let transaction = facility_activation_from_acbs("0030000321", activation_bundle("0030000321"))
            .expect("activation for facility");

        assert_eq!(transaction.bundle_status_code.as_deref(), Some("U"));
        assert_eq!(transaction.bundle_status_desc.as_deref(), Some("Unposted"));
        assert_eq!(transaction.effective_date.as_deref(), Some("2023-03-01"));
        assert_eq!(transaction.limit_key_value, "00291013");
    }

    #[test]
    fn bundles_of_other_facilities_or_types_are_not_returned() {
        assert!(facility_activation_from_acbs("0030000321", activation_bundle("0030000999")).is_none());
        assert!(loan_transaction_from_acbs("0030000321", activation_bundle("0030000321")).is_none());
    }

    #[test]
    fn new_loan_bundle_round_trips_to_loan_transaction() {
        let defaults = DefaultValues::default();
        let request = loan_request(json!({}));
        let mut wire = serde_json::to_value(build_bundle(
            vec![new_loan_message("0030000321", &request, &defaults)],
            None,
            &defaults,
        ))
        .expect("serialize");
        wire["BundleStatus"] = json!({ "BundleStatusCode": "A" });
        let bundle: AcbsGetBundleResponse = serde_json::from_value(wire).expect("bundle");

        let transaction = loan_transaction_from_acbs("0030000321", bundle).expect("loan");

        assert_eq!(transaction.issue_date.as_deref(), Some("2023-04-19"));
        assert_eq!(transaction.expiry_date.as_deref(), Some("2024-04-19"));
        assert_eq!(transaction.next_due_date.as_deref(), Some("2023-07-19"));
        assert_eq!(transaction.loan_billing_frequency_type.as_deref(), Some("Q"));
        assert_eq!(transaction.amount, Decimal::from(250000));
        assert_eq!(transaction.deal_customer_usage_rate, None);
    }
}
