use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::truncate;
use crate::acbs::common::{
    CapitalClass, CapitalConversionFactor, Country, Currency, DealInitialStatus, DealOrigination,
    DealStatus, DealType, IndustryClassification, OfficerRiskRatingType, PartyRef, PurposeType,
    ServicingUnit, ServicingUnitSection,
};
use crate::acbs::deal::{AcbsCreateDealRequest, AcbsGetDealResponse};
use crate::dates::{earliest_of, remove_time_component_if_present, DateOnly, MAXIMUM_DATE_TIME};
use crate::defaults::DefaultValues;
use crate::domain::deal::{CreateDealRequest, Deal};

pub fn build_create_deal(
    request: &CreateDealRequest,
    defaults: &DefaultValues,
    today: NaiveDate,
) -> AcbsCreateDealRequest {
    let deal = &defaults.deal;
    let organisation = &defaults.organisation;
    let effective_date =
        DateOnly::from(earliest_of(today, request.guarantee_commencement_date.date()))
            .to_date_time();

    AcbsCreateDealRequest {
        deal_identifier: request.deal_identifier.clone(),
        deal_origination: DealOrigination::new(&deal.deal_origination_code),
        is_deal_syndication_indicator: deal.is_deal_syndication_indicator,
        deal_initial_status: DealInitialStatus::new(&deal.deal_initial_status_code),
        deal_overall_status: DealStatus::new(&deal.deal_overall_status_code),
        deal_type: DealType::new(&deal.deal_type_code),
        description: format!(
            "D: {} {} {}",
            truncate(&request.obligor_name, deal.description_obligor_name_length),
            request.currency,
            request.deal_value
        ),
        currency: Currency::active(&request.currency),
        original_effective_date: effective_date.clone(),
        original_approval_date: effective_date.clone(),
        target_closing_date: effective_date.clone(),
        expiration_date: MAXIMUM_DATE_TIME.to_string(),
        is_expiration_date_maximum: true,
        limit_amount: request.deal_value,
        withheld_amount: Decimal::ZERO,
        memo_limit_amount: Decimal::ZERO,
        memo_used_amount: Decimal::ZERO,
        memo_available_amount: Decimal::ZERO,
        memo_withheld_amount: Decimal::ZERO,
        borrower_party: PartyRef::new(&request.obligor_party_identifier),
        servicing_unit: ServicingUnit::new(&organisation.servicing_unit_identifier),
        servicing_unit_section: ServicingUnitSection::new(
            &organisation.servicing_unit_section_identifier,
        ),
        servicing_user: organisation.servicing_user.clone(),
        administrative_user: organisation.administrative_user.clone(),
        officer_risk_rating_type: OfficerRiskRatingType::new(&deal.officer_risk_rating_type_code),
        officer_risk_date: effective_date,
        is_officer_risk_date_zero: false,
        industry_classification: IndustryClassification::new(
            &request.obligor_industry_classification,
        ),
        risk_country: Country::new(&organisation.risk_country_code),
        purpose_type: PurposeType::new(&deal.purpose_type_code),
        capital_class: CapitalClass::new(&deal.capital_class_code),
        capital_conversion_factor: CapitalConversionFactor::new(
            &deal.capital_conversion_factor_code,
        ),
        financial_rate_group: organisation.financial_rate_group.clone(),
        customer_financial_rate_group: organisation.financial_rate_group.clone(),
    }
}

pub fn deal_from_acbs(deal: AcbsGetDealResponse, defaults: &DefaultValues) -> Deal {
    Deal {
        deal_identifier: deal.deal_identifier,
        portfolio_identifier: deal.portfolio_identifier,
        currency: deal.currency.currency_code,
        deal_value: deal.limit_amount.unwrap_or(defaults.deal.deal_value_fallback),
        guarantee_commencement_date: remove_time_component_if_present(
            deal.original_effective_date.as_deref(),
        ),
        obligor_party_identifier: deal.borrower_party.party_identifier,
        obligor_name: deal.borrower_party.party_name1,
        obligor_industry_classification: deal
            .industry_classification
            .map(|classification| classification.industry_classification_code),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use serde_json::json;

    use super::{build_create_deal, deal_from_acbs};
    use crate::acbs::deal::AcbsGetDealResponse;
    use crate::defaults::DefaultValues;
    use crate::domain::deal::CreateDealRequest;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 4, 19).expect("valid date")
    }

    fn request(commencement: &str) -> CreateDealRequest {
        serde_json::from_value(json!({
            "dealIdentifier": "0020900035",
            "currency": "GBP",
            "dealValue": 1500000,
            "guaranteeCommencementDate": commencement,
            "obligorPartyIdentifier": "00291013",
            "obligorName": "ACME TRADING LIMITED AND SONS",
            "obligorIndustryClassification": "0116"
        }))
        .expect("valid request")
    }

    #[test]
    fn future_commencement_dates_are_clamped_to_today() {
        let built = build_create_deal(&request("2023-06-01"), &DefaultValues::default(), today());

        assert_eq!(built.original_effective_date, "2023-04-19T00:00:00Z");
        assert_eq!(built.target_closing_date, "2023-04-19T00:00:00Z");
        assert_eq!(built.expiration_date, "9999-12-31T00:00:00Z");
        assert!(built.is_expiration_date_maximum);
    }

    #[test]
    fn wire_shape_carries_defaults_and_description() {
        let built = build_create_deal(&request("2023-01-10"), &DefaultValues::default(), today());
        let wire = serde_json::to_value(&built).expect("serialize");

        assert_eq!(wire["OriginalEffectiveDate"], json!("2023-01-10T00:00:00Z"));
        assert_eq!(wire["Description"], json!("D: ACME TRADING LIMITE GBP 1500000"));
        assert_eq!(wire["DealType"], json!({ "DealTypeCode": "500" }));
        assert_eq!(wire["Currency"], json!({ "CurrencyCode": "GBP", "IsActiveIndicator": true }));
        assert_eq!(wire["BorrowerParty"], json!({ "PartyIdentifier": "00291013" }));
        assert_eq!(wire["RiskCountry"], json!({ "CountryCode": "GBR" }));
        assert_eq!(wire["LimitAmount"], json!(1500000.0));
    }

    #[test]
    fn response_falls_back_for_missing_amounts() {
        let deal: AcbsGetDealResponse = serde_json::from_value(json!({
            "DealIdentifier": "0020900035",
            "PortfolioIdentifier": "E1",
            "Currency": { "CurrencyCode": "GBP" },
            "LimitAmount": null,
            "OriginalEffectiveDate": "2023-04-19T00:00:00Z",
            "BorrowerParty": { "PartyIdentifier": "00291013", "PartyName1": "ACME" },
            "IndustryClassification": { "IndustryClassificationCode": "0116" }
        }))
        .expect("deal deserializes");

        let deal = deal_from_acbs(deal, &DefaultValues::default());

        assert_eq!(deal.deal_value, Decimal::ZERO);
        assert_eq!(deal.guarantee_commencement_date.as_deref(), Some("2023-04-19"));
        assert_eq!(deal.obligor_name.as_deref(), Some("ACME"));
        assert_eq!(deal.obligor_industry_classification.as_deref(), Some("0116"));
    }
}
