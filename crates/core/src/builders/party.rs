use super::truncate;
use crate::acbs::common::{
    AddressType, AssignedRating, CitizenshipClass, Country, ExternalRatingUserCode1,
    ExternalRatingUserCode2, IndustryClassification, MinorityClass, OfficerRiskRatingType,
    PartyStatus, PartyType, RatingEntity, ServicingUnit, ServicingUnitSection,
};
use crate::acbs::party::{
    AcbsCreatePartyRequest, AcbsGetPartyResponse, AcbsPartyExternalRating, PartyAddress,
};
use crate::dates::remove_time_component_if_present;
use crate::defaults::DefaultValues;
use crate::domain::party::{
    CreatePartyExternalRatingRequest, CreatePartyRequest, Party, PartyExternalRating,
};

/// Short and sort names are prefixes of `name1`.
pub fn build_create_party(
    request: &CreatePartyRequest,
    defaults: &DefaultValues,
) -> AcbsCreatePartyRequest {
    let party = &defaults.party;
    let organisation = &defaults.organisation;

    AcbsCreatePartyRequest {
        party_alternate_identifier: request.alternate_identifier.clone(),
        industry_classification: IndustryClassification::new(&request.industry_classification),
        party_name1: request.name1.clone(),
        party_name2: request.name2.clone().unwrap_or_default(),
        party_name3: request.name3.clone().unwrap_or_default(),
        party_short_name: truncate(&request.name1, party.short_name_length),
        party_sort_name: truncate(&request.name1, party.sort_name_length),
        party_type: PartyType::new(&party.party_type_code),
        party_status: PartyStatus::new(&party.party_status_code),
        minority_class: MinorityClass::new(&request.sme_type),
        citizenship_class: CitizenshipClass::new(&request.citizenship_class),
        officer_risk_rating_type: OfficerRiskRatingType::new(&party.officer_risk_rating_type_code),
        officer_risk_date: request.officer_risk_date.to_date_time(),
        primary_address: PartyAddress {
            address_identifier: party.address_identifier.clone(),
            address_type: AddressType::new(&party.address_type_code),
            country: Country::new(&request.country_code),
        },
        servicing_user: organisation.servicing_user.clone(),
        administrative_user: organisation.administrative_user.clone(),
        servicing_unit: ServicingUnit::new(&organisation.servicing_unit_identifier),
        servicing_unit_section: ServicingUnitSection::new(
            &organisation.servicing_unit_section_identifier,
        ),
    }
}

pub fn party_from_acbs(party: AcbsGetPartyResponse) -> Party {
    Party {
        party_identifier: party.party_identifier,
        alternate_identifier: party.party_alternate_identifier,
        industry_classification: party
            .industry_classification
            .map(|class| class.industry_classification_code),
        name1: party.party_name1,
        name2: party.party_name2,
        name3: party.party_name3,
        sme_type: party.minority_class.map(|class| class.minority_class_code),
        citizenship_class: party.citizenship_class.map(|class| class.citizenship_class_code),
        officer_risk_date: remove_time_component_if_present(party.officer_risk_date.as_deref()),
        country_code: party.primary_address.map(|address| address.country.country_code),
    }
}

pub fn build_create_external_rating(
    party_identifier: &str,
    request: &CreatePartyExternalRatingRequest,
    defaults: &DefaultValues,
) -> AcbsPartyExternalRating {
    let rating = &defaults.party_external_rating;

    AcbsPartyExternalRating {
        party_identifier: party_identifier.to_string(),
        rating_entity: RatingEntity::new(&rating.rating_entity_code),
        assigned_rating: AssignedRating::new(&request.assigned_rating_code),
        rated_date: request.rated_date.to_date_time(),
        probability_of_default: rating.probability_of_default,
        loss_given_default: rating.loss_given_default,
        risk_weighting: rating.risk_weighting,
        external_rating_note1: rating.external_rating_note.clone(),
        external_rating_note2: rating.external_rating_note.clone(),
        external_rating_user_code1: ExternalRatingUserCode1::new(&rating.external_rating_user_code),
        external_rating_user_code2: ExternalRatingUserCode2::new(&rating.external_rating_user_code),
    }
}

pub fn external_rating_from_acbs(rating: AcbsPartyExternalRating) -> PartyExternalRating {
    PartyExternalRating {
        party_identifier: rating.party_identifier,
        rating_entity_code: rating.rating_entity.rating_entity_code,
        assigned_rating_code: rating.assigned_rating.assigned_rating_code,
        rated_date: remove_time_component_if_present(Some(rating.rated_date.as_str())),
        probability_of_default: rating.probability_of_default,
        loss_given_default: rating.loss_given_default,
        risk_weighting: rating.risk_weighting,
        external_rating_note1: rating.external_rating_note1,
        external_rating_note2: rating.external_rating_note2,
        external_rating_user_code1: rating.external_rating_user_code1.user_code1,
        external_rating_user_code2: rating.external_rating_user_code2.user_code2,
    }
}
