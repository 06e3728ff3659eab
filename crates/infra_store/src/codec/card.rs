//! Insurance card lines: `cardNumber,cardHolder,policyOwner,expirationDate`

use std::ops::RangeInclusive;

use core_kernel::{format_optional_date, parse_stored_date, CardNumber, ValidationError};
use domain_party::InsuranceCard;

use super::{storable, LineCodec};
use crate::error::CodecError;
use crate::record::{Record, RecordKind};

/// Codec for insurance card records
#[derive(Debug, Clone, Copy, Default)]
pub struct CardCodec;

impl LineCodec for CardCodec {
    type Record = InsuranceCard;

    const COLUMNS: RangeInclusive<usize> = 4..=4;

    fn parse_key(column: &str) -> Result<CardNumber, ValidationError> {
        CardNumber::parse(column)
    }

    fn decode_columns(card_number: CardNumber, columns: &[&str], line: usize) -> Result<InsuranceCard, CodecError> {
        let expiration_date = parse_stored_date(columns[3])
            .map_err(|e| CodecError::malformed(RecordKind::InsuranceCard, line, "expirationDate", e))?;

        Ok(InsuranceCard::new(card_number, columns[1], columns[2], expiration_date))
    }

    fn encode_record(card: &InsuranceCard) -> Result<String, CodecError> {
        let kind = InsuranceCard::KIND;
        let key = &card.card_number;

        Ok(format!(
            "{},{},{},{}",
            key,
            storable(kind, key, "cardHolder", &card.card_holder)?,
            storable(kind, key, "policyOwner", &card.policy_owner)?,
            format_optional_date(card.expiration_date)
        ))
    }
}
