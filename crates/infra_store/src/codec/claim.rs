//! Claim lines:
//! `id,claimDate,insuredPerson,cardNumber,examDate,documents,claimAmount,status,receiverBankingInfo`

use rust_decimal::Decimal;
use std::ops::RangeInclusive;
use std::str::FromStr;

use core_kernel::{format_optional_date, parse_stored_date, CardNumber, ClaimId, ValidationError};
use domain_claims::{Claim, ClaimStatus};

use super::{join_values, split_values, storable, LineCodec};
use crate::error::CodecError;
use crate::record::Record;

/// Codec for claim records
#[derive(Debug, Clone, Copy, Default)]
pub struct ClaimCodec;

/// Parses an amount, also accepting exponent notation such as `1.5E3`
fn parse_amount(column: &str) -> Result<Decimal, ValidationError> {
    Decimal::from_str(column)
        .or_else(|_| Decimal::from_scientific(column))
        .map_err(|_| ValidationError::InvalidAmount(column.to_string()))
}

impl LineCodec for ClaimCodec {
    type Record = Claim;

    const COLUMNS: RangeInclusive<usize> = 9..=9;

    fn parse_key(column: &str) -> Result<ClaimId, ValidationError> {
        ClaimId::parse(column)
    }

    fn decode_columns(id: ClaimId, columns: &[&str], line: usize) -> Result<Claim, CodecError> {
        let kind = Claim::KIND;
        let malformed = |column: &'static str| move |e: ValidationError| CodecError::malformed(kind, line, column, e);

        let claim_date = parse_stored_date(columns[1]).map_err(malformed("claimDate"))?;
        let card_number = CardNumber::parse(columns[3]).map_err(malformed("cardNumber"))?;
        let exam_date = parse_stored_date(columns[4]).map_err(malformed("examDate"))?;
        let amount = parse_amount(columns[6]).map_err(malformed("claimAmount"))?;
        let status = ClaimStatus::from_str(columns[7]).map_err(malformed("status"))?;

        Claim::new(id, columns[2], card_number, claim_date)
            .with_exam_date(exam_date)
            .with_documents(split_values(columns[5]))
            .with_status(status)
            .with_receiver_banking_info(columns[8])
            .with_claim_amount(amount)
            .map_err(|e| CodecError::malformed(kind, line, "claimAmount", e))
    }

    fn encode_record(claim: &Claim) -> Result<String, CodecError> {
        let kind = Claim::KIND;
        let key = &claim.id;

        Ok(format!(
            "{},{},{},{},{},{},{},{},{}",
            key,
            format_optional_date(claim.claim_date),
            storable(kind, key, "insuredPerson", &claim.insured_person)?,
            claim.card_number,
            format_optional_date(claim.exam_date),
            join_values(kind, key, "documents", &claim.documents)?,
            claim.claim_amount(),
            claim.status,
            storable(kind, key, "receiverBankingInfo", &claim.receiver_banking_info)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_forms() {
        assert_eq!(parse_amount("0.0").unwrap(), Decimal::ZERO);
        assert_eq!(parse_amount("1.5E3").unwrap(), Decimal::from(1500));
        assert!(parse_amount("ten").is_err());
        assert!(parse_amount("").is_err());
    }
}
