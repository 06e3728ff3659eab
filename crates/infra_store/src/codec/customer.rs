//! Customer lines: `id,fullName,role,cardNumber[,dependents]`
//!
//! The dependents column is optional on read so files written in the
//! four-column layout still load; it is always written.

use std::ops::RangeInclusive;

use core_kernel::{CardNumber, CustomerId, ValidationError};
use domain_party::{Customer, CustomerRole, InsuranceCard};

use super::{join_values, split_values, storable, LineCodec};
use crate::error::CodecError;
use crate::record::Record;

/// Codec for customer records
#[derive(Debug, Clone, Copy, Default)]
pub struct CustomerCodec;

impl LineCodec for CustomerCodec {
    type Record = Customer;

    const COLUMNS: RangeInclusive<usize> = 4..=5;

    fn parse_key(column: &str) -> Result<CustomerId, ValidationError> {
        CustomerId::parse(column)
    }

    fn decode_columns(id: CustomerId, columns: &[&str], line: usize) -> Result<Customer, CodecError> {
        let kind = Customer::KIND;

        let role: CustomerRole = columns[2]
            .parse()
            .map_err(|e| CodecError::malformed(kind, line, "role", e))?;

        // The card itself is resolved against the card file by the registry
        let card = match columns[3] {
            "" => None,
            number => Some(InsuranceCard::number_only(
                CardNumber::parse(number).map_err(|e| CodecError::malformed(kind, line, "cardNumber", e))?,
            )),
        };

        let dependents = split_values(columns.get(4).copied().unwrap_or_default())
            .iter()
            .map(|dependent| CustomerId::parse(dependent))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| CodecError::malformed(kind, line, "dependents", e))?;

        let mut customer = Customer::new(id, columns[1]).with_role(role);
        customer.insurance_card = card;
        customer.dependents = dependents;
        Ok(customer)
    }

    fn encode_record(customer: &Customer) -> Result<String, CodecError> {
        let kind = Customer::KIND;
        let full_name = storable(kind, &customer.id, "fullName", &customer.full_name)?;
        let card_number = customer.card_number().map(CardNumber::as_str).unwrap_or_default();
        let dependents = join_values(kind, &customer.id, "dependents", &customer.dependents)?;

        Ok(format!(
            "{},{},{},{},{}",
            customer.id, full_name, customer.role, card_number, dependents
        ))
    }
}
