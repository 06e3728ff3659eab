//! Insurance registry
//!
//! The registry owns the customer, card, and claim stores for one run and is
//! the layer that decides whether a change is allowed. Every operation
//! validates first and mutates second, so a rejected operation never leaves
//! a store half-changed.
//!
//! # Invariants
//!
//! - Customer IDs, card numbers, and claim IDs are unique in their store
//! - Every card a customer holds is also present in the card store
//! - A card is held by at most one customer
//! - Dependent links never form a cycle when created through the registry
//!
//! Dependent links are customer IDs. Deleting a customer does not touch the
//! lists that name it; such links stop resolving and are reported by
//! [`InsuranceRegistry::dangling_dependents`].

use core_kernel::{CardNumber, ClaimId, CustomerId};
use domain_claims::Claim;
use domain_party::{creates_cycle, Customer, InsuranceCard, PartyError};

use crate::codec::LoadWarning;
use crate::error::{CodecError, StoreError};
use crate::flat_file::{FlatFileStore, LoadedData};
use crate::record::RecordKind;
use crate::requests::{
    NewCardRequest, NewClaimRequest, NewCustomerRequest, UpdateClaimRequest,
    UpdateCustomerRequest,
};
use crate::store::{InMemoryStore, RecordStore};

/// The record stores of one program run
#[derive(Debug, Clone, Default)]
pub struct InsuranceRegistry {
    customers: InMemoryStore<Customer>,
    cards: InMemoryStore<InsuranceCard>,
    claims: InMemoryStore<Claim>,
}

impl InsuranceRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from freshly loaded records
    ///
    /// Customers are given the full card from the card file when one exists;
    /// a card number missing from the card file is registered as a
    /// number-only card.
    pub fn from_loaded(data: LoadedData) -> (Self, Vec<LoadWarning>) {
        let mut registry = Self::new();
        let mut warnings = Vec::new();

        registry.cards = data.cards.into_iter().collect();

        for mut customer in data.customers {
            if let Some(number) = customer.card_number().cloned() {
                if let Some(owner) = registry.owner_of_card(&number) {
                    tracing::warn!(card = %number, owner = %owner.id, customer = %customer.id, "Card listed for two customers");
                    warnings.push(LoadWarning::SharedCard {
                        card: number.to_string(),
                        owner: owner.id.to_string(),
                        customer: customer.id.to_string(),
                    });
                }
                let card = match registry.cards.get_one(&number) {
                    Some(card) => card.clone(),
                    None => {
                        let card = InsuranceCard::number_only(number);
                        registry.cards.add(card.clone());
                        card
                    }
                };
                customer.set_insurance_card(Some(card));
            }
            registry.customers.add(customer);
        }

        for holder in registry.customers.iter() {
            for dependent in registry.dangling_dependents(&holder.id) {
                tracing::warn!(holder = %holder.id, %dependent, "Dependent does not resolve");
                warnings.push(LoadWarning::DanglingDependent {
                    holder: holder.id.clone(),
                    dependent,
                });
            }
        }

        registry.claims = data.claims.into_iter().collect();

        tracing::info!(
            customers = registry.customers.len(),
            cards = registry.cards.len(),
            claims = registry.claims.len(),
            "Registry ready"
        );
        (registry, warnings)
    }

    /// Rewrites all three record files
    pub fn save(&self, files: &FlatFileStore) -> Result<(), CodecError> {
        files.save_cards(self.cards.iter())?;
        files.save_customers(self.customers.iter())?;
        files.save_claims(self.claims.iter())?;
        Ok(())
    }

    /// Customer store
    pub fn customers(&self) -> &InMemoryStore<Customer> {
        &self.customers
    }

    /// Card store
    pub fn cards(&self) -> &InMemoryStore<InsuranceCard> {
        &self.cards
    }

    /// Claim store
    pub fn claims(&self) -> &InMemoryStore<Claim> {
        &self.claims
    }

    // ========================================================================
    // Customers
    // ========================================================================

    /// Returns the customer with `id`
    pub fn customer(&self, id: &CustomerId) -> Option<&Customer> {
        self.customers.get_one(id)
    }

    /// Returns the customer holding card `number`
    pub fn owner_of_card(&self, number: &CardNumber) -> Option<&Customer> {
        self.customers.iter().find(|c| c.card_number() == Some(number))
    }

    /// Registers a new customer
    ///
    /// Rejects a duplicate ID, a card held by someone else, and dependents
    /// that do not exist or would create a cycle.
    pub fn add_customer(&mut self, request: NewCustomerRequest) -> Result<Customer, StoreError> {
        let valid = request.validate()?;
        if self.customers.contains(&valid.id) {
            return Err(StoreError::duplicate(RecordKind::Customer, &valid.id));
        }

        let mut customer = Customer::new(valid.id, valid.full_name).with_role(valid.role);
        for dependent in valid.dependents {
            self.require_customer(&dependent)?;
            let cycle = creates_cycle(&customer.id, &dependent, |id| self.dependent_ids(id));
            customer.add_dependent(dependent.clone())?;
            if cycle {
                return Err(PartyError::circular(&customer.id, &dependent).into());
            }
        }

        let new_card = match valid.card_number {
            Some(number) => {
                let (card, is_new) = self.card_for(&customer.id, number)?;
                customer.set_insurance_card(Some(card.clone()));
                is_new.then_some(card)
            }
            None => None,
        };

        if let Some(card) = new_card {
            self.cards.add(card);
        }
        self.customers.add(customer.clone());
        tracing::info!(customer_id = %customer.id, role = %customer.role, "Customer added");
        Ok(customer)
    }

    /// Renames a customer and/or changes the number of their card
    ///
    /// Returns `Ok(None)` when the customer does not exist. A customer
    /// without a card is given a number-only card.
    pub fn update_customer(
        &mut self,
        id: &CustomerId,
        request: UpdateCustomerRequest,
    ) -> Result<Option<Customer>, StoreError> {
        let (full_name, card_number) = request.validate()?;
        let Some(mut updated) = self.customers.get_one(id).cloned() else {
            return Ok(None);
        };

        if let Some(name) = full_name {
            updated.rename(name);
        }

        let mut replaced_card = None;
        if let Some(number) = card_number {
            if updated.card_number() != Some(&number) {
                if self.cards.contains(&number) {
                    return Err(StoreError::duplicate(RecordKind::InsuranceCard, &number));
                }
                replaced_card = Some(updated.card_number().cloned());
                match updated.update_insurance_card_number(number.clone()) {
                    Ok(()) => {}
                    Err(PartyError::NoInsuranceCard(_)) => {
                        updated.set_insurance_card(Some(InsuranceCard::number_only(number)));
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        }

        if let Some(old_number) = replaced_card {
            if let Some(old_number) = old_number {
                self.cards.delete(&old_number);
            }
            if let Some(card) = &updated.insurance_card {
                self.cards.add(card.clone());
            }
        }
        self.customers.update(updated.clone());
        tracing::info!(customer_id = %id, "Customer updated");
        Ok(Some(updated))
    }

    /// Removes a customer
    ///
    /// Their card stays in the card store, unattached. Lists naming the
    /// customer as a dependent are left as they are.
    pub fn delete_customer(&mut self, id: &CustomerId) -> Option<Customer> {
        let removed = self.customers.delete(id)?;
        let referencing = self.customers.iter().filter(|c| c.has_dependent(id)).count();
        if referencing > 0 {
            tracing::warn!(customer_id = %id, referencing, "Deleted customer is still listed as a dependent");
        }
        tracing::info!(customer_id = %id, "Customer deleted");
        Some(removed)
    }

    /// Lists `dependent` under policy holder `holder`
    pub fn add_dependent(&mut self, holder: &CustomerId, dependent: &CustomerId) -> Result<(), StoreError> {
        let mut updated = self.require_customer(holder)?.clone();
        self.require_customer(dependent)?;

        updated.add_dependent(dependent.clone())?;
        if creates_cycle(holder, dependent, |id| self.dependent_ids(id)) {
            return Err(PartyError::circular(holder, dependent).into());
        }

        self.customers.update(updated);
        tracing::info!(%holder, %dependent, "Dependent added");
        Ok(())
    }

    /// Removes `dependent` from `holder`'s list, returning whether it was listed
    pub fn remove_dependent(&mut self, holder: &CustomerId, dependent: &CustomerId) -> bool {
        let Some(mut updated) = self.customers.get_one(holder).cloned() else {
            return false;
        };
        let removed = updated.remove_dependent(dependent);
        if removed {
            self.customers.update(updated);
        }
        removed
    }

    /// Resolves `holder`'s dependents, skipping links that no longer resolve
    pub fn dependents_of(&self, holder: &CustomerId) -> Vec<&Customer> {
        self.dependent_ids(holder)
            .unwrap_or_default()
            .iter()
            .filter_map(|id| self.customers.get_one(id))
            .collect()
    }

    /// Returns the dependent IDs of `holder` that name no existing customer
    pub fn dangling_dependents(&self, holder: &CustomerId) -> Vec<CustomerId> {
        self.dependent_ids(holder)
            .unwrap_or_default()
            .iter()
            .filter(|id| !self.customers.contains(id))
            .cloned()
            .collect()
    }

    fn dependent_ids(&self, id: &CustomerId) -> Option<&[CustomerId]> {
        self.customers.get_one(id).map(|c| c.dependents.as_slice())
    }

    fn require_customer(&self, id: &CustomerId) -> Result<&Customer, StoreError> {
        self.customers
            .get_one(id)
            .ok_or_else(|| StoreError::not_found(RecordKind::Customer, id))
    }

    /// Finds or creates the card `number` for `customer`
    ///
    /// Returns the card and whether it still has to be registered.
    fn card_for(&self, customer: &CustomerId, number: CardNumber) -> Result<(InsuranceCard, bool), StoreError> {
        if let Some(owner) = self.owner_of_card(&number) {
            if &owner.id != customer {
                return Err(StoreError::CardOwned {
                    card: number.to_string(),
                    owner: owner.id.to_string(),
                });
            }
        }
        Ok(match self.cards.get_one(&number) {
            Some(card) => (card.clone(), false),
            None => (InsuranceCard::number_only(number), true),
        })
    }

    // ========================================================================
    // Insurance cards
    // ========================================================================

    /// Returns the card with `number`
    pub fn card(&self, number: &CardNumber) -> Option<&InsuranceCard> {
        self.cards.get_one(number)
    }

    /// Registers a card
    ///
    /// A number-only card already in the store is replaced by the full card,
    /// and its holder's copy is refreshed. An issued card is a duplicate.
    pub fn add_card(&mut self, request: NewCardRequest) -> Result<InsuranceCard, StoreError> {
        let card = request.validate()?;
        if self.cards.get_one(&card.card_number).is_some_and(InsuranceCard::is_issued) {
            return Err(StoreError::duplicate(RecordKind::InsuranceCard, &card.card_number));
        }

        self.cards.add(card.clone());
        if let Some(mut owner) = self.owner_of_card(&card.card_number).cloned() {
            owner.set_insurance_card(Some(card.clone()));
            self.customers.update(owner);
        }
        tracing::info!(card = %card.card_number, "Insurance card added");
        Ok(card)
    }

    /// Gives an existing card to a customer
    ///
    /// The customer's previous card, if any, stays in the card store.
    pub fn assign_card(&mut self, customer: &CustomerId, number: &CardNumber) -> Result<(), StoreError> {
        let mut updated = self.require_customer(customer)?.clone();
        let card = self
            .cards
            .get_one(number)
            .cloned()
            .ok_or_else(|| StoreError::not_found(RecordKind::InsuranceCard, number))?;
        let (card, _) = self.card_for(customer, card.card_number)?;

        updated.set_insurance_card(Some(card));
        self.customers.update(updated);
        tracing::info!(customer_id = %customer, card = %number, "Insurance card assigned");
        Ok(())
    }

    /// Removes a card, detaching it from every customer holding it
    ///
    /// More than one holder is only possible after loading a file that lists
    /// the card twice.
    pub fn delete_card(&mut self, number: &CardNumber) -> Option<InsuranceCard> {
        let removed = self.cards.delete(number)?;
        let holders: Vec<Customer> = self
            .customers
            .iter()
            .filter(|c| c.card_number() == Some(number))
            .cloned()
            .collect();
        for mut holder in holders {
            holder.set_insurance_card(None);
            tracing::info!(card = %number, customer_id = %holder.id, "Card detached from customer");
            self.customers.update(holder);
        }
        tracing::info!(card = %number, "Insurance card deleted");
        Some(removed)
    }

    // ========================================================================
    // Claims
    // ========================================================================

    /// Returns the claim with `id`
    pub fn claim(&self, id: &ClaimId) -> Option<&Claim> {
        self.claims.get_one(id)
    }

    /// Files a new claim
    ///
    /// The card number is not checked against the card store.
    pub fn add_claim(&mut self, request: NewClaimRequest) -> Result<Claim, StoreError> {
        let claim = request.validate()?;
        if self.claims.contains(&claim.id) {
            return Err(StoreError::duplicate(RecordKind::Claim, &claim.id));
        }
        if !self.cards.contains(&claim.card_number) {
            tracing::debug!(claim_id = %claim.id, card = %claim.card_number, "Claim filed against unregistered card");
        }

        self.claims.add(claim.clone());
        tracing::info!(claim_id = %claim.id, "Claim added");
        Ok(claim)
    }

    /// Applies `request` to an existing claim
    ///
    /// Returns `Ok(None)` when the claim does not exist.
    pub fn update_claim(&mut self, id: &ClaimId, request: UpdateClaimRequest) -> Result<Option<Claim>, StoreError> {
        let Some(current) = self.claims.get_one(id) else {
            return Ok(None);
        };
        let updated = request.apply(current)?;
        self.claims.update(updated.clone());
        tracing::info!(claim_id = %id, status = %updated.status, "Claim updated");
        Ok(Some(updated))
    }

    /// Removes a claim
    pub fn delete_claim(&mut self, id: &ClaimId) -> Option<Claim> {
        let removed = self.claims.delete(id)?;
        tracing::info!(claim_id = %id, "Claim deleted");
        Some(removed)
    }

    /// Returns the claims filed against card `number`
    pub fn claims_for_card(&self, number: &CardNumber) -> Vec<&Claim> {
        self.claims.iter().filter(|c| &c.card_number == number).collect()
    }

    /// Returns the claims filed against the card `customer` holds
    pub fn claims_for_customer(&self, customer: &CustomerId) -> Vec<&Claim> {
        self.customers
            .get_one(customer)
            .and_then(Customer::card_number)
            .map(|number| self.claims_for_card(number))
            .unwrap_or_default()
    }
}
