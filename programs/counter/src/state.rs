//! # State Module
//!
//! Account layout for the counter program and the address derivation
//! shared by the on-chain seed checks and off-chain lookups.

use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::errors::CounterError;

/// Seed label the counter address is derived from
pub const COUNTER_SEED: &[u8] = b"counter";

/// The counter account
#[account]
#[derive(InitSpace, Debug, Default, PartialEq, Eq)]
pub struct Counter {
    /// The current value
    pub value: u32,
}

impl Counter {
    /// Total account size including the discriminator
    pub const SPACE: usize = 8 + Counter::INIT_SPACE;

    /// Increase the value by one
    ///
    /// # Returns
    /// * `Result<u32>` - The new value
    ///
    /// # Errors
    /// * `Overflow` - If the value is already `u32::MAX`
    pub fn increase(&mut self) -> Result<u32> {
        self.value = self
            .value
            .checked_add(1)
            .ok_or(CounterError::Overflow)?;
        Ok(self.value)
    }

    /// Deserialize a counter from raw account data
    ///
    /// An empty buffer means the account was never created and maps to
    /// `NotInitialized` rather than a zero-valued counter.
    pub fn try_from_account_data(data: &[u8]) -> Result<Self> {
        if data.is_empty() {
            return err!(CounterError::NotInitialized);
        }
        Self::try_deserialize(&mut &data[..])
    }

    /// Deserialize a counter from an account owned by `owner`
    ///
    /// Used both on-chain and for off-chain fetches. Data under any other
    /// owner is not a counter, whatever its discriminator says.
    ///
    /// # Errors
    /// * `NotInitialized` - If the account is not owned by this program or holds no data
    pub fn try_from_account(owner: &Pubkey, data: &[u8]) -> Result<Self> {
        require_keys_eq!(*owner, crate::ID, CounterError::NotInitialized);
        Self::try_from_account_data(data)
    }

    /// Load the counter stored in `info`
    pub fn load(info: &AccountInfo) -> Result<Self> {
        let data = info.try_borrow_data()?;
        Self::try_from_account(info.owner, &data)
    }

    /// Write the counter back into `info`
    pub fn store(&self, info: &AccountInfo) -> Result<()> {
        let mut data = info.try_borrow_mut_data()?;
        self.try_serialize(&mut &mut data[..])
    }

    /// Whether `info` can still be turned into a counter account
    pub fn is_vacant(info: &AccountInfo) -> bool {
        info.owner == &system_program::ID && info.data_is_empty()
    }
}

/// Derive the program address for `label` under `owner`
///
/// Pure function: the same label and owner always give the same address
/// and bump.
pub fn derive_address(label: &[u8], owner: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[label], owner)
}

/// The address of this program's counter account
pub fn counter_address() -> Pubkey {
    derive_address(COUNTER_SEED, &crate::ID).0
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    fn encoded(counter: &Counter) -> Vec<u8> {
        let mut data = Vec::new();
        counter.try_serialize(&mut data).unwrap();
        data
    }

    #[test]
    fn space_matches_discriminator_plus_u32() {
        assert_eq!(Counter::SPACE, 8 + 4);
        assert_eq!(encoded(&Counter::default()).len(), Counter::SPACE);
    }

    #[test]
    fn increase_adds_one() {
        let mut counter = Counter::default();
        assert_eq!(counter.increase().unwrap(), 1);
        assert_eq!(counter.increase().unwrap(), 2);
        assert_eq!(counter.value, 2);
    }

    #[test]
    fn increase_fails_at_max_and_keeps_value() {
        let mut counter = Counter { value: u32::MAX };
        let err = counter.increase().unwrap_err();
        assert_eq!(err, Error::from(CounterError::Overflow));
        assert_eq!(counter.value, u32::MAX);
    }

    #[test]
    fn empty_account_is_not_initialized() {
        let err = Counter::try_from_account_data(&[]).unwrap_err();
        assert_eq!(err, Error::from(CounterError::NotInitialized));
    }

    #[test]
    fn account_data_is_read_back() {
        let data = encoded(&Counter { value: 41 });
        let counter = Counter::try_from_account_data(&data).unwrap();
        assert_eq!(counter.value, 41);
    }

    #[test]
    fn account_owned_elsewhere_is_not_initialized() {
        let data = encoded(&Counter { value: 3 });
        let err = Counter::try_from_account(&Pubkey::new_unique(), &data).unwrap_err();
        assert_eq!(err, Error::from(CounterError::NotInitialized));
        assert_eq!(Counter::try_from_account(&crate::ID, &data).unwrap().value, 3);
    }

    #[test]
    fn foreign_discriminator_is_rejected() {
        let mut data = encoded(&Counter { value: 7 });
        data[0] ^= 0xff;
        assert!(Counter::try_from_account_data(&data).is_err());
    }

    #[test]
    fn derived_address_is_stable() {
        let (first, first_bump) = derive_address(COUNTER_SEED, &crate::ID);
        let (second, second_bump) = derive_address(COUNTER_SEED, &crate::ID);
        assert_eq!(first, second);
        assert_eq!(first_bump, second_bump);
        assert_eq!(counter_address(), first);
    }

    #[test]
    fn derived_address_depends_on_label_and_owner() {
        let other_owner = Pubkey::new_unique();
        assert_ne!(
            derive_address(COUNTER_SEED, &crate::ID).0,
            derive_address(COUNTER_SEED, &other_owner).0
        );
        assert_ne!(
            derive_address(COUNTER_SEED, &crate::ID).0,
            derive_address(b"other", &crate::ID).0
        );
    }
}
