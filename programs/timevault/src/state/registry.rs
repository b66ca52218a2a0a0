//! Point lookup and in-place update for transfer record PDAs.
//!
//! Insertion goes through Anchor `init` on the PDA derived from the
//! scheduler counter, so an id can only ever be written once.

use anchor_lang::prelude::*;

use super::TransferRecord;
use crate::error::EscrowError;

/// Read the record stored at `info`, or `None` if the PDA was never initialized.
pub fn get(info: &AccountInfo) -> Result<Option<TransferRecord>> {
    if info.owner != &crate::ID || info.data_is_empty() {
        return Ok(None);
    }
    let data = info.try_borrow_data()?;
    let record = TransferRecord::try_deserialize(&mut &data[..])?;
    Ok(Some(record))
}

/// Write back a record whose only change since [`get`] is `is_completed`
/// flipping to true.
pub fn store_completed(info: &AccountInfo, record: &TransferRecord) -> Result<()> {
    let current = get(info)?.ok_or(EscrowError::TransferNotFound)?;
    require!(!current.is_completed, EscrowError::AlreadyExecuted);
    require!(
        record.is_completed
            && current
                == TransferRecord {
                    is_completed: false,
                    ..record.clone()
                },
        EscrowError::TransferFailure
    );

    let mut data = info.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data;
    record.try_serialize(&mut writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    fn code(err: Error) -> u32 {
        match err {
            Error::AnchorError(e) => e.error_code_number,
            Error::ProgramError(e) => panic!("unexpected program error: {e:?}"),
        }
    }

    fn sample() -> TransferRecord {
        TransferRecord {
            id: 3,
            sender: Pubkey::new_from_array([1; 32]),
            recipient: Pubkey::new_from_array([2; 32]),
            amount: 1_000,
            fee_paid: 50,
            unlock_at_block: 105,
            is_completed: false,
            bump: 253,
        }
    }

    fn encoded(record: &TransferRecord) -> Vec<u8> {
        let mut data = vec![0u8; 8 + TransferRecord::SIZE];
        record.try_serialize(&mut &mut data[..]).unwrap();
        data
    }

    #[test]
    fn empty_pda_reads_as_none() {
        let key = Pubkey::new_from_array([9; 32]);
        let mut lamports = 0u64;
        let mut data: Vec<u8> = Vec::new();
        let info = AccountInfo::new(
            &key,
            false,
            true,
            &mut lamports,
            &mut data,
            &crate::ID,
            false,
            0,
        );

        assert!(get(&info).unwrap().is_none());
        assert_eq!(
            code(store_completed(&info, &sample()).unwrap_err()),
            u32::from(EscrowError::TransferNotFound)
        );
    }

    #[test]
    fn foreign_owner_reads_as_none() {
        let key = Pubkey::new_from_array([9; 32]);
        let other_program = Pubkey::new_from_array([7; 32]);
        let mut lamports = 1u64;
        let mut data = encoded(&sample());
        let info = AccountInfo::new(
            &key,
            false,
            true,
            &mut lamports,
            &mut data,
            &other_program,
            false,
            0,
        );

        assert!(get(&info).unwrap().is_none());
    }

    #[test]
    fn wrong_discriminator_is_rejected() {
        let key = Pubkey::new_from_array([9; 32]);
        let mut lamports = 1u64;
        let mut data = encoded(&sample());
        data[..8].copy_from_slice(&[0xAA; 8]);
        let info = AccountInfo::new(
            &key,
            false,
            true,
            &mut lamports,
            &mut data,
            &crate::ID,
            false,
            0,
        );

        assert!(get(&info).is_err());
    }

    #[test]
    fn completion_is_written_in_place_once() {
        let key = Pubkey::new_from_array([9; 32]);
        let mut lamports = 1u64;
        let mut data = encoded(&sample());
        let info = AccountInfo::new(
            &key,
            false,
            true,
            &mut lamports,
            &mut data,
            &crate::ID,
            false,
            0,
        );

        let mut record = get(&info).unwrap().unwrap();
        assert_eq!(record, sample());
        record.mark_completed().unwrap();
        store_completed(&info, &record).unwrap();

        let stored = get(&info).unwrap().unwrap();
        assert_eq!(
            stored,
            TransferRecord {
                is_completed: true,
                ..sample()
            }
        );

        let before = info.try_borrow_data().unwrap().to_vec();
        assert_eq!(
            code(store_completed(&info, &record).unwrap_err()),
            u32::from(EscrowError::AlreadyExecuted)
        );
        assert_eq!(info.try_borrow_data().unwrap().to_vec(), before);
    }

    #[test]
    fn only_the_completion_flag_may_change() {
        let key = Pubkey::new_from_array([9; 32]);
        let mut lamports = 1u64;
        let mut data = encoded(&sample());
        let info = AccountInfo::new(
            &key,
            false,
            true,
            &mut lamports,
            &mut data,
            &crate::ID,
            false,
            0,
        );

        let tampered = TransferRecord {
            amount: 2_000,
            is_completed: true,
            ..sample()
        };
        assert_eq!(
            code(store_completed(&info, &tampered).unwrap_err()),
            u32::from(EscrowError::TransferFailure)
        );
        // Not flagged complete: nothing to store.
        assert!(store_completed(&info, &sample()).is_err());
        assert_eq!(get(&info).unwrap().unwrap(), sample());
    }
}
