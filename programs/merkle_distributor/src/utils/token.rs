use anchor_lang::prelude::*;
use anchor_spl::token_interface::{close_account, transfer_checked, CloseAccount, TransferChecked};

/// Moves tokens out of a distributor vault, signed by the distributor PDA.
/// Works with both SPL Token and Token 2022.
pub fn transfer_from_vault<'a>(
    distributor: AccountInfo<'a>,
    token_vault: AccountInfo<'a>,
    destination: AccountInfo<'a>,
    mint: AccountInfo<'a>,
    token_program: AccountInfo<'a>,
    amount: u64,
    decimals: u8,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let cpi_accounts = TransferChecked {
        from: token_vault,
        mint,
        to: destination,
        authority: distributor,
    };

    transfer_checked(
        CpiContext::new_with_signer(token_program, cpi_accounts, signer_seeds),
        amount,
        decimals,
    )
}

/// Closes an emptied distributor vault, rent goes to `destination`
pub fn close_vault<'a>(
    token_vault: AccountInfo<'a>,
    destination: AccountInfo<'a>,
    distributor: AccountInfo<'a>,
    token_program: AccountInfo<'a>,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let close_accounts = CloseAccount {
        account: token_vault,
        destination,
        authority: distributor,
    };

    close_account(CpiContext::new_with_signer(
        token_program,
        close_accounts,
        signer_seeds,
    ))
}
