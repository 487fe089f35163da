use anchor_lang::prelude::*;
use anchor_spl::token_interface::{TokenAccount, TokenInterface};
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::utils::{increase_locked_amount, settle_new_claim, ClaimRequest, EscrowPrefix};
use crate::event::*;

/**
 * Account context for a first claim deposited into the voter escrow
 *
 * Same checks as new_claim, but the payout goes into the claimant's max-lock
 * escrow of the distributor locker instead of a token account.
 *
 * Access Control: The claimant, plus the operator for permissioned distributors
 */
#[event_cpi]
#[derive(Accounts)]
pub struct NewClaimAndStake<'info> {
    /// The distributor account
    #[account(
        mut,
        has_one = token_vault,
        has_one = locker @ DistributorError::InvalidLocker,
    )]
    pub distributor: Box<Account<'info, MerkleDistributor>>,

    /// Claim status PDA, created here so a second first claim fails
    /// - Derived from: ["ClaimStatus", claimant, distributor]
    #[account(
        init,
        seeds = [
            CLAIM_STATUS_SEED.as_bytes(),
            claimant.key().as_ref(),
            distributor.key().as_ref()
        ],
        bump,
        space = ClaimStatus::LEN,
        payer = claimant
    )]
    pub claim_status: Box<Account<'info, ClaimStatus>>,

    /// Distributor ATA containing the tokens to distribute
    #[account(mut)]
    pub token_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Who is claiming the tokens, pays for the claim status
    #[account(mut)]
    pub claimant: Signer<'info>,

    /// Operator co-signature, required by permissioned distributors
    pub operator: Option<Signer<'info>>,

    /// Voter program
    /// CHECK: Pinned to the locked voter program id
    #[account(address = VOTER_PROGRAM_ID)]
    pub voter_program: AccountInfo<'info>,

    /// Voter locker
    /// CHECK: Matched against distributor.locker, validated by the voter program
    #[account(mut)]
    pub locker: AccountInfo<'info>,

    /// Claimant's escrow in the locker
    /// CHECK: Owner and layout are checked when decoding the escrow prefix
    #[account(mut)]
    pub escrow: AccountInfo<'info>,

    /// Token account held by the escrow
    #[account(
        mut,
        token::mint = distributor.mint,
        token::token_program = token_program,
    )]
    pub escrow_tokens: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

pub fn handle_new_claim_and_stake(
    ctx: Context<NewClaimAndStake>,
    amount_unlocked: u64,
    amount_locked: u64,
    proof: Vec<[u8; 32]>,
) -> Result<()> {
    let clock = Clock::get()?;
    let distributor_key = ctx.accounts.distributor.key();
    let request = ClaimRequest {
        claimant: ctx.accounts.claimant.key(),
        operator: ctx.accounts.operator.as_ref().map(|operator| operator.key()),
        staking: true,
        curr_slot: clock.slot,
        curr_ts: clock.unix_timestamp,
    };

    // ===== VALIDATION AND EFFECTS =====

    EscrowPrefix::load(&ctx.accounts.escrow)?.validate(
        ctx.accounts.distributor.locker,
        request.claimant,
        ctx.accounts.escrow_tokens.key(),
    )?;

    let distributor = &mut ctx.accounts.distributor;
    let claimable = settle_new_claim(
        distributor,
        distributor_key,
        &mut ctx.accounts.claim_status,
        &request,
        amount_unlocked,
        amount_locked,
        proof,
    )?;
    let amount = claimable.total()?;

    let version_bytes = distributor.version.to_le_bytes();
    let base_key = distributor.base;
    let mint_key = distributor.mint;
    let distributor_bump = distributor.bump;

    // ===== INTERACTIONS PHASE =====

    let seeds = &[
        DISTRIBUTOR_SEED.as_bytes(),
        base_key.as_ref(),
        mint_key.as_ref(),
        version_bytes.as_ref(),
        &[distributor_bump],
    ];
    let signer = &[&seeds[..]];

    increase_locked_amount(
        ctx.accounts.voter_program.to_account_info(),
        ctx.accounts.locker.to_account_info(),
        ctx.accounts.escrow.to_account_info(),
        ctx.accounts.escrow_tokens.to_account_info(),
        ctx.accounts.distributor.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        signer,
    )?;

    msg!(
        "Staked unlocked {} and bonus {}, locked {} left to vest",
        claimable.unlocked,
        claimable.bonus,
        amount_locked,
    );

    emit_cpi!(NewClaimEvent {
        claimant: request.claimant,
        timestamp: request.curr_ts,
    });
    emit_cpi!(ClaimedEvent {
        claimant: request.claimant,
        amount,
    });

    Ok(())
}
