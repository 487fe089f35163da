use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::utils::{settle_new_claim, transfer_from_vault, ClaimRequest};
use crate::event::*;

/**
 * Account context for a first claim
 *
 * Creates the claimant's ClaimStatus and pays the unlocked bucket together
 * with the bonus vested so far. The locked bucket is released later through
 * claim_locked.
 *
 * Access Control: The claimant, plus the operator for permissioned distributors
 */
#[event_cpi]
#[derive(Accounts)]
pub struct NewClaim<'info> {
    /// The distributor account
    /// - Counters are updated with the claimed amounts
    #[account(
        mut,
        has_one = token_vault,
        has_one = mint,
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

    /// Account to send the claimed tokens to
    #[account(
        mut,
        token::mint = mint,
        token::token_program = token_program,
        constraint = to.owner == claimant.key() @ DistributorError::OwnerMismatch
    )]
    pub to: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Who is claiming the tokens, pays for the claim status
    #[account(mut)]
    pub claimant: Signer<'info>,

    /// Operator co-signature, required by permissioned distributors
    pub operator: Option<Signer<'info>>,

    /// The token mint, needed by transfer_checked
    pub mint: Box<InterfaceAccount<'info, Mint>>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/**
 * Processes a first claim
 *
 * @param ctx - The account context containing all required accounts
 * @param amount_unlocked - Unlocked amount committed in the merkle tree
 * @param amount_locked - Locked amount committed in the merkle tree
 * @param proof - Sibling hashes from the leaf up to the root
 */
pub fn handle_new_claim(
    ctx: Context<NewClaim>,
    amount_unlocked: u64,
    amount_locked: u64,
    proof: Vec<[u8; 32]>,
) -> Result<()> {
    let clock = Clock::get()?;
    let distributor_key = ctx.accounts.distributor.key();
    let request = ClaimRequest {
        claimant: ctx.accounts.claimant.key(),
        operator: ctx.accounts.operator.as_ref().map(|operator| operator.key()),
        staking: false,
        curr_slot: clock.slot,
        curr_ts: clock.unix_timestamp,
    };

    // ===== VALIDATION AND EFFECTS =====

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

    transfer_from_vault(
        ctx.accounts.distributor.to_account_info(),
        ctx.accounts.token_vault.to_account_info(),
        ctx.accounts.to.to_account_info(),
        ctx.accounts.mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.mint.decimals,
        signer,
    )?;

    msg!(
        "Claimed unlocked {} and bonus {}, locked {} left to vest",
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
