use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/// Parameters of a new airdrop round
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct NewDistributorParams {
    pub version: u64,
    pub root: [u8; 32],
    /// Cap on tokens claimable, bonus pool included
    pub total_claim: u64,
    pub max_num_nodes: u64,
    pub start_vesting_ts: i64,
    pub end_vesting_ts: i64,
    pub clawback_start_ts: i64,
    pub activation_point: u64,
    pub activation_type: u8,
    pub closable: bool,
    pub total_bonus: u64,
    pub bonus_vesting_duration: u64,
    pub claim_type: u8,
    pub operator: Pubkey,
    pub locker: Pubkey,
}

impl NewDistributorParams {
    /**
     * Validates the round parameters against the current clock
     *
     * Validation Rules:
     * - Vesting start cannot be after vesting end
     * - Vesting start and end cannot be in the past
     * - Clawback starts at least one day after vesting ends
     * - Activation and claim type tags must decode
     * - Activation point within 90 days (or the slot equivalent)
     * - Permissioned claim types need an operator, staking ones a locker
     * - The bonus pool fits inside the total claim cap
     */
    pub fn validate(&self, curr_slot: u64, curr_ts: i64) -> Result<()> {
        require!(
            self.start_vesting_ts <= self.end_vesting_ts,
            DistributorError::StartTimestampAfterEnd
        );
        require!(
            self.start_vesting_ts >= curr_ts && self.end_vesting_ts >= curr_ts,
            DistributorError::TimestampsNotInFuture
        );

        let min_clawback_start = self
            .end_vesting_ts
            .checked_add(SECONDS_PER_DAY)
            .ok_or(DistributorError::ArithmeticError)?;
        require!(
            self.clawback_start_ts >= min_clawback_start,
            DistributorError::InsufficientClawbackDelay
        );

        let activation_type = ActivationType::try_from(self.activation_type)?;
        let current_point = activation_type.current_point(curr_slot, curr_ts)?;
        MerkleDistributor::validate_activation_point(
            activation_type,
            self.activation_point,
            current_point,
        )?;

        let claim_type = ClaimType::try_from(self.claim_type)?;
        if claim_type.is_permissioned() {
            require_keys_neq!(
                self.operator,
                Pubkey::default(),
                DistributorError::InvalidOperator
            );
        }
        if claim_type.is_staking() {
            require_keys_neq!(
                self.locker,
                Pubkey::default(),
                DistributorError::InvalidLocker
            );
        }

        require!(
            self.total_bonus <= self.total_claim,
            DistributorError::ExceededMaxClaim
        );
        Ok(())
    }
}

/**
 * Account context for creating a new merkle distributor
 *
 * - Creates the distributor PDA for (base, mint, version)
 * - The token vault is the distributor's associated token account and must
 *   exist beforehand, it is funded separately
 *
 * Access Control: admin pays and signs, base signs to claim the PDA namespace
 */
#[event_cpi]
#[derive(Accounts)]
#[instruction(params: NewDistributorParams)]
pub struct NewDistributor<'info> {
    /// The distributor account (PDA)
    /// - Derived from: ["MerkleDistributor", base, mint, version]
    #[account(
        init,
        seeds = [
            DISTRIBUTOR_SEED.as_bytes(),
            base.key().as_ref(),
            mint.key().as_ref(),
            params.version.to_le_bytes().as_ref()
        ],
        bump,
        space = MerkleDistributor::LEN,
        payer = admin
    )]
    pub distributor: Box<Account<'info, MerkleDistributor>>,

    /// Base key of the distributor
    pub base: Signer<'info>,

    /// Clawback receiver token account
    #[account(
        token::mint = mint,
        token::token_program = token_program,
    )]
    pub clawback_receiver: Box<InterfaceAccount<'info, TokenAccount>>,

    /// The mint to distribute
    #[account(mint::token_program = token_program)]
    pub mint: Box<InterfaceAccount<'info, Mint>>,

    /// Token vault, the distributor's associated token account
    #[account(
        associated_token::mint = mint,
        associated_token::authority = distributor,
        associated_token::token_program = token_program,
    )]
    pub token_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Admin wallet, pays for the distributor account
    /// - Can change the activation point, clawback receiver, operator and itself
    #[account(mut)]
    pub admin: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Creates a new merkle distributor
 *
 * READ THE FOLLOWING:
 * The parameters are not bound to anything the base or admin committed to
 * earlier. After the transaction lands, read the account back and check the
 * clawback receiver, admin and timing are the expected ones.
 *
 * @param ctx - The account context containing all required accounts
 * @param params - Round parameters
 */
pub fn handle_new_distributor(
    ctx: Context<NewDistributor>,
    params: &NewDistributorParams,
) -> Result<()> {
    let clock = Clock::get()?;
    params.validate(clock.slot, clock.unix_timestamp)?;

    let distributor = &mut ctx.accounts.distributor;

    distributor.root = params.root;
    distributor.mint = ctx.accounts.mint.key();
    distributor.base = ctx.accounts.base.key();
    distributor.token_vault = ctx.accounts.token_vault.key();
    distributor.clawback_receiver = ctx.accounts.clawback_receiver.key();
    distributor.admin = ctx.accounts.admin.key();
    distributor.locker = params.locker;
    distributor.operator = params.operator;
    distributor.version = params.version;
    distributor.max_total_claim = params.total_claim;
    distributor.max_num_nodes = params.max_num_nodes;
    distributor.start_ts = params.start_vesting_ts;
    distributor.end_ts = params.end_vesting_ts;
    distributor.clawback_start_ts = params.clawback_start_ts;
    distributor.activation_point = params.activation_point;
    distributor.activation_type = params.activation_type;
    distributor.claim_type = params.claim_type;
    distributor.bump = ctx.bumps.distributor;
    distributor.closable = u8::from(params.closable);
    distributor.airdrop_bonus = AirdropBonus {
        total_bonus: params.total_bonus,
        vesting_duration: params.bonus_vesting_duration,
        total_claimed_bonus: 0,
    };
    // Counters, clawed_back and padding keep their zeroed defaults

    msg!(
        "New distributor version {} with max claim {} over {} nodes, vesting {}..{}",
        params.version,
        params.total_claim,
        params.max_num_nodes,
        params.start_vesting_ts,
        params.end_vesting_ts,
    );

    emit_cpi!(DistributorCreated {
        distributor: distributor.key(),
        base: distributor.base,
        mint: distributor.mint,
        version: params.version,
        admin: distributor.admin,
        max_total_claim: params.total_claim,
        max_num_nodes: params.max_num_nodes,
        total_bonus: params.total_bonus,
        claim_type: params.claim_type,
    });

    Ok(())
}
