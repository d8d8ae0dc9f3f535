use crate::err::VaultError;
use crate::libraries::MulDiv;
use anchor_lang::prelude::*;

/// Account struct holding the global vault state
#[account]
#[derive(InitSpace)]
pub struct VaultState {
    /// Unix timestamp of the last effective yield check
    pub last_yield_check: i64,
    /// Best protocol yield seen so far, in basis points
    pub current_best_yield: u64,
    /// Total USDC held by the vault, in raw units
    pub total_deposits: u64,
    /// Name of the protocol currently holding the funds
    #[max_len(32)]
    pub current_best_protocol: String,
    /// Mint of the NCT share token
    pub nct_mint: Pubkey,
}

impl VaultState {
    /// Prefix for vault state PDA derivation
    pub const VAULT_PREFIX: &'static [u8; 11] = b"nectar_acct";

    /// Resets the vault to its post-creation state.
    pub fn init(&mut self, now: i64, nct_mint: Pubkey) {
        self.last_yield_check = now;
        self.current_best_yield = 0;
        self.total_deposits = 0;
        self.current_best_protocol = crate::consts::NO_PROTOCOL.to_string();
        self.nct_mint = nct_mint;
    }

    /// Shares owed for a deposit of `amount` USDC.
    ///
    /// The first deposit mints 1:1; afterwards shares are minted pro rata
    /// against the outstanding supply, rounding down.
    pub fn shares_to_mint(&self, amount: u64, nct_supply: u64) -> Result<u64> {
        if self.total_deposits == 0 {
            return Ok(amount);
        }

        amount
            .mul_div_floor(nct_supply, self.total_deposits)
            .ok_or_else(|| error!(VaultError::MathOverflow))
    }

    /// USDC owed for redeeming `nct_amount` shares, rounding down.
    pub fn redeem_amount(&self, nct_amount: u64, nct_supply: u64) -> Result<u64> {
        if nct_supply == 0 {
            return Err(error!(VaultError::NoShareSupply));
        }

        nct_amount
            .mul_div_floor(self.total_deposits, nct_supply)
            .ok_or_else(|| error!(VaultError::MathOverflow))
    }
}
