use soroban_sdk::{log, token, Address, Env};

use crate::errors::AuctionError;
use crate::event::{BalanceCredited, Withdrawn, CREDIT, ESCROW, WITHDRAW};
use crate::types::DataKey;

/// Funds owed to bidders and sellers. Balances are only ever paid out by a
/// `withdraw` the owner starts; nothing here pushes funds during an auction
/// transition.
pub struct EscrowLedger;

impl EscrowLedger {
    pub fn balance(env: &Env, account: &Address) -> i128 {
        env.storage()
            .persistent()
            .get(&DataKey::Balance(account.clone()))
            .unwrap_or(0)
    }

    /// Add `amount` to what `account` may withdraw.
    pub fn credit(env: &Env, account: &Address, amount: i128) {
        let balance = Self::balance(env, account) + amount;
        env.storage()
            .persistent()
            .set(&DataKey::Balance(account.clone()), &balance);

        env.events().publish(
            (ESCROW, CREDIT, account.clone()),
            BalanceCredited {
                account: account.clone(),
                amount,
            },
        );
    }

    /// Pull `amount` of the payment token from `from` into engine custody.
    pub fn deposit(env: &Env, payment_token: &Address, from: &Address, amount: i128) {
        token::Client::new(env, payment_token).transfer(
            from,
            &env.current_contract_address(),
            &amount,
        );
    }

    /// Pay out the whole balance of `account` and return the amount paid.
    ///
    /// The entry is cleared before the token transfer is made, so any call
    /// that reaches the engine during the transfer sees a zero balance.
    pub fn withdraw(
        env: &Env,
        payment_token: &Address,
        account: &Address,
    ) -> Result<i128, AuctionError> {
        let amount = Self::balance(env, account);
        if amount <= 0 {
            return Err(AuctionError::NothingToWithdraw);
        }

        env.storage()
            .persistent()
            .remove(&DataKey::Balance(account.clone()));

        token::Client::new(env, payment_token).transfer(
            &env.current_contract_address(),
            account,
            &amount,
        );

        log!(env, "escrow withdrawn: account {}, amount {}", account, amount);
        env.events().publish(
            (ESCROW, WITHDRAW, account.clone()),
            Withdrawn {
                account: account.clone(),
                amount,
            },
        );
        Ok(amount)
    }
}
