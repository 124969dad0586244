//! Entity trait implementation for the BankAccount domain type.

use super::actions::{AccountAction, AccountActionResult};
use super::AccountError;
use crate::framework::Entity;
use crate::model::{AccountCreate, BankAccount};

impl Entity for BankAccount {
    type CreateParams = AccountCreate;
    type UpdateParams = ();
    type Action = AccountAction;
    type ActionResult = AccountActionResult;
    type Error = AccountError;

    fn from_create_params(params: AccountCreate) -> Result<Self, AccountError> {
        Ok(Self::new(params.owner, params.balance, params.currency)?)
    }

    fn handle_action(&mut self, action: AccountAction) -> Result<AccountActionResult, AccountError> {
        match action {
            AccountAction::CheckBalance => Ok(AccountActionResult::CheckBalance(self.balance())),
            AccountAction::Deposit(amount) => {
                self.deposit(amount)?;
                Ok(AccountActionResult::Deposit(self.balance()))
            }
            AccountAction::Withdraw(amount) => {
                self.withdraw(amount)?;
                Ok(AccountActionResult::Withdraw(self.balance()))
            }
        }
    }
}
