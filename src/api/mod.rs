//! API service modules for Wealthsimple endpoints.
//!
//! Each service wraps one REST resource. Requests and responses are passed
//! through as JSON without validation; authenticated calls take the caller's
//! [`TokenPair`](crate::TokenPair).

mod accounts;
mod bank_accounts;
mod daily_values;
mod deposits;
mod people;
mod positions;
mod projections;
mod transactions;
mod users;

pub use accounts::AccountsService;
pub use bank_accounts::BankAccountsService;
pub use daily_values::DailyValuesService;
pub use deposits::DepositsService;
pub use people::PeopleService;
pub use positions::PositionsService;
pub use projections::ProjectionsService;
pub use transactions::TransactionsService;
pub use users::UsersService;
