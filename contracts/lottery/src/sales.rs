use crate::error::Error;
use crate::events::TicketsSoldEvent;
use crate::storage::Storage;
use crate::validation;
use soroban_sdk::{token, Address, Env, Symbol};

pub struct Sales;

impl Sales {
    /// Sell `n` tickets to `buyer` against `payment` units of the settlement
    /// token. Overpayment is returned to the buyer in the same invocation.
    ///
    /// Any identity may buy, including the admin.
    pub fn buy_tickets(env: &Env, buyer: &Address, n: u32, payment: i128) -> Result<(), Error> {
        buyer.require_auth();

        if n == 0 {
            return Err(Error::InvalidParameter);
        }

        let available = Storage::get_tickets_available(env)?;
        let cost = Storage::get_ticket_cost(env)?;

        // Preconditions, in order; nothing is written until all pass.
        if available == 0 {
            return Err(Error::SoldOut);
        }

        let total = validation::total_cost(n, cost)?;
        if payment < total {
            return Err(Error::InsufficientPayment);
        }

        if n > available {
            return Err(Error::ExceedsSupply);
        }

        // Collect the full payment, then return the change.
        let token_addr = Storage::get_token(env)?;
        let token_client = token::Client::new(env, &token_addr);
        token_client.transfer(buyer, &env.current_contract_address(), &payment);

        let refund = payment - total;
        if refund > 0 {
            token_client.transfer(&env.current_contract_address(), buyer, &refund);
        }

        // Append one ledger entry per ticket, next free index first.
        let mut players = Storage::get_players(env);
        for _ in 0..n {
            players.push_back(buyer.clone());
        }
        Storage::set_players(env, &players);

        let remaining = available - n;
        Storage::set_tickets_available(env, remaining);

        env.events().publish(
            (Symbol::new(env, "tickets_sold"), buyer.clone()),
            TicketsSoldEvent {
                buyer: buyer.clone(),
                count: n,
                total_cost: total,
                refund,
                tickets_remaining: remaining,
            },
        );

        Ok(())
    }
}
