use crate::error::Error;
use crate::events::{MaxTicketsUpdatedEvent, TicketCostUpdatedEvent};
use crate::storage::Storage;
use crate::validation;
use soroban_sdk::{Address, Env, Symbol};

pub struct Admin;

impl Admin {
    /// Initialize contract with admin, settlement token and round parameters
    pub fn initialize(
        env: &Env,
        admin: &Address,
        token: &Address,
        ticket_cost: i128,
        max_tickets: u32,
    ) -> Result<(), Error> {
        if Storage::has_admin(env) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();

        validation::check_ticket_cost(ticket_cost)?;
        validation::check_capacity(max_tickets)?;

        Storage::set_admin(env, admin);
        Storage::set_token(env, token);
        Storage::set_ticket_cost(env, ticket_cost);
        Storage::set_max_tickets(env, max_tickets);
        Storage::set_tickets_available(env, max_tickets);

        Ok(())
    }

    /// Replace the per-ticket price (admin only, no round in progress)
    pub fn update_ticket_cost(env: &Env, admin: &Address, new_cost: i128) -> Result<(), Error> {
        Self::require_admin(env, admin)?;
        validation::check_round_open(env)?;
        validation::check_ticket_cost(new_cost)?;

        Storage::set_ticket_cost(env, new_cost);

        env.events().publish(
            (Symbol::new(env, "cost_updated"),),
            TicketCostUpdatedEvent { new_cost },
        );

        Ok(())
    }

    /// Replace the round capacity and reset availability to it
    /// (admin only, no round in progress)
    pub fn update_max_tickets(env: &Env, admin: &Address, new_max: u32) -> Result<(), Error> {
        Self::require_admin(env, admin)?;
        validation::check_round_open(env)?;
        validation::check_capacity(new_max)?;

        Storage::set_max_tickets(env, new_max);
        Storage::set_tickets_available(env, new_max);

        env.events().publish(
            (Symbol::new(env, "capacity_updated"),),
            MaxTicketsUpdatedEvent { new_max },
        );

        Ok(())
    }

    fn require_admin(env: &Env, admin: &Address) -> Result<(), Error> {
        let stored_admin = Storage::get_admin(env)?;

        admin.require_auth();
        if admin != &stored_admin {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }
}
