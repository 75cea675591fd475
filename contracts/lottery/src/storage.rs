use crate::error::Error;
use soroban_sdk::{contracttype, Address, Env, Vec};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Token,
    TicketCost,
    MaxTickets,
    TicketsAvailable,
    Players, // ticket index -> owner, append-only within a round
}

pub struct Storage;

impl Storage {
    // Admin
    pub fn has_admin(env: &Env) -> bool {
        env.storage().instance().has(&DataKey::Admin)
    }

    pub fn get_admin(env: &Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(Error::NotInitialized)
    }

    pub fn set_admin(env: &Env, admin: &Address) {
        env.storage().instance().set(&DataKey::Admin, admin);
    }

    // Settlement token
    pub fn get_token(env: &Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Token)
            .ok_or(Error::NotInitialized)
    }

    pub fn set_token(env: &Env, token: &Address) {
        env.storage().instance().set(&DataKey::Token, token);
    }

    // Round configuration
    pub fn get_ticket_cost(env: &Env) -> Result<i128, Error> {
        env.storage()
            .instance()
            .get(&DataKey::TicketCost)
            .ok_or(Error::NotInitialized)
    }

    pub fn set_ticket_cost(env: &Env, cost: i128) {
        env.storage().instance().set(&DataKey::TicketCost, &cost);
    }

    pub fn get_max_tickets(env: &Env) -> Result<u32, Error> {
        env.storage()
            .instance()
            .get(&DataKey::MaxTickets)
            .ok_or(Error::NotInitialized)
    }

    pub fn set_max_tickets(env: &Env, max: u32) {
        env.storage().instance().set(&DataKey::MaxTickets, &max);
    }

    // Round state
    pub fn get_tickets_available(env: &Env) -> Result<u32, Error> {
        env.storage()
            .instance()
            .get(&DataKey::TicketsAvailable)
            .ok_or(Error::NotInitialized)
    }

    pub fn set_tickets_available(env: &Env, available: u32) {
        env.storage()
            .instance()
            .set(&DataKey::TicketsAvailable, &available);
    }

    // Ticket ledger
    pub fn get_players(env: &Env) -> Vec<Address> {
        env.storage()
            .persistent()
            .get(&DataKey::Players)
            .unwrap_or_else(|| Vec::new(env))
    }

    pub fn set_players(env: &Env, players: &Vec<Address>) {
        env.storage().persistent().set(&DataKey::Players, players);
    }

    pub fn clear_players(env: &Env) {
        env.storage()
            .persistent()
            .set(&DataKey::Players, &Vec::<Address>::new(env));
    }
}
