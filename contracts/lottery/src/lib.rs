#![no_std]

mod admin;
mod error;
mod events;
mod resolver;
mod sales;
mod storage;
mod validation;

use admin::Admin;
use error::Error;
use resolver::Resolver;
use sales::Sales;
use storage::Storage;

use soroban_sdk::{contract, contractimpl, Address, Env};

#[contract]
pub struct Lottery;

#[contractimpl]
impl Lottery {
    // ============================================
    // INITIALIZATION & ADMIN
    // ============================================

    /// Initialize the lottery with its admin, settlement token and the
    /// opening round parameters
    ///
    /// # Errors
    /// - `AlreadyInitialized`: Contract already initialized
    /// - `InvalidParameter`: `ticket_cost` not positive or `max_tickets` zero
    pub fn initialize(
        env: Env,
        admin: Address,
        token: Address,
        ticket_cost: i128,
        max_tickets: u32,
    ) -> Result<(), Error> {
        Admin::initialize(&env, &admin, &token, ticket_cost, max_tickets)
    }

    /// Update the price of a single ticket (admin only, between rounds)
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not the admin
    /// - `RoundInProgress`: Tickets of the current round already sold
    /// - `InvalidParameter`: `new_cost` not positive
    pub fn update_ticket_cost(env: Env, admin: Address, new_cost: i128) -> Result<(), Error> {
        Admin::update_ticket_cost(&env, &admin, new_cost)
    }

    /// Update the round capacity (admin only, between rounds). Also resets
    /// `tickets_available` to the new capacity.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not the admin
    /// - `RoundInProgress`: Tickets of the current round already sold
    /// - `InvalidParameter`: `new_max` is zero
    pub fn update_max_tickets(env: Env, admin: Address, new_max: u32) -> Result<(), Error> {
        Admin::update_max_tickets(&env, &admin, new_max)
    }

    // ============================================
    // TICKET SALE
    // ============================================

    /// Buy `n` tickets, paying `payment` units of the settlement token.
    /// Overpayment beyond `n * ticket_cost` is refunded to the buyer.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `InvalidParameter`: `n` is zero
    /// - `SoldOut`: No tickets left in the current round
    /// - `InsufficientPayment`: `payment` below `n * ticket_cost`
    /// - `ExceedsSupply`: `n` above the remaining supply
    pub fn buy_tickets(env: Env, buyer: Address, n: u32, payment: i128) -> Result<(), Error> {
        Sales::buy_tickets(&env, &buyer, n, payment)
    }

    // ============================================
    // ROUND RESOLUTION
    // ============================================

    /// End a fully sold round: draw the winner from the ledger time, pay out
    /// the entire pooled balance and reopen a fresh round. Callable by anyone.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `RoundNotComplete`: Round still has unsold tickets
    pub fn end_game(env: Env) -> Result<Address, Error> {
        Resolver::end_game(&env)
    }

    // ============================================
    // VIEW FUNCTIONS
    // ============================================

    /// Get the admin address
    pub fn get_admin(env: Env) -> Result<Address, Error> {
        Storage::get_admin(&env)
    }

    /// Get the current price of a single ticket
    pub fn ticket_cost(env: Env) -> Result<i128, Error> {
        Storage::get_ticket_cost(&env)
    }

    /// Get the capacity of a round
    pub fn max_tickets(env: Env) -> Result<u32, Error> {
        Storage::get_max_tickets(&env)
    }

    /// Get the remaining supply of the current round
    pub fn tickets_available(env: Env) -> Result<u32, Error> {
        Storage::get_tickets_available(&env)
    }

    /// Get the number of tickets sold in the current round
    pub fn tickets_sold(env: Env) -> u32 {
        Storage::get_players(&env).len()
    }

    /// Get the recorded owner of a ticket index in the current round
    pub fn ticket_owner(env: Env, index: u32) -> Option<Address> {
        Storage::get_players(&env).get(index)
    }
}
