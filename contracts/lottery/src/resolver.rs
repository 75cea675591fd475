use crate::error::Error;
use crate::events::RoundEndedEvent;
use crate::storage::Storage;
use soroban_sdk::{token, Address, Env, Symbol};

pub struct Resolver;

impl Resolver {
    /// Draw a winner for a fully sold round, pay out the pooled balance and
    /// reopen a fresh round. Callable by anyone.
    pub fn end_game(env: &Env) -> Result<Address, Error> {
        let available = Storage::get_tickets_available(env)?;
        if available != 0 {
            return Err(Error::RoundNotComplete);
        }

        let max_tickets = Storage::get_max_tickets(env)?;
        let players = Storage::get_players(env);

        let index = winner_index(env.ledger().timestamp(), max_tickets);
        // A sold-out round holds exactly max_tickets ledger entries.
        let winner = players.get(index).expect("ticket ledger incomplete");

        // Pay the entire pooled balance to the winner.
        let token_addr = Storage::get_token(env)?;
        let token_client = token::Client::new(env, &token_addr);
        let payout = token_client.balance(&env.current_contract_address());
        token_client.transfer(&env.current_contract_address(), &winner, &payout);

        // Reset the round.
        Storage::clear_players(env);
        Storage::set_tickets_available(env, max_tickets);

        env.events().publish(
            (Symbol::new(env, "round_ended"), winner.clone()),
            RoundEndedEvent {
                winner: winner.clone(),
                winner_index: index,
                payout,
            },
        );

        Ok(winner)
    }
}

/// Draw rule: ledger time modulo round capacity.
///
/// Deterministic and predictable to whoever influences block timing; not a
/// strong randomness source. Kept as a separate seam so a verifiable
/// randomness provider could replace it.
pub fn winner_index(now: u64, max_tickets: u32) -> u32 {
    (now % max_tickets as u64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winner_index_wraps_by_capacity() {
        assert_eq!(winner_index(0, 5), 0);
        assert_eq!(winner_index(4, 5), 4);
        assert_eq!(winner_index(5, 5), 0);
        assert_eq!(winner_index(7, 5), 2);
    }

    #[test]
    fn test_winner_index_single_ticket_round() {
        assert_eq!(winner_index(1_700_000_000, 1), 0);
    }

    #[test]
    fn test_winner_index_large_timestamp() {
        assert_eq!(winner_index(u64::MAX, 10), (u64::MAX % 10) as u32);
    }
}
