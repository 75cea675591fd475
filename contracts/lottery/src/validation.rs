use crate::error::Error;
use crate::storage::Storage;
use soroban_sdk::Env;

/// Configuration is only open while no ticket of the current round is sold.
pub fn check_round_open(env: &Env) -> Result<(), Error> {
    let available = Storage::get_tickets_available(env)?;
    let max = Storage::get_max_tickets(env)?;
    if available != max {
        return Err(Error::RoundInProgress);
    }
    Ok(())
}

pub fn check_ticket_cost(cost: i128) -> Result<(), Error> {
    if cost <= 0 {
        return Err(Error::InvalidParameter);
    }
    Ok(())
}

pub fn check_capacity(max_tickets: u32) -> Result<(), Error> {
    if max_tickets == 0 {
        return Err(Error::InvalidParameter);
    }
    Ok(())
}

/// Total price of `n` tickets at `ticket_cost` each.
pub fn total_cost(n: u32, ticket_cost: i128) -> Result<i128, Error> {
    (n as i128).checked_mul(ticket_cost).ok_or(Error::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_cost() {
        assert_eq!(total_cost(3, 5), Ok(15));
        assert_eq!(total_cost(0, 5), Ok(0));
        assert_eq!(total_cost(1, i128::MAX), Ok(i128::MAX));
    }

    #[test]
    fn test_total_cost_overflow() {
        assert_eq!(total_cost(2, i128::MAX), Err(Error::Overflow));
    }

    #[test]
    fn test_check_ticket_cost() {
        assert_eq!(check_ticket_cost(1), Ok(()));
        assert_eq!(check_ticket_cost(0), Err(Error::InvalidParameter));
        assert_eq!(check_ticket_cost(-5), Err(Error::InvalidParameter));
    }

    #[test]
    fn test_check_capacity() {
        assert_eq!(check_capacity(5), Ok(()));
        assert_eq!(check_capacity(0), Err(Error::InvalidParameter));
    }
}
