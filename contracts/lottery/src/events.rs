use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Debug)]
pub struct TicketsSoldEvent {
    pub buyer: Address,
    pub count: u32,
    pub total_cost: i128,
    pub refund: i128,
    pub tickets_remaining: u32,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct TicketCostUpdatedEvent {
    pub new_cost: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct MaxTicketsUpdatedEvent {
    pub new_max: u32,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct RoundEndedEvent {
    pub winner: Address,
    pub winner_index: u32,
    pub payout: i128,
}
