// Behavioral Patterns
// How objects hand work to each other:
// - chain: tickets escalate through an ordered list of support levels
// - observer: a weather station broadcasts samples to subscribed displays
// - strategy: a cart swaps payment algorithms at runtime

pub mod chain;
pub mod observer;
pub mod strategy;

pub use chain::{SupportChain, SupportLevel, SupportTicket, TicketOutcome, TicketPriority};
pub use observer::{DisplayKind, WeatherSample, WeatherStation};
pub use strategy::{PaymentMethod, PaymentReceipt, ShoppingCart};
