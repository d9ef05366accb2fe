// 🎫 Support Escalation Chain
// Tickets climb an ordered list of support levels until one resolves them

use serde::{Deserialize, Serialize};

// ============================================================================
// TICKET
// ============================================================================

/// Priority attached to a ticket when it is filed. Drives which support
/// level takes ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketPriority {
    Low,
    Medium,
    High,
    Critical,
}

impl TicketPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketPriority::Low => "Low",
            TicketPriority::Medium => "Medium",
            TicketPriority::High => "High",
            TicketPriority::Critical => "Critical",
        }
    }
}

/// Immutable value describing one support request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportTicket {
    pub description: String,
    pub priority: TicketPriority,
}

impl SupportTicket {
    pub fn new(description: &str, priority: TicketPriority) -> Self {
        SupportTicket {
            description: description.to_string(),
            priority,
        }
    }
}

// ============================================================================
// SUPPORT LEVELS
// ============================================================================

/// One link in the escalation chain. A level either resolves a ticket or
/// explicitly hands it to the next level; it never drops one silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SupportLevel {
    LowLevel,
    MediumLevel,
    HighLevel,
    Manager,
}

impl SupportLevel {
    pub fn name(&self) -> &'static str {
        match self {
            SupportLevel::LowLevel => "Low Level Support",
            SupportLevel::MediumLevel => "Medium Level Support",
            SupportLevel::HighLevel => "High Level Support",
            SupportLevel::Manager => "Manager",
        }
    }

    /// The single priority this level takes ownership of.
    fn resolves(&self, priority: TicketPriority) -> bool {
        matches!(
            (self, priority),
            (SupportLevel::LowLevel, TicketPriority::Low)
                | (SupportLevel::MediumLevel, TicketPriority::Medium)
                | (SupportLevel::HighLevel, TicketPriority::High)
                | (SupportLevel::Manager, TicketPriority::Critical)
        )
    }

    fn resolution_line(&self) -> &'static str {
        match self {
            SupportLevel::LowLevel => "Ticket resolved (password reset, basic questions)",
            SupportLevel::MediumLevel => "Ticket resolved (software installation, configuration)",
            SupportLevel::HighLevel => "Ticket resolved (server issues, complex problems)",
            SupportLevel::Manager => "Critical ticket handled (database corruption, system failure)",
        }
    }
}

// ============================================================================
// CHAIN
// ============================================================================

/// How a traversal ended. `Unhandled` is a reportable outcome, not an error:
/// a chain with no matching level says so and moves on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketOutcome {
    Resolved {
        level: SupportLevel,
        levels_consulted: usize,
    },
    Unhandled,
}

/// Ordered list of support levels. Configured once before any ticket is
/// processed; traversal is a plain front-to-back walk, so cycles cannot occur.
#[derive(Debug, Clone)]
pub struct SupportChain {
    levels: Vec<SupportLevel>,
}

impl SupportChain {
    /// The standard escalation path: Low → Medium → High → Manager.
    pub fn standard() -> Self {
        SupportChain {
            levels: vec![
                SupportLevel::LowLevel,
                SupportLevel::MediumLevel,
                SupportLevel::HighLevel,
                SupportLevel::Manager,
            ],
        }
    }

    /// Custom escalation path, mostly useful for shorter chains.
    pub fn with_levels(levels: Vec<SupportLevel>) -> Self {
        SupportChain { levels }
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Walk the chain until a level resolves the ticket. Traversal stops at
    /// the resolving level; levels after it are never consulted.
    pub fn handle(&self, ticket: &SupportTicket) -> TicketOutcome {
        for (position, level) in self.levels.iter().enumerate() {
            if level.resolves(ticket.priority) {
                println!("   ✅ {}: {}", level.name(), level.resolution_line());
                if *level == SupportLevel::Manager {
                    println!("   🚨 Initiating emergency procedures and team mobilization");
                }
                return TicketOutcome::Resolved {
                    level: *level,
                    levels_consulted: position + 1,
                };
            }
            if position + 1 < self.levels.len() {
                println!("   🔄 {}: Escalating to next level", level.name());
            } else {
                println!("   ❌ {}: Unable to handle ticket", level.name());
            }
        }
        TicketOutcome::Unhandled
    }
}

// ============================================================================
// DEMO
// ============================================================================

/// Console walkthrough: four tickets, one per priority, fed through the
/// standard chain.
pub fn run() -> anyhow::Result<()> {
    println!("   Demonstrating Chain of Responsibility Pattern...");

    let chain = SupportChain::standard();

    let tickets = [
        SupportTicket::new("Password reset", TicketPriority::Low),
        SupportTicket::new("Software installation", TicketPriority::Medium),
        SupportTicket::new("Server down", TicketPriority::High),
        SupportTicket::new("Database corruption", TicketPriority::Critical),
    ];

    for ticket in &tickets {
        println!(
            "   Processing ticket: {} (Priority: {})",
            ticket.description,
            ticket.priority.as_str()
        );
        chain.handle(ticket);
        println!();
    }

    Ok(())
}
